//!
//! Benchmark input: discovery and reading of measurement files.
//!

pub mod error;
pub mod estimates;
pub mod identifier;

use std::path::Path;
use std::path::PathBuf;

use self::error::Error as InputError;
use self::estimates::Estimates;
use self::identifier::Identifier;

///
/// Lazily yields every measurement file at any depth under `root`, in alphabetical order.
///
/// A missing root or unreadable directories yield nothing.
///
pub fn locate(root: &Path) -> anyhow::Result<impl Iterator<Item = PathBuf>> {
    let resolution_pattern = format!(
        "{}/**/{}",
        glob::Pattern::escape(root.to_string_lossy().as_ref()),
        crate::MEASUREMENT_FILE_NAME
    );
    let paths = glob::glob(resolution_pattern.as_str())?
        .filter_map(Result::ok)
        .filter(|path| path.is_file());
    Ok(paths)
}

///
/// A single measurement read from a measurement file.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// The measurement file path.
    pub path: PathBuf,
    /// The test identifier derived from the path.
    pub identifier: Identifier,
    /// The mean execution time point estimate, in nanoseconds.
    pub mean: f64,
}

impl Measurement {
    ///
    /// Reads the measurement file at `path`, located under the results `root`.
    ///
    pub fn read(root: &Path, path: &Path) -> Result<Self, InputError> {
        let identifier = Identifier::from_path(root, path)?;
        let estimates = Estimates::try_from(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            identifier,
            mean: estimates.mean(),
        })
    }
}
