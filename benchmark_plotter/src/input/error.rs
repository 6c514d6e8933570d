//!
//! Benchmark input error.
//!

use std::path::PathBuf;

///
/// Measurement file reading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the measurement file.
    #[error("Reading measurement file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the measurement file.
        path: PathBuf,
    },
    /// Empty file error.
    #[error("Measurement file {path:?} is empty")]
    EmptyFile {
        /// The path to the measurement file.
        path: PathBuf,
    },
    /// The measurement file is not valid JSON.
    #[error("Parsing measurement file {path:?}: {error}")]
    Parsing {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the measurement file.
        path: PathBuf,
    },
    /// The measurement file is valid JSON, but `mean.point_estimate` is missing or not a number.
    #[error("Measurement file {path:?} has no numeric `mean.point_estimate`: {error}")]
    Schema {
        /// The underlying deserialization error.
        error: serde_json::Error,
        /// The path to the measurement file.
        path: PathBuf,
    },
    /// The path does not contain a test identifier directory under the results root.
    #[error("Measurement file {path:?} is not located in a test directory")]
    Identifier {
        /// The path to the measurement file.
        path: PathBuf,
    },
    /// The size token of the test identifier is missing or not a positive integer.
    #[error("Measurement file {path:?} has an invalid input size `{token}`")]
    Size {
        /// The offending token, empty if there is none.
        token: String,
        /// The path to the measurement file.
        path: PathBuf,
    },
}

impl Error {
    ///
    /// Returns the path to the offending measurement file.
    ///
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Reading { path, .. }
            | Self::EmptyFile { path }
            | Self::Parsing { path, .. }
            | Self::Schema { path, .. }
            | Self::Identifier { path }
            | Self::Size { path, .. } => path.as_path(),
        }
    }
}
