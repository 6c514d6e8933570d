//!
//! Test identifier encoded in the benchmark directory name.
//!

use std::path::Component;
use std::path::Path;

use crate::input::error::Error as InputError;

///
/// Test identifier of the form `<implementation>-<size>[-...]`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The implementation token, that is the first dash-separated token.
    pub implementation: String,
    /// The input size, that is the second dash-separated token.
    pub size: usize,
}

impl Identifier {
    /// The test identifier token separator.
    pub const SEPARATOR: char = '-';

    ///
    /// Derives the identifier from the first directory component of `path` under `root`.
    ///
    pub fn from_path(root: &Path, path: &Path) -> Result<Self, InputError> {
        let relative = path
            .strip_prefix(root)
            .map_err(|_| InputError::Identifier {
                path: path.to_path_buf(),
            })?;
        let mut components = relative.components();
        let directory = match (components.next(), components.next()) {
            (Some(Component::Normal(directory)), Some(_)) => directory,
            _ => {
                return Err(InputError::Identifier {
                    path: path.to_path_buf(),
                })
            }
        };
        let directory = directory.to_string_lossy();

        let mut tokens = directory.split(Self::SEPARATOR);
        let implementation = tokens.next().unwrap_or_default().to_owned();
        let size_token = tokens.next().unwrap_or_default();
        let size = match size_token.parse::<usize>() {
            Ok(size) if size > 0 => size,
            _ => {
                return Err(InputError::Size {
                    token: size_token.to_owned(),
                    path: path.to_path_buf(),
                })
            }
        };

        Ok(Self {
            implementation,
            size,
        })
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.implementation, Self::SEPARATOR, self.size)
    }
}
