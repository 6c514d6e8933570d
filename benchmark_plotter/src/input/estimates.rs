//!
//! Criterion estimates of a single benchmark.
//!

use std::path::Path;

use crate::input::error::Error as InputError;

///
/// Criterion estimates of a single benchmark.
///
/// Only the mean is consumed; the remaining statistics are ignored.
///
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Estimates {
    /// The mean execution time.
    pub mean: Statistic,
}

///
/// A single estimated statistic.
///
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Statistic {
    /// The point estimate, in nanoseconds.
    pub point_estimate: f64,
}

impl Estimates {
    ///
    /// Parses the estimates from the text of the measurement file at `path`.
    ///
    pub fn from_str_at(text: &str, path: &Path) -> Result<Self, InputError> {
        if text.trim().is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|error| InputError::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        serde_json::from_value(value).map_err(|error| InputError::Schema {
            error,
            path: path.to_path_buf(),
        })
    }

    ///
    /// The mean execution time point estimate.
    ///
    pub fn mean(&self) -> f64 {
        self.mean.point_estimate
    }
}

impl TryFrom<&Path> for Estimates {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        Self::from_str_at(text.as_str(), path)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::Estimates;
    use crate::input::error::Error as InputError;

    const CRITERION_ESTIMATES: &str = r#"{
        "mean": {
            "confidence_interval": { "confidence_level": 0.95, "lower_bound": 119.9, "upper_bound": 121.2 },
            "point_estimate": 120.5,
            "standard_error": 0.33
        },
        "median": {
            "confidence_interval": { "confidence_level": 0.95, "lower_bound": 118.0, "upper_bound": 120.0 },
            "point_estimate": 119.1,
            "standard_error": 0.41
        },
        "median_abs_dev": null,
        "slope": null,
        "std_dev": null
    }"#;

    #[test]
    fn ok() {
        let estimates = Estimates::from_str_at(CRITERION_ESTIMATES, Path::new("estimates.json"))
            .expect("Always valid");
        assert_eq!(estimates.mean(), 120.5);
    }

    #[test]
    fn integer_point_estimate() {
        let estimates = Estimates::from_str_at(
            r#"{ "mean": { "point_estimate": 80 } }"#,
            Path::new("estimates.json"),
        )
        .expect("Always valid");
        assert_eq!(estimates.mean(), 80.0);
    }

    #[test]
    fn error_parsing() {
        let result = Estimates::from_str_at(r#"{ "mean": "#, Path::new("estimates.json"));
        assert!(matches!(result, Err(InputError::Parsing { .. })));
    }

    #[test]
    fn error_schema_missing_mean() {
        let result = Estimates::from_str_at(
            r#"{ "median": { "point_estimate": 1.0 } }"#,
            Path::new("estimates.json"),
        );
        assert!(matches!(result, Err(InputError::Schema { .. })));
    }

    #[test]
    fn error_schema_missing_point_estimate() {
        let result =
            Estimates::from_str_at(r#"{ "mean": { "standard_error": 1.0 } }"#, Path::new("x"));
        assert!(matches!(result, Err(InputError::Schema { .. })));
    }

    #[test]
    fn error_empty() {
        let result = Estimates::from_str_at("", Path::new("estimates.json"));
        assert!(matches!(result, Err(InputError::EmptyFile { .. })));
    }

    #[test]
    fn error_empty_whitespace() {
        let result = Estimates::from_str_at("\n", Path::new("estimates.json"));
        assert!(matches!(result, Err(InputError::EmptyFile { .. })));
    }
}
