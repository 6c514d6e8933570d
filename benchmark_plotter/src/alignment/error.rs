//!
//! Series alignment error.
//!

use crate::model::implementation::Implementation;

///
/// Series alignment error.
///
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A size on the aligned axis has no measurement in some series.
    #[error("Series `{implementation}` has no measurement for size {size}")]
    MissingSize {
        /// The series lacking the measurement.
        implementation: Implementation,
        /// The input size.
        size: usize,
    },
}
