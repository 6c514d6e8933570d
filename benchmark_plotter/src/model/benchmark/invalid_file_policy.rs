//!
//! The policy for measurement files that cannot be read.
//!

///
/// The policy for measurement files that cannot be read.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InvalidFilePolicy {
    /// The first invalid file aborts the aggregation.
    #[default]
    FailFast,
    /// Invalid files are reported and left out.
    Skip,
}
