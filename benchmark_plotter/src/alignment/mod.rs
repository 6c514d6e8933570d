//!
//! Alignment of the series onto a common input size axis.
//!

pub mod error;
pub mod policy;

use crate::model::benchmark::Benchmark;
use crate::model::implementation::Implementation;

use self::error::Error as AlignmentError;
use self::policy::Policy;

///
/// The series projected onto a common, ascending input size axis.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Aligned {
    /// The common axis, in ascending order.
    pub sizes: Vec<usize>,
    /// One sequence of mean times per implementation, each as long as `sizes`.
    /// `None` marks a size the implementation was not measured at.
    pub series: Vec<(Implementation, Vec<Option<f64>>)>,
}

impl Aligned {
    ///
    /// Aligns the benchmark series according to `policy`.
    ///
    pub fn new(benchmark: &Benchmark, policy: Policy) -> Result<Self, AlignmentError> {
        let sizes = policy.axis(benchmark);

        let mut series = Vec::with_capacity(Implementation::ALL.len());
        for implementation in Implementation::ALL.into_iter() {
            let source = benchmark.series(implementation);
            let values: Vec<Option<f64>> = match policy {
                Policy::Union => sizes.iter().map(|size| source.get(*size)).collect(),
                Policy::Reference | Policy::Intersection => sizes
                    .iter()
                    .map(|size| {
                        source
                            .get(*size)
                            .map(Some)
                            .ok_or(AlignmentError::MissingSize {
                                implementation,
                                size: *size,
                            })
                    })
                    .collect::<Result<Vec<Option<f64>>, AlignmentError>>()?,
            };
            series.push((implementation, values));
        }

        Ok(Self { sizes, series })
    }

    ///
    /// Returns the aligned mean times of `implementation`.
    ///
    pub fn values(&self, implementation: Implementation) -> &[Option<f64>] {
        self.series
            .iter()
            .find(|(candidate, _)| *candidate == implementation)
            .map(|(_, values)| values.as_slice())
            .unwrap_or_default()
    }

    ///
    /// The largest mean time over all series.
    ///
    pub fn max_time(&self) -> Option<f64> {
        self.series
            .iter()
            .flat_map(|(_, values)| values.iter().flatten().copied())
            .reduce(f64::max)
    }

    ///
    /// Whether the common axis has no sizes.
    ///
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}
