//!
//! Series alignment policy.
//!

use std::collections::BTreeSet;

use crate::model::benchmark::Benchmark;
use crate::model::implementation::Implementation;

///
/// Series alignment policy, deciding which input sizes make up the common axis.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// The sizes of the `rustfft` series. Every other series must cover all of them.
    #[default]
    Reference,
    /// The sizes measured for every implementation.
    Intersection,
    /// The sizes measured for any implementation. Unmeasured points are gaps.
    Union,
}

impl Policy {
    /// The series whose sizes make up the axis under [`Policy::Reference`].
    pub const REFERENCE_IMPLEMENTATION: Implementation = Implementation::RustFFT;

    ///
    /// Computes the common axis, in ascending order.
    ///
    pub fn axis(&self, benchmark: &Benchmark) -> Vec<usize> {
        match self {
            Self::Reference => benchmark
                .series(Self::REFERENCE_IMPLEMENTATION)
                .sizes()
                .collect(),
            Self::Intersection => benchmark
                .rustfft
                .sizes()
                .filter(|size| {
                    benchmark.fftw.contains(*size) && benchmark.monarch.contains(*size)
                })
                .collect(),
            Self::Union => Implementation::ALL
                .into_iter()
                .flat_map(|implementation| benchmark.series(implementation).sizes())
                .collect::<BTreeSet<usize>>()
                .into_iter()
                .collect(),
        }
    }
}

impl std::str::FromStr for Policy {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "reference" => Ok(Self::Reference),
            "intersection" => Ok(Self::Intersection),
            "union" => Ok(Self::Union),
            string => anyhow::bail!(
                "Unknown alignment policy `{string}`. Supported values: {}",
                [Self::Reference, Self::Intersection, Self::Union]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reference => write!(f, "reference"),
            Self::Intersection => write!(f, "intersection"),
            Self::Union => write!(f, "union"),
        }
    }
}
