//!
//! The benchmark representation.
//!

pub mod invalid_file_policy;

use std::path::Path;
use std::path::PathBuf;

use crate::input::error::Error as InputError;
use crate::input::Measurement;
use crate::model::implementation::Implementation;
use crate::model::series::Series;

pub use self::invalid_file_policy::InvalidFilePolicy;

///
/// The benchmark representation: one series per implementation.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Benchmark {
    /// The `rustfft` series.
    pub rustfft: Series,
    /// The FFTW series.
    pub fftw: Series,
    /// The `monarch` series.
    pub monarch: Series,
}

///
/// A measurement file left out of the benchmark.
///
#[derive(Debug)]
pub struct Skipped {
    /// The reason the file was skipped.
    pub error: InputError,
}

impl std::fmt::Display for Skipped {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}; the file is skipped", self.error)
    }
}

impl Benchmark {
    ///
    /// Reads every measurement file in `paths` and aggregates them into a benchmark.
    ///
    /// Unreadable files, empty ones included, either abort the aggregation
    /// or are skipped, depending on `policy`.
    ///
    pub fn collect<I>(
        root: &Path,
        paths: I,
        policy: InvalidFilePolicy,
    ) -> Result<(Self, Vec<Skipped>), InputError>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        paths.into_iter().try_fold(
            (Self::default(), Vec::new()),
            |(mut benchmark, mut skipped), path| {
                match Measurement::read(root, path.as_path()) {
                    Ok(measurement) => {
                        benchmark.extend(measurement);
                    }
                    Err(error) if policy == InvalidFilePolicy::Skip => {
                        skipped.push(Skipped { error })
                    }
                    Err(error) => return Err(error),
                }
                Ok((benchmark, skipped))
            },
        )
    }

    ///
    /// Files the measurement into the series of its implementation, replacing
    /// any earlier value for the same size.
    ///
    /// Returns `None` and leaves the benchmark intact if the implementation is unknown.
    ///
    pub fn extend(&mut self, measurement: Measurement) -> Option<Implementation> {
        let implementation =
            Implementation::classify(measurement.identifier.implementation.as_str())?;
        self.series_mut(implementation)
            .insert(measurement.identifier.size, measurement.mean);
        Some(implementation)
    }

    ///
    /// Returns the series of `implementation`.
    ///
    pub fn series(&self, implementation: Implementation) -> &Series {
        match implementation {
            Implementation::RustFFT => &self.rustfft,
            Implementation::FFTW => &self.fftw,
            Implementation::Monarch => &self.monarch,
        }
    }

    fn series_mut(&mut self, implementation: Implementation) -> &mut Series {
        match implementation {
            Implementation::RustFFT => &mut self.rustfft,
            Implementation::FFTW => &mut self.fftw,
            Implementation::Monarch => &mut self.monarch,
        }
    }

    ///
    /// Whether no measurement has been filed.
    ///
    pub fn is_empty(&self) -> bool {
        Implementation::ALL
            .into_iter()
            .all(|implementation| self.series(implementation).is_empty())
    }
}

impl FromIterator<Measurement> for Benchmark {
    fn from_iter<T: IntoIterator<Item = Measurement>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::default(), |mut benchmark, measurement| {
                benchmark.extend(measurement);
                benchmark
            })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::Benchmark;
    use crate::input::identifier::Identifier;
    use crate::input::Measurement;
    use crate::model::implementation::Implementation;

    fn measurement(implementation: &str, size: usize, mean: f64) -> Measurement {
        Measurement {
            path: PathBuf::from(format!("{implementation}-{size}/new/estimates.json")),
            identifier: Identifier {
                implementation: implementation.to_owned(),
                size,
            },
            mean,
        }
    }

    #[test]
    fn extend() {
        let mut benchmark = Benchmark::default();
        assert_eq!(
            benchmark.extend(measurement("rustfft", 8, 10.0)),
            Some(Implementation::RustFFT)
        );
        assert_eq!(
            benchmark.extend(measurement("fftw", 8, 9.0)),
            Some(Implementation::FFTW)
        );
        assert_eq!(
            benchmark.extend(measurement("monarch", 8, 5.0)),
            Some(Implementation::Monarch)
        );
        assert_eq!(benchmark.rustfft.get(8), Some(10.0));
        assert_eq!(benchmark.fftw.get(8), Some(9.0));
        assert_eq!(benchmark.monarch.get(8), Some(5.0));
    }

    #[test]
    fn extend_overwrites() {
        let benchmark: Benchmark = vec![
            measurement("rustfft", 16, 1.0),
            measurement("rustfft", 16, 2.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(benchmark.rustfft.len(), 1);
        assert_eq!(benchmark.rustfft.get(16), Some(2.0));
    }

    #[test]
    fn extend_unknown_is_discarded() {
        let mut benchmark = Benchmark::default();
        assert_eq!(benchmark.extend(measurement("baseline", 512, 1.0)), None);
        assert!(benchmark.is_empty());
    }

    #[test]
    fn extend_priority() {
        let benchmark: Benchmark = vec![measurement("fftwmonarch", 4, 3.0)]
            .into_iter()
            .collect();
        assert_eq!(benchmark.monarch.get(4), Some(3.0));
        assert!(benchmark.fftw.is_empty());
        assert!(benchmark.rustfft.is_empty());
    }
}
