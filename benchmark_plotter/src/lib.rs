//!
//! The benchmark plotter library.
//!

pub mod alignment;
pub mod input;
pub mod model;
pub mod output;

pub use crate::alignment::error::Error as AlignmentError;
pub use crate::alignment::policy::Policy as AlignmentPolicy;
pub use crate::alignment::Aligned;
pub use crate::input::error::Error as InputError;
pub use crate::input::estimates::Estimates;
pub use crate::input::identifier::Identifier as TestIdentifier;
pub use crate::input::Measurement;
pub use crate::model::benchmark::Benchmark;
pub use crate::model::benchmark::InvalidFilePolicy;
pub use crate::model::benchmark::Skipped;
pub use crate::model::implementation::Implementation;
pub use crate::model::series::Series;
pub use crate::output::chart::Chart;
pub use crate::output::summary::Summary;

/// The directory the benchmark harness writes its results to.
pub const RESULTS_ROOT: &str = "target/criterion";

/// The name of the file holding the statistics of a single benchmark.
pub const MEASUREMENT_FILE_NAME: &str = "estimates.json";

/// The default location of the rendered comparison chart.
pub const DEFAULT_CHART_PATH: &str = "target/criterion/fft_comparison.svg";
