//!
//! The benchmark plotter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark plotter arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses warnings and the summary table.
    #[arg(short, long)]
    pub quiet: bool,

    /// Input size axis: `reference` (sizes of `rustfft`), `intersection`, or `union`.
    #[arg(long, default_value_t = benchmark_plotter::AlignmentPolicy::Reference)]
    pub alignment: benchmark_plotter::AlignmentPolicy,

    /// Skips unreadable measurement files instead of aborting.
    #[arg(long)]
    pub skip_invalid: bool,

    /// Chart output file.
    #[arg(long, default_value = benchmark_plotter::DEFAULT_CHART_PATH)]
    pub output_path: PathBuf,
}

impl Arguments {
    ///
    /// The policy for measurement files that cannot be read.
    ///
    pub fn invalid_file_policy(&self) -> benchmark_plotter::InvalidFilePolicy {
        if self.skip_invalid {
            benchmark_plotter::InvalidFilePolicy::Skip
        } else {
            benchmark_plotter::InvalidFilePolicy::FailFast
        }
    }
}
