//!
//! The benchmark plotter binary.
//!

pub(crate) mod arguments;

use std::path::Path;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;

    let root = Path::new(benchmark_plotter::RESULTS_ROOT);
    let paths = benchmark_plotter::input::locate(root)?;
    let (benchmark, skipped) =
        benchmark_plotter::Benchmark::collect(root, paths, arguments.invalid_file_policy())?;
    if !arguments.quiet {
        for skipped in skipped.iter() {
            eprintln!("{} {skipped}", "Warning:".bright_yellow());
        }
        if benchmark.is_empty() {
            eprintln!(
                "{} No measurements found under {root:?}.",
                "Warning:".bright_yellow()
            );
        }
    }

    let aligned = benchmark_plotter::Aligned::new(&benchmark, arguments.alignment)?;
    if !arguments.quiet {
        benchmark_plotter::Summary::new(&aligned).print()?;
    }

    benchmark_plotter::Chart::new(&aligned).render(arguments.output_path.as_path())?;
    println!(
        "{} {:?}",
        "Chart written to".bright_green(),
        arguments.output_path
    );

    Ok(())
}
