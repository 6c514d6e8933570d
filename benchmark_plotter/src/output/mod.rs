//!
//! Benchmark plotter output.
//!

pub mod chart;
pub mod summary;
