//!
//! The benchmark data model.
//!

pub mod benchmark;
pub mod implementation;
pub mod series;
