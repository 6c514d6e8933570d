//!
//! Mean execution times of one implementation, keyed by input size.
//!

use std::collections::BTreeMap;

///
/// Mean execution times of one implementation, keyed by input size.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Series {
    /// Mean time in nanoseconds, keyed by input size.
    pub means: BTreeMap<usize, f64>,
}

impl Series {
    ///
    /// Records the mean time for `size`, returning the value it replaced.
    ///
    pub fn insert(&mut self, size: usize, mean: f64) -> Option<f64> {
        self.means.insert(size, mean)
    }

    ///
    /// Returns the mean time recorded for `size`.
    ///
    pub fn get(&self, size: usize) -> Option<f64> {
        self.means.get(&size).copied()
    }

    ///
    /// Whether a mean time is recorded for `size`.
    ///
    pub fn contains(&self, size: usize) -> bool {
        self.means.contains_key(&size)
    }

    ///
    /// The input sizes, in ascending order.
    ///
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.means.keys().copied()
    }

    ///
    /// The number of recorded sizes.
    ///
    pub fn len(&self) -> usize {
        self.means.len()
    }

    ///
    /// Whether no size is recorded.
    ///
    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }
}

impl FromIterator<(usize, f64)> for Series {
    fn from_iter<I: IntoIterator<Item = (usize, f64)>>(iter: I) -> Self {
        Self {
            means: iter.into_iter().collect(),
        }
    }
}
