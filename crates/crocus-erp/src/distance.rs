//! ERP distance newtype wrapper.

use std::cmp::Ordering;
use std::fmt;

/// A non-negative accumulated ERP cost.
///
/// ERP reports the sum of squared edit penalties along the optimal
/// alignment; no square root is taken. [`ErpDistance::INFINITY`] is a
/// first-class pruned-result sentinel meaning "true distance at or above
/// the caller's limit", not a failure.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ErpDistance(f64);

impl ErpDistance {
    /// Infinite distance, returned when early abandoning prunes the
    /// computation.
    pub const INFINITY: Self = Self(f64::INFINITY);

    /// Create a new ERP distance from a raw value.
    pub(crate) fn new(value: f64) -> Self {
        Self(value)
    }

    /// Return the raw accumulated cost.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Return true if the computation was pruned by a limit.
    #[must_use]
    pub fn is_pruned(self) -> bool {
        self.0.is_infinite()
    }

    /// Total ordering comparison using [`f64::total_cmp`].
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for ErpDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}
