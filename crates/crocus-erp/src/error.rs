//! Error types for sequence validation and ERP configuration.

use crocus_params::ParamError;

/// Errors from ERP distance computation and sequence validation.
///
/// A pruned distance is NOT an error: early abandoning reports
/// [`ErpDistance::INFINITY`][crate::ErpDistance::INFINITY] through the normal
/// return path.
#[derive(Debug, thiserror::Error)]
pub enum ElasticError {
    /// Returned when an empty slice is provided as a sequence.
    #[error("sequence must be non-empty")]
    EmptySequence,

    /// Returned when a sequence contains an infinite value. NaN is legal and
    /// marks a missing observation.
    #[error("sequence contains infinite value at index {index}")]
    InfiniteValue {
        /// Position of the first infinite value found.
        index: usize,
    },

    /// Wraps a parameter-assignment error raised while building an ERP
    /// configuration from a decoded grid point.
    #[error("invalid ERP configuration: {0}")]
    Config(#[from] ParamError),
}
