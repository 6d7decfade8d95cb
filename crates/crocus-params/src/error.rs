//! Error types for search-space indexing and grid iteration.

/// Errors from parameter-space indexing, decoding, and grid iteration.
#[derive(Debug, thiserror::Error)]
pub enum ParamError {
    /// Returned when a configuration index falls outside `[0, size())`.
    #[error("configuration index {index} out of range for space of size {size}")]
    IndexOutOfRange {
        /// The requested configuration index.
        index: usize,
        /// The total number of configurations in the space.
        size: usize,
    },

    /// Returned when `next_set` is called on an exhausted grid cursor.
    #[error("grid search exhausted after {position} configurations")]
    Exhausted {
        /// Cursor position at the time of the call.
        position: usize,
    },

    /// Returned when a named parameter is absent from an assignment.
    #[error("parameter `{name}` missing from assignment")]
    MissingParam {
        /// The flag that was looked up.
        name: String,
    },

    /// Returned when a parameter holds a value of an unexpected type.
    #[error("parameter `{name}` has unexpected type, expected {expected}")]
    TypeMismatch {
        /// The flag that was looked up.
        name: String,
        /// Human-readable name of the expected type.
        expected: &'static str,
    },
}
