//! Hyperparameter search-space model and deterministic grid enumeration.
//!
//! Declares nested, conditional parameter spaces ([`ParamSpace`]), compiles
//! them into a mixed-radix addressing scheme with O(1) index-to-configuration
//! decoding ([`IndexedParamSpace`]), and walks them sequentially
//! ([`GridSearch`]). Pure data and arithmetic, zero I/O.

mod dimension;
mod error;
mod grid;
mod indexed;
mod set;
mod space;
mod value;

pub use dimension::{Candidate, ParamDimension};
pub use error::ParamError;
pub use grid::GridSearch;
pub use indexed::IndexedParamSpace;
pub use set::ParamSet;
pub use space::ParamSpace;
pub use value::ParamValue;
