//! A concrete parameter assignment decoded from a space index.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ParamError;
use crate::value::ParamValue;

/// A concrete point in a search space: an ordered mapping from dimension
/// name to resolved values.
///
/// Entries appear in decode order. Each entry holds a list because nested
/// spaces may resolve further values under a flag that is already present;
/// for plain dimensions the list always has exactly one element. Produced
/// by [`IndexedParamSpace::get`][crate::IndexedParamSpace::get]; not meant
/// to be assembled by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParamSet {
    entries: Vec<(String, Vec<ParamValue>)>,
}

impl ParamSet {
    /// Create an empty assignment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resolved value. Appends to the existing entry when the name
    /// is already present, preserving first-seen entry order.
    pub fn insert<N: Into<String>>(&mut self, name: N, value: ParamValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((name, vec![value])),
        }
    }

    /// Return all values resolved under `name`, in resolution order.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[ParamValue]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values.as_slice())
    }

    /// Return the first value resolved under `name`.
    #[must_use]
    pub fn first(&self, name: &str) -> Option<&ParamValue> {
        self.get(name).and_then(<[ParamValue]>::first)
    }

    /// Look up `name` and require its first value to be a float.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`ParamError::MissingParam`] | `name` is absent |
    /// | [`ParamError::TypeMismatch`] | first value is not a [`ParamValue::Float`] |
    pub fn require_float(&self, name: &str) -> Result<f64, ParamError> {
        self.require(name)?
            .as_float()
            .ok_or_else(|| ParamError::TypeMismatch {
                name: name.to_owned(),
                expected: "float",
            })
    }

    /// Look up `name` and require its first value to be an integer.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`ParamError::MissingParam`] | `name` is absent |
    /// | [`ParamError::TypeMismatch`] | first value is not a [`ParamValue::Int`] |
    pub fn require_int(&self, name: &str) -> Result<i64, ParamError> {
        self.require(name)?
            .as_int()
            .ok_or_else(|| ParamError::TypeMismatch {
                name: name.to_owned(),
                expected: "int",
            })
    }

    /// Look up `name` and require its first value to be categorical.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`ParamError::MissingParam`] | `name` is absent |
    /// | [`ParamError::TypeMismatch`] | first value is not a [`ParamValue::Text`] |
    pub fn require_text(&self, name: &str) -> Result<&str, ParamError> {
        self.require(name)?
            .as_text()
            .ok_or_else(|| ParamError::TypeMismatch {
                name: name.to_owned(),
                expected: "text",
            })
    }

    fn require(&self, name: &str) -> Result<&ParamValue, ParamError> {
        self.first(name).ok_or_else(|| ParamError::MissingParam {
            name: name.to_owned(),
        })
    }

    /// Number of distinct flags in the assignment.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return true if no flags are resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, values)` entries in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ParamValue])> {
        self.entries
            .iter()
            .map(|(n, values)| (n.as_str(), values.as_slice()))
    }
}

impl fmt::Display for ParamSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for (name, values) in self.iter() {
            for value in values {
                write!(f, "{sep}{name}={value}")?;
                sep = ", ";
            }
        }
        Ok(())
    }
}
