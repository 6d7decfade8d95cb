//! Tagged parameter value type.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A single candidate value on a tunable axis.
///
/// Floats compare and hash by their IEEE-754 bit pattern so that decoded
/// configurations are `Eq + Hash` and can be collected into sets. Two NaNs
/// with different payloads are therefore distinct values; grids built from
/// literals never produce NaN candidates, so this does not matter in practice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ParamValue {
    /// Integer-valued candidate (window sizes, neighborhood counts).
    Int(i64),
    /// Real-valued candidate (penalties, weights).
    Float(f64),
    /// On/off candidate.
    Bool(bool),
    /// Categorical candidate (strategy names).
    Text(String),
}

impl ParamValue {
    /// Return the integer value, if this is an [`ParamValue::Int`].
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Return the float value, if this is a [`ParamValue::Float`].
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Return the boolean value, if this is a [`ParamValue::Bool`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Return the categorical value, if this is a [`ParamValue::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl PartialEq for ParamValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ParamValue {}

impl Hash for ParamValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Self::Int(v) => v.hash(state),
            Self::Float(v) => v.to_bits().hash(state),
            Self::Bool(v) => v.hash(state),
            Self::Text(v) => v.hash(state),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn accessors_match_variant() {
        assert_eq!(ParamValue::Int(3).as_int(), Some(3));
        assert_eq!(ParamValue::Float(1.5).as_float(), Some(1.5));
        assert_eq!(ParamValue::Bool(true).as_bool(), Some(true));
        assert_eq!(ParamValue::Text("dtw".into()).as_text(), Some("dtw"));
        assert_eq!(ParamValue::Int(3).as_float(), None);
    }

    #[test]
    fn float_equality_is_bitwise() {
        assert_eq!(ParamValue::Float(1.5), ParamValue::Float(1.5));
        assert_ne!(ParamValue::Float(0.0), ParamValue::Float(-0.0));
    }

    #[test]
    fn cross_variant_never_equal() {
        assert_ne!(ParamValue::Int(1), ParamValue::Float(1.0));
        assert_ne!(ParamValue::Bool(true), ParamValue::Int(1));
    }

    #[test]
    fn hashes_distinguish_variants() {
        let set: HashSet<ParamValue> = [
            ParamValue::Int(1),
            ParamValue::Float(1.0),
            ParamValue::Bool(true),
            ParamValue::Text("1".into()),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn display_formats() {
        assert_eq!(format!("{}", ParamValue::Float(1.5)), "1.5");
        assert_eq!(format!("{}", ParamValue::Int(-1)), "-1");
        assert_eq!(format!("{}", ParamValue::Text("erp".into())), "erp");
    }
}
