//! A single tunable axis with ordered candidate values.

use serde::{Deserialize, Serialize};

use crate::space::ParamSpace;
use crate::value::ParamValue;

/// One candidate value on a dimension, optionally unlocking a nested
/// sub-space of conditional parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    value: ParamValue,
    nested: Option<ParamSpace>,
}

impl Candidate {
    /// Return the candidate value.
    #[must_use]
    pub fn value(&self) -> &ParamValue {
        &self.value
    }

    /// Return the nested space unlocked by this candidate, if any.
    #[must_use]
    pub fn nested(&self) -> Option<&ParamSpace> {
        self.nested.as_ref()
    }

    /// Number of distinct assignments this candidate contributes: 1 for a
    /// plain value, the nested space's size otherwise.
    #[must_use]
    pub fn span(&self) -> usize {
        self.nested.as_ref().map_or(1, ParamSpace::size)
    }
}

/// A named tunable axis with an ordered sequence of candidate values.
///
/// Candidates may carry nested [`ParamSpace`]s for conditional parameters,
/// e.g. a "banded" window candidate unlocking a nested "radius" axis. An
/// empty candidate list is legal and gives the dimension cardinality 0,
/// which disables the enclosing product space (its size becomes 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDimension {
    name: String,
    candidates: Vec<Candidate>,
}

impl ParamDimension {
    /// Create a dimension over plain candidate values.
    pub fn new<N, I, V>(name: N, values: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<ParamValue>,
    {
        Self {
            name: name.into(),
            candidates: values
                .into_iter()
                .map(|v| Candidate {
                    value: v.into(),
                    nested: None,
                })
                .collect(),
        }
    }

    /// Append a candidate that unlocks a nested sub-space.
    #[must_use]
    pub fn with_conditional<V>(mut self, value: V, nested: ParamSpace) -> Self
    where
        V: Into<ParamValue>,
    {
        self.candidates.push(Candidate {
            value: value.into(),
            nested: Some(nested),
        });
        self
    }

    /// Return the dimension name (the flag configurations are keyed by).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the ordered candidates.
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Total number of distinct assignments along this axis: the sum of
    /// candidate spans, where a candidate with a nested space contributes
    /// that space's size instead of 1.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.candidates.iter().map(Candidate::span).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_cardinality_counts_candidates() {
        let dim = ParamDimension::new("penalty", [1.5, 2.0]);
        assert_eq!(dim.cardinality(), 2);
        assert_eq!(dim.name(), "penalty");
    }

    #[test]
    fn empty_dimension_has_cardinality_zero() {
        let dim = ParamDimension::new("penalty", Vec::<f64>::new());
        assert_eq!(dim.cardinality(), 0);
    }

    #[test]
    fn conditional_candidate_contributes_nested_size() {
        let radii = ParamSpace::product(vec![ParamDimension::new("radius", [1i64, 3, 5])]);
        let dim = ParamDimension::new("window", ["unconstrained"])
            .with_conditional("banded", radii);
        // 1 plain + 3 nested assignments
        assert_eq!(dim.cardinality(), 4);
        assert_eq!(dim.candidates().len(), 2);
        assert_eq!(dim.candidates()[1].span(), 3);
    }

    #[test]
    fn nested_empty_space_contributes_one() {
        // A nested product of zero dimensions has exactly one (empty) assignment.
        let dim = ParamDimension::new("window", Vec::<i64>::new())
            .with_conditional(0i64, ParamSpace::default());
        assert_eq!(dim.cardinality(), 1);
    }
}
