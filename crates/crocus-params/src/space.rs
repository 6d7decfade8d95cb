//! Declarative search-space tree: cartesian products and disjoint unions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dimension::ParamDimension;

/// A hyperparameter search space.
///
/// Either a cartesian product of independent dimensions or a disjoint union
/// of mutually exclusive alternative spaces. The two interpretations are
/// separate variants, so a space declaring both dimensions and alternatives
/// is unrepresentable. Nesting is unrestricted: dimension candidates may own
/// sub-spaces, and those sub-spaces may themselves be unions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamSpace {
    /// Cartesian product of independent dimensions. A product of zero
    /// dimensions has size 1: the single empty assignment.
    Product(Vec<ParamDimension>),
    /// Disjoint union of alternative spaces, enumerated in declaration
    /// order. A union of zero alternatives has size 0.
    Union(Vec<ParamSpace>),
}

impl ParamSpace {
    /// Create a product space over the given dimensions.
    #[must_use]
    pub fn product(dimensions: Vec<ParamDimension>) -> Self {
        Self::Product(dimensions)
    }

    /// Create a union space over the given alternatives.
    #[must_use]
    pub fn union(alternatives: Vec<ParamSpace>) -> Self {
        Self::Union(alternatives)
    }

    /// Total number of distinct configurations in this space.
    ///
    /// Product: the product of dimension cardinalities (a zero-cardinality
    /// dimension zeroes out the whole space). Union: the sum of alternative
    /// sizes.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Self::Product(dims) => dims.iter().map(ParamDimension::cardinality).product(),
            Self::Union(alts) => alts.iter().map(ParamSpace::size).sum(),
        }
    }

    /// Return true if this space has no configurations at all.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.size() == 0
    }
}

impl Default for ParamSpace {
    fn default() -> Self {
        Self::Product(Vec::new())
    }
}

impl fmt::Display for ParamSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Product(dims) => {
                let names: Vec<&str> = dims.iter().map(ParamDimension::name).collect();
                write!(f, "product[{}]", names.join(" x "))
            }
            Self::Union(alts) => write!(f, "union[{} alternatives]", alts.len()),
        }
    }
}
