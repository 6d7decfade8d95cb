//! Warping window constraint for the ERP cost matrix.

/// Constraint on how far an alignment may stray from the diagonal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WarpingWindow {
    /// No constraint, every cell of the cost matrix is admissible.
    #[default]
    Unconstrained,

    /// Band of the given radius: cell (i,j) is admissible only if
    /// |i - j| <= radius.
    Banded(usize),
}

impl WarpingWindow {
    /// Map the conventional signed window parameter onto a constraint:
    /// negative means unconstrained, non-negative is a band radius.
    #[must_use]
    pub fn from_signed(window: i64) -> Self {
        if window < 0 {
            Self::Unconstrained
        } else {
            Self::Banded(window as usize)
        }
    }

    /// Return the signed window parameter this constraint corresponds to.
    #[must_use]
    pub fn as_signed(&self) -> i64 {
        match self {
            Self::Unconstrained => -1,
            Self::Banded(radius) => *radius as i64,
        }
    }

    /// Effective band radius for a query of length `a_len`: a band wider
    /// than the matrix for the unconstrained case, the radius otherwise.
    pub(crate) fn band(&self, a_len: usize) -> usize {
        match self {
            Self::Unconstrained => a_len + 1,
            Self::Banded(radius) => *radius,
        }
    }
}
