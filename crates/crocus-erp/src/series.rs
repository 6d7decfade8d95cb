//! Sequence types with validation guarantees.

use std::ops::Index;

use crate::error::ElasticError;

/// Owned, validated sequence of observations. Guaranteed non-empty with no
/// infinite values; NaN entries are legal and mark missing observations.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence(Vec<f64>);

impl Sequence {
    /// Create a new sequence, validating that it is non-empty and free of
    /// infinities.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`ElasticError::EmptySequence`] | `values` is empty |
    /// | [`ElasticError::InfiniteValue`] | Any value is +∞ or −∞ |
    pub fn new(values: Vec<f64>) -> Result<Self, ElasticError> {
        if values.is_empty() {
            return Err(ElasticError::EmptySequence);
        }
        if let Some(index) = values.iter().position(|v| v.is_infinite()) {
            return Err(ElasticError::InfiniteValue { index });
        }
        Ok(Self(values))
    }

    /// Borrow this sequence as a zero-copy view.
    #[must_use]
    pub fn as_view(&self) -> SequenceView<'_> {
        SequenceView::new_unchecked(&self.0)
    }

    /// Return the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the sequence has no observations.
    ///
    /// A [`Sequence`] constructed via [`Sequence::new`] is always non-empty,
    /// so this always returns `false` for valid instances. Provided to
    /// satisfy the `len_without_is_empty` convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return true if any observation is the missing marker (NaN).
    #[must_use]
    pub fn has_missing(&self) -> bool {
        self.0.iter().any(|v| v.is_nan())
    }

    /// Consume and return the inner vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl AsRef<[f64]> for Sequence {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for Sequence {
    type Error = ElasticError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

/// Borrowed, validated view into a sequence. Zero-copy reference.
#[derive(Debug, Clone, Copy)]
pub struct SequenceView<'a>(&'a [f64]);

impl<'a> SequenceView<'a> {
    /// Create a new view, validating that the slice is non-empty and free of
    /// infinities.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`ElasticError::EmptySequence`] | `slice` is empty |
    /// | [`ElasticError::InfiniteValue`] | Any value is +∞ or −∞ |
    pub fn new(slice: &'a [f64]) -> Result<Self, ElasticError> {
        if slice.is_empty() {
            return Err(ElasticError::EmptySequence);
        }
        if let Some(index) = slice.iter().position(|v| v.is_infinite()) {
            return Err(ElasticError::InfiniteValue { index });
        }
        Ok(Self(slice))
    }

    /// Create a view without validation. For internal use where data is
    /// already validated.
    pub(crate) fn new_unchecked(slice: &'a [f64]) -> Self {
        Self(slice)
    }

    /// Return the underlying slice.
    #[must_use]
    pub fn as_slice(&self) -> &'a [f64] {
        self.0
    }

    /// Return the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the view has no observations. Always `false` for views
    /// constructed via [`SequenceView::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Index<usize> for SequenceView<'_> {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl AsRef<[f64]> for SequenceView<'_> {
    fn as_ref(&self) -> &[f64] {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_vec() {
        let result = Sequence::new(vec![]);
        assert!(matches!(result, Err(ElasticError::EmptySequence)));
    }

    #[test]
    fn rejects_infinity() {
        let result = Sequence::new(vec![1.0, f64::INFINITY, 3.0]);
        assert!(matches!(result, Err(ElasticError::InfiniteValue { index: 1 })));
    }

    #[test]
    fn rejects_neg_infinity() {
        let result = Sequence::new(vec![f64::NEG_INFINITY, 2.0]);
        assert!(matches!(result, Err(ElasticError::InfiniteValue { index: 0 })));
    }

    #[test]
    fn accepts_missing_marker() {
        let seq = Sequence::new(vec![1.0, f64::NAN, 3.0]).unwrap();
        assert!(seq.has_missing());
    }

    #[test]
    fn accepts_valid_sequence() {
        let seq = Sequence::new(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(seq.len(), 3);
        assert!(!seq.has_missing());
        assert_eq!(seq.as_ref(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn view_rejects_empty() {
        let result = SequenceView::new(&[]);
        assert!(matches!(result, Err(ElasticError::EmptySequence)));
    }

    #[test]
    fn view_indexing() {
        let data = [10.0, 20.0, 30.0];
        let view = SequenceView::new(&data).unwrap();
        assert_eq!(view[0], 10.0);
        assert_eq!(view[2], 30.0);
    }

    #[test]
    fn try_from_vec() {
        let seq: Result<Sequence, _> = vec![1.0, 2.0].try_into();
        assert!(seq.is_ok());
    }

    #[test]
    fn as_view_roundtrip() {
        let seq = Sequence::new(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(seq.as_view().as_slice(), &[1.0, 2.0, 3.0]);
    }
}
