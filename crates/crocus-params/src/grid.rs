//! Sequential cursor over an indexed parameter space.

use crate::error::ParamError;
use crate::indexed::IndexedParamSpace;
use crate::set::ParamSet;

/// A forward-only cursor yielding configurations in index order.
///
/// All indexing state lives in the shared immutable [`IndexedParamSpace`];
/// the cursor itself is just `{ position, num_iterations }`. It is not
/// synchronized; parallel consumers should each own a `GridSearch` over the
/// same space, or claim index ranges directly via
/// [`IndexedParamSpace::get`]. There is no rewind: once exhausted, the
/// cursor stays exhausted.
#[derive(Debug)]
pub struct GridSearch<'a> {
    indexed: &'a IndexedParamSpace,
    position: usize,
    num_iterations: usize,
}

impl<'a> GridSearch<'a> {
    /// Create a cursor at position 0 covering the whole space.
    #[must_use]
    pub fn new(indexed: &'a IndexedParamSpace) -> Self {
        Self {
            indexed,
            position: 0,
            num_iterations: indexed.size(),
        }
    }

    /// Return the underlying indexed space.
    #[must_use]
    pub fn indexed(&self) -> &IndexedParamSpace {
        self.indexed
    }

    /// Return the current cursor position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Return the iteration budget.
    #[must_use]
    pub fn num_iterations(&self) -> usize {
        self.num_iterations
    }

    /// Override the iteration budget, e.g. to truncate a sweep.
    ///
    /// Not validated against the space's size: a budget beyond `size()` is
    /// permitted, but decoding past the end fails fast inside
    /// [`next_set`][Self::next_set] rather than yielding fabricated
    /// configurations.
    pub fn set_num_iterations(&mut self, num_iterations: usize) {
        self.num_iterations = num_iterations;
    }

    /// Return true if the cursor has not reached its budget.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.position < self.num_iterations
    }

    /// Decode the configuration at the cursor and advance.
    ///
    /// The cursor advances even when decoding fails, so a budget overrunning
    /// the space produces one error per overrun index instead of looping.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`ParamError::Exhausted`] | called while [`has_next`][Self::has_next] is false |
    /// | [`ParamError::IndexOutOfRange`] | budget exceeds the space size and the cursor passed it |
    pub fn next_set(&mut self) -> Result<ParamSet, ParamError> {
        if !self.has_next() {
            return Err(ParamError::Exhausted {
                position: self.position,
            });
        }
        let result = self.indexed.get(self.position);
        self.position += 1;
        result
    }
}

impl Iterator for GridSearch<'_> {
    type Item = Result<ParamSet, ParamError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_next() {
            Some(self.next_set())
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.num_iterations.saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}
