//! Diagnostic accumulated-cost table.

/// Row-major table of accumulated ERP costs, retained only when the
/// [`Erp`][crate::Erp] configuration enables keep-matrix mode.
///
/// Inadmissible cells (outside the warping band) hold +∞. When the
/// computation abandons early the table stops at the last completed row, so
/// `rows()` may be smaller than the query length.
#[derive(Debug, Clone)]
pub struct CostMatrix {
    n_cols: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    pub(crate) fn from_rows(n_cols: usize, rows: Vec<Vec<f64>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == n_cols));
        let data = rows.into_iter().flatten().collect();
        Self { n_cols, data }
    }

    /// Number of completed rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        if self.n_cols == 0 {
            0
        } else {
            self.data.len() / self.n_cols
        }
    }

    /// Number of columns (the candidate sequence length).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.n_cols
    }

    /// Return the accumulated cost at cell `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.rows(), "row index {i} out of bounds for {} rows", self.rows());
        assert!(j < self.n_cols, "column index {j} out of bounds for {} columns", self.n_cols);
        self.data[i * self.n_cols + j]
    }

    /// Return completed row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()`.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.rows(), "row index {i} out of bounds for {} rows", self.rows());
        &self.data[i * self.n_cols..(i + 1) * self.n_cols]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_and_access() {
        let m = CostMatrix::from_rows(3, vec![vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]]);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.get(1, 2), 5.0);
        assert_eq!(m.row(0), &[0.0, 1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "row index 2 out of bounds")]
    fn row_bounds_checked() {
        let m = CostMatrix::from_rows(2, vec![vec![0.0, 1.0]]);
        // rows() is 1; asking for row 2 must panic
        let _ = m.get(2, 0);
    }
}
