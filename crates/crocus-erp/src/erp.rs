//! ERP distance computation.

use rayon::prelude::*;
use tracing::instrument;

use crate::cost_matrix::CostMatrix;
use crate::distance::ErpDistance;
use crate::matrix::DistanceMatrix;
use crate::series::{Sequence, SequenceView};
use crate::window::WarpingWindow;

/// Result of a single ERP evaluation: the distance plus the accumulated-cost
/// table when keep-matrix mode is enabled.
#[derive(Debug, Clone)]
pub struct ErpOutcome {
    /// The accumulated ERP cost, or [`ErpDistance::INFINITY`] when pruned.
    pub distance: ErpDistance,
    /// The cost table, `Some` iff the configuration retains it. Stops at the
    /// last completed row when the computation abandons early.
    pub matrix: Option<CostMatrix>,
}

/// Immutable ERP configuration. Thread-safe and copyable.
///
/// ERP aligns two sequences with insert/delete/match edits, charging each
/// gap against a fixed reference value `penalty` (the `g` of the original
/// formulation) and each match the squared difference of the aligned
/// observations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Erp {
    window: WarpingWindow,
    penalty: f64,
    keep_matrix: bool,
}

impl Erp {
    /// Create an unconstrained ERP calculator with the given gap penalty.
    #[must_use]
    pub fn unconstrained(penalty: f64) -> Self {
        Self::from_window(WarpingWindow::Unconstrained, penalty)
    }

    /// Create an ERP calculator with a banded warping window.
    #[must_use]
    pub fn with_band(radius: usize, penalty: f64) -> Self {
        Self::from_window(WarpingWindow::Banded(radius), penalty)
    }

    /// Create an ERP calculator from an existing [`WarpingWindow`].
    #[must_use]
    pub fn from_window(window: WarpingWindow, penalty: f64) -> Self {
        Self {
            window,
            penalty,
            keep_matrix: false,
        }
    }

    /// Toggle diagnostic retention of the full accumulated-cost table.
    /// Only [`evaluate`][Self::evaluate] surfaces the table; the flag does
    /// not change any computed distance.
    #[must_use]
    pub fn with_keep_matrix(mut self, keep_matrix: bool) -> Self {
        self.keep_matrix = keep_matrix;
        self
    }

    /// Return the warping window configuration.
    #[must_use]
    pub fn window(&self) -> WarpingWindow {
        self.window
    }

    /// Return the gap penalty.
    #[must_use]
    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    /// Return true if keep-matrix mode is enabled.
    #[must_use]
    pub fn keep_matrix(&self) -> bool {
        self.keep_matrix
    }

    /// Compute the ERP distance between two sequences.
    ///
    /// Uses a memory-efficient rolling two-row buffer; runs in
    /// O(lenA * min(lenB, 2*radius + 1)) time and O(lenB) space.
    #[must_use]
    #[instrument(skip(a, b))]
    pub fn distance(&self, a: SequenceView<'_>, b: SequenceView<'_>) -> ErpDistance {
        self.distance_with_limit(a, b, f64::INFINITY)
    }

    /// Compute the ERP distance with early abandoning.
    ///
    /// Returns [`ErpDistance::INFINITY`] as soon as it is provable that the
    /// true distance is at or above `limit`; a finite return value always
    /// equals `self.distance(a, b)` and is strictly below `limit`. This is a
    /// pruning mechanism for nearest-neighbour batch use, not an error.
    #[must_use]
    #[instrument(skip(a, b))]
    pub fn distance_with_limit(
        &self,
        a: SequenceView<'_>,
        b: SequenceView<'_>,
        limit: f64,
    ) -> ErpDistance {
        let (dist, _) = self.recurrence(a.as_slice(), b.as_slice(), limit, false);
        ErpDistance::new(dist)
    }

    /// Compute the ERP distance, retaining the accumulated-cost table when
    /// keep-matrix mode is enabled. Same recurrence as
    /// [`distance_with_limit`][Self::distance_with_limit]; the flag only
    /// toggles row retention.
    #[must_use]
    #[instrument(skip(a, b))]
    pub fn evaluate(&self, a: SequenceView<'_>, b: SequenceView<'_>, limit: f64) -> ErpOutcome {
        let (dist, matrix) = self.recurrence(a.as_slice(), b.as_slice(), limit, self.keep_matrix);
        ErpOutcome {
            distance: ErpDistance::new(dist),
            matrix,
        }
    }

    /// Compute pairwise ERP distances for a collection of sequences.
    ///
    /// Returns a symmetric [`DistanceMatrix`] covering all unique pairs.
    /// Computation is parallelized across pairs using rayon; each worker
    /// reads the shared immutable configuration.
    #[must_use]
    #[instrument(skip(self, sequences), fields(n = sequences.len()))]
    pub fn pairwise(&self, sequences: &[Sequence]) -> DistanceMatrix {
        let n = sequences.len();
        let total_pairs = n.saturating_sub(1) * n / 2;

        let views: Vec<SequenceView<'_>> = sequences.iter().map(|s| s.as_view()).collect();

        let distances: Vec<ErpDistance> = (0..total_pairs)
            .into_par_iter()
            .map(|flat_idx| {
                // Map flat index back to (i, j) where i > j
                // flat_idx = i*(i-1)/2 + j
                // Solve: i = floor((1 + sqrt(1 + 8*flat_idx)) / 2)
                let i = ((1.0 + (1.0 + 8.0 * flat_idx as f64).sqrt()) / 2.0).floor() as usize;
                let j = flat_idx - i * (i - 1) / 2;
                self.distance(views[i], views[j])
            })
            .collect();

        DistanceMatrix::from_raw(n, distances)
    }

    /// Rolling two-row banded ERP recurrence with early abandoning.
    ///
    /// The cost selection is deliberately order-sensitive: deletion wins only
    /// when it strictly beats both the match and insertion candidates,
    /// insertion only when it strictly beats both the others, and the match
    /// candidate takes every tie. Boundary cells skip the comparison: row 0
    /// always extends by deletion, column 0 by insertion, and the origin is
    /// free. The comparisons operate on the full penalized sums; rewriting
    /// them (e.g. as a min over three values) changes results under IEEE-754
    /// arithmetic and breaks parity with the reference recurrence.
    ///
    /// Row buffers are one band wider than the admissible range, so the
    /// guard cells flanking the band always hold +∞ from the current or
    /// previous row and out-of-band predecessors are never selected.
    ///
    /// After each row, if no admissible cell stayed below `limit`, no
    /// alignment can finish below `limit` and the computation abandons.
    fn recurrence(
        &self,
        a: &[f64],
        b: &[f64],
        limit: f64,
        retain: bool,
    ) -> (f64, Option<CostMatrix>) {
        let a_len = a.len();
        let b_len = b.len();
        let band = self.window.band(a_len);
        let g = self.penalty;

        let mut curr = vec![0.0f64; b_len];
        let mut prev = vec![0.0f64; b_len];
        let mut rows: Option<Vec<Vec<f64>>> = retain.then(|| Vec::with_capacity(a_len));

        for i in 0..a_len {
            std::mem::swap(&mut prev, &mut curr);

            let l = i.saturating_sub(band + 1);
            let r = (i + band + 1).min(b_len - 1);
            let mut too_big = true;

            for j in l..=r {
                if i.abs_diff(j) <= band {
                    // Squared penalty terms: gap against a[i], gap against
                    // b[j], and the direct match.
                    let ins = (a[i] - g) * (a[i] - g);
                    let del = (g - b[j]) * (g - b[j]);
                    let mat = (a[i] - b[j]) * (a[i] - b[j]);

                    let cost = if i + j != 0 {
                        if i == 0
                            || (j != 0
                                && prev[j - 1] + mat > curr[j - 1] + del
                                && curr[j - 1] + del < prev[j] + ins)
                        {
                            curr[j - 1] + del
                        } else if j == 0
                            || (i != 0
                                && prev[j - 1] + mat > prev[j] + ins
                                && prev[j] + ins < curr[j - 1] + del)
                        {
                            prev[j] + ins
                        } else {
                            prev[j - 1] + mat
                        }
                    } else {
                        0.0
                    };

                    curr[j] = cost;
                    if too_big && cost < limit {
                        too_big = false;
                    }
                } else {
                    curr[j] = f64::INFINITY;
                }
            }

            if let Some(rows) = rows.as_mut() {
                let mut row = vec![f64::INFINITY; b_len];
                row[l..=r].copy_from_slice(&curr[l..=r]);
                rows.push(row);
            }

            if too_big {
                let matrix = rows.map(|rows| CostMatrix::from_rows(b_len, rows));
                return (f64::INFINITY, matrix);
            }
        }

        let matrix = rows.map(|rows| CostMatrix::from_rows(b_len, rows));
        let total = curr[b_len - 1];
        // A finite result at or above the limit is still prunable: callers
        // contract on "finite implies below limit".
        if total >= limit {
            return (f64::INFINITY, matrix);
        }
        (total, matrix)
    }
}
