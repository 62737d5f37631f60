//! Feature Matrix Assembly

use crate::config::TrimPolicy;
use ndarray::{s, Array2, ArrayView1};

/// Collects fused feature rows into a preallocated matrix and applies the
/// configured trim when the scan finishes.
pub(crate) struct FeatureMatrixAssembler {
    data: Array2<f64>,
    filled: usize,
    steps: usize,
    trim: TrimPolicy,
}

impl FeatureMatrixAssembler {
    pub(crate) fn new(rows: usize, columns: usize, steps: usize, trim: TrimPolicy) -> Self {
        Self {
            data: Array2::zeros((rows, columns)),
            filled: 0,
            steps,
            trim,
        }
    }

    /// Append one feature row. A row whose length disagrees with the
    /// configured channel count is a bug in the scan, not an input error.
    pub(crate) fn push_row(&mut self, row: ArrayView1<'_, f64>) {
        assert_eq!(
            row.len(),
            self.data.ncols(),
            "feature row length disagrees with channel count"
        );
        assert!(
            self.filled < self.data.nrows(),
            "more rows produced than allocated"
        );
        self.data.row_mut(self.filled).assign(&row);
        self.filled += 1;
    }

    pub(crate) fn finish(self) -> Array2<f64> {
        match self.trim {
            TrimPolicy::KeepComputed => self.data,
            TrimPolicy::TrimTrailingSteps => {
                let keep = self.filled.saturating_sub(self.steps);
                self.data.slice(s![..keep, ..]).to_owned()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn filled_assembler(trim: TrimPolicy) -> FeatureMatrixAssembler {
        let mut assembler = FeatureMatrixAssembler::new(4, 2, 1, trim);
        for i in 0..4 {
            assembler.push_row(array![i as f64, -(i as f64)].view());
        }
        assembler
    }

    #[test]
    fn test_keep_computed_returns_all_rows() {
        let feat = filled_assembler(TrimPolicy::KeepComputed).finish();
        assert_eq!(feat.dim(), (4, 2));
        assert_eq!(feat[[3, 0]], 3.0);
    }

    #[test]
    fn test_trim_drops_trailing_rows() {
        let feat = filled_assembler(TrimPolicy::TrimTrailingSteps).finish();
        assert_eq!(feat.dim(), (3, 2));
        assert_eq!(feat[[2, 0]], 2.0);
    }

    #[test]
    fn test_trim_saturates_at_empty() {
        let mut assembler = FeatureMatrixAssembler::new(2, 1, 5, TrimPolicy::TrimTrailingSteps);
        assembler.push_row(array![1.0].view());
        assembler.push_row(array![2.0].view());
        let feat = assembler.finish();
        assert_eq!(feat.dim(), (0, 1));
    }

    #[test]
    #[should_panic(expected = "feature row length disagrees with channel count")]
    fn test_row_length_mismatch_panics() {
        let mut assembler = FeatureMatrixAssembler::new(1, 3, 0, TrimPolicy::KeepComputed);
        assembler.push_row(array![1.0, 2.0].view());
    }
}
