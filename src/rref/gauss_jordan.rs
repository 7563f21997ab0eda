use crate::traits::{FloatScalar, MatrixMut, MatrixRef};

use super::rowops::{add_row_multiple, scale_row, swap_rows};

/// Pivot selection policy for [`rref_in_place_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PivotStrategy<T> {
    /// First row at or below the anchor whose entry has magnitude strictly
    /// greater than `tol`. With `tol` zero this is the classic exact-zero
    /// pivot test, which accepts arbitrarily small pivots.
    FirstNonzero {
        /// Magnitudes at or below this value are treated as zero.
        tol: T,
    },
    /// Row with the largest-magnitude entry in the column (partial
    /// pivoting). More robust on ill-conditioned inputs.
    LargestModulus,
}

impl<T: FloatScalar> Default for PivotStrategy<T> {
    /// `FirstNonzero` with a zero tolerance.
    fn default() -> Self {
        Self::FirstNonzero { tol: T::zero() }
    }
}

/// Elementary row operation, reported to the observer as it is applied.
///
/// Row indices refer to positions at the time the operation runs, after
/// any earlier swaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowOp<T> {
    /// Rows `a` and `b` were exchanged.
    Swap { a: usize, b: usize },
    /// Row `row` was multiplied by `factor`.
    Scale { row: usize, factor: T },
    /// `factor` times row `source` was added onto row `target`.
    AddMultiple {
        target: usize,
        source: usize,
        factor: T,
    },
}

/// Reduce a matrix to reduced row echelon form, in place.
///
/// Classic Gauss-Jordan behavior: for each column, the first row at or
/// below the anchor with a nonzero entry becomes the pivot. Works for any
/// `m x n` shape; columns with no available pivot are skipped, so
/// rank-deficient matrices reduce cleanly. On return every pivot column is
/// an exact unit vector and pivots appear in strictly increasing row and
/// column order.
///
/// Panics if the matrix has zero rows or zero columns.
///
/// # Example
///
/// ```
/// use echelon::{rref_in_place, Matrix};
///
/// let mut m = Matrix::from_rows(2, 2, &[2.0_f64, 6.0, 1.0, 4.0]);
/// rref_in_place(&mut m);
/// assert_eq!(m, Matrix::eye(2, 0.0));
/// ```
pub fn rref_in_place<T: FloatScalar>(a: &mut impl MatrixMut<T>) {
    rref_in_place_with(a, PivotStrategy::default(), |_| {});
}

/// Reduce a matrix to reduced row echelon form with an explicit pivot
/// strategy, reporting every elementary row operation to `observe`.
///
/// The observer runs after each operation has been applied, so tracing
/// callers can inspect or print the intermediate matrix between calls.
///
/// # Example
///
/// ```
/// use echelon::{rref_in_place_with, Matrix, PivotStrategy, RowOp};
///
/// let mut m = Matrix::from_rows(2, 2, &[0.0_f64, 1.0, 2.0, 4.0]);
/// let mut swaps = 0;
/// rref_in_place_with(&mut m, PivotStrategy::default(), |op| {
///     if let RowOp::Swap { .. } = op {
///         swaps += 1;
///     }
/// });
/// assert_eq!(swaps, 1); // row 1 moved up to host the first pivot
/// assert_eq!(m, Matrix::eye(2, 0.0));
/// ```
pub fn rref_in_place_with<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    strategy: PivotStrategy<T>,
    mut observe: impl FnMut(&RowOp<T>),
) {
    let m = a.nrows();
    let n = a.ncols();
    assert!(
        m > 0 && n > 0,
        "matrix must have at least one row and one column"
    );

    // Row index the next pivot must occupy. Monotone non-decreasing,
    // bounded by m.
    let mut anchor = 0;

    for col in 0..n {
        // Rows exhausted before columns
        if anchor == m {
            break;
        }

        let pivot_row = match find_pivot(a, anchor, col, strategy) {
            Some(row) => row,
            // No pivot available in this column: skip it, anchor stays put
            None => continue,
        };

        if pivot_row != anchor {
            swap_rows(a, pivot_row, anchor);
            observe(&RowOp::Swap {
                a: pivot_row,
                b: anchor,
            });
        }

        // Normalize the anchor row first, then use it to clear the column
        // in every other row. Writing the pivot slot directly absorbs the
        // reciprocal's round-off, so the pivot reads exactly 1 and each
        // elimination below leaves an exact 0 in this column.
        let factor = T::one() / *a.get(anchor, col);
        scale_row(a, anchor, factor);
        *a.get_mut(anchor, col) = T::one();
        observe(&RowOp::Scale {
            row: anchor,
            factor,
        });

        for row in 0..m {
            if row == anchor {
                continue;
            }
            let factor = -*a.get(row, col);
            add_row_multiple(a, row, anchor, factor);
            observe(&RowOp::AddMultiple {
                target: row,
                source: anchor,
                factor,
            });
        }

        anchor += 1;
    }
}

/// Select the pivot row for `col` among rows `anchor..nrows`.
fn find_pivot<T: FloatScalar>(
    a: &impl MatrixRef<T>,
    anchor: usize,
    col: usize,
    strategy: PivotStrategy<T>,
) -> Option<usize> {
    match strategy {
        PivotStrategy::FirstNonzero { tol } => {
            (anchor..a.nrows()).find(|&row| a.get(row, col).abs() > tol)
        }
        PivotStrategy::LargestModulus => {
            let mut best_row = anchor;
            let mut best_val = a.get(anchor, col).abs();
            for row in (anchor + 1)..a.nrows() {
                let val = a.get(row, col).abs();
                if val > best_val {
                    best_val = val;
                    best_row = row;
                }
            }
            (best_val > T::zero()).then_some(best_row)
        }
    }
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use crate::Matrix;

    #[test]
    fn identity_stays_identity() {
        let mut m = Matrix::eye(3, 0.0_f64);
        rref_in_place(&mut m);
        assert_eq!(m, Matrix::eye(3, 0.0));
    }

    #[test]
    fn nonsingular_2x2() {
        let mut m = Matrix::from_rows(2, 2, &[3.0_f64, 2.0, 1.0, 4.0]);
        rref_in_place(&mut m);
        assert_eq!(m, Matrix::eye(2, 0.0));
    }

    #[test]
    fn zero_matrix_unchanged() {
        let mut m = Matrix::zeros(2, 3, 0.0_f64);
        rref_in_place(&mut m);
        assert_eq!(m, Matrix::zeros(2, 3, 0.0));
    }

    #[test]
    fn single_row() {
        let mut m = Matrix::from_rows(1, 3, &[2.0_f64, 4.0, 6.0]);
        rref_in_place(&mut m);
        assert_eq!(m.row_slice(0), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn single_column() {
        let mut m = Matrix::from_rows(3, 1, &[0.0_f64, 5.0, 2.0]);
        rref_in_place(&mut m);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(1, 0)], 0.0);
        assert_eq!(m[(2, 0)], 0.0);
    }

    #[test]
    fn tiny_pivot_accepted_by_default() {
        // The exact-zero test pivots on 1e-300 without complaint
        let mut m = Matrix::from_rows(2, 2, &[1e-300_f64, 1.0, 0.0, 1.0]);
        rref_in_place(&mut m);
        assert_eq!(m, Matrix::eye(2, 0.0));
    }

    #[test]
    fn tolerance_skips_small_column() {
        let mut m = Matrix::from_rows(2, 2, &[1e-13_f64, 1.0, 1e-13, 2.0]);
        rref_in_place_with(&mut m, PivotStrategy::FirstNonzero { tol: 1e-9 }, |_| {});
        // Column 0 has no pivot; column 1 does
        assert_eq!(m[(0, 1)], 1.0);
        assert_eq!(m[(1, 1)], 0.0);
        assert!(m[(0, 0)].abs() < 1e-9);
        assert!(m[(1, 0)].abs() < 1e-9);
    }

    #[test]
    fn largest_modulus_swaps_biggest_entry_up() {
        let mut m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
        let mut first_op = None;
        rref_in_place_with(&mut m, PivotStrategy::LargestModulus, |op| {
            if first_op.is_none() {
                first_op = Some(*op);
            }
        });
        assert_eq!(first_op, Some(RowOp::Swap { a: 1, b: 0 }));
        assert_eq!(m, Matrix::eye(2, 0.0));
    }

    #[test]
    fn largest_modulus_zero_column_skipped() {
        let mut m = Matrix::from_rows(2, 2, &[0.0_f64, 1.0, 0.0, 3.0]);
        rref_in_place_with(&mut m, PivotStrategy::LargestModulus, |_| {});
        assert_eq!(m[(0, 0)], 0.0);
        assert_eq!(m[(0, 1)], 1.0);
        assert_eq!(m[(1, 1)], 0.0);
    }

    #[test]
    fn observer_sees_scale_then_eliminations() {
        let mut m = Matrix::from_rows(2, 2, &[2.0_f64, 0.0, 4.0, 1.0]);
        let mut ops: alloc::vec::Vec<RowOp<f64>> = alloc::vec::Vec::new();
        rref_in_place_with(&mut m, PivotStrategy::default(), |op| ops.push(*op));

        // Column 0: scale row 0 by 1/2, then eliminate row 1 with factor -4
        assert_eq!(ops[0], RowOp::Scale { row: 0, factor: 0.5 });
        assert_eq!(
            ops[1],
            RowOp::AddMultiple {
                target: 1,
                source: 0,
                factor: -4.0
            }
        );
    }

    #[test]
    #[should_panic(expected = "at least one row")]
    fn empty_matrix_rejected() {
        let mut m = Matrix::zeros(0, 3, 0.0_f64);
        rref_in_place(&mut m);
    }
}
