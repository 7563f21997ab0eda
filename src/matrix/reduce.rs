use crate::rref::{rref_in_place, rref_in_place_with, PivotStrategy, RowOp};
use crate::traits::FloatScalar;

use super::Matrix;

// ── Reduction convenience methods ───────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Reduce to reduced row echelon form, in place.
    ///
    /// Classic Gauss-Jordan behavior: first nonzero entry in each column
    /// becomes the pivot. See [`rref_in_place`].
    ///
    /// ```
    /// use echelon::Matrix;
    ///
    /// let mut m = Matrix::from_rows(2, 2, &[2.0_f64, 4.0, 1.0, 3.0]);
    /// m.rref();
    /// assert_eq!(m, Matrix::eye(2, 0.0));
    /// ```
    pub fn rref(&mut self) {
        rref_in_place(self);
    }

    /// Reduce to reduced row echelon form with an explicit pivot strategy,
    /// reporting every elementary row operation to `observe`.
    ///
    /// ```
    /// use echelon::{Matrix, PivotStrategy, RowOp};
    ///
    /// let mut m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// let mut ops: Vec<RowOp<f64>> = Vec::new();
    /// m.rref_with(PivotStrategy::LargestModulus, |op| ops.push(*op));
    ///
    /// // Partial pivoting swaps row 1 (entry 3.0) up before eliminating
    /// assert_eq!(ops[0], RowOp::Swap { a: 1, b: 0 });
    /// ```
    pub fn rref_with(&mut self, strategy: PivotStrategy<T>, observe: impl FnMut(&RowOp<T>)) {
        rref_in_place_with(self, strategy, observe);
    }
}
