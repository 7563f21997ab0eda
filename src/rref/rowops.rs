use crate::traits::{MatrixMut, Scalar};

use super::split_two_row_slices;

/// Swap rows `r1` and `r2`, in place.
///
/// Element-wise exchange; no scratch allocation. A no-op when `r1 == r2`.
///
/// ```
/// use echelon::{swap_rows, Matrix};
///
/// let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
/// swap_rows(&mut m, 0, 1);
/// assert_eq!(m.row_slice(0), &[3.0, 4.0]);
/// assert_eq!(m.row_slice(1), &[1.0, 2.0]);
/// ```
pub fn swap_rows<T: Scalar>(a: &mut impl MatrixMut<T>, r1: usize, r2: usize) {
    if r1 == r2 {
        return;
    }
    for col in 0..a.ncols() {
        let tmp = *a.get(r1, col);
        *a.get_mut(r1, col) = *a.get(r2, col);
        *a.get_mut(r2, col) = tmp;
    }
}

/// Multiply every entry of row `row` by `factor`, in place.
///
/// ```
/// use echelon::{scale_row, Matrix};
///
/// let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
/// scale_row(&mut m, 1, 10.0);
/// assert_eq!(m.row_slice(1), &[30.0, 40.0]);
/// ```
pub fn scale_row<T: Scalar>(a: &mut impl MatrixMut<T>, row: usize, factor: T) {
    for x in a.row_as_mut_slice(row, 0) {
        *x = *x * factor;
    }
}

/// Add `factor` times row `source` onto row `target`:
/// `A[target][j] += factor * A[source][j]` for every column `j`.
///
/// `source` is read pre-update throughout. The rows must be distinct;
/// panics if `target == source`.
///
/// ```
/// use echelon::{add_row_multiple, Matrix};
///
/// let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
/// add_row_multiple(&mut m, 1, 0, -3.0);
/// assert_eq!(m.row_slice(0), &[1.0, 2.0]);
/// assert_eq!(m.row_slice(1), &[0.0, -2.0]);
/// ```
pub fn add_row_multiple<T: Scalar>(
    a: &mut impl MatrixMut<T>,
    target: usize,
    source: usize,
    factor: T,
) {
    assert_ne!(target, source, "target and source rows must be distinct");
    let (dst, src) = split_two_row_slices(a, target, source, 0);
    for (x, &y) in dst.iter_mut().zip(src.iter()) {
        *x = *x + factor * y;
    }
}
