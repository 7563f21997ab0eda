//! Gauss-Jordan elimination to reduced row echelon form.
//!
//! Free functions operate in place on `&mut impl MatrixMut<T>`, so they
//! work with [`Matrix`](crate::Matrix) or any other row-contiguous storage.
//! [`rref_in_place`] is the classic algorithm; [`rref_in_place_with`] adds
//! pivot-strategy selection and an observer that sees every elementary row
//! operation as it is applied.

mod gauss_jordan;
mod rowops;

pub use gauss_jordan::{rref_in_place, rref_in_place_with, PivotStrategy, RowOp};
pub use rowops::{add_row_multiple, scale_row, swap_rows};

use crate::traits::MatrixMut;

/// Get mutable references to slices of two different rows simultaneously.
/// Requires `row_a != row_b`.
///
/// Returns `(a_slice, b_slice)` where:
/// - `a_slice = &mut m[row_a, col_start..ncols]`
/// - `b_slice = &mut m[row_b, col_start..ncols]`
#[inline]
pub(crate) fn split_two_row_slices<'a, T>(
    m: &'a mut impl MatrixMut<T>,
    row_a: usize,
    row_b: usize,
    col_start: usize,
) -> (&'a mut [T], &'a mut [T]) {
    debug_assert_ne!(row_a, row_b);
    // Safety: row_a and row_b are different rows, so the slices don't overlap.
    // MatrixMut guarantees row slices are contiguous and non-overlapping.
    let ptr = m as *mut dyn MatrixMut<T>;
    let a = unsafe { &mut *ptr }.row_as_mut_slice(row_a, col_start);
    let b = unsafe { &mut *ptr }.row_as_mut_slice(row_b, col_start);
    (a, b)
}
