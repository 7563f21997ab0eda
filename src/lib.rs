//! # echelon
//!
//! Gauss-Jordan elimination to reduced row echelon form (RREF), no-std
//! compatible. In-place reduction over any row-contiguous matrix storage,
//! built from the three elementary row operations (swap, scale,
//! add-multiple).
//!
//! ## Quick start
//!
//! ```
//! use echelon::Matrix;
//!
//! // Reduce an augmented system [A|b]; the solution lands in the last column
//! let mut m = Matrix::from_rows(2, 3, &[
//!     2.0_f64, 1.0, 5.0,
//!     1.0, 3.0, 10.0,
//! ]);
//! m.rref();
//! assert!((m[(0, 2)] - 1.0).abs() < 1e-12); // x = 1
//! assert!((m[(1, 2)] - 3.0).abs() < 1e-12); // y = 3
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Heap-allocated `Matrix<T>` with runtime dimensions
//!   (requires `alloc` feature, included with `std`). Row-major `Vec<T>`
//!   storage with checked construction ([`ShapeError`]) and a fixed-width,
//!   6-decimal [`core::fmt::Display`] rendering.
//!
//! - [`rref`] — The eliminator. [`rref_in_place`] reproduces the classic
//!   first-nonzero-pivot behavior; [`rref_in_place_with`] parameterizes
//!   pivot selection ([`PivotStrategy`]) and reports every elementary row
//!   operation ([`RowOp`]) to an observer callback. The row operations
//!   themselves ([`swap_rows`], [`scale_row`], [`add_row_multiple`]) are
//!   exported as free functions over `&mut impl MatrixMut<T>`.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float`), required by the eliminator
//!   - [`MatrixRef`] / [`MatrixMut`] — generic read/write access for algorithms
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Implies `alloc`. Hardware FPU via system libm |
//! | `alloc`   | via std  | `Matrix` (heap-allocated, runtime-sized) |
//! | `libm`    | no       | Pure-Rust software float fallback for no-std |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod matrix;
pub mod rref;
pub mod traits;

#[cfg(feature = "alloc")]
pub use matrix::{Matrix, ShapeError};
pub use rref::{
    add_row_multiple, rref_in_place, rref_in_place_with, scale_row, swap_rows, PivotStrategy,
    RowOp,
};
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
