//! # densemat
//!
//! Lightweight dense-matrix algebra over heap-allocated, runtime-sized
//! matrices. No-std compatible; all numeric work is scalar floating-point
//! arithmetic, making the crate suitable for embedded targets as well as
//! general-purpose numeric code.
//!
//! ## Quick start
//!
//! ```
//! use densemat::Matrix;
//!
//! // Solve a linear system Ax = b
//! let a = Matrix::from_rows(3, 3, &[
//!     2.0_f64, 1.0, -1.0,
//!     -3.0, -1.0, 2.0,
//!     -2.0, 1.0, 2.0,
//! ]);
//! let b = Matrix::from_rows(3, 1, &[8.0, -11.0, -3.0]);
//! let x = a.solve(&b).unwrap(); // x = [2, 3, -1]
//! assert!((x[(0, 0)] - 2.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — [`Matrix<T>`] with runtime dimensions and row-major
//!   `Vec<T>` storage. Construction (zeros, ones, identity, random),
//!   indexing, row/column/submatrix/triangular extraction, elementwise and
//!   matrix arithmetic, and in-place editing (scale, shift, insert/remove/
//!   append rows and columns, elementwise map).
//!
//! - [`linalg`] — LU decomposition with partial pivoting ([`Lu`]) and
//!   Householder QR decomposition ([`Qr`]). Each provides `solve()` with
//!   multi-column right-hand sides; LU additionally provides `inverse()`
//!   and `det()`. Convenience methods on `Matrix`: `a.solve(&b)`,
//!   `a.inverse()`, `a.det()`, `a.solve_qr(&b)`.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float`), required by decompositions
//!
//! ## Error handling
//!
//! Fallible operations return [`MatError`]: shape-contract violations
//! (`DimensionMismatch`), bad indices or windows (`IndexOutOfBounds`,
//! `RangeOutOfBounds`), and numerically singular input (`Singular`).
//! Operator overloads (`+`, `-`, `*`) are sugar over the checked methods
//! and panic on shape mismatch.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm |
//! | `libm`  | no       | Pure-Rust software float fallback for no-std targets |
//! | `rand`  | no       | `Matrix::random` / `Matrix::random_with` (implies `std`) |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;
pub mod linalg;
pub mod matrix;
pub mod traits;

pub use error::MatError;
pub use linalg::{Lu, Qr};
pub use matrix::Matrix;
pub use traits::{FloatScalar, Scalar};
