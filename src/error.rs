use core::fmt;

/// Errors from matrix operations.
///
/// Returned by the checked arithmetic and extraction methods on
/// [`Matrix`](crate::Matrix) and by the decomposition constructors and
/// solves in [`crate::linalg`]. All failures are detected at the point of
/// violation and are deterministic functions of the input.
///
/// ```
/// use densemat::{Matrix, MatError};
///
/// let singular = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
/// assert_eq!(singular.inverse().unwrap_err(), MatError::Singular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatError {
    /// Operand shapes violate the operation's documented contract.
    DimensionMismatch {
        /// Expected `(rows, cols)`.
        expected: (usize, usize),
        /// Got `(rows, cols)`.
        found: (usize, usize),
    },
    /// A row or column index is out of range.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of rows or columns available.
        len: usize,
    },
    /// A submatrix window extends beyond the matrix bounds.
    RangeOutOfBounds {
        /// Window start index along the violating axis.
        start: usize,
        /// Window extent along the violating axis.
        count: usize,
        /// Number of rows or columns available.
        len: usize,
    },
    /// The matrix is singular or numerically rank-deficient.
    Singular,
}

impl fmt::Display for MatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatError::DimensionMismatch { expected, found } => write!(
                f,
                "dimension mismatch: expected {}x{}, found {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
            MatError::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for length {}", index, len)
            }
            MatError::RangeOutOfBounds { start, count, len } => write!(
                f,
                "range {}..{} out of bounds for length {}",
                start,
                start + count,
                len
            ),
            MatError::Singular => write!(f, "matrix is singular"),
        }
    }
}
