use crate::error::MatError;
use crate::traits::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Copy row `i` into a new `1 x ncols` matrix.
    ///
    /// ```
    /// use densemat::{Matrix, MatError};
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let r = m.row(1).unwrap();
    /// assert_eq!(r.nrows(), 1);
    /// assert_eq!(r[(0, 2)], 6.0);
    /// assert!(matches!(m.row(2), Err(MatError::IndexOutOfBounds { .. })));
    /// ```
    pub fn row(&self, i: usize) -> Result<Self, MatError> {
        if i >= self.nrows {
            return Err(MatError::IndexOutOfBounds {
                index: i,
                len: self.nrows,
            });
        }
        Ok(Self::from_rows(1, self.ncols, self.row_slice(i)))
    }

    /// Copy column `j` into a new `nrows x 1` matrix.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let c = m.col(1).unwrap();
    /// assert_eq!(c.ncols(), 1);
    /// assert_eq!(c[(0, 0)], 2.0);
    /// assert_eq!(c[(1, 0)], 5.0);
    /// ```
    pub fn col(&self, j: usize) -> Result<Self, MatError> {
        if j >= self.ncols {
            return Err(MatError::IndexOutOfBounds {
                index: j,
                len: self.ncols,
            });
        }
        Ok(Self::from_fn(self.nrows, 1, |i, _| self[(i, j)]))
    }

    /// Copy the `nrows x ncols` window starting at `(row, col)` into a new
    /// matrix, checking that the window lies within bounds.
    ///
    /// ```
    /// use densemat::{Matrix, MatError};
    /// let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
    /// let s = m.submatrix(1, 1, 2, 2).unwrap();
    /// assert_eq!(s[(0, 0)], 4.0);
    /// assert_eq!(s[(1, 1)], 8.0);
    /// assert!(matches!(
    ///     m.submatrix(2, 0, 2, 2),
    ///     Err(MatError::RangeOutOfBounds { .. })
    /// ));
    /// ```
    pub fn submatrix(
        &self,
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    ) -> Result<Self, MatError> {
        if row + nrows > self.nrows {
            return Err(MatError::RangeOutOfBounds {
                start: row,
                count: nrows,
                len: self.nrows,
            });
        }
        if col + ncols > self.ncols {
            return Err(MatError::RangeOutOfBounds {
                start: col,
                count: ncols,
                len: self.ncols,
            });
        }
        Ok(self.block(row, col, nrows, ncols))
    }

    /// Extract a sub-matrix of size `rows x cols` starting at `(i, j)`.
    ///
    /// Panics if the block extends beyond the matrix bounds; use
    /// [`submatrix`](Self::submatrix) for the checked variant.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
    /// let b = m.block(1, 1, 2, 2);
    /// assert_eq!(b[(0, 0)], 4.0);
    /// assert_eq!(b[(1, 1)], 8.0);
    /// ```
    pub fn block(&self, i: usize, j: usize, rows: usize, cols: usize) -> Self {
        assert!(
            i + rows <= self.nrows && j + cols <= self.ncols,
            "block ({},{}) size {}x{} out of bounds for {}x{} matrix",
            i,
            j,
            rows,
            cols,
            self.nrows,
            self.ncols,
        );
        Self::from_fn(rows, cols, |r, c| self[(i + r, j + c)])
    }

    /// The lower-triangular part: elements on or below the main diagonal,
    /// everything else zero. Same dimensions as the input.
    ///
    /// For rectangular input the diagonal is bounded by
    /// `min(nrows, ncols)`; positions outside that square block are zero.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let l = m.lower_triangular();
    /// assert_eq!(l[(0, 1)], 0.0);
    /// assert_eq!(l[(1, 0)], 3.0);
    /// assert_eq!(l[(1, 1)], 4.0);
    /// ```
    pub fn lower_triangular(&self) -> Self {
        let d = self.nrows.min(self.ncols);
        Self::from_fn(self.nrows, self.ncols, |i, j| {
            if i < d && j <= i {
                self[(i, j)]
            } else {
                T::zero()
            }
        })
    }

    /// The upper-triangular part: elements on or above the main diagonal,
    /// everything else zero. Same dimensions as the input.
    ///
    /// For rectangular input the diagonal is bounded by
    /// `min(nrows, ncols)`; positions outside that square block are zero.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let u = m.upper_triangular();
    /// assert_eq!(u[(0, 1)], 2.0);
    /// assert_eq!(u[(1, 0)], 0.0);
    /// assert_eq!(u[(1, 1)], 4.0);
    /// ```
    pub fn upper_triangular(&self) -> Self {
        let d = self.nrows.min(self.ncols);
        Self::from_fn(self.nrows, self.ncols, |i, j| {
            if j < d && i <= j {
                self[(i, j)]
            } else {
                T::zero()
            }
        })
    }
}
