use alloc::vec::Vec;

use crate::error::MatError;
use crate::traits::Scalar;

use super::Matrix;

// In-place editing. Shape-changing edits (insert/remove/append) validate
// first, build the replacement buffer, then swap it in, so a failed call
// leaves the receiver untouched.

impl<T: Scalar> Matrix<T> {
    /// Multiply every element by `factor`, in place.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// m.scale(10.0);
    /// assert_eq!(m[(1, 1)], 40.0);
    /// ```
    pub fn scale(&mut self, factor: T) {
        for x in self.data.iter_mut() {
            *x = *x * factor;
        }
    }

    /// Add `offset` to every element, in place.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let mut m = Matrix::<f64>::zeros(2, 2);
    /// m.shift(3.0);
    /// assert_eq!(m[(0, 1)], 3.0);
    /// ```
    pub fn shift(&mut self, offset: T) {
        for x in self.data.iter_mut() {
            *x = *x + offset;
        }
    }

    /// Apply `f` to every element, in place.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let mut m = Matrix::from_rows(1, 3, &[1.0_f64, 4.0, 9.0]);
    /// m.map_in_place(|x| x.sqrt());
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn map_in_place(&mut self, mut f: impl FnMut(T) -> T) {
        for x in self.data.iter_mut() {
            *x = f(*x);
        }
    }

    /// Overwrite row `i` with the contents of a `1 x ncols` matrix.
    pub fn set_row(&mut self, i: usize, row: &Matrix<T>) -> Result<(), MatError> {
        if i >= self.nrows {
            return Err(MatError::IndexOutOfBounds {
                index: i,
                len: self.nrows,
            });
        }
        if (row.nrows, row.ncols) != (1, self.ncols) {
            return Err(MatError::DimensionMismatch {
                expected: (1, self.ncols),
                found: (row.nrows, row.ncols),
            });
        }
        self.row_slice_mut(i).copy_from_slice(row.as_slice());
        Ok(())
    }

    /// Overwrite column `j` with the contents of an `nrows x 1` matrix.
    pub fn set_col(&mut self, j: usize, col: &Matrix<T>) -> Result<(), MatError> {
        if j >= self.ncols {
            return Err(MatError::IndexOutOfBounds {
                index: j,
                len: self.ncols,
            });
        }
        if (col.nrows, col.ncols) != (self.nrows, 1) {
            return Err(MatError::DimensionMismatch {
                expected: (self.nrows, 1),
                found: (col.nrows, col.ncols),
            });
        }
        for i in 0..self.nrows {
            self[(i, j)] = col[(i, 0)];
        }
        Ok(())
    }

    /// Insert a copy of a `1 x ncols` matrix as row `i`, shifting
    /// subsequent rows down. `i == nrows` appends at the bottom.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 5.0, 6.0]);
    /// let mid = Matrix::from_rows(1, 2, &[3.0, 4.0]);
    /// m.insert_row(1, &mid).unwrap();
    /// assert_eq!(m.nrows(), 3);
    /// assert_eq!(m.row_slice(1), &[3.0, 4.0]);
    /// assert_eq!(m.row_slice(2), &[5.0, 6.0]);
    /// ```
    pub fn insert_row(&mut self, i: usize, row: &Matrix<T>) -> Result<(), MatError> {
        if i > self.nrows {
            return Err(MatError::IndexOutOfBounds {
                index: i,
                len: self.nrows,
            });
        }
        if (row.nrows, row.ncols) != (1, self.ncols) {
            return Err(MatError::DimensionMismatch {
                expected: (1, self.ncols),
                found: (row.nrows, row.ncols),
            });
        }
        let split = i * self.ncols;
        let mut data = Vec::with_capacity(self.data.len() + self.ncols);
        data.extend_from_slice(&self.data[..split]);
        data.extend_from_slice(row.as_slice());
        data.extend_from_slice(&self.data[split..]);
        self.data = data;
        self.nrows += 1;
        Ok(())
    }

    /// Insert a copy of an `nrows x 1` matrix as column `j`, shifting
    /// subsequent columns right. `j == ncols` appends at the right edge.
    pub fn insert_col(&mut self, j: usize, col: &Matrix<T>) -> Result<(), MatError> {
        if j > self.ncols {
            return Err(MatError::IndexOutOfBounds {
                index: j,
                len: self.ncols,
            });
        }
        if (col.nrows, col.ncols) != (self.nrows, 1) {
            return Err(MatError::DimensionMismatch {
                expected: (self.nrows, 1),
                found: (col.nrows, col.ncols),
            });
        }
        let mut data = Vec::with_capacity(self.data.len() + self.nrows);
        for i in 0..self.nrows {
            let row = self.row_slice(i);
            data.extend_from_slice(&row[..j]);
            data.push(col[(i, 0)]);
            data.extend_from_slice(&row[j..]);
        }
        self.data = data;
        self.ncols += 1;
        Ok(())
    }

    /// Remove row `i`, shifting subsequent rows up.
    ///
    /// Removing the only row is an error: a live matrix keeps at least
    /// one row and one column.
    pub fn remove_row(&mut self, i: usize) -> Result<(), MatError> {
        if i >= self.nrows {
            return Err(MatError::IndexOutOfBounds {
                index: i,
                len: self.nrows,
            });
        }
        if self.nrows == 1 {
            return Err(MatError::DimensionMismatch {
                expected: (2, self.ncols),
                found: (1, self.ncols),
            });
        }
        let start = i * self.ncols;
        self.data.drain(start..start + self.ncols);
        self.nrows -= 1;
        Ok(())
    }

    /// Remove column `j`, shifting subsequent columns left.
    ///
    /// Removing the only column is an error.
    pub fn remove_col(&mut self, j: usize) -> Result<(), MatError> {
        if j >= self.ncols {
            return Err(MatError::IndexOutOfBounds {
                index: j,
                len: self.ncols,
            });
        }
        if self.ncols == 1 {
            return Err(MatError::DimensionMismatch {
                expected: (self.nrows, 2),
                found: (self.nrows, 1),
            });
        }
        let ncols = self.ncols;
        let mut idx = 0;
        self.data.retain(|_| {
            let in_col = idx % ncols == j;
            idx += 1;
            !in_col
        });
        self.ncols -= 1;
        Ok(())
    }

    /// Append the rows of `other` below `self`.
    ///
    /// Requires matching column counts.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let mut m = Matrix::from_rows(1, 2, &[1.0, 2.0]);
    /// let more = Matrix::from_rows(2, 2, &[3.0, 4.0, 5.0, 6.0]);
    /// m.append_rows(&more).unwrap();
    /// assert_eq!(m.nrows(), 3);
    /// assert_eq!(m.row_slice(2), &[5.0, 6.0]);
    /// ```
    pub fn append_rows(&mut self, other: &Matrix<T>) -> Result<(), MatError> {
        if other.ncols != self.ncols {
            return Err(MatError::DimensionMismatch {
                expected: (other.nrows, self.ncols),
                found: (other.nrows, other.ncols),
            });
        }
        self.data.extend_from_slice(other.as_slice());
        self.nrows += other.nrows;
        Ok(())
    }

    /// Append the columns of `other` to the right of `self`.
    ///
    /// Requires matching row counts.
    pub fn append_cols(&mut self, other: &Matrix<T>) -> Result<(), MatError> {
        if other.nrows != self.nrows {
            return Err(MatError::DimensionMismatch {
                expected: (self.nrows, other.ncols),
                found: (other.nrows, other.ncols),
            });
        }
        let mut data = Vec::with_capacity(self.data.len() + other.data.len());
        for i in 0..self.nrows {
            data.extend_from_slice(self.row_slice(i));
            data.extend_from_slice(other.row_slice(i));
        }
        self.data = data;
        self.ncols += other.ncols;
        Ok(())
    }
}

impl<T> Matrix<T> {
    /// Swap two rows in place.
    ///
    /// Panics if either index is out of bounds.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// m.swap_rows(0, 1);
    /// assert_eq!(m[(0, 0)], 3.0);
    /// assert_eq!(m[(1, 0)], 1.0);
    /// ```
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            let n = self.ncols;
            for j in 0..n {
                self.data.swap(a * n + j, b * n + j);
            }
        }
    }

    /// Swap two columns in place.
    ///
    /// Panics if either index is out of bounds.
    pub fn swap_cols(&mut self, a: usize, b: usize) {
        if a != b {
            for i in 0..self.nrows {
                let ia = i * self.ncols + a;
                let ib = i * self.ncols + b;
                self.data.swap(ia, ib);
            }
        }
    }
}
