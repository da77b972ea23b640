use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::MatError;
use crate::traits::Scalar;

use super::Matrix;

// ── Checked arithmetic ──────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Elementwise sum, returning a new matrix.
    ///
    /// Requires identical dimensions.
    ///
    /// ```
    /// use densemat::{Matrix, MatError};
    /// let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let b = Matrix::from_rows(2, 2, &[10.0, 20.0, 30.0, 40.0]);
    /// let c = a.add(&b).unwrap();
    /// assert_eq!(c[(1, 1)], 44.0);
    ///
    /// let wide = Matrix::<f64>::zeros(2, 3);
    /// assert!(matches!(a.add(&wide), Err(MatError::DimensionMismatch { .. })));
    /// ```
    pub fn add(&self, rhs: &Self) -> Result<Self, MatError> {
        self.check_same_shape(rhs)?;
        Ok(self.zip_with(rhs, |a, b| a + b))
    }

    /// Elementwise difference, returning a new matrix.
    ///
    /// Requires identical dimensions.
    pub fn sub(&self, rhs: &Self) -> Result<Self, MatError> {
        self.check_same_shape(rhs)?;
        Ok(self.zip_with(rhs, |a, b| a - b))
    }

    /// Matrix product, returning a new `self.nrows x rhs.ncols` matrix.
    ///
    /// Requires `self.ncols == rhs.nrows`. Each output cell is the dot
    /// product of a row of `self` and a column of `rhs`, accumulated in
    /// the element type.
    ///
    /// ```
    /// use densemat::{Matrix, MatError};
    /// let a = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let b = Matrix::from_rows(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
    /// let c = a.matmul(&b).unwrap();
    /// assert_eq!(c.nrows(), 2);
    /// assert_eq!(c.ncols(), 2);
    /// assert_eq!(c[(0, 0)], 58.0);
    ///
    /// assert!(matches!(a.matmul(&a), Err(MatError::DimensionMismatch { .. })));
    /// ```
    pub fn matmul(&self, rhs: &Self) -> Result<Self, MatError> {
        if self.ncols != rhs.nrows {
            return Err(MatError::DimensionMismatch {
                expected: (self.ncols, rhs.ncols),
                found: (rhs.nrows, rhs.ncols),
            });
        }
        let mut out = Self::zeros(self.nrows, rhs.ncols);
        for i in 0..self.nrows {
            for k in 0..self.ncols {
                let aik = self[(i, k)];
                for j in 0..rhs.ncols {
                    out[(i, j)] = out[(i, j)] + aik * rhs[(k, j)];
                }
            }
        }
        Ok(out)
    }

    /// The transpose, as a new `ncols x nrows` matrix.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let t = m.transpose();
    /// assert_eq!(t.nrows(), 3);
    /// assert_eq!(t[(2, 1)], 6.0);
    /// assert_eq!(t.transpose(), m);
    /// ```
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }

    fn check_same_shape(&self, rhs: &Self) -> Result<(), MatError> {
        if (self.nrows, self.ncols) != (rhs.nrows, rhs.ncols) {
            return Err(MatError::DimensionMismatch {
                expected: (self.nrows, self.ncols),
                found: (rhs.nrows, rhs.ncols),
            });
        }
        Ok(())
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Self {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── Operator sugar ──────────────────────────────────────────────────
//
// The operators delegate to the checked methods above and panic on shape
// mismatch. Use `add`/`sub`/`matmul` to handle mismatches as values.

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        Matrix::add(self, rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self + rhs
    }
}

impl<T: Scalar> Add<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        self + &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        Matrix::sub(self, rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self - rhs
    }
}

impl<T: Scalar> Sub<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        self - &rhs
    }
}

impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} += {}x{}",
            self.nrows,
            self.ncols,
            rhs.nrows,
            rhs.ncols,
        );
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a + b;
        }
    }
}

impl<T: Scalar> AddAssign for Matrix<T> {
    fn add_assign(&mut self, rhs: Matrix<T>) {
        *self += &rhs;
    }
}

impl<T: Scalar> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} -= {}x{}",
            self.nrows,
            self.ncols,
            rhs.nrows,
            rhs.ncols,
        );
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a - b;
        }
    }
}

impl<T: Scalar> SubAssign for Matrix<T> {
    fn sub_assign(&mut self, rhs: Matrix<T>) {
        *self -= &rhs;
    }
}

// Matrix product

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.matmul(rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        self * &rhs
    }
}

// Scalar product / quotient

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.map(|x| x * rhs)
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: T) -> Matrix<T> {
        &self * rhs
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.scale(rhs);
    }
}

impl<T: Scalar> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: T) -> Matrix<T> {
        self.map(|x| x / rhs)
    }
}

impl<T: Scalar> Div<T> for Matrix<T> {
    type Output = Matrix<T>;
    fn div(self, rhs: T) -> Matrix<T> {
        &self / rhs
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map(|x| -x)
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for Matrix<T> {
    type Output = Matrix<T>;
    fn neg(self) -> Matrix<T> {
        -&self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_elementwise() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = Matrix::from_rows(2, 2, &[10.0, 20.0, 30.0, 40.0]);
        let c = a.add(&b).unwrap();
        assert_eq!(c.as_slice(), &[11.0, 22.0, 33.0, 44.0]);
    }

    #[test]
    fn add_shape_mismatch() {
        let a = Matrix::<f64>::zeros(2, 3);
        let b = Matrix::<f64>::zeros(3, 2);
        assert_eq!(
            a.add(&b),
            Err(MatError::DimensionMismatch {
                expected: (2, 3),
                found: (3, 2)
            })
        );
    }

    #[test]
    fn sub_elementwise() {
        let a = Matrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);
        let b = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let c = a.sub(&b).unwrap();
        assert_eq!(c.as_slice(), &[4.0, 4.0, 4.0, 4.0]);
    }

    #[test]
    fn matmul_2x3_3x2() {
        let a = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let b = Matrix::from_rows(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn matmul_identity() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let id = Matrix::<f64>::eye(2);
        assert_eq!(a.matmul(&id).unwrap(), a);
        assert_eq!(id.matmul(&a).unwrap(), a);
    }

    #[test]
    fn matmul_inner_dimension_mismatch() {
        // 2x3 * 2x3: inner dimensions 3 and 2 disagree
        let a = Matrix::<f64>::zeros(2, 3);
        assert!(matches!(
            a.matmul(&a),
            Err(MatError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn transpose_shape_and_values() {
        let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let t = m.transpose();
        assert_eq!((t.nrows(), t.ncols()), (3, 2));
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(t[(j, i)], m[(i, j)]);
            }
        }
    }

    #[test]
    fn transpose_involution() {
        let m = Matrix::from_fn(3, 4, |i, j| (i * 4 + j) as f64);
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn operator_add() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = Matrix::from_rows(2, 2, &[1.0, 1.0, 1.0, 1.0]);
        let c = &a + &b;
        assert_eq!(c[(0, 0)], 2.0);
        let d = a + b;
        assert_eq!(d[(1, 1)], 5.0);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn operator_add_mismatch_panics() {
        let a = Matrix::<f64>::zeros(2, 3);
        let b = Matrix::<f64>::zeros(3, 2);
        let _ = &a + &b;
    }

    #[test]
    fn operator_mul_product() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = Matrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);
        let c = &a * &b;
        assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn scalar_mul_div() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let doubled = &a * 2.0;
        assert_eq!(doubled.as_slice(), &[2.0, 4.0, 6.0, 8.0]);
        let halved = doubled / 2.0;
        assert_eq!(halved, a);
    }

    #[test]
    fn add_assign() {
        let mut a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        a += Matrix::from_rows(2, 2, &[1.0, 1.0, 1.0, 1.0]);
        assert_eq!(a.as_slice(), &[2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn neg() {
        let a = Matrix::from_rows(1, 3, &[1.0, -2.0, 3.0]);
        let n = -&a;
        assert_eq!(n.as_slice(), &[-1.0, 2.0, -3.0]);
    }
}
