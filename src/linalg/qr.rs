use alloc::vec;
use alloc::vec::Vec;

use crate::error::MatError;
use crate::traits::FloatScalar;
use crate::Matrix;

/// QR decomposition in place using Householder reflections.
///
/// On return, `a` contains the packed QR factorization:
/// - Upper triangle (including diagonal): R
/// - Lower triangle (excluding diagonal): Householder vectors (scaled)
///
/// `tau` is filled with the Householder scalar factors (length `ncols`).
///
/// The matrix must have `nrows >= ncols` and `tau.len()` must equal
/// `ncols`. Fails with `Singular` if a column becomes numerically zero
/// during orthogonalization (rank deficiency).
pub fn qr_in_place<T: FloatScalar>(a: &mut Matrix<T>, tau: &mut [T]) -> Result<(), MatError> {
    let m = a.nrows();
    let n = a.ncols();
    assert!(m >= n, "QR decomposition requires nrows >= ncols");
    assert_eq!(tau.len(), n, "tau length must equal ncols");

    for col in 0..n {
        // Squared norm of the sub-column a[col.., col]
        let mut norm_sq = T::zero();
        for i in col..m {
            let v = a[(i, col)];
            norm_sq = norm_sq + v * v;
        }

        if norm_sq < T::epsilon() {
            return Err(MatError::Singular);
        }

        // sigma = sign(a[col,col]) * ||x|| so that v0 = a + sigma avoids
        // cancellation
        let norm = norm_sq.sqrt();
        let a_col_col = a[(col, col)];
        let sigma = if a_col_col < T::zero() { -norm } else { norm };

        // v = [v0, a[col+1.., col]], stored in place scaled by 1/v0
        let v0 = a_col_col + sigma;
        let tau_val = v0 / sigma;
        tau[col] = tau_val;
        for i in (col + 1)..m {
            a[(i, col)] = a[(i, col)] / v0;
        }

        // Apply H = I - tau * v * v^T to the trailing columns
        for j in (col + 1)..n {
            let mut dot = a[(col, j)]; // v[0] = 1 after scaling
            for i in (col + 1)..m {
                dot = dot + a[(i, col)] * a[(i, j)];
            }
            dot = dot * tau_val;

            a[(col, j)] = a[(col, j)] - dot;
            for i in (col + 1)..m {
                a[(i, j)] = a[(i, j)] - dot * a[(i, col)];
            }
        }

        // The R diagonal entry
        a[(col, col)] = T::zero() - sigma;
    }

    Ok(())
}

/// QR decomposition of an `m x n` matrix with `m >= n`, using Householder
/// reflections.
///
/// Stores the packed reflection vectors, R, and tau scalars; the input
/// matrix is cloned, never mutated. Use [`q`](Qr::q) and [`r`](Qr::r) to
/// extract the factors, or [`solve`](Qr::solve) for least-squares.
///
/// # Example
///
/// ```
/// use densemat::{Matrix, Qr};
///
/// // Least-squares fit: y = c0 + c1*x to points (0,1), (1,2), (2,4)
/// let a = Matrix::from_rows(3, 2, &[
///     1.0_f64, 0.0,
///     1.0, 1.0,
///     1.0, 2.0,
/// ]);
/// let b = Matrix::from_rows(3, 1, &[1.0, 2.0, 4.0]);
/// let x = Qr::new(&a).unwrap().solve(&b).unwrap();
/// assert!((x[(0, 0)] - 5.0 / 6.0).abs() < 1e-10);
/// assert!((x[(1, 0)] - 3.0 / 2.0).abs() < 1e-10);
/// ```
#[derive(Debug)]
pub struct Qr<T> {
    qr: Matrix<T>,
    tau: Vec<T>,
}

impl<T: FloatScalar> Qr<T> {
    /// Decompose a matrix.
    ///
    /// Fails with `DimensionMismatch` if `nrows < ncols` and `Singular`
    /// if a column is rank-deficient.
    pub fn new(a: &Matrix<T>) -> Result<Self, MatError> {
        let m = a.nrows();
        let n = a.ncols();
        if m < n {
            return Err(MatError::DimensionMismatch {
                expected: (n, n),
                found: (m, n),
            });
        }
        let mut qr = a.clone();
        let mut tau = vec![T::zero(); n];
        qr_in_place(&mut qr, &mut tau)?;
        Ok(Self { qr, tau })
    }

    /// Extract the upper-triangular R factor (`n x n`).
    pub fn r(&self) -> Matrix<T> {
        let n = self.qr.ncols();
        Matrix::from_fn(n, n, |i, j| {
            if j >= i {
                self.qr[(i, j)]
            } else {
                T::zero()
            }
        })
    }

    /// Compute the thin Q factor (`m x n`, orthonormal columns).
    ///
    /// Applies the Householder reflections in reverse to the first `n`
    /// columns of the identity, so `q().transpose() * q()` is the `n x n`
    /// identity within floating tolerance.
    pub fn q(&self) -> Matrix<T> {
        let m = self.qr.nrows();
        let n = self.qr.ncols();

        // Thin identity: e_0..e_{n-1}
        let mut q = Matrix::zeros(m, n);
        for i in 0..n {
            q[(i, i)] = T::one();
        }

        // Apply reflections in reverse order
        for col in (0..n).rev() {
            let tau_val = self.tau[col];

            for j in col..n {
                let mut dot = q[(col, j)];
                for i in (col + 1)..m {
                    dot = dot + self.qr[(i, col)] * q[(i, j)];
                }
                dot = dot * tau_val;

                q[(col, j)] = q[(col, j)] - dot;
                for i in (col + 1)..m {
                    q[(i, j)] = q[(i, j)] - dot * self.qr[(i, col)];
                }
            }
        }

        q
    }

    /// Solve the least-squares problem `min ||Ax - b||` for x.
    ///
    /// `b` is an `m x k` matrix; each column is solved independently by
    /// applying the reflections (computing `Q^T b`) and back-substituting
    /// with R. Returns a new `n x k` matrix. For square input this is the
    /// exact solution of `Ax = b`.
    pub fn solve(&self, b: &Matrix<T>) -> Result<Matrix<T>, MatError> {
        let m = self.qr.nrows();
        let n = self.qr.ncols();
        if b.nrows() != m {
            return Err(MatError::DimensionMismatch {
                expected: (m, b.ncols()),
                found: (b.nrows(), b.ncols()),
            });
        }

        let mut x = Matrix::zeros(n, b.ncols());
        let mut qtb = vec![T::zero(); m];
        for col in 0..b.ncols() {
            for i in 0..m {
                qtb[i] = b[(i, col)];
            }

            // Q^T b, one reflection at a time
            for k in 0..n {
                let tau_val = self.tau[k];
                let mut dot = qtb[k];
                for i in (k + 1)..m {
                    dot = dot + self.qr[(i, k)] * qtb[i];
                }
                dot = dot * tau_val;

                qtb[k] = qtb[k] - dot;
                for i in (k + 1)..m {
                    qtb[i] = qtb[i] - dot * self.qr[(i, k)];
                }
            }

            // Back substitution with R
            for i in (0..n).rev() {
                let mut sum = qtb[i];
                for j in (i + 1)..n {
                    sum = sum - self.qr[(i, j)] * x[(j, col)];
                }
                x[(i, col)] = sum / self.qr[(i, i)];
            }
        }

        Ok(x)
    }

    /// Determinant of the original matrix.
    ///
    /// Fails with `DimensionMismatch` unless the decomposed matrix was
    /// square. The sign follows the packed R diagonal and reflection
    /// count, so only the magnitude is meaningful in general.
    pub fn det(&self) -> Result<T, MatError> {
        let m = self.qr.nrows();
        let n = self.qr.ncols();
        if m != n {
            return Err(MatError::DimensionMismatch {
                expected: (n, n),
                found: (m, n),
            });
        }
        let mut d = T::one();
        for i in 0..n {
            d = d * self.qr[(i, i)];
        }
        Ok(d)
    }
}

// ── Convenience methods on Matrix ───────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// QR decomposition using Householder reflections.
    ///
    /// Requires `nrows >= ncols`; fails with `Singular` on rank-deficient
    /// input.
    pub fn qr(&self) -> Result<Qr<T>, MatError> {
        Qr::new(self)
    }

    /// Solve `Ax = b` via QR decomposition.
    ///
    /// For tall `A` this is the least-squares solution.
    pub fn solve_qr(&self, b: &Matrix<T>) -> Result<Matrix<T>, MatError> {
        self.qr()?.solve(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn assert_near(a: f64, b: f64, msg: &str) {
        assert!(
            (a - b).abs() < TOL,
            "{}: {} vs {} (diff {})",
            msg,
            a,
            b,
            (a - b).abs()
        );
    }

    #[test]
    fn qr_square_3x3() {
        let a = Matrix::from_rows(
            3,
            3,
            &[12.0_f64, -51.0, 4.0, 6.0, 167.0, -68.0, -4.0, 24.0, -41.0],
        );
        let qr = a.qr().unwrap();
        let q = qr.q();
        let r = qr.r();

        // Q*R == A
        let prod = q.matmul(&r).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert_near(prod[(i, j)], a[(i, j)], "QR");
            }
        }

        // Q^T * Q == I
        let qtq = q.transpose().matmul(&q).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_near(qtq[(i, j)], expected, "QtQ");
            }
        }

        // R is upper-triangular
        assert_near(r[(1, 0)], 0.0, "R lower");
        assert_near(r[(2, 0)], 0.0, "R lower");
        assert_near(r[(2, 1)], 0.0, "R lower");
    }

    #[test]
    fn qr_rectangular_4x3() {
        let a = Matrix::from_rows(
            4,
            3,
            &[
                1.0_f64, -1.0, 4.0, 1.0, 4.0, -2.0, 1.0, 4.0, 2.0, 1.0, -1.0, 0.0,
            ],
        );
        let qr = a.qr().unwrap();
        let q = qr.q();
        let r = qr.r();

        // Q is 4x3, R is 3x3, Q*R == A
        let prod = q.matmul(&r).unwrap();
        for i in 0..4 {
            for j in 0..3 {
                assert_near(prod[(i, j)], a[(i, j)], "QR");
            }
        }

        // Thin Q: Q^T * Q == I_3
        let qtq = q.transpose().matmul(&q).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_near(qtq[(i, j)], expected, "QtQ");
            }
        }
    }

    #[test]
    fn qr_wide_rejected() {
        let a = Matrix::<f64>::zeros(2, 3);
        assert_eq!(
            Qr::new(&a).unwrap_err(),
            MatError::DimensionMismatch {
                expected: (3, 3),
                found: (2, 3)
            }
        );
    }

    #[test]
    fn qr_solve_square_matches_lu() {
        let a = Matrix::from_rows(
            3,
            3,
            &[2.0_f64, 1.0, -1.0, -3.0, -1.0, 2.0, -2.0, 1.0, 2.0],
        );
        let b = Matrix::from_rows(3, 1, &[8.0, -11.0, -3.0]);

        let x_qr = a.solve_qr(&b).unwrap();
        let x_lu = a.solve(&b).unwrap();

        for i in 0..3 {
            assert_near(x_qr[(i, 0)], x_lu[(i, 0)], "x");
        }
    }

    #[test]
    fn qr_least_squares() {
        // Overdetermined: fit y = c0 + c1*x to (0,1), (1,2), (2,4).
        // Normal equations give x = [5/6, 3/2].
        let a = Matrix::from_rows(3, 2, &[1.0_f64, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let b = Matrix::from_rows(3, 1, &[1.0, 2.0, 4.0]);

        let x = a.solve_qr(&b).unwrap();
        assert_near(x[(0, 0)], 5.0 / 6.0, "c0");
        assert_near(x[(1, 0)], 3.0 / 2.0, "c1");

        // Residual is orthogonal to the column space: A^T (b - Ax) == 0
        let ax = a.matmul(&x).unwrap();
        let r = &b - &ax;
        let atr = a.transpose().matmul(&r).unwrap();
        for i in 0..2 {
            assert_near(atr[(i, 0)], 0.0, "A^T r");
        }
    }

    #[test]
    fn qr_det_magnitude() {
        let a = Matrix::from_rows(
            3,
            3,
            &[6.0_f64, 1.0, 1.0, 4.0, -2.0, 5.0, 2.0, 8.0, 7.0],
        );
        let det_qr = a.qr().unwrap().det().unwrap();
        let det_lu = a.det().unwrap();
        assert_near(det_qr.abs(), det_lu.abs(), "det magnitude");
    }

    #[test]
    fn qr_rank_deficient() {
        // Zero column
        let a = Matrix::from_rows(2, 2, &[1.0_f64, 0.0, 0.0, 0.0]);
        assert_eq!(a.qr().unwrap_err(), MatError::Singular);
    }

    #[test]
    fn qr_rhs_shape_mismatch() {
        let a = Matrix::<f64>::eye(3);
        let qr = a.qr().unwrap();
        let b = Matrix::<f64>::zeros(2, 1);
        assert!(matches!(
            qr.solve(&b),
            Err(MatError::DimensionMismatch { .. })
        ));
    }
}
