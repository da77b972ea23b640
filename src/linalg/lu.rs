use alloc::vec;
use alloc::vec::Vec;

use crate::error::MatError;
use crate::traits::FloatScalar;
use crate::Matrix;

/// Perform LU decomposition with partial pivoting, in place.
///
/// On return, `a` contains both L and U packed together:
/// - Upper triangle (including diagonal): U
/// - Lower triangle (excluding diagonal): L (diagonal of L is implicitly 1)
///
/// `perm` is filled with the row permutation indices.
/// Returns `true` if the number of row swaps was even.
///
/// The matrix must be square and `perm.len()` must equal its size.
/// Fails with `Singular` when the best available pivot is numerically zero.
pub fn lu_in_place<T: FloatScalar>(
    a: &mut Matrix<T>,
    perm: &mut [usize],
) -> Result<bool, MatError> {
    let n = a.nrows();
    assert!(a.is_square(), "LU decomposition requires a square matrix");
    assert_eq!(n, perm.len(), "permutation slice length must match matrix size");

    for (i, p) in perm.iter_mut().enumerate() {
        *p = i;
    }

    let mut even = true;

    for col in 0..n {
        // Partial pivoting: pick the row with the largest magnitude in
        // this column
        let mut max_row = col;
        let mut max_val = a[(col, col)].abs();
        for row in (col + 1)..n {
            let val = a[(row, col)].abs();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        if max_val < T::epsilon() {
            return Err(MatError::Singular);
        }

        if max_row != col {
            perm.swap(col, max_row);
            a.swap_rows(col, max_row);
            even = !even;
        }

        // Eliminate below the pivot, storing the multipliers in place of
        // the zeroed entries
        let inv_pivot = T::one() / a[(col, col)];
        for row in (col + 1)..n {
            let factor = a[(row, col)] * inv_pivot;
            a[(row, col)] = factor;
            for j in (col + 1)..n {
                a[(row, j)] = a[(row, j)] - factor * a[(col, j)];
            }
        }
    }

    Ok(even)
}

/// Solve Ax = b given the packed LU decomposition and permutation.
///
/// `lu` is the packed L/U matrix from [`lu_in_place`].
/// `perm` is the row permutation from [`lu_in_place`].
/// `b` (input) and `x` (output) are separate slices of length n.
pub fn lu_solve<T: FloatScalar>(lu: &Matrix<T>, perm: &[usize], b: &[T], x: &mut [T]) {
    let n = lu.nrows();

    // Apply permutation and forward substitution (solve Ly = Pb)
    for i in 0..n {
        let mut sum = b[perm[i]];
        for j in 0..i {
            sum = sum - lu[(i, j)] * x[j];
        }
        x[i] = sum;
    }

    // Back substitution (solve Ux = y)
    for i in (0..n).rev() {
        let mut sum = x[i];
        for j in (i + 1)..n {
            sum = sum - lu[(i, j)] * x[j];
        }
        x[i] = sum / lu[(i, i)];
    }
}

/// LU decomposition of a square matrix, with partial pivoting.
///
/// Stores the packed L/U factors and permutation vector; the input matrix
/// is cloned, never mutated. Use [`solve`](Lu::solve),
/// [`inverse`](Lu::inverse), or [`det`](Lu::det) to work with the
/// decomposition, or [`l`](Lu::l) / [`u`](Lu::u) to unpack the factors.
///
/// # Example
///
/// ```
/// use densemat::{Matrix, Lu};
///
/// let a = Matrix::from_rows(2, 2, &[2.0_f64, 1.0, 5.0, 3.0]);
/// let lu = Lu::new(&a).unwrap();
///
/// let b = Matrix::from_rows(2, 1, &[4.0, 11.0]);
/// let x = lu.solve(&b).unwrap();
/// assert!((x[(0, 0)] - 1.0).abs() < 1e-12);
/// assert!((x[(1, 0)] - 2.0).abs() < 1e-12);
///
/// assert!((lu.det() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct Lu<T> {
    lu: Matrix<T>,
    perm: Vec<usize>,
    even: bool,
}

impl<T: FloatScalar> Lu<T> {
    /// Decompose a matrix.
    ///
    /// Fails with `DimensionMismatch` on non-square input and `Singular`
    /// if the matrix is singular or numerically rank-deficient.
    pub fn new(a: &Matrix<T>) -> Result<Self, MatError> {
        if !a.is_square() {
            return Err(MatError::DimensionMismatch {
                expected: (a.nrows(), a.nrows()),
                found: (a.nrows(), a.ncols()),
            });
        }
        let n = a.nrows();
        let mut lu = a.clone();
        let mut perm = vec![0usize; n];
        let even = lu_in_place(&mut lu, &mut perm)?;
        Ok(Self { lu, perm, even })
    }

    /// Unpack the unit-lower-triangular factor L.
    ///
    /// `l() * u()` reconstructs the input with its rows in pivot order.
    pub fn l(&self) -> Matrix<T> {
        let n = self.lu.nrows();
        Matrix::from_fn(n, n, |i, j| {
            if i == j {
                T::one()
            } else if j < i {
                self.lu[(i, j)]
            } else {
                T::zero()
            }
        })
    }

    /// Unpack the upper-triangular factor U.
    pub fn u(&self) -> Matrix<T> {
        let n = self.lu.nrows();
        Matrix::from_fn(n, n, |i, j| {
            if j >= i {
                self.lu[(i, j)]
            } else {
                T::zero()
            }
        })
    }

    /// Solve Ax = b for x.
    ///
    /// `b` is an `n x k` matrix; each of its `k` columns is solved as an
    /// independent right-hand side. Returns a new `n x k` matrix.
    /// Fails with `DimensionMismatch` if `b` has the wrong row count.
    pub fn solve(&self, b: &Matrix<T>) -> Result<Matrix<T>, MatError> {
        let n = self.lu.nrows();
        if b.nrows() != n {
            return Err(MatError::DimensionMismatch {
                expected: (n, b.ncols()),
                found: (b.nrows(), b.ncols()),
            });
        }

        let mut x = Matrix::zeros(n, b.ncols());
        let mut rhs = vec![T::zero(); n];
        let mut sol = vec![T::zero(); n];
        for col in 0..b.ncols() {
            for i in 0..n {
                rhs[i] = b[(i, col)];
            }
            lu_solve(&self.lu, &self.perm, &rhs, &mut sol);
            for i in 0..n {
                x[(i, col)] = sol[i];
            }
        }
        Ok(x)
    }

    /// Compute the matrix inverse by solving against the identity columns.
    pub fn inverse(&self) -> Matrix<T> {
        let n = self.lu.nrows();
        let mut inv = Matrix::zeros(n, n);
        let mut e = vec![T::zero(); n];
        let mut col_buf = vec![T::zero(); n];

        for col in 0..n {
            if col > 0 {
                e[col - 1] = T::zero();
            }
            e[col] = T::one();

            lu_solve(&self.lu, &self.perm, &e, &mut col_buf);

            for row in 0..n {
                inv[(row, col)] = col_buf[row];
            }
        }

        inv
    }

    /// Compute the determinant: the product of U's diagonal, negated if
    /// the pivot permutation used an odd number of row swaps.
    pub fn det(&self) -> T {
        let n = self.lu.nrows();
        let mut d = if self.even {
            T::one()
        } else {
            T::zero() - T::one()
        };
        for i in 0..n {
            d = d * self.lu[(i, i)];
        }
        d
    }
}

// ── Convenience methods on Matrix ───────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// LU decomposition with partial pivoting.
    pub fn lu(&self) -> Result<Lu<T>, MatError> {
        Lu::new(self)
    }

    /// The determinant.
    ///
    /// Computed from the LU factors; a `1 x 1` matrix returns its sole
    /// element directly. A singular matrix yields `0.0` — the
    /// mathematically correct value, not an error. Fails with
    /// `DimensionMismatch` on non-square input.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[3.0_f64, 8.0, 4.0, 6.0]);
    /// assert!((a.det().unwrap() - (-14.0)).abs() < 1e-12);
    ///
    /// let singular = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
    /// assert_eq!(singular.det().unwrap(), 0.0);
    /// ```
    pub fn det(&self) -> Result<T, MatError> {
        if !self.is_square() {
            return Err(MatError::DimensionMismatch {
                expected: (self.nrows(), self.nrows()),
                found: (self.nrows(), self.ncols()),
            });
        }
        if self.nrows() == 1 {
            return Ok(self[(0, 0)]);
        }
        match self.lu() {
            Ok(lu) => Ok(lu.det()),
            Err(MatError::Singular) => Ok(T::zero()),
            Err(e) => Err(e),
        }
    }

    /// Solve `Ax = b` for `x` via LU decomposition.
    ///
    /// `b` is an `n x k` matrix of right-hand-side columns. Neither
    /// operand is mutated.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[2.0_f64, 1.0, 5.0, 3.0]);
    /// let b = Matrix::from_rows(2, 1, &[4.0, 11.0]);
    /// let x = a.solve(&b).unwrap();
    /// assert!((x[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!((x[(1, 0)] - 2.0).abs() < 1e-12);
    /// ```
    pub fn solve(&self, b: &Matrix<T>) -> Result<Matrix<T>, MatError> {
        self.lu()?.solve(b)
    }

    /// Matrix inverse via LU decomposition.
    ///
    /// Fails with `DimensionMismatch` on non-square input and `Singular`
    /// if no inverse exists.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]);
    /// let a_inv = a.inverse().unwrap();
    /// let id = &a * &a_inv;
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!((id[(0, 1)]).abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Result<Matrix<T>, MatError> {
        Ok(self.lu()?.inverse())
    }
}
