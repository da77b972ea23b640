mod block;
mod edit;
mod ops;
mod util;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::traits::Scalar;

/// Dense matrix with runtime dimensions.
///
/// Row-major `Vec<T>` storage addressed by zero-based `(row, col)` pairs.
/// Every matrix owns its storage exclusively; operations that return a
/// matrix allocate a new, independently owned instance, and in-place
/// editing operations mutate only the receiver. A live matrix always has
/// `nrows >= 1` and `ncols >= 1`.
///
/// # Examples
///
/// ```
/// use densemat::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let id = Matrix::<f64>::eye(3);
/// assert_eq!(id[(0, 0)], 1.0);
/// assert_eq!(id[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create an `nrows x ncols` matrix filled with `value`.
    ///
    /// Panics if either dimension is zero.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::fill(2, 3, 7.0_f64);
    /// assert_eq!(m[(0, 0)], 7.0);
    /// assert_eq!(m[(1, 2)], 7.0);
    /// ```
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Self {
        assert!(
            nrows > 0 && ncols > 0,
            "matrix dimensions must be at least 1x1, got {}x{}",
            nrows,
            ncols,
        );
        Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `nrows x ncols` matrix of zeros.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::fill(nrows, ncols, T::zero())
    }

    /// Create an `nrows x ncols` matrix of ones.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::<f64>::ones(2, 2);
    /// assert_eq!(m[(1, 1)], 1.0);
    /// ```
    pub fn ones(nrows: usize, ncols: usize) -> Self {
        Self::fill(nrows, ncols, T::one())
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let id = Matrix::<f64>::eye(3);
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(0, 1)], 0.0);
    /// assert_eq!(id[(2, 2)], 1.0);
    /// ```
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Panics if `row_major.len() != nrows * ncols`.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Self {
        Self::from_vec(nrows, ncols, row_major.to_vec())
    }

    /// Create a matrix from an owned `Vec<T>` in row-major order.
    ///
    /// Panics if `data.len() != nrows * ncols` or either dimension is zero.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(1, 1)], 4.0);
    /// ```
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert!(
            nrows > 0 && ncols > 0,
            "matrix dimensions must be at least 1x1, got {}x{}",
            nrows,
            ncols,
        );
        assert_eq!(
            data.len(),
            nrows * ncols,
            "data length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self { data, nrows, ncols }
    }

    /// Create a matrix by calling `f(row, col)` for each element,
    /// in row-major order.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        assert!(
            nrows > 0 && ncols > 0,
            "matrix dimensions must be at least 1x1, got {}x{}",
            nrows,
            ncols,
        );
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }
}

#[cfg(feature = "rand")]
impl<T: Scalar> Matrix<T>
where
    rand::distributions::Standard: rand::distributions::Distribution<T>,
{
    /// Create a matrix filled with random values from the standard
    /// distribution (`[0, 1)` for floats), using the thread-local RNG.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::<f64>::random(3, 4);
    /// assert!(m.iter().all(|&x| (0.0..1.0).contains(&x)));
    /// ```
    pub fn random(nrows: usize, ncols: usize) -> Self {
        Self::random_with(&mut rand::thread_rng(), nrows, ncols)
    }

    /// Create a matrix filled with random values drawn from `rng`.
    pub fn random_with<R: rand::Rng + ?Sized>(rng: &mut R, nrows: usize, ncols: usize) -> Self {
        Self::from_fn(nrows, ncols, |_, _| rng.gen())
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Bounds-checked element access.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.get(1, 1), Some(&4.0));
    /// assert_eq!(m.get(2, 0), None);
    /// ```
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.nrows && col < self.ncols {
            Some(&self.data[row * self.ncols + col])
        } else {
            None
        }
    }

    /// Bounds-checked mutable element access.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.nrows && col < self.ncols {
            Some(&mut self.data[row * self.ncols + col])
        } else {
            None
        }
    }

    /// View the entire matrix as a flat slice in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the entire matrix as a mutable flat slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// View row `i` as a slice.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m.row_slice(0), &[1.0, 2.0, 3.0]);
    /// assert_eq!(m.row_slice(1), &[4.0, 5.0, 6.0]);
    /// ```
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        let start = i * self.ncols;
        &self.data[start..start + self.ncols]
    }

    /// View row `i` as a mutable slice.
    #[inline]
    pub fn row_slice_mut(&mut self, i: usize) -> &mut [T] {
        let start = i * self.ncols;
        let end = start + self.ncols;
        &mut self.data[start..end]
    }

    /// Iterate over all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Matrix<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
