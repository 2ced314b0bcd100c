//! Matrix operations
//!
//! Provides a generic 2D matrix with row-major storage, elementwise
//! arithmetic, matrix/vector products, concatenation, and the cofactor-based
//! determinant family.
//!
//! # Example
//!
//! ```
//! use linalg_core::Matrix;
//!
//! // Create a 2x3 matrix
//! let m: Matrix<f64> = Matrix::zeros(2, 3);
//! assert_eq!(m.rows(), 2);
//! assert_eq!(m.cols(), 3);
//! ```

use std::fmt;

use crate::backends::scalar::ScalarBackend;
use crate::backends::ElementwiseBackend;
use crate::error::Axis;
use crate::shape::{check_bound, check_len};
use crate::{LinalgError, Result, Scalar, Shape, Tolerance, Vector};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// A 2D matrix with row-major storage
///
/// Data is stored in row-major format (C-style), where consecutive elements
/// in memory belong to the same row.
///
/// # Storage Layout
///
/// For a 2x3 matrix:
/// ```text
/// [[a, b, c],
///  [d, e, f]]
/// ```
/// Data is stored as: [a, b, c, d, e, f]
///
/// The buffer length always equals `rows * cols`. Operations that change the
/// shape return a new matrix; the `*_in_place` forms compute the new matrix
/// first and then replace `self`, so a failed precondition leaves `self`
/// untouched.
///
/// # Example
///
/// ```
/// use linalg_core::Matrix;
///
/// let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
/// assert_eq!(m.get(0, 0), Some(&1));
/// assert_eq!(m.get(0, 1), Some(&2));
/// assert_eq!(m.get(1, 0), Some(&3));
/// assert_eq!(m.get(1, 1), Some(&4));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Creates a new zero-filled matrix
    ///
    /// # Example
    ///
    /// ```
    /// use linalg_core::Matrix;
    ///
    /// let m: Matrix<i32> = Matrix::new(3, 4);
    /// assert_eq!(m.rows(), 3);
    /// assert_eq!(m.cols(), 4);
    /// assert!(m.is_zero());
    /// ```
    pub fn new(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Creates a zero-filled matrix of the given shape
    pub fn with_size(size: Shape) -> Self {
        Matrix::new(size.rows, size.cols)
    }

    /// Creates a matrix filled with zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix::new(rows, cols)
    }

    /// Creates a matrix from a vector of data
    ///
    /// # Arguments
    ///
    /// * `rows` - Number of rows
    /// * `cols` - Number of columns
    /// * `data` - Vector containing matrix elements in row-major order
    ///
    /// # Errors
    ///
    /// Returns `LengthMismatch` if `data.len() != rows * cols`
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        check_len(rows * cols, data.len())?;
        Ok(Matrix { rows, cols, data })
    }

    /// Creates a matrix from a slice by copying the data
    ///
    /// # Errors
    ///
    /// Returns `LengthMismatch` if `data.len() != rows * cols`
    pub fn from_slice(rows: usize, cols: usize, data: &[T]) -> Result<Self> {
        Self::from_vec(rows, cols, data.to_vec())
    }

    /// Creates a matrix by evaluating `f(row, col)` for every element
    ///
    /// # Example
    ///
    /// ```
    /// use linalg_core::Matrix;
    ///
    /// let m = Matrix::from_fn(2, 2, |i, j| (i * 2 + j) as i32);
    /// assert_eq!(m.as_slice(), &[0, 1, 2, 3]);
    /// ```
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Matrix { rows, cols, data }
    }

    /// Creates an identity matrix (square matrix with 1s on diagonal)
    ///
    /// # Example
    ///
    /// ```
    /// use linalg_core::Matrix;
    ///
    /// let m: Matrix<f64> = Matrix::identity(3);
    /// assert_eq!(m.get(0, 0), Some(&1.0));
    /// assert_eq!(m.get(0, 1), Some(&0.0));
    /// assert!(m.is_identity());
    /// ```
    pub fn identity(n: usize) -> Self {
        let mut m = Matrix::new(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        m
    }

    /// Creates a single-column matrix holding a copy of `v`
    pub fn from_column(v: &Vector<T>) -> Self {
        Matrix {
            rows: v.len(),
            cols: 1,
            data: v.as_slice().to_vec(),
        }
    }

    /// Creates a single-row matrix holding a copy of `v`
    pub fn from_row(v: &Vector<T>) -> Self {
        Matrix {
            rows: 1,
            cols: v.len(),
            data: v.as_slice().to_vec(),
        }
    }

    /// Returns the number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the shape as a [`Shape`]
    pub fn size(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Returns the larger of the two dimensions
    pub fn length(&self) -> usize {
        self.rows.max(self.cols)
    }

    /// True when the matrix holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Gets a reference to an element at (row, col)
    ///
    /// Returns `None` if indices are out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            None
        } else {
            self.data.get(row * self.cols + col)
        }
    }

    /// Gets a mutable reference to an element at (row, col)
    ///
    /// Returns `None` if indices are out of bounds
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row >= self.rows || col >= self.cols {
            None
        } else {
            let idx = row * self.cols + col;
            self.data.get_mut(idx)
        }
    }

    /// Overwrites the element at (row, col)
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if either index is out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.size().check_index(row, col)?;
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Returns a reference to the underlying data
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix and return its row-major buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Copies row `row` into a new vector
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `row >= rows()`
    pub fn row(&self, row: usize) -> Result<Vector<T>> {
        check_bound(Axis::Row, row, self.rows)?;
        let start = row * self.cols;
        Ok(Vector::from_slice(&self.data[start..start + self.cols]))
    }

    /// Copies column `col` into a new vector
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `col >= cols()`
    pub fn column(&self, col: usize) -> Result<Vector<T>> {
        check_bound(Axis::Column, col, self.cols)?;
        Ok(Vector::from_vec(
            (0..self.rows).map(|i| self.at(i, col)).collect(),
        ))
    }

    /// Copies the `rows x cols` sub-matrix whose top-left element is (row, col)
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if the block's exclusive end row or end
    /// column lies past the matrix.
    ///
    /// # Example
    ///
    /// ```
    /// use linalg_core::Matrix;
    ///
    /// let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as i32);
    /// let b = m.block(1, 1, 2, 2).unwrap();
    /// assert_eq!(b.as_slice(), &[4, 5, 7, 8]);
    /// ```
    pub fn block(&self, row: usize, col: usize, rows: usize, cols: usize) -> Result<Self> {
        check_bound(Axis::Row, row.saturating_add(rows), self.rows + 1)?;
        check_bound(Axis::Column, col.saturating_add(cols), self.cols + 1)?;
        Ok(Matrix::from_fn(rows, cols, |i, j| self.at(row + i, col + j)))
    }

    /// Allocates a same-shape buffer and fills it with `kernel`
    fn map_with(&self, kernel: impl FnOnce(&[T], &mut [T])) -> Self {
        let mut data = vec![T::zero(); self.data.len()];
        kernel(&self.data, &mut data);
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        }
    }

    /// Element-wise addition
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` unless both matrices have the same shape
    ///
    /// # Example
    ///
    /// ```
    /// use linalg_core::Matrix;
    ///
    /// let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    /// let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8]).unwrap();
    /// assert_eq!(a.add(&b).unwrap().as_slice(), &[6, 8, 10, 12]);
    /// ```
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.size().require_same(other.size())?;
        Ok(self.map_with(|a, r| ScalarBackend::add(a, &other.data, r)))
    }

    /// Element-wise subtraction
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` unless both matrices have the same shape
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.size().require_same(other.size())?;
        Ok(self.map_with(|a, r| ScalarBackend::sub(a, &other.data, r)))
    }

    /// Matrix multiplication (matmul)
    ///
    /// Computes `C = A × B` where A is `m×n`, B is `n×p`, and C is `m×p`.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if matrix dimensions are incompatible
    /// (i.e., `self.cols != other.rows`)
    ///
    /// # Example
    ///
    /// ```
    /// use linalg_core::Matrix;
    ///
    /// let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
    /// let c = a.matmul(&b).unwrap();
    ///
    /// // [[1, 2],   [[5, 6],   [[19, 22],
    /// //  [3, 4]] ×  [7, 8]] =  [43, 50]]
    /// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self, other), fields(lhs = %self.size(), rhs = %other.size())))]
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(LinalgError::ShapeMismatch {
                expected: Shape::new(self.cols, other.cols),
                actual: other.size(),
            });
        }

        let mut result = Matrix::new(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = T::zero();
                for k in 0..self.cols {
                    sum = sum + self.at(i, k) * other.at(k, j);
                }
                result.data[i * other.cols + j] = sum;
            }
        }

        Ok(result)
    }

    /// Matrix-vector multiplication (column vector): A × v
    ///
    /// Each entry of the result is the dot product of a matrix row with `v`.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if `v.len() != self.cols()`
    ///
    /// # Example
    ///
    /// ```
    /// use linalg_core::{Matrix, Vector};
    ///
    /// let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// let v = Vector::from_slice(&[1, 2, 3]);
    /// assert_eq!(m.matvec(&v).unwrap().as_slice(), &[14, 32]);
    /// ```
    pub fn matvec(&self, v: &Vector<T>) -> Result<Vector<T>> {
        if v.len() != self.cols {
            return Err(LinalgError::ShapeMismatch {
                expected: Shape::column(self.cols),
                actual: Shape::column(v.len()),
            });
        }

        let v_slice = v.as_slice();
        let result = (0..self.rows)
            .map(|i| {
                let row_start = i * self.cols;
                ScalarBackend::dot(&self.data[row_start..row_start + self.cols], v_slice)
            })
            .collect();

        Ok(Vector::from_vec(result))
    }

    /// Vector-matrix multiplication (row vector): v^T × A
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if `v.len() != m.rows()`
    ///
    /// # Example
    ///
    /// ```
    /// use linalg_core::{Matrix, Vector};
    ///
    /// let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// let v = Vector::from_slice(&[1, 2]);
    /// assert_eq!(Matrix::vecmat(&v, &m).unwrap().as_slice(), &[9, 12, 15]);
    /// ```
    pub fn vecmat(v: &Vector<T>, m: &Matrix<T>) -> Result<Vector<T>> {
        if v.len() != m.rows {
            return Err(LinalgError::ShapeMismatch {
                expected: Shape::row(m.rows),
                actual: Shape::row(v.len()),
            });
        }

        let result = (0..m.cols)
            .map(|j| {
                let mut sum = T::zero();
                for (i, &x) in v.iter().enumerate() {
                    sum = sum + x * m.at(i, j);
                }
                sum
            })
            .collect();

        Ok(Vector::from_vec(result))
    }

    /// Transpose the matrix (swap rows and columns)
    ///
    /// # Example
    ///
    /// ```
    /// use linalg_core::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// let t = m.transpose();
    ///
    /// // [[1, 2, 3],     [[1, 4],
    /// //  [4, 5, 6]]  →   [2, 5],
    /// //                  [3, 6]]
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t.as_slice(), &[1, 4, 2, 5, 3, 6]);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self), fields(shape = %self.size())))]
    pub fn transpose(&self) -> Self {
        let mut result = Matrix::new(self.cols, self.rows);

        // Block-wise transpose keeps both source and destination rows in cache
        const BLOCK_SIZE: usize = 64;

        for i_block in (0..self.rows).step_by(BLOCK_SIZE) {
            for j_block in (0..self.cols).step_by(BLOCK_SIZE) {
                let i_end = (i_block + BLOCK_SIZE).min(self.rows);
                let j_end = (j_block + BLOCK_SIZE).min(self.cols);

                for i in i_block..i_end {
                    let src_row_start = i * self.cols;
                    for j in j_block..j_end {
                        result.data[j * result.cols + i] = self.data[src_row_start + j];
                    }
                }
            }
        }

        result
    }

    /// Horizontal concatenation: `self` columns followed by `other` columns
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` unless both matrices have the same number of rows
    pub fn hcat(&self, other: &Self) -> Result<Self> {
        if self.rows != other.rows {
            return Err(LinalgError::ShapeMismatch {
                expected: Shape::new(self.rows, other.cols),
                actual: other.size(),
            });
        }

        let cols = self.cols + other.cols;
        let mut data = Vec::with_capacity(self.rows * cols);
        for i in 0..self.rows {
            data.extend_from_slice(&self.data[i * self.cols..(i + 1) * self.cols]);
            data.extend_from_slice(&other.data[i * other.cols..(i + 1) * other.cols]);
        }

        Ok(Matrix {
            rows: self.rows,
            cols,
            data,
        })
    }

    /// Horizontal concatenation with `v` as one extra trailing column
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if `v.len() != self.rows()`
    pub fn hcat_vector(&self, v: &Vector<T>) -> Result<Self> {
        self.hcat(&Matrix::from_column(v))
    }

    /// Vertical concatenation: `self` rows followed by `other` rows
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` unless both matrices have the same number of columns
    pub fn vcat(&self, other: &Self) -> Result<Self> {
        if self.cols != other.cols {
            return Err(LinalgError::ShapeMismatch {
                expected: Shape::new(other.rows, self.cols),
                actual: other.size(),
            });
        }

        let mut data = Vec::with_capacity(self.data.len() + other.data.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&other.data);

        Ok(Matrix {
            rows: self.rows + other.rows,
            cols: self.cols,
            data,
        })
    }

    /// Vertical concatenation with `v` as one extra trailing row
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if `v.len() != self.cols()`
    pub fn vcat_vector(&self, v: &Vector<T>) -> Result<Self> {
        self.vcat(&Matrix::from_row(v))
    }

    /// Adds `scalar` to every element
    pub fn add_scalar(&self, scalar: T) -> Self {
        self.map_with(|a, r| ScalarBackend::add_scalar(a, scalar, r))
    }

    /// Subtracts `scalar` from every element
    pub fn sub_scalar(&self, scalar: T) -> Self {
        self.map_with(|a, r| ScalarBackend::sub_scalar(a, scalar, r))
    }

    /// Multiplies every element by `scalar`
    pub fn scale(&self, scalar: T) -> Self {
        self.map_with(|a, r| ScalarBackend::scale(a, scalar, r))
    }

    /// Divides every element by `scalar` (truncating for integer types)
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if `scalar` is zero
    pub fn div_scalar(&self, scalar: T) -> Result<Self> {
        if scalar.is_zero() {
            return Err(LinalgError::DivisionByZero);
        }
        Ok(self.map_with(|a, r| ScalarBackend::div_scalar(a, scalar, r)))
    }

    /// Raises every element to `exponent` with the general power function
    pub fn powf(&self, exponent: f64) -> Self {
        self.map_with(|a, r| ScalarBackend::powf(a, exponent, r))
    }

    /// Sub-matrix with row `row` and column `col` removed
    ///
    /// The remaining rows and columns keep their relative order.
    ///
    /// # Errors
    ///
    /// - `NotSquare` if the matrix is not square
    /// - `IndexOutOfRange` if `row` or `col` is out of bounds
    ///
    /// # Example
    ///
    /// ```
    /// use linalg_core::Matrix;
    ///
    /// let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as i32);
    /// assert_eq!(m.minor(1, 1).unwrap().as_slice(), &[0, 2, 6, 8]);
    /// ```
    pub fn minor(&self, row: usize, col: usize) -> Result<Self> {
        let size = self.size();
        size.require_square()?;
        size.check_index(row, col)?;

        let n = self.rows - 1;
        let mut data = Vec::with_capacity(n * n);
        for i in (0..self.rows).filter(|&i| i != row) {
            for j in (0..self.cols).filter(|&j| j != col) {
                data.push(self.at(i, j));
            }
        }

        Ok(Matrix {
            rows: n,
            cols: n,
            data,
        })
    }

    /// Signed determinant of `minor(row, col)`
    ///
    /// The sign is `+` when `row + col` is even and `-` otherwise.
    ///
    /// # Errors
    ///
    /// - `NotSquare` if the matrix is not square
    /// - `IndexOutOfRange` if `row` or `col` is out of bounds
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn cofactor(&self, row: usize, col: usize) -> Result<T> {
        let det = self.minor(row, col)?.determinant()?;
        Ok(if (row + col) % 2 == 0 { det } else { -det })
    }

    /// Determinant
    ///
    /// - `0×0`: one (empty product)
    /// - `1×1`: the single element
    /// - `2×2`: `a*d - b*c`
    /// - `n×n`, `n ≥ 3`: element (0, 0) of `self × adjugate(self)`, from the
    ///   identity `A·adj(A) = det(A)·I`
    ///
    /// The general case recurses through `adjugate → cofactor → determinant`
    /// on `(n-1)×(n-1)` minors, so its cost grows factorially. See
    /// [`Matrix::determinant_lu`] for an `O(n³)` alternative on float types.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` if the matrix is not square
    ///
    /// # Example
    ///
    /// ```
    /// use linalg_core::Matrix;
    ///
    /// let m = Matrix::from_vec(3, 3, vec![6, 1, 1, 4, -2, 5, 2, 8, 7]).unwrap();
    /// assert_eq!(m.determinant().unwrap(), -306);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self), fields(shape = %self.size())))]
    pub fn determinant(&self) -> Result<T> {
        self.size().require_square()?;

        let d = &self.data;
        let det = match self.rows {
            0 => T::one(),
            1 => d[0],
            2 => d[0] * d[3] - d[1] * d[2],
            _ => {
                let adjugate = self.adjugate()?;
                self.matmul(&adjugate)?.data[0]
            }
        };

        Ok(det)
    }

    /// Adjugate: transpose of the cofactor matrix
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` if the matrix is not square
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self), fields(shape = %self.size())))]
    pub fn adjugate(&self) -> Result<Self> {
        self.size().require_square()?;

        let n = self.rows;
        let mut cofactors = Matrix::new(n, n);
        for i in 0..n {
            for j in 0..n {
                cofactors.data[i * n + j] = self.cofactor(i, j)?;
            }
        }

        Ok(cofactors.transpose())
    }

    /// Inverse: `adjugate(self) / determinant(self)`, elementwise
    ///
    /// Integer element types use truncating division, so the result is the
    /// exact inverse only when every adjugate entry is a multiple of the
    /// determinant.
    ///
    /// # Errors
    ///
    /// - `NotSquare` if the matrix is not square
    /// - `SingularMatrix` if the determinant is zero
    ///
    /// # Example
    ///
    /// ```
    /// use linalg_core::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![4.0, 7.0, 2.0, 6.0]).unwrap();
    /// let inv = m.inverse().unwrap();
    /// assert_eq!(inv.as_slice(), &[0.6, -0.7, -0.2, 0.4]);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(shape = %self.size())))]
    pub fn inverse(&self) -> Result<Self> {
        let adjugate = self.adjugate()?;
        // Same value determinant() returns, without expanding the adjugate twice
        let det = if self.rows < 3 {
            self.determinant()?
        } else {
            self.matmul(&adjugate)?.data[0]
        };
        if det.is_zero() {
            #[cfg(feature = "tracing")]
            tracing::debug!(shape = %self.size(), "refusing to invert singular matrix");
            return Err(LinalgError::SingularMatrix);
        }

        adjugate.div_scalar(det)
    }

    /// Sum of the diagonal elements
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` if the matrix is not square
    pub fn trace(&self) -> Result<T> {
        self.size().require_square()?;
        let diagonal: Vec<T> = (0..self.rows).map(|i| self.at(i, i)).collect();
        Ok(ScalarBackend::sum(&diagonal))
    }

    /// True when `rows == cols`
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// True for a square matrix whose off-diagonal elements are all zero
    pub fn is_diagonal(&self) -> bool {
        self.is_square()
            && (0..self.rows)
                .all(|i| (0..self.cols).all(|j| i == j || self.at(i, j).is_zero()))
    }

    /// True for a square diagonal matrix with every diagonal element one
    pub fn is_identity(&self) -> bool {
        self.is_diagonal() && (0..self.rows).all(|i| self.at(i, i).is_one())
    }

    /// True for a square matrix with `self[i][j] == self[j][i]`
    pub fn is_symmetric(&self) -> bool {
        self.is_square()
            && (0..self.rows).all(|i| (i + 1..self.cols).all(|j| self.at(i, j) == self.at(j, i)))
    }

    /// True for a square matrix with `self[i][j] == -self[j][i]` for `i != j`
    ///
    /// The diagonal is not inspected.
    pub fn is_skew_symmetric(&self) -> bool {
        self.is_square()
            && (0..self.rows)
                .all(|i| (i + 1..self.cols).all(|j| self.at(i, j) == -self.at(j, i)))
    }

    /// True when every element equals zero
    pub fn is_zero(&self) -> bool {
        ScalarBackend::all_equal(&self.data, T::zero())
    }

    /// True when every element equals one
    pub fn is_one(&self) -> bool {
        ScalarBackend::all_equal(&self.data, T::one())
    }

    /// Element-wise comparison within `tolerance`
    ///
    /// Matrices of different shape never compare equal.
    pub fn approx_eq(&self, other: &Self, tolerance: &Tolerance) -> bool {
        self.size() == other.size()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| tolerance.approx_eq(a.as_f64(), b.as_f64()))
    }

    /// `self = self + other`
    pub fn add_in_place(&mut self, other: &Self) -> Result<()> {
        *self = self.add(other)?;
        Ok(())
    }

    /// `self = self - other`
    pub fn sub_in_place(&mut self, other: &Self) -> Result<()> {
        *self = self.sub(other)?;
        Ok(())
    }

    /// `self = self × other`
    pub fn matmul_in_place(&mut self, other: &Self) -> Result<()> {
        *self = self.matmul(other)?;
        Ok(())
    }

    /// `self = [self | other]`
    pub fn hcat_in_place(&mut self, other: &Self) -> Result<()> {
        *self = self.hcat(other)?;
        Ok(())
    }

    /// `self = [self | v]`
    pub fn hcat_vector_in_place(&mut self, v: &Vector<T>) -> Result<()> {
        *self = self.hcat_vector(v)?;
        Ok(())
    }

    /// `self = [self ; other]`
    pub fn vcat_in_place(&mut self, other: &Self) -> Result<()> {
        *self = self.vcat(other)?;
        Ok(())
    }

    /// `self = [self ; v]`
    pub fn vcat_vector_in_place(&mut self, v: &Vector<T>) -> Result<()> {
        *self = self.vcat_vector(v)?;
        Ok(())
    }

    /// `self = self + scalar` elementwise
    pub fn add_scalar_in_place(&mut self, scalar: T) {
        *self = self.add_scalar(scalar);
    }

    /// `self = self - scalar` elementwise
    pub fn sub_scalar_in_place(&mut self, scalar: T) {
        *self = self.sub_scalar(scalar);
    }

    /// `self = self * scalar` elementwise
    pub fn scale_in_place(&mut self, scalar: T) {
        *self = self.scale(scalar);
    }

    /// `self = self / scalar` elementwise
    pub fn div_scalar_in_place(&mut self, scalar: T) -> Result<()> {
        *self = self.div_scalar(scalar)?;
        Ok(())
    }

    /// `self = self ^ exponent` elementwise
    pub fn powf_in_place(&mut self, exponent: f64) {
        *self = self.powf(exponent);
    }
}

impl<T: Scalar> From<Vector<T>> for Matrix<T> {
    /// The vector becomes a single column
    fn from(v: Vector<T>) -> Self {
        let rows = v.len();
        Matrix {
            rows,
            cols: 1,
            data: v.into_vec(),
        }
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.at(i, j))?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_2x2() -> (Matrix<i32>, Matrix<i32>) {
        let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8]).unwrap();
        (a, b)
    }

    /// Fixed 4×4 integer matrix with determinant 24
    fn sample_4x4() -> Matrix<i64> {
        Matrix::from_vec(
            4,
            4,
            vec![3, 2, 0, 1, 4, 0, 1, 2, 3, 0, 2, 1, 9, 2, 3, 1],
        )
        .unwrap()
    }

    // ===== Construction Tests =====

    #[test]
    fn test_matrix_new() {
        let m: Matrix<i32> = Matrix::new(3, 4);
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 4);
        assert_eq!(m.shape(), (3, 4));
        assert_eq!(m.size(), Shape::new(3, 4));
        assert_eq!(m.as_slice().len(), 12);
        assert!(m.is_zero());
    }

    #[test]
    fn test_matrix_with_size() {
        let m: Matrix<f64> = Matrix::with_size(Shape::new(3, 4));
        assert_eq!(m.shape(), (3, 4));
        for &val in m.as_slice() {
            assert_eq!(val, 0.0);
        }
    }

    #[test]
    fn test_matrix_from_vec_invalid_size() {
        let result = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]);
        assert_eq!(
            result,
            Err(LinalgError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_matrix_clone_is_deep() {
        let mut m = Matrix::from_fn(3, 4, |i, j| (i + j) as i32);
        let copy = m.clone();
        m.set(0, 0, 100).unwrap();
        assert_eq!(copy.get(0, 0), Some(&0));
        for i in 0..3 {
            for j in 0..4 {
                if (i, j) != (0, 0) {
                    assert_eq!(copy.get(i, j), m.get(i, j));
                }
            }
        }
    }

    #[test]
    fn test_matrix_identity() {
        let m: Matrix<i32> = Matrix::identity(3);
        assert_eq!(m.as_slice(), &[1, 0, 0, 0, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_matrix_from_vector() {
        let v = Vector::from_vec((0..4).collect::<Vec<i32>>());
        let col = Matrix::from_column(&v);
        assert_eq!(col.shape(), (4, 1));
        assert_eq!(col.as_slice(), v.as_slice());

        let row = Matrix::from_row(&v);
        assert_eq!(row.shape(), (1, 4));

        let converted: Matrix<i32> = v.clone().into();
        assert_eq!(converted, col);
    }

    #[test]
    fn test_matrix_length() {
        assert_eq!(Matrix::<i32>::new(2, 5).length(), 5);
        assert_eq!(Matrix::<i32>::new(7, 3).length(), 7);
    }

    // ===== Element Access Tests =====

    #[test]
    fn test_matrix_get_out_of_bounds() {
        let m: Matrix<i32> = Matrix::new(2, 2);
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
        assert_eq!(m.get(2, 2), None);
    }

    #[test]
    fn test_matrix_set_out_of_bounds() {
        let mut m: Matrix<i32> = Matrix::new(2, 3);
        assert_eq!(
            m.set(0, 3, 1),
            Err(LinalgError::IndexOutOfRange {
                axis: Axis::Column,
                index: 3,
                bound: 3
            })
        );
        assert!(m.is_zero());
    }

    #[test]
    fn test_matrix_get_mut() {
        let mut m: Matrix<i32> = Matrix::new(2, 2);
        *m.get_mut(1, 0).unwrap() = 9;
        assert_eq!(m.as_slice(), &[0, 0, 9, 0]);
        assert!(m.get_mut(2, 0).is_none());
    }

    #[test]
    fn test_row_column_extraction() {
        let m = Matrix::from_fn(2, 3, |i, j| (i * 3 + j) as i32);
        assert_eq!(m.row(1).unwrap().as_slice(), &[3, 4, 5]);
        assert_eq!(m.column(2).unwrap().as_slice(), &[2, 5]);
        assert!(m.row(2).is_err());
        assert!(m.column(3).is_err());
    }

    #[test]
    fn test_block() {
        let m = Matrix::from_fn(3, 4, |i, j| (i * 4 + j) as i32);
        assert_eq!(m.block(0, 0, 3, 4).unwrap(), m);
        assert_eq!(m.block(1, 2, 2, 2).unwrap().as_slice(), &[6, 7, 10, 11]);
        assert_eq!(m.block(3, 4, 0, 0).unwrap().shape(), (0, 0));
        assert_eq!(
            m.block(2, 0, 2, 1),
            Err(LinalgError::IndexOutOfRange {
                axis: Axis::Row,
                index: 4,
                bound: 4
            })
        );
        assert!(m.block(0, 3, 1, 2).is_err());
    }

    // ===== Multi-Matrix Operation Tests =====

    #[test]
    fn test_add_sub() {
        let (a, b) = sample_2x2();
        assert_eq!(a.add(&b).unwrap().as_slice(), &[6, 8, 10, 12]);
        assert_eq!(a.sub(&b).unwrap().as_slice(), &[-4, -4, -4, -4]);
    }

    #[test]
    fn test_add_shape_mismatch() {
        let a: Matrix<i32> = Matrix::new(2, 2);
        let b: Matrix<i32> = Matrix::new(2, 3);
        assert_eq!(
            a.add(&b),
            Err(LinalgError::ShapeMismatch {
                expected: Shape::new(2, 2),
                actual: Shape::new(2, 3)
            })
        );
        assert!(a.sub(&b).is_err());
    }

    #[test]
    fn test_matmul_basic() {
        let (a, b) = sample_2x2();
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.as_slice(), &[19, 22, 43, 50]);
    }

    #[test]
    fn test_matmul_non_square() {
        // 2×3 × 3×2 = 2×2
        let a = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let b = Matrix::from_vec(3, 2, vec![7, 8, 9, 10, 11, 12]).unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.as_slice(), &[58, 64, 139, 154]);
    }

    #[test]
    fn test_matmul_identity() {
        let (a, _) = sample_2x2();
        assert_eq!(a.matmul(&Matrix::identity(2)).unwrap(), a);
        assert_eq!(Matrix::identity(2).matmul(&a).unwrap(), a);
    }

    #[test]
    fn test_matmul_dimension_mismatch() {
        let a: Matrix<i32> = Matrix::new(2, 3);
        let b: Matrix<i32> = Matrix::new(2, 2);
        assert_eq!(
            a.matmul(&b),
            Err(LinalgError::ShapeMismatch {
                expected: Shape::new(3, 2),
                actual: Shape::new(2, 2)
            })
        );
    }

    #[test]
    fn test_matvec_vecmat() {
        let m = Matrix::from_fn(3, 3, |i, j| (i + j) as i32);
        let v = Vector::from_vec((0..3).map(|i| i + 2).collect());
        // rows [0,1,2],[1,2,3],[2,3,4] · [2,3,4]
        assert_eq!(m.matvec(&v).unwrap().as_slice(), &[11, 20, 29]);
        assert_eq!(Matrix::vecmat(&v, &m).unwrap().as_slice(), &[11, 20, 29]);

        let rect = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let w = Vector::from_slice(&[1, 2]);
        assert_eq!(Matrix::vecmat(&w, &rect).unwrap().as_slice(), &[9, 12, 15]);
    }

    #[test]
    fn test_matvec_mismatch() {
        let m: Matrix<i32> = Matrix::new(2, 3);
        let v = Vector::from_slice(&[1, 2]);
        assert_eq!(
            m.matvec(&v),
            Err(LinalgError::ShapeMismatch {
                expected: Shape::column(3),
                actual: Shape::column(2)
            })
        );
        let w = Vector::from_slice(&[1, 2, 3]);
        assert_eq!(
            Matrix::vecmat(&w, &m),
            Err(LinalgError::ShapeMismatch {
                expected: Shape::row(2),
                actual: Shape::row(3)
            })
        );
    }

    #[test]
    fn test_transpose() {
        let (a, _) = sample_2x2();
        assert_eq!(a.transpose().as_slice(), &[1, 3, 2, 4]);
    }

    #[test]
    fn test_transpose_large_blocked() {
        // Larger than one block in both dimensions
        let m = Matrix::from_fn(70, 130, |i, j| (i * 1000 + j) as i64);
        let t = m.transpose();
        assert_eq!(t.shape(), (130, 70));
        for i in 0..70 {
            for j in 0..130 {
                assert_eq!(m.get(i, j), t.get(j, i));
            }
        }
    }

    #[test]
    fn test_hcat() {
        let a = Matrix::from_fn(2, 2, |i, j| (i + j) as i32);
        let b = Matrix::from_fn(2, 3, |i, j| 10 + (i * 3 + j) as i32);
        let c = a.hcat(&b).unwrap();
        assert_eq!(c.shape(), (2, 5));
        assert_eq!(c.as_slice(), &[0, 1, 10, 11, 12, 1, 2, 13, 14, 15]);
    }

    #[test]
    fn test_hcat_mismatch() {
        let a: Matrix<i32> = Matrix::new(2, 2);
        let b: Matrix<i32> = Matrix::new(3, 2);
        assert_eq!(
            a.hcat(&b),
            Err(LinalgError::ShapeMismatch {
                expected: Shape::new(2, 2),
                actual: Shape::new(3, 2)
            })
        );
    }

    #[test]
    fn test_hcat_vector() {
        let a = Matrix::from_fn(3, 2, |i, j| (i + j) as i32);
        let v = Vector::from_slice(&[7, 8, 9]);
        let c = a.hcat_vector(&v).unwrap();
        assert_eq!(c.shape(), (3, 3));
        assert_eq!(c.column(2).unwrap(), v);
        assert!(a.hcat_vector(&Vector::from_slice(&[1, 2])).is_err());
    }

    #[test]
    fn test_vcat() {
        let a = Matrix::from_fn(1, 2, |_, j| j as i32);
        let b = Matrix::from_fn(2, 2, |i, j| 10 + (i * 2 + j) as i32);
        let c = a.vcat(&b).unwrap();
        assert_eq!(c.shape(), (3, 2));
        assert_eq!(c.as_slice(), &[0, 1, 10, 11, 12, 13]);
        assert!(a.vcat(&Matrix::new(1, 3)).is_err());
    }

    #[test]
    fn test_vcat_vector() {
        let a = Matrix::from_fn(2, 3, |i, j| (i + j) as i32);
        let v = Vector::from_slice(&[7, 8, 9]);
        let c = a.vcat_vector(&v).unwrap();
        assert_eq!(c.shape(), (3, 3));
        assert_eq!(c.row(2).unwrap(), v);
        assert_eq!(
            a.vcat_vector(&Vector::from_slice(&[1, 2])),
            Err(LinalgError::ShapeMismatch {
                expected: Shape::new(1, 3),
                actual: Shape::new(1, 2)
            })
        );
    }

    // ===== In-place Operation Tests =====

    #[test]
    fn test_in_place_matrix_ops() {
        let a = Matrix::from_fn(3, 3, |i, j| (i + j) as i32);
        let b = Matrix::from_fn(3, 3, |i, j| i as i32 - j as i32);
        let v = Vector::from_slice(&[2, 3, 4]);

        let mut r = a.clone();
        r.add_in_place(&b).unwrap();
        assert_eq!(r, a.add(&b).unwrap());

        let mut r = a.clone();
        r.sub_in_place(&b).unwrap();
        assert_eq!(r, a.sub(&b).unwrap());

        let mut r = a.clone();
        r.matmul_in_place(&b).unwrap();
        assert_eq!(r, a.matmul(&b).unwrap());

        let mut r = a.clone();
        r.hcat_in_place(&b).unwrap();
        assert_eq!(r.shape(), (3, 6));

        let mut r = a.clone();
        r.hcat_vector_in_place(&v).unwrap();
        assert_eq!(r.shape(), (3, 4));

        let mut r = a.clone();
        r.vcat_in_place(&b).unwrap();
        assert_eq!(r.shape(), (6, 3));

        let mut r = a.clone();
        r.vcat_vector_in_place(&v).unwrap();
        assert_eq!(r.shape(), (4, 3));
    }

    #[test]
    fn test_in_place_failure_leaves_self_untouched() {
        let original = Matrix::from_fn(2, 3, |i, j| (i + j) as i32);
        let mut m = original.clone();
        assert!(m.add_in_place(&Matrix::new(3, 2)).is_err());
        assert!(m.matmul_in_place(&Matrix::new(2, 2)).is_err());
        assert!(m.hcat_in_place(&Matrix::new(3, 1)).is_err());
        assert!(m.vcat_vector_in_place(&Vector::zeros(2)).is_err());
        assert!(m.div_scalar_in_place(0).is_err());
        assert_eq!(m, original);
    }

    // ===== Scalar Broadcast Tests =====

    #[test]
    fn test_scalar_ops_float() {
        let m = Matrix::from_fn(2, 2, |i, j| i as f64 + 2.5 * j as f64);
        assert_eq!(m.add_scalar(2.0).as_slice(), &[2.0, 4.5, 3.0, 5.5]);
        assert_eq!(m.sub_scalar(2.0).as_slice(), &[-2.0, 0.5, -1.0, 1.5]);
        assert_eq!(m.scale(2.0).as_slice(), &[0.0, 5.0, 2.0, 7.0]);
        assert_eq!(m.div_scalar(2.0).unwrap().as_slice(), &[0.0, 1.25, 0.5, 1.75]);

        let p = m.powf(2.5);
        for (r, x) in p.as_slice().iter().zip(m.as_slice()) {
            let expected = x.powf(2.5);
            assert!((r - expected).abs() <= 1e-3 * expected.abs());
        }
    }

    #[test]
    fn test_scalar_in_place_ops() {
        let m = Matrix::from_fn(2, 2, |i, j| (i * 2 + j) as i32);

        let mut r = m.clone();
        r.add_scalar_in_place(1);
        assert_eq!(r, m.add_scalar(1));

        let mut r = m.clone();
        r.sub_scalar_in_place(1);
        assert_eq!(r, m.sub_scalar(1));

        let mut r = m.clone();
        r.scale_in_place(3);
        assert_eq!(r, m.scale(3));

        let mut r = m.clone();
        r.div_scalar_in_place(2).unwrap();
        assert_eq!(r, m.div_scalar(2).unwrap());

        let mut r = m.clone();
        r.powf_in_place(2.0);
        assert_eq!(r.as_slice(), &[0, 1, 4, 9]);
    }

    #[test]
    fn test_div_scalar_zero() {
        let m: Matrix<f64> = Matrix::identity(2);
        assert_eq!(m.div_scalar(0.0), Err(LinalgError::DivisionByZero));
    }

    // ===== Determinant Family Tests =====

    #[test]
    fn test_determinant_base_cases() {
        let empty: Matrix<i32> = Matrix::new(0, 0);
        assert_eq!(empty.determinant().unwrap(), 1);

        let one = Matrix::from_vec(1, 1, vec![-7]).unwrap();
        assert_eq!(one.determinant().unwrap(), -7);

        let (a, _) = sample_2x2();
        assert_eq!(a.determinant().unwrap(), -2);
    }

    #[test]
    fn test_determinant_3x3() {
        let m = Matrix::from_vec(3, 3, vec![6, 1, 1, 4, -2, 5, 2, 8, 7]).unwrap();
        assert_eq!(m.determinant().unwrap(), -306);
    }

    #[test]
    fn test_determinant_4x4() {
        assert_eq!(sample_4x4().determinant().unwrap(), 24);
    }

    #[test]
    fn test_determinant_identity() {
        for n in 0..6 {
            assert_eq!(Matrix::<i64>::identity(n).determinant().unwrap(), 1);
        }
    }

    #[test]
    fn test_determinant_singular() {
        let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as i32);
        assert_eq!(m.determinant().unwrap(), 0);
    }

    #[test]
    fn test_determinant_not_square() {
        let m: Matrix<i32> = Matrix::new(2, 3);
        assert_eq!(m.determinant(), Err(LinalgError::NotSquare(Shape::new(2, 3))));
    }

    #[test]
    fn test_determinant_equals_product_with_adjugate() {
        let m = sample_4x4();
        let product = m.matmul(&m.adjugate().unwrap()).unwrap();
        assert_eq!(m.determinant().unwrap(), *product.get(0, 0).unwrap());
        // A·adj(A) = det(A)·I
        assert_eq!(product, Matrix::identity(4).scale(24));
    }

    #[test]
    fn test_minor() {
        let m = sample_4x4();
        for i in 0..4 {
            for j in 0..4 {
                let minor = m.minor(i, j).unwrap();
                assert_eq!(minor.shape(), (3, 3));
                for k in (0..4).filter(|&k| k != i) {
                    for l in (0..4).filter(|&l| l != j) {
                        let mk = if k < i { k } else { k - 1 };
                        let ml = if l < j { l } else { l - 1 };
                        assert_eq!(m.get(k, l), minor.get(mk, ml));
                    }
                }
            }
        }
    }

    #[test]
    fn test_minor_errors() {
        let m: Matrix<i32> = Matrix::new(3, 3);
        assert_eq!(
            m.minor(3, 0),
            Err(LinalgError::IndexOutOfRange {
                axis: Axis::Row,
                index: 3,
                bound: 3
            })
        );
        assert!(Matrix::<i32>::new(2, 3).minor(0, 0).is_err());
        assert_eq!(Matrix::<i32>::new(1, 1).minor(0, 0).unwrap().shape(), (0, 0));
    }

    #[test]
    fn test_cofactor_sign() {
        let m = sample_4x4();
        for i in 0..4 {
            for j in 0..4 {
                let det = m.minor(i, j).unwrap().determinant().unwrap();
                let sign = if (i + j) % 2 == 0 { 1 } else { -1 };
                assert_eq!(m.cofactor(i, j).unwrap(), sign * det);
            }
        }
    }

    #[test]
    fn test_adjugate() {
        let m = sample_4x4();
        let adj = m.adjugate().unwrap();
        assert_eq!(
            adj.as_slice(),
            &[-6, 6, -12, 6, 16, -12, 12, -4, 4, -12, 24, -4, 10, 6, 12, -10]
        );
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(*adj.get(i, j).unwrap(), m.cofactor(j, i).unwrap());
            }
        }
    }

    #[test]
    fn test_adjugate_small() {
        let one = Matrix::from_vec(1, 1, vec![5]).unwrap();
        assert_eq!(one.adjugate().unwrap().as_slice(), &[1]);

        let (a, _) = sample_2x2();
        assert_eq!(a.adjugate().unwrap().as_slice(), &[4, -2, -3, 1]);
    }

    #[test]
    fn test_inverse_integer_truncates() {
        let m = sample_4x4();
        let inverse = m.inverse().unwrap();
        let expected = m.adjugate().unwrap().div_scalar(24).unwrap();
        assert_eq!(inverse, expected);
        assert_eq!(
            inverse.as_slice(),
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_inverse_float() {
        let m = Matrix::from_vec(3, 3, vec![6.0, 1.0, 1.0, 4.0, -2.0, 5.0, 2.0, 8.0, 7.0]).unwrap();
        let product = m.matmul(&m.inverse().unwrap()).unwrap();
        assert!(product.approx_eq(&Matrix::identity(3), &Tolerance::strict()));
    }

    #[test]
    fn test_inverse_agrees_with_determinant() {
        // Unit upper triangular times unit lower triangular: determinant one
        let upper = Matrix::from_fn(5, 5, |i, j| match i.cmp(&j) {
            std::cmp::Ordering::Less => (i + 2 * j) as i64 % 3 - 1,
            std::cmp::Ordering::Equal => 1,
            std::cmp::Ordering::Greater => 0,
        });
        let m = upper.matmul(&upper.transpose()).unwrap();
        assert_eq!(m.determinant().unwrap(), 1);

        let inverse = m.inverse().unwrap();
        assert_eq!(inverse, m.adjugate().unwrap());
        assert_eq!(m.matmul(&inverse).unwrap(), Matrix::identity(5));

        let singular = Matrix::from_fn(4, 4, |i, j| (i * 4 + j) as i64);
        assert_eq!(singular.determinant().unwrap(), 0);
        assert_eq!(singular.inverse(), Err(LinalgError::SingularMatrix));
    }

    #[test]
    fn test_inverse_singular() {
        let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 4.0]).unwrap();
        assert_eq!(m.inverse(), Err(LinalgError::SingularMatrix));
        assert_eq!(
            Matrix::<f64>::new(2, 3).inverse(),
            Err(LinalgError::NotSquare(Shape::new(2, 3)))
        );
    }

    #[test]
    fn test_trace() {
        let m = sample_4x4();
        assert_eq!(m.trace().unwrap(), 3 + 0 + 2 + 1);
        assert_eq!(Matrix::<i32>::new(0, 0).trace().unwrap(), 0);
        assert!(Matrix::<i32>::new(2, 1).trace().is_err());
    }

    // ===== Predicate Tests =====

    #[test]
    fn test_is_diagonal() {
        let m = sample_4x4();
        assert!(!m.is_diagonal());
        let diagonal = Matrix::from_fn(4, 4, |i, j| if i == j { *m.get(i, i).unwrap() } else { 0 });
        assert!(diagonal.is_diagonal());
        assert!(!Matrix::<i32>::new(2, 3).is_diagonal());
    }

    #[test]
    fn test_is_identity() {
        assert!(!sample_4x4().is_identity());
        let mut identity: Matrix<i64> = Matrix::new(4, 4);
        for i in 0..4 {
            identity.set(i, i, 1).unwrap();
        }
        assert!(identity.is_identity());
        identity.set(0, 1, 1).unwrap();
        assert!(!identity.is_identity());
        assert!(!Matrix::from_vec(1, 2, vec![1, 0]).unwrap().is_identity());
        assert!(!Matrix::from_fn(2, 2, |i, j| if i == j { 2 } else { 0 }).is_identity());
    }

    #[test]
    fn test_is_square() {
        assert!(sample_4x4().is_square());
        assert!(!Matrix::<i32>::new(2, 3).is_square());
    }

    #[test]
    fn test_is_symmetric() {
        assert!(!sample_4x4().is_symmetric());
        let symmetric = Matrix::from_fn(4, 4, |i, j| (i + j) as i32);
        assert!(symmetric.is_symmetric());
        assert!(!Matrix::<i32>::new(2, 3).is_symmetric());
    }

    #[test]
    fn test_is_skew_symmetric() {
        let m = sample_4x4();
        assert!(!m.is_skew_symmetric());
        let mut skew = m.clone();
        for i in 0..4 {
            for j in i + 1..4 {
                skew.set(j, i, -*m.get(i, j).unwrap()).unwrap();
            }
        }
        // Diagonal is left non-zero on purpose
        assert!(skew.is_skew_symmetric());
        assert!(!Matrix::<i32>::new(3, 2).is_skew_symmetric());
    }

    #[test]
    fn test_is_zero_is_one() {
        let m = sample_4x4();
        assert!(!m.is_zero());
        assert!(!m.is_one());
        let mut one: Matrix<i64> = Matrix::new(4, 4);
        assert!(one.is_zero());
        one.add_scalar_in_place(1);
        assert!(one.is_one());
    }

    #[test]
    fn test_display() {
        let (a, _) = sample_2x2();
        assert_eq!(a.to_string(), "[1, 2]\n[3, 4]");
        assert_eq!(Matrix::<i32>::new(0, 0).to_string(), "");
    }
}
