//! Matrix shape and the shared precondition checks

use std::fmt;

use crate::error::{Axis, LinalgError, Result};

/// The `(rows, cols)` pair of a matrix
///
/// A shape never changes for the lifetime of a matrix; operations that
/// produce a different shape build a new matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl Shape {
    /// Creates a shape of `rows x cols`
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Shape of a single column holding `len` elements
    pub const fn column(len: usize) -> Self {
        Self::new(len, 1)
    }

    /// Shape of a single row holding `len` elements
    pub const fn row(len: usize) -> Self {
        Self::new(1, len)
    }

    /// Number of elements (`rows * cols`)
    pub const fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// True when the shape holds no elements
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when `rows == cols`
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Shape with rows and columns swapped
    pub const fn transposed(&self) -> Self {
        Self::new(self.cols, self.rows)
    }

    /// Fails with `NotSquare` unless the shape is square
    pub(crate) fn require_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(LinalgError::NotSquare(*self))
        }
    }

    /// Fails with `ShapeMismatch` unless `other` equals `self`
    pub(crate) fn require_same(&self, other: Shape) -> Result<()> {
        if *self == other {
            Ok(())
        } else {
            Err(LinalgError::ShapeMismatch {
                expected: *self,
                actual: other,
            })
        }
    }

    /// Fails with `IndexOutOfRange` unless `(row, col)` addresses an element
    pub(crate) fn check_index(&self, row: usize, col: usize) -> Result<()> {
        check_bound(Axis::Row, row, self.rows)?;
        check_bound(Axis::Column, col, self.cols)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Fails with `IndexOutOfRange` unless `index < bound`
pub(crate) fn check_bound(axis: Axis, index: usize, bound: usize) -> Result<()> {
    if index < bound {
        Ok(())
    } else {
        Err(LinalgError::IndexOutOfRange { axis, index, bound })
    }
}

/// Fails with `LengthMismatch` unless both lengths agree
pub(crate) fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(LinalgError::LengthMismatch { expected, actual })
    }
}
