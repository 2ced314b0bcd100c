//! Error types for linalg-core operations

use std::fmt;

use thiserror::Error;

use crate::Shape;

/// Result type for linalg-core operations
pub type Result<T> = std::result::Result<T, LinalgError>;

/// Dimension an out-of-range index was checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Matrix row index
    Row,
    /// Matrix column index
    Column,
    /// Vector element index
    Element,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
            Axis::Element => write!(f, "element"),
        }
    }
}

/// Precondition violations reported by Matrix and Vector operations
///
/// Every variant describes caller misuse. No operation computes a result over
/// mismatched shapes or returns the inverse of a singular matrix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// Matrix shapes are incompatible for the operation
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Shape the operation required
        expected: Shape,
        /// Shape that was supplied
        actual: Shape,
    },

    /// Vector or buffer lengths differ
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Square-only operation on a non-square matrix
    #[error("Matrix must be square, got {0}")]
    NotSquare(Shape),

    /// Index outside the container bounds
    #[error("Index out of range: {axis} {index} (bound {bound})")]
    IndexOutOfRange {
        /// Dimension that was indexed
        axis: Axis,
        /// Offending index
        index: usize,
        /// Exclusive upper bound for the index
        bound: usize,
    },

    /// Inversion of a matrix with zero determinant
    #[error("Matrix is singular")]
    SingularMatrix,

    /// Operation defined only for one specific dimension (e.g. 3-D cross product)
    #[error("Invalid dimension for {operation}: expected {expected}, got {actual}")]
    InvalidDimension {
        /// Operation name
        operation: &'static str,
        /// Required dimension
        expected: usize,
        /// Supplied dimension
        actual: usize,
    },

    /// Division by a zero scalar (e.g., normalizing a zero vector)
    #[error("Division by zero")]
    DivisionByZero,
}
