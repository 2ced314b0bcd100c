//! linalg-core: Generic Dense Vectors and Matrices
//!
//! Provides owned, fixed-shape numeric containers generic over any signed
//! element type (`i8`..`i128`, `isize`, `f32`, `f64`):
//!
//! 1. **[`Vector`]** - elementwise arithmetic, dot and cross products, magnitude
//! 2. **[`Matrix`]** - elementwise arithmetic, products with matrices and
//!    vectors, concatenation, transpose and the cofactor family (minor,
//!    cofactor, determinant, adjugate, inverse)
//! 3. **[`LuDecomposition`]** - pivoted LU for float matrices
//!
//! # Design Principles
//!
//! - **Shapes are checked, never assumed**: every shape, index or singularity
//!   precondition failure is a [`LinalgError`] value; element arithmetic
//!   follows the overflow rules of `T` (see [`Scalar`])
//! - **Value semantics**: operations return new containers; `*_in_place`
//!   variants replace `self` only after the result is fully computed
//! - **Exact integer arithmetic**: integer containers never round-trip
//!   through floats except for `powf` and the `f64`-valued `magnitude` and
//!   `normalize`
//!
//! # Quick Start
//!
//! ```rust
//! use linalg_core::{Matrix, Vector};
//!
//! let a = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
//! let b = Vector::from_slice(&[5.0, 6.0, 7.0, 8.0]);
//! let result = a.add(&b).unwrap();
//! assert_eq!(result.as_slice(), &[6.0, 8.0, 10.0, 12.0]);
//!
//! let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
//! assert_eq!(m.determinant().unwrap(), -2);
//! assert_eq!(m.adjugate().unwrap().as_slice(), &[4, -2, -3, 1]);
//! ```
//!
//! # Features
//!
//! - `tracing` (default): spans on the expensive matrix operations

pub mod backends;
pub mod error;
pub mod lu;
pub mod matrix;
pub mod scalar;
pub mod shape;
pub mod tolerance;
pub mod vector;

pub use error::{Axis, LinalgError, Result};
pub use lu::LuDecomposition;
pub use matrix::Matrix;
pub use scalar::Scalar;
pub use shape::Shape;
pub use tolerance::Tolerance;
pub use vector::Vector;
