//! Slice kernels shared by `Vector` and `Matrix`
//!
//! Both containers store their elements in one contiguous buffer, so every
//! elementwise operation reduces to a kernel over slices. Containers validate
//! shapes first and then call into a backend with slices of equal length.
//!
//! # Backends
//!
//! - `scalar`: Portable loop implementation, generic over [`Scalar`]

pub mod scalar;

use crate::Scalar;

/// Backend trait defining the elementwise kernels
///
/// Callers must ensure:
/// - Slices `a` and `b` have the same length
/// - `result` has the same length as `a`
pub trait ElementwiseBackend<T: Scalar> {
    /// Element-wise addition: a[i] + b[i]
    fn add(a: &[T], b: &[T], result: &mut [T]);

    /// Element-wise subtraction: a[i] - b[i]
    fn sub(a: &[T], b: &[T], result: &mut [T]);

    /// Scalar broadcast addition: a[i] + scalar
    fn add_scalar(a: &[T], scalar: T, result: &mut [T]);

    /// Scalar broadcast subtraction: a[i] - scalar
    fn sub_scalar(a: &[T], scalar: T, result: &mut [T]);

    /// Scalar broadcast multiplication: a[i] * scalar
    fn scale(a: &[T], scalar: T, result: &mut [T]);

    /// Scalar broadcast division: a[i] / scalar
    ///
    /// `scalar` must be non-zero.
    fn div_scalar(a: &[T], scalar: T, result: &mut [T]);

    /// Element-wise power: a[i]^exponent
    fn powf(a: &[T], exponent: f64, result: &mut [T]);

    /// Dot product: sum(a[i] * b[i])
    fn dot(a: &[T], b: &[T]) -> T;

    /// Sum reduction: sum(a[i])
    fn sum(a: &[T]) -> T;

    /// True when every element equals `value` (vacuously true when empty)
    fn all_equal(a: &[T], value: T) -> bool;
}
