//! Element types accepted by [`Vector`](crate::Vector) and [`Matrix`](crate::Matrix)
//!
//! `Scalar` sits on top of `num_traits::Signed`, which supplies zero, one,
//! the four arithmetic operators and negation. Cofactor signs and the
//! skew-symmetry test both need negation, so unsigned integers are excluded.

use std::fmt::{Debug, Display};

use num_traits::Signed;

/// Numeric element type of the containers
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `i128`, `isize`, `f32` and `f64`.
///
/// # Overflow
///
/// Container arithmetic uses the plain operators of the element type. For
/// integers that overflow (`cross`, `dot`, `matmul`, the determinant family,
/// negating `MIN` in `is_skew_symmetric`, `div_scalar(-1)` on `MIN`) panics
/// in debug builds and wraps in release builds, exactly as the operators do.
/// Pick an element type wide enough for the intermediate products.
/// `magnitude` and `normalize` accumulate in `f64` and never overflow.
///
/// # Example
///
/// ```
/// use linalg_core::Scalar;
///
/// assert_eq!(3i32.powf(2.0), 9);
/// assert!((2.0f64.powf(0.5) - std::f64::consts::SQRT_2).abs() < 1e-12);
/// assert_eq!((-4i64).as_f64(), -4.0);
/// ```
pub trait Scalar: Signed + Copy + PartialOrd + Debug + Display + 'static {
    /// Raises `self` to a real exponent with the general power function
    ///
    /// Integers are widened to `f64`, raised, and converted back (truncating
    /// toward zero, saturating at the type bounds).
    fn powf(self, exponent: f64) -> Self;

    /// Lossy conversion to `f64`
    fn as_f64(self) -> f64;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn powf(self, exponent: f64) -> Self {
                    (self as f64).powf(exponent) as $t
                }

                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn powf(self, exponent: f64) -> Self {
                    <$t>::powf(self, exponent as $t)
                }

                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_scalar_int!(i8, i16, i32, i64, i128, isize);
impl_scalar_float!(f32, f64);
