//! Scalar (loop) backend implementation
//!
//! Portable baseline that works for every element type. Loops are written
//! over zipped iterators so bounds checks are hoisted by the compiler.

use super::ElementwiseBackend;
use crate::Scalar;

/// Scalar backend (portable, no SIMD)
pub struct ScalarBackend;

impl<T: Scalar> ElementwiseBackend<T> for ScalarBackend {
    fn add(a: &[T], b: &[T], result: &mut [T]) {
        debug_assert_eq!(a.len(), b.len());
        for ((r, &x), &y) in result.iter_mut().zip(a).zip(b) {
            *r = x + y;
        }
    }

    fn sub(a: &[T], b: &[T], result: &mut [T]) {
        debug_assert_eq!(a.len(), b.len());
        for ((r, &x), &y) in result.iter_mut().zip(a).zip(b) {
            *r = x - y;
        }
    }

    fn add_scalar(a: &[T], scalar: T, result: &mut [T]) {
        for (r, &x) in result.iter_mut().zip(a) {
            *r = x + scalar;
        }
    }

    fn sub_scalar(a: &[T], scalar: T, result: &mut [T]) {
        for (r, &x) in result.iter_mut().zip(a) {
            *r = x - scalar;
        }
    }

    fn scale(a: &[T], scalar: T, result: &mut [T]) {
        for (r, &x) in result.iter_mut().zip(a) {
            *r = x * scalar;
        }
    }

    fn div_scalar(a: &[T], scalar: T, result: &mut [T]) {
        debug_assert!(!scalar.is_zero());
        for (r, &x) in result.iter_mut().zip(a) {
            *r = x / scalar;
        }
    }

    fn powf(a: &[T], exponent: f64, result: &mut [T]) {
        for (r, &x) in result.iter_mut().zip(a) {
            *r = x.powf(exponent);
        }
    }

    fn dot(a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len());
        let mut sum = T::zero();
        for (&x, &y) in a.iter().zip(b) {
            sum = sum + x * y;
        }
        sum
    }

    fn sum(a: &[T]) -> T {
        let mut total = T::zero();
        for &val in a {
            total = total + val;
        }
        total
    }

    fn all_equal(a: &[T], value: T) -> bool {
        a.iter().all(|&x| x == value)
    }
}
