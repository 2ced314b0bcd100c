//! Fixed-length owned vector

use std::fmt;

use crate::backends::scalar::ScalarBackend;
use crate::backends::ElementwiseBackend;
use crate::error::Axis;
use crate::shape::{check_bound, check_len};
use crate::{LinalgError, Result, Scalar, Tolerance};

/// Fixed-length vector that exclusively owns its elements
///
/// Every operation producing a new value returns a new `Vector`; the
/// `*_in_place` forms compute the new value first and then replace the
/// buffer, so a failed precondition leaves `self` untouched.
///
/// # Examples
///
/// ```
/// use linalg_core::Vector;
///
/// let a = Vector::from_slice(&[1, 2, 3]);
/// let b = Vector::from_slice(&[4, 5, 6]);
/// let result = a.add(&b).unwrap();
///
/// assert_eq!(result.as_slice(), &[5, 7, 9]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    /// Create vector from slice by copying the data
    ///
    /// # Examples
    ///
    /// ```
    /// use linalg_core::Vector;
    ///
    /// let v = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(v.len(), 4);
    /// ```
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Create vector taking ownership of `data`
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Create a zero-filled vector of length `len`
    ///
    /// # Examples
    ///
    /// ```
    /// use linalg_core::Vector;
    ///
    /// let v: Vector<i32> = Vector::zeros(3);
    /// assert_eq!(v.as_slice(), &[0, 0, 0]);
    /// assert!(v.is_zero());
    /// ```
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![T::zero(); len],
        }
    }

    /// Create a vector of length `len` with every element set to one
    pub fn ones(len: usize) -> Self {
        Self {
            data: vec![T::one(); len],
        }
    }

    /// Get underlying data as slice
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the vector and return its buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterate over the elements
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Get vector length
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if vector is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Gets a reference to element `index`
    ///
    /// Returns `None` if the index is out of bounds
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Gets a mutable reference to element `index`
    ///
    /// Returns `None` if the index is out of bounds
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Overwrites element `index`
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linalg_core::Vector;
    ///
    /// let mut v = Vector::zeros(2);
    /// v.set(1, 7).unwrap();
    /// assert_eq!(v.as_slice(), &[0, 7]);
    /// assert!(v.set(2, 1).is_err());
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_bound(Axis::Element, index, self.len())?;
        self.data[index] = value;
        Ok(())
    }

    /// Allocates a same-length buffer and fills it with `kernel`
    fn map_with(&self, kernel: impl FnOnce(&[T], &mut [T])) -> Self {
        let mut result = vec![T::zero(); self.len()];
        kernel(&self.data, &mut result);
        Self { data: result }
    }

    /// Element-wise addition
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::LengthMismatch`] if vectors have different lengths.
    pub fn add(&self, other: &Self) -> Result<Self> {
        check_len(self.len(), other.len())?;
        Ok(self.map_with(|a, r| ScalarBackend::add(a, &other.data, r)))
    }

    /// Element-wise subtraction
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::LengthMismatch`] if vectors have different lengths.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        check_len(self.len(), other.len())?;
        Ok(self.map_with(|a, r| ScalarBackend::sub(a, &other.data, r)))
    }

    /// Dot product
    ///
    /// # Examples
    ///
    /// ```
    /// use linalg_core::Vector;
    ///
    /// let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
    /// let b = Vector::from_slice(&[4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b).unwrap(), 32.0); // 1*4 + 2*5 + 3*6
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::LengthMismatch`] if vectors have different lengths.
    pub fn dot(&self, other: &Self) -> Result<T> {
        check_len(self.len(), other.len())?;
        Ok(ScalarBackend::dot(&self.data, &other.data))
    }

    /// 3-D cross product
    ///
    /// # Examples
    ///
    /// ```
    /// use linalg_core::Vector;
    ///
    /// let v = Vector::from_slice(&[0, 1, 2]);
    /// let w = Vector::from_slice(&[-1, 2, 5]);
    /// assert_eq!(v.cross(&w).unwrap().as_slice(), &[1, -2, 1]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidDimension`] unless both vectors have length 3.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        for len in [self.len(), other.len()] {
            if len != 3 {
                return Err(LinalgError::InvalidDimension {
                    operation: "cross product",
                    expected: 3,
                    actual: len,
                });
            }
        }

        let a = &self.data;
        let b = &other.data;
        Ok(Self {
            data: vec![
                a[1] * b[2] - a[2] * b[1],
                a[2] * b[0] - a[0] * b[2],
                a[0] * b[1] - a[1] * b[0],
            ],
        })
    }

    /// Concatenation: `self` elements followed by `other` elements
    pub fn concat(&self, other: &Self) -> Self {
        let mut data = Vec::with_capacity(self.len() + other.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&other.data);
        Self { data }
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
    ///
    /// # Examples
    ///
    /// ```
    /// use linalg_core::Vector;
    ///
    /// let v = Vector::from_slice(&[1, -2, 3]);
    /// assert_eq!(v.scale(2).as_slice(), &[2, -4, 6]);
    /// ```
    pub fn scale(&self, scalar: T) -> Self {
        self.map_with(|a, r| ScalarBackend::scale(a, scalar, r))
    }

    /// Divides every element by `scalar`
    ///
    /// Integer element types use truncating division.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DivisionByZero`] if `scalar` is zero.
    pub fn div_scalar(&self, scalar: T) -> Result<Self> {
        if scalar.is_zero() {
            return Err(LinalgError::DivisionByZero);
        }
        Ok(self.map_with(|a, r| ScalarBackend::div_scalar(a, scalar, r)))
    }

    /// Raises every element to `exponent` with the general power function
    ///
    /// # Examples
    ///
    /// ```
    /// use linalg_core::Vector;
    ///
    /// let v = Vector::from_slice(&[-1, 2, 5]);
    /// assert_eq!(v.powf(2.0).as_slice(), &[1, 4, 25]);
    /// ```
    pub fn powf(&self, exponent: f64) -> Self {
        self.map_with(|a, r| ScalarBackend::powf(a, exponent, r))
    }

    /// Euclidean length `sqrt(dot(self, self))`, always as `f64`
    ///
    /// # Examples
    ///
    /// ```
    /// use linalg_core::Vector;
    ///
    /// let v = Vector::from_slice(&[3, 4]);
    /// assert_eq!(v.magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        // Squares are summed in f64 so small integer types cannot overflow
        self.data
            .iter()
            .map(|x| {
                let f = x.as_f64();
                f * f
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Unit vector in the direction of `self`, as `f64`
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DivisionByZero`] if the magnitude is zero.
    pub fn normalize(&self) -> Result<Vector<f64>> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(LinalgError::DivisionByZero);
        }
        Ok(Vector {
            data: self.data.iter().map(|x| x.as_f64() / magnitude).collect(),
        })
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
    /// Vectors of different length never compare equal.
    pub fn approx_eq(&self, other: &Self, tolerance: &Tolerance) -> bool {
        self.len() == other.len()
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
    pub fn cross_in_place(&mut self, other: &Self) -> Result<()> {
        *self = self.cross(other)?;
        Ok(())
    }

    /// `self = self ++ other`
    pub fn concat_in_place(&mut self, other: &Self) {
        *self = self.concat(other);
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

impl<T: Scalar> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Scalar> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]")
    }
}
