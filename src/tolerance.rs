//! Tolerance configuration for approximate comparisons
//!
//! Exact equality is the contract for integer containers and for structural
//! operations (transpose, concatenation). Floating results of the determinant
//! family and of the cross product only hold up to rounding, so comparisons of
//! those go through a [`Tolerance`].
//!
//! # Examples
//!
//! ```
//! use linalg_core::Tolerance;
//!
//! // Presets
//! let strict = Tolerance::strict();
//! let loose = Tolerance::loose();
//! assert!(strict.absolute < loose.absolute);
//!
//! // Custom configuration using builder pattern
//! let custom = Tolerance::new()
//!     .with_absolute(1e-9)
//!     .with_relative(1e-6)
//!     .build();
//! assert!(custom.approx_eq(1.0, 1.0 + 1e-7));
//! ```

/// Absolute and relative bounds for comparing floating values
///
/// Two values `a` and `b` compare equal when
/// `|a - b| <= max(absolute, relative * max(|a|, |b|))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Absolute bound, used near zero
    pub absolute: f64,
    /// Relative bound, scaled by the larger magnitude
    pub relative: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: 1e-9,
            relative: 1e-9,
        }
    }
}

impl Tolerance {
    /// Create a tolerance with default bounds (`1e-9` absolute and relative)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the absolute bound
    ///
    /// Negative values are clamped to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use linalg_core::Tolerance;
    ///
    /// let tol = Tolerance::new().with_absolute(-1.0);
    /// assert_eq!(tol.absolute, 0.0);
    /// ```
    pub fn with_absolute(mut self, bound: f64) -> Self {
        self.absolute = bound.max(0.0);
        self
    }

    /// Set the relative bound
    ///
    /// Negative values are clamped to zero.
    pub fn with_relative(mut self, bound: f64) -> Self {
        self.relative = bound.max(0.0);
        self
    }

    /// Finalize configuration (no-op, for builder pattern consistency)
    pub fn build(self) -> Self {
        self
    }

    /// Exact comparison: both bounds zero
    ///
    /// # Examples
    ///
    /// ```
    /// use linalg_core::Tolerance;
    ///
    /// let exact = Tolerance::exact();
    /// assert!(exact.approx_eq(2.0, 2.0));
    /// assert!(!exact.approx_eq(2.0, 2.0 + f64::EPSILON * 2.0));
    /// ```
    pub fn exact() -> Self {
        Self::new().with_absolute(0.0).with_relative(0.0)
    }

    /// Strict preset for `f64` work
    ///
    /// - `1e-12` absolute
    /// - `1e-10` relative
    pub fn strict() -> Self {
        Self::new().with_absolute(1e-12).with_relative(1e-10)
    }

    /// Loose preset for `f32` work or long chains of operations
    ///
    /// - `1e-4` absolute
    /// - `1e-4` relative
    pub fn loose() -> Self {
        Self::new().with_absolute(1e-4).with_relative(1e-4)
    }

    /// Compare two values within this tolerance
    ///
    /// NaN never compares equal, infinities compare equal only to themselves.
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        if !a.is_finite() || !b.is_finite() {
            return false;
        }
        let diff = (a - b).abs();
        let scale = a.abs().max(b.abs());
        diff <= self.absolute.max(self.relative * scale)
    }
}
