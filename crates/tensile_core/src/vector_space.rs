//! The vector-space capability shared by every animatable value.

use std::ops::{Add, AddAssign, Sub};

/// A value that can be driven by a spring.
///
/// Implementors form an additive group over `f64` scalars and expose a
/// squared-magnitude metric used for settle detection. The laws every
/// implementation must satisfy (within floating-point tolerance):
///
/// - `(a - b) + b == a`
/// - `a.scaled_by(1.0) == a`
/// - `a.scaled_by(0.0) == Self::ZERO`
/// - `Self::ZERO.magnitude_squared() == 0.0`
///
/// # Example
///
/// ```rust
/// use tensile_core::VectorSpace;
///
/// let displacement = 3.0f64 - 5.0;
/// assert_eq!(displacement.scaled_by(-2.0), 4.0);
/// assert_eq!(displacement.magnitude_squared(), 4.0);
/// ```
pub trait VectorSpace: Copy + Add<Output = Self> + Sub<Output = Self> + AddAssign {
    /// The additive identity.
    const ZERO: Self;

    /// Multiply every component by `factor`.
    fn scaled_by(self, factor: f64) -> Self;

    /// Sum of squared components.
    fn magnitude_squared(self) -> f64;
}

impl VectorSpace for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn scaled_by(self, factor: f64) -> Self {
        self * factor
    }

    #[inline]
    fn magnitude_squared(self) -> f64 {
        self * self
    }
}

impl VectorSpace for f32 {
    const ZERO: Self = 0.0;

    #[inline]
    fn scaled_by(self, factor: f64) -> Self {
        (f64::from(self) * factor) as f32
    }

    #[inline]
    fn magnitude_squared(self) -> f64 {
        let v = f64::from(self);
        v * v
    }
}
