//! Color types and utilities

use std::ops::{Add, AddAssign, Sub};

use crate::vector_space::VectorSpace;

/// RGBA color with f32 components (0.0 to 1.0)
///
/// Springs animate each channel independently. Intermediate values may
/// leave the 0.0..=1.0 range while a spring overshoots; use
/// [`Color::clamped`] before handing the color to a renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBB or 0xRRGGBBAA)
    ///
    /// Values that fit in 24 bits are read as RGB, so an RGBA value with a
    /// zero red channel must go through [`Color::from_rgba8`] instead.
    pub fn from_hex(hex: u32) -> Self {
        let byte = |shift: u32| ((hex >> shift) & 0xFF) as u8;
        if hex > 0xFF_FFFF {
            Self::from_rgba8(byte(24), byte(16), byte(8), byte(0))
        } else {
            Self::from_rgba8(byte(16), byte(8), byte(0), 255)
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Clamp every channel into 0.0..=1.0
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b), f(self.a))
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b, self.a + rhs.a)
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        Color::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b, self.a - rhs.a)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl VectorSpace for Color {
    const ZERO: Self = Color::TRANSPARENT;

    fn scaled_by(self, factor: f64) -> Self {
        self.map(|c| c.scaled_by(factor))
    }

    fn magnitude_squared(self) -> f64 {
        self.r.magnitude_squared()
            + self.g.magnitude_squared()
            + self.b.magnitude_squared()
            + self.a.magnitude_squared()
    }
}
