//! 2D point type

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::vector_space::VectorSpace;

/// A position in 2D space with independent x/y components
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a point with both components set to `v`
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f64 {
        (self - other).magnitude_squared().sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl VectorSpace for Point {
    const ZERO: Self = Point::ZERO;

    #[inline]
    fn scaled_by(self, factor: f64) -> Self {
        Point::new(self.x * factor, self.y * factor)
    }

    #[inline]
    fn magnitude_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }
}
