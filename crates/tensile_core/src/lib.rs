//! Tensile Core
//!
//! Value types and the algebra the spring integrator is written against:
//!
//! - **VectorSpace**: the capability any animatable value must provide
//! - **Point**: a 2D position with independent x/y components
//! - **Color**: an RGBA color animated channel by channel
//!
//! # Example
//!
//! ```rust
//! use tensile_core::{Point, VectorSpace};
//!
//! let a = Point::new(3.0, 4.0);
//! let b = Point::new(1.0, 1.0);
//!
//! assert_eq!((a - b) + b, a);
//! assert_eq!(a.scaled_by(0.0), Point::ZERO);
//! assert_eq!(a.magnitude_squared(), 25.0);
//! ```

pub mod color;
pub mod point;
pub mod vector_space;

pub use color::Color;
pub use point::Point;
pub use vector_space::VectorSpace;
