//! Tensile Animation System
//!
//! Spring physics for UI values, stepped in lockstep once per frame.
//!
//! # Features
//!
//! - **Springs**: semi-implicit Euler integration over any
//!   [`VectorSpace`] value (scalars, points, colors)
//! - **Registry**: advances every moving spring each frame and retires the
//!   ones that have settled
//! - **Frame driver**: converts frame timestamps into steps, with idle
//!   handling and optional clamping/substepping
//! - **Interruptible**: retargeting keeps the spring's current velocity
//!
//! # Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use tensile_animation::{AnimationRegistry, Animated, FrameDriver, Point};
//!
//! let registry = AnimationRegistry::shared();
//! let card = Animated::new(&registry, Point::ZERO);
//! card.set(Point::new(120.0, 40.0));
//!
//! let mut driver = FrameDriver::default();
//! let mut now = Instant::now();
//! while driver.frame(&mut registry.borrow_mut(), now) {
//!     // render card.get() here
//!     now += Duration::from_millis(16);
//! }
//!
//! assert!(card.get().distance(Point::new(120.0, 40.0)) < 0.1);
//! ```
//!
//! Everything here is single-threaded: springs and the registry are shared
//! through `Rc<RefCell<_>>` and driven from one frame callback.

pub mod animated;
pub mod config;
pub mod driver;
pub mod error;
pub mod registry;
pub mod spring;

pub use animated::Animated;
pub use config::{AnimationSettings, DriverConfig, SpringConfig};
pub use driver::{FrameDriver, MAX_SUBSTEPS};
pub use error::{ConfigError, Result};
pub use registry::{AnimationRegistry, RegisteredSpring, SharedRegistry, SpringHandle};
pub use spring::{SpringId, SpringState, SETTLE_EPSILON};

pub use tensile_core::{Color, Point, VectorSpace};
