//! Spring physics
//!
//! A [`SpringState`] drives one animatable value toward a target with a
//! damped harmonic oscillator, `a = -k (x - target) - c v` at unit mass,
//! integrated with semi-implicit Euler: velocity first, then position from
//! the new velocity.
//!
//! The integrator does not clamp `dt`. Steps at or above
//! [`SpringConfig::max_stable_dt`] overshoot further every frame and
//! diverge; keep the frame delta in range or let the
//! [`FrameDriver`](crate::driver::FrameDriver) substep.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use tensile_core::VectorSpace;

use crate::config::SpringConfig;

/// Settle threshold on both squared speed and squared distance to target.
///
/// Well above floating-point jitter for the value types this crate ships,
/// so an undisturbed spring always reaches it.
pub const SETTLE_EPSILON: f64 = 0.005;

static NEXT_SPRING_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique spring identifier, used as the registry key
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpringId(u64);

impl SpringId {
    fn next() -> Self {
        Self(NEXT_SPRING_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SpringId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "spring#{}", self.0)
    }
}

/// One animated quantity: current value, target, velocity and constants.
///
/// `value` and `velocity` change only through [`SpringState::update`];
/// `target` changes only through [`SpringState::animate_to`].
#[derive(Clone, Debug)]
pub struct SpringState<V> {
    id: SpringId,
    value: V,
    target: V,
    velocity: V,
    config: SpringConfig,
}

impl<V: VectorSpace> SpringState<V> {
    /// Create a spring at rest on `initial` using the standard preset
    pub fn new(initial: V) -> Self {
        Self::with_config(initial, SpringConfig::standard())
    }

    /// Create a spring at rest on `initial`
    ///
    /// `config` must pass [`SpringConfig::validate`]. A non-finite constant
    /// gives a spring that never settles, so debug builds panic on one.
    pub fn with_config(initial: V, config: SpringConfig) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "invalid spring constants: {config:?}"
        );
        Self {
            id: SpringId::next(),
            value: initial,
            target: initial,
            velocity: V::ZERO,
            config,
        }
    }

    pub fn id(&self) -> SpringId {
        self.id
    }

    pub fn value(&self) -> V {
        self.value
    }

    pub fn target(&self) -> V {
        self.target
    }

    pub fn velocity(&self) -> V {
        self.velocity
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// Retarget the spring. Value and velocity carry over, so an
    /// interrupted animation keeps its momentum.
    pub fn animate_to(&mut self, target: V) {
        self.target = target;
    }

    /// Advance by one semi-implicit Euler step of `dt` seconds
    pub fn update(&mut self, dt: f64) {
        let displacement = self.value - self.target;
        let spring_force = displacement.scaled_by(-self.config.stiffness);
        let damping_force = self.velocity.scaled_by(-self.config.damping);
        let acceleration = spring_force + damping_force;

        self.velocity += acceleration.scaled_by(dt);
        self.value += self.velocity.scaled_by(dt);
    }

    /// Both speed and distance to target are below [`SETTLE_EPSILON`]
    pub fn is_settled(&self) -> bool {
        self.velocity.magnitude_squared() < SETTLE_EPSILON
            && (self.value - self.target).magnitude_squared() < SETTLE_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tensile_core::Point;

    const DT: f64 = 1.0 / 60.0;

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_new_spring_is_at_rest() {
        let spring = SpringState::new(42.0_f64);
        assert_eq!(spring.value(), 42.0);
        assert_eq!(spring.target(), 42.0);
        assert_eq!(spring.velocity(), 0.0);
        assert_eq!(*spring.config(), SpringConfig::standard());
        assert!(spring.is_settled());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = SpringState::new(0.0_f64);
        let b = SpringState::new(Point::ZERO);
        let c = a.clone();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.id(), c.id());
        assert_eq!(a.id().to_string(), format!("spring#{}", a.id().as_u64()));
    }

    #[test]
    fn test_first_step_semi_implicit_order() {
        let mut spring = SpringState::new(0.0_f64);
        spring.animate_to(100.0);
        spring.update(DT);

        // v = k * 100 * dt, then x = v * dt using the new velocity
        assert!(approx_eq(spring.velocity(), 283.333_333, 1e-3));
        assert!(approx_eq(spring.value(), 4.722_222, 1e-3));
        assert!(!spring.is_settled());
    }

    #[test]
    fn test_equilibrium_is_a_fixed_point() {
        let mut spring = SpringState::new(Point::new(7.0, -3.0));
        spring.update(DT);
        assert_eq!(spring.value(), Point::new(7.0, -3.0));
        assert_eq!(spring.velocity(), Point::ZERO);
    }

    #[test]
    fn test_retarget_preserves_momentum() {
        let mut spring = SpringState::new(0.0_f64);
        spring.animate_to(100.0);
        for _ in 0..10 {
            spring.update(DT);
        }

        let value = spring.value();
        let velocity = spring.velocity();
        spring.animate_to(-50.0);

        assert_eq!(spring.value(), value);
        assert_eq!(spring.velocity(), velocity);
        assert_eq!(spring.target(), -50.0);
    }

    #[test]
    fn test_standard_preset_settles_within_bound() {
        let mut spring = SpringState::new(0.0_f64);
        spring.animate_to(100.0);

        let mut steps = 0;
        while !spring.is_settled() {
            spring.update(DT);
            steps += 1;
            assert!(steps <= 90, "spring did not settle within 90 steps");
        }
        assert!(steps >= 50, "settled suspiciously early at step {steps}");

        // Stays settled with the target unchanged
        for _ in 0..600 {
            spring.update(DT);
            assert!(spring.is_settled());
        }
        assert!(approx_eq(spring.value(), 100.0, 1e-6));
    }

    #[test]
    fn test_moving_through_target_is_not_settled() {
        let mut spring = SpringState::new(0.0_f64);
        spring.animate_to(1.0);
        spring.update(DT);
        spring.animate_to(spring.value());

        // At the target but still moving
        assert!(spring.velocity().magnitude_squared() >= SETTLE_EPSILON);
        assert!(!spring.is_settled());
    }

    #[test]
    fn test_far_and_slow_is_not_settled() {
        let mut spring = SpringState::new(0.0_f64);
        spring.animate_to(10.0);
        assert_eq!(spring.velocity(), 0.0);
        assert!(!spring.is_settled());
    }

    #[test]
    fn test_zero_dt_changes_nothing() {
        let mut spring = SpringState::new(0.0_f64);
        spring.animate_to(100.0);
        spring.update(0.0);
        assert_eq!(spring.value(), 0.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn test_oversized_dt_diverges() {
        // 0.5s is far past the stability bound of the standard preset
        let mut spring = SpringState::new(0.0_f64);
        spring.animate_to(100.0);
        for _ in 0..50 {
            spring.update(0.5);
        }
        assert!(spring.value().abs() > 1e6);
        assert!(!spring.is_settled());
    }

    #[test]
    fn test_molasses_needs_small_steps() {
        let mut coarse = SpringState::with_config(0.0_f64, SpringConfig::molasses());
        coarse.animate_to(100.0);
        for _ in 0..600 {
            coarse.update(DT);
        }
        assert!(coarse.value().abs() > 1e6, "expected divergence");

        let mut fine = SpringState::with_config(0.0_f64, SpringConfig::molasses());
        fine.animate_to(100.0);
        for _ in 0..1200 {
            fine.update(DT / 2.0);
        }
        assert!(fine.is_settled());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid spring constants")]
    fn test_nan_stiffness_is_rejected_in_debug() {
        let _ = SpringState::with_config(0.0_f64, SpringConfig::new(f64::NAN, 26.0));
    }

    #[test]
    fn test_point_spring_moves_diagonally() {
        let mut spring = SpringState::new(Point::ZERO);
        spring.animate_to(Point::new(100.0, 100.0));
        spring.update(DT);

        let value = spring.value();
        assert_eq!(value.x, value.y);
        assert!(approx_eq(value.x, 4.722_222, 1e-3));
    }
}
