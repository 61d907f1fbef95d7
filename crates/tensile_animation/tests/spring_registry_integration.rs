//! Integration tests for springs, the registry and the frame driver
//!
//! These tests verify that:
//! - Springs of different value types share a registry without interfering
//! - Retargeting mid-flight keeps the motion continuous
//! - Springs move through Idle -> Active -> Removed and can be reactivated
//! - Settings loaded from TOML drive bindings and the driver end to end

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tensile_animation::{
    AnimationRegistry, AnimationSettings, Animated, FrameDriver, Point, SpringConfig,
    SpringState, VectorSpace,
};

const DT: f64 = 1.0 / 60.0;

/// Stepping a scalar and a point together matches stepping each alone
#[test]
fn test_registry_springs_are_independent() {
    let mut scalar = SpringState::new(0.0_f64);
    scalar.animate_to(100.0);
    let mut point = SpringState::with_config(Point::new(-20.0, 5.0), SpringConfig::gentle());
    point.animate_to(Point::new(60.0, -40.0));

    // Reference copies keep the same ids but are stepped on their own
    let mut scalar_alone = scalar.clone();
    let mut point_alone = point.clone();

    let scalar = Rc::new(RefCell::new(scalar));
    let point = Rc::new(RefCell::new(point));
    let scalar_id = scalar.borrow().id();
    let point_id = point.borrow().id();

    let mut registry = AnimationRegistry::new();
    registry.register(Rc::clone(&scalar));
    registry.register(Rc::clone(&point));

    // Uneven frame pacing
    let deltas = [DT, DT * 0.5, DT * 1.5, DT, 0.0, DT * 0.75];
    let mut frame = 0;
    while !registry.is_empty() {
        let dt = deltas[frame % deltas.len()];
        frame += 1;
        assert!(frame < 2000, "registry never drained");

        let scalar_active = registry.contains(scalar_id);
        let point_active = registry.contains(point_id);
        registry.step(dt);

        if scalar_active {
            scalar_alone.update(dt);
            assert_eq!(scalar.borrow().value(), scalar_alone.value());
            assert_eq!(scalar.borrow().velocity(), scalar_alone.velocity());
            assert_eq!(registry.contains(scalar_id), !scalar_alone.is_settled());
        }
        if point_active {
            point_alone.update(dt);
            assert_eq!(point.borrow().value(), point_alone.value());
            assert_eq!(point.borrow().velocity(), point_alone.velocity());
            assert_eq!(registry.contains(point_id), !point_alone.is_settled());
        }
    }
}

/// Retargeting a point spring after 10 frames leaves value and velocity
/// continuous; only the target jumps
#[test]
fn test_point_retarget_mid_flight() {
    let registry = AnimationRegistry::shared();
    let position = Animated::new(&registry, Point::ZERO);
    position.set(Point::new(100.0, 100.0));

    let mut trajectory = vec![position.get()];
    for _ in 0..10 {
        registry.borrow_mut().step(DT);
        trajectory.push(position.get());
    }

    let value_before = position.get();
    let velocity_before = position.velocity();
    assert!(value_before.x > 50.0, "should be past the new target already");
    assert!(velocity_before.x > 0.0);

    position.set(Point::new(50.0, 50.0));
    assert_eq!(position.get(), value_before);
    assert_eq!(position.velocity(), velocity_before);
    assert_eq!(position.target(), Point::new(50.0, 50.0));

    let mut frames = 10;
    while position.is_animating() {
        registry.borrow_mut().step(DT);
        trajectory.push(position.get());
        frames += 1;
        assert!(frames < 200, "retargeted spring never settled");
    }

    let jumps: Vec<f64> = trajectory
        .windows(2)
        .map(|pair| pair[0].distance(pair[1]))
        .collect();

    // The frame after the retarget moves less than the frame before it:
    // the spring decelerates instead of snapping toward the new target
    assert!(jumps[10] <= jumps[9], "jump {} after retarget", jumps[10]);

    // Per-frame motion never exceeds the peak speed of the original flight
    let largest_jump = jumps.iter().copied().fold(0.0, f64::max);
    assert!(largest_jump < 12.5, "discontinuity of {largest_jump}");

    assert!(position.get().distance(Point::new(50.0, 50.0)) < 0.1);
}

#[test]
fn test_spring_lifecycle() {
    let registry = AnimationRegistry::shared();
    let opacity = Animated::new(&registry, 1.0_f64);

    // Idle
    assert!(!opacity.is_animating());

    // Idle -> Active
    opacity.set(0.0);
    assert!(opacity.is_animating());

    // Active -> Active while moving
    registry.borrow_mut().step(DT);
    assert!(opacity.is_animating());

    // Active -> Removed once settled
    while !opacity.is_settled() {
        registry.borrow_mut().step(DT);
    }
    assert!(!opacity.is_animating());
    assert!(registry.borrow().is_empty());

    // A fresh target reactivates it
    opacity.set(0.5);
    assert!(opacity.is_animating());
}

#[test]
fn test_no_reescape_after_settling() {
    let mut spring = SpringState::new(-250.0_f64);
    spring.animate_to(300.0);
    while !spring.is_settled() {
        spring.update(DT);
    }
    for _ in 0..1000 {
        spring.update(DT);
        assert!(spring.is_settled());
    }
}

#[test]
fn test_settings_drive_bindings() {
    let settings = AnimationSettings::from_toml_str(
        r#"
        [driver]
        max_frame_delta = 0.1
        max_substep = 0.008

        [springs.sheet]
        preset = "molasses"
        "#,
    )
    .unwrap();

    let registry = AnimationRegistry::shared();
    let sheet = Animated::with_config(&registry, 0.0_f64, settings.spring_or_default("sheet"));
    let badge = Animated::with_config(&registry, Point::ZERO, settings.spring_or_default("badge"));
    sheet.set(400.0);
    badge.set(Point::new(8.0, 8.0));

    let mut driver = FrameDriver::new(settings.driver).unwrap();
    let mut now = Instant::now();
    let mut frames = 0;
    while driver.frame(&mut registry.borrow_mut(), now) {
        // Simulate a stalled frame clock halfway through
        now += if frames == 30 {
            Duration::from_secs(2)
        } else {
            Duration::from_millis(16)
        };
        frames += 1;
        assert!(frames < 2000, "springs never settled");
    }

    assert!(driver.is_idle());
    assert!((sheet.get() - 400.0).abs() < 0.1);
    assert!((badge.get() - Point::new(8.0, 8.0)).magnitude_squared() < 0.005);
}
