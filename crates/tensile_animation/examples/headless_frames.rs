//! Headless Frame Loop Demo
//!
//! This example demonstrates:
//! - Loading spring and driver settings from TOML
//! - Binding a scalar, a point and a color to one registry
//! - Driving the registry from simulated frame timestamps
//! - Retargeting mid-flight and surviving a stalled frame
//!
//! Run with: RUST_LOG=tensile_animation=debug cargo run -p tensile_animation --example headless_frames

use std::time::{Duration, Instant};

use anyhow::Result;
use tensile_animation::{
    AnimationRegistry, AnimationSettings, Animated, Color, FrameDriver, Point,
};

const SETTINGS: &str = r#"
[driver]
max_frame_delta = 0.1
max_substep = 0.008

[springs.card]
preset = "wobbly"

[springs.fade]
stiffness = 240.0
damping = 30.0
"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let settings = AnimationSettings::from_toml_str(SETTINGS)?;
    let registry = AnimationRegistry::shared();

    let card = Animated::with_config(&registry, Point::ZERO, settings.spring_or_default("card"));
    let opacity = Animated::with_config(&registry, 0.0_f64, settings.spring_or_default("fade"));
    let tint = Animated::new(&registry, Color::BLACK);

    card.set(Point::new(240.0, 120.0));
    opacity.set(1.0);
    tint.set(Color::from_hex(0x3366FF));

    let mut driver = FrameDriver::new(settings.driver)?;
    let mut now = Instant::now();
    let mut frame = 0u32;

    while driver.frame(&mut registry.borrow_mut(), now) {
        if frame == 20 {
            tracing::info!("retargeting card mid-flight");
            card.set(Point::new(60.0, 200.0));
        }

        if frame % 10 == 0 {
            let p = card.get();
            let c = tint.get().clamped();
            println!(
                "frame {frame:>3}  card=({:>7.2}, {:>7.2})  opacity={:.3}  tint=({:.2}, {:.2}, {:.2})",
                p.x,
                p.y,
                opacity.get(),
                c.r,
                c.g,
                c.b
            );
        }

        // One stalled frame: the driver clamps it to max_frame_delta
        now += if frame == 45 {
            Duration::from_millis(750)
        } else {
            Duration::from_micros(16_667)
        };
        frame += 1;
    }

    tracing::info!(frames = driver.frame_count(), "all springs settled");
    let p = card.get();
    println!("final card=({:.2}, {:.2}) opacity={:.3}", p.x, p.y, opacity.get());

    Ok(())
}
