//! Frame driver
//!
//! Turns monotonic frame timestamps into [`AnimationRegistry::step`] calls.
//! The platform decides when frames happen; the driver decides how much
//! time each one covers:
//!
//! - The first frame after an idle period steps with `dt = 0`, so the idle
//!   gap never reaches the springs.
//! - Once the registry drains, the driver forgets its last timestamp and
//!   reports that no more frames are needed.
//! - Optionally, long frames are clamped and split into substeps
//!   (see [`DriverConfig`]). A frame never runs more than
//!   [`MAX_SUBSTEPS`] substeps; time beyond that is dropped.

use std::time::Instant;

use tracing::{debug, warn};

use crate::config::DriverConfig;
use crate::error::Result;
use crate::registry::AnimationRegistry;

/// Upper bound on registry steps within one frame
pub const MAX_SUBSTEPS: u32 = 240;

/// Paces an [`AnimationRegistry`] from frame timestamps
#[derive(Debug, Default)]
pub struct FrameDriver {
    config: DriverConfig,
    last_frame: Option<Instant>,
    frame_count: u64,
}

impl FrameDriver {
    /// Create a driver, rejecting invalid frame limits
    pub fn new(config: DriverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            last_frame: None,
            frame_count: 0,
        })
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Whether the next frame will step with `dt = 0`
    pub fn is_idle(&self) -> bool {
        self.last_frame.is_none()
    }

    /// Frames that have stepped the registry since creation
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Run one frame at `now`.
    ///
    /// Returns `true` while the registry still has moving springs and the
    /// platform should schedule another frame.
    pub fn frame(&mut self, registry: &mut AnimationRegistry, now: Instant) -> bool {
        if registry.is_empty() {
            self.last_frame = None;
            return false;
        }

        let measured = self
            .last_frame
            .map_or(0.0, |last| now.saturating_duration_since(last).as_secs_f64());
        self.last_frame = Some(now);
        self.frame_count += 1;

        let dt = match self.config.max_frame_delta {
            Some(limit) if measured > limit => {
                debug!(measured, limit, "clamping frame delta");
                limit
            }
            _ => measured,
        };

        self.advance(registry, dt);

        if registry.is_empty() {
            debug!(frames = self.frame_count, "all springs settled, driver idle");
            self.last_frame = None;
            return false;
        }
        true
    }

    /// Run one frame at the current time
    pub fn tick(&mut self, registry: &mut AnimationRegistry) -> bool {
        self.frame(registry, Instant::now())
    }

    fn advance(&self, registry: &mut AnimationRegistry, mut dt: f64) {
        let substeps = match self.config.max_substep {
            Some(max) if dt > max => {
                let wanted = (dt / max).ceil();
                if wanted > f64::from(MAX_SUBSTEPS) {
                    let kept = max * f64::from(MAX_SUBSTEPS);
                    warn!(dt, kept, "frame needs too many substeps, dropping time");
                    dt = kept;
                    MAX_SUBSTEPS
                } else {
                    wanted as u32
                }
            }
            _ => 1,
        };
        let step = dt / f64::from(substeps);

        if let Some(bound) = registry.max_stable_dt() {
            if step >= bound {
                warn!(
                    step,
                    bound, "frame step exceeds spring stability bound, motion may diverge"
                );
            }
        }

        for _ in 0..substeps {
            registry.step(step);
            if registry.is_empty() {
                break;
            }
        }
    }
}
