//! Spring and driver configuration
//!
//! Configuration can be built in code from presets or loaded from a TOML
//! settings document:
//!
//! ```toml
//! [driver]
//! max_frame_delta = 0.1
//! max_substep = 0.008
//!
//! [springs.button]
//! preset = "stiff"
//!
//! [springs.drawer]
//! stiffness = 300.0
//! damping = 34.0
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Physical constants for one spring (unit mass).
///
/// Constants are fixed for a spring's lifetime once it is constructed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpringConfig {
    /// Hooke constant pulling the value toward its target
    pub stiffness: f64,
    /// Linear drag opposing velocity
    pub damping: f64,
}

impl SpringConfig {
    /// Names accepted by [`SpringConfig::preset`]
    pub const PRESETS: [&'static str; 6] =
        ["default", "gentle", "wobbly", "stiff", "slow", "molasses"];

    /// Create a config without validation. See [`SpringConfig::try_new`].
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
        }
    }

    /// Create a config, rejecting negative or non-finite constants
    pub fn try_new(stiffness: f64, damping: f64) -> Result<Self> {
        let config = Self::new(stiffness, damping);
        config.validate()?;
        Ok(config)
    }

    /// Slightly under critical damping; the preset used when none is given
    pub const fn standard() -> Self {
        Self::new(170.0, 26.0)
    }

    /// Soft, slow approach with a small overshoot
    pub const fn gentle() -> Self {
        Self::new(120.0, 14.0)
    }

    /// Visible bounce around the target
    pub const fn wobbly() -> Self {
        Self::new(180.0, 12.0)
    }

    /// Fast approach with little overshoot
    pub const fn stiff() -> Self {
        Self::new(210.0, 20.0)
    }

    /// Heavily damped, no overshoot
    pub const fn slow() -> Self {
        Self::new(280.0, 60.0)
    }

    /// Very heavily damped.
    ///
    /// Unstable under a single step of 1/60s; drive it with substeps of
    /// 1/120s or less (see [`DriverConfig::max_substep`]).
    pub const fn molasses() -> Self {
        Self::new(280.0, 120.0)
    }

    /// Look up a preset by name
    pub fn preset(name: &str) -> Result<Self> {
        match name {
            "default" => Ok(Self::standard()),
            "gentle" => Ok(Self::gentle()),
            "wobbly" => Ok(Self::wobbly()),
            "stiff" => Ok(Self::stiff()),
            "slow" => Ok(Self::slow()),
            "molasses" => Ok(Self::molasses()),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.stiffness.is_finite() || self.stiffness < 0.0 {
            return Err(ConfigError::InvalidStiffness(self.stiffness));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(ConfigError::InvalidDamping(self.damping));
        }
        Ok(())
    }

    /// Largest step for which the semi-implicit Euler update stays stable.
    ///
    /// The update is stable while `stiffness * dt^2 + 2 * damping * dt < 4`.
    /// With no damping this reduces to `2 / sqrt(stiffness)`. Steps at or
    /// above the bound grow without limit instead of settling.
    pub fn max_stable_dt(&self) -> f64 {
        let (k, c) = (self.stiffness, self.damping);
        if k <= 0.0 {
            return if c <= 0.0 { f64::INFINITY } else { 2.0 / c };
        }
        ((c * c + 4.0 * k).sqrt() - c) / k
    }

    /// Damping at which this stiffness stops overshooting
    pub fn critical_damping(&self) -> f64 {
        2.0 * self.stiffness.sqrt()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Frame driver tuning. Both limits are off by default, in which case every
/// frame is a single step of the measured delta.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriverConfig {
    /// Clamp measured frame deltas to at most this many seconds
    pub max_frame_delta: Option<f64>,
    /// Split a frame into equal substeps no longer than this many seconds
    pub max_substep: Option<f64>,
}

impl DriverConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(limit) = self.max_frame_delta {
            if !limit.is_finite() || limit <= 0.0 {
                return Err(ConfigError::InvalidFrameDelta(limit));
            }
        }
        if let Some(step) = self.max_substep {
            if !step.is_finite() || step <= 0.0 {
                return Err(ConfigError::InvalidSubstep(step));
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PresetRef {
    preset: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SpringEntry {
    Preset(PresetRef),
    Custom(SpringConfig),
}

impl SpringEntry {
    fn resolve(self) -> Result<SpringConfig> {
        let config = match self {
            SpringEntry::Preset(r) => SpringConfig::preset(&r.preset)?,
            SpringEntry::Custom(config) => config,
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSettings {
    #[serde(default)]
    driver: DriverConfig,
    #[serde(default)]
    springs: BTreeMap<String, SpringEntry>,
}

/// Validated animation settings loaded from TOML
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationSettings {
    pub driver: DriverConfig,
    /// Named spring configs, presets already resolved
    pub springs: BTreeMap<String, SpringConfig>,
}

impl AnimationSettings {
    /// Parse and validate a settings document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let raw: RawSettings =
            toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;

        raw.driver.validate()?;

        let springs = raw
            .springs
            .into_iter()
            .map(|(name, entry)| match entry.resolve() {
                Ok(config) => Ok((name, config)),
                Err(source) => Err(ConfigError::Spring {
                    name,
                    source: Box::new(source),
                }),
            })
            .collect::<Result<BTreeMap<_, _>>>()?;

        Ok(Self {
            driver: raw.driver,
            springs,
        })
    }

    /// Config registered under `name`, if any
    pub fn spring(&self, name: &str) -> Option<SpringConfig> {
        self.springs.get(name).copied()
    }

    /// Config registered under `name`, falling back to the standard preset
    pub fn spring_or_default(&self, name: &str) -> SpringConfig {
        self.spring(name).unwrap_or_default()
    }
}
