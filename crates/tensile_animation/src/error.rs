//! Animation configuration error types

use thiserror::Error;

/// Errors raised while building or loading animation configuration.
///
/// The integrator and registry themselves never fail; only the
/// configuration surface is fallible.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Stiffness must be finite and non-negative
    #[error("Invalid stiffness {0}: must be finite and non-negative")]
    InvalidStiffness(f64),

    /// Damping must be finite and non-negative
    #[error("Invalid damping {0}: must be finite and non-negative")]
    InvalidDamping(f64),

    /// Frame delta limit must be finite and positive
    #[error("Invalid max frame delta {0}: must be finite and positive")]
    InvalidFrameDelta(f64),

    /// Substep length must be finite and positive
    #[error("Invalid max substep {0}: must be finite and positive")]
    InvalidSubstep(f64),

    /// No preset with this name exists
    #[error("Unknown spring preset: {0}")]
    UnknownPreset(String),

    /// A named spring entry failed to resolve
    #[error("Spring `{name}`: {source}")]
    Spring {
        name: String,
        #[source]
        source: Box<ConfigError>,
    },

    /// Settings document is not valid TOML or has the wrong shape
    #[error("Failed to parse animation settings: {0}")]
    Parse(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
