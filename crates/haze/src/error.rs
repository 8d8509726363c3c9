//! Haze error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring a haze effect
///
/// Geometry resolution never fails; an area that cannot be drawn this frame
/// resolves to `None` instead.
#[derive(Error, Debug)]
pub enum HazeError {
    /// Blur radius must be finite and non-negative
    #[error("Invalid blur radius: {0} (expected a finite value >= 0)")]
    InvalidBlurRadius(f32),

    /// Noise factor must lie in 0.0..=1.0
    #[error("Invalid noise factor: {0} (expected 0.0..=1.0)")]
    InvalidNoiseFactor(f32),

    /// Tint alpha must lie in 0.0..=1.0
    #[error("Invalid tint alpha: {0} (expected 0.0..=1.0)")]
    InvalidTintAlpha(f32),

    /// Config file could not be read
    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`HazeConfig`](crate::HazeConfig)
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Result type for haze operations
pub type Result<T> = std::result::Result<T, HazeError>;
