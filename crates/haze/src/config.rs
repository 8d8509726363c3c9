//! Haze configuration file handling
//!
//! Effect defaults can be overridden from a TOML document:
//!
//! ```toml
//! [style]
//! blur_radius_dp = 24.0
//! noise_factor = 0.1
//! tint_alpha = 0.6
//!
//! [render]
//! blur_supported = false
//! ```
//!
//! Every key is optional and falls back to [`HazeDefaults`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use haze_core::{Color, Dp};

use crate::effect::RenderStrategy;
use crate::error::{HazeError, Result};
use crate::style::{HazeDefaults, HazeStyle};

/// Top-level haze configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct HazeConfig {
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Style overrides
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StyleConfig {
    /// Blur radius in dp
    #[serde(default = "default_blur_radius_dp")]
    pub blur_radius_dp: f32,
    /// Noise amount, 0.0-1.0
    #[serde(default = "default_noise_factor")]
    pub noise_factor: f32,
    /// Alpha applied to the background color to derive the tint
    #[serde(default = "default_tint_alpha")]
    pub tint_alpha: f32,
}

fn default_blur_radius_dp() -> f32 {
    HazeDefaults::BLUR_RADIUS.value()
}

fn default_noise_factor() -> f32 {
    HazeDefaults::NOISE_FACTOR
}

fn default_tint_alpha() -> f32 {
    HazeDefaults::TINT_ALPHA
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            blur_radius_dp: default_blur_radius_dp(),
            noise_factor: default_noise_factor(),
            tint_alpha: default_tint_alpha(),
        }
    }
}

/// Rendering backend capabilities
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Whether the platform can blur captured content. When false,
    /// consumers draw a translucent scrim instead.
    #[serde(default = "default_blur_supported")]
    pub blur_supported: bool,
}

fn default_blur_supported() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            blur_supported: default_blur_supported(),
        }
    }
}

impl HazeConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| HazeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded haze config");
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build a validated style for `background_color`
    pub fn style_for(&self, background_color: Color) -> Result<HazeStyle> {
        let tint_alpha = self.style.tint_alpha;
        if !(0.0..=1.0).contains(&tint_alpha) {
            return Err(HazeError::InvalidTintAlpha(tint_alpha));
        }

        let style = HazeStyle::new(background_color)
            .tint(background_color.with_alpha(tint_alpha))
            .blur_radius(Dp(self.style.blur_radius_dp))
            .noise_factor(self.style.noise_factor);
        style.validate()?;
        Ok(style)
    }

    pub fn render_strategy(&self) -> RenderStrategy {
        RenderStrategy::for_platform(self.render.blur_supported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haze_core::DpExt;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = HazeConfig::from_toml_str("").unwrap();
        assert_eq!(config, HazeConfig::default());

        let style = config.style_for(Color::WHITE).unwrap();
        assert_eq!(style, HazeStyle::new(Color::WHITE));
        assert_eq!(config.render_strategy(), RenderStrategy::Blur);
    }

    #[test]
    fn test_partial_overrides() {
        let config = HazeConfig::from_toml_str(
            r#"
            [style]
            blur_radius_dp = 32.0

            [render]
            blur_supported = false
            "#,
        )
        .unwrap();

        assert_eq!(config.style.blur_radius_dp, 32.0);
        assert_eq!(config.style.noise_factor, HazeDefaults::NOISE_FACTOR);
        assert_eq!(config.render_strategy(), RenderStrategy::Scrim);

        let style = config.style_for(Color::BLACK).unwrap();
        assert_eq!(style.blur_radius, 32.dp());
        assert_eq!(style.tint.a, HazeDefaults::TINT_ALPHA);
    }

    #[test]
    fn test_parse_error() {
        let err = HazeConfig::from_toml_str("[style]\nnoise_factor = \"lots\"").unwrap_err();
        assert!(matches!(err, HazeError::ConfigParse(_)));
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let config = HazeConfig::from_toml_str("[style]\ntint_alpha = 2.0").unwrap();
        assert!(matches!(
            config.style_for(Color::WHITE),
            Err(HazeError::InvalidTintAlpha(_))
        ));

        let config = HazeConfig::from_toml_str("[style]\nnoise_factor = -0.5").unwrap();
        assert!(matches!(
            config.style_for(Color::WHITE),
            Err(HazeError::InvalidNoiseFactor(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = HazeConfig::default();
        config.style.noise_factor = 0.05;
        let text = config.to_toml().unwrap();
        assert_eq!(HazeConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = HazeConfig::load(Path::new("/nonexistent/haze.toml")).unwrap_err();
        assert!(matches!(err, HazeError::ConfigRead { .. }));
    }
}
