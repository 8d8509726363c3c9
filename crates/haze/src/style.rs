//! Haze effect styling
//!
//! [`HazeStyle`] carries everything a consumer needs to draw its areas:
//! background color, default tint, blur radius and noise amount. The
//! defaults live on [`HazeDefaults`].

use haze_core::{Color, Dp, DpExt};

use crate::error::{HazeError, Result};

/// Default values for haze effects
pub struct HazeDefaults;

impl HazeDefaults {
    /// Default blur radius. Larger values produce a stronger blur.
    pub const BLUR_RADIUS: Dp = Dp(20.0);

    /// Amount of noise applied to the blurred content
    pub const NOISE_FACTOR: f32 = 0.15;

    /// Alpha applied to the background color to derive the default tint
    pub const TINT_ALPHA: f32 = 0.7;

    /// Default tint for a background color
    pub fn tint(color: Color) -> Color {
        color.with_alpha(Self::TINT_ALPHA)
    }
}

/// Glassmorphism effect configuration for one consumer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HazeStyle {
    /// Background color of the content behind the areas
    pub background_color: Color,
    /// Tint drawn over the blurred content; should be translucent.
    /// Areas can override it with their own tint.
    pub tint: Color,
    /// Blur radius
    pub blur_radius: Dp,
    /// Noise amount, 0.0-1.0
    pub noise_factor: f32,
}

impl HazeStyle {
    /// Style with default blur and noise, tinted from `background_color`
    pub fn new(background_color: Color) -> Self {
        Self {
            background_color,
            tint: HazeDefaults::tint(background_color),
            blur_radius: HazeDefaults::BLUR_RADIUS,
            noise_factor: HazeDefaults::NOISE_FACTOR,
        }
    }

    /// Set tint color
    pub fn tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    /// Set blur radius
    pub fn blur_radius(mut self, blur_radius: Dp) -> Self {
        self.blur_radius = blur_radius;
        self
    }

    /// Set noise amount
    pub fn noise_factor(mut self, noise_factor: f32) -> Self {
        self.noise_factor = noise_factor;
        self
    }

    /// Check the numeric ranges
    pub fn validate(&self) -> Result<()> {
        let radius = self.blur_radius.value();
        if !radius.is_finite() || radius < 0.0 {
            return Err(HazeError::InvalidBlurRadius(radius));
        }
        if !(0.0..=1.0).contains(&self.noise_factor) {
            return Err(HazeError::InvalidNoiseFactor(self.noise_factor));
        }
        Ok(())
    }

    // Presets

    /// Subtle blur (10dp)
    pub fn thin(background_color: Color) -> Self {
        Self::new(background_color).blur_radius(10.dp())
    }

    /// Heavy blur (40dp)
    pub fn thick(background_color: Color) -> Self {
        Self::new(background_color).blur_radius(40.dp())
    }
}

impl Default for HazeStyle {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tint_alpha() {
        let tint = HazeDefaults::tint(Color::rgb(0.2, 0.4, 0.6));
        assert_eq!(tint, Color::rgba(0.2, 0.4, 0.6, 0.7));
    }

    #[test]
    fn test_new_uses_defaults() {
        let style = HazeStyle::new(Color::BLACK);
        assert_eq!(style.tint, Color::BLACK.with_alpha(0.7));
        assert_eq!(style.blur_radius, 20.dp());
        assert_eq!(style.noise_factor, 0.15);
        assert!(style.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_noise() {
        let style = HazeStyle::default().noise_factor(1.5);
        assert!(matches!(
            style.validate(),
            Err(HazeError::InvalidNoiseFactor(n)) if n == 1.5
        ));

        let style = HazeStyle::default().noise_factor(f32::NAN);
        assert!(matches!(style.validate(), Err(HazeError::InvalidNoiseFactor(_))));
    }

    #[test]
    fn test_validate_rejects_bad_radius() {
        let style = HazeStyle::default().blur_radius(Dp(-1.0));
        assert!(matches!(style.validate(), Err(HazeError::InvalidBlurRadius(_))));

        let style = HazeStyle::default().blur_radius(Dp(f32::INFINITY));
        assert!(matches!(style.validate(), Err(HazeError::InvalidBlurRadius(_))));
    }

    #[test]
    fn test_presets() {
        assert_eq!(HazeStyle::thin(Color::WHITE).blur_radius, 10.dp());
        assert_eq!(HazeStyle::thick(Color::WHITE).blur_radius, 40.dp());
    }
}
