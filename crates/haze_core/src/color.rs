//! Tint and background colors
//!
//! Channels are stored as `f32` in `0.0..=1.0`. Packed colors use the
//! `0xAARRGGBB` layout, so `0xB3FFFFFF` is white at 70% alpha.

/// Straight-alpha RGBA color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a `0xAARRGGBB` color
    pub fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes().map(|channel| f32::from(channel) / 255.0);
        Self { r, g, b, a }
    }

    /// Same color with its alpha replaced
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
