//! Density-independent units and layout direction

use std::fmt;

/// A density-independent length
///
/// One dp is one pixel at a density of 1.0.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub const fn new(value: f32) -> Self {
        Dp(value)
    }

    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert to pixels for the given density
    pub fn to_px(self, density: Density) -> f32 {
        self.0 * density.density
    }
}

impl fmt::Display for Dp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.dp", self.0)
    }
}

/// Extension for writing lengths as `20.0.dp()`
pub trait DpExt {
    fn dp(self) -> Dp;
}

impl DpExt for f32 {
    fn dp(self) -> Dp {
        Dp(self)
    }
}

impl DpExt for i32 {
    fn dp(self) -> Dp {
        Dp(self as f32)
    }
}

/// Display density of the surface being laid out
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    /// Pixels per dp
    pub density: f32,
    /// Scale applied to font sizes on top of `density`
    pub font_scale: f32,
}

impl Density {
    pub const ONE: Density = Density {
        density: 1.0,
        font_scale: 1.0,
    };

    pub const fn new(density: f32) -> Self {
        Self {
            density,
            font_scale: 1.0,
        }
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::ONE
    }
}

/// Horizontal reading direction of the layout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

impl LayoutDirection {
    pub fn is_rtl(self) -> bool {
        matches!(self, LayoutDirection::Rtl)
    }
}
