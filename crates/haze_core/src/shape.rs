//! Shapes and outlines
//!
//! A [`Shape`] is a size-independent description of a clip boundary. Given a
//! concrete size, layout direction and density it produces an [`Outline`],
//! which is always one of exactly three kinds: a rectangle, a rounded
//! rectangle, or a generic path.

use std::fmt;
use std::rc::Rc;

use crate::geometry::{CornerRadius, Rect, RoundRect, Size};
use crate::path::Path;
use crate::unit::{Density, Dp, LayoutDirection};

// ─────────────────────────────────────────────────────────────────────────────
// Outline
// ─────────────────────────────────────────────────────────────────────────────

/// Concrete boundary geometry produced by a [`Shape`]
#[derive(Clone, Debug, PartialEq)]
pub enum Outline {
    Rectangle(Rect),
    Rounded(RoundRect),
    Generic(Path),
}

impl Outline {
    pub fn bounds(&self) -> Rect {
        match self {
            Outline::Rectangle(rect) => *rect,
            Outline::Rounded(round_rect) => round_rect.rect,
            Outline::Generic(path) => path.bounds(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Corner sizes
// ─────────────────────────────────────────────────────────────────────────────

/// Size of one corner of a [`RoundedCornerShape`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CornerSize {
    /// Absolute pixels
    Px(f32),
    /// Density-independent length
    Dp(Dp),
    /// Percentage (0-100) of the shape's smaller dimension
    Percent(f32),
}

impl CornerSize {
    pub const ZERO: CornerSize = CornerSize::Px(0.0);

    /// Resolve to pixels, never negative
    pub fn to_px(self, size: Size, density: Density) -> f32 {
        let px = match self {
            CornerSize::Px(px) => px,
            CornerSize::Dp(dp) => dp.to_px(density),
            CornerSize::Percent(percent) => size.min_dimension() * percent.clamp(0.0, 100.0) / 100.0,
        };
        px.max(0.0)
    }
}

impl From<Dp> for CornerSize {
    fn from(dp: Dp) -> Self {
        CornerSize::Dp(dp)
    }
}

/// Rectangle with rounded corners, specified relative to the layout direction
///
/// `start`/`end` map to left/right in LTR layouts and are mirrored in RTL.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundedCornerShape {
    pub top_start: CornerSize,
    pub top_end: CornerSize,
    pub bottom_end: CornerSize,
    pub bottom_start: CornerSize,
}

impl RoundedCornerShape {
    pub fn new(
        top_start: CornerSize,
        top_end: CornerSize,
        bottom_end: CornerSize,
        bottom_start: CornerSize,
    ) -> Self {
        Self {
            top_start,
            top_end,
            bottom_end,
            bottom_start,
        }
    }

    pub fn uniform(corner: impl Into<CornerSize>) -> Self {
        let corner = corner.into();
        Self::new(corner, corner, corner, corner)
    }

    pub fn percent(percent: f32) -> Self {
        Self::uniform(CornerSize::Percent(percent))
    }

    pub fn create_outline(
        &self,
        size: Size,
        layout_direction: LayoutDirection,
        density: Density,
    ) -> Outline {
        let mut top_start = self.top_start.to_px(size, density);
        let mut top_end = self.top_end.to_px(size, density);
        let mut bottom_end = self.bottom_end.to_px(size, density);
        let mut bottom_start = self.bottom_start.to_px(size, density);

        // Corners sharing a side may not overlap
        let min_dimension = size.min_dimension().max(0.0);
        fit_pair(&mut top_start, &mut bottom_start, min_dimension);
        fit_pair(&mut top_end, &mut bottom_end, min_dimension);

        let rect = size.to_rect();
        if top_start + top_end + bottom_end + bottom_start == 0.0 {
            return Outline::Rectangle(rect);
        }

        let corner_radius = match layout_direction {
            LayoutDirection::Ltr => CornerRadius::new(top_start, top_end, bottom_end, bottom_start),
            LayoutDirection::Rtl => CornerRadius::new(top_end, top_start, bottom_start, bottom_end),
        };
        Outline::Rounded(RoundRect::new(rect, corner_radius))
    }
}

fn fit_pair(a: &mut f32, b: &mut f32, limit: f32) {
    let sum = *a + *b;
    if sum > limit && sum > 0.0 {
        let scale = limit / sum;
        *a *= scale;
        *b *= scale;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Generic shapes
// ─────────────────────────────────────────────────────────────────────────────

type PathBuilderFn = dyn Fn(Size, LayoutDirection) -> Path;

/// Shape whose outline is built by a closure for each size
#[derive(Clone)]
pub struct GenericShape {
    builder: Rc<PathBuilderFn>,
}

impl GenericShape {
    pub fn new(builder: impl Fn(Size, LayoutDirection) -> Path + 'static) -> Self {
        Self {
            builder: Rc::new(builder),
        }
    }

    pub fn build(&self, size: Size, layout_direction: LayoutDirection) -> Path {
        (self.builder)(size, layout_direction)
    }
}

impl fmt::Debug for GenericShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericShape").finish_non_exhaustive()
    }
}

impl PartialEq for GenericShape {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.builder, &other.builder)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Shape
// ─────────────────────────────────────────────────────────────────────────────

/// Clip shape of a blur area
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Shape {
    /// Plain rectangle covering the whole size
    #[default]
    Rectangle,
    /// Rectangle with rounded corners
    RoundedCorners(RoundedCornerShape),
    /// Circle (or stadium, for non-square sizes)
    Circle,
    /// Fixed path in the shape's local coordinates
    Path(Path),
    /// Path built per size by a closure
    Generic(GenericShape),
}

impl Shape {
    pub fn rounded(corner: impl Into<CornerSize>) -> Self {
        Shape::RoundedCorners(RoundedCornerShape::uniform(corner))
    }

    pub fn generic(builder: impl Fn(Size, LayoutDirection) -> Path + 'static) -> Self {
        Shape::Generic(GenericShape::new(builder))
    }

    /// Resolve this shape against a concrete size
    pub fn create_outline(
        &self,
        size: Size,
        layout_direction: LayoutDirection,
        density: Density,
    ) -> Outline {
        match self {
            Shape::Rectangle => Outline::Rectangle(size.to_rect()),
            Shape::RoundedCorners(shape) => shape.create_outline(size, layout_direction, density),
            Shape::Circle => {
                RoundedCornerShape::percent(50.0).create_outline(size, layout_direction, density)
            }
            Shape::Path(path) => Outline::Generic(path.clone()),
            Shape::Generic(shape) => Outline::Generic(shape.build(size, layout_direction)),
        }
    }
}

impl From<RoundedCornerShape> for Shape {
    fn from(shape: RoundedCornerShape) -> Self {
        Shape::RoundedCorners(shape)
    }
}

impl From<GenericShape> for Shape {
    fn from(shape: GenericShape) -> Self {
        Shape::Generic(shape)
    }
}
