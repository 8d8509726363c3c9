//! Core geometry types
//!
//! Screen-space points, sizes and rectangles shared by the blur-area
//! registry and the outline resolver. "Unspecified" values (not yet
//! measured, not yet placed) are modelled with `Option` at the use site
//! rather than with sentinel values here.

use std::ops::{Add, Sub};

// ─────────────────────────────────────────────────────────────────────────────
// Points and Vectors
// ─────────────────────────────────────────────────────────────────────────────

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vector from the origin to this point
    pub const fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Difference of two points is the offset between them
impl Sub for Point {
    type Output = Vec2;

    fn sub(self, rhs: Point) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vec2> for Point {
    type Output = Point;

    fn add(self, rhs: Vec2) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// 2D vector (an offset)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Size and Rect
// ─────────────────────────────────────────────────────────────────────────────

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero or negative
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn min_dimension(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Convert to a Rect at the origin (0, 0)
    pub const fn to_rect(self) -> Rect {
        Rect {
            origin: Point::ZERO,
            size: self,
        }
    }
}

impl From<Size> for Rect {
    fn from(size: Size) -> Self {
        size.to_rect()
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Create a rect from its left, top, right and bottom edges
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn top_left(&self) -> Point {
        self.origin
    }

    /// Offset the rect by a delta
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Rect {
            origin: Point::new(self.origin.x + dx, self.origin.y + dy),
            size: self.size,
        }
    }

    /// Translate the rect by a vector
    pub fn translate(&self, by: Vec2) -> Self {
        self.offset(by.x, by.y)
    }

    /// Check if this rect intersects with another
    pub fn intersects(&self, other: &Rect) -> bool {
        self.origin.x < other.right()
            && self.right() > other.origin.x
            && self.origin.y < other.bottom()
            && self.bottom() > other.origin.y
    }

    /// Get the intersection of two rects, or None if they don't overlap
    pub fn intersection(&self, other: &Rect) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }

        Some(Rect::from_ltrb(
            self.origin.x.max(other.origin.x),
            self.origin.y.max(other.origin.y),
            self.right().min(other.right()),
            self.bottom().min(other.bottom()),
        ))
    }

    /// Smallest rect containing both
    pub fn union(&self, other: &Rect) -> Self {
        Rect::from_ltrb(
            self.origin.x.min(other.origin.x),
            self.origin.y.min(other.origin.y),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rounded Rect
// ─────────────────────────────────────────────────────────────────────────────

/// Corner radii for rounded rectangles, in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadius {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadius {
    pub const ZERO: CornerRadius = CornerRadius {
        top_left: 0.0,
        top_right: 0.0,
        bottom_right: 0.0,
        bottom_left: 0.0,
    };

    /// Order: top_left, top_right, bottom_right, bottom_left (clockwise from top-left)
    pub fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    pub fn uniform(radius: f32) -> Self {
        Self::new(radius, radius, radius, radius)
    }

    pub fn is_uniform(&self) -> bool {
        self.top_left == self.top_right
            && self.top_right == self.bottom_right
            && self.bottom_right == self.bottom_left
    }
}

impl From<f32> for CornerRadius {
    fn from(radius: f32) -> Self {
        Self::uniform(radius)
    }
}

/// A rectangle with rounded corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RoundRect {
    pub rect: Rect,
    pub corner_radius: CornerRadius,
}

impl RoundRect {
    pub fn new(rect: Rect, corner_radius: impl Into<CornerRadius>) -> Self {
        Self {
            rect,
            corner_radius: corner_radius.into(),
        }
    }

    pub fn translate(&self, by: Vec2) -> Self {
        Self {
            rect: self.rect.translate(by),
            corner_radius: self.corner_radius,
        }
    }
}
