//! Vector paths
//!
//! A [`Path`] is an ordered list of [`PathCommand`]s. Paths can be built in a
//! chainable style (`Path::new().move_to(..).line_to(..)`) or mutated in place
//! (`reset`, `add_rect`, `add_round_rect`, `add_path`). The in-place methods
//! only append to the command buffer, so a clip path that is reset and rebuilt
//! every frame reuses its allocation once it has grown to size.

use crate::geometry::{CornerRadius, Point, Rect, RoundRect, Vec2};
use crate::shape::Outline;

/// Magic number for cubic Bézier circle approximation
const KAPPA: f32 = 0.5522847498;

/// Path command for building vector paths
#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Move to a point
    MoveTo(Point),
    /// Line to a point
    LineTo(Point),
    /// Quadratic Bézier curve
    QuadTo { control: Point, end: Point },
    /// Cubic Bézier curve
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Arc to a point
    ArcTo {
        radii: Vec2,
        rotation: f32,
        large_arc: bool,
        sweep: bool,
        end: Point,
    },
    /// Close the current subpath
    Close,
}

impl PathCommand {
    /// The same command with every point shifted by `by`
    pub fn translated(&self, by: Vec2) -> Self {
        match *self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(p + by),
            PathCommand::LineTo(p) => PathCommand::LineTo(p + by),
            PathCommand::QuadTo { control, end } => PathCommand::QuadTo {
                control: control + by,
                end: end + by,
            },
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => PathCommand::CubicTo {
                control1: control1 + by,
                control2: control2 + by,
                end: end + by,
            },
            PathCommand::ArcTo {
                radii,
                rotation,
                large_arc,
                sweep,
                end,
            } => PathCommand::ArcTo {
                radii,
                rotation,
                large_arc,
                sweep,
                end: end + by,
            },
            PathCommand::Close => PathCommand::Close,
        }
    }
}

/// A vector path
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Create a path from a vector of commands
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Move to a point
    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    /// Line to a point
    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    /// Cubic Bézier curve
    pub fn cubic_to(mut self, cx1: f32, cy1: f32, cx2: f32, cy2: f32, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::CubicTo {
            control1: Point::new(cx1, cy1),
            control2: Point::new(cx2, cy2),
            end: Point::new(x, y),
        });
        self
    }

    /// Close the path
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Create a rectangle path
    pub fn rect(rect: Rect) -> Self {
        let mut path = Self::new();
        path.add_rect(rect);
        path
    }

    /// Create a rounded rectangle path
    pub fn rounded_rect(rect: Rect, corner_radius: impl Into<CornerRadius>) -> Self {
        let mut path = Self::new();
        path.add_round_rect(RoundRect::new(rect, corner_radius));
        path
    }

    /// Create a circle path
    pub fn circle(center: Point, radius: f32) -> Self {
        let k = KAPPA;
        let r = radius;
        let cx = center.x;
        let cy = center.y;

        Self::new()
            .move_to(cx + r, cy)
            .cubic_to(cx + r, cy + r * k, cx + r * k, cy + r, cx, cy + r)
            .cubic_to(cx - r * k, cy + r, cx - r, cy + r * k, cx - r, cy)
            .cubic_to(cx - r, cy - r * k, cx - r * k, cy - r, cx, cy - r)
            .cubic_to(cx + r * k, cy - r, cx + r, cy - r * k, cx + r, cy)
            .close()
    }

    /// Get the path commands
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // In-place editing
    // ─────────────────────────────────────────────────────────────────────────

    /// Remove all commands, keeping the allocation
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Append a closed rectangle subpath
    pub fn add_rect(&mut self, rect: Rect) {
        let (x, y) = (rect.x(), rect.y());
        let (r, b) = (rect.right(), rect.bottom());
        self.commands.extend([
            PathCommand::MoveTo(Point::new(x, y)),
            PathCommand::LineTo(Point::new(r, y)),
            PathCommand::LineTo(Point::new(r, b)),
            PathCommand::LineTo(Point::new(x, b)),
            PathCommand::Close,
        ]);
    }

    /// Append a closed rounded rectangle subpath
    ///
    /// Negative radii count as zero. When two radii on the same side add up
    /// to more than that side's length, all four are scaled down by the same
    /// factor, so radii that already fit are drawn exactly as given.
    pub fn add_round_rect(&mut self, round_rect: RoundRect) {
        let rect = round_rect.rect;
        let x = rect.x();
        let y = rect.y();
        let w = rect.width();
        let h = rect.height();
        let CornerRadius {
            top_left: tl,
            top_right: tr,
            bottom_right: br,
            bottom_left: bl,
        } = fit_radii(round_rect.corner_radius, w, h);

        // Control-point inset for a quarter circle
        let c = 1.0 - KAPPA;
        let cubic = |c1x, c1y, c2x, c2y, ex, ey| PathCommand::CubicTo {
            control1: Point::new(c1x, c1y),
            control2: Point::new(c2x, c2y),
            end: Point::new(ex, ey),
        };

        self.commands.push(PathCommand::MoveTo(Point::new(x + tl, y)));

        // Top edge
        self.commands.push(PathCommand::LineTo(Point::new(x + w - tr, y)));
        if tr > 0.0 {
            self.commands
                .push(cubic(x + w - tr * c, y, x + w, y + tr * c, x + w, y + tr));
        }

        // Right edge
        self.commands.push(PathCommand::LineTo(Point::new(x + w, y + h - br)));
        if br > 0.0 {
            self.commands.push(cubic(
                x + w,
                y + h - br * c,
                x + w - br * c,
                y + h,
                x + w - br,
                y + h,
            ));
        }

        // Bottom edge
        self.commands.push(PathCommand::LineTo(Point::new(x + bl, y + h)));
        if bl > 0.0 {
            self.commands
                .push(cubic(x + bl * c, y + h, x, y + h - bl * c, x, y + h - bl));
        }

        // Left edge
        self.commands.push(PathCommand::LineTo(Point::new(x, y + tl)));
        if tl > 0.0 {
            self.commands
                .push(cubic(x, y + tl * c, x + tl * c, y, x + tl, y));
        }

        self.commands.push(PathCommand::Close);
    }

    /// Append every command of `other`, shifted by `offset`
    pub fn add_path(&mut self, other: &Path, offset: Vec2) {
        self.commands
            .extend(other.commands.iter().map(|cmd| cmd.translated(offset)));
    }

    /// Append an outline, shifted by `offset`
    pub fn add_outline(&mut self, outline: &Outline, offset: Vec2) {
        match outline {
            Outline::Rectangle(rect) => self.add_rect(rect.translate(offset)),
            Outline::Rounded(round_rect) => self.add_round_rect(round_rect.translate(offset)),
            Outline::Generic(path) => self.add_path(path, offset),
        }
    }

    /// A copy of this path with every point shifted by `by`
    pub fn translated(&self, by: Vec2) -> Self {
        let mut path = Self::new();
        path.add_path(self, by);
        path
    }

    /// Calculate the bounding rectangle of this path
    ///
    /// Curve control points are included, so the result is conservative.
    pub fn bounds(&self) -> Rect {
        if self.commands.is_empty() {
            return Rect::ZERO;
        }

        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;

        let mut include = |p: Point| {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        };

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => include(p),
                PathCommand::QuadTo { control, end } => {
                    include(control);
                    include(end);
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    include(control1);
                    include(control2);
                    include(end);
                }
                PathCommand::ArcTo { end, radii, .. } => {
                    // Conservative bounds: include endpoint and radii extent
                    include(Point::new(end.x - radii.x, end.y - radii.y));
                    include(Point::new(end.x + radii.x, end.y + radii.y));
                }
                PathCommand::Close => {}
            }
        }

        if min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite() {
            Rect::from_ltrb(min_x, min_y, max_x, max_y)
        } else {
            Rect::ZERO
        }
    }
}

/// Clamp radii to zero and scale them down together until every side fits
fn fit_radii(radius: CornerRadius, width: f32, height: f32) -> CornerRadius {
    let tl = radius.top_left.max(0.0);
    let tr = radius.top_right.max(0.0);
    let br = radius.bottom_right.max(0.0);
    let bl = radius.bottom_left.max(0.0);

    let side = |length: f32, a: f32, b: f32| {
        let sum = a + b;
        if sum > 0.0 {
            (length.max(0.0) / sum).min(1.0)
        } else {
            1.0
        }
    };
    let scale = side(width, tl, tr)
        .min(side(width, bl, br))
        .min(side(height, tl, bl))
        .min(side(height, tr, br));

    CornerRadius::new(tl * scale, tr * scale, br * scale, bl * scale)
}
