//! Haze Core
//!
//! Geometry vocabulary for the Haze blur-area system:
//!
//! - **Geometry**: points, offsets, sizes, rects and rounded rects in screen pixels
//! - **Paths**: vector paths that can be rebuilt in place every frame
//! - **Units**: density-independent lengths, display density, layout direction
//! - **Shapes**: size-independent clip shapes and the outlines they resolve to
//!
//! # Example
//!
//! ```rust
//! use haze_core::{Density, DpExt, LayoutDirection, Path, Shape, Size, Vec2};
//!
//! let shape = Shape::rounded(12.dp());
//! let outline = shape.create_outline(Size::new(200.0, 80.0), LayoutDirection::Ltr, Density::new(2.0));
//!
//! let mut clip = Path::new();
//! clip.add_outline(&outline, Vec2::new(16.0, 16.0));
//! assert_eq!(clip.bounds().origin.x, 16.0);
//! ```

pub mod color;
pub mod geometry;
pub mod path;
pub mod shape;
pub mod unit;

pub use color::Color;
pub use geometry::{CornerRadius, Point, Rect, RoundRect, Size, Vec2};
pub use path::{Path, PathCommand};
pub use shape::{CornerSize, GenericShape, Outline, RoundedCornerShape, Shape};
pub use unit::{Density, Dp, DpExt, LayoutDirection};
