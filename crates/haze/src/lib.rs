//! Haze
//!
//! Glassmorphism blur areas for declarative UI trees. This crate keeps track
//! of which screen regions should be blurred and resolves their geometry for
//! each consumer; capture, blur and compositing belong to the host renderer.
//!
//! - **Areas**: [`BlurArea`] regions maintained by [`HazeChild`] placement nodes
//! - **Registry**: the shared [`AreaRegistry`] of active areas, with token-based unregistration
//! - **Resolver**: [`bounds_in_local`] and [`update_path`] convert areas into a consumer's space
//! - **Effect**: [`HazeEffect`] turns a registry snapshot into a per-frame draw plan
//! - **Style**: [`HazeStyle`] and [`HazeDefaults`], optionally loaded from [`HazeConfig`]
//!
//! # Example
//!
//! ```rust
//! use haze::{AreaHandle, AreaRegistry, BlurArea, Point, Rect, Size};
//!
//! let area = BlurArea::new()
//!     .with_size(Size::new(200.0, 100.0))
//!     .with_position(Point::new(50.0, 50.0));
//!
//! let bounds = haze::bounds_in_local(&area, Some(Point::new(20.0, 20.0)));
//! assert_eq!(bounds, Some(Rect::new(30.0, 30.0, 200.0, 100.0)));
//!
//! let mut registry = AreaRegistry::new();
//! registry.register_area(&AreaHandle::new(area));
//! assert_eq!(registry.areas().len(), 1);
//! ```

pub mod area;
pub mod child;
pub mod config;
pub mod effect;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod style;

pub use area::{AreaHandle, BlurArea};
pub use child::HazeChild;
pub use config::{HazeConfig, RenderConfig, StyleConfig};
pub use effect::{HazeEffect, RenderStrategy, ResolvedArea};
pub use error::{HazeError, Result};
pub use registry::{AreaKey, AreaRegistry, SharedAreaRegistry, WeakAreaRegistry};
pub use resolver::{bounds_in_local, update_path};
pub use style::{HazeDefaults, HazeStyle};

// Re-export the geometry vocabulary so callers need a single dependency
pub use haze_core::{
    Color, CornerRadius, CornerSize, Density, Dp, DpExt, GenericShape, LayoutDirection, Outline,
    Path, PathCommand, Point, Rect, RoundRect, RoundedCornerShape, Shape, Size, Vec2,
};
