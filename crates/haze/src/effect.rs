//! Haze consumer
//!
//! A [`HazeEffect`] is the node that draws blurred copies of the registered
//! areas over its own content. Each frame the host calls
//! [`HazeEffect::resolve`], which turns a registry snapshot into a draw plan:
//! one [`ResolvedArea`] per drawable area, plus a clip path that can be
//! fetched with [`HazeEffect::clip_path`]. Capturing, blurring and
//! compositing the plan is the renderer's job.
//!
//! ```rust
//! use haze::{AreaRegistry, Color, Density, HazeChild, HazeEffect, HazeStyle, LayoutDirection, Point, Shape, Size};
//!
//! let registry = AreaRegistry::shared();
//!
//! let mut child = HazeChild::new(Shape::Rectangle, None);
//! child.attach(&registry);
//! child.on_placed(Size::new(200.0, 100.0), Point::new(50.0, 50.0));
//!
//! let mut effect = HazeEffect::new(&registry, HazeStyle::new(Color::WHITE)).unwrap();
//! effect.set_position_on_screen(Some(Point::new(20.0, 20.0)));
//!
//! let plan = effect.resolve(LayoutDirection::Ltr, Density::ONE);
//! assert_eq!(plan.len(), 1);
//! assert_eq!(plan[0].bounds.origin, Point::new(30.0, 30.0));
//! ```

use std::rc::Rc;

use slotmap::SecondaryMap;
use smallvec::SmallVec;

use haze_core::{Color, Density, LayoutDirection, Path, Point, Rect};

use crate::area::BlurArea;
use crate::error::Result;
use crate::registry::{AreaKey, SharedAreaRegistry, WeakAreaRegistry};
use crate::resolver::{bounds_in_local, update_path};
use crate::style::HazeStyle;

/// How areas are rendered on the current platform
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderStrategy {
    /// Capture, blur, tint and noise the content beneath each area
    #[default]
    Blur,
    /// Platform cannot blur; draw a translucent tint scrim instead
    Scrim,
}

impl RenderStrategy {
    pub fn for_platform(blur_supported: bool) -> Self {
        if blur_supported {
            RenderStrategy::Blur
        } else {
            RenderStrategy::Scrim
        }
    }
}

/// Draw instructions for one area in the consumer's local space
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedArea {
    /// Registration this entry was resolved from
    pub key: AreaKey,
    /// Area bounds in the consumer's local coordinates
    pub bounds: Rect,
    /// Tint to draw over the content (area override or consumer default)
    pub tint: Color,
    /// Blur radius in pixels
    pub blur_radius_px: f32,
    /// Noise amount, 0.0-1.0
    pub noise_factor: f32,
    pub strategy: RenderStrategy,
}

/// Change-detection state captured at the last resolve
#[derive(Clone, Debug, PartialEq)]
struct Fingerprint {
    registry_version: u64,
    area_versions: SmallVec<[(AreaKey, u64); 4]>,
    position: Option<Point>,
    layout_direction: LayoutDirection,
    density: Density,
}

/// Consumer that blurs the areas of a shared registry
#[derive(Debug)]
pub struct HazeEffect {
    registry: WeakAreaRegistry,
    style: HazeStyle,
    strategy: RenderStrategy,
    position_on_screen: Option<Point>,
    /// Clip path buffers, rebuilt in place every resolve
    paths: SecondaryMap<AreaKey, Path>,
    last_resolved: Option<Fingerprint>,
    style_dirty: bool,
}

impl HazeEffect {
    /// Create a consumer of `registry` with a validated style
    pub fn new(registry: &SharedAreaRegistry, style: HazeStyle) -> Result<Self> {
        style.validate()?;
        Ok(Self {
            registry: Rc::downgrade(registry),
            style,
            strategy: RenderStrategy::default(),
            position_on_screen: None,
            paths: SecondaryMap::new(),
            last_resolved: None,
            style_dirty: true,
        })
    }

    pub fn with_strategy(mut self, strategy: RenderStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn style(&self) -> &HazeStyle {
        &self.style
    }

    pub fn strategy(&self) -> RenderStrategy {
        self.strategy
    }

    pub fn position_on_screen(&self) -> Option<Point> {
        self.position_on_screen
    }

    /// Replace the style; an invalid style leaves the current one in place
    pub fn update(&mut self, style: HazeStyle) -> Result<()> {
        style.validate()?;
        if self.style != style {
            tracing::trace!(?style, "haze style updated");
            self.style = style;
            self.style_dirty = true;
        }
        Ok(())
    }

    /// Point this consumer at a different registry
    pub fn set_registry(&mut self, registry: &SharedAreaRegistry) {
        self.registry = Rc::downgrade(registry);
        self.paths.clear();
        self.last_resolved = None;
    }

    pub fn set_strategy(&mut self, strategy: RenderStrategy) {
        if self.strategy != strategy {
            self.strategy = strategy;
            self.style_dirty = true;
        }
    }

    /// Record where this consumer sits on screen after placement
    pub fn set_position_on_screen(&mut self, position: Option<Point>) {
        self.position_on_screen = position;
    }

    /// Tint for `area`: its own override, else the style's tint
    pub fn effective_tint(&self, area: &BlurArea) -> Color {
        area.tint().unwrap_or(self.style.tint)
    }

    /// Build this frame's draw plan
    ///
    /// Areas that are not drawable this frame are skipped. A consumer whose
    /// registry has been dropped resolves to an empty plan.
    pub fn resolve(
        &mut self,
        layout_direction: LayoutDirection,
        density: Density,
    ) -> Vec<ResolvedArea> {
        let Some(registry) = self.registry.upgrade() else {
            tracing::warn!("haze effect resolved against a dropped registry");
            self.paths.clear();
            self.last_resolved = None;
            return Vec::new();
        };

        // Copy the registrations out so the registry is not borrowed while drawing
        let (registry_version, entries) = {
            let registry = registry.borrow();
            (registry.version(), registry.entries())
        };

        self.paths.retain(|key, _| entries.iter().any(|(k, _)| *k == key));

        let blur_radius_px = self.style.blur_radius.to_px(density);
        let mut plan = Vec::with_capacity(entries.len());
        let mut area_versions = SmallVec::new();

        for (key, handle) in &entries {
            let area = handle.get();
            area_versions.push((*key, area.version()));

            let Some(bounds) = bounds_in_local(&area, self.position_on_screen) else {
                tracing::trace!(?key, "skipping blur area this frame");
                self.paths.remove(*key);
                continue;
            };

            match self.paths.get_mut(*key) {
                Some(path) => update_path(&area, path, bounds, layout_direction, density),
                None => {
                    let mut path = Path::new();
                    update_path(&area, &mut path, bounds, layout_direction, density);
                    self.paths.insert(*key, path);
                }
            }

            plan.push(ResolvedArea {
                key: *key,
                bounds,
                tint: self.effective_tint(&area),
                blur_radius_px,
                noise_factor: self.style.noise_factor,
                strategy: self.strategy,
            });
        }

        self.last_resolved = Some(Fingerprint {
            registry_version,
            area_versions,
            position: self.position_on_screen,
            layout_direction,
            density,
        });
        self.style_dirty = false;
        plan
    }

    /// Clip path for an area resolved by the last [`resolve`](Self::resolve)
    pub fn clip_path(&self, key: AreaKey) -> Option<&Path> {
        self.paths.get(key)
    }

    /// Whether anything affecting the draw plan changed since the last resolve
    ///
    /// `layout_direction` and `density` are the values the next
    /// [`resolve`](Self::resolve) would be called with.
    pub fn needs_redraw(&self, layout_direction: LayoutDirection, density: Density) -> bool {
        if self.style_dirty {
            return true;
        }
        let Some(last) = &self.last_resolved else {
            return true;
        };
        if last.layout_direction != layout_direction || last.density != density {
            return true;
        }
        let Some(registry) = self.registry.upgrade() else {
            // Dropped registry: redraw once to clear previous output
            return true;
        };
        let registry = registry.borrow();

        if last.registry_version != registry.version() || last.position != self.position_on_screen
        {
            return true;
        }
        registry
            .entries()
            .iter()
            .zip(last.area_versions.iter())
            .any(|((key, area), (last_key, last_version))| {
                key != last_key || area.version() != *last_version
            })
    }
}
