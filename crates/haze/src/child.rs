//! Blur-area placement node
//!
//! A [`HazeChild`] owns one [`BlurArea`] and keeps it registered while the
//! node is attached to the tree. The host calls [`HazeChild::on_placed`]
//! after every layout pass so the area tracks the node's size and screen
//! position.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use haze_core::{Color, Point, Shape, Size};

use crate::area::{AreaHandle, BlurArea};
use crate::registry::{AreaKey, SharedAreaRegistry, WeakAreaRegistry};

/// Node whose screen region is blurred by [`HazeEffect`](crate::HazeEffect)s
#[derive(Debug)]
pub struct HazeChild {
    area: AreaHandle,
    registration: Option<Registration>,
}

#[derive(Debug)]
struct Registration {
    registry: WeakAreaRegistry,
    /// The registry's retired-key queue, used when it is borrowed at detach
    retired: Weak<RefCell<Vec<AreaKey>>>,
    key: AreaKey,
}

impl HazeChild {
    pub fn new(shape: impl Into<Shape>, tint: Option<Color>) -> Self {
        let mut area = BlurArea::new().with_shape(shape);
        area.set_tint(tint);
        Self {
            area: AreaHandle::new(area),
            registration: None,
        }
    }

    /// The area this node maintains
    pub fn area(&self) -> &AreaHandle {
        &self.area
    }

    /// Registration token while attached
    pub fn key(&self) -> Option<AreaKey> {
        self.registration.as_ref().map(|r| r.key)
    }

    pub fn is_attached(&self) -> bool {
        self.registration.is_some()
    }

    /// Register the area with `registry`
    ///
    /// Attaching to the registry this node is already attached to returns the
    /// existing key. Attaching to a different registry moves the area.
    pub fn attach(&mut self, registry: &SharedAreaRegistry) -> AreaKey {
        if let Some(registration) = &self.registration {
            let same_registry = registration
                .registry
                .upgrade()
                .is_some_and(|current| Rc::ptr_eq(&current, registry));
            if same_registry {
                return registration.key;
            }
            self.detach();
        }

        let (key, retired) = {
            let mut registry = registry.borrow_mut();
            let key = registry.register_area(&self.area);
            (key, Rc::downgrade(registry.retired_keys()))
        };
        self.registration = Some(Registration {
            registry: Rc::downgrade(registry),
            retired,
            key,
        });
        tracing::debug!(?key, "haze child attached");
        key
    }

    /// Unregister the area; returns false when nothing was registered
    ///
    /// If the registry is borrowed at the time, the registration is retired:
    /// it disappears from the registry's queries at once and is removed on
    /// the registry's next mutation.
    pub fn detach(&mut self) -> bool {
        let Some(Registration {
            registry,
            retired,
            key,
        }) = self.registration.take()
        else {
            return false;
        };

        let Some(shared) = registry.upgrade() else {
            // Registry is gone, and the registration with it
            return false;
        };

        let Ok(mut registry) = shared.try_borrow_mut() else {
            return match retired.upgrade() {
                Some(retired) => {
                    retired.borrow_mut().push(key);
                    tracing::debug!(?key, "registry busy, haze child registration retired");
                    true
                }
                None => false,
            };
        };

        let removed = registry.unregister(key).is_some();
        if removed {
            tracing::debug!(?key, "haze child detached");
        } else {
            tracing::warn!(?key, "haze child registration was already gone");
        }
        removed
    }

    /// Update the area after a layout pass
    pub fn on_placed(&mut self, size: Size, position_on_screen: Point) {
        self.area.update(|area| {
            area.set_size(Some(size));
            area.set_position_on_screen(Some(position_on_screen));
        });
    }

    pub fn set_shape(&mut self, shape: impl Into<Shape>) {
        self.area.update(|area| area.set_shape(shape));
    }

    pub fn set_tint(&mut self, tint: Option<Color>) {
        self.area.update(|area| area.set_tint(tint));
    }
}

impl Drop for HazeChild {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::AreaRegistry;

    #[test]
    fn test_attach_and_detach() {
        let registry = AreaRegistry::shared();
        let mut child = HazeChild::new(Shape::Rectangle, None);
        assert!(!child.is_attached());

        let key = child.attach(&registry);
        assert_eq!(child.key(), Some(key));
        assert_eq!(registry.borrow().len(), 1);
        assert!(registry.borrow().contains(child.area()));

        assert!(child.detach());
        assert!(registry.borrow().is_empty());
        assert!(!child.detach());
    }

    #[test]
    fn test_attach_twice_is_noop() {
        let registry = AreaRegistry::shared();
        let mut child = HazeChild::new(Shape::Rectangle, None);

        let first = child.attach(&registry);
        let second = child.attach(&registry);
        assert_eq!(first, second);
        assert_eq!(registry.borrow().len(), 1);
    }

    #[test]
    fn test_attach_moves_between_registries() {
        let a = AreaRegistry::shared();
        let b = AreaRegistry::shared();
        let mut child = HazeChild::new(Shape::Rectangle, None);

        child.attach(&a);
        child.attach(&b);
        assert!(a.borrow().is_empty());
        assert_eq!(b.borrow().len(), 1);
    }

    #[test]
    fn test_drop_unregisters() {
        let registry = AreaRegistry::shared();
        {
            let mut child = HazeChild::new(Shape::Circle, None);
            child.attach(&registry);
            assert_eq!(registry.borrow().len(), 1);
        }
        assert!(registry.borrow().is_empty());
    }

    #[test]
    fn test_outlives_registry() {
        let registry = AreaRegistry::shared();
        let mut child = HazeChild::new(Shape::Rectangle, None);
        child.attach(&registry);
        drop(registry);
        assert!(!child.detach());
    }

    #[test]
    fn test_on_placed_updates_area() {
        let mut child = HazeChild::new(Shape::Rectangle, Some(Color::WHITE));
        assert!(!child.area().is_valid());

        child.on_placed(Size::new(100.0, 40.0), Point::new(0.0, 600.0));
        let area = child.area().get();
        assert!(area.is_valid());
        assert_eq!(area.size(), Some(Size::new(100.0, 40.0)));
        assert_eq!(area.position_on_screen(), Some(Point::new(0.0, 600.0)));
        assert_eq!(area.tint(), Some(Color::WHITE));
    }

    #[test]
    fn test_setters_forward_to_area() {
        let mut child = HazeChild::new(Shape::Rectangle, None);
        child.set_shape(Shape::Circle);
        child.set_tint(Some(Color::BLACK));
        let area = child.area().get();
        assert_eq!(*area.shape(), Shape::Circle);
        assert_eq!(area.tint(), Some(Color::BLACK));
    }

    #[test]
    fn test_drop_while_registry_borrowed() {
        let registry = AreaRegistry::shared();
        let mut child = HazeChild::new(Shape::Rectangle, None);
        child.attach(&registry);

        {
            let borrowed = registry.borrow();
            drop(child);
            // Hidden while the borrow is still held
            assert!(borrowed.is_empty());
        }

        assert_eq!(registry.borrow().len(), 0);
        assert!(registry.borrow().areas().is_empty());

        // Next mutation drops the retired entry for good
        let mut other = HazeChild::new(Shape::Circle, None);
        let key = other.attach(&registry);
        assert_eq!(registry.borrow().entries().len(), 1);
        assert_eq!(registry.borrow().entries()[0].0, key);
    }

    #[test]
    fn test_attach_after_registry_dropped() {
        let a = AreaRegistry::shared();
        let b = AreaRegistry::shared();
        let mut child = HazeChild::new(Shape::Rectangle, None);

        child.attach(&a);
        drop(a);

        let key = child.attach(&b);
        assert_eq!(child.key(), Some(key));
        assert_eq!(b.borrow().len(), 1);
        assert!(b.borrow().get(key).is_some_and(|area| area.ptr_eq(child.area())));
    }
}
