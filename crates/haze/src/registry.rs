//! Blur-area registry
//!
//! The registry is the shared set of areas that consumers blur. It is passed
//! around explicitly as a [`SharedAreaRegistry`] handle; areas and consumers
//! keep only `Weak` references to it.
//!
//! Every registration returns an [`AreaKey`] token. Unregistering by token
//! removes exactly that registration. Unregistering by area identity removes
//! the first registration of that area. Registering the same area twice keeps
//! both entries.
//!
//! A placement node dropped while the registry is borrowed cannot remove its
//! entry directly. It retires the key instead: retired keys are hidden from
//! every query at once and removed on the next mutation.
//!
//! ```rust
//! use haze::{AreaHandle, AreaRegistry, BlurArea};
//!
//! let mut registry = AreaRegistry::new();
//! let area = AreaHandle::new(BlurArea::new());
//!
//! let key = registry.register_area(&area);
//! let snapshot = registry.areas();
//! registry.unregister(key);
//!
//! assert_eq!(snapshot.len(), 1);
//! assert!(registry.is_empty());
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slotmap::{new_key_type, SlotMap};

use crate::area::AreaHandle;

new_key_type! {
    /// Token naming one registration in an [`AreaRegistry`]
    pub struct AreaKey;
}

/// Registry handle shared by consumers and placement nodes
pub type SharedAreaRegistry = Rc<RefCell<AreaRegistry>>;

/// Non-owning registry reference
pub type WeakAreaRegistry = Weak<RefCell<AreaRegistry>>;

/// Keys released while the registry was borrowed
pub(crate) type RetiredKeys = Rc<RefCell<Vec<AreaKey>>>;

/// Ordered set of registered blur areas
#[derive(Debug, Default)]
pub struct AreaRegistry {
    entries: SlotMap<AreaKey, AreaHandle>,
    /// Registration order
    order: Vec<AreaKey>,
    /// Bumped on every structural change
    version: u64,
    /// Pending removals, see [`AreaRegistry::retired_keys`]
    retired: RetiredKeys,
}

impl AreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry wrapped in a shareable handle
    pub fn shared() -> SharedAreaRegistry {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Append `area` to the live set
    ///
    /// Registering an area that is already present adds a second entry.
    pub fn register_area(&mut self, area: &AreaHandle) -> AreaKey {
        self.purge_retired();
        let key = self.entries.insert(area.clone());
        self.order.push(key);
        self.version += 1;
        tracing::debug!(?key, count = self.order.len(), "registered blur area");
        key
    }

    /// Remove the registration named by `key`
    pub fn unregister(&mut self, key: AreaKey) -> Option<AreaHandle> {
        self.purge_retired();
        let area = self.entries.remove(key)?;
        self.order.retain(|k| *k != key);
        self.version += 1;
        tracing::debug!(?key, count = self.order.len(), "unregistered blur area");
        Some(area)
    }

    /// Remove the first registration of `area`
    ///
    /// Returns false when the area is not registered. Further duplicates of
    /// the same area stay registered.
    pub fn unregister_area(&mut self, area: &AreaHandle) -> bool {
        self.purge_retired();
        let key = self
            .order
            .iter()
            .copied()
            .find(|key| self.entries[*key].ptr_eq(area));

        match key {
            Some(key) => self.unregister(key).is_some(),
            None => false,
        }
    }

    /// Snapshot of the registered areas, in registration order
    ///
    /// The returned list is a copy; later registry changes do not affect it.
    pub fn areas(&self) -> Vec<AreaHandle> {
        self.live_keys()
            .map(|key| self.entries[key].clone())
            .collect()
    }

    /// Snapshot of registrations with their keys, in registration order
    pub fn entries(&self) -> Vec<(AreaKey, AreaHandle)> {
        self.live_keys()
            .map(|key| (key, self.entries[key].clone()))
            .collect()
    }

    pub fn get(&self, key: AreaKey) -> Option<&AreaHandle> {
        if self.is_retired(key) {
            return None;
        }
        self.entries.get(key)
    }

    pub fn contains(&self, area: &AreaHandle) -> bool {
        self.live_keys().any(|key| self.entries[key].ptr_eq(area))
    }

    pub fn len(&self) -> usize {
        self.live_keys().count()
    }

    pub fn is_empty(&self) -> bool {
        self.live_keys().next().is_none()
    }

    /// Structural change counter
    ///
    /// Changes to an area's own fields are tracked by the area's version.
    /// A retired key counts as a change as soon as it is retired.
    pub fn version(&self) -> u64 {
        self.version + self.retired.borrow().len() as u64
    }

    /// Remove every registration
    pub fn clear(&mut self) {
        self.purge_retired();
        if self.order.is_empty() {
            return;
        }
        self.entries.clear();
        self.order.clear();
        self.version += 1;
    }

    /// Queue for removals requested while the registry is borrowed
    ///
    /// Pushing a key hides its registration immediately; the entry itself is
    /// dropped by the next mutating call.
    pub(crate) fn retired_keys(&self) -> &RetiredKeys {
        &self.retired
    }

    fn is_retired(&self, key: AreaKey) -> bool {
        self.retired.borrow().contains(&key)
    }

    fn live_keys(&self) -> impl Iterator<Item = AreaKey> + '_ {
        let retired = self.retired.borrow().clone();
        self.order
            .iter()
            .copied()
            .filter(move |key| !retired.contains(key))
    }

    fn purge_retired(&mut self) {
        let retired = std::mem::take(&mut *self.retired.borrow_mut());
        for key in retired {
            // Counted by `version()` while queued
            self.version += 1;
            if self.entries.remove(key).is_some() {
                self.order.retain(|k| *k != key);
                tracing::debug!(?key, count = self.order.len(), "removed retired blur area");
            }
        }
    }
}
