//! Blur areas
//!
//! A [`BlurArea`] describes one region of the screen whose content should be
//! blurred by consumers elsewhere in the tree. Areas are created and updated by
//! their placement node ([`HazeChild`](crate::HazeChild)) and referenced, not
//! owned, by the [`AreaRegistry`](crate::AreaRegistry).
//!
//! Instead of observable fields, every setter that actually changes a value
//! bumps the area's [`version`](BlurArea::version). Consumers compare versions
//! to decide whether a redraw is needed.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use haze_core::{Color, Point, Shape, Size};

/// One region whose on-screen content is blurred
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlurArea {
    size: Option<Size>,
    position_on_screen: Option<Point>,
    shape: Shape,
    tint: Option<Color>,
    version: u64,
}

impl BlurArea {
    /// Create an unmeasured, unplaced rectangular area with no tint override
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_position(mut self, position_on_screen: Point) -> Self {
        self.position_on_screen = Some(position_on_screen);
        self
    }

    pub fn with_shape(mut self, shape: impl Into<Shape>) -> Self {
        self.shape = shape.into();
        self
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = Some(tint);
        self
    }

    /// Measured size, `None` until the first layout pass
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Absolute position on screen, `None` until the first placement
    pub fn position_on_screen(&self) -> Option<Point> {
        self.position_on_screen
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Tint override for this area, `None` means use the consumer's tint
    pub fn tint(&self) -> Option<Color> {
        self.tint
    }

    /// Change counter, bumped by every setter that changes a value
    pub fn version(&self) -> u64 {
        self.version
    }

    /// True when the area is measured, placed, and non-empty
    pub fn is_valid(&self) -> bool {
        matches!(
            (self.size, self.position_on_screen),
            (Some(size), Some(_)) if !size.is_empty()
        )
    }

    pub fn set_size(&mut self, size: Option<Size>) {
        if self.size != size {
            self.size = size;
            self.version += 1;
        }
    }

    pub fn set_position_on_screen(&mut self, position: Option<Point>) {
        if self.position_on_screen != position {
            self.position_on_screen = position;
            self.version += 1;
        }
    }

    pub fn set_shape(&mut self, shape: impl Into<Shape>) {
        let shape = shape.into();
        if self.shape != shape {
            self.shape = shape;
            self.version += 1;
        }
    }

    pub fn set_tint(&mut self, tint: Option<Color>) {
        if self.tint != tint {
            self.tint = tint;
            self.version += 1;
        }
    }
}

/// Shared handle to a [`BlurArea`]
///
/// Cloning the handle shares the area. Registry identity is handle identity:
/// two handles are the same area iff [`AreaHandle::ptr_eq`] holds.
#[derive(Clone, Debug, Default)]
pub struct AreaHandle(Rc<RefCell<BlurArea>>);

impl AreaHandle {
    pub fn new(area: BlurArea) -> Self {
        Self(Rc::new(RefCell::new(area)))
    }

    /// Borrow the area for reading
    pub fn get(&self) -> Ref<'_, BlurArea> {
        self.0.borrow()
    }

    /// Mutate the area in place
    pub fn update<R>(&self, f: impl FnOnce(&mut BlurArea) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }

    /// Whether both handles point at the same area
    pub fn ptr_eq(&self, other: &AreaHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn is_valid(&self) -> bool {
        self.0.borrow().is_valid()
    }

    pub fn version(&self) -> u64 {
        self.0.borrow().version()
    }
}

impl From<BlurArea> for AreaHandle {
    fn from(area: BlurArea) -> Self {
        Self::new(area)
    }
}
