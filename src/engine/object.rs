//! Game objects: the per-frame update/render lifecycle
//!
//! Every entity in a scene implements [`GameObject`]. Shared state
//! (bounds and an optional input controller) lives in [`ObjectBase`];
//! entities embed one and extend the default `update`.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use glam::Vec2;

use super::input::InputController;
use crate::Canvas;
use crate::renderer::RenderSurface;

/// Axis-aligned rectangle: top-left corner plus size, in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Closed point-in-box test (edges count as inside)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x <= self.pos.x + self.size.x
            && point.y >= self.pos.y
            && point.y <= self.pos.y + self.size.y
    }

    /// True if the whole rectangle lies on the canvas
    pub fn is_inside(&self, canvas: &Canvas) -> bool {
        self.pos.x >= 0.0
            && self.pos.y >= 0.0
            && self.pos.x + self.size.x <= canvas.width
            && self.pos.y + self.size.y <= canvas.height
    }

    /// True if a top edge at `y` keeps the rectangle within `[0, canvas_height)`
    #[inline]
    pub fn fits_vertically_at(&self, y: f32, canvas_height: f32) -> bool {
        y >= 0.0 && y + self.size.y < canvas_height
    }

    /// Shift vertically by `dy` unless that would push it off the canvas.
    /// Returns whether the move happened.
    pub fn nudge_y(&mut self, dy: f32, canvas_height: f32) -> bool {
        let y = self.pos.y + dy;
        if self.fits_vertically_at(y, canvas_height) {
            self.pos.y = y;
            true
        } else {
            false
        }
    }
}

/// Stable index of an object within its scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) usize);

impl ObjectId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Typed reference to an object added to a scene
pub struct Handle<T> {
    id: ObjectId,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    pub(crate) fn new(id: ObjectId) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({})", self.id)
    }
}

/// State every game object carries
#[derive(Default)]
pub struct ObjectBase {
    pub bounds: Bounds,
    controller: Option<Box<dyn InputController>>,
}

impl ObjectBase {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            controller: None,
        }
    }

    pub fn with_controller(bounds: Bounds, controller: Box<dyn InputController>) -> Self {
        Self {
            bounds,
            controller: Some(controller),
        }
    }

    pub fn set_controller(&mut self, controller: Box<dyn InputController>) {
        self.controller = Some(controller);
    }

    pub fn controller(&self) -> Option<&dyn InputController> {
        self.controller.as_deref()
    }

    pub fn has_controller(&self) -> bool {
        self.controller.is_some()
    }

    /// Let the attached controller, if any, write its state into our bounds
    pub fn update(&mut self) {
        if let Some(controller) = self.controller.as_mut() {
            controller.update(&mut self.bounds);
        }
    }
}

impl fmt::Debug for ObjectBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectBase")
            .field("bounds", &self.bounds)
            .field("controller", &self.controller.is_some())
            .finish()
    }
}

/// Downcasting support for scene children
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// An entity driven by the scene once per frame
pub trait GameObject: AsAny {
    fn base(&self) -> &ObjectBase;
    fn base_mut(&mut self) -> &mut ObjectBase;

    /// Advance one frame. The default only applies the input controller;
    /// entities with their own motion call this first and then move.
    fn update(&mut self) {
        self.base_mut().update();
    }

    /// Draw current state. Invisible by default.
    fn render(&self, _surface: &mut dyn RenderSurface) {}

    fn bounds(&self) -> Bounds {
        self.base().bounds
    }
}

impl dyn GameObject {
    pub fn downcast_ref<T: GameObject>(&self) -> Option<&T> {
        <dyn GameObject as AsAny>::as_any(self).downcast_ref::<T>()
    }

    pub fn downcast_mut<T: GameObject>(&mut self) -> Option<&mut T> {
        <dyn GameObject as AsAny>::as_any_mut(self).downcast_mut::<T>()
    }
}
