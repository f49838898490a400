//! Declarative collision registry
//!
//! Rules are registered once while a scene is being created and then
//! re-evaluated from scratch every frame. A rule whose predicate holds
//! fires its callback on every frame it holds; the callback is expected
//! to change the state that made it true.
//!
//! Detection is deliberately coarse: an object pair collides when both
//! lie fully on the canvas and the *origin* of `a` is inside `b`'s
//! box. Fast or large objects can slip through.

use std::fmt;

use super::object::{Bounds, ObjectId};
use crate::Canvas;

/// Resolves object ids to their current bounds
pub trait Bodies {
    fn bounds_of(&self, id: ObjectId) -> Option<Bounds>;
}

/// Collision response. It runs against the scope handed to
/// [`Physics::update`], which is how it reaches the objects it mutates.
pub type Callback<S> = Box<dyn FnMut(&mut S)>;

/// Object-vs-object rule
pub struct CollisionEntry<S> {
    pub a: ObjectId,
    pub b: ObjectId,
    callback: Callback<S>,
}

/// Object-vs-canvas-edge rule
pub struct WallCollisionEntry<S> {
    pub object: ObjectId,
    callback: Callback<S>,
}

impl<S> fmt::Debug for CollisionEntry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollisionEntry")
            .field("a", &self.a)
            .field("b", &self.b)
            .finish_non_exhaustive()
    }
}

impl<S> fmt::Debug for WallCollisionEntry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WallCollisionEntry")
            .field("object", &self.object)
            .finish_non_exhaustive()
    }
}

/// Point-in-box pair test, gated on both objects being fully on the canvas
pub fn origin_inside(a: &Bounds, b: &Bounds, canvas: &Canvas) -> bool {
    a.is_inside(canvas) && b.is_inside(canvas) && b.contains_point(a.pos)
}

/// True once an object's origin has left `[0, width) x [0, height)`
pub fn outside_walls(bounds: &Bounds, canvas: &Canvas) -> bool {
    !canvas.contains_y(bounds.y()) || !canvas.contains_x(bounds.x())
}

/// Collision registries for one scene
pub struct Physics<S> {
    canvas: Canvas,
    collisions: Vec<CollisionEntry<S>>,
    wall_collisions: Vec<WallCollisionEntry<S>>,
}

impl<S: Bodies> Physics<S> {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            collisions: Vec::new(),
            wall_collisions: Vec::new(),
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Fire `callback` every frame `a`'s origin sits inside `b`.
    /// Ignored if either object is missing.
    pub fn on_collide(
        &mut self,
        a: Option<ObjectId>,
        b: Option<ObjectId>,
        callback: impl FnMut(&mut S) + 'static,
    ) {
        let (Some(a), Some(b)) = (a, b) else {
            log::debug!("on_collide ignored: missing object ({a:?}, {b:?})");
            return;
        };
        self.collisions.push(CollisionEntry {
            a,
            b,
            callback: Box::new(callback),
        });
    }

    /// Fire `callback` every frame `object`'s origin is off the canvas.
    /// Ignored if the object is missing.
    pub fn on_collide_walls(
        &mut self,
        object: Option<ObjectId>,
        callback: impl FnMut(&mut S) + 'static,
    ) {
        let Some(object) = object else {
            log::debug!("on_collide_walls ignored: missing object");
            return;
        };
        self.wall_collisions.push(WallCollisionEntry {
            object,
            callback: Box::new(callback),
        });
    }

    pub fn collisions(&self) -> &[CollisionEntry<S>] {
        &self.collisions
    }

    pub fn wall_collisions(&self) -> &[WallCollisionEntry<S>] {
        &self.wall_collisions
    }

    /// Evaluate every rule once, pairs first, each list in registration order
    pub fn update(&mut self, scope: &mut S) {
        let canvas = self.canvas;

        for entry in &mut self.collisions {
            // Re-read bounds per entry: earlier callbacks may have moved things
            let (Some(a), Some(b)) = (scope.bounds_of(entry.a), scope.bounds_of(entry.b)) else {
                continue;
            };
            if origin_inside(&a, &b, &canvas) {
                log::trace!("collision {} -> {}", entry.a, entry.b);
                (entry.callback)(scope);
            }
        }

        for entry in &mut self.wall_collisions {
            let Some(bounds) = scope.bounds_of(entry.object) else {
                continue;
            };
            if outside_walls(&bounds, &canvas) {
                log::trace!("wall collision {}", entry.object);
                (entry.callback)(scope);
            }
        }
    }
}

impl<S> fmt::Debug for Physics<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Physics")
            .field("canvas", &self.canvas)
            .field("collisions", &self.collisions)
            .field("wall_collisions", &self.wall_collisions)
            .finish()
    }
}
