//! Mini game framework
//!
//! A scene owns ordered [`GameObject`]s and one [`Physics`] registry; the
//! [`Game`] drives a single loop over that scene. Nothing here knows
//! about Pong.

pub mod game;
pub mod input;
pub mod object;
pub mod physics;
pub mod scene;

pub use game::{FixedTicks, Game, GameContext, TickSource};
pub use input::{InputController, InputEvents, Key, PointerTracker, Signal};
pub use object::{Bounds, GameObject, Handle, ObjectBase, ObjectId};
pub use physics::{Bodies, Callback, CollisionEntry, Physics, WallCollisionEntry};
pub use scene::{Scene, SceneSetup, World};
