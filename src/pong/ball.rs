//! The ball

use glam::Vec2;

use crate::consts::{BALL_SIZE, COLOR_PADDLE};
use crate::engine::{Bounds, GameContext, GameObject, ObjectBase};
use crate::renderer::RenderSurface;

/// Input to [`Ball::change_direction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassDirection {
    North,
    South,
    East,
    West,
}

/// Square ball moving a fixed distance every frame
#[derive(Debug)]
pub struct Ball {
    base: ObjectBase,
    /// Direction signs, each component is -1 or 1
    pub vel: Vec2,
    speed: f32,
    home: Vec2,
}

impl Ball {
    /// Direction after a serve
    pub const SERVE_VELOCITY: Vec2 = Vec2::new(-1.0, 1.0);

    pub fn new(ctx: &GameContext) -> Self {
        let home = ctx.canvas.center();
        Self {
            base: ObjectBase::new(Bounds::new(home.x, home.y, BALL_SIZE, BALL_SIZE)),
            vel: Self::SERVE_VELOCITY,
            speed: ctx.settings.ball_speed,
            home,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.base.bounds.pos
    }

    pub fn set_pos(&mut self, pos: Vec2) {
        self.base.bounds.pos = pos;
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Where `reset` puts the ball
    pub fn home(&self) -> Vec2 {
        self.home
    }

    /// Advance one frame along the current direction
    pub fn step(&mut self) {
        self.base.bounds.pos += self.vel * self.speed;
    }

    /// Apply a compass bounce.
    ///
    /// NORTH and SOUTH both flip the vertical sign and WEST flips the
    /// horizontal one. EAST is not a mirror of WEST: it rotates the
    /// direction, `(x, y) -> (y, -x)`.
    pub fn change_direction(&mut self, direction: CompassDirection) {
        match direction {
            CompassDirection::North | CompassDirection::South => {
                self.vel.y = -self.vel.y;
            }
            CompassDirection::West => {
                self.vel.x = -self.vel.x;
            }
            CompassDirection::East => {
                let old_x = self.vel.x;
                self.vel.x = self.vel.y;
                self.vel.y = -old_x;
            }
        }
    }

    /// Back to the centre, serving toward the left paddle
    pub fn reset(&mut self) {
        self.vel = Self::SERVE_VELOCITY;
        self.base.bounds.pos = self.home;
    }
}

impl GameObject for Ball {
    fn base(&self) -> &ObjectBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }

    fn update(&mut self) {
        self.base.update();
        self.step();
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        let b = self.base.bounds;
        surface.set_fill_style(COLOR_PADDLE);
        surface.fill_rect(b.x(), b.y(), b.width(), b.height());
    }
}
