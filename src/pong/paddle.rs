//! Paddles

use glam::Vec2;

use crate::Canvas;
use crate::consts::{COLOR_PADDLE, PADDLE_LENGTH, PADDLE_WIDTH};
use crate::engine::{Bounds, GameContext, GameObject, InputController, ObjectBase};
use crate::renderer::RenderSurface;

/// Which end of the court a paddle (or a point) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A vertical paddle that never leaves the canvas
#[derive(Debug)]
pub struct Paddle {
    base: ObjectBase,
    side: Side,
    /// Pixels per `move_up`/`move_down`
    speed: f32,
    canvas: Canvas,
}

impl Paddle {
    pub fn new(side: Side, speed: f32, ctx: &GameContext) -> Self {
        let canvas = ctx.canvas;
        let x = match side {
            Side::Left => PADDLE_WIDTH,
            Side::Right => canvas.width - PADDLE_WIDTH * 2.0,
        };
        let bounds = Bounds::new(x, Self::start_y(canvas), PADDLE_WIDTH, PADDLE_LENGTH);
        Self {
            base: ObjectBase::new(bounds),
            side,
            speed,
            canvas,
        }
    }

    /// Top edge of a vertically centred paddle
    pub fn start_y(canvas: Canvas) -> f32 {
        canvas.height / 2.0 - PADDLE_LENGTH / 2.0
    }

    pub fn with_controller(mut self, controller: Box<dyn InputController>) -> Self {
        self.base.set_controller(controller);
        self
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn pos(&self) -> Vec2 {
        self.base.bounds.pos
    }

    pub fn move_up(&mut self) {
        self.base.bounds.nudge_y(-self.speed, self.canvas.height);
    }

    pub fn move_down(&mut self) {
        self.base.bounds.nudge_y(self.speed, self.canvas.height);
    }

    /// Jump to `y` if the paddle would still fit on the canvas
    pub fn move_to(&mut self, y: f32) {
        if self.base.bounds.fits_vertically_at(y, self.canvas.height) {
            self.base.bounds.pos.y = y;
        }
    }

    /// Computer opponent: chase the ball while it is in our half
    pub fn follow(&mut self, ball: Vec2) {
        if ball.x <= self.canvas.width / 2.0 {
            return;
        }
        let b = self.base.bounds;
        if b.y() >= ball.y {
            self.move_up();
        } else if b.y() + b.height() < ball.y {
            self.move_down();
        }
    }
}

impl GameObject for Paddle {
    fn base(&self) -> &ObjectBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        let b = self.base.bounds;
        surface.set_fill_style(COLOR_PADDLE);
        surface.fill_rect(b.x(), b.y(), b.width(), b.height());
    }
}
