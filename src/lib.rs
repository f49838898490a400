//! Canvas Pong - classic two-paddle Pong on a 2D canvas
//!
//! Core modules:
//! - `engine`: Game object / scene / physics framework and the frame loop
//! - `pong`: Ball, paddles, score and the scene wiring their collisions
//! - `renderer`: Abstract 2D drawing surface plus an in-memory recorder
//! - `platform`: Browser glue (canvas, DOM events, animation frames)
//! - `settings`: Data-driven tuning loaded from JSON

pub mod engine;
pub mod platform;
pub mod pong;
pub mod renderer;
pub mod settings;

pub use engine::{Game, GameContext};
pub use pong::PongScene;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Ball edge length (the ball is a square)
    pub const BALL_SIZE: f32 = 10.0;
    /// Pixels the ball travels per frame along each axis
    pub const BALL_SPEED: f32 = 5.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_LENGTH: f32 = 70.0;
    pub const HUMAN_PADDLE_VELOCITY: f32 = 40.0;
    pub const AI_PADDLE_VELOCITY: f32 = 10.0;

    /// Dashed divider down the middle
    pub const CENTER_LINE_WIDTH: f32 = 10.0;
    pub const CENTER_LINE_DASH: f32 = 10.0;

    /// Score text
    pub const SCORE_FONT: &str = "48px Verdana";
    pub const SCORE_BASELINE: f32 = 50.0;

    /// Colors (CSS syntax)
    pub const COLOR_SCORE: &str = "#FFF";
    pub const COLOR_BACKGROUND: &str = "#000";
    pub const COLOR_CENTER_LINE: &str = "#FFF";
    pub const COLOR_PADDLE: &str = "#FFF";

    /// Canvas size used when no host canvas exists (headless runs)
    pub const DEFAULT_CANVAS_WIDTH: f32 = 800.0;
    pub const DEFAULT_CANVAS_HEIGHT: f32 = 600.0;
}

/// Dimensions of the drawing surface, in canvas pixels.
///
/// Everything in the game lives in this space with the origin at the
/// top-left corner and y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True if `x` lies in `[0, width)`
    #[inline]
    pub fn contains_x(&self, x: f32) -> bool {
        x >= 0.0 && x < self.width
    }

    /// True if `y` lies in `[0, height)`
    #[inline]
    pub fn contains_y(&self, y: f32) -> bool {
        y >= 0.0 && y < self.height
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(consts::DEFAULT_CANVAS_WIDTH, consts::DEFAULT_CANVAS_HEIGHT)
    }
}
