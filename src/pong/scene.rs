//! The Pong scene: builds the court and registers every collision rule

use crate::consts::BALL_SIZE;
use crate::engine::{GameContext, GameObject, Handle, InputController, Scene, SceneSetup, World};

use super::ball::{Ball, CompassDirection};
use super::center_line::CenterLine;
use super::controller::{KeyboardController, PaddleController};
use super::paddle::{Paddle, Side};
use super::score::Score;

/// Handles to everything `PongScene` adds, in update order
#[derive(Debug, Clone, Copy)]
pub struct PongObjects {
    pub center_line: Handle<CenterLine>,
    pub left_paddle: Handle<Paddle>,
    pub right_paddle: Handle<Paddle>,
    pub ball: Handle<Ball>,
    pub score: Handle<Score>,
}

#[derive(Debug, Default)]
pub struct PongScene {
    objects: Option<PongObjects>,
}

impl PongScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Available once the scene has been created
    pub fn objects(&self) -> Option<PongObjects> {
        self.objects
    }
}

impl SceneSetup for PongScene {
    fn create(&mut self, scene: &mut Scene, ctx: &mut GameContext) {
        let settings = ctx.settings.clone();
        let start_y = Paddle::start_y(ctx.canvas);

        let controller: Box<dyn InputController> = if settings.keyboard_controls {
            Box::new(KeyboardController::new(ctx, settings.human_paddle_speed))
        } else {
            Box::new(PaddleController::new(ctx, start_y))
        };

        let center_line = scene.add(CenterLine::new(ctx));
        let left_paddle = scene.add(
            Paddle::new(Side::Left, settings.human_paddle_speed, ctx).with_controller(controller),
        );
        let right_paddle = scene.add(Paddle::new(Side::Right, settings.ai_paddle_speed, ctx));
        let ball = scene.add(Ball::new(ctx));
        let score = scene.add(Score::new(ctx));

        let physics = scene.physics_mut();
        physics.on_collide(Some(ball.id()), Some(left_paddle.id()), move |world: &mut World| {
            bounce(world, ball, CompassDirection::West);
        });
        physics.on_collide(Some(ball.id()), Some(right_paddle.id()), move |world: &mut World| {
            bounce(world, ball, CompassDirection::East);
        });
        physics.on_collide_walls(Some(ball.id()), move |world: &mut World| {
            ball_left_court(world, ball, score);
        });

        if settings.ai_opponent {
            scene.on_frame(move |world: &mut World| follow_ball(world, right_paddle, ball));
            log::info!("Computer opponent enabled");
        }

        self.objects = Some(PongObjects {
            center_line,
            left_paddle,
            right_paddle,
            ball,
            score,
        });
    }
}

/// Turn the ball and push it one step so it starts leaving the obstacle
pub fn bounce(world: &mut World, ball: Handle<Ball>, direction: CompassDirection) {
    if let Some(ball) = world.get_mut(ball) {
        ball.change_direction(direction);
        ball.step();
    }
}

/// Wall response: bounce off the top/bottom, score and re-serve on the sides
pub fn ball_left_court(world: &mut World, ball: Handle<Ball>, score: Handle<Score>) {
    let canvas = world.canvas();
    let Some(pos) = world.get(ball).map(|b| b.pos()) else {
        return;
    };

    if pos.y >= canvas.height - BALL_SIZE {
        bounce(world, ball, CompassDirection::South);
    } else if pos.y <= BALL_SIZE {
        bounce(world, ball, CompassDirection::North);
    }

    let Some(x) = world.get(ball).map(|b| b.pos().x) else {
        return;
    };
    let scorer = if x >= canvas.width {
        Side::Left
    } else if x <= BALL_SIZE {
        Side::Right
    } else {
        return;
    };
    if let Some(score) = world.get_mut(score) {
        score.award(scorer);
    }
    if let Some(ball) = world.get_mut(ball) {
        ball.reset();
    }
}

/// Per-frame computer opponent
pub fn follow_ball(world: &mut World, paddle: Handle<Paddle>, ball: Handle<Ball>) {
    let Some(target) = world.get(ball).map(|b| b.bounds().pos) else {
        return;
    };
    if let Some(paddle) = world.get_mut(paddle) {
        paddle.follow(target);
    }
}
