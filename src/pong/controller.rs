//! Paddle input controllers
//!
//! Both subscribe to the context's input streams when built and only
//! touch the paddle from `update`, i.e. once per frame.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;

use crate::Canvas;
use crate::consts::PADDLE_LENGTH;
use crate::engine::{Bounds, GameContext, InputController, Key, PointerTracker};

/// Lowest top edge that keeps a paddle inside `[0, height - length)`
fn max_paddle_y(canvas: Canvas) -> f32 {
    (canvas.height - PADDLE_LENGTH - 1.0).max(0.0)
}

/// Moves the paddle to the pointer's height.
///
/// Clamping happens when the pointer event arrives; `update` copies the
/// stored y as-is.
#[derive(Debug, Clone)]
pub struct PaddleController {
    pointer: Rc<Cell<Vec2>>,
}

impl PaddleController {
    /// `start_y` is what `update` reports before the first pointer event
    pub fn new(ctx: &mut GameContext, start_y: f32) -> Self {
        let max_y = max_paddle_y(ctx.canvas);
        let pointer = Rc::new(Cell::new(Vec2::new(0.0, start_y)));
        let stored = pointer.clone();
        ctx.input.pointer_move.subscribe(move |pos: &Vec2| {
            stored.set(Vec2::new(pos.x, pos.y.clamp(0.0, max_y)));
        });
        Self { pointer }
    }
}

impl InputController for PaddleController {
    fn pointer(&self) -> Vec2 {
        self.pointer.get()
    }

    fn update(&mut self, target: &mut Bounds) {
        target.pos.y = self.pointer.get().y;
    }
}

/// Arrow keys step the paddle by its speed, one step per key press
#[derive(Debug, Clone)]
pub struct KeyboardController {
    tracker: PointerTracker,
    /// Net presses since the last frame, positive is down
    pending: Rc<Cell<i32>>,
    speed: f32,
    canvas: Canvas,
}

impl KeyboardController {
    pub fn new(ctx: &mut GameContext, speed: f32) -> Self {
        let pending = Rc::new(Cell::new(0));
        let queued = pending.clone();
        ctx.input.key_down.subscribe(move |key: &Key| match key {
            Key::ArrowUp => queued.set(queued.get() - 1),
            Key::ArrowDown => queued.set(queued.get() + 1),
            Key::Other(_) => {}
        });
        Self {
            tracker: PointerTracker::new(&mut ctx.input),
            pending,
            speed,
            canvas: ctx.canvas,
        }
    }
}

impl InputController for KeyboardController {
    fn pointer(&self) -> Vec2 {
        self.tracker.pointer()
    }

    fn update(&mut self, target: &mut Bounds) {
        let presses = self.pending.replace(0);
        let dy = if presses < 0 { -self.speed } else { self.speed };
        for _ in 0..presses.unsigned_abs() {
            target.nudge_y(dy, self.canvas.height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn ctx() -> GameContext {
        GameContext::new(Canvas::new(800.0, 600.0), Settings::default())
    }

    fn paddle_bounds() -> Bounds {
        Bounds::new(10.0, 265.0, 10.0, PADDLE_LENGTH)
    }

    #[test]
    fn test_holds_start_until_first_event() {
        let mut ctx = ctx();
        let mut controller = PaddleController::new(&mut ctx, 265.0);
        let mut target = paddle_bounds();
        target.pos.y = 0.0;
        controller.update(&mut target);
        assert_eq!(target.y(), 265.0);
    }

    #[test]
    fn test_last_pointer_wins() {
        let mut ctx = ctx();
        let mut controller = PaddleController::new(&mut ctx, 265.0);
        ctx.input.pointer_move.emit(Vec2::new(5.0, 100.0));
        ctx.input.pointer_move.emit(Vec2::new(5.0, 200.0));

        let mut target = paddle_bounds();
        controller.update(&mut target);
        assert_eq!(target.y(), 200.0);
        assert_eq!(controller.pointer(), Vec2::new(5.0, 200.0));
    }

    #[test]
    fn test_clamps_when_event_arrives() {
        let mut ctx = ctx();
        let mut controller = PaddleController::new(&mut ctx, 265.0);
        let mut target = paddle_bounds();

        ctx.input.pointer_move.emit(Vec2::new(0.0, -40.0));
        controller.update(&mut target);
        assert_eq!(target.y(), 0.0);

        ctx.input.pointer_move.emit(Vec2::new(0.0, 10_000.0));
        controller.update(&mut target);
        assert!(target.y() < 600.0 - PADDLE_LENGTH);
        assert!(target.fits_vertically_at(target.y(), 600.0));
    }

    #[test]
    fn test_copies_without_reclamping() {
        let mut ctx = ctx();
        let mut controller = PaddleController::new(&mut ctx, 265.0);
        let mut target = Bounds::new(10.0, 265.0, 10.0, 590.0);
        ctx.input.pointer_move.emit(Vec2::new(0.0, 300.0));
        controller.update(&mut target);
        // Too tall to fit at 300, copied anyway
        assert_eq!(target.y(), 300.0);
    }

    #[test]
    fn test_keyboard_applies_queued_presses() {
        let mut ctx = ctx();
        let mut controller = KeyboardController::new(&mut ctx, 40.0);
        let mut target = paddle_bounds();

        ctx.input.key_down.emit(Key::ArrowUp);
        ctx.input.key_down.emit(Key::ArrowUp);
        ctx.input.key_down.emit(Key::Other("x".into()));
        controller.update(&mut target);
        assert_eq!(target.y(), 185.0);

        // Queue drained
        controller.update(&mut target);
        assert_eq!(target.y(), 185.0);

        ctx.input.key_down.emit(Key::ArrowDown);
        controller.update(&mut target);
        assert_eq!(target.y(), 225.0);
    }

    #[test]
    fn test_keyboard_respects_edges() {
        let mut ctx = ctx();
        let mut controller = KeyboardController::new(&mut ctx, 40.0);
        let mut target = paddle_bounds();
        for _ in 0..20 {
            ctx.input.key_down.emit(Key::ArrowUp);
        }
        controller.update(&mut target);
        assert_eq!(target.y(), 25.0);
    }
}
