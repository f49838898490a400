use canvas_pong::engine::{FixedTicks, Game, GameContext};
use canvas_pong::pong::{Ball, PongObjects};
use canvas_pong::renderer::{DrawCommand, RecordingSurface};
use canvas_pong::{Canvas, PongScene, Settings};
use glam::Vec2;

fn new_game() -> Game<PongScene> {
    Game::new(
        PongScene::new(),
        GameContext::new(Canvas::new(800.0, 600.0), Settings::default()),
    )
}

fn objects(game: &Game<PongScene>) -> PongObjects {
    game.setup().objects().unwrap()
}

fn score(game: &Game<PongScene>) -> (u32, u32) {
    let score = game.scene().world().get(objects(game).score).unwrap();
    (score.left(), score.right())
}

fn ball(game: &Game<PongScene>) -> &Ball {
    game.scene().world().get(objects(game).ball).unwrap()
}

#[test]
fn test_first_frame_draws_whole_court() {
    let mut game = new_game();
    let mut surface = RecordingSurface::new();
    game.frame(&mut surface);

    assert_eq!(
        surface.commands[0],
        DrawCommand::ClearRect {
            x: 0.0,
            y: 0.0,
            width: 800.0,
            height: 600.0
        }
    );
    // Background, two paddles, ball
    assert_eq!(surface.fill_rect_count(), 4);
    assert_eq!(surface.texts(), vec!["0", "0"]);
    assert!(surface.commands.contains(&DrawCommand::Stroke));
}

#[test]
fn test_unreturned_serve_scores_for_right() {
    let mut game = new_game();
    let mut surface = RecordingSurface::new();

    // Serve runs down-left, bounces off the bottom on frame 60 and
    // leaves past the idle left paddle on frame 80
    assert_eq!(game.run(&mut FixedTicks::new(79), &mut surface), 79);
    assert_eq!(score(&game), (0, 0));

    game.run(&mut FixedTicks::new(1), &mut surface);
    assert_eq!(score(&game), (0, 1));
    assert_eq!(ball(&game).pos(), Vec2::new(400.0, 300.0));
    assert_eq!(ball(&game).vel, Ball::SERVE_VELOCITY);

    surface.clear();
    game.frame(&mut surface);
    assert_eq!(surface.texts(), vec!["0", "1"]);
}

#[test]
fn test_pointer_placed_paddle_returns_ball() {
    let mut game = new_game();
    let mut surface = RecordingSurface::new();

    // Several moves between frames: only the last one counts
    for y in [10.0, 300.0, 480.0] {
        game.context_mut().input.pointer_move.emit(Vec2::new(15.0, y));
    }
    game.run(&mut FixedTicks::new(74), &mut surface);
    let left = game.scene().world().get(objects(&game).left_paddle).unwrap();
    assert_eq!(left.pos().y, 480.0);
    assert_eq!(ball(&game).vel, Vec2::new(-1.0, -1.0));

    // Frame 75 lands on the paddle face
    game.frame(&mut surface);
    assert_eq!(ball(&game).vel, Vec2::new(1.0, -1.0));
    assert_eq!(ball(&game).pos(), Vec2::new(25.0, 515.0));
    assert_eq!(score(&game), (0, 0));

    // Nobody defends the right side
    game.run(&mut FixedTicks::new(225), &mut surface);
    assert_eq!(score(&game), (1, 0));
}

#[test]
fn test_stopped_game_ignores_ticks() {
    let mut game = new_game();
    let mut surface = RecordingSurface::new();
    game.run(&mut FixedTicks::new(10), &mut surface);
    game.stop();

    let before = ball(&game).pos();
    assert_eq!(game.run(&mut FixedTicks::new(10), &mut surface), 0);
    assert_eq!(game.frames(), 10);
    assert_eq!(ball(&game).pos(), before);
}
