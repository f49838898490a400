//! Canvas Pong entry point
//!
//! On the web this hooks the game up to the page's `#canvas`. Natively
//! there is no window: the game runs headless for a fixed number of
//! frames and reports the score.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

    log::info!("Canvas Pong starting...");
    match canvas_pong::platform::web::run() {
        Ok(()) => log::info!("Canvas Pong running!"),
        Err(e) => log::error!("Canvas Pong failed to start: {:?}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::engine::{FixedTicks, Game, GameContext, TickSource};
    use canvas_pong::renderer::RecordingSurface;
    use canvas_pong::{PongScene, Settings};

    /// One minute of play at 60 frames per second
    const HEADLESS_FRAMES: u64 = 60 * 60;

    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(std::path::Path::new(&path)),
        None => Settings::default(),
    };
    let canvas = settings.headless_canvas();

    let mut game = Game::new(PongScene::new(), GameContext::new(canvas, settings));
    let mut surface = RecordingSurface::new();
    let mut ticks = FixedTicks::new(HEADLESS_FRAMES);

    // Only the latest frame's draw calls are kept
    while ticks.next_tick() {
        surface.clear();
        game.frame(&mut surface);
    }

    let score = game
        .setup()
        .objects()
        .and_then(|objects| game.scene().world().get(objects.score))
        .map(|score| (score.left(), score.right()))
        .unwrap_or_default();

    println!(
        "Played {} frames on a {}x{} canvas. Score {} - {}",
        game.frames(),
        canvas.width,
        canvas.height,
        score.0,
        score.1
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
