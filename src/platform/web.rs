//! Browser host: canvas surface, DOM listeners and the animation loop

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

use crate::engine::{Game, GameContext, Key};
use crate::pong::PongScene;
use crate::renderer::RenderSurface;
use crate::settings::Settings;
use crate::Canvas;

/// [`RenderSurface`] backed by a `CanvasRenderingContext2d`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl RenderSurface for CanvasSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx.clear_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx.fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }

    fn set_line_width(&mut self, width: f32) {
        self.ctx.set_line_width(width as f64);
    }

    fn set_line_dash(&mut self, segments: &[f32]) {
        let dash = js_sys::Array::new();
        for segment in segments {
            dash.push(&JsValue::from_f64(*segment as f64));
        }
        if let Err(e) = self.ctx.set_line_dash(&dash) {
            log::warn!("set_line_dash failed: {:?}", e);
        }
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ctx.move_to(x as f64, y as f64);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ctx.line_to(x as f64, y as f64);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }
}

/// Game instance plus everything the browser loop needs
struct WebGame {
    game: Game<PongScene>,
    surface: CanvasSurface,
    /// Pending `requestAnimationFrame` id
    frame_id: Option<i32>,
}

thread_local! {
    static ACTIVE: RefCell<Option<Rc<RefCell<WebGame>>>> = const { RefCell::new(None) };
}

/// Find the `#canvas` element, build the game and start the loop
pub fn run() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id("canvas")
        .ok_or("no canvas")?
        .dyn_into()?;
    canvas.set_attribute("tabindex", "1")?;
    canvas.style().set_property("outline", "none")?;
    canvas.focus()?;

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("canvas has no 2d context")?
        .dyn_into()?;

    let settings = canvas
        .get_attribute("data-settings")
        .map(|json| Settings::from_json_or_default(&json))
        .unwrap_or_default();
    let keyboard = settings.keyboard_controls;

    let size = Canvas::new(canvas.width() as f32, canvas.height() as f32);
    log::info!("Canvas {}x{}", size.width, size.height);

    let game = Game::new(PongScene::new(), GameContext::new(size, settings));
    let state = Rc::new(RefCell::new(WebGame {
        game,
        surface: CanvasSurface::new(ctx),
        frame_id: None,
    }));

    listen_pointer(&document, &canvas, state.clone())?;
    if keyboard {
        listen_keys(&document, state.clone())?;
    }

    ACTIVE.with(|active| *active.borrow_mut() = Some(state.clone()));
    request_frame(state)
}

/// Stop the running game; the loop does not reschedule afterwards
#[wasm_bindgen]
pub fn stop_game() {
    let Some(state) = ACTIVE.with(|active| active.borrow_mut().take()) else {
        return;
    };
    let mut s = state.borrow_mut();
    s.game.stop();
    if let (Some(id), Some(window)) = (s.frame_id.take(), web_sys::window()) {
        let _ = window.cancel_animation_frame(id);
    }
}

fn listen_pointer(
    document: &Document,
    canvas: &HtmlCanvasElement,
    state: Rc<RefCell<WebGame>>,
) -> Result<(), JsValue> {
    let canvas = canvas.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        let rect = canvas.get_bounding_client_rect();
        let pos = Vec2::new(
            (event.client_x() as f64 - rect.left()) as f32,
            (event.client_y() as f64 - rect.top()) as f32,
        );
        state.borrow_mut().game.context_mut().input.pointer_move.emit(pos);
    });
    document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn listen_keys(document: &Document, state: Rc<RefCell<WebGame>>) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
        let key = Key::from_dom(&event.key());
        if matches!(key, Key::ArrowUp | Key::ArrowDown) {
            event.prevent_default();
        }
        state.borrow_mut().game.context_mut().input.key_down.emit(key);
    });
    document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn request_frame(state: Rc<RefCell<WebGame>>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let next = state.clone();
    let closure = Closure::once(move |_time: f64| {
        game_loop(next);
    });
    let id = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
    closure.forget();
    state.borrow_mut().frame_id = Some(id);
    Ok(())
}

fn game_loop(state: Rc<RefCell<WebGame>>) {
    {
        let mut s = state.borrow_mut();
        if !s.game.is_running() {
            return;
        }
        let WebGame {
            game,
            surface,
            frame_id,
        } = &mut *s;
        game.frame(surface);

        // Cancel whatever is still pending before asking for the next frame
        if let (Some(id), Some(window)) = (frame_id.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
    }

    if let Err(e) = request_frame(state) {
        log::error!("Could not schedule next frame: {:?}", e);
    }
}
