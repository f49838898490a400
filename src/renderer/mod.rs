//! 2D drawing abstraction
//!
//! The game only ever issues canvas-style primitives. On the web they go
//! straight to a `CanvasRenderingContext2d`; headless runs and tests use
//! [`RecordingSurface`].

pub mod recording;

pub use recording::{DrawCommand, RecordingSurface};

/// Immediate-mode drawing target modelled on the HTML canvas 2D context
pub trait RenderSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_font(&mut self, font: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
    fn set_line_width(&mut self, width: f32);
    /// Alternating dash/gap lengths; an empty slice draws solid lines
    fn set_line_dash(&mut self, segments: &[f32]);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn stroke(&mut self);
    fn close_path(&mut self);
}
