//! Dashed divider down the middle of the court. Drawn, never collides.

use crate::consts::{CENTER_LINE_DASH, CENTER_LINE_WIDTH, COLOR_CENTER_LINE};
use crate::engine::{Bounds, GameContext, GameObject, ObjectBase};
use crate::renderer::RenderSurface;

#[derive(Debug)]
pub struct CenterLine {
    base: ObjectBase,
}

impl CenterLine {
    pub fn new(ctx: &GameContext) -> Self {
        let canvas = ctx.canvas;
        let x = canvas.width / 2.0 - CENTER_LINE_WIDTH / 2.0;
        Self {
            base: ObjectBase::new(Bounds::new(x, 0.0, CENTER_LINE_WIDTH, canvas.height)),
        }
    }
}

impl GameObject for CenterLine {
    fn base(&self) -> &ObjectBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        let b = self.base.bounds;
        let x = b.x() + b.width() / 2.0;
        surface.begin_path();
        surface.set_stroke_style(COLOR_CENTER_LINE);
        surface.set_line_dash(&[CENTER_LINE_DASH]);
        surface.set_line_width(CENTER_LINE_WIDTH);
        surface.move_to(x, 0.0);
        surface.line_to(x, b.height());
        surface.stroke();
        surface.close_path();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Canvas;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::settings::Settings;

    #[test]
    fn test_strokes_vertical_middle_line() {
        let ctx = GameContext::new(Canvas::new(800.0, 600.0), Settings::default());
        let line = CenterLine::new(&ctx);
        let mut surface = RecordingSurface::new();
        line.render(&mut surface);

        assert!(surface.commands.contains(&DrawCommand::MoveTo { x: 400.0, y: 0.0 }));
        assert!(surface.commands.contains(&DrawCommand::LineTo { x: 400.0, y: 600.0 }));
        assert!(surface.commands.contains(&DrawCommand::LineDash(vec![CENTER_LINE_DASH])));
        assert_eq!(surface.fill_rect_count(), 0);
    }
}
