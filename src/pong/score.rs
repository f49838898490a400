//! Scoreboard

use crate::Canvas;
use crate::consts::{COLOR_SCORE, SCORE_BASELINE, SCORE_FONT};
use crate::engine::{Bounds, GameContext, GameObject, ObjectBase};
use crate::renderer::RenderSurface;

use super::paddle::Side;

/// Points for each side. Only ever goes up.
#[derive(Debug)]
pub struct Score {
    base: ObjectBase,
    left: u32,
    right: u32,
    canvas: Canvas,
}

impl Score {
    pub fn new(ctx: &GameContext) -> Self {
        let canvas = ctx.canvas;
        Self {
            // Text band across the top of the court
            base: ObjectBase::new(Bounds::new(0.0, 0.0, canvas.width, SCORE_BASELINE)),
            left: 0,
            right: 0,
            canvas,
        }
    }

    pub fn left(&self) -> u32 {
        self.left
    }

    pub fn right(&self) -> u32 {
        self.right
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.increment_left(),
            Side::Right => self.increment_right(),
        }
        log::info!("{side:?} scores: {} - {}", self.left, self.right);
    }
}

impl GameObject for Score {
    fn base(&self) -> &ObjectBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        let left_x = self.canvas.width / 3.0;
        let right_x = self.canvas.width - self.canvas.width / 3.0;
        surface.set_font(SCORE_FONT);
        surface.set_fill_style(COLOR_SCORE);
        surface.fill_text(&self.left.to_string(), left_x, SCORE_BASELINE);
        surface.fill_text(&self.right.to_string(), right_x, SCORE_BASELINE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::settings::Settings;

    fn score() -> Score {
        Score::new(&GameContext::new(Canvas::new(900.0, 600.0), Settings::default()))
    }

    #[test]
    fn test_counters_are_independent() {
        let mut score = score();
        for _ in 0..4 {
            score.increment_left();
        }
        score.award(Side::Right);
        assert_eq!((score.left(), score.right()), (4, 1));
    }

    #[test]
    fn test_render_draws_both_counters() {
        let mut score = score();
        for _ in 0..12 {
            score.increment_left();
        }
        let mut surface = RecordingSurface::new();
        score.render(&mut surface);

        assert_eq!(surface.texts(), vec!["12", "0"]);
        assert!(surface.commands.contains(&DrawCommand::Font(SCORE_FONT.into())));
        assert!(surface.commands.contains(&DrawCommand::FillText {
            text: "12".into(),
            x: 300.0,
            y: SCORE_BASELINE,
        }));
        assert!(surface.commands.contains(&DrawCommand::FillText {
            text: "0".into(),
            x: 600.0,
            y: SCORE_BASELINE,
        }));
    }
}
