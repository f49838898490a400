//! Game settings
//!
//! Read once at startup from JSON supplied by the host (the canvas
//! `data-settings` attribute on the web, a file path natively). Missing
//! fields take their defaults; nothing is ever written back.

use serde::{Deserialize, Serialize};

use crate::Canvas;
use crate::consts::*;

/// Tunable game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Headless canvas ===
    /// Canvas width when there is no host canvas
    pub canvas_width: f32,
    /// Canvas height when there is no host canvas
    pub canvas_height: f32,

    // === Motion (pixels per frame) ===
    pub ball_speed: f32,
    pub human_paddle_speed: f32,
    pub ai_paddle_speed: f32,

    // === Opt-in behaviors ===
    /// Right paddle follows the ball
    pub ai_opponent: bool,
    /// Arrow keys move the left paddle
    pub keyboard_controls: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,

            ball_speed: BALL_SPEED,
            human_paddle_speed: HUMAN_PADDLE_VELOCITY,
            ai_paddle_speed: AI_PADDLE_VELOCITY,

            // Both off: the pointer drives the left paddle, the right one is idle
            ai_opponent: false,
            keyboard_controls: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse settings, logging and falling back to defaults on bad input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings");
                settings
            }
            Err(err) => {
                log::warn!("Ignoring invalid settings ({err}), using defaults");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Canvas used when no host canvas exists
    pub fn headless_canvas(&self) -> Canvas {
        Canvas::new(self.canvas_width, self.canvas_height)
    }

    /// Load settings from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json_or_default(&json),
            Err(err) => {
                log::warn!("Could not read {}: {err}, using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "ai_opponent": true, "ball_speed": 7.5 }"#;
        let settings = Settings::from_json(json).unwrap();
        assert!(settings.ai_opponent);
        assert_eq!(settings.ball_speed, 7.5);
        assert!(!settings.keyboard_controls);
        assert_eq!(settings.human_paddle_speed, HUMAN_PADDLE_VELOCITY);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert!(Settings::from_json("{ nope").is_err());
        assert_eq!(Settings::from_json_or_default("{ nope"), Settings::default());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            keyboard_controls: true,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_headless_canvas() {
        let canvas = Settings::default().headless_canvas();
        assert_eq!(canvas, Canvas::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT));
    }
}
