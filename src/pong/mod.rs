//! Pong entities and the scene that wires them together

pub mod ball;
pub mod center_line;
pub mod controller;
pub mod paddle;
pub mod scene;
pub mod score;

pub use ball::{Ball, CompassDirection};
pub use center_line::CenterLine;
pub use controller::{KeyboardController, PaddleController};
pub use paddle::{Paddle, Side};
pub use scene::{PongObjects, PongScene};
pub use score::Score;
