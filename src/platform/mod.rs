//! Platform layer
//!
//! Everything that touches the browser lives here:
//! - Canvas 2D drawing surface
//! - DOM input events fed into the game's input streams
//! - The `requestAnimationFrame` loop

#[cfg(target_arch = "wasm32")]
pub mod web;
