//! Frame loop
//!
//! [`Game`] owns the context and the single active scene. The host
//! decides *when* a frame runs: the browser through
//! `requestAnimationFrame`, tests and headless runs through a
//! [`TickSource`]. Movement is a fixed amount per frame; no elapsed-time
//! delta is applied anywhere.

use super::input::InputEvents;
use super::scene::{Scene, SceneSetup};
use crate::Canvas;
use crate::renderer::RenderSurface;
use crate::settings::Settings;

/// Everything components need at construction time
#[derive(Debug, Default)]
pub struct GameContext {
    pub canvas: Canvas,
    pub input: InputEvents,
    pub settings: Settings,
}

impl GameContext {
    pub fn new(canvas: Canvas, settings: Settings) -> Self {
        Self {
            canvas,
            input: InputEvents::new(),
            settings,
        }
    }
}

/// Decides when the next frame runs
pub trait TickSource {
    /// Wait for the next frame. `false` means no more frames will come.
    fn next_tick(&mut self) -> bool;
}

/// Fake scheduler: yields exactly `n` frames, synchronously
#[derive(Debug, Clone, Copy)]
pub struct FixedTicks {
    remaining: u64,
}

impl FixedTicks {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl TickSource for FixedTicks {
    fn next_tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Top-level driver: one scene, one loop
pub struct Game<S> {
    context: GameContext,
    scene: Scene,
    setup: S,
    frames: u64,
    running: bool,
}

impl<S: SceneSetup> Game<S> {
    /// Build the scene and run its `create` hook once
    pub fn new(mut setup: S, mut context: GameContext) -> Self {
        let mut scene = Scene::new(context.canvas);
        setup.create(&mut scene, &mut context);
        log::info!(
            "Scene created: {} objects, {} collision rules, {} wall rules",
            scene.world().len(),
            scene.physics().collisions().len(),
            scene.physics().wall_collisions().len()
        );
        Self {
            context,
            scene,
            setup,
            frames: 0,
            running: true,
        }
    }

    /// Loop body: update, then render
    pub fn frame(&mut self, surface: &mut dyn RenderSurface) {
        self.scene.update();
        self.scene.render(surface);
        self.frames += 1;
        log::trace!("frame {}", self.frames);
    }

    /// Drive frames until the source runs dry or [`Game::stop`] is called.
    /// Returns the number of frames run by this call.
    pub fn run(&mut self, ticks: &mut impl TickSource, surface: &mut dyn RenderSurface) -> u64 {
        let start = self.frames;
        while self.running && ticks.next_tick() {
            self.frame(surface);
        }
        self.frames - start
    }

    /// Stop the loop. Hosts check [`Game::is_running`] before rescheduling.
    pub fn stop(&mut self) {
        if self.running {
            log::info!("Game stopped after {} frames", self.frames);
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn setup(&self) -> &S {
        &self.setup
    }

    pub fn context(&self) -> &GameContext {
        &self.context
    }

    /// Mutable context, used by hosts to feed input events
    pub fn context_mut(&mut self) -> &mut GameContext {
        &mut self.context
    }
}
