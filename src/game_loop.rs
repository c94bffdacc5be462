//! Frame loop
//!
//! Turns animation-frame timestamps and key events into simulation ticks.
//! Variable mode runs one tick per frame with the measured delta; fixed mode
//! accumulates time and runs whole steps, capped per frame.

use crate::clamp_range;
use crate::consts::*;
use crate::highscores::HighScore;
use crate::persistence::HighScoreStore;
use crate::platform::{FrameClock, KeyCommand, KeyboardState};
use crate::renderer::Scene;
use crate::sim::{GameEvent, GameState, tick};
use crate::tuning::Tuning;

/// How frame time is fed to the simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepMode {
    /// One tick per frame, `dt` clamped to `max_dt`
    Variable { max_dt: f32 },
    /// Whole ticks of `dt`, at most `max_substeps` per frame
    Fixed { dt: f32, max_substeps: u32 },
}

impl Default for StepMode {
    fn default() -> Self {
        StepMode::Variable {
            max_dt: MAX_FRAME_DT,
        }
    }
}

impl StepMode {
    pub fn fixed() -> Self {
        StepMode::Fixed {
            dt: FIXED_DT,
            max_substeps: MAX_SUBSTEPS,
        }
    }
}

/// Anything that can present a finished frame
pub trait RenderSink {
    fn draw(&mut self, scene: &Scene);
}

/// Owns the game state and everything needed to drive it frame by frame
pub struct GameLoop<S: HighScoreStore> {
    state: GameState,
    keyboard: KeyboardState,
    clock: FrameClock,
    accumulator: f32,
    mode: StepMode,
    store: S,
}

impl<S: HighScoreStore> GameLoop<S> {
    pub fn new(tuning: Tuning, seed: u64, store: S) -> Self {
        let mut state = GameState::new(tuning, seed);
        state.high_score = HighScore::load(&store).best;
        log::info!(
            "Game initialized with seed {} (high score {})",
            seed,
            state.high_score
        );

        Self {
            state,
            keyboard: KeyboardState::new(),
            clock: FrameClock::default(),
            accumulator: 0.0,
            mode: StepMode::default(),
            store,
        }
    }

    pub fn with_mode(mut self, mode: StepMode) -> Self {
        self.mode = mode;
        self.accumulator = 0.0;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unspent time carried to the next frame (fixed mode only)
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    pub fn key_down(&mut self, key: &str) -> Option<KeyCommand> {
        self.keyboard.key_down(key)
    }

    pub fn key_up(&mut self, key: &str) {
        self.keyboard.key_up(key);
    }

    /// Window lost focus: release held keys and restart frame timing
    pub fn blur(&mut self) {
        self.keyboard.clear();
        self.clock.reset();
    }

    /// Run the update for an animation-frame timestamp (milliseconds)
    pub fn frame(&mut self, timestamp_ms: f64) -> Vec<GameEvent> {
        let dt = self.clock.delta(timestamp_ms);
        self.step(dt)
    }

    /// Advance by `dt` seconds according to the step mode.
    /// Returns the events produced.
    pub fn step(&mut self, dt: f32) -> Vec<GameEvent> {
        match self.mode {
            StepMode::Variable { max_dt } => {
                let input = self.keyboard.take_input();
                tick(&mut self.state, &input, clamp_range(dt, 0.0, max_dt), &mut self.store);
            }
            StepMode::Fixed { dt: step, max_substeps } => {
                self.accumulator += dt.max(0.0);

                let mut substeps = 0;
                while self.accumulator >= step && substeps < max_substeps {
                    // A start press is only consumed by a tick that actually runs
                    let input = self.keyboard.take_input();
                    tick(&mut self.state, &input, step, &mut self.store);
                    self.accumulator -= step;
                    substeps += 1;
                }

                if substeps == max_substeps && self.accumulator >= step {
                    log::debug!(
                        "Dropping {:.3}s of frame time after {} substeps",
                        self.accumulator - step,
                        substeps
                    );
                    self.accumulator = step;
                }
            }
        }

        self.state.drain_events()
    }

    /// Snapshot for rendering and HUD
    pub fn scene(&self) -> Scene {
        Scene::from_state(&self.state)
    }

    pub fn render(&self, sink: &mut impl RenderSink) {
        sink.draw(&self.scene());
    }

    /// Update then draw: one animation frame
    pub fn run_frame(&mut self, timestamp_ms: f64, sink: &mut impl RenderSink) -> Vec<GameEvent> {
        let events = self.frame(timestamp_ms);
        self.render(sink);
        events
    }
}
