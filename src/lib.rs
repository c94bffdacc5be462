//! Brick Breaker - A Breakout-style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `game_loop`: Frame driver that feeds elapsed time into the simulation
//! - `renderer`: Scene snapshot and WebGPU rendering pipeline
//! - `platform`: Browser/native platform abstraction
//! - `persistence`: High score storage
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod game_loop;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, RenderError};
pub use game_loop::{GameLoop, RenderSink, StepMode};
pub use highscores::HighScore;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Nominal frame time used for the very first frame (60 Hz)
    pub const NOMINAL_DT: f32 = 1.0 / 60.0;
    /// Longest frame delta fed into the simulation (tab switches, breakpoints)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Fixed simulation timestep when running in fixed-step mode
    pub const FIXED_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions (canvas size)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLUMNS: usize = 10;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_SPACING: f32 = 15.0;
    pub const BRICK_TOP: f32 = 15.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 50.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Distance from the playfield bottom to the paddle's top edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 50.0;
    pub const PADDLE_MAX_SPEED: f32 = 240.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_LAUNCH_SPEED: f32 = 240.0;
    pub const BALL_MAX_SPEED: f32 = 480.0;
    /// Vertical speed multiplier applied per brick hit
    pub const BALL_SPEED_GROWTH: f32 = 1.02;
    /// Fraction of the ball's max speed added as spin by a moving paddle
    pub const PADDLE_SPIN: f32 = 0.25;
}

/// Clamp `value` into `[min, max]`
///
/// Unlike `f32::clamp` this never panics when `min > max`; the lower bound wins.
#[inline]
pub fn clamp_range(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}
