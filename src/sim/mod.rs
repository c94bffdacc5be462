//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through the `dt` passed to `tick`
//! - Seeded RNG only
//! - Stable iteration order (row-major brick grid)
//! - No rendering or platform dependencies

pub mod bricks;
pub mod collision;
pub mod paddle_collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use bricks::{BrickField, BrickLayout, BrickOutcome, process_brick_collisions};
pub use collision::{Penetration, Side, reflect, resolve_collision};
pub use paddle_collision::resolve_paddle_collision;
pub use rect::Rect;
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, RngState};
pub use tick::{PaddleIntent, TickInput, tick};
