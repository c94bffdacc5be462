//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (frame deltas from `requestAnimationFrame` timestamps)
//! - Input events (keyboard to paddle intents)
//! - Storage (LocalStorage on web, memory on native)

pub mod input;
pub mod storage;
pub mod time;

pub use input::{KeyCommand, KeyboardState};
pub use time::FrameClock;
