//! High score persistence
//!
//! A single integer slot, kept outside the simulation. The web build stores a
//! small JSON record in LocalStorage; tests and the native demo use memory.

use serde::{Deserialize, Serialize};

use crate::platform::storage;

/// A read/write slot holding the best score. `None` means nothing stored yet.
pub trait HighScoreStore {
    fn load(&self) -> Option<u64>;
    fn save(&mut self, score: u64);
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for &mut S {
    fn load(&self) -> Option<u64> {
        (**self).load()
    }

    fn save(&mut self, score: u64) {
        (**self).save(score)
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u64) -> Self {
        Self { value: Some(score) }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Option<u64> {
        self.value
    }

    fn save(&mut self, score: u64) {
        self.value = Some(score);
    }
}

/// Stored form of the high score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub score: u64,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// LocalStorage-backed store (in-memory map on native)
#[derive(Debug, Clone)]
pub struct LocalStore {
    key: String,
}

impl LocalStore {
    pub const DEFAULT_KEY: &'static str = "brick_breaker_highscore";

    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_KEY)
    }
}

impl HighScoreStore for LocalStore {
    fn load(&self) -> Option<u64> {
        let json = storage::get_item(&self.key)?;
        match serde_json::from_str::<HighScoreRecord>(&json) {
            Ok(record) => Some(record.score),
            Err(e) => {
                log::warn!("Discarding unreadable high score record: {}", e);
                None
            }
        }
    }

    fn save(&mut self, score: u64) {
        let record = HighScoreRecord {
            score,
            timestamp: crate::platform::time::now_ms(),
        };
        match serde_json::to_string(&record) {
            Ok(json) => {
                if storage::set_item(&self.key, &json) {
                    log::info!("High score saved ({})", score);
                } else {
                    log::warn!("High score {} could not be saved", score);
                }
            }
            Err(e) => log::warn!("Failed to encode high score: {}", e),
        }
    }
}
