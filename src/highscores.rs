//! High score tracking
//!
//! One best score, compared and written at the end of each round.

use crate::persistence::HighScoreStore;

/// Cached view of the stored best score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    pub best: u64,
}

impl HighScore {
    /// Read the current best (absence counts as zero)
    pub fn load<S: HighScoreStore + ?Sized>(store: &S) -> Self {
        Self {
            best: store.load().unwrap_or(0),
        }
    }

    /// Check if a score would beat the cached best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Offer a finished round's score.
    ///
    /// Reads the store, compares, and writes only on a strict improvement.
    /// Exclusive access to the store makes the three steps one unit.
    /// Returns true if a new high score was written.
    pub fn submit<S: HighScoreStore + ?Sized>(&mut self, store: &mut S, score: u64) -> bool {
        let stored = store.load().unwrap_or(0);
        self.best = stored;
        if !self.qualifies(score) {
            return false;
        }
        store.save(score);
        self.best = score;
        log::info!("New high score: {} (was {})", score, stored);
        true
    }
}
