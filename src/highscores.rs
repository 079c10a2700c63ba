//! Score bookkeeping
//!
//! Tracks the current run's score next to the best score ever recorded.
//! The best score follows the current one live, so the HUD can show a new
//! record the moment it happens rather than at game over.

use crate::persistence::ScoreStore;

/// Current score and persisted best.
///
/// `best` is never lower than any `current` value the tracker has held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTracker {
    current: u64,
    best: u64,
}

impl ScoreTracker {
    /// Create a tracker with no record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker seeded with a previously saved best score
    pub fn with_best(best: u64) -> Self {
        Self { current: 0, best }
    }

    /// Load the best score from `store`.
    ///
    /// Never fails: a missing or unreadable record means starting from 0.
    pub fn load(store: &dyn ScoreStore) -> Self {
        match store.load() {
            Ok(best) => {
                log::info!("Loaded high score {}", best);
                Self::with_best(best)
            }
            Err(e) => {
                log::warn!("No usable high score record ({}), starting fresh", e);
                Self::new()
            }
        }
    }

    /// Save the best score to `store`. A failed write is logged and dropped.
    pub fn persist(&self, store: &dyn ScoreStore) {
        match store.save(self.best) {
            Ok(()) => log::info!("High score {} saved", self.best),
            Err(e) => log::warn!("Could not save high score {}: {}", self.best, e),
        }
    }

    pub fn add_score(&mut self, points: u64) {
        self.current = self.current.saturating_add(points);
        if self.current > self.best {
            self.best = self.current;
        }
    }

    /// Zero the current run; the best score is kept
    pub fn reset_current(&mut self) {
        self.current = 0;
    }

    /// True when this run holds the record. Ties with an earlier best count.
    pub fn is_new_record(&self) -> bool {
        self.current == self.best && self.current > 0
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn best(&self) -> u64 {
        self.best
    }
}
