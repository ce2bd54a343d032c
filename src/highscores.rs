//! Best score per mode
//!
//! Normal and hard runs keep independent records, each persisted as a decimal
//! string under its own key.

use serde::{Deserialize, Serialize};

use crate::platform::KeyValueStore;
use crate::sim::Mode;

/// Best scores for both modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub normal: u64,
    pub hard: u64,
}

impl HighScores {
    /// Storage key for normal-mode best
    pub const NORMAL_KEY: &'static str = "scottish_highlands_best";
    /// Storage key for hard-mode best
    pub const HARD_KEY: &'static str = "scottish_highlands_best_hard";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn storage_key(mode: Mode) -> &'static str {
        match mode {
            Mode::Normal => Self::NORMAL_KEY,
            Mode::Hard => Self::HARD_KEY,
        }
    }

    pub fn best(&self, mode: Mode) -> u64 {
        match mode {
            Mode::Normal => self.normal,
            Mode::Hard => self.hard,
        }
    }

    fn best_mut(&mut self, mode: Mode) -> &mut u64 {
        match mode {
            Mode::Normal => &mut self.normal,
            Mode::Hard => &mut self.hard,
        }
    }

    /// Whether `score` would set a new record for `mode`
    pub fn qualifies(&self, mode: Mode, score: u64) -> bool {
        score > self.best(mode)
    }

    /// Record a finished run. Returns true if it set a new record.
    ///
    /// A failed write keeps the new record in memory for this session.
    pub fn record(&mut self, mode: Mode, score: u64, store: &mut dyn KeyValueStore) -> bool {
        if !self.qualifies(mode, score) {
            return false;
        }
        *self.best_mut(mode) = score;

        let key = Self::storage_key(mode);
        match store.set(key, &score.to_string()) {
            Ok(()) => log::info!("New {} record saved: {}", mode.as_str(), score),
            Err(e) => log::warn!("Could not persist {} record {}: {}", mode.as_str(), score, e),
        }
        true
    }

    /// Load both records. Missing, unreadable or malformed values count as 0.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let mut scores = Self::new();
        for mode in [Mode::Normal, Mode::Hard] {
            *scores.best_mut(mode) = Self::read(store, mode);
        }
        log::info!(
            "Loaded best scores: normal {}, hard {}",
            scores.normal,
            scores.hard
        );
        scores
    }

    fn read(store: &dyn KeyValueStore, mode: Mode) -> u64 {
        match store.get(Self::storage_key(mode)) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or(0),
            Ok(None) => 0,
            Err(e) => {
                log::warn!("Could not read {} best score: {}", mode.as_str(), e);
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{MemoryStore, StorageError};

    /// Store whose every operation fails
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_record_only_when_higher() {
        let mut store = MemoryStore::new();
        let mut scores = HighScores::load(&store);
        assert_eq!(scores.best(Mode::Normal), 0);

        assert!(scores.record(Mode::Normal, 1200, &mut store));
        assert!(!scores.record(Mode::Normal, 800, &mut store));
        assert!(!scores.record(Mode::Normal, 1200, &mut store));
        assert_eq!(store.get(HighScores::NORMAL_KEY), Ok(Some("1200".to_string())));
    }

    #[test]
    fn test_modes_are_independent() {
        let mut store = MemoryStore::new();
        let mut scores = HighScores::new();
        scores.record(Mode::Hard, 300, &mut store);
        assert_eq!(scores.best(Mode::Hard), 300);
        assert_eq!(scores.best(Mode::Normal), 0);

        let reloaded = HighScores::load(&store);
        assert_eq!(reloaded, HighScores { normal: 0, hard: 300 });
    }

    #[test]
    fn test_zero_score_never_records() {
        let mut store = MemoryStore::new();
        let mut scores = HighScores::new();
        assert!(!scores.record(Mode::Normal, 0, &mut store));
        assert_eq!(store.get(HighScores::NORMAL_KEY), Ok(None));
    }

    #[test]
    fn test_malformed_value_reads_as_zero() {
        let mut store = MemoryStore::new();
        store.set(HighScores::NORMAL_KEY, "lots").unwrap();
        store.set(HighScores::HARD_KEY, " 42 ").unwrap();
        let scores = HighScores::load(&store);
        assert_eq!(scores.normal, 0);
        assert_eq!(scores.hard, 42);
    }

    #[test]
    fn test_broken_store_degrades_to_memory() {
        let mut store = BrokenStore;
        let mut scores = HighScores::load(&store);
        assert_eq!(scores, HighScores::default());

        assert!(scores.record(Mode::Normal, 500, &mut store));
        assert_eq!(scores.best(Mode::Normal), 500);
        assert!(!scores.record(Mode::Normal, 400, &mut store));
    }
}
