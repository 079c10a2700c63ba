//! High score record persistence
//!
//! The record is one JSON object, `{ "high_score": N }`, at a fixed path.
//! Stores report failures as [`PersistError`]; callers decide whether to
//! care (the score tracker never does).

use std::cell::Cell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default record file name, relative to the working directory
pub const DEFAULT_RECORD_PATH: &str = "highscore.json";

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("record file I/O failed")]
    Io {
        #[from]
        source: io::Error,
    },
    #[error("record file is malformed")]
    Format {
        #[from]
        source: serde_json::Error,
    },
}

/// On-disk shape of the record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    #[serde(default)]
    pub high_score: u64,
}

/// Somewhere a single best score can be kept between sessions
pub trait ScoreStore {
    fn load(&self) -> Result<u64, PersistError>;
    fn save(&self, best: u64) -> Result<(), PersistError>;
}

/// JSON record on the local filesystem
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_RECORD_PATH)
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> Result<u64, PersistError> {
        let json = fs::read_to_string(&self.path)?;
        let record: HighScoreRecord = serde_json::from_str(&json)?;
        Ok(record.high_score)
    }

    fn save(&self, best: u64) -> Result<(), PersistError> {
        let json = serde_json::to_string_pretty(&HighScoreRecord { high_score: best })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Store that lives only as long as the process (tests, demos)
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    value: Cell<Option<u64>>,
    saves: Cell<u32>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds a record
    pub fn with_record(best: u64) -> Self {
        Self {
            value: Cell::new(Some(best)),
            saves: Cell::new(0),
        }
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> u32 {
        self.saves.get()
    }

    pub fn stored(&self) -> Option<u64> {
        self.value.get()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<u64, PersistError> {
        self.value.get().ok_or_else(|| {
            PersistError::from(io::Error::new(io::ErrorKind::NotFound, "no record saved"))
        })
    }

    fn save(&self, best: u64) -> Result<(), PersistError> {
        self.value.set(Some(best));
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("road-dodge-{}-{}.json", std::process::id(), name))
    }

    #[test]
    fn test_file_round_trip() {
        let path = temp_path("round-trip");
        let store = FileScoreStore::new(&path);
        store.save(42).unwrap();
        assert_eq!(store.load().unwrap(), 42);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"high_score\": 42"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let store = FileScoreStore::new(temp_path("does-not-exist"));
        assert!(matches!(store.load(), Err(PersistError::Io { .. })));
    }

    #[test]
    fn test_malformed_file_is_format_error() {
        let path = temp_path("malformed");
        fs::write(&path, "high_score = lots").unwrap();
        let store = FileScoreStore::new(&path);
        assert!(matches!(store.load(), Err(PersistError::Format { .. })));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_negative_score_is_rejected() {
        let path = temp_path("negative");
        fs::write(&path, r#"{ "high_score": -5 }"#).unwrap();
        let store = FileScoreStore::new(&path);
        assert!(store.load().is_err());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unwritable_path_is_error() {
        let dir = temp_path("as-dir");
        fs::create_dir_all(&dir).unwrap();
        // Writing a file over a directory fails on every platform
        let store = FileScoreStore::new(&dir);
        assert!(store.save(1).is_err());
        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryScoreStore::new();
        assert!(store.load().is_err());
        store.save(9).unwrap();
        assert_eq!(store.load().unwrap(), 9);
        assert_eq!(store.save_count(), 1);
        assert_eq!(MemoryScoreStore::with_record(3).load().unwrap(), 3);
    }
}
