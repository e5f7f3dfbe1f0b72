//! Record storage backends.
//!
//! `RecordStore` is the read/modify/write contract the session relies on:
//! - reads never fail; missing or malformed data reads as "no record"
//! - writes are unconditional and immediate; failures come back as
//!   [`RecordError`] for the caller to report as a warning
//!
//! There is no locking. Two processes writing the same key can lose updates.

use std::path::PathBuf;

use rustc_hash::FxHashMap;
use tracing::{debug, instrument, warn};

use crate::core::{Difficulty, Mode, Player, RecordError};

use super::key::{self, MixedStats};

/// Persistent best scores and mixed-mode tallies.
pub trait RecordStore {
    /// Best attempt count for (player, mode, difficulty), if any.
    fn load_best(&self, player: &Player, mode: Mode, difficulty: Difficulty) -> Option<u32>;

    /// Store `attempts` as the best for (player, mode, difficulty).
    ///
    /// Unconditional: the caller decides whether it is an improvement.
    fn save_best(
        &mut self,
        player: &Player,
        mode: Mode,
        difficulty: Difficulty,
        attempts: u32,
    ) -> Result<(), RecordError>;

    /// Mixed-mode tally for (player, difficulty); zeroes if absent.
    fn load_stats(&self, player: &Player, difficulty: Difficulty) -> MixedStats;

    /// Store the mixed-mode tally for (player, difficulty).
    fn save_stats(
        &mut self,
        player: &Player,
        difficulty: Difficulty,
        stats: MixedStats,
    ) -> Result<(), RecordError>;
}

/// One small text file per record under a directory.
#[derive(Clone, Debug)]
pub struct FileRecordStore {
    dir: PathBuf,
}

impl FileRecordStore {
    /// Store records under `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file holding `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn read(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Unreadable record treated as absent");
                None
            }
        }
    }

    fn write(&self, key: &str, contents: &str) -> Result<(), RecordError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        std::fs::write(&path, contents)
            .map_err(|e| RecordError::new(format!("cannot write {}: {e}", path.display())))?;
        debug!(path = %path.display(), "Record written");
        Ok(())
    }
}

impl RecordStore for FileRecordStore {
    #[instrument(skip(self))]
    fn load_best(&self, player: &Player, mode: Mode, difficulty: Difficulty) -> Option<u32> {
        let text = self.read(&key::best_key(player, mode, difficulty))?;
        key::parse_best(&text)
    }

    #[instrument(skip(self))]
    fn save_best(
        &mut self,
        player: &Player,
        mode: Mode,
        difficulty: Difficulty,
        attempts: u32,
    ) -> Result<(), RecordError> {
        self.write(&key::best_key(player, mode, difficulty), &key::format_best(attempts))
    }

    #[instrument(skip(self))]
    fn load_stats(&self, player: &Player, difficulty: Difficulty) -> MixedStats {
        self.read(&key::stats_key(player, difficulty))
            .map(|text| key::parse_stats(&text))
            .unwrap_or_default()
    }

    #[instrument(skip(self))]
    fn save_stats(
        &mut self,
        player: &Player,
        difficulty: Difficulty,
        stats: MixedStats,
    ) -> Result<(), RecordError> {
        self.write(&key::stats_key(player, difficulty), &key::format_stats(stats))
    }
}

/// Records kept in memory for the lifetime of the process.
///
/// Stores the same text under the same keys as [`FileRecordStore`].
#[derive(Clone, Debug, Default)]
pub struct MemoryRecordStore {
    entries: FxHashMap<String, String>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put raw text under `key`, e.g. to simulate a corrupted record.
    pub fn insert_raw(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Raw text under `key`.
    #[must_use]
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RecordStore for MemoryRecordStore {
    fn load_best(&self, player: &Player, mode: Mode, difficulty: Difficulty) -> Option<u32> {
        self.get_raw(&key::best_key(player, mode, difficulty))
            .and_then(key::parse_best)
    }

    fn save_best(
        &mut self,
        player: &Player,
        mode: Mode,
        difficulty: Difficulty,
        attempts: u32,
    ) -> Result<(), RecordError> {
        self.insert_raw(key::best_key(player, mode, difficulty), key::format_best(attempts));
        Ok(())
    }

    fn load_stats(&self, player: &Player, difficulty: Difficulty) -> MixedStats {
        self.get_raw(&key::stats_key(player, difficulty))
            .map(key::parse_stats)
            .unwrap_or_default()
    }

    fn save_stats(
        &mut self,
        player: &Player,
        difficulty: Difficulty,
        stats: MixedStats,
    ) -> Result<(), RecordError> {
        self.insert_raw(key::stats_key(player, difficulty), key::format_stats(stats));
        Ok(())
    }
}
