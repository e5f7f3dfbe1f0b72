//! Persisted best scores and mixed-mode win/loss tallies, keyed by player.
//!
//! Records are loaded right before a round and written at most once right
//! after it. See [`key`] for the on-disk layout.

pub mod key;
pub mod ledger;
pub mod store;

pub use key::MixedStats;
pub use ledger::{record_mixed, update_best, BestUpdate};
pub use store::{FileRecordStore, MemoryRecordStore, RecordStore};
