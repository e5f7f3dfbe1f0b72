//! Session orchestration.
//!
//! `GameSession` owns the console, the RNG and the record store for one
//! sitting: it acquires the player name, loops over the menu, runs the chosen
//! round and writes its records. No round outcome ends the session; only
//! quitting or closed input does.

pub mod game;

pub use game::{GameSession, SessionSummary};
