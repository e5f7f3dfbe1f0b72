//! Core types: difficulty and mode tags, configuration, players, RNG, errors.
//!
//! Nothing here performs I/O on behalf of a round; rounds receive these
//! values and capabilities from the session.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{
    Bounds, Difficulty, FeedbackTokens, GameConfig, MenuChoice, Mode, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_MULTIPLAYER_SEATS,
};
pub use error::{ConfigError, InputClosed, RecordError};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, RandomSource, ScriptedRandom};
