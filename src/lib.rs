//! # number-guess
//!
//! A console number-guessing game. A human, the computer, or several humans
//! try to find a hidden integer within a bounded number of attempts.
//!
//! ## Modes
//!
//! - **Single**: the human guesses a number drawn by the program.
//! - **Reverse**: the computer bisects towards a number the human has in mind,
//!   guided by too-high / too-low / hit answers.
//! - **Mixed**: human and computer alternate turns under one shared cap.
//! - **MultiPlayer**: named players rotate on one hidden number.
//!
//! ## Difficulty
//!
//! Easy `[0, 100]`, Normal `[0, 10 000]`, Hard `[0, 1 000 000]`. The default
//! cap of 10 attempts is below the 20 halvings Hard can need, so the computer
//! may legitimately fail on Hard even against a perfectly consistent human.
//!
//! ## Records
//!
//! Best attempt counts (Single, Reverse) and win/loss tallies (Mixed) persist
//! in small text files keyed by player name. Multiplayer keeps no records.
//!
//! ## Modules
//!
//! - `core`: tags, configuration, players, RNG, errors
//! - `search`: the bisector used by the computer guesser
//! - `rounds`: round state machines and turn scheduling
//! - `records`: record stores and update rules
//! - `session`: the menu loop tying it together

pub mod core;
pub mod records;
pub mod rounds;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Bounds, Difficulty, FeedbackTokens, GameConfig, GameRng, InputClosed, MenuChoice, Mode,
    Player, PlayerId, PlayerMap, RandomSource, RecordError, ScriptedRandom,
};

pub use crate::search::{Feedback, RangeBisector};

pub use crate::rounds::{
    play_forward, play_mixed, play_multiplayer, play_reverse, BisectingRound, Console,
    GuessingRound, Message, MixedOutcome, MixedRound, MultiplayerOutcome, MultiplayerRound, Party,
    Prompt, RoundOutcome, ScriptedConsole,
};

pub use crate::records::{
    record_mixed, update_best, BestUpdate, FileRecordStore, MemoryRecordStore, MixedStats,
    RecordStore,
};

pub use crate::session::{GameSession, SessionSummary};
