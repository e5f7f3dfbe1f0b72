//! Round engines and turn scheduling.
//!
//! - `single`: forward (human guesses) and reverse (computer bisects) rounds
//! - `mixed`: human and computer alternate under a shared turn cap
//! - `multiplayer`: named seats rotate on one hidden number
//! - `console`: prompts and messages exchanged with the human
//!
//! Each round is a state machine that can be stepped directly; the `play_*`
//! functions drive one through a [`Console`] until it reaches a terminal
//! outcome or the input closes.

pub mod console;
pub mod mixed;
pub mod multiplayer;
pub mod outcome;
pub mod single;

pub use console::{Console, Message, Party, Prompt, ScriptedConsole};
pub use mixed::{play_mixed, MixedRound};
pub use multiplayer::{play_multiplayer, MultiplayerRound};
pub use outcome::{
    GuessResult, MixedOutcome, MultiplayerOutcome, Rejection, RoundOutcome, RoundPhase,
};
pub use single::{play_forward, play_reverse, BisectingRound, GuessingRound};
