//! The human-facing I/O capability.
//!
//! Rounds never format text. They ask for input with a [`Prompt`] and report
//! with a [`Message`]; the front-end decides how either looks on screen.
//! Reading blocks until a line arrives or the input ends ([`InputClosed`]).

use std::collections::VecDeque;

use crate::core::{Bounds, Difficulty, InputClosed, Mode, Player};
use crate::records::MixedStats;
use crate::search::Feedback;

/// The two sides of a mixed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Party {
    Human,
    Computer,
}

impl Party {
    /// The other side.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Party::Human => Party::Computer,
            Party::Computer => Party::Human,
        }
    }
}

/// What the human is being asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Prompt {
    /// The session player's name.
    PlayerName,
    /// Name for an extra multiplayer seat (1-based).
    SeatName { seat: usize },
    /// Main menu selection.
    Menu,
    /// Difficulty selection.
    Difficulty,
    /// A guess from the session player.
    Guess { attempt: u32, max_attempts: u32 },
    /// A guess from a named multiplayer seat.
    SeatGuess {
        player: Player,
        attempt: u32,
        max_attempts: u32,
    },
    /// Feedback on the computer's guess.
    Feedback {
        guess: i64,
        attempt: u32,
        max_attempts: u32,
    },
}

/// What the human is being told.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    Welcome,
    Goodbye,
    EmptyName,
    UnknownMode,
    UnknownDifficulty,
    /// Input was not an integer.
    NotANumber,
    /// Input was an integer outside the round's range.
    OutOfRange { bounds: Bounds },
    /// Unrecognized answer to the computer's guess.
    InvalidFeedback,
    /// Result of a human guess that missed.
    Miss { feedback: Feedback },
    /// The human should pick a number for the computer to find.
    ThinkOfNumber { bounds: Bounds },
    /// Stored best before a single or reverse round.
    BestScore {
        mode: Mode,
        difficulty: Difficulty,
        best: Option<u32>,
    },
    /// The hidden number was found.
    Guessed { attempts: u32 },
    /// The round beat the stored best.
    NewBest { attempts: u32 },
    /// The human ran out of attempts.
    NotGuessed,
    /// The computer ran out of attempts or candidates.
    ComputerFailed,
    /// Win/loss tally before a mixed round.
    MixedStats {
        difficulty: Difficulty,
        stats: MixedStats,
    },
    /// Who opens a mixed round.
    Starts { party: Party },
    /// A mixed round was won.
    PartyWon { party: Party, attempts: u32 },
    /// Shared turn cap exhausted with no hit.
    NoWinner,
    /// A multiplayer seat hit the number.
    SeatWon { player: Player, attempts: u32 },
    /// Every seat used its attempts.
    NobodyGuessed { target: i64 },
    /// A record could not be written; the round result still stands.
    SaveFailed { reason: String },
}

/// Line-oriented human I/O.
pub trait Console {
    /// Ask for one line of input.
    fn read_line(&mut self, prompt: &Prompt) -> Result<String, InputClosed>;

    /// Show a message.
    fn show(&mut self, message: &Message);
}

/// A console fed from a fixed list of lines, recording everything shown.
///
/// Reports [`InputClosed`] once the lines run out.
#[derive(Clone, Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    /// Every prompt issued, in order.
    pub prompts: Vec<Prompt>,
    /// Every message shown, in order.
    pub messages: Vec<Message>,
}

impl ScriptedConsole {
    /// Create a console that will answer with `lines` in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// Lines not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &Prompt) -> Result<String, InputClosed> {
        self.prompts.push(prompt.clone());
        self.input.pop_front().ok_or(InputClosed)
    }

    fn show(&mut self, message: &Message) {
        self.messages.push(message.clone());
    }
}
