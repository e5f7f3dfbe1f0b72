//! One-directional rounds.
//!
//! - `GuessingRound`: the human guesses a hidden number (forward mode)
//! - `BisectingRound`: the computer bisects towards the human's number (reverse mode)
//!
//! Both are plain state machines; `play_forward` and `play_reverse` drive them
//! through a [`Console`]. Malformed input never consumes an attempt.

use tracing::{debug, info, instrument};

use crate::core::{Bounds, FeedbackTokens, InputClosed, RandomSource};
use crate::search::{Feedback, RangeBisector};

use super::console::{Console, Message, Prompt};
use super::outcome::{GuessResult, Rejection, RoundOutcome, RoundPhase};

/// The human guesses `target` within `bounds`.
#[derive(Clone, Debug)]
pub struct GuessingRound {
    bounds: Bounds,
    target: i64,
    max_attempts: u32,
    attempts: u32,
    phase: RoundPhase,
}

impl GuessingRound {
    /// Start a round for a known hidden value.
    #[must_use]
    pub fn new(bounds: Bounds, target: i64, max_attempts: u32) -> Self {
        assert!(bounds.contains(target), "Hidden value must lie within bounds");
        assert!(max_attempts > 0, "Must allow at least 1 attempt");
        Self {
            bounds,
            target,
            max_attempts,
            attempts: 0,
            phase: RoundPhase::AwaitingGuess,
        }
    }

    /// Start a round with a hidden value drawn from `rng`.
    pub fn draw<R: RandomSource + ?Sized>(bounds: Bounds, max_attempts: u32, rng: &mut R) -> Self {
        Self::new(bounds, rng.draw(bounds), max_attempts)
    }

    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Accepted guesses so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Submit one line of input as a guess.
    ///
    /// Must not be called once the round is terminal.
    pub fn submit(&mut self, input: &str) -> GuessResult {
        debug_assert!(!self.phase.is_terminal(), "Round already finished");

        let Ok(guess) = input.trim().parse::<i64>() else {
            return GuessResult::Rejected(Rejection::NotANumber);
        };
        if !self.bounds.contains(guess) {
            return GuessResult::Rejected(Rejection::OutOfRange);
        }

        self.attempts += 1;
        let feedback = Feedback::compare(guess, self.target);
        debug!(guess, attempt = self.attempts, ?feedback, "Guess accepted");

        if feedback == Feedback::Hit {
            self.phase = RoundPhase::Hit;
        } else if self.attempts >= self.max_attempts {
            self.phase = RoundPhase::Exhausted;
        }
        GuessResult::Accepted(feedback)
    }

    /// Terminal outcome, or `None` while guesses are still awaited.
    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.phase {
            RoundPhase::AwaitingGuess => None,
            RoundPhase::Hit => Some(RoundOutcome::Hit {
                attempts: self.attempts,
            }),
            RoundPhase::Exhausted => Some(RoundOutcome::Exhausted),
        }
    }
}

/// Show the right message for a submitted guess.
pub(crate) fn report_guess<C: Console + ?Sized>(
    console: &mut C,
    bounds: Bounds,
    result: GuessResult,
) {
    match result {
        GuessResult::Rejected(Rejection::NotANumber) => console.show(&Message::NotANumber),
        GuessResult::Rejected(Rejection::OutOfRange) => {
            console.show(&Message::OutOfRange { bounds });
        }
        GuessResult::Accepted(Feedback::Hit) => {}
        GuessResult::Accepted(feedback) => console.show(&Message::Miss { feedback }),
    }
}

/// The computer bisects towards a number the human has in mind.
#[derive(Clone, Debug)]
pub struct BisectingRound {
    bisector: RangeBisector,
    max_attempts: u32,
    attempts: u32,
    phase: RoundPhase,
}

impl BisectingRound {
    #[must_use]
    pub fn new(bounds: Bounds, max_attempts: u32) -> Self {
        assert!(max_attempts > 0, "Must allow at least 1 attempt");
        Self {
            bisector: RangeBisector::from_bounds(bounds),
            max_attempts,
            attempts: 0,
            phase: RoundPhase::AwaitingGuess,
        }
    }

    /// Answered guesses so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// The guess awaiting feedback, or `None` once terminal.
    #[must_use]
    pub fn next_guess(&self) -> Option<i64> {
        if self.phase.is_terminal() {
            None
        } else {
            self.bisector.propose()
        }
    }

    /// Apply recognized feedback to the current guess. Consumes one attempt.
    pub fn respond(&mut self, feedback: Feedback) {
        let Some(guess) = self.next_guess() else {
            return;
        };
        self.attempts += 1;
        self.bisector.narrow(guess, feedback);
        debug!(guess, attempt = self.attempts, ?feedback, "Feedback applied");

        if feedback == Feedback::Hit {
            self.phase = RoundPhase::Hit;
        } else if self.attempts >= self.max_attempts || self.bisector.is_empty() {
            self.phase = RoundPhase::Exhausted;
        }
    }

    /// Terminal outcome, or `None` while feedback is still awaited.
    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.phase {
            RoundPhase::AwaitingGuess => None,
            RoundPhase::Hit => Some(RoundOutcome::Hit {
                attempts: self.attempts,
            }),
            RoundPhase::Exhausted => Some(RoundOutcome::Exhausted),
        }
    }
}

/// Forward mode: draw a hidden number and let the human guess it.
#[instrument(skip(rng, console))]
pub fn play_forward<R, C>(
    bounds: Bounds,
    max_attempts: u32,
    rng: &mut R,
    console: &mut C,
) -> Result<RoundOutcome, InputClosed>
where
    R: RandomSource + ?Sized,
    C: Console + ?Sized,
{
    let mut round = GuessingRound::draw(bounds, max_attempts, rng);

    while round.outcome().is_none() {
        let prompt = Prompt::Guess {
            attempt: round.attempts() + 1,
            max_attempts,
        };
        let line = console.read_line(&prompt)?;
        let result = round.submit(&line);
        report_guess(console, bounds, result);
    }

    let outcome = round.outcome().unwrap_or(RoundOutcome::Exhausted);
    info!(?outcome, target = round.target(), "Forward round finished");
    Ok(outcome)
}

/// Reverse mode: the computer bisects, the human answers with feedback tokens.
#[instrument(skip(tokens, console))]
pub fn play_reverse<C>(
    bounds: Bounds,
    max_attempts: u32,
    tokens: &FeedbackTokens,
    console: &mut C,
) -> Result<RoundOutcome, InputClosed>
where
    C: Console + ?Sized,
{
    console.show(&Message::ThinkOfNumber { bounds });
    let mut round = BisectingRound::new(bounds, max_attempts);

    while let Some(guess) = round.next_guess() {
        let prompt = Prompt::Feedback {
            guess,
            attempt: round.attempts() + 1,
            max_attempts,
        };
        let line = console.read_line(&prompt)?;
        match tokens.parse(&line) {
            Some(feedback) => round.respond(feedback),
            None => console.show(&Message::InvalidFeedback),
        }
    }

    let outcome = round.outcome().unwrap_or(RoundOutcome::Exhausted);
    info!(?outcome, "Reverse round finished");
    Ok(outcome)
}
