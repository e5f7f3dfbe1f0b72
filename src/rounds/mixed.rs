//! Mixed mode: the human and the computer alternate turns.
//!
//! The human hunts a hidden number drawn by the program while the computer
//! bisects towards a number the human has in mind. A coin flip picks who
//! opens. Turns alternate strictly after every consumed turn; rejected input
//! re-prompts the same side. Every consumed turn, from either side, counts
//! towards one shared cap. Reaching the cap, or the computer running out of
//! candidates after contradictory answers, ends the round with no winner.

use tracing::{debug, info, instrument};

use crate::core::{Bounds, FeedbackTokens, InputClosed, RandomSource};
use crate::search::Feedback;

use super::console::{Console, Message, Party, Prompt};
use super::outcome::{GuessResult, MixedOutcome, RoundPhase};
use super::single::{report_guess, BisectingRound, GuessingRound};

/// State of a mixed round.
#[derive(Clone, Debug)]
pub struct MixedRound {
    human: GuessingRound,
    computer: BisectingRound,
    turn: Party,
    turns_used: u32,
    max_turns: u32,
    outcome: Option<MixedOutcome>,
}

impl MixedRound {
    /// Start a round. `target` is the number the human must find.
    #[must_use]
    pub fn new(bounds: Bounds, target: i64, first: Party, max_turns: u32) -> Self {
        Self {
            human: GuessingRound::new(bounds, target, max_turns),
            computer: BisectingRound::new(bounds, max_turns),
            turn: first,
            turns_used: 0,
            max_turns,
            outcome: None,
        }
    }

    /// Draw the hidden number, then flip for the opening side (heads: human).
    pub fn draw<R: RandomSource + ?Sized>(bounds: Bounds, max_turns: u32, rng: &mut R) -> Self {
        let target = rng.draw(bounds);
        let first = if rng.coin_flip() {
            Party::Human
        } else {
            Party::Computer
        };
        Self::new(bounds, target, first, max_turns)
    }

    /// Whose turn it is.
    #[must_use]
    pub fn turn(&self) -> Party {
        self.turn
    }

    /// Consumed turns, both sides combined.
    #[must_use]
    pub fn turns_used(&self) -> u32 {
        self.turns_used
    }

    #[must_use]
    pub fn human(&self) -> &GuessingRound {
        &self.human
    }

    #[must_use]
    pub fn computer(&self) -> &BisectingRound {
        &self.computer
    }

    #[must_use]
    pub fn outcome(&self) -> Option<MixedOutcome> {
        self.outcome
    }

    /// The human's turn: submit one line as a guess.
    pub fn human_guess(&mut self, input: &str) -> GuessResult {
        debug_assert_eq!(self.turn, Party::Human, "Not the human's turn");
        let result = self.human.submit(input);
        if let GuessResult::Accepted(feedback) = result {
            self.finish_turn(feedback == Feedback::Hit, Party::Human);
        }
        result
    }

    /// The computer's turn: the guess it wants feedback on.
    #[must_use]
    pub fn computer_guess(&self) -> Option<i64> {
        self.computer.next_guess()
    }

    /// The computer's turn: apply the human's feedback.
    pub fn computer_feedback(&mut self, feedback: Feedback) {
        debug_assert_eq!(self.turn, Party::Computer, "Not the computer's turn");
        self.computer.respond(feedback);
        self.finish_turn(feedback == Feedback::Hit, Party::Computer);
        if self.outcome.is_none() && self.computer.phase() == RoundPhase::Exhausted {
            debug!("Computer ran out of candidates");
            self.outcome = Some(MixedOutcome::NoWinner);
        }
    }

    fn finish_turn(&mut self, hit: bool, party: Party) {
        if hit {
            let attempts = match party {
                Party::Human => self.human.attempts(),
                Party::Computer => self.computer.attempts(),
            };
            self.outcome = Some(MixedOutcome::Won {
                winner: party,
                attempts,
            });
            return;
        }
        self.turns_used += 1;
        if self.turns_used >= self.max_turns {
            self.outcome = Some(MixedOutcome::NoWinner);
        } else {
            self.turn = party.other();
        }
    }
}

/// Play a mixed round to completion.
#[instrument(skip(tokens, rng, console))]
pub fn play_mixed<R, C>(
    bounds: Bounds,
    max_turns: u32,
    tokens: &FeedbackTokens,
    rng: &mut R,
    console: &mut C,
) -> Result<MixedOutcome, InputClosed>
where
    R: RandomSource + ?Sized,
    C: Console + ?Sized,
{
    let mut round = MixedRound::draw(bounds, max_turns, rng);
    console.show(&Message::Starts { party: round.turn() });

    while round.outcome().is_none() {
        match round.turn() {
            Party::Human => {
                let prompt = Prompt::Guess {
                    attempt: round.human().attempts() + 1,
                    max_attempts: max_turns,
                };
                let line = console.read_line(&prompt)?;
                let result = round.human_guess(&line);
                report_guess(console, bounds, result);
            }
            Party::Computer => {
                let Some(guess) = round.computer_guess() else {
                    break;
                };
                let prompt = Prompt::Feedback {
                    guess,
                    attempt: round.computer().attempts() + 1,
                    max_attempts: max_turns,
                };
                let line = console.read_line(&prompt)?;
                match tokens.parse(&line) {
                    Some(feedback) => round.computer_feedback(feedback),
                    None => console.show(&Message::InvalidFeedback),
                }
            }
        }
    }

    let outcome = round.outcome().unwrap_or(MixedOutcome::NoWinner);
    info!(?outcome, turns = round.turns_used(), "Mixed round finished");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, ScriptedRandom};
    use crate::rounds::console::ScriptedConsole;

    const EASY: Bounds = Difficulty::Easy.bounds();

    #[test]
    fn test_turns_alternate() {
        let mut round = MixedRound::new(EASY, 42, Party::Human, 10);
        round.human_guess("10");
        assert_eq!(round.turn(), Party::Computer);
        assert_eq!(round.computer_guess(), Some(50));
        round.computer_feedback(Feedback::TooHigh);
        assert_eq!(round.turn(), Party::Human);
        assert_eq!(round.turns_used(), 2);
    }

    #[test]
    fn test_rejected_input_keeps_turn() {
        let mut round = MixedRound::new(EASY, 42, Party::Human, 10);
        round.human_guess("abc");
        round.human_guess("1000");
        assert_eq!(round.turn(), Party::Human);
        assert_eq!(round.turns_used(), 0);
    }

    #[test]
    fn test_human_win() {
        let mut round = MixedRound::new(EASY, 42, Party::Computer, 10);
        round.computer_feedback(Feedback::TooLow);
        round.human_guess("42");
        assert_eq!(
            round.outcome(),
            Some(MixedOutcome::Won {
                winner: Party::Human,
                attempts: 1
            })
        );
    }

    #[test]
    fn test_computer_win() {
        let mut round = MixedRound::new(EASY, 42, Party::Computer, 10);
        round.computer_feedback(Feedback::TooHigh);
        round.human_guess("7");
        round.computer_feedback(Feedback::Hit);
        assert_eq!(
            round.outcome(),
            Some(MixedOutcome::Won {
                winner: Party::Computer,
                attempts: 2
            })
        );
    }

    #[test]
    fn test_shared_cap() {
        let mut round = MixedRound::new(EASY, 42, Party::Human, 4);
        round.human_guess("1");
        round.computer_feedback(Feedback::TooLow);
        round.human_guess("2");
        assert_eq!(round.outcome(), None);
        round.computer_feedback(Feedback::TooLow);
        assert_eq!(round.outcome(), Some(MixedOutcome::NoWinner));
        assert_eq!(round.turns_used(), 4);
        assert_eq!(round.human().attempts(), 2);
        assert_eq!(round.computer().attempts(), 2);
    }

    #[test]
    fn test_contradiction_ends_round() {
        let tiny = Bounds::new(0, 2);
        let mut round = MixedRound::new(tiny, 0, Party::Computer, 10);
        round.computer_feedback(Feedback::TooLow); // guess 1
        round.human_guess("1");
        round.computer_feedback(Feedback::TooHigh); // guess 2
        assert_eq!(round.outcome(), Some(MixedOutcome::NoWinner));
    }

    #[test]
    fn test_play_mixed_coin_flip_picks_opener() {
        let tokens = FeedbackTokens::default();

        let mut rng = ScriptedRandom::new([42], [true]);
        let mut console = ScriptedConsole::new(["42"]);
        let outcome = play_mixed(EASY, 10, &tokens, &mut rng, &mut console).unwrap();
        assert!(outcome.is_human_win());
        assert_eq!(console.messages[0], Message::Starts { party: Party::Human });

        let mut rng = ScriptedRandom::new([42], [false]);
        let mut console = ScriptedConsole::new(["t"]);
        let outcome = play_mixed(EASY, 10, &tokens, &mut rng, &mut console).unwrap();
        assert_eq!(
            outcome,
            MixedOutcome::Won {
                winner: Party::Computer,
                attempts: 1
            }
        );
        assert_eq!(console.messages[0], Message::Starts { party: Party::Computer });
    }
}
