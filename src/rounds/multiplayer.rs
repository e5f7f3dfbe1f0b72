//! Multiplayer mode: named players take turns on one hidden number.
//!
//! Seats are polled in fixed rotation order. Each seat has its own attempt
//! counter capped at the round maximum. Rejected input re-prompts the same
//! seat. The first hit ends the round at once, even mid-rotation.

use tracing::{debug, info, instrument};

use crate::core::{Bounds, InputClosed, Player, PlayerId, PlayerMap, RandomSource};
use crate::search::Feedback;

use super::console::{Console, Message, Prompt};
use super::outcome::{GuessResult, MultiplayerOutcome, Rejection};
use super::single::report_guess;

/// State of a multiplayer round.
#[derive(Clone, Debug)]
pub struct MultiplayerRound {
    bounds: Bounds,
    target: i64,
    max_attempts: u32,
    attempts: PlayerMap<u32>,
    turn: PlayerId,
    outcome: Option<MultiplayerOutcome>,
}

impl MultiplayerRound {
    /// Start a round for `player_count` seats. Seat 0 opens.
    #[must_use]
    pub fn new(bounds: Bounds, target: i64, player_count: usize, max_attempts: u32) -> Self {
        assert!(bounds.contains(target), "Hidden value must lie within bounds");
        assert!(max_attempts > 0, "Must allow at least 1 attempt");
        Self {
            bounds,
            target,
            max_attempts,
            attempts: PlayerMap::with_value(player_count, 0),
            turn: PlayerId::new(0),
            outcome: None,
        }
    }

    /// Start a round with a hidden value drawn from `rng`.
    pub fn draw<R: RandomSource + ?Sized>(
        bounds: Bounds,
        player_count: usize,
        max_attempts: u32,
        rng: &mut R,
    ) -> Self {
        Self::new(bounds, rng.draw(bounds), player_count, max_attempts)
    }

    /// The seat expected to guess next.
    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    /// Accepted guesses by `seat`.
    #[must_use]
    pub fn attempts(&self, seat: PlayerId) -> u32 {
        self.attempts[seat]
    }

    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    #[must_use]
    pub fn outcome(&self) -> Option<MultiplayerOutcome> {
        self.outcome
    }

    /// Submit one line as the current seat's guess.
    pub fn submit(&mut self, input: &str) -> GuessResult {
        debug_assert!(self.outcome.is_none(), "Round already finished");

        let Ok(guess) = input.trim().parse::<i64>() else {
            return GuessResult::Rejected(Rejection::NotANumber);
        };
        if !self.bounds.contains(guess) {
            return GuessResult::Rejected(Rejection::OutOfRange);
        }

        let seat = self.turn;
        self.attempts[seat] += 1;
        let feedback = Feedback::compare(guess, self.target);
        debug!(%seat, guess, attempt = self.attempts[seat], ?feedback, "Seat guessed");

        if feedback == Feedback::Hit {
            self.outcome = Some(MultiplayerOutcome::Winner {
                seat,
                attempts: self.attempts[seat],
            });
        } else {
            self.advance();
        }
        GuessResult::Accepted(feedback)
    }

    /// Move to the next seat with attempts left, or end the round.
    fn advance(&mut self) {
        let count = self.attempts.player_count();
        let mut next = self.turn;
        for _ in 0..count {
            next = next.next(count);
            if self.attempts[next] < self.max_attempts {
                self.turn = next;
                return;
            }
        }
        self.outcome = Some(MultiplayerOutcome::NoWinner {
            target: self.target,
        });
    }
}

/// Play a multiplayer round with the given seats to completion.
#[instrument(skip(players, rng, console), fields(seats = players.player_count()))]
pub fn play_multiplayer<R, C>(
    bounds: Bounds,
    max_attempts: u32,
    players: &PlayerMap<Player>,
    rng: &mut R,
    console: &mut C,
) -> Result<MultiplayerOutcome, InputClosed>
where
    R: RandomSource + ?Sized,
    C: Console + ?Sized,
{
    let mut round = MultiplayerRound::draw(bounds, players.player_count(), max_attempts, rng);

    while round.outcome().is_none() {
        let seat = round.turn();
        let prompt = Prompt::SeatGuess {
            player: players[seat].clone(),
            attempt: round.attempts(seat) + 1,
            max_attempts,
        };
        let line = console.read_line(&prompt)?;
        let result = round.submit(&line);
        report_guess(console, bounds, result);
    }

    let outcome = round.outcome().unwrap_or(MultiplayerOutcome::NoWinner {
        target: round.target(),
    });
    info!(?outcome, "Multiplayer round finished");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, ScriptedRandom};
    use crate::rounds::console::ScriptedConsole;

    const EASY: Bounds = Difficulty::Easy.bounds();

    fn seats() -> PlayerMap<Player> {
        PlayerMap::from_vec(
            ["Ala", "Bob", "Cyd"]
                .iter()
                .map(|n| Player::new(n).unwrap())
                .collect(),
        )
    }

    #[test]
    fn test_rotation_order() {
        let mut round = MultiplayerRound::new(EASY, 42, 3, 10);
        assert_eq!(round.turn(), PlayerId::new(0));
        round.submit("1");
        assert_eq!(round.turn(), PlayerId::new(1));
        round.submit("2");
        assert_eq!(round.turn(), PlayerId::new(2));
        round.submit("3");
        assert_eq!(round.turn(), PlayerId::new(0));
    }

    #[test]
    fn test_invalid_input_keeps_seat() {
        let mut round = MultiplayerRound::new(EASY, 42, 3, 10);
        round.submit("1");
        assert_eq!(round.submit("xyz"), GuessResult::Rejected(Rejection::NotANumber));
        assert_eq!(round.submit("999"), GuessResult::Rejected(Rejection::OutOfRange));
        assert_eq!(round.turn(), PlayerId::new(1));
        assert_eq!(round.attempts(PlayerId::new(1)), 0);
    }

    #[test]
    fn test_second_seat_hits_first_try() {
        let mut round = MultiplayerRound::new(EASY, 42, 3, 10);
        round.submit("10");
        round.submit("42");
        assert_eq!(
            round.outcome(),
            Some(MultiplayerOutcome::Winner {
                seat: PlayerId::new(1),
                attempts: 1
            })
        );
        assert_eq!(round.attempts(PlayerId::new(0)), 1);
        assert_eq!(round.attempts(PlayerId::new(2)), 0);
    }

    #[test]
    fn test_every_seat_exhausted() {
        let mut round = MultiplayerRound::new(EASY, 42, 3, 2);
        for guess in ["1", "2", "3", "4", "5"] {
            round.submit(guess);
            assert_eq!(round.outcome(), None);
        }
        round.submit("6");
        assert_eq!(round.outcome(), Some(MultiplayerOutcome::NoWinner { target: 42 }));
        for seat in PlayerId::all(3) {
            assert_eq!(round.attempts(seat), 2);
        }
    }

    #[test]
    fn test_play_multiplayer_names_seats() {
        let players = seats();
        let mut rng = ScriptedRandom::new([42], []);
        let mut console = ScriptedConsole::new(["50", "oops", "42"]);

        let outcome = play_multiplayer(EASY, 10, &players, &mut rng, &mut console).unwrap();

        assert_eq!(
            outcome,
            MultiplayerOutcome::Winner {
                seat: PlayerId::new(1),
                attempts: 1
            }
        );
        let names: Vec<_> = console
            .prompts
            .iter()
            .map(|p| match p {
                Prompt::SeatGuess { player, .. } => player.name().to_string(),
                other => panic!("unexpected prompt {other:?}"),
            })
            .collect();
        assert_eq!(names, vec!["Ala", "Bob", "Bob"]);
    }
}
