//! Terminal results of each round type.

use crate::core::PlayerId;

use super::console::Party;

/// Phase of a guessing round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    AwaitingGuess,
    Hit,
    Exhausted,
}

impl RoundPhase {
    /// Hit or Exhausted.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundPhase::AwaitingGuess)
    }
}

/// Result of a single or reverse round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Found after `attempts` accepted guesses (1..=max).
    Hit { attempts: u32 },
    /// Attempts or candidates ran out.
    Exhausted,
}

impl RoundOutcome {
    /// Attempt count if the number was found.
    #[must_use]
    pub fn attempts(self) -> Option<u32> {
        match self {
            RoundOutcome::Hit { attempts } => Some(attempts),
            RoundOutcome::Exhausted => None,
        }
    }
}

/// Result of a mixed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MixedOutcome {
    /// `winner` hit on its `attempts`-th turn.
    Won { winner: Party, attempts: u32 },
    /// Shared cap reached, or the computer ran out of candidates.
    NoWinner,
}

impl MixedOutcome {
    /// Only a human hit counts as a win; anything else is a loss.
    #[must_use]
    pub fn is_human_win(self) -> bool {
        matches!(
            self,
            MixedOutcome::Won {
                winner: Party::Human,
                ..
            }
        )
    }
}

/// Result of a multiplayer round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MultiplayerOutcome {
    Winner { seat: PlayerId, attempts: u32 },
    NoWinner { target: i64 },
}

/// Input that was refused without consuming an attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    NotANumber,
    OutOfRange,
}

/// Outcome of submitting one line as a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessResult {
    /// Free retry.
    Rejected(Rejection),
    /// Consumed an attempt.
    Accepted(crate::search::Feedback),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_outcome_attempts() {
        assert_eq!(RoundOutcome::Hit { attempts: 4 }.attempts(), Some(4));
        assert_eq!(RoundOutcome::Exhausted.attempts(), None);
    }

    #[test]
    fn test_mixed_outcome_human_win() {
        let human = MixedOutcome::Won {
            winner: Party::Human,
            attempts: 2,
        };
        let computer = MixedOutcome::Won {
            winner: Party::Computer,
            attempts: 2,
        };
        assert!(human.is_human_win());
        assert!(!computer.is_human_win());
        assert!(!MixedOutcome::NoWinner.is_human_win());
    }

    #[test]
    fn test_phase_terminal() {
        assert!(!RoundPhase::AwaitingGuess.is_terminal());
        assert!(RoundPhase::Hit.is_terminal());
        assert!(RoundPhase::Exhausted.is_terminal());
    }
}
