//! Bisection over a closed integer interval driven by ternary feedback.
//!
//! ```
//! use number_guess::search::{Feedback, RangeBisector};
//!
//! let mut bisector = RangeBisector::new(0, 100);
//! assert_eq!(bisector.propose(), Some(50));
//!
//! bisector.narrow(50, Feedback::TooHigh);
//! assert_eq!(bisector.propose(), Some(24));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Bounds;

/// Answer to a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feedback {
    /// The guess is above the hidden value.
    TooHigh,
    /// The guess is below the hidden value.
    TooLow,
    /// The guess equals the hidden value.
    Hit,
}

impl Feedback {
    /// Truthful feedback for `guess` against `target`.
    #[must_use]
    pub fn compare(guess: i64, target: i64) -> Self {
        match guess.cmp(&target) {
            std::cmp::Ordering::Greater => Feedback::TooHigh,
            std::cmp::Ordering::Less => Feedback::TooLow,
            std::cmp::Ordering::Equal => Feedback::Hit,
        }
    }
}

/// Candidate interval `[low, high]` plus the terminal hit, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeBisector {
    low: i64,
    high: i64,
    found: Option<i64>,
}

impl RangeBisector {
    /// Start with the full interval `[low, high]`.
    #[must_use]
    pub fn new(low: i64, high: i64) -> Self {
        Self {
            low,
            high,
            found: None,
        }
    }

    /// Start from a difficulty's bounds.
    #[must_use]
    pub fn from_bounds(bounds: Bounds) -> Self {
        Self::new(bounds.min, bounds.max)
    }

    /// Current lower end.
    #[must_use]
    pub fn low(&self) -> i64 {
        self.low
    }

    /// Current upper end.
    #[must_use]
    pub fn high(&self) -> i64 {
        self.high
    }

    /// The value confirmed by a `Hit`, if any.
    #[must_use]
    pub fn found(&self) -> Option<i64> {
        self.found
    }

    /// No candidates left: the feedback so far was contradictory.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.low > self.high
    }

    /// Next guess: `floor((low + high) / 2)`.
    ///
    /// `None` once the interval is empty or a hit has been recorded.
    #[must_use]
    pub fn propose(&self) -> Option<i64> {
        if self.is_empty() || self.found.is_some() {
            None
        } else {
            Some((self.low + self.high).div_euclid(2))
        }
    }

    /// Apply feedback for `guess`. Ignored after a hit.
    pub fn narrow(&mut self, guess: i64, feedback: Feedback) {
        if self.found.is_some() {
            return;
        }
        match feedback {
            Feedback::TooHigh => self.high = guess - 1,
            Feedback::TooLow => self.low = guess + 1,
            Feedback::Hit => self.found = Some(guess),
        }
    }
}
