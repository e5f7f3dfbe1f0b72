//! Game configuration types.
//!
//! - `Difficulty`: fixed number ranges (Easy, Normal, Hard)
//! - `Mode`: which side guesses and how turns are scheduled
//! - `Bounds`: a closed integer interval
//! - `FeedbackTokens`: the words a human types to answer the computer
//! - `GameConfig`: combines all tunables, loadable from TOML
//!
//! Difficulty ranges are constants. Everything else can be overridden
//! from a config file or the command line.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::error::ConfigError;
use crate::search::Feedback;

/// Attempts allowed per round (per party in multiplayer, shared in mixed).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Seats in a multiplayer round.
pub const DEFAULT_MULTIPLAYER_SEATS: usize = 3;

/// Closed integer interval `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    /// Create a new interval. `min` must not exceed `max`.
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        assert!(min <= max, "Bounds must satisfy min <= max");
        Self { min, max }
    }

    /// Does the interval contain `value`?
    #[must_use]
    pub const fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Number of integers in the interval.
    #[must_use]
    pub const fn width(&self) -> u64 {
        (self.max - self.min) as u64 + 1
    }

    /// Worst-case bisection steps needed to find any value: ceil(log2(width + 1)).
    #[must_use]
    pub const fn bisection_steps(&self) -> u32 {
        u64::BITS - self.width().leading_zeros()
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Difficulty tier. Each maps to a fixed range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// [0, 100]
    Easy,
    /// [0, 10 000]
    Normal,
    /// [0, 1 000 000]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// The number range for this tier.
    #[must_use]
    pub const fn bounds(self) -> Bounds {
        match self {
            Difficulty::Easy => Bounds::new(0, 100),
            Difficulty::Normal => Bounds::new(0, 10_000),
            Difficulty::Hard => Bounds::new(0, 1_000_000),
        }
    }

    /// Tag used in record keys.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// Menu selection ("1", "2", "3").
    #[must_use]
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Difficulty::Easy),
            "2" => Some(Difficulty::Normal),
            "3" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Game mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Human guesses a number chosen by the program.
    Single,
    /// Program bisects towards a number the human has in mind.
    Reverse,
    /// Human and program alternate turns.
    Mixed,
    /// Three humans take turns on one hidden number.
    MultiPlayer,
}

impl Mode {
    /// Tag used in record keys.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Mode::Single => "single",
            Mode::Reverse => "reverse",
            Mode::Mixed => "multi",
            Mode::MultiPlayer => "multiplayer",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Menu entry: a mode or the quit command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Play(Mode),
    Quit,
}

impl MenuChoice {
    /// Parse a main-menu selection ("1".."4", "0").
    #[must_use]
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(MenuChoice::Play(Mode::Single)),
            "2" => Some(MenuChoice::Play(Mode::Reverse)),
            "3" => Some(MenuChoice::Play(Mode::Mixed)),
            "4" => Some(MenuChoice::Play(Mode::MultiPlayer)),
            "0" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Words the human types to answer the program's guess.
///
/// The round logic only ever sees [`Feedback`]; spelling is configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackTokens {
    /// "Go higher": the guess was too low.
    pub higher: String,
    /// "Go lower": the guess was too high.
    pub lower: String,
    /// The guess is correct.
    pub hit: String,
}

impl Default for FeedbackTokens {
    fn default() -> Self {
        Self {
            higher: "w".to_string(),
            lower: "m".to_string(),
            hit: "t".to_string(),
        }
    }
}

impl FeedbackTokens {
    /// Map a typed answer to feedback. Case-insensitive, surrounding whitespace ignored.
    #[must_use]
    pub fn parse(&self, input: &str) -> Option<Feedback> {
        let input = input.trim();
        if input.eq_ignore_ascii_case(self.hit.trim()) {
            Some(Feedback::Hit)
        } else if input.eq_ignore_ascii_case(self.higher.trim()) {
            Some(Feedback::TooLow)
        } else if input.eq_ignore_ascii_case(self.lower.trim()) {
            Some(Feedback::TooHigh)
        } else {
            None
        }
    }

    /// The same tokens with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            higher: self.higher.trim().to_string(),
            lower: self.lower.trim().to_string(),
            hit: self.hit.trim().to_string(),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Attempt cap for every mode and difficulty.
    pub max_attempts: u32,

    /// Directory holding the record files.
    pub records_dir: PathBuf,

    /// Seed for the hidden-number draw and the mixed-mode coin flip.
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Answer words for the program's guesses.
    pub feedback_tokens: FeedbackTokens,

    /// Number of players in a multiplayer round.
    pub multiplayer_seats: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            records_dir: PathBuf::from("."),
            seed: None,
            feedback_tokens: FeedbackTokens::default(),
            multiplayer_seats: DEFAULT_MULTIPLAYER_SEATS,
        }
    }
}

impl GameConfig {
    /// Load a configuration from a TOML file. Missing keys take defaults.
    #[instrument]
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(path.display().to_string(), format!("cannot read: {e}"))
        })?;
        let config = Self::from_toml(&text).map_err(|e| e.in_file(path))?;
        debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Parse a configuration from TOML text. Feedback tokens are trimmed.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            toml::from_str(text).map_err(|e| ConfigError::new("<inline>", e.to_string()))?;
        config.feedback_tokens = config.feedback_tokens.trimmed();
        config
            .validate()
            .map_err(|reason| ConfigError::new("<inline>", reason))?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("max_attempts must be at least 1".to_string());
        }
        if !(2..=255).contains(&self.multiplayer_seats) {
            return Err("multiplayer_seats must be 2-255".to_string());
        }
        let t = &self.feedback_tokens;
        let words = [t.higher.trim(), t.lower.trim(), t.hit.trim()];
        if words.iter().any(|w| w.is_empty()) {
            return Err("feedback tokens must be non-empty".to_string());
        }
        if words[0].eq_ignore_ascii_case(words[1])
            || words[0].eq_ignore_ascii_case(words[2])
            || words[1].eq_ignore_ascii_case(words[2])
        {
            return Err("feedback tokens must be distinct".to_string());
        }
        Ok(())
    }

    /// Set the attempt cap.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        assert!(max_attempts > 0, "Must allow at least 1 attempt");
        self.max_attempts = max_attempts;
        self
    }

    /// Set the records directory.
    #[must_use]
    pub fn with_records_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.records_dir = dir.into();
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the feedback words.
    #[must_use]
    pub fn with_feedback_tokens(mut self, tokens: FeedbackTokens) -> Self {
        self.feedback_tokens = tokens;
        self
    }

    /// Set the multiplayer seat count.
    #[must_use]
    pub fn with_multiplayer_seats(mut self, seats: usize) -> Self {
        assert!((2..=255).contains(&seats), "Seat count must be 2-255");
        self.multiplayer_seats = seats;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_bounds() {
        assert_eq!(Difficulty::Easy.bounds(), Bounds::new(0, 100));
        assert_eq!(Difficulty::Normal.bounds(), Bounds::new(0, 10_000));
        assert_eq!(Difficulty::Hard.bounds(), Bounds::new(0, 1_000_000));
    }

    #[test]
    fn test_tags() {
        assert_eq!(Mode::Single.tag(), "single");
        assert_eq!(Mode::Reverse.tag(), "reverse");
        assert_eq!(Mode::Mixed.tag(), "multi");
        assert_eq!(Mode::MultiPlayer.tag(), "multiplayer");
        assert_eq!(Difficulty::Easy.tag(), "easy");
        assert_eq!(Difficulty::Normal.tag(), "normal");
        assert_eq!(Difficulty::Hard.tag(), "hard");
    }

    #[test]
    fn test_bisection_steps() {
        assert_eq!(Bounds::new(0, 0).bisection_steps(), 1);
        assert_eq!(Bounds::new(0, 2).bisection_steps(), 2);
        assert_eq!(Difficulty::Easy.bounds().bisection_steps(), 7);
        assert_eq!(Difficulty::Normal.bounds().bisection_steps(), 14);
        // More than the default attempt cap.
        assert_eq!(Difficulty::Hard.bounds().bisection_steps(), 20);
    }

    #[test]
    fn test_bounds_contains() {
        let b = Bounds::new(-5, 5);
        assert!(b.contains(-5));
        assert!(b.contains(5));
        assert!(!b.contains(6));
        assert_eq!(b.width(), 11);
        assert_eq!(format!("{}", b), "-5-5");
    }

    #[test]
    fn test_menu_choices() {
        assert_eq!(MenuChoice::parse(" 1 "), Some(MenuChoice::Play(Mode::Single)));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Play(Mode::MultiPlayer)));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(Difficulty::from_choice("3"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_choice("x"), None);
    }

    #[test]
    fn test_feedback_tokens() {
        let tokens = FeedbackTokens::default();
        assert_eq!(tokens.parse("w"), Some(Feedback::TooLow));
        assert_eq!(tokens.parse(" M "), Some(Feedback::TooHigh));
        assert_eq!(tokens.parse("T"), Some(Feedback::Hit));
        assert_eq!(tokens.parse("x"), None);
        assert_eq!(tokens.parse(""), None);
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::default()
            .with_max_attempts(12)
            .with_seed(7)
            .with_records_dir("scores")
            .with_multiplayer_seats(4);

        assert_eq!(config.max_attempts, 12);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.records_dir, PathBuf::from("scores"));
        assert_eq!(config.multiplayer_seats, 4);
    }

    #[test]
    fn test_config_from_toml_partial() {
        let config = GameConfig::from_toml("seed = 99\n[feedback_tokens]\nhit = \"ok\"\n").unwrap();
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.feedback_tokens.hit, "ok");
        assert_eq!(config.feedback_tokens.higher, "w");
    }

    #[test]
    fn test_config_rejects_bad_values() {
        assert!(GameConfig::from_toml("max_attempts = 0").is_err());
        assert!(GameConfig::from_toml("multiplayer_seats = 1").is_err());
        assert!(GameConfig::from_toml("[feedback_tokens]\nhit = \"w\"").is_err());
        assert!(GameConfig::from_toml("max_attempts = \"ten\"").is_err());

        let err = GameConfig::from_toml("max_attempts = 0").unwrap_err();
        assert_eq!(err.origin, "<inline>");
        assert!(err.reason.contains("max_attempts"));
    }

    #[test]
    fn test_padded_tokens_still_match() {
        let config = GameConfig::from_toml("[feedback_tokens]\nhit = \" ok \"\n").unwrap();
        assert_eq!(config.feedback_tokens.hit, "ok");
        assert_eq!(config.feedback_tokens.parse("ok"), Some(Feedback::Hit));
        assert_eq!(config.feedback_tokens.parse(" OK "), Some(Feedback::Hit));

        let padded = FeedbackTokens {
            higher: " up".to_string(),
            lower: "down ".to_string(),
            hit: " yes ".to_string(),
        };
        assert_eq!(padded.parse("up"), Some(Feedback::TooLow));
        assert_eq!(padded.parse("down"), Some(Feedback::TooHigh));
        assert_eq!(padded.parse("yes"), Some(Feedback::Hit));
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::default().with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must allow at least 1 attempt")]
    fn test_zero_attempts() {
        let _ = GameConfig::default().with_max_attempts(0);
    }
}
