//! Record keys and the text format stored under them.
//!
//! - Best score: `<player>_<difficulty>_<mode>.txt`, content `<attempts>`
//! - Mixed stats: `<player>_<difficulty>_multi_stats.txt`, content `wins=<w>;losses=<l>`
//!
//! Player names are escaped so every name maps to a distinct, portable file
//! name: ASCII alphanumerics and `-` pass through, `.` passes through except
//! in first position, and every other byte becomes `_XX` (uppercase hex).

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, Mode, Player};

/// Win/loss tally for mixed rounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MixedStats {
    pub wins: u32,
    pub losses: u32,
}

impl MixedStats {
    #[must_use]
    pub const fn new(wins: u32, losses: u32) -> Self {
        Self { wins, losses }
    }

    /// One more win.
    #[must_use]
    pub fn with_win(self) -> Self {
        Self {
            wins: self.wins.saturating_add(1),
            ..self
        }
    }

    /// One more loss.
    #[must_use]
    pub fn with_loss(self) -> Self {
        Self {
            losses: self.losses.saturating_add(1),
            ..self
        }
    }
}

/// Escape a player name for use in a file name.
#[must_use]
pub fn escape_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, byte) in name.bytes().enumerate() {
        let keep = byte.is_ascii_alphanumeric() || byte == b'-' || (byte == b'.' && i > 0);
        if keep {
            out.push(byte as char);
        } else {
            let _ = write!(out, "_{byte:02X}");
        }
    }
    out
}

/// Key for a best-score record.
#[must_use]
pub fn best_key(player: &Player, mode: Mode, difficulty: Difficulty) -> String {
    format!(
        "{}_{}_{}.txt",
        escape_name(player.name()),
        difficulty.tag(),
        mode.tag()
    )
}

/// Key for a mixed-mode stats record.
#[must_use]
pub fn stats_key(player: &Player, difficulty: Difficulty) -> String {
    format!(
        "{}_{}_{}_stats.txt",
        escape_name(player.name()),
        difficulty.tag(),
        Mode::Mixed.tag()
    )
}

/// Parse a best-score record. Anything but a positive integer is "no record".
#[must_use]
pub fn parse_best(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|&n| n > 0)
}

/// Format a best-score record.
#[must_use]
pub fn format_best(attempts: u32) -> String {
    attempts.to_string()
}

/// Parse a stats record. Unknown or malformed fields are skipped; missing ones are 0.
#[must_use]
pub fn parse_stats(text: &str) -> MixedStats {
    let mut stats = MixedStats::default();
    for part in text.trim().split(';') {
        let Some((key, value)) = part.split_once('=') else {
            continue;
        };
        let Ok(value) = value.trim().parse::<u32>() else {
            continue;
        };
        match key.trim() {
            "wins" => stats.wins = value,
            "losses" => stats.losses = value,
            _ => {}
        }
    }
    stats
}

/// Format a stats record.
#[must_use]
pub fn format_stats(stats: MixedStats) -> String {
    format!("wins={};losses={}", stats.wins, stats.losses)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str) -> Player {
        Player::new(name).unwrap()
    }

    #[test]
    fn test_best_key_layout() {
        assert_eq!(
            best_key(&player("ala"), Mode::Single, Difficulty::Easy),
            "ala_easy_single.txt"
        );
        assert_eq!(
            best_key(&player("ala"), Mode::Reverse, Difficulty::Hard),
            "ala_hard_reverse.txt"
        );
        assert_eq!(stats_key(&player("ala"), Difficulty::Normal), "ala_normal_multi_stats.txt");
    }

    #[test]
    fn test_escape_name() {
        assert_eq!(escape_name("Zoe-2.b"), "Zoe-2.b");
        assert_eq!(escape_name("a b"), "a_20b");
        assert_eq!(escape_name("../x"), "_2E._2Fx");
        assert_eq!(escape_name("a_b"), "a_5Fb");
        assert_eq!(escape_name("Łukasz"), "_C5_81ukasz");
    }

    #[test]
    fn test_escape_is_injective_on_lookalikes() {
        let names = ["a_20b", "a b", "a/b", "a_2Fb"];
        let escaped: std::collections::HashSet<_> = names.iter().map(|n| escape_name(n)).collect();
        assert_eq!(escaped.len(), names.len());
    }

    #[test]
    fn test_parse_best() {
        assert_eq!(parse_best("5"), Some(5));
        assert_eq!(parse_best(" 7\n"), Some(7));
        assert_eq!(parse_best("0"), None);
        assert_eq!(parse_best("-3"), None);
        assert_eq!(parse_best("five"), None);
        assert_eq!(parse_best(""), None);
        assert_eq!(parse_best(&format_best(9)), Some(9));
    }

    #[test]
    fn test_parse_stats() {
        assert_eq!(parse_stats("wins=3;losses=4"), MixedStats::new(3, 4));
        assert_eq!(parse_stats("losses=4;wins=3\n"), MixedStats::new(3, 4));
        assert_eq!(parse_stats("wins=3"), MixedStats::new(3, 0));
        assert_eq!(parse_stats("wins=x;losses=2;draws=1"), MixedStats::new(0, 2));
        assert_eq!(parse_stats("garbage"), MixedStats::default());
        assert_eq!(parse_stats(&format_stats(MixedStats::new(1, 2))), MixedStats::new(1, 2));
    }

    #[test]
    fn test_stats_increments() {
        let stats = MixedStats::new(1, 1).with_win().with_loss().with_loss();
        assert_eq!(stats, MixedStats::new(2, 3));
    }
}
