//! Injected randomness for hidden-number draws and coin flips.
//!
//! Rounds never construct their own RNG. They take a `RandomSource`,
//! so tests can script the hidden number and the starting party.
//!
//! ```
//! use number_guess::core::{Bounds, GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let bounds = Bounds::new(0, 100);
//! let value = rng.draw(bounds);
//! assert!(bounds.contains(value));
//!
//! // Same seed, same sequence.
//! let mut again = GameRng::new(42);
//! assert_eq!(again.draw(bounds), value);
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::Bounds;

/// Source of randomness for a round.
pub trait RandomSource {
    /// Uniformly draw an integer in `bounds` (inclusive).
    fn draw(&mut self, bounds: Bounds) -> i64;

    /// Fair coin flip.
    fn coin_flip(&mut self) -> bool;
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seeded if `seed` is given, otherwise from entropy.
    #[must_use]
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// The seed this RNG started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn draw(&mut self, bounds: Bounds) -> i64 {
        self.inner.gen_range(bounds.min..=bounds.max)
    }

    fn coin_flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }
}

/// Randomness replayed from fixed lists.
///
/// Draws are clamped into the requested bounds. When a list runs out,
/// draws fall back to `bounds.min` and flips to `false`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<i64>,
    flips: VecDeque<bool>,
}

impl ScriptedRandom {
    /// Script the hidden numbers and coin flips, in order.
    pub fn new(
        draws: impl IntoIterator<Item = i64>,
        flips: impl IntoIterator<Item = bool>,
    ) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            flips: flips.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn draw(&mut self, bounds: Bounds) -> i64 {
        self.draws
            .pop_front()
            .map_or(bounds.min, |v| v.clamp(bounds.min, bounds.max))
    }

    fn coin_flip(&mut self) -> bool {
        self.flips.pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);
        let bounds = Bounds::new(0, 1_000_000);

        for _ in 0..100 {
            assert_eq!(rng1.draw(bounds), rng2.draw(bounds));
            assert_eq!(rng1.coin_flip(), rng2.coin_flip());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);
        let bounds = Bounds::new(0, 1_000_000);

        let seq1: Vec<_> = (0..10).map(|_| rng1.draw(bounds)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.draw(bounds)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_draw_is_inclusive() {
        let mut rng = GameRng::new(7);
        let bounds = Bounds::new(0, 1);
        let mut seen = [false; 2];
        for _ in 0..200 {
            let v = rng.draw(bounds);
            assert!(bounds.contains(v));
            seen[v as usize] = true;
        }
        assert_eq!(seen, [true, true]);

        let single = Bounds::new(5, 5);
        assert_eq!(rng.draw(single), 5);
    }

    #[test]
    fn test_coin_flip_takes_both_sides() {
        let mut rng = GameRng::new(42);
        let flips: Vec<bool> = (0..64).map(|_| rng.coin_flip()).collect();
        assert!(flips.contains(&true));
        assert!(flips.contains(&false));
    }

    #[test]
    fn test_from_seed_or_entropy() {
        assert_eq!(GameRng::from_seed_or_entropy(Some(9)).seed(), 9);
        let bounds = Bounds::new(0, 100);
        let mut rng = GameRng::from_seed_or_entropy(None);
        assert!(bounds.contains(rng.draw(bounds)));
    }

    #[test]
    fn test_scripted_random() {
        let mut rng = ScriptedRandom::new([42, 500, -3], [true]);
        let easy = Bounds::new(0, 100);
        assert_eq!(rng.draw(easy), 42);
        assert_eq!(rng.draw(easy), 100);
        assert_eq!(rng.draw(easy), 0);
        assert_eq!(rng.draw(easy), 0);
        assert!(rng.coin_flip());
        assert!(!rng.coin_flip());
    }
}
