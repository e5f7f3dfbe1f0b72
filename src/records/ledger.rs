//! Read-modify-write helpers on top of a [`RecordStore`].

use tracing::{info, instrument};

use crate::core::{Difficulty, Mode, Player, RecordError};
use crate::rounds::MixedOutcome;

use super::key::MixedStats;
use super::store::RecordStore;

/// What happened to the stored best after a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BestUpdate {
    /// `attempts` was strictly lower (or there was no record) and is now stored.
    NewBest { previous: Option<u32> },
    /// The stored best was equal or lower and is unchanged.
    Kept { best: u32 },
}

/// Store `attempts` if it beats the stored best. Fewer attempts is better.
#[instrument(skip(store))]
pub fn update_best<S: RecordStore + ?Sized>(
    store: &mut S,
    player: &Player,
    mode: Mode,
    difficulty: Difficulty,
    attempts: u32,
) -> Result<BestUpdate, RecordError> {
    let previous = store.load_best(player, mode, difficulty);
    match previous {
        Some(best) if best <= attempts => Ok(BestUpdate::Kept { best }),
        _ => {
            store.save_best(player, mode, difficulty, attempts)?;
            info!(?previous, attempts, "New best score");
            Ok(BestUpdate::NewBest { previous })
        }
    }
}

/// Fold a mixed-round outcome into the tally: a human hit is a win,
/// a computer hit or no winner is a loss. Returns the new tally.
///
/// On a write failure nothing is stored and the error is returned.
#[instrument(skip(store))]
pub fn record_mixed<S: RecordStore + ?Sized>(
    store: &mut S,
    player: &Player,
    difficulty: Difficulty,
    outcome: MixedOutcome,
) -> Result<MixedStats, RecordError> {
    let stats = store.load_stats(player, difficulty);
    let updated = if outcome.is_human_win() {
        stats.with_win()
    } else {
        stats.with_loss()
    };
    store.save_stats(player, difficulty, updated)?;
    info!(wins = updated.wins, losses = updated.losses, "Mixed tally updated");
    Ok(updated)
}
