//! Merging a fetched snapshot with the session's cached scoreboard.
//!
//! The merge upholds two invariants: the round count never shrinks
//! between ticks, and a settled entry (score present) never changes.

use crate::domain::rules::ROSTER;
use crate::domain::scoreboard::{empty_round, GameSnapshot, Scoreboard};

/// Outcome of one reconcile pass.
///
/// `display` is what gets rendered this tick. `cache` is what the
/// session keeps for the next one: source-provided scoreboards plus any
/// all-empty padding rounds. Guess overlays are transient and never
/// persist into the cache.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Reconciled {
    pub display: Scoreboard,
    pub cache: Scoreboard,
}

pub fn reconcile(cached: &Scoreboard, snapshot: &GameSnapshot) -> Reconciled {
    // A non-empty scores_by_round from the source always wins; otherwise
    // work on a copy of the cache so later edits cannot alias into it.
    let mut board: Scoreboard = match snapshot.scores_by_round.as_deref() {
        Some(rounds) if !rounds.is_empty() => rounds.to_vec(),
        _ => cached.clone(),
    };

    // Guesses only apply to a non-negative round index.
    let overlay_round = snapshot
        .guesses
        .as_ref()
        .and_then(|_| usize::try_from(snapshot.round_num).ok());

    // The source may have advanced past what was cached. Padding carries
    // no data, so it is kept in the cache; round counts stay monotone.
    if let Some(round) = overlay_round {
        while board.len() <= round {
            board.push(empty_round());
        }
    }

    let cache = board.clone();
    let mut display = board;

    if let (Some(guesses), Some(round)) = (&snapshot.guesses, overlay_round) {
        let current = &mut display[round];
        for player in ROSTER {
            let entry = current.entry(player.to_string()).or_default();
            // Settled entries are immutable; only unsettled ones take guesses.
            if entry.score.is_none() {
                entry.guess = guesses.get(player).copied().flatten();
            }
        }
    }

    Reconciled { display, cache }
}
