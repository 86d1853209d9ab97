//! One fetch-reconcile-derive cycle per request.

use tracing::debug;

use crate::domain::reconcile::reconcile;
use crate::domain::view::{derive_view, GameView};
use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::upstream::client::FetchOutcome;

/// Shown while the scoring service has nothing for this game yet.
pub const WAITING_MESSAGE: &str = "Welcome to the game, contender. Waiting for scores...";

/// What a render surface gets back from one tick.
#[derive(Clone, Debug, PartialEq)]
pub enum TickOutcome {
    View(Box<GameView>),
    /// The source answered 404: no data yet, try again next tick.
    AwaitingScores,
}

/// Run one full cycle for a game: fetch the snapshot, reconcile it with
/// the session cache, swap the cache, derive the view artifacts.
///
/// Fetch failures abort the cycle and leave the cache untouched; the
/// next tick retries from the same state.
pub async fn run_tick(state: &AppState, game_id: &str) -> Result<TickOutcome, AppError> {
    let snapshot = match state.source.fetch(game_id).await? {
        FetchOutcome::Snapshot(snapshot) => snapshot,
        FetchOutcome::NotStarted => {
            debug!(game_id, "no scores published yet");
            return Ok(TickOutcome::AwaitingScores);
        }
    };

    let cached = state.sessions.get(game_id).unwrap_or_default();
    let merged = reconcile(&cached, &snapshot);
    state.sessions.insert(game_id.to_string(), merged.cache);

    debug!(
        game_id,
        round_num = snapshot.round_num,
        rounds = merged.display.len(),
        "tick reconciled"
    );

    Ok(TickOutcome::View(Box::new(derive_view(
        &merged.display,
        &snapshot,
    ))))
}
