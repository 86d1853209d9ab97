//! View-model derivation from the reconciled scoreboard.
//!
//! Everything here is a pure function of the scoreboard plus the
//! snapshot's round/dealer header; the render surfaces (HTML page, JSON
//! route) only format what this module produces.

use serde::Serialize;

use crate::domain::banner::{dealer_badge, describe_round, RoundBanner};
use crate::domain::ranking::{rank, RankedPlayer};
use crate::domain::rules::{cards_for_round, Suit, ROSTER, TOTAL_ROUNDS};
use crate::domain::scoreboard::{GameSnapshot, RoundScores, Scoreboard};

/// One player's pair of cells in a table row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PlayerCells {
    pub guess: Option<u8>,
    pub score: Option<i16>,
}

/// One scoreboard row: a played (or padded) round.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableRow {
    /// "{cards} {suit}", e.g. "7 Hearts ♥️".
    pub label: String,
    /// Cells in roster order.
    pub cells: Vec<PlayerCells>,
}

/// Rows = rounds seen so far; the totals line is the trailing row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoreTable {
    pub players: Vec<String>,
    pub rows: Vec<TableRow>,
    /// Running totals in roster order; absent scores count as zero.
    pub totals: Vec<i32>,
}

/// A bid surfaced on the current-round panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PendingGuess {
    pub player: String,
    pub guess: u8,
}

/// Post-game summary: winner line plus the full ranked list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FinalStandings {
    pub winner: String,
    pub winner_score: i32,
    pub standings: Vec<RankedPlayer>,
}

/// Everything a render surface needs for one tick.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameView {
    pub banner: RoundBanner,
    /// Dealer badge text; `None` once no rounds remain.
    pub dealer: Option<String>,
    pub table: ScoreTable,
    /// Current-round bids, present only while the round is unscored.
    pub pending_guesses: Option<Vec<PendingGuess>>,
    /// Present once the scoreboard covers the whole schedule.
    pub outcome: Option<FinalStandings>,
}

/// True iff the round has at least one bid in and no score settled yet.
/// Once scoring begins the panel is suppressed.
pub fn should_show_guesses(round: &RoundScores) -> bool {
    round.values().any(|entry| entry.guess.is_some())
        && round.values().all(|entry| entry.score.is_none())
}

pub fn derive_view(scoreboard: &Scoreboard, snapshot: &GameSnapshot) -> GameView {
    let round_index = usize::try_from(snapshot.round_num).unwrap_or(0);

    let rows: Vec<TableRow> = scoreboard
        .iter()
        .enumerate()
        .map(|(i, round)| TableRow {
            label: row_label(i),
            cells: ROSTER
                .iter()
                .map(|player| {
                    let entry = round.get(*player).copied().unwrap_or_default();
                    PlayerCells {
                        guess: entry.guess,
                        score: entry.score,
                    }
                })
                .collect(),
        })
        .collect();

    let totals: Vec<(String, i32)> = ROSTER
        .iter()
        .map(|player| {
            let total = scoreboard
                .iter()
                .filter_map(|round| round.get(*player))
                .filter_map(|entry| entry.score)
                .map(i32::from)
                .sum();
            ((*player).to_string(), total)
        })
        .collect();

    let pending_guesses = scoreboard
        .get(round_index)
        .filter(|round| should_show_guesses(round))
        .map(|round| {
            ROSTER
                .iter()
                .filter_map(|player| {
                    let guess = round.get(*player).and_then(|entry| entry.guess)?;
                    Some(PendingGuess {
                        player: (*player).to_string(),
                        guess,
                    })
                })
                .collect()
        });

    let outcome = (scoreboard.len() >= TOTAL_ROUNDS).then(|| {
        let standings = rank(&totals);
        // rank() never returns an empty list for the fixed roster.
        let winner = standings
            .first()
            .cloned()
            .unwrap_or_else(|| RankedPlayer {
                rank: 1,
                player: String::new(),
                score: 0,
            });
        FinalStandings {
            winner: winner.player,
            winner_score: winner.score,
            standings,
        }
    });

    GameView {
        banner: describe_round(round_index),
        dealer: dealer_badge(round_index, &snapshot.dealer),
        table: ScoreTable {
            players: ROSTER.iter().map(|p| (*p).to_string()).collect(),
            rows,
            totals: totals.into_iter().map(|(_, total)| total).collect(),
        },
        pending_guesses,
        outcome,
    }
}

fn row_label(round_index: usize) -> String {
    match cards_for_round(round_index) {
        Some(cards) => format!("{} {}", cards, Suit::for_round(round_index).label()),
        // Rounds padded past the schedule still get a row.
        None => "—".to_string(),
    }
}
