//! Final-standings computation.

use serde::Serialize;

/// One row of the final standings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RankedPlayer {
    pub rank: usize,
    pub player: String,
    pub score: i32,
}

/// Standard competition ranking ("1224"): tied players share a rank and
/// the next distinct score takes its 1-based position in the sorted
/// order, so a two-way tie for first is followed by rank 3.
///
/// `totals` must be in roster order. The sort is stable, which makes
/// roster order the tie-break between equal scores.
pub fn rank(totals: &[(String, i32)]) -> Vec<RankedPlayer> {
    let mut sorted: Vec<&(String, i32)> = totals.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    let mut standings = Vec::with_capacity(sorted.len());
    let mut last_score: Option<i32> = None;
    let mut current_rank = 0;
    for (position, (player, score)) in sorted.into_iter().enumerate() {
        if last_score != Some(*score) {
            current_rank = position + 1;
        }
        standings.push(RankedPlayer {
            rank: current_rank,
            player: player.clone(),
            score: *score,
        });
        last_score = Some(*score);
    }
    standings
}
