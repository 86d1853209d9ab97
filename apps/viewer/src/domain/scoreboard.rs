//! Scoreboard types and the upstream snapshot payload.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::rules::ROSTER;

/// One player's cell in one round.
///
/// Both fields absent: the round has not been reached. Guess present,
/// score absent: bids are in but the round is still being played. Score
/// present: the round is settled and the entry must never change again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEntry {
    #[serde(default)]
    pub guess: Option<u8>,
    #[serde(default)]
    pub score: Option<i16>,
}

/// Per-round mapping from player name to entry.
pub type RoundScores = BTreeMap<String, RoundEntry>;

/// Ordered round history; index 0 is the first round.
pub type Scoreboard = Vec<RoundScores>;

/// A round with every roster player present and nothing filled in.
pub fn empty_round() -> RoundScores {
    ROSTER
        .iter()
        .map(|player| ((*player).to_string(), RoundEntry::default()))
        .collect()
}

/// One fetched payload from the scoring service, possibly partial.
///
/// Every field is optional on the wire; absent fields degrade to their
/// defaults instead of failing the decode.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    #[serde(default)]
    pub round_num: i64,
    #[serde(default)]
    pub dealer: String,
    #[serde(default)]
    pub guesses: Option<BTreeMap<String, Option<u8>>>,
    #[serde(default)]
    pub scores_by_round: Option<Scoreboard>,
}
