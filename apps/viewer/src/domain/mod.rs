//! Domain layer: pure scoreboard types and derivation helpers.

pub mod banner;
pub mod ranking;
pub mod reconcile;
pub mod rules;
pub mod scoreboard;
pub mod view;

#[cfg(test)]
mod tests_reconcile;
#[cfg(test)]
mod tests_view;

// Re-exports for ergonomics
pub use reconcile::{reconcile, Reconciled};
pub use rules::{Suit, ROSTER, TOTAL_ROUNDS};
pub use scoreboard::{GameSnapshot, RoundEntry, RoundScores, Scoreboard};
