//! Round banner and dealer badge derivation.
//!
//! Never panics; out-of-range round indices produce the game-over
//! sentinel instead of an index error.

use serde::Serialize;

use crate::domain::rules::{cards_for_round, Suit, TOTAL_ROUNDS};

/// Display metadata for the round the game is currently on.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoundBanner {
    /// 1-based round number as shown to spectators.
    pub round_no: usize,
    pub cards: Option<u8>,
    pub suit: Option<Suit>,
    /// Celebratory annotation attached to a couple of specific rounds.
    pub special: Option<&'static str>,
    pub game_over: bool,
}

impl RoundBanner {
    pub fn headline(&self) -> String {
        if self.game_over {
            return "🏁 Game Over!".to_string();
        }
        let cards = self
            .cards
            .map_or_else(|| "—".to_string(), |c| c.to_string());
        let suit = self.suit.map_or("—", Suit::label);
        format!("Round {} | {} Cards | {}", self.round_no, cards, suit)
    }
}

pub fn describe_round(round_index: usize) -> RoundBanner {
    let game_over = round_index >= TOTAL_ROUNDS;
    let special = match round_index {
        9 => Some("Ian's Favourite Round!"),
        4 => Some("Ian's second Favourite Round!"),
        _ => None,
    };

    RoundBanner {
        round_no: round_index + 1,
        cards: cards_for_round(round_index),
        suit: (!game_over).then(|| Suit::for_round(round_index)),
        special,
        game_over,
    }
}

/// Dealer text for the badge, or `None` once no rounds remain.
///
/// The Diamonds/"Dave" substitution is decorative only.
pub fn dealer_badge(round_index: usize, dealer: &str) -> Option<String> {
    if round_index >= TOTAL_ROUNDS || dealer.is_empty() {
        return None;
    }
    if Suit::for_round(round_index) == Suit::Diamonds && dealer == "Dave" {
        return Some("It's...♦️Diamond♦️ Dave!".to_string());
    }
    Some(dealer.to_string())
}
