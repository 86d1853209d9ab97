use serde::{Deserialize, Serialize};

pub const PLAYERS: usize = 4;

/// Display roster. Order drives column order and the ranking tie-break.
pub const ROSTER: [&str; PLAYERS] = ["Campbell", "Russell", "Nathan", "Dave"];

pub const TOTAL_ROUNDS: usize = 13;

// Card schedule: 7 down to 1, then 2 back up to 7. Total 13 rounds.
pub const CARD_SCHEDULE: [u8; TOTAL_ROUNDS] = [7, 6, 5, 4, 3, 2, 1, 2, 3, 4, 5, 6, 7];

/// Cards dealt in the given (0-based) round, or `None` past the schedule.
pub fn cards_for_round(round_index: usize) -> Option<u8> {
    CARD_SCHEDULE.get(round_index).copied()
}

/// Trump suit for a round. The cycle repeats every five rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Clubs,
    Diamonds,
    Spades,
    NoTrumps,
}

pub const SUIT_CYCLE: [Suit; 5] = [
    Suit::Hearts,
    Suit::Clubs,
    Suit::Diamonds,
    Suit::Spades,
    Suit::NoTrumps,
];

impl Suit {
    /// Suit for the given (0-based) round index. Total: cycles past the
    /// end of the schedule rather than failing.
    pub fn for_round(round_index: usize) -> Suit {
        SUIT_CYCLE[round_index % SUIT_CYCLE.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts ♥️",
            Suit::Clubs => "Clubs ♣️",
            Suit::Diamonds => "Diamonds ♦️",
            Suit::Spades => "Spades ♠️",
            Suit::NoTrumps => "No Trumps 🙅🏻",
        }
    }
}
