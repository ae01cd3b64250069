//! Round result types for showdown.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::hand::BLACKJACK;

/// Result of a player's hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher score).
    Win,
    /// Player loses (player busts or dealer has the higher score).
    Loss,
    /// Equal scores.
    Push,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win => f.write_str("Win"),
            Self::Loss => f.write_str("Loss"),
            Self::Push => f.write_str("Push"),
        }
    }
}

/// Compares a finished player score with the dealer's.
///
/// A player bust loses even when the dealer also busts. A dealer bust is a
/// win for any player still standing. Otherwise the higher score wins.
///
/// ```
/// use blackjack_deck::{Outcome, resolve_outcome};
///
/// assert_eq!(resolve_outcome(20, 19), Outcome::Win);
/// assert_eq!(resolve_outcome(22, 18), Outcome::Loss);
/// assert_eq!(resolve_outcome(18, 18), Outcome::Push);
/// ```
#[must_use]
pub const fn resolve_outcome(player_score: u8, dealer_score: u8) -> Outcome {
    if player_score > BLACKJACK {
        Outcome::Loss
    } else if dealer_score > BLACKJACK || player_score > dealer_score {
        Outcome::Win
    } else if player_score == dealer_score {
        Outcome::Push
    } else {
        Outcome::Loss
    }
}

/// Result for a single player after showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player's name.
    pub name: String,
    /// The player's final score.
    pub score: u8,
    /// Whether the player busted.
    pub bust: bool,
    /// The outcome against the dealer.
    pub outcome: Outcome,
}

/// Result of the entire round after showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player, in seating order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}
