//! The boundary between the round resolver and whatever talks to people.

use crate::card::Card;
use crate::player::{Decision, Player};
use crate::result::Outcome;

/// Prompt shown to a player whose turn it is.
pub const HIT_OR_STAY_PROMPT: &str = "Would you like to Hit or Stay? ";

/// Something that happened during a round, reported in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent<'a> {
    /// A card was dealt during the initial deal.
    Dealt {
        /// Name of the seat receiving the card.
        player: &'a str,
        /// The card dealt.
        card: Card,
    },
    /// A seat hit and drew a card.
    Hit {
        /// Name of the seat.
        player: &'a str,
        /// The card drawn.
        card: Card,
        /// Score after the draw.
        score: u8,
    },
    /// A seat stayed.
    Stay {
        /// Name of the seat.
        player: &'a str,
        /// Final score.
        score: u8,
    },
    /// A seat reached exactly 21 and stands automatically.
    ///
    /// A player's turn ends here. The dealer follows it with a
    /// [`RoundEvent::Stay`], as for any other total it stands on.
    TwentyOne {
        /// Name of the seat.
        player: &'a str,
    },
    /// A seat went over 21.
    Bust {
        /// Name of the seat.
        player: &'a str,
        /// Final score.
        score: u8,
    },
    /// A player's result against the dealer.
    Outcome {
        /// Name of the player.
        player: &'a str,
        /// The outcome.
        outcome: Outcome,
        /// The player's final score.
        player_score: u8,
        /// The dealer's final score.
        dealer_score: u8,
    },
}

/// Callbacks from [`Game::play_round`](crate::Game::play_round) into the I/O layer.
pub trait Interface {
    /// Asks `player` to hit or stay.
    ///
    /// Blocks until a valid decision is available. Unrecognised input is the
    /// implementor's business: re-prompt until the token parses as a
    /// [`Decision`].
    fn choose(&mut self, player: &Player, prompt: &str) -> Decision;

    /// Reports a round event. The default implementation ignores it.
    fn event(&mut self, event: &RoundEvent<'_>) {
        let _ = event;
    }
}
