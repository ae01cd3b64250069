use alloc::vec::Vec;

use rand::Rng;
use tracing::debug;

use crate::card::Card;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::interface::{Interface, RoundEvent};
use crate::player::Decision;

use super::turns::report_finished;
use super::{Game, GameState, Seat, Silent};

/// The dealer's drawing rule.
///
/// The dealer hits below 17 and stands on hard 17 or more. A soft 17 is hit
/// unless `stand_on_soft_17` is set.
///
/// ```
/// use blackjack_deck::{Card, Hand, Rank, Suit, dealer_should_hit};
///
/// let soft_17 = Hand::from_cards(&[
///     Card::new(Suit::Hearts, Rank::Ace),
///     Card::new(Suit::Clubs, Rank::Six),
/// ]);
/// assert!(dealer_should_hit(&soft_17, false));
/// assert!(!dealer_should_hit(&soft_17, true));
/// ```
#[must_use]
pub fn dealer_should_hit(hand: &Hand, stand_on_soft_17: bool) -> bool {
    let value = hand.score();
    value < 17 || (value == 17 && hand.is_soft() && !stand_on_soft_17)
}

impl<R: Rng> Game<R> {
    /// Dealer plays their hand according to the house rule.
    ///
    /// The dealer always plays out the hand once every player is done, even
    /// if all of them busted.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, RoundError> {
        self.dealer_play_with(&mut Silent)
    }

    pub(super) fn dealer_play_with<I>(&mut self, io: &mut I) -> Result<Vec<Card>, RoundError>
    where
        I: Interface + ?Sized,
    {
        if self.state != GameState::DealerTurn {
            return Err(RoundError::InvalidState);
        }

        let mut drawn_cards = Vec::new();

        loop {
            // At 21 the house rule stands, so the loop still reports a stay.
            if report_finished(Seat::Dealer, self, io) && self.dealer.hand().is_bust() {
                break;
            }
            match self.decide(Seat::Dealer, io) {
                Decision::Hit => {
                    let card = self.draw_to(Seat::Dealer)?;
                    let hand = self.dealer.hand();
                    debug!(%card, score = hand.score(), "dealer hits");
                    io.event(&RoundEvent::Hit {
                        player: self.dealer.name(),
                        card,
                        score: hand.score(),
                    });
                    drawn_cards.push(card);
                }
                Decision::Stay => {
                    let score = self.dealer.hand().score();
                    debug!(score, "dealer stands");
                    io.event(&RoundEvent::Stay {
                        player: self.dealer.name(),
                        score,
                    });
                    break;
                }
            }
        }

        self.state = GameState::RoundOver;

        Ok(drawn_cards)
    }
}
