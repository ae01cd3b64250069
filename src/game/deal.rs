use rand::Rng;
use tracing::{debug, warn};

use crate::error::{DealError, RoundError};
use crate::interface::{Interface, RoundEvent};

use super::{Game, GameState, Seat, Silent};

impl<R: Rng> Game<R> {
    /// Deals the initial cards to all players and the dealer.
    ///
    /// Cards go round the table one at a time: each player in seating order,
    /// then the dealer, repeated for every card of the initial deal.
    ///
    /// Jokers are removed from the deck first; they are never dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or the deck cannot
    /// cover the whole deal. Nothing is drawn in either case.
    pub fn deal(&mut self) -> Result<(), RoundError> {
        self.deal_with(&mut Silent)
    }

    pub(super) fn deal_with<I>(&mut self, io: &mut I) -> Result<(), RoundError>
    where
        I: Interface + ?Sized,
    {
        if self.state != GameState::WaitingForDeal {
            return Err(DealError::InvalidState.into());
        }

        let before = self.deck.len();
        self.deck.remove_jokers();
        if self.deck.len() < before {
            warn!(jokers = before - self.deck.len(), "removed jokers before dealing");
        }

        let seats = self.players.len() + 1;
        let needed = seats * usize::from(self.options.initial_cards);
        let remaining = self.deck.len();
        if remaining < needed {
            return Err(DealError::NotEnoughCards { needed, remaining }.into());
        }

        debug!(seats, remaining, "dealing round");
        for _ in 0..self.options.initial_cards {
            for index in 0..self.players.len() {
                self.deal_one(Seat::Player(index), io)?;
            }
            self.deal_one(Seat::Dealer, io)?;
        }

        self.current = 0;
        self.state = GameState::PlayerTurn;
        self.settle_current(io);

        Ok(())
    }

    fn deal_one<I>(&mut self, seat: Seat, io: &mut I) -> Result<(), RoundError>
    where
        I: Interface + ?Sized,
    {
        let card = self.draw_to(seat)?;
        io.event(&RoundEvent::Dealt {
            player: self.seat(seat).name(),
            card,
        });
        Ok(())
    }
}
