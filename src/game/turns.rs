use rand::Rng;

use crate::card::Card;
use crate::error::RoundError;
use crate::interface::{Interface, RoundEvent};

use super::{Game, GameState, Seat, Silent};

impl<R: Rng> Game<R> {
    /// Current player action: hit (draw a card).
    ///
    /// A hand that reaches 21 or busts ends the turn, and play moves to the
    /// next player, or to the dealer after the last one.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not a player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, RoundError> {
        self.hit_with(&mut Silent)
    }

    /// Current player action: stay (keep the current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not a player's turn.
    pub fn stay(&mut self) -> Result<(), RoundError> {
        self.stay_with(&mut Silent)
    }

    pub(super) fn hit_with<I>(&mut self, io: &mut I) -> Result<Card, RoundError>
    where
        I: Interface + ?Sized,
    {
        if self.state != GameState::PlayerTurn {
            return Err(RoundError::InvalidState);
        }

        let seat = Seat::Player(self.current);
        let card = self.draw_to(seat)?;
        let player = self.seat(seat);
        io.event(&RoundEvent::Hit {
            player: player.name(),
            card,
            score: player.hand().score(),
        });

        self.settle_current(io);
        Ok(card)
    }

    pub(super) fn stay_with<I>(&mut self, io: &mut I) -> Result<(), RoundError>
    where
        I: Interface + ?Sized,
    {
        if self.state != GameState::PlayerTurn {
            return Err(RoundError::InvalidState);
        }

        let player = &self.players[self.current];
        io.event(&RoundEvent::Stay {
            player: player.name(),
            score: player.hand().score(),
        });

        self.advance(io);
        Ok(())
    }

    /// Ends the current player's turn if their hand leaves no choice.
    pub(super) fn settle_current<I>(&mut self, io: &mut I)
    where
        I: Interface + ?Sized,
    {
        if self.state == GameState::PlayerTurn && report_finished(Seat::Player(self.current), self, io)
        {
            self.advance(io);
        }
    }

    /// Moves to the next player who still has a choice, or to the dealer.
    fn advance<I>(&mut self, io: &mut I)
    where
        I: Interface + ?Sized,
    {
        self.current += 1;
        while self.current < self.players.len() {
            if !report_finished(Seat::Player(self.current), self, io) {
                return;
            }
            self.current += 1;
        }
        self.state = GameState::DealerTurn;
    }
}

/// Reports a hand at 21 or over and returns whether the seat's turn is over.
pub(super) fn report_finished<R, I>(seat: Seat, game: &Game<R>, io: &mut I) -> bool
where
    R: Rng,
    I: Interface + ?Sized,
{
    let player = game.seat(seat);
    let hand = player.hand();
    if hand.is_bust() {
        io.event(&RoundEvent::Bust {
            player: player.name(),
            score: hand.score(),
        });
        true
    } else if hand.is_twenty_one() {
        io.event(&RoundEvent::TwentyOne {
            player: player.name(),
        });
        true
    } else {
        false
    }
}
