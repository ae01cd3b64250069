use alloc::string::ToString;
use alloc::vec::Vec;

use rand::Rng;
use tracing::debug;

use crate::error::RoundError;
use crate::interface::{Interface, RoundEvent};
use crate::result::{PlayerResult, RoundResult, resolve_outcome};

use super::{Game, GameState, Silent};

impl<R: Rng> Game<R> {
    /// Compares every player's hand with the dealer's.
    ///
    /// Hands are left in place; [`Game::reset_for_next_round`] clears them.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state.
    pub fn showdown(&self) -> Result<RoundResult, RoundError> {
        self.showdown_with(&mut Silent)
    }

    pub(super) fn showdown_with<I>(&self, io: &mut I) -> Result<RoundResult, RoundError>
    where
        I: Interface + ?Sized,
    {
        if self.state != GameState::RoundOver {
            return Err(RoundError::InvalidState);
        }

        let dealer = self.dealer.hand();
        let dealer_score = dealer.score();
        let dealer_bust = dealer.is_bust();

        let mut players = Vec::with_capacity(self.players.len());
        for player in &self.players {
            let hand = player.hand();
            let score = hand.score();
            let outcome = resolve_outcome(score, dealer_score);

            io.event(&RoundEvent::Outcome {
                player: player.name(),
                outcome,
                player_score: score,
                dealer_score,
            });

            players.push(PlayerResult {
                name: player.name().to_string(),
                score,
                bust: hand.is_bust(),
                outcome,
            });
        }

        debug!(dealer_score, dealer_bust, "round settled");
        Ok(RoundResult {
            players,
            dealer_score,
            dealer_bust,
        })
    }
}
