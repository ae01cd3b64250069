//! Error types for deck and game operations.

use thiserror::Error;

/// Errors raised when a deck or game is configured with unusable values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// At least one source deck is required.
    #[error("invalid configuration: at least one deck is required")]
    NoDecks,
    /// At least one non-dealer player is required.
    #[error("invalid configuration: at least one player is required")]
    NoPlayers,
    /// The initial deal must hand out at least one card per seat.
    #[error("invalid configuration: the initial deal must be at least one card")]
    NoInitialCards,
}

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck has no cards left.
    #[error("the deck is empty")]
    EmptyDeck,
    /// A bulk draw asked for more cards than remain.
    #[error("requested {requested} cards but only {remaining} remain")]
    InsufficientCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is already in progress.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck to complete the initial deal.
    #[error("not enough cards in the deck: {needed} needed, {remaining} remaining")]
    NotEnoughCards {
        /// Cards the initial deal requires.
        needed: usize,
        /// Cards left in the deck.
        remaining: usize,
    },
}

/// Errors that end a round early.
///
/// Every variant is fatal for the current round. Call
/// [`Game::reset_for_next_round`](crate::Game::reset_for_next_round) before
/// starting another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The requested step does not match the current game state.
    #[error("invalid game state for this step")]
    InvalidState,
    /// The initial deal failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// The deck ran out mid-round.
    #[error(transparent)]
    Deck(#[from] DeckError),
}
