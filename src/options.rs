//! Game configuration options.

use crate::error::ConfigError;

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_deck::GameOptions;
///
/// let options = GameOptions::default()
///     .with_players(3)
///     .with_decks(2)
///     .with_reshuffle_threshold(30);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of non-dealer players.
    pub players: u8,
    /// Number of source decks combined into the playing deck.
    pub decks: u8,
    /// Cards dealt to every seat at the start of a round.
    pub initial_cards: u8,
    /// The deck is rebuilt between rounds once fewer cards than this remain.
    pub reshuffle_threshold: usize,
    /// Whether the dealer stands on soft 17. The house rule is to hit it.
    pub stand_on_soft_17: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: 1,
            decks: 1,
            initial_cards: 2,
            reshuffle_threshold: 15,
            stand_on_soft_17: false,
        }
    }
}

impl GameOptions {
    /// Sets the number of non-dealer players.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_deck::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(4);
    /// assert_eq!(options.players, 4);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_deck::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of cards each seat receives in the initial deal.
    #[must_use]
    pub const fn with_initial_cards(mut self, cards: u8) -> Self {
        self.initial_cards = cards;
        self
    }

    /// Sets the remaining-card count below which the deck is rebuilt.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_deck::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_threshold(0);
    /// assert_eq!(options.reshuffle_threshold, 0);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets whether the dealer stands on soft 17.
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Checks that the options describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no players, no decks, or the initial deal
    /// is zero cards.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.players == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if self.decks == 0 {
            return Err(ConfigError::NoDecks);
        }
        if self.initial_cards == 0 {
            return Err(ConfigError::NoInitialCards);
        }
        Ok(())
    }
}
