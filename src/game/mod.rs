//! Round resolver: dealing, turns, the dealer's play and showdown.

use alloc::format;
use alloc::vec::Vec;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::card::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::error::{ConfigError, DeckError, RoundError};
use crate::interface::{HIT_OR_STAY_PROMPT, Interface};
use crate::options::GameOptions;
use crate::player::{Decision, Player, Role};
use crate::result::RoundResult;

mod deal;
mod dealer;
mod showdown;
pub mod state;
mod turns;

pub use dealer::dealer_should_hit;
pub(crate) use state::Seat;
pub use state::GameState;

/// Most cards one seat can hold before reaching 21 or busting:
/// four aces, four twos and three threes.
pub const MAX_CARDS_PER_SEAT: usize = 11;

/// A blackjack table: the deck, the players, the dealer and the round flow.
///
/// The game owns its random source. Build it from a seed with [`Game::new`]
/// for reproducible rounds, or hand over any [`Rng`] with [`Game::with_rng`].
pub struct Game<R = ChaCha8Rng> {
    /// Game options.
    options: GameOptions,
    /// Cards left to deal.
    deck: Deck,
    /// Non-dealer players in seating order.
    players: Vec<Player>,
    /// The dealer.
    dealer: Player,
    /// Current game state.
    state: GameState,
    /// Index of the player whose turn it is.
    current: usize,
    /// Random number generator.
    rng: R,
}

impl Game<ChaCha8Rng> {
    /// Creates a new game with a shuffled deck, seeded for reproducibility.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid, see
    /// [`GameOptions::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_deck::{DECK_SIZE, Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default().with_players(2), 42).unwrap();
    /// assert_eq!(game.players().len(), 2);
    /// assert_eq!(game.cards_remaining(), DECK_SIZE);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new game whose random source is seeded from the operating
    /// system.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn from_entropy(options: GameOptions) -> Result<Self, ConfigError> {
        Self::with_rng(options, ChaCha8Rng::from_os_rng())
    }
}

impl<R: Rng> Game<R> {
    /// Creates a new game drawing randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    pub fn with_rng(options: GameOptions, mut rng: R) -> Result<Self, ConfigError> {
        options.validate()?;

        let mut deck = Deck::new(options.decks)?;
        deck.shuffle(&mut rng);

        let players = (1..=options.players)
            .map(|seat| Player::new(format!("Player {seat}")))
            .collect();

        debug!(players = options.players, decks = options.decks, "new game");
        Ok(Self {
            options,
            deck,
            players,
            dealer: Player::dealer(),
            state: GameState::WaitingForDeal,
            current: 0,
            rng,
        })
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the non-dealer players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Player {
        &self.dealer
    }

    /// Returns the player whose turn it is, if any.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        if self.state == GameState::PlayerTurn {
            self.players.get(self.current)
        } else {
            None
        }
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the deck for direct manipulation, such as stacking it.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the card count below which the deck is rebuilt between rounds.
    ///
    /// This is the configured threshold, raised so that every seat at the
    /// table can draw [`MAX_CARDS_PER_SEAT`] cards, and capped at the size of
    /// a full shoe.
    #[must_use]
    pub fn reshuffle_threshold(&self) -> usize {
        let seats = self.players.len() + 1;
        let shoe = usize::from(self.options.decks) * DECK_SIZE;
        self.options
            .reshuffle_threshold
            .max(seats * MAX_CARDS_PER_SEAT)
            .min(shoe)
    }

    /// Returns whether the deck has fallen below the reshuffle threshold.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.deck.len() < self.reshuffle_threshold()
    }

    /// Discards the deck and replaces it with a freshly built, shuffled one.
    #[expect(
        clippy::missing_panics_doc,
        reason = "deck count is validated when the game is created"
    )]
    pub fn reshuffle(&mut self) {
        let mut deck = Deck::new(self.options.decks)
            .expect("deck count was validated when the game was created");
        deck.shuffle(&mut self.rng);
        self.deck = deck;
        debug!(cards = self.deck.len(), "reshuffled");
    }

    /// Clears every hand and prepares for the next deal.
    ///
    /// If the deck has fallen below the reshuffle threshold it is rebuilt and
    /// shuffled. Returns `true` when that happened.
    pub fn reset_for_next_round(&mut self) -> bool {
        for player in &mut self.players {
            player.hand_mut().clear();
        }
        self.dealer.hand_mut().clear();
        self.current = 0;
        self.state = GameState::WaitingForDeal;

        if self.needs_reshuffle() {
            self.reshuffle();
            true
        } else {
            false
        }
    }

    /// Plays a full round: deal, player turns, dealer turn, showdown.
    ///
    /// Each player's hit/stay decision comes from `io`, and every event is
    /// reported to it. Call [`Game::reset_for_next_round`] afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or the deck runs
    /// out. Either is fatal for the round.
    pub fn play_round<I>(&mut self, io: &mut I) -> Result<RoundResult, RoundError>
    where
        I: Interface + ?Sized,
    {
        self.deal_with(io)?;

        while self.state == GameState::PlayerTurn {
            match self.decide(Seat::Player(self.current), io) {
                Decision::Hit => {
                    self.hit_with(io)?;
                }
                Decision::Stay => self.stay_with(io)?,
            }
        }

        self.dealer_play_with(io)?;
        self.showdown_with(io)
    }

    /// Picks the next move for a seat.
    ///
    /// Players are asked through the I/O boundary; the dealer applies the
    /// house rule.
    fn decide<I>(&self, seat: Seat, io: &mut I) -> Decision
    where
        I: Interface + ?Sized,
    {
        let player = self.seat(seat);
        match player.role() {
            Role::Player => io.choose(player, HIT_OR_STAY_PROMPT),
            Role::Dealer => {
                if dealer_should_hit(player.hand(), self.options.stand_on_soft_17) {
                    Decision::Hit
                } else {
                    Decision::Stay
                }
            }
        }
    }

    fn seat(&self, seat: Seat) -> &Player {
        match seat {
            Seat::Player(index) => &self.players[index],
            Seat::Dealer => &self.dealer,
        }
    }

    fn seat_mut(&mut self, seat: Seat) -> &mut Player {
        match seat {
            Seat::Player(index) => &mut self.players[index],
            Seat::Dealer => &mut self.dealer,
        }
    }

    /// Draws a card from the deck into a seat's hand.
    ///
    /// Jokers are never dealt: any joker on top of the deck is discarded.
    fn draw_to(&mut self, seat: Seat) -> Result<Card, DeckError> {
        let card = loop {
            let card = self.deck.draw().inspect_err(|err| {
                warn!(%err, "deck ran out mid-round");
            })?;
            if !card.is_joker() {
                break card;
            }
            warn!("discarding joker drawn mid-round");
        };
        self.seat_mut(seat).hand_mut().push(card);
        Ok(card)
    }
}

/// An [`Interface`] for the step methods, which take no input.
struct Silent;

impl Interface for Silent {
    fn choose(&mut self, _player: &Player, _prompt: &str) -> Decision {
        Decision::Stay
    }
}
