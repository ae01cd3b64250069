//! A playing-card deck engine and blackjack round resolver with optional
//! `no_std` support.
//!
//! The crate provides a [`Deck`] of [`Card`]s, blackjack hand scoring in
//! [`hand::score`], and a [`Game`] type that deals a round, runs the
//! players' hit/stay turns through an [`Interface`], plays the dealer's hand
//! and settles every player against the dealer.
//!
//! # Example
//!
//! ```
//! use blackjack_deck::{Decision, Game, GameOptions, Interface, Player};
//!
//! struct AlwaysStay;
//!
//! impl Interface for AlwaysStay {
//!     fn choose(&mut self, _player: &Player, _prompt: &str) -> Decision {
//!         Decision::Stay
//!     }
//! }
//!
//! let mut game = Game::new(GameOptions::default().with_players(2), 42).unwrap();
//! let result = game.play_round(&mut AlwaysStay).unwrap();
//! assert_eq!(result.players.len(), 2);
//! game.reset_for_next_round();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod interface;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ConfigError, DealError, DeckError, RoundError};
pub use game::{Game, GameState, MAX_CARDS_PER_SEAT, dealer_should_hit};
pub use hand::Hand;
pub use interface::{HIT_OR_STAY_PROMPT, Interface, RoundEvent};
pub use options::GameOptions;
pub use player::{Decision, ParseDecisionError, Player, Role};
pub use result::{Outcome, PlayerResult, RoundResult, resolve_outcome};
