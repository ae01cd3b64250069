//! An ordered deck of cards with the front as the top.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{ConfigError, DeckError};

/// An ordered, mutable sequence of cards.
///
/// The front of the deck is the top: [`Deck::draw`] removes from there and
/// [`Deck::add_jokers`] appends to the bottom. A freshly built deck is in
/// canonical order (suit-major, ranks ascending) and stays that way until
/// [`Deck::shuffle`] is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
    source_decks: u8,
}

impl Deck {
    /// Builds `num_decks` concatenated canonical decks, unshuffled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoDecks`] if `num_decks` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_deck::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new(3).unwrap();
    /// assert_eq!(deck.len(), 3 * DECK_SIZE);
    /// ```
    pub fn new(num_decks: u8) -> Result<Self, ConfigError> {
        if num_decks == 0 {
            return Err(ConfigError::NoDecks);
        }

        let mut cards = VecDeque::with_capacity(num_decks as usize * DECK_SIZE);
        for _ in 0..num_decks {
            cards.extend(canonical_cards());
        }

        debug!(num_decks, cards = cards.len(), "built deck");
        Ok(Self {
            cards,
            source_decks: num_decks,
        })
    }

    /// Builds a single canonical deck.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            cards: canonical_cards().collect(),
            source_decks: 1,
        }
    }

    /// Creates a deck holding exactly the given cards, first card on top.
    ///
    /// No duplicate check is performed, which makes this the way to stack a
    /// deck for a known sequence of draws.
    ///
    /// The result always reports one source deck, whatever the cards are.
    /// [`Deck::refresh`] ignores the count anyway, and a [`Game`](crate::Game)
    /// rebuilds from its own options.
    pub fn from_cards<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        Self {
            cards: cards.into_iter().collect(),
            source_decks: 1,
        }
    }

    /// Returns the number of source decks this deck was built from.
    #[must_use]
    pub const fn source_decks(&self) -> u8 {
        self.source_decks
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Iterates over the cards from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Appends `count` jokers to the bottom of the deck.
    pub fn add_jokers(&mut self, count: usize) {
        self.cards.extend(core::iter::repeat_n(Card::joker(), count));
    }

    /// Shuffles the deck in place into a uniformly random permutation.
    ///
    /// The caller owns the random source, so a seeded generator gives a
    /// reproducible order.
    ///
    /// ```
    /// use blackjack_deck::Deck;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut a = Deck::standard();
    /// let mut b = Deck::standard();
    /// a.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    /// b.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    /// assert_eq!(a, b);
    /// assert_ne!(a, Deck::standard());
    /// ```
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.cards.make_contiguous().shuffle(rng);
        debug!(cards = self.cards.len(), "shuffled deck");
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        let card = self.cards.pop_front().ok_or(DeckError::EmptyDeck)?;
        trace!(%card, remaining = self.cards.len(), "drew card");
        Ok(card)
    }

    /// Removes and returns the top `n` cards, top card first.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InsufficientCards`] if fewer than `n` cards
    /// remain. The deck is left untouched in that case.
    pub fn draw_many(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(DeckError::InsufficientCards {
                requested: n,
                remaining,
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Removes every suited card whose rank is in `ranks`.
    ///
    /// Removals accumulate across calls; only [`Deck::refresh`] brings the
    /// ranks back. Jokers are untouched, see [`Deck::remove_jokers`].
    pub fn remove(&mut self, ranks: &[Rank]) {
        self.cards
            .retain(|card| card.rank().is_none_or(|rank| !ranks.contains(&rank)));
    }

    /// Removes every joker.
    pub fn remove_jokers(&mut self) {
        self.cards.retain(|card| !card.is_joker());
    }

    /// Replaces the contents with a fresh canonical single deck.
    ///
    /// This is a full reset: removed ranks come back, jokers are dropped and
    /// the order is canonical, not shuffled.
    pub fn refresh(&mut self) {
        *self = Self::standard();
        debug!("refreshed deck");
    }

    /// Sorts the deck with a caller-supplied comparator. The sort is stable.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Card, &Card) -> Ordering,
    {
        self.cards.make_contiguous().sort_by(compare);
    }

    /// Stable sort by suit, then rank.
    pub fn sort_by_suit(&mut self) {
        self.sort_by(Card::cmp_by_suit);
    }

    /// Stable sort by rank, then suit.
    pub fn sort_by_rank(&mut self) {
        self.sort_by(Card::cmp_by_rank);
    }

    /// Restores canonical order: suit-major, ranks ascending.
    ///
    /// Sorts by rank first, then stably by suit, so copies from multiple
    /// source decks keep their relative order. Jokers end up at the bottom.
    pub fn sort_canonical(&mut self) {
        self.sort_by(|a, b| (a.is_joker(), a.rank()).cmp(&(b.is_joker(), b.rank())));
        self.sort_by(|a, b| (a.is_joker(), a.suit()).cmp(&(b.is_joker(), b.suit())));
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = alloc::collections::vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

fn canonical_cards() -> impl Iterator<Item = Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
}
