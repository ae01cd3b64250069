//! Hand scoring and the hand held by a player or the dealer.

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Rank};

/// Score above which a hand is bust.
pub const BLACKJACK: u8 = 21;

// Extra points an ace is worth when counted as 11 instead of 1.
const SOFT_ACE_BONUS: u8 = 10;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut has_ace = false;

    for card in cards {
        // Jokers never reach a dealt hand; they add nothing if they do.
        let Some(rank) = card.rank() else {
            continue;
        };
        if rank == Rank::Ace {
            has_ace = true;
        }
        value = value.saturating_add(rank.value());
    }

    if has_ace && value <= BLACKJACK - SOFT_ACE_BONUS {
        (value + SOFT_ACE_BONUS, true)
    } else {
        (value, false)
    }
}

/// Returns the best blackjack score for `cards`.
///
/// Face cards count 10 and aces count 1, except that a single ace is promoted
/// to 11 when that does not take the total past 21. The result does not
/// depend on the order of the cards.
///
/// ```
/// use blackjack_deck::{Card, Rank, Suit, hand::score};
///
/// let soft = [Card::new(Suit::Hearts, Rank::Ace), Card::new(Suit::Clubs, Rank::Six)];
/// assert_eq!(score(&soft), 17);
///
/// let hard = [
///     Card::new(Suit::Hearts, Rank::Ace),
///     Card::new(Suit::Clubs, Rank::Six),
///     Card::new(Suit::Spades, Rank::King),
/// ];
/// assert_eq!(score(&hard), 17);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether [`score`] counts one ace in `cards` as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// An ordered hand of cards.
///
/// A hand only grows by appending dealt cards and is cleared between rounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand.
    ///
    /// A joker is accepted but adds nothing to the score.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn score(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Returns whether the hand is worth exactly 21.
    #[must_use]
    pub fn is_twenty_one(&self) -> bool {
        self.score() == BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
