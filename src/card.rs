//! Card types and orderings.

use core::cmp::Ordering;
use core::fmt;

/// Card suit.
///
/// Suits are ordered the way a fresh deck lays them out:
/// Hearts, Diamonds, Clubs, Spades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, ordered Ace low through King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the hard blackjack value of the rank.
    ///
    /// Aces count 1 here; promoting one ace to 11 is a property of the whole
    /// hand, see [`crate::hand::score`].
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Jokers carry no suit and no blackjack value. They exist for deck utilities
/// only and never reach a hand dealt by [`crate::Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    /// A regular card with a suit and a rank.
    Suited {
        /// The suit of the card.
        suit: Suit,
        /// The rank of the card.
        rank: Rank,
    },
    /// A joker.
    Joker,
}

impl Card {
    /// Creates a new suited card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self::Suited { suit, rank }
    }

    /// Creates a joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self::Joker
    }

    /// Returns the suit, or `None` for a joker.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        match self {
            Self::Suited { suit, .. } => Some(*suit),
            Self::Joker => None,
        }
    }

    /// Returns the rank, or `None` for a joker.
    #[must_use]
    pub const fn rank(&self) -> Option<Rank> {
        match self {
            Self::Suited { rank, .. } => Some(*rank),
            Self::Joker => None,
        }
    }

    /// Returns whether the card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self, Self::Joker)
    }

    /// Orders cards by suit, then by rank. Jokers sort last.
    ///
    /// ```
    /// use blackjack_deck::{Card, Rank, Suit};
    /// use core::cmp::Ordering;
    ///
    /// let king_of_hearts = Card::new(Suit::Hearts, Rank::King);
    /// let ace_of_spades = Card::new(Suit::Spades, Rank::Ace);
    /// assert_eq!(king_of_hearts.cmp_by_suit(&ace_of_spades), Ordering::Less);
    /// ```
    #[must_use]
    pub fn cmp_by_suit(&self, other: &Self) -> Ordering {
        self.suit_key().cmp(&other.suit_key())
    }

    /// Orders cards by rank, then by suit. Jokers sort last.
    #[must_use]
    pub fn cmp_by_rank(&self, other: &Self) -> Ordering {
        self.rank_key().cmp(&other.rank_key())
    }

    // `None` sorts before `Some`, so jokers are mapped to a flag that puts them last.
    const fn suit_key(&self) -> (bool, Option<Suit>, Option<Rank>) {
        (self.is_joker(), self.suit(), self.rank())
    }

    const fn rank_key(&self) -> (bool, Option<Rank>, Option<Suit>) {
        (self.is_joker(), self.rank(), self.suit())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Suited { suit, rank } => write!(f, "{rank} of {suit}"),
            Self::Joker => f.write_str("Joker"),
        }
    }
}

/// Number of cards per deck, jokers excluded.
pub const DECK_SIZE: usize = 52;
