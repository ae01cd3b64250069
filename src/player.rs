//! Players, the dealer, and hit/stay decisions.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::hand::Hand;

/// Whether a seat is played by a person or by the dealer's fixed policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// A player whose decisions come from the I/O boundary.
    Player,
    /// The dealer, who follows the house drawing rule.
    Dealer,
}

/// A seat at the table: a name, a hand and a role.
///
/// Players persist across rounds; only their hand is reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Hand,
    role: Role,
}

impl Player {
    /// Creates a non-dealer player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            role: Role::Player,
        }
    }

    /// Creates the dealer with an empty hand.
    #[must_use]
    pub fn dealer() -> Self {
        Self {
            name: String::from("Dealer"),
            hand: Hand::new(),
            role: Role::Dealer,
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns whether this seat is the dealer.
    #[must_use]
    pub fn is_dealer(&self) -> bool {
        self.role == Role::Dealer
    }
}

/// A hit-or-stay decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Take another card.
    Hit,
    /// End the turn.
    Stay,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit => f.write_str("hit"),
            Self::Stay => f.write_str("stay"),
        }
    }
}

/// Error returned when a token is neither "hit" nor "stay".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("you can only choose hit or stay")]
pub struct ParseDecisionError;

impl FromStr for Decision {
    type Err = ParseDecisionError;

    /// Parses a token after trimming and lowercasing it.
    ///
    /// ```
    /// use blackjack_deck::Decision;
    ///
    /// assert_eq!(" Hit\n".parse::<Decision>(), Ok(Decision::Hit));
    /// assert_eq!("STAY".parse::<Decision>(), Ok(Decision::Stay));
    /// assert!("hti".parse::<Decision>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("hit") || token.eq_ignore_ascii_case("h") {
            Ok(Self::Hit)
        } else if token.eq_ignore_ascii_case("stay")
            || token.eq_ignore_ascii_case("stand")
            || token.eq_ignore_ascii_case("s")
        {
            Ok(Self::Stay)
        } else {
            Err(ParseDecisionError)
        }
    }
}
