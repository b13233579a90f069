//! Suits, playing cards, and deck size.

use core::fmt;

use crate::rank::Rank;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Hearts.
    Heart,
    /// Spades.
    Spade,
}

impl Suit {
    /// All suits in deck construction order.
    pub const ALL: [Self; 4] = [Self::Diamond, Self::Club, Self::Heart, Self::Spade];

    /// Returns an iterator over the suits in deck construction order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// Returns the display glyph for the suit.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Diamond => "♦️",
            Self::Club => "♣️",
            Self::Heart => "❤️",
            Self::Spade => "♠️",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayingCard {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl PlayingCard {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for PlayingCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.value(), self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
