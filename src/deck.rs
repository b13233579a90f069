//! A 52-card deck with a draw cursor.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{DECK_SIZE, PlayingCard, Suit};
use crate::rank::Rank;

/// Seed used by [`Deck::new`] and [`Deck::default`] when no OS entropy is
/// available (`std` disabled).
#[cfg(not(feature = "std"))]
pub const DEFAULT_SEED: u64 = 0;

/// An ordered deck of 52 playing cards.
///
/// A fresh deck holds every suit and rank exactly once, suit-major in
/// [`Suit::ALL`] order with raw ranks `1..=13` inside each suit. The deck
/// owns its generator: [`Deck::new`] seeds it from OS entropy, while two
/// decks built with the same [`Deck::with_seed`] seed shuffle identically.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<PlayingCard>,
    cursor: usize,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a deck in canonical order whose shuffles draw on OS entropy.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_os_rng())
    }

    /// Creates a deck in canonical order using [`DEFAULT_SEED`].
    #[cfg(not(feature = "std"))]
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Creates a deck in canonical order whose shuffles are driven by `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::Deck;
    ///
    /// let deck = Deck::with_seed(42);
    /// assert_eq!(deck.len(), cardeck::DECK_SIZE);
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            cards: Self::create_cards(),
            cursor: 0,
            rng,
        }
    }

    fn create_cards() -> Vec<PlayingCard> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::all() {
            for raw in Rank::ALL_RAW {
                if let Ok(rank) = Rank::new(raw) {
                    cards.push(PlayingCard::new(suit, rank));
                }
            }
        }

        cards
    }

    /// Returns the card under the cursor, or `None` past the end.
    #[must_use]
    pub fn current_card(&self) -> Option<PlayingCard> {
        self.cards.get(self.cursor).copied()
    }

    /// Returns the card under the cursor without moving it.
    ///
    /// Repeated calls return the same card until the deck is shuffled,
    /// reset, or advanced with [`Deck::deal`].
    #[must_use]
    pub fn draw_card(&self) -> Option<PlayingCard> {
        self.current_card()
    }

    /// Returns the card under the cursor and moves the cursor forward.
    ///
    /// Returns `None` once every card has been dealt.
    pub fn deal(&mut self) -> Option<PlayingCard> {
        let card = self.current_card()?;
        self.cursor += 1;
        Some(card)
    }

    /// Shuffles the cards with the deck's own generator and rewinds the cursor.
    pub fn shuffle(&mut self) {
        self.cursor = 0;
        self.cards.shuffle(&mut self.rng);
    }

    /// Shuffles the cards with a caller-supplied generator and rewinds the cursor.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cursor = 0;
        self.cards.shuffle(rng);
    }

    /// Moves the cursor back to the first card without reordering.
    pub const fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Returns the cursor position.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the number of cards at or after the cursor.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.cursor)
    }

    /// Returns the total number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in their current order.
    #[must_use]
    pub fn cards(&self) -> &[PlayingCard] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
