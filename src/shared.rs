//! A deck that can be shared across threads.

use crate::card::PlayingCard;
use crate::deck::Deck;
use crate::sync::Lock;

/// A [`Deck`] behind a lock.
///
/// Every call takes the lock for its whole duration, so concurrent
/// shuffles and deals never observe a half-shuffled deck.
///
/// # Example
///
/// ```
/// use cardeck::SharedDeck;
///
/// let deck = SharedDeck::with_seed(9);
/// deck.shuffle();
/// assert!(deck.deal().is_some());
/// assert_eq!(deck.remaining(), 51);
/// ```
#[derive(Debug)]
pub struct SharedDeck {
    deck: Lock<Deck>,
}

impl SharedDeck {
    /// Creates a shared deck in canonical order. See [`Deck::new`].
    #[must_use]
    pub fn new() -> Self {
        Self::from_deck(Deck::new())
    }

    /// Creates a shared deck in canonical order, shuffled by `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_deck(Deck::with_seed(seed))
    }

    /// Wraps an existing deck.
    #[must_use]
    pub const fn from_deck(deck: Deck) -> Self {
        Self {
            deck: Lock::new(deck),
        }
    }

    /// See [`Deck::current_card`].
    #[must_use]
    pub fn current_card(&self) -> Option<PlayingCard> {
        self.deck.with(|deck| deck.current_card())
    }

    /// See [`Deck::draw_card`].
    #[must_use]
    pub fn draw_card(&self) -> Option<PlayingCard> {
        self.deck.with(|deck| deck.draw_card())
    }

    /// See [`Deck::deal`].
    pub fn deal(&self) -> Option<PlayingCard> {
        self.deck.with(Deck::deal)
    }

    /// See [`Deck::shuffle`].
    pub fn shuffle(&self) {
        self.deck.with(Deck::shuffle);
    }

    /// See [`Deck::remaining`].
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.deck.with(|deck| deck.remaining())
    }

    /// Runs `f` with exclusive access to the deck.
    pub fn with_deck<R>(&self, f: impl FnOnce(&mut Deck) -> R) -> R {
        self.deck.with(f)
    }

    /// Unwraps the deck.
    #[must_use]
    pub fn into_inner(self) -> Deck {
        self.deck.into_inner()
    }
}

impl Default for SharedDeck {
    fn default() -> Self {
        Self::new()
    }
}
