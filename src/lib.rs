//! A playing-card model with optional `no_std` support.
//!
//! The crate provides [`Suit`], [`Rank`], and [`PlayingCard`] value types and
//! a [`Deck`] that is built in canonical order and shuffled with a seeded
//! generator.
//!
//! # Example
//!
//! ```
//! use cardeck::Deck;
//!
//! let mut deck = Deck::with_seed(42);
//! let first = deck.current_card().map(|card| card.to_string());
//! assert_eq!(first.as_deref(), Some("1 of ♦️"));
//!
//! deck.shuffle();
//! assert_eq!(deck.cursor(), 0);
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
pub mod rank;
pub mod shared;
mod sync;

// Re-export main types
pub use card::{DECK_SIZE, PlayingCard, Suit};
pub use deck::Deck;
#[cfg(not(feature = "std"))]
pub use deck::DEFAULT_SEED;
pub use error::RankError;
pub use rank::{FaceRank, NumericRank, Rank};
pub use shared::SharedDeck;
