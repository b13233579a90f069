//! Deck integration tests.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use cardeck::{DECK_SIZE, Deck, FaceRank, PlayingCard, Rank, SharedDeck, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn canonical_order() -> Vec<PlayingCard> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| (1..=13).map(move |raw| PlayingCard::new(suit, Rank::new(raw).unwrap())))
        .collect()
}

fn card_set(cards: &[PlayingCard]) -> HashSet<PlayingCard> {
    cards.iter().copied().collect()
}

#[test]
fn new_deck_has_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);
    assert!(!deck.is_empty());

    let pairs: HashSet<(Suit, u8)> = deck
        .cards()
        .iter()
        .map(|card| (card.suit, card.rank.value()))
        .collect();
    assert_eq!(pairs.len(), DECK_SIZE);
    for suit in Suit::all() {
        for raw in 1..=13 {
            assert!(pairs.contains(&(suit, raw)), "missing {raw} of {suit}");
        }
    }
}

#[test]
fn new_deck_is_suit_major_rank_minor() {
    let deck = Deck::with_seed(123);
    assert_eq!(deck.cards(), canonical_order().as_slice());

    let suits: Vec<Suit> = deck.cards().chunks(13).map(|chunk| chunk[0].suit).collect();
    assert_eq!(suits, [Suit::Diamond, Suit::Club, Suit::Heart, Suit::Spade]);
}

#[test]
fn first_card_is_ace_of_diamonds() {
    let deck = Deck::new();
    let card = deck.current_card().unwrap();
    assert_eq!(card, PlayingCard::new(Suit::Diamond, Rank::Face(FaceRank::Ace)));
    assert_eq!(card.to_string(), "1 of ♦️");
    assert_eq!(deck.cursor(), 0);
    assert_eq!(deck.remaining(), DECK_SIZE);
}

#[test]
fn draw_card_does_not_advance() {
    let deck = Deck::new();
    let first = deck.draw_card();
    let second = deck.draw_card();
    assert!(first.is_some());
    assert_eq!(first, second);
    assert_eq!(first, deck.current_card());
    assert_eq!(deck.cursor(), 0);
}

#[test]
fn shuffle_keeps_cards_and_rewinds_cursor() {
    let mut deck = Deck::with_seed(42);
    deck.deal();
    deck.deal();
    assert_eq!(deck.cursor(), 2);

    deck.shuffle();
    assert_eq!(deck.cursor(), 0);
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(card_set(deck.cards()), card_set(&canonical_order()));
    assert_ne!(deck.cards(), canonical_order().as_slice());
    assert_eq!(deck.current_card(), deck.cards().first().copied());
}

#[test]
fn same_seed_shuffles_identically() {
    let mut a = Deck::with_seed(7);
    let mut b = Deck::with_seed(7);
    a.shuffle();
    b.shuffle();
    assert_eq!(a.cards(), b.cards());

    a.shuffle();
    b.shuffle();
    assert_eq!(a.cards(), b.cards());

    let mut c = Deck::with_seed(8);
    c.shuffle();
    c.shuffle();
    assert_ne!(a.cards(), c.cards());
}

#[test]
fn shuffle_with_external_rng() {
    let mut deck = Deck::new();
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    deck.deal();
    deck.shuffle_with(&mut rng);
    assert_eq!(deck.cursor(), 0);
    assert_eq!(card_set(deck.cards()).len(), DECK_SIZE);

    let mut again = Deck::new();
    again.shuffle_with(&mut ChaCha8Rng::seed_from_u64(99));
    assert_eq!(deck.cards(), again.cards());
}

#[test]
fn deal_walks_the_deck_in_order() {
    let mut deck = Deck::new();
    let dealt: Vec<PlayingCard> = std::iter::from_fn(|| deck.deal()).collect();
    assert_eq!(dealt, canonical_order());
    assert_eq!(deck.current_card(), None);
    assert_eq!(deck.remaining(), 0);

    deck.reset();
    assert_eq!(deck.remaining(), DECK_SIZE);
    assert_eq!(deck.draw_card(), dealt.first().copied());
}

#[test]
fn shared_deck_deals_each_card_once_across_threads() {
    let deck = Arc::new(SharedDeck::with_seed(5));
    deck.shuffle();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let deck = Arc::clone(&deck);
            thread::spawn(move || (0..13).filter_map(|_| deck.deal()).collect::<Vec<_>>())
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for card in handle.join().unwrap() {
            assert!(seen.insert(card), "dealt twice: {card}");
        }
    }
    assert_eq!(seen.len(), DECK_SIZE);
    assert_eq!(deck.remaining(), 0);
    assert_eq!(deck.draw_card(), None);
}

#[test]
fn shared_deck_exposes_inner_deck() {
    let shared = SharedDeck::from_deck(Deck::new());
    assert_eq!(shared.current_card(), shared.draw_card());
    let len = shared.with_deck(|deck| {
        deck.deal();
        deck.len()
    });
    assert_eq!(len, DECK_SIZE);

    let deck = shared.into_inner();
    assert_eq!(deck.cursor(), 1);
}

#[test]
fn default_decks_shuffle_independently() {
    let mut a = Deck::new();
    let mut b = Deck::default();
    assert_eq!(a.cards(), b.cards());

    a.shuffle();
    b.shuffle();
    assert_ne!(a.cards(), b.cards());
    assert_eq!(card_set(a.cards()), card_set(&canonical_order()));
    assert_eq!(card_set(b.cards()), card_set(&canonical_order()));
    assert_eq!(a.cursor(), 0);
    assert_eq!(b.cursor(), 0);
}

#[test]
fn default_shared_decks_shuffle_independently() {
    let a = SharedDeck::new();
    let b = SharedDeck::default();
    a.shuffle();
    b.shuffle();

    let a = a.into_inner();
    let b = b.into_inner();
    assert_ne!(a.cards(), b.cards());
    assert_eq!(card_set(a.cards()).len(), DECK_SIZE);
}

#[test]
fn shared_deck_debug_shows_inner_deck() {
    let shared = SharedDeck::with_seed(1);
    let rendered = format!("{shared:?}");
    assert!(rendered.starts_with("SharedDeck"), "{rendered}");
    assert!(rendered.contains("cursor: 0"), "{rendered}");
}
