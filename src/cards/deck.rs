//! Deck construction and shuffling.

use rustc_hash::FxHashSet;

use super::card::{Card, Rank, Suit};
use crate::core::rng::GameRng;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Build the 52-card deck in canonical order.
///
/// Suits follow `Suit::ALL`; within a suit, ranks run Ace to King.
/// The result is always the same.
#[must_use]
pub fn build_full_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::all().map(move |rank| Card::new(rank, suit)))
        .collect()
}

/// Return a uniformly random permutation of `deck`.
#[must_use]
pub fn shuffle(mut deck: Vec<Card>, rng: &mut GameRng) -> Vec<Card> {
    rng.shuffle(&mut deck);
    deck
}

/// Check that `cards` is exactly one full deck: 52 cards, no duplicates.
pub fn is_full_deck<'a>(cards: impl IntoIterator<Item = &'a Card>) -> bool {
    let mut seen = FxHashSet::default();
    for card in cards {
        if !seen.insert(*card) {
            return false;
        }
    }
    seen.len() == DECK_SIZE
}
