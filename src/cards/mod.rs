//! Card values and the deck factory.
//!
//! ## Key Types
//!
//! - `Card`: Immutable `(Rank, Suit)` pair with derived `Color`
//! - `build_full_deck` / `shuffle`: Canonical 52-card deck and its permutation

pub mod card;
pub mod deck;

pub use card::{Card, Color, Rank, Suit};
pub use deck::{build_full_deck, is_full_deck, shuffle, DECK_SIZE};
