//! Input decoding: keys in, move intents out.

pub mod decoder;

pub use decoder::{KeyBindings, MoveDecoder, FOUNDATION_KEYS, FREE_CELL_KEYS, TABLEAU_KEYS};
