//! # fourcell
//!
//! A FreeCell engine: a 52-card deck split across tableau columns, free cells
//! and foundations, and the rules deciding which single-card moves are legal.
//!
//! ## Design Principles
//!
//! 1. **One owner**: `GameState` owns every zone. Front ends read it and submit
//!    `MoveIntent`s; they never mutate piles.
//!
//! 2. **Atomic moves**: A move is validated in full before anything is popped.
//!    A rejected move leaves the board untouched.
//!
//! 3. **Injected randomness**: Deals come from a seeded `GameRng`, so any deal
//!    can be replayed.
//!
//! ## Modules
//!
//! - `cards`: Card values and the deck factory
//! - `core`: Zone ids, configuration, RNG, move intents, errors, game state
//! - `zones`: Piles and the zone manager
//! - `rules`: Placement predicates per zone kind
//! - `input`: Key bindings and the two-key move decoder
//! - `view`: Read model and text rendering

pub mod cards;
pub mod core;
pub mod input;
pub mod rules;
pub mod view;
pub mod zones;

// Re-export commonly used types
pub use crate::cards::{build_full_deck, shuffle, Card, Color, Rank, Suit};

pub use crate::core::{
    ConfigError, GameConfig, GameRng, GameState, MoveError, MoveIntent, ZoneId, ZoneKind,
    ZoneLayout,
};

pub use crate::zones::{Zone, ZoneManager};

pub use crate::rules::{accepts, accepts_onto_foundation, accepts_onto_free_cell, accepts_onto_tableau};

pub use crate::input::{KeyBindings, MoveDecoder};

pub use crate::view::{BoardView, CardView, SlotView};
