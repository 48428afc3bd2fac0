//! Core engine types: ids, configuration, RNG, moves, errors, state.
//!
//! `GameState` is the only owner of the board; everything else here is a
//! value type it is built from or returns.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use action::MoveIntent;
pub use config::{GameConfig, ZoneId, ZoneKind, ZoneLayout};
pub use error::{ConfigError, MoveError};
pub use rng::GameRng;
pub use state::GameState;
