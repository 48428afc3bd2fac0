//! Move legality rules.
//!
//! One pure predicate per destination kind:
//! - Tableau: alternating colors, descending by one
//! - Free cell: empty only
//! - Foundation: same suit, ascending by one from the Ace
//!
//! `GameState` consults these before every transfer but they never touch the
//! board themselves.

pub mod legality;

pub use legality::{
    accepts, accepts_onto_foundation, accepts_onto_free_cell, accepts_onto_tableau,
    check_placement,
};
