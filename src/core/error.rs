//! Error types.
//!
//! `MoveError` is a recoverable rejection: the attempted move is dropped and
//! the board is untouched. Internal invariant violations are panics, not
//! `MoveError`s.

use crate::cards::Card;

use super::config::ZoneId;

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// Source and destination are the same zone.
    SameZone(ZoneId),
    /// The id does not name a zone on this board.
    UnknownZone(ZoneId),
    /// Cards never leave a foundation.
    FoundationSource(ZoneId),
    /// Nothing to move.
    EmptySource(ZoneId),
    /// Tableau needs opposite color and rank one lower than its top.
    TableauMismatch { card: Card, onto: Card },
    /// Free cell already holds a card.
    FreeCellOccupied(ZoneId),
    /// Only an Ace may start a foundation.
    FoundationNeedsAce { card: Card },
    /// Foundation needs same suit and rank one higher than its top.
    FoundationMismatch { card: Card, onto: Card },
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::SameZone(id) => write!(f, "cannot move {} onto itself", id),
            MoveError::UnknownZone(id) => write!(f, "no such zone: {}", id),
            MoveError::FoundationSource(id) => {
                write!(f, "cards cannot be taken from foundation {}", id)
            }
            MoveError::EmptySource(id) => write!(f, "{} is empty", id),
            MoveError::TableauMismatch { card, onto } => {
                write!(f, "{} cannot be placed on {} in the tableau", card, onto)
            }
            MoveError::FreeCellOccupied(id) => write!(f, "free cell {} is occupied", id),
            MoveError::FoundationNeedsAce { card } => {
                write!(f, "{} cannot start a foundation", card)
            }
            MoveError::FoundationMismatch { card, onto } => {
                write!(f, "{} cannot be placed on {} in a foundation", card, onto)
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Invalid configuration value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    InvalidValue { key: &'static str, value: String },
    /// The board needs at least one tableau column to deal into.
    NoTableauColumns,
    /// Zone ids are `u16`, so the whole board must fit in that range.
    TooManyZones { total: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value for {}: {:?}", key, value)
            }
            ConfigError::NoTableauColumns => f.write_str("at least one tableau column is required"),
            ConfigError::TooManyZones { total } => {
                write!(f, "board needs {} zones, at most {} are supported", total, u16::MAX)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
