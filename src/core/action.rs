//! Move intents.
//!
//! A `MoveIntent` names a source and a destination zone. It is produced by the
//! input decoder (or a test), handed to `GameState::apply`, and discarded
//! whatever the outcome.

use serde::{Deserialize, Serialize};

use super::config::ZoneId;

/// A requested single-card move.
///
/// ```
/// use fourcell::core::{MoveIntent, ZoneId};
///
/// let intent = MoveIntent::new(ZoneId::new(0), ZoneId::new(12));
/// assert_eq!(intent.from, ZoneId::new(0));
/// assert!(!intent.is_same_zone());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveIntent {
    /// Zone whose top card moves.
    pub from: ZoneId,

    /// Zone that receives it.
    pub to: ZoneId,
}

impl MoveIntent {
    #[must_use]
    pub const fn new(from: ZoneId, to: ZoneId) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub fn is_same_zone(&self) -> bool {
        self.from == self.to
    }
}

impl std::fmt::Display for MoveIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
