//! Placement rules, one per destination kind.
//!
//! Every predicate is a pure function of the candidate card and a snapshot of
//! the destination zone, so each can be tested against a bare `Zone`.

use crate::cards::Card;
use crate::core::config::ZoneKind;
use crate::core::error::MoveError;
use crate::zones::Zone;

/// Tableau: anything onto an empty column, otherwise opposite color and one
/// rank lower than the top.
#[must_use]
pub fn accepts_onto_tableau(card: Card, column: &Zone) -> bool {
    match column.top() {
        None => true,
        Some(top) => card.color() != top.color() && top.rank.is_one_above(card.rank),
    }
}

/// Free cell: any card, but only while empty.
#[must_use]
pub fn accepts_onto_free_cell(_card: Card, cell: &Zone) -> bool {
    cell.is_empty()
}

/// Foundation: an Ace onto empty, otherwise same suit and one rank higher
/// than the top.
#[must_use]
pub fn accepts_onto_foundation(card: Card, foundation: &Zone) -> bool {
    match foundation.top() {
        None => card.is_ace(),
        Some(top) => card.suit == top.suit && card.rank.is_one_above(top.rank),
    }
}

/// Apply the predicate matching the zone's kind.
#[must_use]
pub fn accepts(card: Card, dest: &Zone) -> bool {
    match dest.kind() {
        ZoneKind::Tableau => accepts_onto_tableau(card, dest),
        ZoneKind::FreeCell => accepts_onto_free_cell(card, dest),
        ZoneKind::Foundation => accepts_onto_foundation(card, dest),
    }
}

/// Same verdict as [`accepts`], with the reason on rejection.
pub fn check_placement(card: Card, dest: &Zone) -> Result<(), MoveError> {
    if accepts(card, dest) {
        return Ok(());
    }

    // Rejections onto a tableau or foundation always have a top card:
    // empty ones accept (tableau) or only refuse non-Aces (foundation).
    Err(match (dest.kind(), dest.top()) {
        (ZoneKind::FreeCell, _) => MoveError::FreeCellOccupied(dest.id()),
        (ZoneKind::Foundation, None) => MoveError::FoundationNeedsAce { card },
        (ZoneKind::Foundation, Some(onto)) => MoveError::FoundationMismatch { card, onto },
        (ZoneKind::Tableau, Some(onto)) => MoveError::TableauMismatch { card, onto },
        (ZoneKind::Tableau, None) => unreachable!("empty tableau column rejected {}", card),
    })
}
