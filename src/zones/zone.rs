//! A single card pile.
//!
//! Every pile on the board is a `Zone`: tableau columns, free cells and
//! foundations differ only in their `ZoneKind` tag. Only the top card (the
//! last one pushed) can be inspected or removed.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::config::{ZoneId, ZoneKind};

/// LIFO pile of cards.
///
/// Backed by `im::Vector` so cloning a board snapshot is O(1).
///
/// ```
/// use fourcell::cards::{Card, Rank, Suit};
/// use fourcell::core::{ZoneId, ZoneKind};
/// use fourcell::zones::Zone;
///
/// let mut zone = Zone::new(ZoneId::new(0), ZoneKind::Tableau);
/// zone.push_unconditional(Card::new(Rank::KING, Suit::Spades));
/// zone.push_unconditional(Card::new(Rank::QUEEN, Suit::Hearts));
///
/// assert_eq!(zone.top(), Some(Card::new(Rank::QUEEN, Suit::Hearts)));
/// assert_eq!(zone.pop_top(), Card::new(Rank::QUEEN, Suit::Hearts));
/// assert_eq!(zone.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    id: ZoneId,
    kind: ZoneKind,
    /// Bottom first, top last.
    cards: Vector<Card>,
}

impl Zone {
    /// Create an empty zone.
    #[must_use]
    pub fn new(id: ZoneId, kind: ZoneKind) -> Self {
        Self {
            id,
            kind,
            cards: Vector::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> ZoneId {
        self.id
    }

    #[must_use]
    pub const fn kind(&self) -> ZoneKind {
        self.kind
    }

    /// The top card, or `None` if the zone is empty.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Cards from bottom to top.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Place a card on top without any legality check.
    ///
    /// Only the deal and an already-approved transfer should call this.
    pub fn push_unconditional(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Remove and return the top card.
    ///
    /// # Panics
    ///
    /// Panics if the zone is empty. Callers check `top()` first; reaching
    /// this panic means that check was skipped.
    pub fn pop_top(&mut self) -> Card {
        match self.cards.pop_back() {
            Some(card) => card,
            None => panic!("Popped empty {} zone {}", self.kind, self.id),
        }
    }
}
