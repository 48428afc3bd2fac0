//! Zone manager: owns every pile on the board.
//!
//! The `ZoneManager` resolves zone ids to piles and performs the raw
//! top-card transfer. It never checks legality; that is `GameState`'s job.
//! It supports:
//! - Lookup by `ZoneId`
//! - Per-kind iteration (tableau, free cells, foundations)
//! - Whole-board card accounting

use serde::Serialize;

use crate::cards::Card;
use crate::core::config::{ZoneId, ZoneKind, ZoneLayout};

use super::zone::Zone;

/// All zones of one board, indexed by `ZoneId`.
///
/// ## Usage
///
/// ```
/// use fourcell::cards::{Card, Rank, Suit};
/// use fourcell::core::ZoneLayout;
/// use fourcell::zones::ZoneManager;
///
/// let layout = ZoneLayout::standard();
/// let mut manager = ZoneManager::new(layout);
///
/// let column = layout.tableau(0);
/// let cell = layout.free_cell(0);
/// manager.get_mut(column).unwrap().push_unconditional(Card::new(Rank::ACE, Suit::Spades));
///
/// manager.move_top(column, cell);
/// assert!(manager.get(column).unwrap().is_empty());
/// assert_eq!(manager.get(cell).unwrap().top(), Some(Card::new(Rank::ACE, Suit::Spades)));
/// ```
///
/// Zones are created only by `new`, so a zone's id always equals its index.
/// The manager serializes for inspection but is never read back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ZoneManager {
    layout: ZoneLayout,
    zones: Vec<Zone>,
}

impl ZoneManager {
    /// Create every zone in `layout`, all empty.
    #[must_use]
    pub fn new(layout: ZoneLayout) -> Self {
        let zones = layout.zones().map(|(id, kind)| Zone::new(id, kind)).collect();
        Self { layout, zones }
    }

    #[must_use]
    pub const fn layout(&self) -> &ZoneLayout {
        &self.layout
    }

    /// Get a zone by id.
    #[must_use]
    pub fn get(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(id.index())
    }

    /// Get a zone by id, mutably.
    pub fn get_mut(&mut self, id: ZoneId) -> Option<&mut Zone> {
        self.zones.get_mut(id.index())
    }

    /// Number of cards in a zone. Unknown zones count as empty.
    #[must_use]
    pub fn zone_size(&self, id: ZoneId) -> usize {
        self.get(id).map_or(0, Zone::len)
    }

    /// All zones in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Zone> + '_ {
        self.zones.iter()
    }

    /// Zones of one kind, in id order.
    pub fn of_kind(&self, kind: ZoneKind) -> impl Iterator<Item = &Zone> + '_ {
        self.zones.iter().filter(move |z| z.kind() == kind)
    }

    /// Move the top card of `from` onto `to` with no legality check.
    ///
    /// Returns the card moved.
    ///
    /// # Panics
    ///
    /// Panics if either id is unknown or `from` is empty.
    pub fn move_top(&mut self, from: ZoneId, to: ZoneId) -> Card {
        assert!(self.get(to).is_some(), "Unknown destination zone {}", to);
        let card = match self.get_mut(from) {
            Some(zone) => zone.pop_top(),
            None => panic!("Unknown source zone {}", from),
        };
        if let Some(zone) = self.get_mut(to) {
            zone.push_unconditional(card);
        }
        card
    }

    /// Get total number of cards on the board.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.zones.iter().map(Zone::len).sum()
    }

    /// Every card on the board, zone by zone, bottom to top.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.zones.iter().flat_map(Zone::cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn card(rank: u8, suit: Suit) -> Card {
        Card::new(Rank::new(rank).unwrap(), suit)
    }

    #[test]
    fn test_new_creates_empty_zones() {
        let manager = ZoneManager::new(ZoneLayout::standard());

        assert_eq!(manager.iter().count(), 16);
        assert_eq!(manager.total_cards(), 0);
        assert!(manager.iter().all(Zone::is_empty));
    }

    #[test]
    fn test_ids_match_positions() {
        let manager = ZoneManager::new(ZoneLayout::standard());

        for (i, zone) in manager.iter().enumerate() {
            assert_eq!(zone.id().index(), i);
            assert_eq!(manager.layout().kind_of(zone.id()), Some(zone.kind()));
        }
    }

    #[test]
    fn test_of_kind() {
        let manager = ZoneManager::new(ZoneLayout::standard());

        assert_eq!(manager.of_kind(ZoneKind::Tableau).count(), 8);
        assert_eq!(manager.of_kind(ZoneKind::FreeCell).count(), 4);
        assert_eq!(manager.of_kind(ZoneKind::Foundation).count(), 4);
    }

    #[test]
    fn test_unknown_zone() {
        let manager = ZoneManager::new(ZoneLayout::standard());

        assert!(manager.get(ZoneId::new(99)).is_none());
        assert_eq!(manager.zone_size(ZoneId::new(99)), 0);
    }

    #[test]
    fn test_move_between_zones() {
        let layout = ZoneLayout::standard();
        let mut manager = ZoneManager::new(layout);
        let a = layout.tableau(0);
        let b = layout.tableau(1);

        manager.get_mut(a).unwrap().push_unconditional(card(10, Suit::Hearts));
        manager.get_mut(a).unwrap().push_unconditional(card(9, Suit::Clubs));

        let moved = manager.move_top(a, b);

        assert_eq!(moved, card(9, Suit::Clubs));
        assert_eq!(manager.zone_size(a), 1);
        assert_eq!(manager.zone_size(b), 1);
        assert_eq!(manager.get(b).unwrap().top(), Some(card(9, Suit::Clubs)));
        assert_eq!(manager.total_cards(), 2);
    }

    #[test]
    #[should_panic(expected = "Popped empty")]
    fn test_move_from_empty_panics() {
        let layout = ZoneLayout::standard();
        let mut manager = ZoneManager::new(layout);
        manager.move_top(layout.tableau(0), layout.tableau(1));
    }

    #[test]
    #[should_panic(expected = "Unknown destination")]
    fn test_move_to_unknown_panics_before_pop() {
        let layout = ZoneLayout::standard();
        let mut manager = ZoneManager::new(layout);
        manager.get_mut(layout.tableau(0)).unwrap().push_unconditional(card(1, Suit::Spades));
        manager.move_top(layout.tableau(0), ZoneId::new(99));
    }

    #[test]
    fn test_all_cards() {
        let layout = ZoneLayout::standard();
        let mut manager = ZoneManager::new(layout);
        manager.get_mut(layout.tableau(3)).unwrap().push_unconditional(card(2, Suit::Spades));
        manager.get_mut(layout.free_cell(1)).unwrap().push_unconditional(card(3, Suit::Hearts));

        let cards: Vec<_> = manager.all_cards().copied().collect();
        assert_eq!(cards, vec![card(2, Suit::Spades), card(3, Suit::Hearts)]);
        assert_eq!(manager.total_cards(), 2);
    }

    #[test]
    fn test_serialized_zones_keep_id_order() {
        let layout = ZoneLayout::new(3, 1).unwrap();
        let manager = ZoneManager::new(layout);
        let json = serde_json::to_value(&manager).unwrap();

        let ids: Vec<_> = json["zones"]
            .as_array()
            .unwrap()
            .iter()
            .map(|zone| zone["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, (0..8).collect::<Vec<u64>>());
        assert_eq!(json["layout"]["tableau_columns"], 3);
        assert_eq!(json["layout"]["free_cells"], 1);
    }
}
