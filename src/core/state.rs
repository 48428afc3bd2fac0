//! Game state: the board and the move transaction.
//!
//! ## GameState
//!
//! Owns every zone and is the only place cards move after the deal:
//! - `new_game` builds empty zones and deals a shuffled deck
//! - `attempt_move` validates and applies one single-card transfer
//! - Read accessors expose zones for rendering
//!
//! Each `attempt_move` is a complete transaction: it either moves exactly one
//! card or leaves every zone as it was.

use serde::Serialize;
use tracing::{debug, info};

use super::action::MoveIntent;
use super::config::{GameConfig, ZoneId, ZoneKind, ZoneLayout};
use super::error::MoveError;
use super::rng::GameRng;
use crate::cards::{self, Card};
use crate::rules;
use crate::view::BoardView;
use crate::zones::{Zone, ZoneManager};

/// Complete game state.
///
/// ```
/// use fourcell::core::{GameConfig, GameState};
///
/// let state = GameState::new_game(&GameConfig::new().with_seed(42));
/// assert_eq!(state.zones().total_cards(), 52);
/// assert!(state.is_conserved());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameState {
    zones: ZoneManager,

    /// Seed the deal was shuffled with.
    seed: u64,

    /// Accepted moves since the deal.
    moves_made: u32,
}

impl GameState {
    /// Create empty zones and deal a shuffled deck.
    ///
    /// Uses `config.seed` if set, otherwise OS entropy.
    #[must_use]
    pub fn new_game(config: &GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(config.layout, &mut rng)
    }

    /// Standard board dealt from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ZoneLayout::standard(), &mut GameRng::new(seed))
    }

    /// Deal using an injected random source.
    #[must_use]
    pub fn with_rng(layout: ZoneLayout, rng: &mut GameRng) -> Self {
        let mut state = Self {
            zones: ZoneManager::new(layout),
            seed: rng.seed(),
            moves_made: 0,
        };
        let deck = cards::shuffle(cards::build_full_deck(), rng);
        state.deal(deck);

        info!(target: "deal", seed = state.seed, columns = layout.tableau_columns(), "new game dealt");
        state
    }

    /// Build a state from an explicit arrangement, bypassing the deal.
    ///
    /// Intended for tests and puzzles. The caller is responsible for the
    /// arrangement holding a full deck if `is_conserved` matters.
    #[must_use]
    pub fn from_zones(zones: ZoneManager) -> Self {
        Self {
            zones,
            seed: 0,
            moves_made: 0,
        }
    }

    /// Deal round-robin: card i goes to column i mod column count.
    ///
    /// Panics if the zone table is missing a column its layout names.
    fn deal(&mut self, deck: Vec<Card>) {
        let layout = *self.zones.layout();
        let columns = layout.tableau_columns();

        for (i, card) in deck.into_iter().enumerate() {
            let column = layout.tableau(i % columns);
            match self.zones.get_mut(column) {
                Some(zone) => zone.push_unconditional(card),
                None => panic!("Missing tableau column {} while dealing {}", column, card),
            }
        }
    }

    // === Moves ===

    /// Try to move the top card of `from` onto `to`.
    ///
    /// Returns the moved card, or why the move was rejected. A rejection
    /// leaves every zone unchanged.
    pub fn attempt_move(&mut self, from: ZoneId, to: ZoneId) -> Result<Card, MoveError> {
        match self.check_move(from, to) {
            Ok(card) => {
                let moved = self.zones.move_top(from, to);
                debug_assert_eq!(moved, card);
                self.moves_made += 1;
                debug!(target: "moves", %from, %to, card = %moved, "move accepted");
                Ok(moved)
            }
            Err(reason) => {
                debug!(target: "moves", %from, %to, %reason, "move rejected");
                Err(reason)
            }
        }
    }

    /// [`attempt_move`](Self::attempt_move) for a decoded intent.
    pub fn apply(&mut self, intent: MoveIntent) -> Result<Card, MoveError> {
        self.attempt_move(intent.from, intent.to)
    }

    /// Validate a move without applying it. Returns the card that would move.
    pub fn check_move(&self, from: ZoneId, to: ZoneId) -> Result<Card, MoveError> {
        if from == to {
            return Err(MoveError::SameZone(from));
        }

        let source = self.zones.get(from).ok_or(MoveError::UnknownZone(from))?;
        let dest = self.zones.get(to).ok_or(MoveError::UnknownZone(to))?;

        if !source.kind().is_source() {
            return Err(MoveError::FoundationSource(from));
        }
        let card = source.top().ok_or(MoveError::EmptySource(from))?;

        rules::check_placement(card, dest)?;
        Ok(card)
    }

    /// Every move `attempt_move` would accept right now.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<MoveIntent> {
        let mut moves = Vec::new();

        for source in self.zones.iter() {
            let Some(card) = source.top() else { continue };
            if !source.kind().is_source() {
                continue;
            }
            for dest in self.zones.iter() {
                if dest.id() != source.id() && rules::accepts(card, dest) {
                    moves.push(MoveIntent::new(source.id(), dest.id()));
                }
            }
        }

        moves
    }

    // === Read access ===

    #[must_use]
    pub const fn zones(&self) -> &ZoneManager {
        &self.zones
    }

    #[must_use]
    pub const fn layout(&self) -> &ZoneLayout {
        self.zones.layout()
    }

    /// Get a zone by id.
    #[must_use]
    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(id)
    }

    pub fn tableau(&self) -> impl Iterator<Item = &Zone> + '_ {
        self.zones.of_kind(ZoneKind::Tableau)
    }

    pub fn free_cells(&self) -> impl Iterator<Item = &Zone> + '_ {
        self.zones.of_kind(ZoneKind::FreeCell)
    }

    pub fn foundations(&self) -> impl Iterator<Item = &Zone> + '_ {
        self.zones.of_kind(ZoneKind::Foundation)
    }

    /// Seed the deal was shuffled with. Replaying it reproduces the deal.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub const fn moves_made(&self) -> u32 {
        self.moves_made
    }

    /// Does the board still hold exactly one full deck?
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        cards::is_full_deck(self.zones.all_cards())
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::from_zones(&self.zones)
    }
}
