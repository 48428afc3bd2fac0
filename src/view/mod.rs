//! Read model for rendering.
//!
//! A `BoardView` is a plain snapshot of what a front end needs: every tableau
//! card in order, and just the top of each free cell and foundation. Each
//! card carries its display text and color. The `Display` impl draws the
//! board as text: free cells on the left, foundations on the right, `_` for
//! an empty slot, then a rule, then the tableau columns.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color};
use crate::core::config::ZoneKind;
use crate::zones::{Zone, ZoneManager};

/// Width of one rendered card slot.
const SLOT_WIDTH: usize = 4;
/// Blank slots between the free cells and the foundations.
const SLOT_GAP: usize = 1;
/// Marker for an empty free cell or foundation.
const EMPTY_SLOT: &str = "_";

/// One card, ready to draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub text: String,
    pub color: Color,
}

impl From<Card> for CardView {
    fn from(card: Card) -> Self {
        Self {
            text: card.to_string(),
            color: card.color(),
        }
    }
}

/// Free cell or foundation: only the top card is shown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotView {
    pub top: Option<CardView>,
}

impl SlotView {
    fn from_zone(zone: &Zone) -> Self {
        Self {
            top: zone.top().map(CardView::from),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    fn text(&self) -> &str {
        self.top.as_ref().map_or(EMPTY_SLOT, |c| c.text.as_str())
    }
}

/// Snapshot of the whole board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub free_cells: Vec<SlotView>,
    pub foundations: Vec<SlotView>,
    /// Each column bottom to top.
    pub tableau: Vec<Vec<CardView>>,
}

impl BoardView {
    #[must_use]
    pub fn from_zones(zones: &ZoneManager) -> Self {
        Self {
            free_cells: zones.of_kind(ZoneKind::FreeCell).map(SlotView::from_zone).collect(),
            foundations: zones.of_kind(ZoneKind::Foundation).map(SlotView::from_zone).collect(),
            tableau: zones
                .of_kind(ZoneKind::Tableau)
                .map(|z| z.cards().copied().map(CardView::from).collect())
                .collect(),
        }
    }

    /// Height of the tallest column.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.tableau.iter().map(Vec::len).max().unwrap_or(0)
    }
}

impl std::fmt::Display for BoardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Top row
        let mut row = String::new();
        for slot in &self.free_cells {
            row.push_str(&pad(slot.text()));
        }
        row.push_str(&" ".repeat(SLOT_GAP * SLOT_WIDTH));
        for slot in &self.foundations {
            row.push_str(&pad(slot.text()));
        }
        writeln!(f, "{}", row.trim_end())?;

        writeln!(f, "{}", "-".repeat(self.tableau.len() * SLOT_WIDTH))?;

        for depth in 0..self.depth() {
            let mut row = String::new();
            for column in &self.tableau {
                row.push_str(&pad(column.get(depth).map_or("", |c| c.text.as_str())));
            }
            writeln!(f, "{}", row.trim_end())?;
        }
        Ok(())
    }
}

/// Left-align `text` in a slot, counting chars so suit glyphs take one column.
fn pad(text: &str) -> String {
    let width = text.chars().count();
    let mut out = text.to_string();
    out.push_str(&" ".repeat(SLOT_WIDTH.saturating_sub(width)));
    out
}
