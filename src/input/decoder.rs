//! Key-to-move decoding.
//!
//! The engine never sees raw keys. A `MoveDecoder` collects two zone keys and
//! turns them into a `MoveIntent`; unbound keys are dropped before they reach
//! the buffer.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::action::MoveIntent;
use crate::core::config::{ZoneId, ZoneLayout};

/// Default keys for tableau columns, left to right.
pub const TABLEAU_KEYS: [char; 8] = ['a', 's', 'd', 'f', 'j', 'k', 'l', ';'];
/// Default keys for free cells.
pub const FREE_CELL_KEYS: [char; 4] = ['q', 'w', 'e', 'r'];
/// Default keys for foundations.
pub const FOUNDATION_KEYS: [char; 4] = ['u', 'i', 'o', 'p'];

/// Map from key to zone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    keys: FxHashMap<char, ZoneId>,
}

impl KeyBindings {
    /// Empty bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Home-row bindings for `layout`.
    ///
    /// Zones beyond the default key rows are left unbound.
    ///
    /// ```
    /// use fourcell::core::ZoneLayout;
    /// use fourcell::input::KeyBindings;
    ///
    /// let layout = ZoneLayout::standard();
    /// let keys = KeyBindings::standard(&layout);
    /// assert_eq!(keys.zone_for('a'), Some(layout.tableau(0)));
    /// assert_eq!(keys.zone_for('r'), Some(layout.free_cell(3)));
    /// assert_eq!(keys.zone_for('p'), Some(layout.foundation(3)));
    /// assert_eq!(keys.zone_for('z'), None);
    /// ```
    #[must_use]
    pub fn standard(layout: &ZoneLayout) -> Self {
        let mut bindings = Self::new();
        for (i, &key) in TABLEAU_KEYS.iter().take(layout.tableau_columns()).enumerate() {
            bindings.bind(key, layout.tableau(i));
        }
        for (i, &key) in FREE_CELL_KEYS.iter().take(layout.free_cells()).enumerate() {
            bindings.bind(key, layout.free_cell(i));
        }
        for (i, &key) in FOUNDATION_KEYS.iter().take(layout.foundations()).enumerate() {
            bindings.bind(key, layout.foundation(i));
        }
        bindings
    }

    /// Bind `key` to `zone`, replacing any earlier binding for that key.
    pub fn bind(&mut self, key: char, zone: ZoneId) {
        self.keys.insert(key, zone);
    }

    #[must_use]
    pub fn with_binding(mut self, key: char, zone: ZoneId) -> Self {
        self.bind(key, zone);
        self
    }

    #[must_use]
    pub fn zone_for(&self, key: char) -> Option<ZoneId> {
        self.keys.get(&key).copied()
    }

    /// Reverse lookup, for labelling zones on screen.
    #[must_use]
    pub fn key_for(&self, zone: ZoneId) -> Option<char> {
        self.keys
            .iter()
            .filter(|(_, &z)| z == zone)
            .map(|(&k, _)| k)
            .min()
    }
}

/// Accumulates zone keys into move intents.
///
/// ```
/// use fourcell::core::{MoveIntent, ZoneLayout};
/// use fourcell::input::{KeyBindings, MoveDecoder};
///
/// let layout = ZoneLayout::standard();
/// let mut decoder = MoveDecoder::new(KeyBindings::standard(&layout));
///
/// assert_eq!(decoder.feed('a'), None);
/// assert_eq!(decoder.feed('x'), None); // unbound, ignored
/// assert_eq!(
///     decoder.feed('q'),
///     Some(MoveIntent::new(layout.tableau(0), layout.free_cell(0)))
/// );
/// assert!(decoder.pending().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct MoveDecoder {
    bindings: KeyBindings,
    pending: SmallVec<[ZoneId; 2]>,
}

impl MoveDecoder {
    #[must_use]
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            pending: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Feed one key.
    ///
    /// Returns an intent once two zone keys have been collected. The buffer is
    /// cleared as the intent is emitted, whether or not the move later
    /// succeeds.
    pub fn feed(&mut self, key: char) -> Option<MoveIntent> {
        let Some(zone) = self.bindings.zone_for(key) else {
            trace!(target: "input", ?key, "unbound key ignored");
            return None;
        };

        self.pending.push(zone);
        trace!(target: "input", ?key, %zone, pending = self.pending.len(), "zone key");

        if self.pending.len() < 2 {
            return None;
        }
        let intent = MoveIntent::new(self.pending[0], self.pending[1]);
        self.pending.clear();
        Some(intent)
    }

    /// Zones selected so far (zero or one).
    #[must_use]
    pub fn pending(&self) -> &[ZoneId] {
        &self.pending
    }

    /// Drop a half-entered move.
    pub fn reset(&mut self) {
        self.pending.clear();
    }
}
