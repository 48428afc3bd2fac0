//! Zone identifiers, board layout and game configuration.
//!
//! - `ZoneId`: Stable identifier for one pile
//! - `ZoneKind`: Which placement rule a pile enforces
//! - `ZoneLayout`: How many piles of each kind exist and which ids they get
//! - `GameConfig`: Layout plus deal seed, built in code or from the environment

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Zone identifier.
///
/// Ids are assigned by `ZoneLayout`: tableau columns first, then free cells,
/// then foundations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZoneId(pub u16);

impl ZoneId {
    /// Create a new zone ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Index into a flat zone table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Zone({})", self.0)
    }
}

/// The placement rule a zone enforces.
///
/// All zones share one structure; the kind only selects the legality check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    /// Main playing column, built down in alternating colors.
    Tableau,
    /// Single-card holding slot.
    FreeCell,
    /// Suit pile, built up from the Ace.
    Foundation,
}

impl ZoneKind {
    /// Can the top card of this zone be moved elsewhere?
    #[must_use]
    pub const fn is_source(self) -> bool {
        !matches!(self, ZoneKind::Foundation)
    }
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ZoneKind::Tableau => "tableau",
            ZoneKind::FreeCell => "free cell",
            ZoneKind::Foundation => "foundation",
        };
        f.write_str(name)
    }
}

/// Largest board whose ids all fit in a `ZoneId`.
pub const MAX_ZONES: usize = u16::MAX as usize;

/// Number of zones of each kind, and the id space they occupy.
///
/// Only the tableau and free-cell counts vary. There is always one foundation
/// per suit. Every layout that exists has at least one column and at most
/// `MAX_ZONES` zones.
///
/// ```
/// use fourcell::core::{ZoneId, ZoneKind, ZoneLayout};
///
/// let layout = ZoneLayout::standard();
/// assert_eq!(layout.len(), 16);
/// assert_eq!(layout.tableau(0), ZoneId::new(0));
/// assert_eq!(layout.free_cell(0), ZoneId::new(8));
/// assert_eq!(layout.foundation(3), ZoneId::new(15));
/// assert_eq!(layout.kind_of(ZoneId::new(9)), Some(ZoneKind::FreeCell));
/// assert_eq!(layout.kind_of(ZoneId::new(16)), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LayoutShape")]
pub struct ZoneLayout {
    tableau_columns: u16,
    free_cells: u16,
}

/// Wire form of a layout, checked by `ZoneLayout::new` on the way in.
#[derive(Deserialize)]
struct LayoutShape {
    tableau_columns: u16,
    free_cells: u16,
}

impl TryFrom<LayoutShape> for ZoneLayout {
    type Error = ConfigError;

    fn try_from(shape: LayoutShape) -> Result<Self, Self::Error> {
        Self::new(shape.tableau_columns, shape.free_cells)
    }
}

impl Default for ZoneLayout {
    fn default() -> Self {
        Self::standard()
    }
}

impl ZoneLayout {
    /// Foundations on every board.
    pub const FOUNDATIONS: usize = 4;

    /// The classic board: 8 columns, 4 free cells, 4 foundations.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            tableau_columns: 8,
            free_cells: 4,
        }
    }

    /// A board with the given tableau and free-cell counts.
    pub fn new(tableau_columns: u16, free_cells: u16) -> Result<Self, ConfigError> {
        if tableau_columns == 0 {
            return Err(ConfigError::NoTableauColumns);
        }
        let layout = Self {
            tableau_columns,
            free_cells,
        };
        if layout.len() > MAX_ZONES {
            return Err(ConfigError::TooManyZones { total: layout.len() });
        }
        Ok(layout)
    }

    #[must_use]
    pub const fn tableau_columns(&self) -> usize {
        self.tableau_columns as usize
    }

    #[must_use]
    pub const fn free_cells(&self) -> usize {
        self.free_cells as usize
    }

    #[must_use]
    pub const fn foundations(&self) -> usize {
        Self::FOUNDATIONS
    }

    /// Total number of zones.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tableau_columns() + self.free_cells() + Self::FOUNDATIONS
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Id of tableau column `i`.
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn tableau(&self, i: usize) -> ZoneId {
        assert!(i < self.tableau_columns(), "Tableau column {} out of range", i);
        Self::id_at(i)
    }

    /// Id of free cell `i`.
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn free_cell(&self, i: usize) -> ZoneId {
        assert!(i < self.free_cells(), "Free cell {} out of range", i);
        Self::id_at(self.tableau_columns() + i)
    }

    /// Id of foundation `i`.
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn foundation(&self, i: usize) -> ZoneId {
        assert!(i < Self::FOUNDATIONS, "Foundation {} out of range", i);
        Self::id_at(self.tableau_columns() + self.free_cells() + i)
    }

    // Callers stay below `len()`, which `new` caps at `MAX_ZONES`.
    fn id_at(index: usize) -> ZoneId {
        ZoneId::new(index as u16)
    }

    /// Kind of the zone with this id, or `None` if the id is not on the board.
    #[must_use]
    pub fn kind_of(&self, id: ZoneId) -> Option<ZoneKind> {
        let index = id.index();
        if index < self.tableau_columns() {
            Some(ZoneKind::Tableau)
        } else if index < self.tableau_columns() + self.free_cells() {
            Some(ZoneKind::FreeCell)
        } else if index < self.len() {
            Some(ZoneKind::Foundation)
        } else {
            None
        }
    }

    /// Kind-relative position of a zone: column 3, free cell 0, etc.
    #[must_use]
    pub fn position_of(&self, id: ZoneId) -> Option<(ZoneKind, usize)> {
        let kind = self.kind_of(id)?;
        let offset = match kind {
            ZoneKind::Tableau => 0,
            ZoneKind::FreeCell => self.tableau_columns(),
            ZoneKind::Foundation => self.tableau_columns() + self.free_cells(),
        };
        Some((kind, id.index() - offset))
    }

    /// All zone ids with their kinds, in id order.
    pub fn zones(&self) -> impl Iterator<Item = (ZoneId, ZoneKind)> + '_ {
        (0..self.len()).filter_map(move |index| {
            let id = Self::id_at(index);
            self.kind_of(id).map(|kind| (id, kind))
        })
    }
}

/// Environment variable holding a fixed deal seed.
pub const ENV_SEED: &str = "FOURCELL_SEED";
/// Environment variable overriding the tableau column count.
pub const ENV_TABLEAU_COLUMNS: &str = "FOURCELL_TABLEAU_COLUMNS";
/// Environment variable overriding the free cell count.
pub const ENV_FREE_CELLS: &str = "FOURCELL_FREE_CELLS";

/// Complete game configuration.
///
/// ```
/// use fourcell::core::{ConfigError, GameConfig};
///
/// let config = GameConfig::new().with_seed(42).with_free_cells(2)?;
/// assert_eq!(config.seed, Some(42));
/// assert_eq!(config.layout.free_cells(), 2);
/// assert_eq!(config.layout.tableau_columns(), 8);
/// # Ok::<(), ConfigError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board shape.
    pub layout: ZoneLayout,

    /// Deal seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Standard layout, entropy-seeded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of tableau columns.
    pub fn with_tableau_columns(mut self, columns: u16) -> Result<Self, ConfigError> {
        self.layout = ZoneLayout::new(columns, self.layout.free_cells)?;
        Ok(self)
    }

    /// Set the number of free cells.
    pub fn with_free_cells(mut self, cells: u16) -> Result<Self, ConfigError> {
        self.layout = ZoneLayout::new(self.layout.tableau_columns, cells)?;
        Ok(self)
    }

    /// Read overrides from `FOURCELL_*` environment variables.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (environment, test map, ...).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::new();

        if let Some(raw) = lookup(ENV_SEED) {
            config.seed = Some(parse_var(ENV_SEED, &raw)?);
        }

        let mut columns = config.layout.tableau_columns;
        let mut cells = config.layout.free_cells;
        if let Some(raw) = lookup(ENV_TABLEAU_COLUMNS) {
            columns = parse_var(ENV_TABLEAU_COLUMNS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_FREE_CELLS) {
            cells = parse_var(ENV_FREE_CELLS, &raw)?;
        }
        config.layout = ZoneLayout::new(columns, cells)?;

        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}
