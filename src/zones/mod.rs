//! Zone system for card piles.
//!
//! Zones are uniform LIFO piles tagged with a `ZoneKind`; the kind decides
//! which placement rule applies, not the structure.
//!
//! ## Key Types
//!
//! - `ZoneId`: Stable zone identifier (from `core::config`)
//! - `Zone`: One pile with top-card access
//! - `ZoneManager`: All piles of a board and the raw transfer primitive

pub mod manager;
pub mod zone;

pub use manager::ZoneManager;
pub use zone::Zone;

// Re-export zone types from core for convenience
pub use crate::core::config::{ZoneId, ZoneKind, ZoneLayout};
