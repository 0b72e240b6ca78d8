//! Card containers.
//!
//! - [`Deck`]: an ordered pile of one card variant (draw, search, shuffle, merge)
//! - [`ActiveSlot`]: a battle zone holding the active monster and overlays
//! - [`Pile`], [`MonsterArea`], [`TreasureArea`]: the shared table areas

pub mod area;
pub mod deck;
pub mod slot;

pub use area::{LootArea, MonsterArea, Pile, TreasureArea};
pub use deck::{Deck, Scan, ZonePosition};
pub use slot::ActiveSlot;
