//! Card model.
//!
//! ## Design Philosophy
//!
//! Cards are plain data. The four variants ([`CharacterCard`], [`LootCard`],
//! [`MonsterCard`], [`TreasureCard`]) form the closed sum type [`Card`], and
//! the two capabilities that cut across variants are traits:
//!
//! - [`CombatTarget`]: characters and monsters (hp, ap, healing, death)
//! - [`ItemCard`]: treasures and trinkets (counters, eternal, passive)
//!
//! What a card *does* is not stored here. Behaviour is looked up by
//! [`CardId`] from the catalog, which keeps cards cloneable and
//! serializable.
//!
//! ## Example Usage
//!
//! ```
//! use four_souls::cards::{CardId, CombatTarget, MonsterCard};
//!
//! let mut gaper = MonsterCard::new(CardId(118), "Gaper", 3, 3, 1);
//! gaper.decrease_hp(2);
//! assert_eq!(gaper.hp(), 1);
//! gaper.decrease_hp(5);
//! assert!(gaper.is_dead());
//! ```

pub mod card;
pub mod character;
pub mod combat;
pub mod ids;
pub mod item;
pub mod loot;
pub mod monster;
pub mod treasure;

pub use card::{Card, CardBase, CardId, CardInfo, CardKind};
pub use character::CharacterCard;
pub use combat::{CombatStats, CombatTarget};
pub use item::{ItemCard, PassiveItem};
pub use loot::LootCard;
pub use monster::{MonsterCard, MonsterKind, Reward, RollReward};
pub use treasure::TreasureCard;
