//! # four-souls-engine
//!
//! A rules engine for the Four Souls card-and-dice game.
//!
//! ## Design Principles
//!
//! 1. **One Stack**: every game action becomes an event on a LIFO stack.
//!    Players respond to events before they resolve, and cards react to
//!    events after they resolve, by pushing more events.
//!
//! 2. **Bind, Then Commit**: using a card first picks every target against
//!    a read-only board, and only then taps, pays and pushes. A failed use
//!    never leaves half a change behind.
//!
//! 3. **Effects Are Data**: card hooks return [`Effect`] values. The
//!    resolver is the only code that turns them into board changes.
//!
//! 4. **Deterministic**: all randomness comes from one seeded [`GameRng`].
//!    Same seed and same choices give the same game.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, player input
//! - `error`: the [`GameError`] taxonomy
//! - `cards`: card records and the well-known card ids
//! - `zones`: decks, monster slots, the shop
//! - `stack`: events and the event stack
//! - `effects`: the effect enum, resolver and trigger scan
//! - `activation`: card hooks and the activation protocol
//! - `board`: the game state and its mutators
//! - `rules`: legal actions and victory
//! - `game`: turn loop and reaction windows
//! - `catalog`: where cards and their behaviour come from

pub mod activation;
pub mod board;
pub mod cards;
pub mod catalog;
pub mod core;
pub mod effects;
pub mod error;
pub mod game;
pub mod rules;
pub mod stack;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    ChoiceProvider, GameConfig, GameRng, GameRngState, PlayerId, PlayerMap, RandomChoices,
    ScriptedChoices,
};

pub use crate::error::{EngineResult, ErrorCategory, GameError};

pub use crate::cards::{
    Card, CardBase, CardId, CharacterCard, ItemCard, LootCard, MonsterCard, Reward, TreasureCard,
};

pub use crate::zones::{Deck, LootArea, MonsterArea, TreasureArea};

pub use crate::stack::{Event, EventKind, EventNode, EventStack, NodeId, Target};

pub use crate::effects::{Effect, Resolver};

pub use crate::activation::{BindContext, Binding, CardBehavior, Followup};

pub use crate::board::{Board, Player};

pub use crate::rules::{legal_actions, GameResult, PlayerAction};

pub use crate::game::Game;

pub use crate::catalog::{CardCatalog, StarterCatalog};
