//! Core engine types: players, RNG, configuration, player input.
//!
//! These are the building blocks every other module depends on. None of
//! them know about cards or the event stack.

pub mod config;
pub mod input;
pub mod player;
pub mod rng;

pub use config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use input::{pick_index, ChoiceProvider, RandomChoices, ScriptedChoices};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
