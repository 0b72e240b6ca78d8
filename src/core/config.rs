//! Game configuration.
//!
//! A [`GameConfig`] fixes everything about a game that is decided before the
//! first card is dealt: table size, which expansions are shuffled in, the
//! size of the monster and shop rows, and the economy constants.
//!
//! ```
//! use four_souls::core::GameConfig;
//!
//! let config = GameConfig::new(3)
//!     .with_seed(7)
//!     .with_expansion_one(true)
//!     .with_monster_slots(3);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.souls_to_win, 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{EngineResult, GameError};

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;
/// Largest supported table.
pub const MAX_PLAYERS: usize = 4;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats (2-4).
    pub player_count: usize,

    /// Seed for every shuffle, die roll and character deal.
    pub seed: u64,

    /// Shuffle in the first expansion's cards.
    pub expansion_one: bool,

    /// Shuffle in the second expansion's cards.
    pub expansion_two: bool,

    /// Loot cards dealt to each player at setup.
    pub starting_hand: u8,

    /// Cents each player starts with.
    pub starting_cents: u32,

    /// Number of monster battle slots.
    pub monster_slots: usize,

    /// Number of shop slots.
    pub shop_slots: usize,

    /// Base price of a treasure.
    pub shop_price: u32,

    /// Souls needed to win before curses raise the bar.
    pub souls_to_win: u8,

    /// Actions one player may take in a single turn before it is ended for them.
    pub max_actions_per_turn: usize,

    /// Turn limit for [`Game::run`](crate::game::Game::run).
    pub max_turns: usize,
}

impl GameConfig {
    /// Create a configuration with the base-game defaults.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            seed: 0,
            expansion_one: false,
            expansion_two: false,
            starting_hand: 3,
            starting_cents: 3,
            monster_slots: 2,
            shop_slots: 2,
            shop_price: 10,
            souls_to_win: 4,
            max_actions_per_turn: 200,
            max_turns: 500,
        }
    }

    #[must_use]
    pub fn with_players(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_expansion_one(mut self, enabled: bool) -> Self {
        self.expansion_one = enabled;
        self
    }

    #[must_use]
    pub fn with_expansion_two(mut self, enabled: bool) -> Self {
        self.expansion_two = enabled;
        self
    }

    #[must_use]
    pub fn with_monster_slots(mut self, slots: usize) -> Self {
        self.monster_slots = slots;
        self
    }

    #[must_use]
    pub fn with_shop_slots(mut self, slots: usize) -> Self {
        self.shop_slots = slots;
        self
    }

    #[must_use]
    pub fn with_starting_cents(mut self, cents: u32) -> Self {
        self.starting_cents = cents;
        self
    }

    #[must_use]
    pub fn with_souls_to_win(mut self, souls: u8) -> Self {
        self.souls_to_win = souls;
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, turns: usize) -> Self {
        self.max_turns = turns;
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> EngineResult<()> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(GameError::InvalidConfig(format!(
                "player count must be {MIN_PLAYERS}-{MAX_PLAYERS}, got {}",
                self.player_count
            )));
        }
        if self.monster_slots == 0 || self.shop_slots == 0 {
            return Err(GameError::InvalidConfig(
                "monster and shop rows need at least one slot".into(),
            ));
        }
        if self.souls_to_win == 0 {
            return Err(GameError::InvalidConfig("souls to win must be positive".into()));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(MIN_PLAYERS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.player_count, 2);
        assert_eq!(config.starting_hand, 3);
        assert_eq!(config.starting_cents, 3);
        assert_eq!(config.shop_price, 10);
        assert!(!config.expansion_one);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(2)
            .with_players(4)
            .with_seed(99)
            .with_expansion_two(true)
            .with_shop_slots(3)
            .with_souls_to_win(5);

        assert_eq!(config.player_count, 4);
        assert_eq!(config.seed, 99);
        assert!(config.expansion_two);
        assert_eq!(config.shop_slots, 3);
        assert_eq!(config.souls_to_win, 5);
    }

    #[test]
    fn test_validate_rejects_bad_tables() {
        assert!(GameConfig::new(1).validate().is_err());
        assert!(GameConfig::new(5).validate().is_err());
        assert!(GameConfig::new(2).with_monster_slots(0).validate().is_err());

        let err = GameConfig::new(9).validate().unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_serde_round_trip() {
        let config = GameConfig::new(3).with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
