//! Monster cards: everything drawn from the monster deck.
//!
//! The monster deck mixes four kinds of card. Basic monsters and bosses are
//! fought in the battle slots; bosses additionally become a soul for whoever
//! kills them. Curses attach to a player. Bonus cards (chests, troll bombs,
//! secret rooms) resolve immediately when revealed.

use serde::{Deserialize, Serialize};

use super::{ids, CardBase, CardId, CardInfo, CombatStats, CombatTarget};

/// What kind of card came off the monster deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    Basic,
    Boss,
    Curse,
    Bonus,
}

/// Reward value that depends on a die roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollReward {
    /// Gain cents equal to the roll.
    Cents,
    /// Loot once per pip.
    Loot,
}

/// What the active player gains for killing a monster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub cents: u8,
    pub loot: u8,
    pub treasure: u8,
    pub roll: Option<RollReward>,
}

impl Reward {
    #[must_use]
    pub const fn cents(n: u8) -> Self {
        Self {
            cents: n,
            loot: 0,
            treasure: 0,
            roll: None,
        }
    }

    #[must_use]
    pub const fn loot(n: u8) -> Self {
        Self {
            cents: 0,
            loot: n,
            treasure: 0,
            roll: None,
        }
    }

    #[must_use]
    pub const fn treasure(n: u8) -> Self {
        Self {
            cents: 0,
            loot: 0,
            treasure: n,
            roll: None,
        }
    }

    #[must_use]
    pub const fn per_roll(kind: RollReward) -> Self {
        Self {
            cents: 0,
            loot: 0,
            treasure: 0,
            roll: Some(kind),
        }
    }

    /// Whether a die must be rolled before the reward can be paid out.
    #[must_use]
    pub const fn requires_roll(&self) -> bool {
        self.roll.is_some()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cents == 0 && self.loot == 0 && self.treasure == 0 && self.roll.is_none()
    }
}

/// A card from the monster deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterCard {
    pub info: CardInfo,
    pub stats: CombatStats,
    /// Roll needed to hit this monster, before modifiers.
    pub base_roll: u8,
    pub roll: u8,
    pub in_battle: bool,
    pub kind: MonsterKind,
    pub reward: Reward,
}

impl MonsterCard {
    /// A basic monster.
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        base_health: u8,
        base_roll: u8,
        base_attack: u8,
    ) -> Self {
        Self {
            info: CardInfo::new(id, name),
            stats: CombatStats::new(base_health, base_attack),
            base_roll,
            roll: base_roll,
            in_battle: false,
            kind: MonsterKind::Basic,
            reward: Reward::default(),
        }
    }

    /// A boss: worth a soul when killed.
    pub fn boss(
        id: CardId,
        name: impl Into<String>,
        base_health: u8,
        base_roll: u8,
        base_attack: u8,
    ) -> Self {
        Self {
            kind: MonsterKind::Boss,
            ..Self::new(id, name, base_health, base_roll, base_attack)
        }
    }

    /// A curse: given to a player when revealed.
    pub fn curse(id: CardId, name: impl Into<String>) -> Self {
        Self {
            kind: MonsterKind::Curse,
            ..Self::new(id, name, 0, 0, 0)
        }
    }

    /// A bonus card: resolves when revealed, never fought.
    pub fn bonus(id: CardId, name: impl Into<String>) -> Self {
        Self {
            kind: MonsterKind::Bonus,
            ..Self::new(id, name, 0, 0, 0)
        }
    }

    #[must_use]
    pub fn with_reward(mut self, reward: Reward) -> Self {
        self.reward = reward;
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.info = self.info.with_text(text);
        self
    }

    #[must_use]
    pub fn is_boss(&self) -> bool {
        self.kind == MonsterKind::Boss
    }

    /// Basic monsters and bosses occupy battle slots; curses and bonus cards don't.
    #[must_use]
    pub fn is_fightable(&self) -> bool {
        matches!(self.kind, MonsterKind::Basic | MonsterKind::Boss)
    }

    /// Worth two souls instead of one.
    #[must_use]
    pub fn counts_double(&self) -> bool {
        ids::TWO_SOUL_MONSTERS.contains(&self.info.id)
    }

    /// Raise the roll needed to hit, capped at 6.
    pub fn increase_roll(&mut self, n: u8) {
        self.roll = self.roll.saturating_add(n).min(6);
    }

    /// Lower the roll needed to hit, floored at 1.
    pub fn decrease_roll(&mut self, n: u8) {
        self.roll = self.roll.saturating_sub(n).max(1);
    }

    /// Back to printed values: full health, base attack and roll, out of battle.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
        self.roll = self.base_roll;
        self.in_battle = false;
    }
}

impl CardBase for MonsterCard {
    fn info(&self) -> &CardInfo {
        &self.info
    }

    fn header(&self) -> String {
        format!("{:<5}{:<22}{:>4}{:>4}{:>6}", "ID", "Monster", "HP", "AP", "Roll")
    }

    fn row(&self) -> String {
        match self.kind {
            MonsterKind::Curse | MonsterKind::Bonus => {
                format!("{:<5}{:<22}{}", self.info.id.raw(), self.info.name, self.info.text)
            }
            MonsterKind::Basic | MonsterKind::Boss => format!(
                "{:<5}{:<22}{:>4}{:>4}{:>5}+",
                self.info.id.raw(),
                self.info.name,
                self.stats.hp,
                self.stats.ap,
                self.roll
            ),
        }
    }
}

impl CombatTarget for MonsterCard {
    fn stats(&self) -> &CombatStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut CombatStats {
        &mut self.stats
    }
}
