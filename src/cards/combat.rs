//! Combat capability shared by characters and monsters.

use serde::{Deserialize, Serialize};

use super::CardBase;

/// Health and attack pools of a combatant.
///
/// `hp` always stays within `0..=base_health`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    pub base_health: u8,
    pub base_attack: u8,
    pub hp: u8,
    pub ap: u8,
}

impl CombatStats {
    #[must_use]
    pub const fn new(base_health: u8, base_attack: u8) -> Self {
        Self {
            base_health,
            base_attack,
            hp: base_health,
            ap: base_attack,
        }
    }

    /// Restore hp and ap to their base values.
    pub fn reset(&mut self) {
        self.hp = self.base_health;
        self.ap = self.base_attack;
    }
}

/// A card that can be attacked, damaged, healed and killed.
pub trait CombatTarget: CardBase {
    fn stats(&self) -> &CombatStats;

    fn stats_mut(&mut self) -> &mut CombatStats;

    fn hp(&self) -> u8 {
        self.stats().hp
    }

    fn ap(&self) -> u8 {
        self.stats().ap
    }

    fn base_health(&self) -> u8 {
        self.stats().base_health
    }

    fn base_attack(&self) -> u8 {
        self.stats().base_attack
    }

    fn is_dead(&self) -> bool {
        self.stats().hp == 0
    }

    fn increase_ap(&mut self, n: u8) {
        let stats = self.stats_mut();
        stats.ap = stats.ap.saturating_add(n);
    }

    fn decrease_ap(&mut self, n: u8) {
        let stats = self.stats_mut();
        stats.ap = stats.ap.saturating_sub(n);
    }

    fn increase_base_attack(&mut self, n: u8) {
        let stats = self.stats_mut();
        stats.base_attack = stats.base_attack.saturating_add(n);
        stats.ap = stats.ap.saturating_add(n);
    }

    fn decrease_base_attack(&mut self, n: u8) {
        let stats = self.stats_mut();
        stats.base_attack = stats.base_attack.saturating_sub(n);
        stats.ap = stats.ap.saturating_sub(n);
    }

    fn increase_base_health(&mut self, n: u8) {
        let stats = self.stats_mut();
        stats.base_health = stats.base_health.saturating_add(n);
        stats.hp = stats.hp.saturating_add(n);
    }

    fn decrease_base_health(&mut self, n: u8) {
        let stats = self.stats_mut();
        stats.base_health = stats.base_health.saturating_sub(n);
        stats.hp = stats.hp.min(stats.base_health);
    }

    /// Raise hp, never above `base_health`.
    fn increase_hp(&mut self, n: u8) {
        let stats = self.stats_mut();
        stats.hp = stats.hp.saturating_add(n).min(stats.base_health);
    }

    /// Lower hp, never below zero.
    fn decrease_hp(&mut self, n: u8) {
        let stats = self.stats_mut();
        stats.hp = stats.hp.saturating_sub(n);
    }

    fn heal(&mut self, n: u8) {
        self.increase_hp(n);
    }
}
