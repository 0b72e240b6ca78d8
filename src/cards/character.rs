//! Character cards: a player's avatar.

use serde::{Deserialize, Serialize};

use super::{CardBase, CardId, CardInfo, CombatStats, CombatTarget};

/// The card a player plays as.
///
/// Characters are dealt tapped and recharge at their owner's first
/// start of turn. Tapping a character lets its owner play a loot card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterCard {
    pub info: CardInfo,
    pub stats: CombatStats,
    pub tapped: bool,
}

impl CharacterCard {
    pub fn new(id: CardId, name: impl Into<String>, base_health: u8, base_attack: u8) -> Self {
        Self {
            info: CardInfo::new(id, name),
            stats: CombatStats::new(base_health, base_attack),
            tapped: true,
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.info = self.info.with_text(text);
        self
    }
}

impl CardBase for CharacterCard {
    fn info(&self) -> &CardInfo {
        &self.info
    }

    fn header(&self) -> String {
        format!("{:<5}{:<22}{:>4}{:>4}  {}", "ID", "Character", "HP", "AP", "Ready")
    }

    fn row(&self) -> String {
        format!(
            "{:<5}{:<22}{:>4}{:>4}  {}",
            self.info.id.raw(),
            self.info.name,
            self.stats.hp,
            self.stats.ap,
            if self.tapped { "no" } else { "yes" }
        )
    }
}

impl CombatTarget for CharacterCard {
    fn stats(&self) -> &CombatStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut CombatStats {
        &mut self.stats
    }
}
