//! Loot cards: one-shot effects played from hand, and trinkets.

use serde::{Deserialize, Serialize};

use super::{CardBase, CardId, CardInfo, ItemCard};

/// A card held in hand.
///
/// Trinkets are loot cards that stay on the board as passive items once
/// played; everything else is discarded when played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootCard {
    pub info: CardInfo,
    pub trinket: bool,
    pub eternal: bool,
    pub counters: u8,
}

impl LootCard {
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            info: CardInfo::new(id, name),
            trinket: false,
            eternal: false,
            counters: 0,
        }
    }

    /// A loot card that becomes a passive item when played.
    pub fn trinket(id: CardId, name: impl Into<String>) -> Self {
        Self {
            trinket: true,
            ..Self::new(id, name)
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.info = self.info.with_text(text);
        self
    }
}

impl CardBase for LootCard {
    fn info(&self) -> &CardInfo {
        &self.info
    }

    fn header(&self) -> String {
        format!("{:<5}{:<22}{}", "ID", "Loot", "Text")
    }

    fn row(&self) -> String {
        let kind = if self.trinket { " [trinket]" } else { "" };
        format!(
            "{:<5}{:<22}{}{}",
            self.info.id.raw(),
            self.info.name,
            self.info.text,
            kind
        )
    }
}

impl ItemCard for LootCard {
    fn counters(&self) -> u8 {
        self.counters
    }

    fn counters_mut(&mut self) -> &mut u8 {
        &mut self.counters
    }

    fn is_eternal(&self) -> bool {
        self.eternal
    }

    fn is_passive(&self) -> bool {
        true
    }
}
