//! Monster battle slots.

use serde::{Deserialize, Serialize};

use crate::cards::{CardBase, CardId, MonsterCard};

/// One battle zone: a small stack of monsters.
///
/// The top card is the active monster; cards beneath it are overlaid and
/// dormant until the top one leaves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSlot {
    monsters: Vec<MonsterCard>,
}

impl ActiveSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay a monster on top of the slot.
    pub fn push(&mut self, monster: MonsterCard) {
        self.monsters.push(monster);
    }

    /// Remove the active monster, revealing the one beneath.
    pub fn pop(&mut self) -> Option<MonsterCard> {
        self.monsters.pop()
    }

    /// The active monster, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&MonsterCard> {
        self.monsters.last()
    }

    pub fn peek_mut(&mut self) -> Option<&mut MonsterCard> {
        self.monsters.last_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    /// Whether the active monster has this id.
    #[must_use]
    pub fn is_active(&self, id: CardId) -> bool {
        self.peek().is_some_and(|m| m.id() == id)
    }

    /// Bottom to top, active monster last.
    pub fn iter(&self) -> std::slice::Iter<'_, MonsterCard> {
        self.monsters.iter()
    }
}
