//! Treasure cards: items bought from the shop or dealt at setup.

use serde::{Deserialize, Serialize};

use super::{CardBase, CardId, CardInfo, ItemCard};

/// An item from the treasure deck.
///
/// A treasure is passive (always on, possibly reacting to events), active
/// (tap to use), paid (pay a cost to use, no tapping) or both active and
/// paid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasureCard {
    pub info: CardInfo,
    pub eternal: bool,
    pub passive: bool,
    pub active: bool,
    pub paid: bool,
    pub tapped: bool,
    pub counters: u8,
}

impl TreasureCard {
    fn base(id: CardId, name: impl Into<String>) -> Self {
        Self {
            info: CardInfo::new(id, name),
            eternal: false,
            passive: false,
            active: false,
            paid: false,
            tapped: false,
            counters: 0,
        }
    }

    /// A tap-to-use item.
    pub fn active(id: CardId, name: impl Into<String>) -> Self {
        Self {
            active: true,
            ..Self::base(id, name)
        }
    }

    /// An always-on item.
    pub fn passive(id: CardId, name: impl Into<String>) -> Self {
        Self {
            passive: true,
            ..Self::base(id, name)
        }
    }

    /// A pay-to-use item that never taps.
    pub fn paid(id: CardId, name: impl Into<String>) -> Self {
        Self {
            paid: true,
            ..Self::base(id, name)
        }
    }

    /// Also usable by paying a cost.
    #[must_use]
    pub fn with_paid(mut self) -> Self {
        self.paid = true;
        self
    }

    /// Immune to theft and destruction. Starting items are eternal.
    #[must_use]
    pub fn eternal(mut self) -> Self {
        self.eternal = true;
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.info = self.info.with_text(text);
        self
    }

    /// Can be used through the activation protocol.
    #[must_use]
    pub fn is_activatable(&self) -> bool {
        self.active || self.paid
    }

    /// Activatable and not currently tapped.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.is_activatable() && !self.tapped
    }
}

impl CardBase for TreasureCard {
    fn info(&self) -> &CardInfo {
        &self.info
    }

    fn header(&self) -> String {
        format!("{:<5}{:<22}{:<8}{:>9}", "ID", "Treasure", "Type", "Counters")
    }

    fn row(&self) -> String {
        let kind = match (self.passive, self.active, self.paid) {
            (true, _, _) => "passive",
            (_, true, true) => "act/paid",
            (_, true, false) => "active",
            (_, false, true) => "paid",
            _ => "-",
        };
        let state = if self.tapped { " (tapped)" } else { "" };
        format!(
            "{:<5}{:<22}{:<8}{:>9}{}",
            self.info.id.raw(),
            self.info.name,
            kind,
            self.counters,
            state
        )
    }
}

impl ItemCard for TreasureCard {
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
        self.passive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ids;

    #[test]
    fn test_activatable() {
        let d6 = TreasureCard::active(ids::THE_D6, "The D6").eternal();
        assert!(d6.is_ready());
        assert!(d6.is_eternal());

        let meat = TreasureCard::passive(ids::MEAT, "Meat!");
        assert!(!meat.is_activatable());

        let bone = TreasureCard::active(ids::THE_BONE, "The Bone").with_paid();
        assert!(bone.active && bone.paid);
    }

    #[test]
    fn test_counters() {
        let mut bone = TreasureCard::active(ids::THE_BONE, "The Bone");
        bone.add_counters(2);
        assert!(!bone.remove_counters(3));
        assert_eq!(bone.counters(), 2);
        assert!(bone.remove_counters(2));
        assert_eq!(bone.counters(), 0);
    }
}
