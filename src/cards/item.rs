//! Item capability shared by treasures and trinkets.

use serde::{Deserialize, Serialize};

use super::{Card, CardBase, CardInfo, LootCard, TreasureCard};

/// A card that sits in front of a player as an item.
///
/// Behaviour hooks (continuous and event-reactive) are not stored on the
/// card; they are looked up by card id through
/// [`CardBehavior`](crate::activation::CardBehavior).
pub trait ItemCard: CardBase {
    fn counters(&self) -> u8;

    fn counters_mut(&mut self) -> &mut u8;

    fn is_eternal(&self) -> bool;

    fn is_passive(&self) -> bool;

    fn add_counters(&mut self, n: u8) {
        let counters = self.counters_mut();
        *counters = counters.saturating_add(n);
    }

    /// Remove `n` counters if there are that many. Returns false otherwise.
    fn remove_counters(&mut self, n: u8) -> bool {
        let counters = self.counters_mut();
        if *counters < n {
            return false;
        }
        *counters -= n;
        true
    }
}

/// An item in a player's passive row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassiveItem {
    Treasure(TreasureCard),
    Trinket(LootCard),
}

impl PassiveItem {
    fn as_item(&self) -> &dyn ItemCard {
        match self {
            PassiveItem::Treasure(t) => t,
            PassiveItem::Trinket(l) => l,
        }
    }

    fn as_item_mut(&mut self) -> &mut dyn ItemCard {
        match self {
            PassiveItem::Treasure(t) => t,
            PassiveItem::Trinket(l) => l,
        }
    }
}

impl CardBase for PassiveItem {
    fn info(&self) -> &CardInfo {
        self.as_item().info()
    }

    fn header(&self) -> String {
        self.as_item().header()
    }

    fn row(&self) -> String {
        self.as_item().row()
    }
}

impl ItemCard for PassiveItem {
    fn counters(&self) -> u8 {
        self.as_item().counters()
    }

    fn counters_mut(&mut self) -> &mut u8 {
        self.as_item_mut().counters_mut()
    }

    fn is_eternal(&self) -> bool {
        self.as_item().is_eternal()
    }

    fn is_passive(&self) -> bool {
        true
    }
}

impl From<PassiveItem> for Card {
    fn from(item: PassiveItem) -> Self {
        match item {
            PassiveItem::Treasure(t) => Card::Treasure(t),
            PassiveItem::Trinket(l) => Card::Loot(l),
        }
    }
}
