//! Per-seat state.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{
    Card, CardBase, CardId, CharacterCard, CombatTarget, ItemCard, LootCard, MonsterCard,
    PassiveItem, TreasureCard,
};
use crate::core::PlayerId;
use crate::error::{EngineResult, GameError};
use crate::zones::Deck;

/// One player: their character, everything in front of them, and their
/// per-turn allowances.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub character: CharacterCard,
    /// Sorted by card id.
    pub active_items: Vec<TreasureCard>,
    /// Sorted by card id.
    pub passive_items: Vec<PassiveItem>,
    pub hand: Deck<LootCard>,
    pub souls: Vec<Card>,
    pub curses: Vec<MonsterCard>,
    pub cents: u32,

    pub attacks: u8,
    pub purchases: u8,
    pub loot_plays: u8,
    pub base_attacks: u8,
    pub base_purchases: u8,
    pub base_loot_plays: u8,

    /// The monster this player is fighting.
    pub battle: Option<CardId>,
    /// End this turn as soon as the stack is empty.
    pub force_end: bool,
    pub skip_next_turn: bool,
    /// Added to every attack roll. Maintained by continuous items.
    pub attack_roll_bonus: u8,
    /// One-shot modifiers and per-turn markers, keyed by the card that set them.
    pub active_effects: FxHashSet<CardId>,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, character: CharacterCard, cents: u32) -> Self {
        Self {
            id,
            character,
            active_items: Vec::new(),
            passive_items: Vec::new(),
            hand: Deck::new(),
            souls: Vec::new(),
            curses: Vec::new(),
            cents,
            attacks: 1,
            purchases: 1,
            loot_plays: 1,
            base_attacks: 1,
            base_purchases: 1,
            base_loot_plays: 1,
            battle: None,
            force_end: false,
            skip_next_turn: false,
            attack_roll_bonus: 0,
            active_effects: FxHashSet::default(),
        }
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.character.is_dead()
    }

    #[must_use]
    pub fn in_battle(&self) -> bool {
        self.battle.is_some()
    }

    #[must_use]
    pub fn has_passive(&self, id: CardId) -> bool {
        self.passive_items.iter().any(|i| i.id() == id)
    }

    #[must_use]
    pub fn has_item(&self, id: CardId) -> bool {
        self.has_passive(id) || self.active_items.iter().any(|i| i.id() == id)
    }

    #[must_use]
    pub fn active_item(&self, id: CardId) -> Option<&TreasureCard> {
        self.active_items.iter().find(|i| i.id() == id)
    }

    pub fn active_item_mut(&mut self, id: CardId) -> Option<&mut TreasureCard> {
        self.active_items.iter_mut().find(|i| i.id() == id)
    }

    #[must_use]
    pub fn passive_item(&self, id: CardId) -> Option<&PassiveItem> {
        self.passive_items.iter().find(|i| i.id() == id)
    }

    pub fn passive_item_mut(&mut self, id: CardId) -> Option<&mut PassiveItem> {
        self.passive_items.iter_mut().find(|i| i.id() == id)
    }

    /// Any item, active or passive.
    #[must_use]
    pub fn item(&self, id: CardId) -> Option<&dyn ItemCard> {
        if let Some(t) = self.active_item(id) {
            return Some(t as &dyn ItemCard);
        }
        self.passive_item(id).map(|p| p as &dyn ItemCard)
    }

    pub fn item_mut(&mut self, id: CardId) -> Option<&mut dyn ItemCard> {
        if let Some(index) = self.active_items.iter().position(|i| i.id() == id) {
            return Some(&mut self.active_items[index] as &mut dyn ItemCard);
        }
        self.passive_item_mut(id).map(|p| p as &mut dyn ItemCard)
    }

    /// Ids of every item this player owns, active first.
    #[must_use]
    pub fn item_ids(&self) -> Vec<CardId> {
        self.active_items
            .iter()
            .map(CardBase::id)
            .chain(self.passive_items.iter().map(CardBase::id))
            .collect()
    }

    /// Items that may be destroyed or stolen.
    #[must_use]
    pub fn destructible_items(&self) -> Vec<CardId> {
        self.active_items
            .iter()
            .filter(|i| !i.eternal)
            .map(CardBase::id)
            .chain(
                self.passive_items
                    .iter()
                    .filter(|i| !i.is_eternal())
                    .map(CardBase::id),
            )
            .collect()
    }

    /// Active items that can be used right now.
    #[must_use]
    pub fn usable_items(&self) -> Vec<CardId> {
        self.active_items
            .iter()
            .filter(|i| i.is_ready())
            .map(CardBase::id)
            .collect()
    }

    /// Put an item in front of this player, keeping both rows sorted.
    pub fn add_item(&mut self, card: Card) -> EngineResult<()> {
        match card {
            Card::Treasure(t) if t.passive => self.insert_passive(PassiveItem::Treasure(t)),
            Card::Treasure(t) => {
                let at = self.active_items.partition_point(|i| i.id() < t.id());
                self.active_items.insert(at, t);
            }
            Card::Loot(l) if l.trinket => self.insert_passive(PassiveItem::Trinket(l)),
            other => {
                return Err(GameError::Invariant(format!(
                    "{} ({}) is not an item",
                    other.id(),
                    other.name()
                )))
            }
        }
        Ok(())
    }

    fn insert_passive(&mut self, item: PassiveItem) {
        let at = self.passive_items.partition_point(|i| i.id() < item.id());
        self.passive_items.insert(at, item);
    }

    /// Remove an item by id.
    pub fn take_item(&mut self, id: CardId) -> Option<Card> {
        if let Some(index) = self.active_items.iter().position(|i| i.id() == id) {
            return Some(Card::Treasure(self.active_items.remove(index)));
        }
        let index = self.passive_items.iter().position(|i| i.id() == id)?;
        Some(self.passive_items.remove(index).into())
    }

    /// Souls toward victory. Some monsters count twice.
    #[must_use]
    pub fn soul_count(&self) -> u8 {
        self.souls
            .iter()
            .map(|soul| match soul {
                Card::Monster(m) if m.counts_double() => 2u8,
                _ => 1,
            })
            .fold(0u8, u8::saturating_add)
    }

    /// Restore the per-turn allowances.
    pub fn reset_turn_counters(&mut self) {
        self.attacks = self.base_attacks;
        self.purchases = self.base_purchases;
        self.loot_plays = self.base_loot_plays;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ids;

    fn player() -> Player {
        Player::new(PlayerId(0), CharacterCard::new(ids::ISAAC, "Isaac", 2, 1), 3)
    }

    #[test]
    fn test_items_stay_sorted() {
        let mut p = player();
        p.add_item(TreasureCard::active(CardId(280), "Crystal Ball").into())
            .unwrap();
        p.add_item(TreasureCard::active(CardId(250), "The D6").into())
            .unwrap();
        p.add_item(TreasureCard::passive(CardId(393), "Meat!").into())
            .unwrap();
        p.add_item(LootCard::trinket(CardId(44), "Curved Horn").into())
            .unwrap();

        let active: Vec<_> = p.active_items.iter().map(|i| i.id().raw()).collect();
        let passive: Vec<_> = p.passive_items.iter().map(|i| i.id().raw()).collect();
        assert_eq!(active, vec![250, 280]);
        assert_eq!(passive, vec![44, 393]);
        assert!(p.has_passive(CardId(44)));
        assert!(p.has_item(CardId(250)));
    }

    #[test]
    fn test_plain_loot_is_not_an_item() {
        let mut p = player();
        let err = p.add_item(LootCard::new(CardId(1), "A Penny").into());
        assert!(matches!(err, Err(GameError::Invariant(_))));
    }

    #[test]
    fn test_take_item() {
        let mut p = player();
        p.add_item(TreasureCard::passive(CardId(393), "Meat!").into())
            .unwrap();
        assert!(matches!(p.take_item(CardId(393)), Some(Card::Treasure(_))));
        assert!(p.take_item(CardId(393)).is_none());
    }

    #[test]
    fn test_soul_count_doubles_mega_bosses() {
        let mut p = player();
        p.souls.push(MonsterCard::boss(ids::MONSTRO, "Monstro", 4, 4, 1).into());
        p.souls.push(MonsterCard::boss(ids::MOM, "Mom", 15, 4, 2).into());
        assert_eq!(p.soul_count(), 3);
    }

    #[test]
    fn test_usable_and_destructible() {
        let mut p = player();
        p.add_item(TreasureCard::active(ids::THE_D6, "The D6").eternal().into())
            .unwrap();
        p.add_item(TreasureCard::active(ids::CRYSTAL_BALL, "Crystal Ball").into())
            .unwrap();
        p.active_item_mut(ids::CRYSTAL_BALL).unwrap().tapped = true;

        assert_eq!(p.usable_items(), vec![ids::THE_D6]);
        assert_eq!(p.destructible_items(), vec![ids::CRYSTAL_BALL]);
    }
}
