//! The three shared card areas on the table.
//!
//! Each area is a draw pile plus a discard pile ([`Pile`]). The monster
//! area adds its battle slots and the treasure area its shop.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::{ActiveSlot, Deck};
use crate::cards::{CardBase, CardId, LootCard, MonsterCard, TreasureCard};
use crate::core::GameRng;
use crate::error::{EngineResult, GameError};

/// A draw pile with its discard pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile<C> {
    pub deck: Deck<C>,
    pub discard: Deck<C>,
}

impl<C> Default for Pile<C> {
    fn default() -> Self {
        Self {
            deck: Deck::default(),
            discard: Deck::default(),
        }
    }
}

impl<C: CardBase> Pile<C> {
    #[must_use]
    pub fn new(deck: Deck<C>) -> Self {
        Self {
            deck,
            discard: Deck::new(),
        }
    }

    /// Draw the top card, reshuffling the discard pile into the deck first
    /// if the deck has run out.
    pub fn draw(&mut self, rng: &mut GameRng) -> EngineResult<C> {
        if self.deck.is_empty() {
            if self.discard.is_empty() {
                warn!("draw from an exhausted pile");
                return Err(GameError::EmptyDeck);
            }
            let discard = std::mem::take(&mut self.discard);
            debug!("reshuffling {} discarded cards into the deck", discard.len());
            self.deck.merge(discard, true, Some(rng));
        }
        self.deck.pop()
    }

    pub fn discard(&mut self, card: C) {
        self.discard.append(card);
    }

    /// Cards in the deck and the discard pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.len() + self.discard.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The loot area is just a pile.
pub type LootArea = Pile<LootCard>;

/// Monster deck, discard and battle slots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterArea {
    pub pile: Pile<MonsterCard>,
    pub slots: Vec<ActiveSlot>,
}

impl MonsterArea {
    #[must_use]
    pub fn new(deck: Deck<MonsterCard>, slot_count: usize) -> Self {
        Self {
            pile: Pile::new(deck),
            slots: (0..slot_count).map(|_| ActiveSlot::new()).collect(),
        }
    }

    /// Slot index of an active monster.
    #[must_use]
    pub fn find_active(&self, id: CardId) -> Option<usize> {
        self.slots.iter().position(|s| s.is_active(id))
    }

    pub fn active_monster(&self, id: CardId) -> Option<&MonsterCard> {
        self.find_active(id).and_then(|i| self.slots[i].peek())
    }

    pub fn active_monster_mut(&mut self, id: CardId) -> Option<&mut MonsterCard> {
        let index = self.find_active(id)?;
        self.slots[index].peek_mut()
    }

    /// The monster on top of each occupied slot, in slot order.
    pub fn active_monsters(&self) -> impl Iterator<Item = &MonsterCard> {
        self.slots.iter().filter_map(ActiveSlot::peek)
    }

    /// Every card in every slot, including overlaid ones.
    #[must_use]
    pub fn cards_in_slots(&self) -> usize {
        self.slots.iter().map(ActiveSlot::len).sum()
    }
}

/// Treasure deck, discard and shop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasureArea {
    pub pile: Pile<TreasureCard>,
    pub shop: Vec<Option<TreasureCard>>,
}

impl TreasureArea {
    #[must_use]
    pub fn new(deck: Deck<TreasureCard>, shop_slots: usize) -> Self {
        Self {
            pile: Pile::new(deck),
            shop: vec![None; shop_slots],
        }
    }

    /// Items currently for sale, with their slot index.
    pub fn for_sale(&self) -> impl Iterator<Item = (usize, &TreasureCard)> {
        self.shop
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|t| (i, t)))
    }

    #[must_use]
    pub fn cards_in_shop(&self) -> usize {
        self.shop.iter().flatten().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loot(ids: &[u16]) -> Deck<LootCard> {
        Deck::from_cards(ids.iter().map(|&i| LootCard::new(CardId(i), "x")).collect())
    }

    #[test]
    fn test_draw_reshuffles_discard() {
        let mut rng = GameRng::new(1);
        let mut pile = LootArea::new(loot(&[1]));
        pile.discard(LootCard::new(CardId(2), "y"));
        pile.discard(LootCard::new(CardId(3), "z"));

        assert_eq!(pile.draw(&mut rng).unwrap().info.id, CardId(1));
        pile.draw(&mut rng).unwrap();
        assert!(pile.discard.is_empty());
        pile.draw(&mut rng).unwrap();
        assert_eq!(pile.draw(&mut rng), Err(GameError::EmptyDeck));
    }

    #[test]
    fn test_find_active_monster() {
        let mut area = MonsterArea::new(Deck::new(), 2);
        area.slots[1].push(MonsterCard::new(CardId(118), "Gaper", 3, 3, 1));
        assert_eq!(area.find_active(CardId(118)), Some(1));
        assert!(area.active_monster(CardId(500)).is_none());
        assert_eq!(area.active_monsters().count(), 1);
    }

    #[test]
    fn test_shop_for_sale() {
        let mut area = TreasureArea::new(Deck::new(), 3);
        area.shop[2] = Some(TreasureCard::passive(CardId(393), "Meat!"));
        let sale: Vec<_> = area.for_sale().map(|(i, _)| i).collect();
        assert_eq!(sale, vec![2]);
        assert_eq!(area.cards_in_shop(), 1);
    }
}
