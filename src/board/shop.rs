//! Prices and purchases.

use log::{debug, warn};

use super::Board;
use crate::cards::{ids, CardBase, CardId};
use crate::core::{pick_index, ChoiceProvider, PlayerId};
use crate::error::{EngineResult, GameError};
use crate::stack::PurchaseTarget;

impl Board {
    /// What `player` pays for their next item.
    ///
    /// A pending Credit Card makes it free; Steamy Sale halves it.
    #[must_use]
    pub fn price_for(&self, player: PlayerId) -> u32 {
        if self.has_active_effect(player, ids::CREDIT_CARD) {
            0
        } else if self.players[player].has_passive(ids::STEAMY_SALE) {
            self.config.shop_price / 2
        } else {
            self.config.shop_price
        }
    }

    #[must_use]
    pub fn can_afford(&self, player: PlayerId) -> bool {
        self.players[player].cents >= self.price_for(player)
    }

    /// Buy an item from the shop or the top of the treasure deck.
    ///
    /// Nothing changes unless the purchase succeeds. A bought shop slot is
    /// refilled straight away.
    pub fn purchase(&mut self, player: PlayerId, target: PurchaseTarget) -> EngineResult<CardId> {
        let price = self.price_for(player);
        let available = self.players[player].cents;
        if available < price {
            return Err(GameError::InsufficientCents {
                player,
                needed: price,
                available,
            });
        }

        let card = match target {
            PurchaseTarget::Shop(slot) => {
                let len = self.treasure.shop.len();
                let entry = self
                    .treasure
                    .shop
                    .get_mut(slot)
                    .ok_or(GameError::IndexOutOfRange { index: slot, len })?;
                entry.take().ok_or(GameError::EmptySlot { slot })?
            }
            PurchaseTarget::DeckTop => self.treasure.pile.draw(&mut self.rng)?,
        };

        let owner = &mut self.players[player];
        owner.active_effects.remove(&ids::CREDIT_CARD);
        owner.cents -= price;

        let id = card.id();
        debug!("{player} bought {} for {price}", card.name());
        self.add_card_to_board(player, card.into())?;
        self.refill_shop();
        Ok(id)
    }

    /// Put a card from the treasure deck into every empty shop slot.
    pub fn refill_shop(&mut self) {
        for slot in 0..self.treasure.shop.len() {
            if self.treasure.shop[slot].is_some() {
                continue;
            }
            match self.treasure.pile.draw(&mut self.rng) {
                Ok(card) => self.treasure.shop[slot] = Some(card),
                Err(_) => {
                    warn!("shop slot {slot} left empty: the treasure deck is exhausted");
                    return;
                }
            }
        }
    }

    /// Ask `player` what to buy: any item for sale, or the top of the deck.
    pub fn choose_purchase_target(
        &self,
        player: PlayerId,
        input: &mut dyn ChoiceProvider,
    ) -> Option<PurchaseTarget> {
        let mut options: Vec<PurchaseTarget> = self
            .treasure
            .for_sale()
            .map(|(slot, _)| PurchaseTarget::Shop(slot))
            .collect();
        if !self.treasure.pile.is_empty() {
            options.push(PurchaseTarget::DeckTop);
        }
        let index = pick_index(input, player, "buy which item", options.len())?;
        Some(options[index])
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cards::TreasureCard;
    use crate::catalog::StarterCatalog;
    use crate::core::{GameConfig, ScriptedChoices};

    fn board() -> Board {
        Board::new(GameConfig::new(2).with_seed(33), Arc::new(StarterCatalog::new())).unwrap()
    }

    #[test]
    fn test_price_modifiers() {
        let mut b = board();
        let p = PlayerId(0);
        assert_eq!(b.price_for(p), 10);
        b.add_card_to_board(p, TreasureCard::passive(ids::STEAMY_SALE, "Steamy Sale!").into())
            .unwrap();
        assert_eq!(b.price_for(p), 5);
        b.players[p].active_effects.insert(ids::CREDIT_CARD);
        assert_eq!(b.price_for(p), 0);
    }

    #[test]
    fn test_purchase_needs_cents() {
        let mut b = board();
        let p = PlayerId(1);
        let err = b.purchase(p, PurchaseTarget::Shop(0)).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientCents {
                player: p,
                needed: 10,
                available: 3
            }
        );
        assert_eq!(b.treasure.cards_in_shop(), 2);
    }

    #[test]
    fn test_purchase_from_shop_refills_slot() {
        let mut b = board();
        let p = PlayerId(0);
        b.players[p].cents = 12;
        let for_sale = b.treasure.shop[1].as_ref().map(CardBase::id).unwrap();

        let bought = b.purchase(p, PurchaseTarget::Shop(1)).unwrap();
        assert_eq!(bought, for_sale);
        assert!(b.players[p].has_item(for_sale));
        assert_eq!(b.players[p].cents, 2);
        assert!(b.treasure.shop[1].is_some());
    }

    #[test]
    fn test_credit_card_is_used_up() {
        let mut b = board();
        let p = PlayerId(0);
        b.players[p].active_effects.insert(ids::CREDIT_CARD);
        b.purchase(p, PurchaseTarget::DeckTop).unwrap();
        assert_eq!(b.players[p].cents, 3);
        assert!(!b.has_active_effect(p, ids::CREDIT_CARD));
    }

    #[test]
    fn test_bad_shop_index() {
        let mut b = board();
        b.players[PlayerId(0)].cents = 20;
        let err = b.purchase(PlayerId(0), PurchaseTarget::Shop(7)).unwrap_err();
        assert_eq!(err, GameError::IndexOutOfRange { index: 7, len: 2 });
    }

    #[test]
    fn test_choose_purchase_target_offers_deck_top_last() {
        let b = board();
        let mut input = ScriptedChoices::new([2]);
        assert_eq!(
            b.choose_purchase_target(PlayerId(0), &mut input),
            Some(PurchaseTarget::DeckTop)
        );
    }
}
