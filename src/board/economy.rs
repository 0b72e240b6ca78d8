//! Cents, loot, items and counters.

use log::{debug, warn};

use super::Board;
use crate::cards::{ids, Card, CardBase, CardId, CombatTarget, ItemCard};
use crate::core::{pick_index, ChoiceProvider, PlayerId};
use crate::effects::DeckKind;
use crate::error::{EngineResult, GameError};
use crate::stack::Target;
use crate::zones::Deck;

impl Board {
    /// Give `player` cents.
    ///
    /// Bum-bo soaks up every gain as counters on itself; its first counter
    /// arms the +2 attack roll bonus. Counterfeit Penny adds one to every
    /// gain.
    pub fn gain_cents(&mut self, player: PlayerId, amount: u32) {
        if amount == 0 {
            return;
        }
        let owner = &mut self.players[player];
        let amount = if owner.has_passive(ids::COUNTERFEIT_PENNY) {
            amount + 1
        } else {
            amount
        };
        if let Some(bumbo) = owner.passive_item_mut(ids::BUMBO) {
            let empty = bumbo.counters() == 0;
            bumbo.add_counters(u8::try_from(amount).unwrap_or(u8::MAX));
            debug!("{player}'s Bum-bo takes {amount} cents");
            if empty {
                owner.active_effects.insert(ids::BUMBO);
            }
            return;
        }
        owner.cents = owner.cents.saturating_add(amount);
    }

    /// Take cents away, never below zero. Returns how many were lost.
    pub fn lose_cents(&mut self, player: PlayerId, amount: u32) -> u32 {
        let owner = &mut self.players[player];
        let lost = amount.min(owner.cents);
        owner.cents -= lost;
        lost
    }

    /// Move up to `amount` cents from one player to another.
    pub fn take_cents(&mut self, from: PlayerId, to: PlayerId, amount: u32) {
        let taken = self.lose_cents(from, amount);
        self.gain_cents(to, taken);
    }

    /// Draw `count` loot cards into `player`'s hand.
    pub fn loot(&mut self, player: PlayerId, count: u8) -> EngineResult<()> {
        for _ in 0..count {
            match self.loot.draw(&mut self.rng) {
                Ok(card) => self.players[player].hand.append(card),
                Err(GameError::EmptyDeck) => {
                    warn!("{player} could not loot: the loot deck is exhausted");
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Discard the hand card at `index`.
    pub fn discard_hand_card(&mut self, player: PlayerId, index: usize) -> EngineResult<()> {
        let card = self.players[player].hand.pop_by_index(index)?;
        debug!("{player} discarded {}", card.name());
        self.loot.discard(card);
        Ok(())
    }

    /// `player` picks `count` hand cards to discard. Stops early on an
    /// empty hand.
    pub fn choose_discard(
        &mut self,
        player: PlayerId,
        count: u8,
        input: &mut dyn ChoiceProvider,
    ) -> EngineResult<()> {
        for _ in 0..count {
            let len = self.players[player].hand.len();
            match pick_index(input, player, "discard a loot card", len) {
                Some(index) => self.discard_hand_card(player, index)?,
                None => break,
            }
        }
        Ok(())
    }

    pub fn heal(&mut self, target: Target, amount: u8) -> EngineResult<()> {
        match target {
            Target::Player(p) => self.players[p].character.heal(amount),
            Target::Monster(id) => self
                .monsters
                .active_monster_mut(id)
                .ok_or(GameError::CardNotFound { card: id })?
                .heal(amount),
        }
        Ok(())
    }

    /// Attack bonus until the end of the turn.
    pub fn buff_attack(&mut self, target: Target, amount: u8) -> EngineResult<()> {
        match target {
            Target::Player(p) => self.players[p].character.increase_ap(amount),
            Target::Monster(id) => self
                .monsters
                .active_monster_mut(id)
                .ok_or(GameError::CardNotFound { card: id })?
                .increase_ap(amount),
        }
        Ok(())
    }

    pub fn add_counters(&mut self, player: PlayerId, card: CardId, count: u8) -> EngineResult<()> {
        self.players[player]
            .item_mut(card)
            .ok_or(GameError::CardNotFound { card })?
            .add_counters(count);
        Ok(())
    }

    pub fn spend_counters(&mut self, player: PlayerId, card: CardId, count: u8) -> EngineResult<()> {
        let item = self.players[player]
            .item_mut(card)
            .ok_or(GameError::CardNotFound { card })?;
        if !item.remove_counters(count) {
            return Err(GameError::NoLegalTarget(format!(
                "{card} has fewer than {count} counters"
            )));
        }
        Ok(())
    }

    /// Ready a tapped item.
    pub fn recharge(&mut self, player: PlayerId, card: CardId) -> EngineResult<()> {
        let owner = &mut self.players[player];
        if owner.character.id() == card {
            owner.character.tapped = false;
            return Ok(());
        }
        let item = owner
            .active_item_mut(card)
            .ok_or(GameError::CardNotFound { card })?;
        item.tapped = false;
        Ok(())
    }

    /// Ready the character and every active item.
    pub fn recharge_all(&mut self, player: PlayerId) {
        let owner = &mut self.players[player];
        owner.character.tapped = false;
        for item in &mut owner.active_items {
            item.tapped = false;
        }
    }

    /// Tap the character and every active item.
    pub fn tap_all(&mut self, player: PlayerId) {
        let owner = &mut self.players[player];
        owner.character.tapped = true;
        for item in owner.active_items.iter_mut().filter(|i| i.active) {
            item.tapped = true;
        }
    }

    /// Draw treasures straight into play.
    pub fn gain_treasure(&mut self, player: PlayerId, count: u8) -> EngineResult<()> {
        for _ in 0..count {
            match self.treasure.pile.draw(&mut self.rng) {
                Ok(card) => {
                    debug!("{player} gained {}", card.name());
                    self.add_card_to_board(player, card.into())?;
                }
                Err(GameError::EmptyDeck) => {
                    warn!("{player} could not gain a treasure: the deck is exhausted");
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Put an item in front of `player` and run its continuous hook.
    pub fn add_card_to_board(&mut self, player: PlayerId, card: Card) -> EngineResult<()> {
        let id = card.id();
        self.players[player].add_item(card)?;
        self.run_continuous(player, id, false);
        Ok(())
    }

    /// Take an item out of play, running its continuous hook first.
    pub fn remove_item(&mut self, player: PlayerId, card: CardId) -> EngineResult<Card> {
        if !self.players[player].has_item(card) {
            return Err(GameError::CardNotFound { card });
        }
        self.run_continuous(player, card, true);
        self.players[player]
            .take_item(card)
            .ok_or(GameError::CardNotFound { card })
    }

    /// Destroy a non-eternal item.
    pub fn destroy_item(&mut self, player: PlayerId, card: CardId) -> EngineResult<()> {
        let eternal = self.players[player]
            .item(card)
            .ok_or(GameError::CardNotFound { card })?
            .is_eternal();
        if eternal {
            return Err(GameError::NoLegalTarget(format!("{card} is eternal")));
        }
        let removed = self.remove_item(player, card)?;
        debug!("{player} lost {}", removed.name());
        self.discard_card(removed)
    }

    /// Move an item from one player to another, eternal or not.
    pub fn give_item(&mut self, from: PlayerId, to: PlayerId, card: CardId) -> EngineResult<()> {
        let item = self.remove_item(from, card)?;
        debug!("{from} gave {} to {to}", item.name());
        self.add_card_to_board(to, item)
    }

    /// Send a card to the discard pile of its deck, back at printed values.
    pub fn discard_card(&mut self, card: Card) -> EngineResult<()> {
        match card {
            Card::Loot(mut l) => {
                l.counters = 0;
                self.loot.discard(l);
            }
            Card::Monster(mut m) => {
                m.reset_stats();
                self.monsters.pile.discard(m);
            }
            Card::Treasure(mut t) => {
                t.counters = 0;
                t.tapped = false;
                self.treasure.pile.discard(t);
            }
            Card::Character(c) => {
                return Err(GameError::Invariant(format!(
                    "character {} cannot be discarded",
                    c.name()
                )))
            }
        }
        Ok(())
    }

    /// The item loses its abilities and joins its owner's souls.
    pub fn item_to_soul(&mut self, player: PlayerId, card: CardId) -> EngineResult<()> {
        let item = self.remove_item(player, card)?;
        debug!("{} became a soul for {player}", item.name());
        self.players[player].souls.push(item);
        Ok(())
    }

    /// Put a monster soul back on top of the monster deck.
    pub fn return_soul_to_deck(&mut self, player: PlayerId, card: CardId) -> EngineResult<()> {
        let souls = &mut self.players[player].souls;
        let index = souls
            .iter()
            .position(|s| matches!(s, Card::Monster(m) if m.id() == card))
            .ok_or(GameError::CardNotFound { card })?;
        if let Card::Monster(mut monster) = souls.remove(index) {
            monster.reset_stats();
            debug!("{} returned to the top of the monster deck", monster.name());
            self.monsters.pile.deck.append(monster);
        }
        Ok(())
    }

    /// Look at the top `count` cards of a deck and put them back in an
    /// order `player` picks.
    pub fn reorder_deck_top(
        &mut self,
        player: PlayerId,
        deck: DeckKind,
        count: u8,
        input: &mut dyn ChoiceProvider,
    ) {
        match deck {
            DeckKind::Loot => reorder_top(&mut self.loot.deck, player, count, input),
            DeckKind::Monster => reorder_top(&mut self.monsters.pile.deck, player, count, input),
            DeckKind::Treasure => reorder_top(&mut self.treasure.pile.deck, player, count, input),
        }
    }
}

/// Take the top `count` cards off `deck`; the player puts them back one at
/// a time, the last one placed ending on top.
fn reorder_top<C: CardBase>(
    deck: &mut Deck<C>,
    player: PlayerId,
    count: u8,
    input: &mut dyn ChoiceProvider,
) {
    let mut taken: Vec<C> = Vec::with_capacity(usize::from(count));
    for _ in 0..count {
        match deck.pop() {
            Ok(card) => taken.push(card),
            Err(_) => break,
        }
    }
    while let Some(index) = pick_index(input, player, "put a card back on the deck", taken.len()) {
        deck.append(taken.remove(index));
    }
}
