//! Damage, battles, kills and deaths.
//!
//! Damage is always pushed as an event first and applied when that event
//! resolves, so prevention effects get a chance to shrink or cancel it.
//! Items that only ever prevent (Guppy's Hairball, The Dead Cat, Broken
//! Ankh, Guppy's Collar, 1up!) are wired in here when the damage or death
//! is pushed rather than found by the trigger scan.

use std::sync::Arc;

use log::{debug, info};

use super::Board;
use crate::activation::{BindContext, Binding};
use crate::cards::{ids, CardBase, CardId, CombatTarget, ItemCard, MonsterCard, MonsterKind, Reward, RollReward};
use crate::core::{pick_index, ChoiceProvider, PlayerId};
use crate::effects::Effect;
use crate::error::{EngineResult, GameError};
use crate::stack::{Event, EventKind, NodeId, Target};

/// What applying damage to a player did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageOutcome {
    Survived,
    Died,
    /// The player was already dead.
    Ignored,
}

impl Board {
    // === Pushing damage ===

    /// Push damage to an active monster.
    ///
    /// `combat_roll` is the attack roll when the damage comes from a hit.
    pub fn damage_monster(
        &mut self,
        source: PlayerId,
        monster: CardId,
        amount: u8,
        combat_roll: Option<u8>,
    ) -> EngineResult<NodeId> {
        if self.monsters.find_active(monster).is_none() {
            return Err(GameError::CardNotFound { card: monster });
        }
        let mut event = Event::new(
            source,
            EventKind::Damage {
                target: Target::Monster(monster),
                amount,
                monster: None,
            },
        );
        event.roll = combat_roll;
        Ok(self.stack.push(event))
    }

    /// Push damage to a player, then the target's prevention items above it.
    pub fn damage_player(
        &mut self,
        source: PlayerId,
        target: PlayerId,
        amount: u8,
        monster: Option<CardId>,
        roll: Option<u8>,
    ) -> EngineResult<NodeId> {
        let mut event = Event::new(
            source,
            EventKind::Damage {
                target: Target::Player(target),
                amount,
                monster,
            },
        );
        event.roll = roll;
        let node = self.stack.push(event);

        let owner = &self.players[target];
        let hairball = owner.has_passive(ids::GUPPYS_HAIRBALL);
        let dead_cat = owner
            .item(ids::THE_DEAD_CAT)
            .is_some_and(|cat| cat.counters() > 0);

        if hairball {
            let prevent = Effect::by_roll([(6, 6, Effect::PreventDamage { node, amount: 1 })]);
            self.push_triggered(target, ids::GUPPYS_HAIRBALL, Binding::with_roll(prevent))?;
        }
        if dead_cat {
            let prevent = Effect::batch([
                Effect::SpendCounters {
                    player: target,
                    card: ids::THE_DEAD_CAT,
                    count: 1,
                },
                Effect::PreventDamage { node, amount: 1 },
            ]);
            self.push_triggered(target, ids::THE_DEAD_CAT, Binding::new(prevent))?;
        }
        Ok(node)
    }

    // === Applying damage ===

    /// Take hp from a player. Dry Baby turns any damage into exactly 1.
    pub fn apply_player_damage(&mut self, target: PlayerId, amount: u8) -> DamageOutcome {
        let owner = &mut self.players[target];
        if owner.is_dead() {
            return DamageOutcome::Ignored;
        }
        let amount = if owner.has_passive(ids::DRY_BABY) {
            amount.min(1)
        } else {
            amount
        };
        owner.character.decrease_hp(amount);
        debug!("{target} took {amount} damage, {} hp left", owner.character.hp());
        if owner.is_dead() {
            DamageOutcome::Died
        } else {
            DamageOutcome::Survived
        }
    }

    /// After surviving damage: if the next event is this player's
    /// activation that had the damage as its cost, mark the cost as paid.
    pub fn mark_cost_paid(&mut self, player: PlayerId) {
        let card = self
            .stack
            .peek()
            .filter(|node| node.event.player == player)
            .and_then(|node| node.event.kind.effect())
            .and_then(Effect::cost_card);
        if let Some(card) = card {
            debug!("{player} paid the cost of {card}");
            self.players[player].active_effects.insert(card);
        }
    }

    /// Take hp from an active monster and kill it if that was enough.
    ///
    /// Combat damage to Carrion Queen only lands on a 6; combat damage to
    /// Pin never lands on a 6.
    pub fn apply_monster_damage(
        &mut self,
        source: PlayerId,
        monster: CardId,
        amount: u8,
        combat_roll: Option<u8>,
        input: &mut dyn ChoiceProvider,
    ) -> EngineResult<()> {
        let amount = match combat_roll {
            Some(roll) if monster == ids::CARRION_QUEEN && roll != 6 => 0,
            Some(6) if monster == ids::PIN => 0,
            _ => amount,
        };
        let card = self
            .monsters
            .active_monster_mut(monster)
            .ok_or(GameError::CardNotFound { card: monster })?;
        if card.is_dead() {
            return Ok(());
        }
        card.decrease_hp(amount);
        debug!("{} took {amount} damage, {} hp left", card.name(), card.hp());
        if card.is_dead() {
            self.kill_monster(source, monster, input)?;
        }
        Ok(())
    }

    // === Monsters ===

    /// Kill an active monster on behalf of `killer`.
    ///
    /// The monster leaves its slot; its on-death effect is pushed, then its
    /// reward. Bosses become the killer's souls. Linked monsters die with it.
    pub fn kill_monster(
        &mut self,
        killer: PlayerId,
        monster: CardId,
        input: &mut dyn ChoiceProvider,
    ) -> EngineResult<()> {
        let slot = self
            .monsters
            .find_active(monster)
            .ok_or(GameError::CardNotFound { card: monster })?;
        let mut card = self.monsters.slots[slot]
            .pop()
            .ok_or(GameError::EmptySlot { slot })?;
        card.reset_stats();
        info!("{killer} killed {}", card.name());

        for (_, player) in self.players.iter_mut() {
            if player.battle == Some(monster) {
                player.battle = None;
            }
        }

        self.trigger_on_death(killer, monster, input)?;

        let reward = card.reward;
        if card.is_boss() || card.counts_double() {
            if monster == ids::THE_HAUNT {
                for (_, player) in self.players.iter_mut() {
                    player.active_effects.remove(&ids::THE_HAUNT);
                }
            }
            self.players[killer].souls.push(card.into());
        } else {
            self.monsters.pile.discard(card);
        }

        if let Some(owner) = self.owner_of(ids::THE_MIDAS_TOUCH) {
            self.gain_cents(owner, 3);
        }

        self.stack.push(Event::new(
            killer,
            EventKind::MonsterReward { monster, reward },
        ));
        if reward.requires_roll() {
            self.roll_dice()?;
        }

        for linked in ids::LINKED_KILLS {
            if linked != monster && self.monsters.find_active(linked).is_some() {
                self.kill_monster(killer, linked, input)?;
            }
        }
        Ok(())
    }

    /// Push the on-death (or on-reveal) effect of `card`, if it has one.
    pub fn trigger_on_death(
        &mut self,
        player: PlayerId,
        card: CardId,
        input: &mut dyn ChoiceProvider,
    ) -> EngineResult<Option<NodeId>> {
        let catalog = Arc::clone(self.catalog());
        let Some(behavior) = catalog.behavior(card) else {
            return Ok(None);
        };
        let binding = behavior.on_death(&mut BindContext::new(self, player, card, input));
        match binding {
            Some(binding) => self.push_triggered(player, card, binding).map(Some),
            None => Ok(None),
        }
    }

    /// Pay out a monster reward. `roll` feeds roll-dependent rewards.
    pub fn pay_reward(&mut self, player: PlayerId, reward: Reward, roll: Option<u8>) -> EngineResult<()> {
        self.gain_cents(player, u32::from(reward.cents));
        self.loot(player, reward.loot)?;
        self.gain_treasure(player, reward.treasure)?;
        match (reward.roll, roll) {
            (Some(RollReward::Cents), Some(r)) => self.gain_cents(player, u32::from(r)),
            (Some(RollReward::Loot), Some(r)) => self.loot(player, r)?,
            (Some(_), None) => debug!("{player}'s reward roll never arrived"),
            (None, _) => {}
        }
        Ok(())
    }

    // === Battle ===

    /// Start fighting an active monster.
    pub fn enter_battle(&mut self, player: PlayerId, monster: CardId) -> EngineResult<()> {
        let card = self
            .monsters
            .active_monster_mut(monster)
            .ok_or(GameError::CardNotFound { card: monster })?;
        card.in_battle = true;
        debug!("{player} attacks {}", card.name());
        self.players[player].battle = Some(monster);
        Ok(())
    }

    /// Commit one attack roll against the monster `player` is fighting.
    pub fn declare_attack(&mut self, player: PlayerId) -> EngineResult<NodeId> {
        let monster = self.players[player]
            .battle
            .ok_or(GameError::NotInBattle { player })?;
        let node = self
            .stack
            .push(Event::new(player, EventKind::DeclareAttack { monster }));
        self.roll_dice()?;
        Ok(node)
    }

    /// Resolve one attack roll.
    ///
    /// A roll of at least the monster's number hits for the attacker's
    /// attack; anything lower and the monster hits back.
    pub fn battle(&mut self, attacker: PlayerId, monster: CardId, roll: u8) -> EngineResult<NodeId> {
        let (needed, monster_ap) = self
            .monsters
            .active_monster(monster)
            .map(|card| (card.roll, card.ap()))
            .ok_or(GameError::CardNotFound { card: monster })?;

        if roll >= needed {
            let amount = self.attack_power(attacker);
            debug!("{attacker} hit {monster} with a {roll} for {amount}");
            return self.damage_monster(attacker, monster, amount, Some(roll));
        }

        let amount = match (monster, roll) {
            (ids::HORF, 2) => monster_ap.saturating_add(1),
            (ids::LEAPER | ids::MOM, 1) => monster_ap.saturating_mul(2),
            _ => monster_ap,
        };
        debug!("{attacker} missed {monster} with a {roll}");
        self.damage_player(attacker, attacker, amount, Some(monster), Some(roll))
    }

    /// Character attack plus one-shot bonuses, which are used up.
    fn attack_power(&mut self, player: PlayerId) -> u8 {
        let owner = &mut self.players[player];
        let mut amount = owner.character.ap();
        for key in [ids::CURVED_HORN, ids::CHAMPION_BELT, ids::POLYDACTYLY] {
            if owner.active_effects.remove(&key) {
                amount = amount.saturating_add(1);
            }
        }
        if owner.has_passive(ids::EMPTY_VESSEL) && owner.hand.is_empty() {
            amount = amount.saturating_add(1);
        }
        amount
    }

    /// Leave battle. The monster heals unless someone else is still on it.
    pub fn end_battle(&mut self, player: PlayerId) {
        let Some(monster) = self.players[player].battle.take() else {
            return;
        };
        let still_fought = self.players.values().any(|p| p.battle == Some(monster));
        if !still_fought {
            if let Some(card) = self.monsters.active_monster_mut(monster) {
                card.reset_stats();
            }
        }
    }

    /// Reveal the top of the monster deck and deal with it.
    ///
    /// Bonus cards resolve and are discarded. Curses go to a player of
    /// `player`'s choosing. Monsters are overlaid on a chosen slot and
    /// attacked straight away.
    pub fn attack_the_deck(&mut self, player: PlayerId, input: &mut dyn ChoiceProvider) -> EngineResult<()> {
        let card = self.monsters.pile.draw(&mut self.rng)?;
        debug!("{player} revealed {}", card.name());
        match card.kind {
            MonsterKind::Bonus => {
                let id = card.id();
                self.monsters.pile.discard(card);
                self.trigger_on_death(player, id, input)?;
            }
            MonsterKind::Curse => self.curse_chosen_player(player, card, input),
            MonsterKind::Basic | MonsterKind::Boss => {
                let id = card.id();
                let slot = pick_index(input, player, "overlay on which slot", self.monsters.slots.len())
                    .ok_or_else(|| GameError::Invariant("no monster slots".into()))?;
                self.monsters.slots[slot].push(card);
                self.enter_battle(player, id)?;
                self.declare_attack(player)?;
            }
        }
        Ok(())
    }

    /// `chooser` gives a revealed curse to another living player. With
    /// nobody else alive it stays with the chooser.
    pub(crate) fn curse_chosen_player(
        &mut self,
        chooser: PlayerId,
        curse: MonsterCard,
        input: &mut dyn ChoiceProvider,
    ) {
        let others = self.living_others(chooser);
        let target = pick_index(input, chooser, "give the curse to", others.len()).map_or(chooser, |i| others[i]);
        self.give_curse(target, curse);
    }

    pub fn give_curse(&mut self, player: PlayerId, curse: MonsterCard) {
        let id = curse.id();
        debug!("{player} is cursed with {}", curse.name());
        self.players[player].curses.push(curse);
        self.run_continuous(player, id, false);
    }

    // === Death ===

    /// Kill a player outright.
    pub fn kill_player(&mut self, player: PlayerId) -> EngineResult<NodeId> {
        let character = &mut self.players[player].character;
        let hp = character.hp();
        character.decrease_hp(hp);
        self.push_death(player)
    }

    /// Push a death, then the dying player's death prevention above it.
    pub fn push_death(&mut self, player: PlayerId) -> EngineResult<NodeId> {
        let node = self
            .stack
            .push(Event::new(player, EventKind::CharacterDeath));
        info!("{player} is dying");

        let prevent = Effect::PreventDeath { node, player };
        let owner = &self.players[player];
        let ankh = owner.has_passive(ids::BROKEN_ANKH);
        let collar = owner.has_passive(ids::GUPPYS_COLLAR);
        let one_up = owner.item(ids::ONE_UP).is_some_and(|i| i.counters() > 0);

        if ankh {
            let effect = Effect::by_roll([(6, 6, prevent.clone())]);
            self.push_triggered(player, ids::BROKEN_ANKH, Binding::with_roll(effect))?;
        }
        if collar {
            let effect = Effect::by_roll([(1, 3, prevent.clone())]);
            self.push_triggered(player, ids::GUPPYS_COLLAR, Binding::with_roll(effect))?;
        }
        if one_up {
            let effect = Effect::batch([
                Effect::SpendCounters {
                    player,
                    card: ids::ONE_UP,
                    count: 1,
                },
                prevent,
            ]);
            self.push_triggered(player, ids::ONE_UP, Binding::new(effect))?;
        }
        Ok(node)
    }

    /// Death penalties.
    ///
    /// Curses are discarded and haunts handed on first. Then the player
    /// discards a loot card, loses a non-eternal item and a cent; The
    /// Shadow's owner takes the card and the cent instead of the discard
    /// pile. Everything gets tapped and the player leaves battle.
    pub fn death_penalty(&mut self, player: PlayerId, input: &mut dyn ChoiceProvider) -> EngineResult<()> {
        for curse in std::mem::take(&mut self.players[player].curses) {
            self.run_continuous(player, curse.id(), true);
            self.discard_card(curse.into())?;
        }

        let living = self.living_others(player);
        for haunt in ids::HAUNTS {
            if self.players[player].has_item(haunt) && !living.is_empty() {
                let index = pick_index(input, player, "give the haunt to", living.len()).unwrap_or(0);
                self.give_item(player, living[index], haunt)?;
            }
        }

        let shadow = self
            .other_players(player)
            .into_iter()
            .find(|&p| self.players[p].has_passive(ids::SHADOW));

        let hand = self.players[player].hand.len();
        if let Some(index) = pick_index(input, player, "discard a loot card", hand) {
            match shadow {
                Some(thief) => {
                    let card = self.players[player].hand.pop_by_index(index)?;
                    debug!("{thief}'s Shadow took {}", card.name());
                    self.players[thief].hand.append(card);
                }
                None => self.discard_hand_card(player, index)?,
            }
        }

        let items = self.players[player].destructible_items();
        if let Some(index) = pick_index(input, player, "destroy an item", items.len()) {
            self.destroy_item(player, items[index])?;
        }

        let lost = self.lose_cents(player, 1);
        if let Some(thief) = shadow {
            self.gain_cents(thief, lost);
        }

        self.tap_all(player);
        self.end_battle(player);
        if self.is_active(player) {
            self.players[player].force_end = true;
        }
        info!("{player} paid death penalties");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{LootCard, TreasureCard};
    use crate::catalog::StarterCatalog;
    use crate::core::{GameConfig, ScriptedChoices};
    use crate::zones::ActiveSlot;

    fn board() -> Board {
        let mut b = Board::new(GameConfig::new(2).with_seed(21), Arc::new(StarterCatalog::new())).unwrap();
        for slot in &mut b.monsters.slots {
            *slot = ActiveSlot::new();
        }
        b
    }

    fn place(b: &mut Board, slot: usize, monster: MonsterCard) {
        b.monsters.slots[slot].push(monster);
    }

    #[test]
    fn test_dry_baby_caps_damage() {
        let mut b = board();
        let p = PlayerId(0);
        b.add_card_to_board(p, TreasureCard::passive(ids::DRY_BABY, "Dry Baby").into())
            .unwrap();
        assert_eq!(b.apply_player_damage(p, 5), DamageOutcome::Survived);
        assert_eq!(b.players[p].character.hp(), 1);
        assert_eq!(b.apply_player_damage(p, 5), DamageOutcome::Died);
        assert_eq!(b.apply_player_damage(p, 5), DamageOutcome::Ignored);
    }

    #[test]
    fn test_hairball_pushes_roll_above_damage() {
        let mut b = board();
        let p = PlayerId(1);
        b.add_card_to_board(p, LootCard::trinket(ids::GUPPYS_HAIRBALL, "Guppy's Hairball").into())
            .unwrap();
        let node = b.damage_player(PlayerId(0), p, 1, None, None).unwrap();

        // damage, hairball trigger, its roll
        assert_eq!(b.stack.len(), 3);
        assert!(matches!(b.stack.peek().unwrap().event.kind, EventKind::DiceRoll { .. }));
        assert!(b.stack.contains(node));
    }

    #[test]
    fn test_boss_becomes_soul_and_reward_is_pushed() {
        let mut b = board();
        let p = PlayerId(0);
        let mut input = ScriptedChoices::new([]);
        place(&mut b, 0, MonsterCard::boss(ids::MONSTRO, "Monstro", 4, 4, 1).with_reward(Reward::cents(6)));

        b.kill_monster(p, ids::MONSTRO, &mut input).unwrap();
        assert_eq!(b.players[p].soul_count(), 1);
        assert!(b.monsters.slots[0].is_empty());
        assert!(matches!(
            b.stack.peek().unwrap().event.kind,
            EventKind::MonsterReward { monster: ids::MONSTRO, .. }
        ));
    }

    #[test]
    fn test_basic_monster_is_discarded() {
        let mut b = board();
        let mut input = ScriptedChoices::new([]);
        place(&mut b, 1, MonsterCard::new(ids::GAPER, "Gaper", 3, 3, 1).with_reward(Reward::loot(1)));
        let before = b.monsters.pile.discard.len();

        b.kill_monster(PlayerId(1), ids::GAPER, &mut input).unwrap();
        assert_eq!(b.players[PlayerId(1)].soul_count(), 0);
        assert_eq!(b.monsters.pile.discard.len(), before + 1);
    }

    #[test]
    fn test_midas_touch_pays_its_owner_for_any_kill() {
        let mut b = board();
        let mut input = ScriptedChoices::new([]);
        let (killer, owner) = (PlayerId(0), PlayerId(1));
        b.add_card_to_board(owner, TreasureCard::passive(ids::THE_MIDAS_TOUCH, "The Midas Touch").into())
            .unwrap();
        place(&mut b, 0, MonsterCard::new(ids::GAPER, "Gaper", 1, 3, 1));
        let cents = (b.players[killer].cents, b.players[owner].cents);

        b.kill_monster(killer, ids::GAPER, &mut input).unwrap();
        assert_eq!(b.players[owner].cents, cents.1 + 3);
        assert_eq!(b.players[killer].cents, cents.0);
    }

    #[test]
    fn test_linked_monsters_die_together() {
        let mut b = board();
        let mut input = ScriptedChoices::new([]);
        place(&mut b, 0, MonsterCard::new(ids::STONEY, "Stoney", 4, 5, 1));
        place(&mut b, 1, MonsterCard::new(ids::DEATHS_HEAD, "Death's Head", 1, 4, 1));

        b.kill_monster(PlayerId(0), ids::STONEY, &mut input).unwrap();
        assert!(b.monsters.active_monsters().next().is_none());
    }

    #[test]
    fn test_carrion_queen_only_hurt_by_six() {
        let mut b = board();
        let mut input = ScriptedChoices::new([]);
        place(&mut b, 0, MonsterCard::boss(ids::CARRION_QUEEN, "Carrion Queen", 3, 4, 1));

        b.apply_monster_damage(PlayerId(0), ids::CARRION_QUEEN, 2, Some(5), &mut input)
            .unwrap();
        assert_eq!(b.monsters.active_monster(ids::CARRION_QUEEN).unwrap().hp(), 3);
        b.apply_monster_damage(PlayerId(0), ids::CARRION_QUEEN, 2, Some(6), &mut input)
            .unwrap();
        assert_eq!(b.monsters.active_monster(ids::CARRION_QUEEN).unwrap().hp(), 1);
        // Not combat damage: always lands.
        b.apply_monster_damage(PlayerId(0), ids::CARRION_QUEEN, 1, None, &mut input)
            .unwrap();
        assert!(b.monsters.active_monster(ids::CARRION_QUEEN).is_none());
    }

    #[test]
    fn test_battle_hit_and_miss() {
        let mut b = board();
        let p = PlayerId(0);
        place(&mut b, 0, MonsterCard::new(ids::HORF, "Horf", 2, 4, 1));
        b.enter_battle(p, ids::HORF).unwrap();

        b.battle(p, ids::HORF, 4).unwrap();
        match &b.stack.peek().unwrap().event.kind {
            EventKind::Damage { target, amount, .. } => {
                assert_eq!(*target, Target::Monster(ids::HORF));
                assert_eq!(*amount, 1);
            }
            other => panic!("unexpected {other:?}"),
        }
        b.stack.clear();

        b.battle(p, ids::HORF, 2).unwrap();
        match &b.stack.peek().unwrap().event.kind {
            EventKind::Damage { target, amount, monster } => {
                assert_eq!(*target, Target::Player(p));
                assert_eq!(*amount, 2);
                assert_eq!(*monster, Some(ids::HORF));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_one_shot_attack_bonuses_are_spent() {
        let mut b = board();
        let p = PlayerId(0);
        b.players[p].active_effects.insert(ids::CURVED_HORN);
        b.players[p].active_effects.insert(ids::CHAMPION_BELT);
        let base = b.players[p].character.ap();
        assert_eq!(b.attack_power(p), base + 2);
        assert_eq!(b.attack_power(p), base);
    }

    #[test]
    fn test_end_battle_heals_monster() {
        let mut b = board();
        let p = PlayerId(0);
        place(&mut b, 0, MonsterCard::new(ids::GAPER, "Gaper", 3, 3, 1));
        b.enter_battle(p, ids::GAPER).unwrap();
        b.monsters.active_monster_mut(ids::GAPER).unwrap().decrease_hp(2);

        b.end_battle(p);
        assert!(!b.players[p].in_battle());
        assert_eq!(b.monsters.active_monster(ids::GAPER).unwrap().hp(), 3);
    }

    #[test]
    fn test_death_penalty_with_shadow() {
        let mut b = board();
        let (dying, thief) = (PlayerId(0), PlayerId(1));
        b.add_card_to_board(thief, TreasureCard::passive(ids::SHADOW, "Shadow").into())
            .unwrap();
        let hands = (b.players[dying].hand.len(), b.players[thief].hand.len());
        let cents = (b.players[dying].cents, b.players[thief].cents);
        let discards = b.loot.discard.len();

        let mut input = ScriptedChoices::new([0]);
        b.death_penalty(dying, &mut input).unwrap();

        assert_eq!(b.players[dying].hand.len(), hands.0 - 1);
        assert_eq!(b.players[thief].hand.len(), hands.1 + 1);
        assert_eq!(b.players[dying].cents, cents.0 - 1);
        assert_eq!(b.players[thief].cents, cents.1 + 1);
        assert_eq!(b.loot.discard.len(), discards);
        assert!(b.players[dying].character.tapped);
    }

    #[test]
    fn test_death_hands_haunts_on() {
        let mut b = board();
        let (dying, other) = (PlayerId(0), PlayerId(1));
        b.add_card_to_board(dying, TreasureCard::passive(ids::BABY_HAUNT, "Baby Haunt").into())
            .unwrap();
        let mut input = ScriptedChoices::new([]);
        b.death_penalty(dying, &mut input).unwrap();
        assert!(b.players[other].has_item(ids::BABY_HAUNT));
        assert!(!b.players[dying].has_item(ids::BABY_HAUNT));
    }

    fn three_seats_with_seat_one_dead() -> Board {
        let mut b = Board::new(GameConfig::new(3).with_seed(21), Arc::new(StarterCatalog::new())).unwrap();
        let character = &mut b.players[PlayerId(1)].character;
        let hp = character.hp();
        character.decrease_hp(hp);
        b
    }

    #[test]
    fn test_haunts_skip_dead_players() {
        let mut b = three_seats_with_seat_one_dead();
        let dying = PlayerId(0);
        b.add_card_to_board(dying, TreasureCard::passive(ids::BABY_HAUNT, "Baby Haunt").into())
            .unwrap();
        let mut input = ScriptedChoices::new([]);
        b.death_penalty(dying, &mut input).unwrap();
        assert!(b.players[PlayerId(2)].has_item(ids::BABY_HAUNT));
        assert!(!b.players[PlayerId(1)].has_item(ids::BABY_HAUNT));
    }

    #[test]
    fn test_revealed_curse_goes_to_a_living_opponent() {
        let mut b = three_seats_with_seat_one_dead();
        let mut input = ScriptedChoices::new([0]);
        b.curse_chosen_player(PlayerId(0), MonsterCard::curse(ids::CURSE_OF_PAIN, "Curse of Pain"), &mut input);
        assert_eq!(b.players[PlayerId(2)].curses.len(), 1);
        assert!(b.players[PlayerId(0)].curses.is_empty());
        assert!(b.players[PlayerId(1)].curses.is_empty());

        let character = &mut b.players[PlayerId(2)].character;
        let hp = character.hp();
        character.decrease_hp(hp);
        b.curse_chosen_player(PlayerId(0), MonsterCard::curse(ids::CURSE_OF_PAIN, "Curse of Pain"), &mut input);
        assert_eq!(b.players[PlayerId(0)].curses.len(), 1);
    }

    #[test]
    fn test_one_up_wires_prevention() {
        let mut b = board();
        let p = PlayerId(1);
        b.add_card_to_board(p, TreasureCard::passive(ids::ONE_UP, "1up!").into())
            .unwrap();
        let death = b.push_death(p).unwrap();
        let top = b.stack.peek().unwrap();
        assert_ne!(top.id(), death);
        assert!(matches!(
            top.event.kind,
            EventKind::TriggeredEffect { source: ids::ONE_UP, .. }
        ));
    }
}
