//! Resolving the event stack.
//!
//! The resolver pops one event at a time, applies it, and then asks every
//! card in play whether it reacts (see [`triggers::scan`]). Reactions are
//! pushed on top and resolve before anything that was already waiting.
//!
//! A failed event is not fatal: a target that died, a node that already
//! resolved, an empty deck. Those are logged and the event simply does
//! nothing. Only invariant violations stop resolution.

use log::{debug, trace, warn};

use super::{triggers, Effect};
use crate::activation::play_loot;
use crate::board::{Board, DamageOutcome};
use crate::cards::ids;
use crate::core::{pick_index, ChoiceProvider, PlayerId};
use crate::error::{EngineResult, GameError};
use crate::stack::{Event, EventKind, EventNode, NodeId, Target};
use crate::zones::ActiveSlot;

/// What one call to [`Resolver::resolve_next`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub node: NodeId,
    pub event: Event,
    /// Reactions pushed in response.
    pub reactions: usize,
}

/// Applies events and effects to a board.
pub struct Resolver<'a> {
    board: &'a mut Board,
    input: &'a mut dyn ChoiceProvider,
}

impl<'a> Resolver<'a> {
    pub fn new(board: &'a mut Board, input: &'a mut dyn ChoiceProvider) -> Self {
        Self { board, input }
    }

    /// Resolve the top event. `None` once the stack is empty.
    pub fn resolve_next(&mut self) -> EngineResult<Option<Resolved>> {
        let Some(node) = self.board.stack.pop() else {
            return Ok(None);
        };
        let id = node.id();
        trace!("resolving {id}: {}", node.event.kind.name());

        if node.event.kind.is_fizzled() {
            return Ok(Some(Resolved {
                node: id,
                event: node.into_event(),
                reactions: 0,
            }));
        }

        self.board.unwound = false;
        match self.apply_event(&node) {
            Ok(()) => debug!("{} resolved for {}", node.event.kind.name(), node.event.player),
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => warn!("{} for {} did nothing: {e}", node.event.kind.name(), node.event.player),
        }

        let mut reactions = 0;
        if !self.board.unwound {
            for reaction in triggers::scan(self.board, &mut *self.input, &node) {
                self.board
                    .push_triggered(reaction.player, reaction.source, reaction.binding)?;
                reactions += 1;
            }
        }

        Ok(Some(Resolved {
            node: id,
            event: node.into_event(),
            reactions,
        }))
    }

    /// Resolve until the stack is empty. Returns how many events resolved.
    pub fn resolve_all(&mut self) -> EngineResult<usize> {
        let mut count = 0;
        while self.resolve_next()?.is_some() {
            count += 1;
        }
        Ok(count)
    }

    fn apply_event(&mut self, node: &EventNode) -> EngineResult<()> {
        let player = node.event.player;
        let roll = node.event.roll;
        match &node.event.kind {
            EventKind::Activate { effect, .. }
            | EventKind::PaidItemActivated { effect, .. }
            | EventKind::TriggeredEffect { effect, .. } => self.apply(player, effect, roll),

            EventKind::LootCardPlayed { effect, .. } => {
                if self.board.players[player].active_effects.remove(&ids::BLANK_CARD) {
                    debug!("Blank Card doubles {player}'s loot card");
                    self.apply(player, &effect.doubled(), roll)
                } else {
                    self.apply(player, effect, roll)
                }
            }

            EventKind::Damage {
                target: Target::Player(target),
                amount,
                ..
            } => {
                match self.board.apply_player_damage(*target, *amount) {
                    DamageOutcome::Died => {
                        self.board.push_death(*target)?;
                    }
                    DamageOutcome::Survived => self.board.mark_cost_paid(*target),
                    DamageOutcome::Ignored => {}
                }
                Ok(())
            }
            EventKind::Damage {
                target: Target::Monster(monster),
                amount,
                ..
            } => self
                .board
                .apply_monster_damage(player, *monster, *amount, roll, &mut *self.input),

            EventKind::CharacterDeath => self.board.death_penalty(player, &mut *self.input),

            EventKind::DeclareAttack { monster } => {
                let Some(roll) = roll else {
                    warn!("{player}'s attack roll never arrived");
                    return Ok(());
                };
                if self.board.monsters.find_active(*monster).is_none() {
                    debug!("{player}'s target {monster} is gone");
                    return Ok(());
                }
                self.board.battle(player, *monster, roll).map(|_| ())
            }

            EventKind::DeclarePurchase { target } => self.board.purchase(player, *target).map(|_| ()),

            EventKind::DiceRoll { value } => {
                let below = self.board.stack.peek().ok_or(GameError::OrphanDiceRoll)?.id();
                self.board.stack.set_roll(below, *value)?;
                self.board.check_crystal_ball(*value)
            }

            EventKind::IntentionToAttack { monster: Some(monster) } => {
                if self.board.monsters.find_active(*monster).is_none() {
                    debug!("{player}'s target {monster} is gone");
                    return Ok(());
                }
                self.board.enter_battle(player, *monster)?;
                self.board.declare_attack(player).map(|_| ())
            }
            EventKind::IntentionToAttack { monster: None } => {
                self.board.attack_the_deck(player, &mut *self.input)
            }

            EventKind::IntentionToPurchase => {
                match self.board.choose_purchase_target(player, &mut *self.input) {
                    Some(target) => {
                        self.board
                            .stack
                            .push(Event::new(player, EventKind::DeclarePurchase { target }));
                    }
                    None => debug!("{player} found nothing to buy"),
                }
                Ok(())
            }

            EventKind::MonsterReward { reward, .. } => self.board.pay_reward(player, *reward, roll),

            EventKind::StartOfTurn | EventKind::EndTurn | EventKind::Fizzled => Ok(()),
        }
    }

    /// Apply one effect on behalf of `player`. `roll` is the die roll
    /// attached to the event carrying it.
    pub fn apply(&mut self, player: PlayerId, effect: &Effect, roll: Option<u8>) -> EngineResult<()> {
        let board = &mut *self.board;
        match effect {
            Effect::Nothing => {}

            Effect::GainCents { player, amount } => board.gain_cents(*player, *amount),
            Effect::LoseCents { player, amount } => {
                board.lose_cents(*player, *amount);
            }
            Effect::TakeCents { from, to, amount } => board.take_cents(*from, *to, *amount),
            Effect::Loot { player, count } => board.loot(*player, *count)?,
            Effect::DiscardLoot { player, count } => {
                board.choose_discard(*player, *count, &mut *self.input)?;
            }
            Effect::GainTreasure { player, count } => board.gain_treasure(*player, *count)?,
            Effect::AddAttacks { player, count } => {
                let owner = &mut board.players[*player];
                owner.attacks = owner.attacks.saturating_add(*count);
            }
            Effect::AddLootPlays { player, count } => {
                let owner = &mut board.players[*player];
                owner.loot_plays = owner.loot_plays.saturating_add(*count);
            }

            Effect::Heal { target, amount } => board.heal(*target, *amount)?,
            Effect::Damage {
                target: Target::Player(target),
                amount,
            } => {
                board.damage_player(player, *target, *amount, None, None)?;
            }
            Effect::Damage {
                target: Target::Monster(monster),
                amount,
            } => {
                board.damage_monster(player, *monster, *amount, None)?;
            }
            Effect::BuffAttack { target, amount } => board.buff_attack(*target, *amount)?,
            Effect::RaiseMonsterRoll { monster, amount } => board
                .monsters
                .active_monster_mut(*monster)
                .ok_or(GameError::CardNotFound { card: *monster })?
                .increase_roll(*amount),
            Effect::KillMonster { monster } => board.kill_monster(player, *monster, &mut *self.input)?,
            Effect::KillPlayer { player } => {
                board.kill_player(*player)?;
            }

            Effect::PreventDamage { node, amount } => {
                board.stack.prevent_damage(*amount, *node)?;
            }
            Effect::ModifyRoll { node, delta } => {
                board.stack.add_to_dice_roll(*delta, *node)?;
            }
            Effect::Reroll { node } => {
                board.reroll(*node)?;
            }
            Effect::Fizzle { node } => board.stack.fizzle(*node)?,
            Effect::PreventDeath { node, player } => {
                board.stack.fizzle(*node)?;
                debug!("{player}'s death was prevented");
                if board.is_active(*player) {
                    board.force_end_of_turn();
                }
            }

            Effect::Recharge { player, card } => board.recharge(*player, *card)?,
            Effect::AddCounters { player, card, count } => board.add_counters(*player, *card, *count)?,
            Effect::SpendCounters { player, card, count } => {
                board.spend_counters(*player, *card, *count)?;
            }
            Effect::ItemToSoul { player, card } => board.item_to_soul(*player, *card)?,
            Effect::ReturnSoulToDeck { player, card } => board.return_soul_to_deck(*player, *card)?,
            Effect::ReorderDeckTop { player, deck, count } => {
                board.reorder_deck_top(*player, *deck, *count, &mut *self.input);
            }
            Effect::PlayLootFromHand { player } => {
                let len = board.players[*player].hand.len();
                let index = pick_index(&mut *self.input, *player, "play a loot card", len)
                    .ok_or_else(|| GameError::NoLegalTarget("no loot card to play".into()))?;
                play_loot(board, &mut *self.input, *player, index, false)?;
            }
            Effect::AddMonsterSlot => board.monsters.slots.push(ActiveSlot::new()),

            Effect::SetActiveEffect { player, key } => {
                board.players[*player].active_effects.insert(*key);
            }
            Effect::GuessRoll { player, guess } => {
                board.dice_guesses.insert(*player, *guess);
            }
            Effect::SkipNextTurn { player } => board.players[*player].skip_next_turn = true,

            Effect::ByRoll(_) => match roll {
                Some(value) => {
                    if let Some(branch) = effect.outcome(value) {
                        return self.apply(player, branch, roll);
                    }
                }
                None => warn!("{player}'s effect needed a roll that never arrived"),
            },
            Effect::CostPaid { card, effect } => {
                if board.players[player].active_effects.remove(card) {
                    return self.apply(player, effect, roll);
                }
                debug!("{player} never paid the cost of {card}");
            }
            Effect::Batch(effects) => {
                for effect in effects {
                    match self.apply(player, effect, roll) {
                        Ok(()) => {}
                        Err(e) if e.is_fatal() => return Err(e),
                        Err(e) => warn!("part of {player}'s effect did nothing: {e}"),
                    }
                }
            }
        }
        Ok(())
    }
}
