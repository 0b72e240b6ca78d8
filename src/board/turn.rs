//! Turn boundaries and keeping the table stocked.

use log::{debug, info, warn};

use super::Board;
use crate::cards::{ids, CardBase, CardId, ItemCard, MonsterKind};
use crate::core::{ChoiceProvider, PlayerId};
use crate::error::{EngineResult, GameError};
use crate::rules::{check_victory, GameResult};
use crate::stack::{Event, EventKind, NodeId};

impl Board {
    /// Begin `player`'s turn and push its StartOfTurn event.
    ///
    /// One-shot effects from the last turn are forgotten (The Haunt's curse
    /// stays until the boss dies) and per-turn item bonuses are armed again.
    /// Allowances are restored and everything recharges.
    pub fn start_turn(&mut self, player: PlayerId) -> NodeId {
        info!("turn {}: {player}", self.turn);
        let owner = &mut self.players[player];
        owner.active_effects.retain(|&key| key == ids::THE_HAUNT);
        let armed: Vec<CardId> = ids::TURN_BONUSES
            .into_iter()
            .filter(|&key| owner.has_passive(key))
            .collect();
        owner.active_effects.extend(armed);
        if owner.item(ids::BUMBO).is_some_and(|b| b.counters() > 0) {
            owner.active_effects.insert(ids::BUMBO);
        }
        owner.reset_turn_counters();
        owner.force_end = false;
        self.recharge_all(player);
        self.stack.push(Event::new(player, EventKind::StartOfTurn))
    }

    /// Push the EndTurn event for the active player.
    pub fn push_end_turn(&mut self) -> NodeId {
        self.stack.push(Event::new(self.active, EventKind::EndTurn))
    }

    /// Hand the turn to the next player.
    ///
    /// Everyone leaves battle. Rotation skips players who are dead right
    /// now and players who must skip a turn (the flag is used up). Then
    /// every character is restored, The Empress wears off and the monsters
    /// heal. Returns the new active player.
    pub fn end_turn(&mut self) -> PlayerId {
        for player in self.players.player_ids().collect::<Vec<_>>() {
            self.end_battle(player);
        }

        let current = self.active;
        let mut next = current;
        for candidate in self.other_players(current) {
            let seat = &mut self.players[candidate];
            if seat.is_dead() {
                continue;
            }
            if seat.skip_next_turn {
                seat.skip_next_turn = false;
                debug!("{candidate} skips their turn");
                continue;
            }
            next = candidate;
            break;
        }

        for (_, player) in self.players.iter_mut() {
            player.character.stats.reset();
            player.active_effects.remove(&ids::THE_EMPRESS);
        }
        for slot in &mut self.monsters.slots {
            if let Some(monster) = slot.peek_mut() {
                monster.reset_stats();
            }
        }

        self.active = next;
        self.turn += 1;
        info!("{current} ended their turn, {next} is next");
        next
    }

    /// Throw away everything on the stack and end the active player's turn.
    pub fn force_end_of_turn(&mut self) {
        let dropped = self.stack.drain();
        warn!("forced end of turn dropped {} pending events", dropped.len());
        self.players[self.active].force_end = true;
        self.unwound = true;
    }

    /// Between actions, with an empty stack: check for a winner, then
    /// refill the shop and empty monster slots.
    pub fn check_the_field(&mut self, input: &mut dyn ChoiceProvider) -> EngineResult<Option<GameResult>> {
        if !self.stack.is_empty() {
            return Ok(None);
        }
        if let Some(result) = check_victory(self) {
            info!("game over: {result:?}");
            return Ok(Some(result));
        }
        self.refill_shop();
        self.refill_monster_slots(input)?;
        Ok(None)
    }

    /// Fill empty monster slots from the deck.
    ///
    /// Bonus cards drawn along the way resolve for the active player and
    /// are discarded; curses go to a player the active player picks. Gives
    /// up once it has drawn as many cards as the pile held.
    pub fn refill_monster_slots(&mut self, input: &mut dyn ChoiceProvider) -> EngineResult<()> {
        let active = self.active;
        let mut budget = self.monsters.pile.len();
        for slot in 0..self.monsters.slots.len() {
            while self.monsters.slots[slot].is_empty() && budget > 0 {
                budget -= 1;
                let card = match self.monsters.pile.draw(&mut self.rng) {
                    Ok(card) => card,
                    Err(GameError::EmptyDeck) => return Ok(()),
                    Err(e) => return Err(e),
                };
                match card.kind {
                    MonsterKind::Basic | MonsterKind::Boss => {
                        debug!("slot {slot} refilled with {}", card.name());
                        self.monsters.slots[slot].push(card);
                    }
                    MonsterKind::Bonus => {
                        let id = card.id();
                        self.monsters.pile.discard(card);
                        self.trigger_on_death(active, id, input)?;
                    }
                    MonsterKind::Curse => self.curse_chosen_player(active, card, input),
                }
            }
        }
        Ok(())
    }
}
