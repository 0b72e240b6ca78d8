//! Rolling dice.

use log::{debug, trace};

use super::Board;
use crate::cards::{ids, CardId};
use crate::core::PlayerId;
use crate::error::{EngineResult, GameError};
use crate::stack::{Event, EventKind, NodeId};

impl Board {
    /// Roll for the event on top of the stack and push the result.
    ///
    /// The roll belongs to the player who pushed that event. Their modifiers
    /// apply: The Empress +1 and The Haunt -1 on every roll; on attack rolls
    /// also Bum-bo's one-shot +2, Empty Vessel +1 while broke and the
    /// continuous attack bonus. The result is clamped to 1-6.
    pub fn roll_dice(&mut self) -> EngineResult<NodeId> {
        let top = self.stack.peek().ok_or(GameError::OrphanDiceRoll)?;
        let player = top.event.player;
        let attack_roll = matches!(top.event.kind, EventKind::DeclareAttack { .. });

        let natural = self.dice.roll_die();
        let value = self.modified_roll(player, natural, attack_roll);
        trace!("{player} rolled {natural} -> {value}");
        Ok(self
            .stack
            .push(Event::new(player, EventKind::DiceRoll { value })))
    }

    fn modified_roll(&mut self, player: PlayerId, natural: u8, attack_roll: bool) -> u8 {
        let owner = &mut self.players[player];
        let mut value = i16::from(natural);
        if owner.active_effects.contains(&ids::THE_EMPRESS) {
            value += 1;
        }
        if owner.active_effects.contains(&ids::THE_HAUNT) {
            value -= 1;
        }
        if attack_roll {
            if owner.active_effects.remove(&ids::BUMBO) {
                value += 2;
            }
            if owner.has_passive(ids::EMPTY_VESSEL) && owner.cents == 0 {
                value += 1;
            }
            value += i16::from(owner.attack_roll_bonus);
        }
        value.clamp(1, 6) as u8
    }

    /// Replace a pending roll with a fresh, unmodified one.
    pub fn reroll(&mut self, node: NodeId) -> EngineResult<u8> {
        let current = match self.stack.search(node) {
            None => return Err(GameError::NodeNotFound { node }),
            Some(n) => match n.event.kind {
                EventKind::DiceRoll { value } => value,
                EventKind::Fizzled => return Err(GameError::EventFizzled { node }),
                _ => {
                    return Err(GameError::WrongEventKind {
                        node,
                        expected: "dice roll",
                    })
                }
            },
        };
        let fresh = self.dice.roll_die();
        debug!("{node} rerolled {current} -> {fresh}");
        self.stack
            .add_to_dice_roll(fresh as i8 - current as i8, node)
    }

    /// Pay out Crystal Ball guesses that match `roll`, then forget them all.
    pub fn check_crystal_ball(&mut self, roll: u8) -> EngineResult<()> {
        if self.dice_guesses.is_empty() {
            return Ok(());
        }
        let mut winners: Vec<PlayerId> = self
            .dice_guesses
            .iter()
            .filter(|(_, &guess)| guess == roll)
            .map(|(&p, _)| p)
            .collect();
        winners.sort();
        self.dice_guesses.clear();
        for player in winners {
            debug!("{player} guessed the roll of {roll}");
            self.loot(player, 3)?;
        }
        Ok(())
    }

    /// Whether the one-shot keyed by `key` is set for `player`.
    #[must_use]
    pub fn has_active_effect(&self, player: PlayerId, key: CardId) -> bool {
        self.players[player].active_effects.contains(&key)
    }
}
