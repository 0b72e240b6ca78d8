//! What a player may do at a decision point.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cards::{CardBase, CardId};
use crate::core::PlayerId;

/// One choice offered to a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Play the loot card at this hand index, spending a loot play.
    PlayLoot { index: usize },
    /// Open a purchase. What to buy is picked when the window closes.
    Purchase,
    /// Attack an active monster, or the top of the monster deck.
    Attack { monster: Option<CardId> },
    /// Roll again against the monster already in battle.
    ContinueAttack,
    ActivateCharacter,
    ActivateItem { card: CardId },
    EndTurn,
    /// Pass.
    DoNothing,
}

impl PlayerAction {
    /// Usable while someone else's event is waiting.
    #[must_use]
    pub fn is_reactive(self) -> bool {
        matches!(
            self,
            PlayerAction::ActivateCharacter | PlayerAction::ActivateItem { .. } | PlayerAction::DoNothing
        )
    }
}

/// Every action `player` may take right now.
///
/// Only the active player with an empty stack gets the full menu. Anyone
/// else, or anyone while the stack holds events, may only use their
/// character or items, or pass. Dead players can only pass.
#[must_use]
pub fn legal_actions(board: &Board, player: PlayerId) -> Vec<PlayerAction> {
    let owner = &board.players[player];
    if owner.is_dead() {
        return vec![PlayerAction::DoNothing];
    }

    let mut actions = Vec::new();
    let main_phase = board.is_active(player) && board.stack.is_empty();

    if main_phase {
        if owner.loot_plays > 0 {
            actions.extend((0..owner.hand.len()).map(|index| PlayerAction::PlayLoot { index }));
        }
        let stocked = board.treasure.cards_in_shop() > 0 || !board.treasure.pile.is_empty();
        if owner.purchases > 0 && !owner.in_battle() && stocked && board.can_afford(player) {
            actions.push(PlayerAction::Purchase);
        }
        if owner.in_battle() {
            actions.push(PlayerAction::ContinueAttack);
        } else if owner.attacks > 0 {
            actions.extend(
                board
                    .monsters
                    .active_monsters()
                    .map(|m| PlayerAction::Attack { monster: Some(m.id()) }),
            );
            if !board.monsters.pile.is_empty() {
                actions.push(PlayerAction::Attack { monster: None });
            }
        }
    }

    if !owner.character.tapped {
        actions.push(PlayerAction::ActivateCharacter);
    }
    actions.extend(
        owner
            .usable_items()
            .into_iter()
            .map(|card| PlayerAction::ActivateItem { card }),
    );

    if main_phase {
        if !owner.in_battle() {
            actions.push(PlayerAction::EndTurn);
        }
    } else {
        actions.push(PlayerAction::DoNothing);
    }
    actions
}
