//! Commit step for every activatable surface.

use std::sync::Arc;

use log::debug;

use super::{BindContext, Binding, Followup};
use crate::board::Board;
use crate::cards::{CardBase, CardId};
use crate::core::{ChoiceProvider, PlayerId};
use crate::effects::Effect;
use crate::error::{EngineResult, GameError};
use crate::stack::{Event, EventKind, NodeId};

/// Tap a character to use its ability.
///
/// Characters without a catalog entry play a loot card from hand when the
/// activation resolves.
pub fn activate_character(
    board: &mut Board,
    input: &mut dyn ChoiceProvider,
    player: PlayerId,
) -> EngineResult<NodeId> {
    let character = &board.players[player].character;
    let card = character.id();
    if character.tapped {
        return Err(GameError::AlreadyTapped { card });
    }

    let catalog = Arc::clone(board.catalog());
    let binding = match catalog.behavior(card) {
        Some(behavior) => behavior.bind(&mut BindContext::new(board, player, card, input))?,
        None if board.players[player].hand.is_empty() => {
            return Err(GameError::NoLegalTarget("no loot card to play".into()));
        }
        None => Binding::new(Effect::PlayLootFromHand { player }),
    };

    board.players[player].character.tapped = true;
    let node = board.stack.push(Event::new(
        player,
        EventKind::Activate {
            source: card,
            effect: binding.effect,
        },
    ));
    debug!("{player} activated their character");
    board.apply_followup(player, binding.followup)?;
    Ok(node)
}

/// Use an active or paid item.
pub fn activate_item(
    board: &mut Board,
    input: &mut dyn ChoiceProvider,
    player: PlayerId,
    card: CardId,
) -> EngineResult<NodeId> {
    let item = board.players[player]
        .active_item(card)
        .ok_or(GameError::CardNotFound { card })?;
    if !item.is_activatable() {
        return Err(GameError::NotActivatable { card });
    }
    let (tapped, paid, paid_only) = (item.tapped, item.paid, item.paid && !item.active);
    if tapped && !paid {
        return Err(GameError::AlreadyTapped { card });
    }

    let catalog = Arc::clone(board.catalog());
    let behavior = catalog
        .behavior(card)
        .ok_or(GameError::NotActivatable { card })?;
    let binding = behavior.bind(&mut BindContext::new(board, player, card, input))?;

    let kind = match binding.followup {
        Followup::PaidUse { counters, cents } => {
            pay(board, player, card, counters, cents)?;
            EventKind::PaidItemActivated {
                item: card,
                effect: binding.effect,
            }
        }
        _ if paid_only => EventKind::PaidItemActivated {
            item: card,
            effect: binding.effect,
        },
        _ => {
            if tapped {
                return Err(GameError::AlreadyTapped { card });
            }
            if let Some(item) = board.players[player].active_item_mut(card) {
                item.tapped = true;
            }
            EventKind::Activate {
                source: card,
                effect: binding.effect,
            }
        }
    };

    let node = board.stack.push(Event::new(player, kind));
    debug!("{player} activated {card}");
    board.apply_followup(player, binding.followup)?;
    Ok(node)
}

fn pay(board: &mut Board, player: PlayerId, card: CardId, counters: u8, cents: u32) -> EngineResult<()> {
    let owner = &board.players[player];
    if owner.cents < cents {
        return Err(GameError::InsufficientCents {
            player,
            needed: cents,
            available: owner.cents,
        });
    }
    let available = owner.item(card).map_or(0, |item| item.counters());
    if available < counters {
        return Err(GameError::NoLegalTarget(format!(
            "{card} needs {counters} counters, has {available}"
        )));
    }

    let owner = &mut board.players[player];
    owner.cents -= cents;
    if let Some(item) = owner.item_mut(card) {
        item.remove_counters(counters);
    }
    Ok(())
}

/// Play the loot card at `index` in `player`'s hand.
///
/// Trinkets go straight to the board and push nothing. Everything else is
/// bound, discarded and pushed as [`EventKind::LootCardPlayed`]. Returns
/// the pushed node, if any.
pub fn play_loot(
    board: &mut Board,
    input: &mut dyn ChoiceProvider,
    player: PlayerId,
    index: usize,
    consume_play: bool,
) -> EngineResult<Option<NodeId>> {
    let owner = &board.players[player];
    if consume_play && owner.loot_plays == 0 {
        return Err(GameError::NoActionsRemaining {
            player,
            action: "loot plays",
        });
    }
    let card = owner
        .hand
        .as_slice()
        .get(index)
        .ok_or(GameError::IndexOutOfRange {
            index,
            len: owner.hand.len(),
        })?;
    let id = card.id();

    if card.trinket {
        let trinket = board.players[player].hand.pop_by_index(index)?;
        spend_play(board, player, consume_play);
        debug!("{player} put {} into play", trinket.name());
        board.add_card_to_board(player, trinket.into())?;
        return Ok(None);
    }

    let catalog = Arc::clone(board.catalog());
    let behavior = catalog
        .behavior(id)
        .ok_or(GameError::NotActivatable { card: id })?;
    let binding = behavior.bind(&mut BindContext::new(board, player, id, input))?;

    let card = board.players[player].hand.pop_by_index(index)?;
    debug!("{player} played {}", card.name());
    board.loot.discard(card);
    spend_play(board, player, consume_play);

    let node = board.stack.push(Event::new(
        player,
        EventKind::LootCardPlayed {
            card: id,
            effect: binding.effect,
        },
    ));
    board.apply_followup(player, binding.followup)?;
    Ok(Some(node))
}

fn spend_play(board: &mut Board, player: PlayerId, consume_play: bool) {
    if consume_play {
        let owner = &mut board.players[player];
        owner.loot_plays = owner.loot_plays.saturating_sub(1);
    }
}
