//! Finding the cards that react to a resolved event.

use log::trace;
use smallvec::SmallVec;

use crate::activation::{BindContext, Binding};
use crate::board::Board;
use crate::cards::{ids, CardBase, CardId};
use crate::core::{ChoiceProvider, PlayerId};
use crate::stack::EventNode;

/// A card that wants to push an effect in response to an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reaction {
    pub player: PlayerId,
    pub source: CardId,
    pub binding: Binding,
}

/// Ask every card in play whether it reacts to `node`.
///
/// Active monsters are asked first, on behalf of the event's player. Then
/// every player's passive items in turn order from the active player; on
/// turn boundaries only the player whose turn it is gets asked. Last come
/// the curses of the event's player. Items that only ever prevent damage
/// or death are skipped: they are wired in when the damage is pushed.
pub fn scan(board: &Board, input: &mut dyn ChoiceProvider, node: &EventNode) -> SmallVec<[Reaction; 4]> {
    let catalog = board.catalog();
    let event_player = node.event.player;
    let mut found = SmallVec::new();

    let mut ask = |player: PlayerId, card: CardId, input: &mut dyn ChoiceProvider| {
        let Some(behavior) = catalog.behavior(card) else {
            return;
        };
        let mut ctx = BindContext::new(board, player, card, input);
        if let Some(binding) = behavior.on_event(&mut ctx, node) {
            trace!("{card} reacts to {} for {player}", node.event.kind.name());
            found.push(Reaction {
                player,
                source: card,
                binding,
            });
        }
    };

    for monster in board.monsters.active_monsters() {
        ask(event_player, monster.id(), input);
    }

    let owners: Vec<PlayerId> = if node.event.kind.is_turn_boundary() {
        vec![event_player]
    } else {
        PlayerId::turn_order(board.active, board.player_count()).collect()
    };
    for owner in owners {
        for item in &board.players[owner].passive_items {
            if !ids::REACTION_DENYLIST.contains(&item.id()) {
                ask(owner, item.id(), input);
            }
        }
    }

    for curse in &board.players[event_player].curses {
        ask(event_player, curse.id(), input);
    }

    found
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cards::{LootCard, MonsterCard, TreasureCard};
    use crate::catalog::{Hooks, StarterCatalog};
    use crate::core::{GameConfig, ScriptedChoices};
    use crate::effects::Effect;
    use crate::stack::{Event, EventKind, Target};
    use crate::zones::ActiveSlot;

    const WATCHER: CardId = CardId(901);
    const FIRST_CHARM: CardId = CardId(902);
    const SECOND_CHARM: CardId = CardId(903);
    const THIRD_CHARM: CardId = CardId(904);
    const HEX: CardId = CardId(905);

    fn board() -> Board {
        Board::new(GameConfig::new(2).with_seed(4), Arc::new(StarterCatalog::new())).unwrap()
    }

    fn resolved(b: &mut Board, event: Event) -> EventNode {
        b.stack.push(event);
        b.stack.pop().unwrap()
    }

    #[test]
    fn test_quiet_event_finds_nothing() {
        let mut b = board();
        let node = resolved(&mut b, Event::new(PlayerId(0), EventKind::IntentionToPurchase));
        let mut input = ScriptedChoices::new([]);
        assert!(scan(&b, &mut input, &node).is_empty());
    }

    #[test]
    fn test_swallowed_penny_reacts_to_owner_damage() {
        let mut b = board();
        let owner = PlayerId(1);
        b.add_card_to_board(owner, LootCard::trinket(ids::SWALLOWED_PENNY, "Swallowed Penny").into())
            .unwrap();
        let hurt = Event::new(
            PlayerId(0),
            EventKind::Damage {
                target: Target::Player(owner),
                amount: 1,
                monster: None,
            },
        );
        let node = resolved(&mut b, hurt);
        let mut input = ScriptedChoices::new([]);
        let reactions = scan(&b, &mut input, &node);
        assert_eq!(reactions.len(), 1);
        assert_eq!(reactions[0].player, owner);
        assert_eq!(reactions[0].source, ids::SWALLOWED_PENNY);
    }

    #[test]
    fn test_curses_only_hit_their_holder() {
        let mut b = board();
        let cursed = PlayerId(0);
        b.give_curse(cursed, MonsterCard::curse(ids::CURSE_OF_PAIN, "Curse of Pain"));

        let mut input = ScriptedChoices::new([]);
        let theirs = resolved(&mut b, Event::new(cursed, EventKind::StartOfTurn));
        assert_eq!(scan(&b, &mut input, &theirs).len(), 1);
        let other = resolved(&mut b, Event::new(PlayerId(1), EventKind::StartOfTurn));
        assert!(scan(&b, &mut input, &other).is_empty());
    }

    #[test]
    fn test_denylisted_items_never_react() {
        let mut b = board();
        b.add_card_to_board(PlayerId(0), LootCard::trinket(ids::GUPPYS_HAIRBALL, "Guppy's Hairball").into())
            .unwrap();
        let hurt = Event::new(
            PlayerId(0),
            EventKind::Damage {
                target: Target::Player(PlayerId(0)),
                amount: 1,
                monster: None,
            },
        );
        let node = resolved(&mut b, hurt);
        let mut input = ScriptedChoices::new([]);
        assert!(scan(&b, &mut input, &node).is_empty());
    }

    /// Three seats where the watcher monster, every charm and the hex react
    /// to any purchase or turn boundary. Seat 1 is active.
    fn eager_board() -> Board {
        let mut catalog = StarterCatalog::new();
        for card in [WATCHER, FIRST_CHARM, SECOND_CHARM, THIRD_CHARM, HEX] {
            catalog.register(
                card,
                Hooks::new().on_event(|ctx, node| match node.event.kind {
                    EventKind::IntentionToPurchase | EventKind::StartOfTurn | EventKind::EndTurn => {
                        Some(Binding::new(Effect::GainCents {
                            player: ctx.player,
                            amount: 1,
                        }))
                    }
                    _ => None,
                }),
            );
        }

        let mut b = Board::new(GameConfig::new(3).with_seed(4), Arc::new(catalog)).unwrap();
        b.active = PlayerId(1);
        for slot in &mut b.monsters.slots {
            *slot = ActiveSlot::new();
        }
        b.monsters.slots[0].push(MonsterCard::new(WATCHER, "Watcher", 2, 4, 1));
        b.add_card_to_board(PlayerId(0), TreasureCard::passive(FIRST_CHARM, "First Charm").into())
            .unwrap();
        b.add_card_to_board(PlayerId(2), TreasureCard::passive(SECOND_CHARM, "Second Charm").into())
            .unwrap();
        b.add_card_to_board(PlayerId(1), TreasureCard::passive(THIRD_CHARM, "Third Charm").into())
            .unwrap();
        b.give_curse(PlayerId(1), MonsterCard::curse(HEX, "Hex"));
        b
    }

    #[test]
    fn test_reactions_come_in_a_fixed_order() {
        let mut b = eager_board();
        let node = resolved(&mut b, Event::new(PlayerId(1), EventKind::IntentionToPurchase));
        let mut input = ScriptedChoices::new([]);
        let reactions = scan(&b, &mut input, &node);

        let sources: Vec<CardId> = reactions.iter().map(|r| r.source).collect();
        assert_eq!(sources, vec![WATCHER, THIRD_CHARM, SECOND_CHARM, FIRST_CHARM, HEX]);
        let players: Vec<PlayerId> = reactions.iter().map(|r| r.player).collect();
        assert_eq!(players, vec![PlayerId(1), PlayerId(1), PlayerId(2), PlayerId(0), PlayerId(1)]);
    }

    #[test]
    fn test_turn_boundaries_only_ask_the_turn_owner() {
        let mut b = eager_board();
        let mut input = ScriptedChoices::new([]);
        for kind in [EventKind::StartOfTurn, EventKind::EndTurn] {
            let node = resolved(&mut b, Event::new(PlayerId(1), kind));
            let sources: Vec<CardId> = scan(&b, &mut input, &node).iter().map(|r| r.source).collect();
            assert_eq!(sources, vec![WATCHER, THIRD_CHARM, HEX]);
        }
    }
}
