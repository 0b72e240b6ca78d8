//! Characters and their eternal starting items.

use super::{Hooks, StarterCatalog};
use crate::activation::{BindContext, Binding};
use crate::cards::{ids, CharacterCard, ItemCard, TreasureCard};
use crate::effects::Effect;
use crate::error::{EngineResult, GameError};
use crate::stack::{EventKind, Target};

pub(super) fn roster() -> Vec<CharacterCard> {
    [
        (ids::BLUE_BABY, "Blue Baby"),
        (ids::CAIN, "Cain"),
        (ids::ISAAC, "Isaac"),
        (ids::JUDAS, "Judas"),
        (ids::MAGGY, "Maggy"),
        (ids::SAMSON, "Samson"),
        (ids::THE_FORGOTTEN, "The Forgotten"),
        (ids::THE_LOST, "The Lost"),
    ]
    .into_iter()
    .map(|(id, name)| CharacterCard::new(id, name, 2, 1).with_text("Tap: play an additional loot card."))
    .collect()
}

pub(super) fn starting_item(character: &str) -> Option<TreasureCard> {
    let item = match character {
        "Blue Baby" => TreasureCard::active(ids::FOREVER_ALONE, "Forever Alone")
            .with_text("Steal 1 cent, look at the top card of a deck, or loot 1 then discard 1."),
        "Cain" => TreasureCard::active(ids::SLEIGHT_OF_HAND, "Sleight of Hand")
            .with_text("Look at the top 3 cards of a deck and put them back in any order."),
        "Isaac" => TreasureCard::active(ids::THE_D6, "The D6").with_text("Reroll a dice roll."),
        "Judas" => TreasureCard::active(ids::BOOK_OF_BELIAL, "Book of Belial")
            .with_text("Add or subtract 1 from a dice roll."),
        "Maggy" => TreasureCard::active(ids::YUM_HEART, "Yum Heart").with_text("Prevent 1 damage to any player."),
        "Samson" => TreasureCard::active(ids::BLOOD_LUST, "Blood Lust")
            .with_text("Add 1 to a player or monster's attack until the end of the turn."),
        "The Forgotten" => TreasureCard::active(ids::THE_BONE, "The Bone")
            .with_paid()
            .with_text("Add a counter. Spend counters to modify a roll, deal damage or make this a soul."),
        "The Lost" => TreasureCard::active(ids::HOLY_MANTLE, "Holy Mantle")
            .with_text("Prevent a death. That player's turn ends."),
        _ => return None,
    };
    Some(item.eternal())
}

pub(super) fn register(catalog: &mut StarterCatalog) {
    catalog.register(ids::FOREVER_ALONE, Hooks::new().bind(forever_alone));
    catalog.register(
        ids::SLEIGHT_OF_HAND,
        Hooks::new().bind(|ctx| {
            let deck = ctx.choose_deck("look at the top of which deck");
            Ok(Binding::new(Effect::ReorderDeckTop {
                player: ctx.player,
                deck,
                count: 3,
            }))
        }),
    );
    catalog.register(
        ids::THE_D6,
        Hooks::new().bind(|ctx| {
            let node = ctx.choose_node("reroll which roll", |e| matches!(e.kind, EventKind::DiceRoll { .. }))?;
            Ok(Binding::new(Effect::Reroll { node }))
        }),
    );
    catalog.register(
        ids::BOOK_OF_BELIAL,
        Hooks::new().bind(|ctx| {
            let node = ctx.choose_node("change which roll", |e| matches!(e.kind, EventKind::DiceRoll { .. }))?;
            let delta = if ctx.choose_value("0: +1, 1: -1", 0, 1) == 0 { 1 } else { -1 };
            Ok(Binding::new(Effect::ModifyRoll { node, delta }))
        }),
    );
    catalog.register(
        ids::YUM_HEART,
        Hooks::new().bind(|ctx| {
            let node = ctx.choose_node("prevent which damage", |e| {
                matches!(e.kind, EventKind::Damage { target: Target::Player(_), .. })
            })?;
            Ok(Binding::new(Effect::PreventDamage { node, amount: 1 }))
        }),
    );
    catalog.register(
        ids::BLOOD_LUST,
        Hooks::new().bind(|ctx| {
            let target = ctx.choose_target("who gets +1 attack")?;
            Ok(Binding::new(Effect::BuffAttack { target, amount: 1 }))
        }),
    );
    catalog.register(ids::THE_BONE, Hooks::new().bind(the_bone));
    catalog.register(
        ids::HOLY_MANTLE,
        Hooks::new().bind(|ctx| {
            let node = ctx.choose_node("prevent which death", |e| matches!(e.kind, EventKind::CharacterDeath))?;
            let player = ctx
                .board
                .stack
                .search(node)
                .map(|n| n.event.player)
                .ok_or(GameError::NodeNotFound { node })?;
            Ok(Binding::new(Effect::PreventDeath { node, player }))
        }),
    );
}

fn forever_alone(ctx: &mut BindContext<'_>) -> EngineResult<Binding> {
    let player = ctx.player;
    match ctx.choose_value("0: steal a cent, 1: look at a deck, 2: loot then discard", 0, 2) {
        0 => {
            let from = ctx.choose_other_player("steal a cent from")?;
            if ctx.board.players[from].cents == 0 {
                return Err(GameError::NoLegalTarget(format!("{from} has no cents")));
            }
            Ok(Binding::new(Effect::TakeCents {
                from,
                to: player,
                amount: 1,
            }))
        }
        1 => {
            let deck = ctx.choose_deck("look at the top of which deck");
            Ok(Binding::new(Effect::ReorderDeckTop { player, deck, count: 1 }))
        }
        _ => Ok(Binding::new(Effect::batch([
            Effect::Loot { player, count: 1 },
            Effect::DiscardLoot { player, count: 1 },
        ]))),
    }
}

/// Tapping adds a counter. Counters buy the other abilities without tapping.
fn the_bone(ctx: &mut BindContext<'_>) -> EngineResult<Binding> {
    let player = ctx.player;
    let counters = ctx.item().map_or(0, |item| item.counters());
    let choice = ctx.choose_value("0: add a counter, 1: +1 to a roll, 2: deal 1 damage, 3: become a soul", 0, 3);
    let cost = choice as u8;
    if cost > counters {
        return Err(GameError::NoLegalTarget(format!("The Bone has {counters} counters")));
    }
    match choice {
        0 => Ok(Binding::new(Effect::AddCounters {
            player,
            card: ids::THE_BONE,
            count: 1,
        })),
        1 => {
            let node = ctx.choose_node("raise which roll", |e| matches!(e.kind, EventKind::DiceRoll { .. }))?;
            Ok(Binding::paid(Effect::ModifyRoll { node, delta: 1 }, cost, 0))
        }
        2 => {
            let target = ctx.choose_target("deal 1 damage to")?;
            Ok(Binding::paid(Effect::Damage { target, amount: 1 }, cost, 0))
        }
        _ => Ok(Binding::paid(
            Effect::ItemToSoul {
                player,
                card: ids::THE_BONE,
            },
            cost,
            0,
        )),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::activation::{activate_item, Followup};
    use crate::board::Board;
    use crate::catalog::CardCatalog;
    use crate::core::{GameConfig, PlayerId, ScriptedChoices};
    use crate::effects::Resolver;
    use crate::stack::Event;

    fn board() -> Board {
        Board::new(GameConfig::new(2).with_seed(5), Arc::new(StarterCatalog::new())).unwrap()
    }

    fn bind(b: &Board, card: crate::cards::CardId, answers: &[usize]) -> EngineResult<Binding> {
        let catalog = Arc::clone(b.catalog());
        let mut input = ScriptedChoices::new(answers.iter().copied());
        let mut ctx = BindContext::new(b, PlayerId(0), card, &mut input);
        catalog.behavior(card).unwrap().bind(&mut ctx)
    }

    #[test]
    fn test_roster_has_eight_distinct_characters() {
        let names: Vec<String> = roster().into_iter().map(|c| c.info.name).collect();
        assert_eq!(names.len(), 8);
        assert!(names.iter().all(|n| starting_item(n).is_some()));
        assert!(starting_item("Nobody").is_none());
    }

    #[test]
    fn test_forever_alone_needs_a_cent_to_steal() {
        let mut b = board();
        b.players[PlayerId(1)].cents = 0;
        let err = bind(&b, ids::FOREVER_ALONE, &[0, 0]).unwrap_err();
        assert!(matches!(err, GameError::NoLegalTarget(_)));

        b.players[PlayerId(1)].cents = 2;
        let binding = bind(&b, ids::FOREVER_ALONE, &[0, 0]).unwrap();
        assert_eq!(
            binding.effect,
            Effect::TakeCents {
                from: PlayerId(1),
                to: PlayerId(0),
                amount: 1
            }
        );
    }

    #[test]
    fn test_d6_needs_a_roll() {
        let mut b = board();
        assert!(bind(&b, ids::THE_D6, &[]).is_err());
        b.stack.push(Event::new(PlayerId(1), EventKind::IntentionToPurchase));
        let roll = b.stack.push(Event::new(PlayerId(1), EventKind::DiceRoll { value: 2 }));
        assert_eq!(bind(&b, ids::THE_D6, &[0]).unwrap().effect, Effect::Reroll { node: roll });
    }

    #[test]
    fn test_the_bone_spends_counters() {
        let mut b = board();
        let p = PlayerId(0);
        let bone = starting_item("The Forgotten").unwrap();
        b.players[p].active_items.clear();
        b.add_card_to_board(p, bone.into()).unwrap();

        assert!(bind(&b, ids::THE_BONE, &[2]).is_err());
        assert_eq!(bind(&b, ids::THE_BONE, &[0]).unwrap().followup, Followup::None);

        b.add_counters(p, ids::THE_BONE, 2).unwrap();
        let binding = bind(&b, ids::THE_BONE, &[2, 0]).unwrap();
        assert_eq!(binding.followup, Followup::PaidUse { counters: 2, cents: 0 });
    }

    #[test]
    fn test_holy_mantle_saves_the_dying_player() {
        let mut b = board();
        let p = PlayerId(0);
        let dying = PlayerId(1);
        b.active = p;
        b.players[p].active_items.clear();
        b.add_card_to_board(p, starting_item("The Lost").unwrap().into()).unwrap();
        let death = b.stack.push(Event::new(dying, EventKind::CharacterDeath));

        let mut input = ScriptedChoices::new([0]);
        activate_item(&mut b, &mut input, p, ids::HOLY_MANTLE).unwrap();
        Resolver::new(&mut b, &mut input).resolve_next().unwrap();
        assert_eq!(b.stack.search(death).map(|n| n.event.kind.is_fizzled()), Some(true));
    }
}
