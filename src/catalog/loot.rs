//! The loot deck.

use super::{Hooks, StarterCatalog};
use crate::activation::Binding;
use crate::cards::{ids, CardBase, CardId, LootCard};
use crate::core::GameConfig;
use crate::effects::Effect;
use crate::stack::{EventKind, Target};

const CENTS: [(CardId, &str, u32, usize); 6] = [
    (ids::A_PENNY, "A Penny!", 1, 5),
    (ids::TWO_CENTS, "2 Cents!", 2, 6),
    (ids::THREE_CENTS, "3 Cents!", 3, 5),
    (ids::FOUR_CENTS, "4 Cents!", 4, 3),
    (ids::A_NICKEL, "A Nickel!", 5, 2),
    (ids::A_DIME, "A Dime!!", 10, 1),
];

pub(super) fn deck(config: &GameConfig) -> Vec<LootCard> {
    let mut cards = Vec::new();
    for (id, name, amount, copies) in CENTS {
        let card = LootCard::new(id, name).with_text(format!("Gain {amount}c."));
        cards.extend(std::iter::repeat(card).take(copies));
    }

    let playable = [
        (LootCard::new(ids::BOMB, "Bomb!").with_text("Deal 1 damage to a monster or player."), 3),
        (LootCard::new(ids::GOLD_BOMB, "Gold Bomb!!").with_text("Deal 3 damage to a monster or player."), 1),
        (LootCard::new(ids::BUTTER_BEAN, "Butter Bean!").with_text("Cancel an activated or played effect."), 3),
        (LootCard::new(ids::DICE_SHARD, "Dice Shard").with_text("Reroll a dice roll."), 2),
        (LootCard::new(ids::LIL_BATTERY, "Lil Battery").with_text("Recharge one of your items."), 2),
        (LootCard::new(ids::PILLS_BLUE, "Pills! (Blue)").with_text("1-2: loot 1. 3-4: heal 1. 5-6: take 1 damage."), 2),
        (LootCard::new(ids::SOUL_HEART, "Soul Heart").with_text("Prevent 1 damage to a player."), 2),
        (LootCard::new(ids::CREDIT_CARD, "Credit Card").with_text("Your next purchase this turn costs 0c."), 1),
        (LootCard::new(ids::THE_EMPRESS, "III. The Empress").with_text("+1 to your rolls this turn."), 1),
        (LootCard::new(ids::TEMPERANCE, "XIV. Temperance").with_text("Take 1 damage: gain 4c."), 1),
    ];
    for (card, copies) in playable {
        cards.extend(std::iter::repeat(card).take(copies));
    }

    cards.extend([
        LootCard::trinket(ids::BROKEN_ANKH, "Broken Ankh").with_text("When you die, roll: 6: prevent it."),
        LootCard::trinket(ids::COUNTERFEIT_PENNY, "Counterfeit Penny").with_text("Whenever you gain cents, gain 1 more."),
        LootCard::trinket(ids::CURVED_HORN, "Curved Horn").with_text("+1 attack on your first attack each turn."),
        LootCard::trinket(ids::GUPPYS_HAIRBALL, "Guppy's Hairball").with_text("When you take damage, roll: 6: prevent 1."),
        LootCard::trinket(ids::SWALLOWED_PENNY, "Swallowed Penny").with_text("When you take damage, gain 1c."),
    ]);

    if config.expansion_one {
        cards.extend(std::iter::repeat(LootCard::new(ids::BOMB, "Bomb!")).take(2));
        cards.push(LootCard::new(ids::DICE_SHARD, "Dice Shard"));
    }
    if config.expansion_two {
        cards.extend(std::iter::repeat(LootCard::new(ids::SOUL_HEART, "Soul Heart")).take(2));
    }
    cards
}

pub(super) fn register(catalog: &mut StarterCatalog) {
    for (id, _, amount, _) in CENTS {
        catalog.register(
            id,
            Hooks::new().bind(move |ctx| Ok(Binding::new(Effect::GainCents { player: ctx.player, amount }))),
        );
    }

    for (id, amount) in [(ids::BOMB, 1), (ids::GOLD_BOMB, 3)] {
        catalog.register(
            id,
            Hooks::new().bind(move |ctx| {
                let target = ctx.choose_target("bomb which target")?;
                Ok(Binding::new(Effect::Damage { target, amount }))
            }),
        );
    }

    catalog.register(
        ids::BUTTER_BEAN,
        Hooks::new().bind(|ctx| {
            let node = ctx.choose_node("cancel which effect", |e| e.kind.effect().is_some())?;
            Ok(Binding::new(Effect::Fizzle { node }))
        }),
    );
    catalog.register(
        ids::DICE_SHARD,
        Hooks::new().bind(|ctx| {
            let node = ctx.choose_node("reroll which roll", |e| matches!(e.kind, EventKind::DiceRoll { .. }))?;
            Ok(Binding::new(Effect::Reroll { node }))
        }),
    );
    catalog.register(
        ids::LIL_BATTERY,
        Hooks::new().bind(|ctx| {
            let tapped: Vec<CardId> = ctx
                .owner()
                .active_items
                .iter()
                .filter(|item| item.tapped)
                .map(CardBase::id)
                .collect();
            let index = ctx.choose_required("recharge which item", tapped.len())?;
            Ok(Binding::new(Effect::Recharge {
                player: ctx.player,
                card: tapped[index],
            }))
        }),
    );
    catalog.register(
        ids::PILLS_BLUE,
        Hooks::new().bind(|ctx| {
            let player = ctx.player;
            Ok(Binding::with_roll(Effect::by_roll([
                (1, 2, Effect::Loot { player, count: 1 }),
                (
                    3,
                    4,
                    Effect::Heal {
                        target: Target::Player(player),
                        amount: 1,
                    },
                ),
                (
                    5,
                    6,
                    Effect::Damage {
                        target: Target::Player(player),
                        amount: 1,
                    },
                ),
            ])))
        }),
    );
    catalog.register(
        ids::SOUL_HEART,
        Hooks::new().bind(|ctx| {
            let node = ctx.choose_node("prevent which damage", |e| {
                matches!(e.kind, EventKind::Damage { target: Target::Player(_), .. })
            })?;
            Ok(Binding::new(Effect::PreventDamage { node, amount: 1 }))
        }),
    );
    for key in [ids::CREDIT_CARD, ids::THE_EMPRESS] {
        catalog.register(
            key,
            Hooks::new().bind(move |ctx| Ok(Binding::new(Effect::SetActiveEffect { player: ctx.player, key }))),
        );
    }
    catalog.register(
        ids::TEMPERANCE,
        Hooks::new().bind(|ctx| {
            let gain = Effect::GainCents {
                player: ctx.player,
                amount: 4,
            };
            Ok(Binding::with_self_damage(Effect::cost_paid(ids::TEMPERANCE, gain), 1))
        }),
    );

    catalog.register(
        ids::SWALLOWED_PENNY,
        Hooks::new().on_event(|ctx, node| match node.event.kind {
            EventKind::Damage {
                target: Target::Player(hurt),
                amount,
                ..
            } if hurt == ctx.player && amount > 0 => Some(Binding::new(Effect::GainCents {
                player: ctx.player,
                amount: 1,
            })),
            _ => None,
        }),
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::activation::play_loot;
    use crate::board::Board;
    use crate::cards::CombatTarget;
    use crate::catalog::StarterCatalog;
    use crate::core::{PlayerId, ScriptedChoices};
    use crate::effects::Resolver;

    fn board() -> Board {
        Board::new(GameConfig::new(2).with_seed(12), Arc::new(StarterCatalog::new())).unwrap()
    }

    fn play(b: &mut Board, player: PlayerId, card: LootCard, answers: &[usize]) {
        b.players[player].hand.append(card);
        let index = b.players[player].hand.len() - 1;
        let mut input = ScriptedChoices::new(answers.iter().copied());
        play_loot(b, &mut input, player, index, true).unwrap();
        Resolver::new(b, &mut input).resolve_all().unwrap();
    }

    #[test]
    fn test_deck_size() {
        assert_eq!(deck(&GameConfig::new(2)).len(), 45);
        let bigger = GameConfig::new(2).with_expansion_one(true).with_expansion_two(true);
        assert_eq!(deck(&bigger).len(), 50);
    }

    #[test]
    fn test_blank_card_doubles_cents() {
        let mut b = board();
        let p = PlayerId(0);
        b.players[p].active_effects.insert(ids::BLANK_CARD);
        play(&mut b, p, LootCard::new(ids::A_DIME, "A Dime!!"), &[]);
        assert_eq!(b.players[p].cents, 23);
        assert!(!b.has_active_effect(p, ids::BLANK_CARD));
    }

    #[test]
    fn test_temperance_pays_after_damage() {
        let mut b = board();
        let p = PlayerId(0);
        play(&mut b, p, LootCard::new(ids::TEMPERANCE, "XIV. Temperance"), &[]);
        assert_eq!(b.players[p].cents, 7);
        assert_eq!(b.players[p].character.hp(), 1);
    }

    #[test]
    fn test_bomb_hurts_a_monster() {
        let mut b = board();
        let monster = b.monsters.active_monsters().next().map(CardBase::id).unwrap();
        let before = b.monsters.active_monster(monster).map(CombatTarget::hp).unwrap();
        if before > 1 {
            play(&mut b, PlayerId(0), LootCard::new(ids::BOMB, "Bomb!"), &[0]);
            assert_eq!(b.monsters.active_monster(monster).map(CombatTarget::hp), Some(before - 1));
        }
    }

    #[test]
    fn test_lil_battery_needs_a_tapped_item() {
        let mut b = board();
        let p = PlayerId(0);
        for item in &mut b.players[p].active_items {
            item.tapped = false;
        }
        b.players[p].hand.append(LootCard::new(ids::LIL_BATTERY, "Lil Battery"));
        let index = b.players[p].hand.len() - 1;
        let mut input = ScriptedChoices::new([]);
        assert!(play_loot(&mut b, &mut input, p, index, true).is_err());
        assert_eq!(b.players[p].hand.len(), index + 1);
    }
}
