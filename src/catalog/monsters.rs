//! The monster deck: monsters, bosses, bonus cards and curses.

use super::{Hooks, StarterCatalog};
use crate::activation::Binding;
use crate::cards::{ids, MonsterCard, Reward, RollReward};
use crate::core::GameConfig;
use crate::effects::Effect;
use crate::stack::{EventKind, Target};

pub(super) fn deck(config: &GameConfig) -> Vec<MonsterCard> {
    let mut cards = vec![
        MonsterCard::new(ids::BIG_SPIDER, "Big Spider", 3, 4, 1).with_reward(Reward::loot(1)),
        MonsterCard::new(ids::CLOTTY, "Clotty", 2, 3, 1).with_reward(Reward::cents(4)),
        MonsterCard::new(ids::FATTY, "Fatty", 4, 2, 1).with_reward(Reward::loot(1)),
        MonsterCard::new(ids::HORF, "Horf", 1, 4, 1)
            .with_reward(Reward::cents(3))
            .with_text("Deals 1 more damage when the attacker rolls a 2."),
        MonsterCard::new(ids::KEEPER_HEAD, "Keeper Head", 2, 4, 1)
            .with_reward(Reward::per_roll(RollReward::Cents))
            .with_text("When this deals damage to a player, they lose 2c."),
        MonsterCard::new(ids::LEAPER, "Leaper", 2, 4, 1)
            .with_reward(Reward::cents(5))
            .with_text("Deals double damage when the attacker rolls a 1."),
        MonsterCard::new(ids::POOTER, "Pooter", 2, 3, 1).with_reward(Reward::loot(1)),
        MonsterCard::new(ids::STONEY, "Stoney", 3, 5, 1)
            .with_reward(Reward::loot(1))
            .with_text("Each attack makes this 1 harder to hit. Dies when any monster dies."),
        MonsterCard::new(ids::GAPER, "Gaper", 2, 4, 1).with_reward(Reward::cents(2)),
        MonsterCard::boss(ids::CARRION_QUEEN, "Carrion Queen", 3, 4, 1)
            .with_reward(Reward::treasure(1))
            .with_text("Only takes combat damage on a roll of 6."),
        MonsterCard::boss(ids::FAMINE, "Famine", 2, 3, 1)
            .with_reward(Reward {
                cents: 3,
                loot: 2,
                ..Reward::default()
            })
            .with_text("When this dies, the active player skips their next turn."),
        MonsterCard::boss(ids::LARRY_JR, "Larry Jr.", 4, 3, 1).with_reward(Reward::treasure(1)),
        MonsterCard::boss(ids::PIN, "Pin", 2, 2, 1)
            .with_reward(Reward::treasure(1))
            .with_text("Takes no combat damage on a roll of 6."),
        MonsterCard::boss(ids::RAGMAN, "Ragman", 2, 3, 2).with_reward(Reward::per_roll(RollReward::Loot)),
        MonsterCard::boss(ids::THE_HAUNT, "The Haunt", 3, 4, 1)
            .with_reward(Reward::treasure(1))
            .with_text("When this takes exactly 2 damage, the active player gets -1 to rolls until it dies."),
        MonsterCard::boss(ids::WRATH, "Wrath", 3, 3, 1).with_reward(Reward::cents(6)),
        MonsterCard::boss(ids::GURDY, "Gurdy", 5, 4, 1).with_reward(Reward::treasure(2)),
        MonsterCard::boss(ids::MONSTRO, "Monstro", 4, 4, 1).with_reward(Reward::treasure(1)),
        MonsterCard::boss(ids::MOM, "Mom!", 5, 4, 2)
            .with_reward(Reward::treasure(2))
            .with_text("Deals double damage when the attacker rolls a 1. Worth two souls."),
        MonsterCard::bonus(ids::CHEST, "Chest").with_text("Roll. 1-2: gain 1c. 3-4: gain 3c. 5-6: gain 6c."),
        MonsterCard::bonus(ids::TROLL_BOMBS, "Troll Bombs").with_text("Take 2 damage."),
        MonsterCard::bonus(ids::SECRET_ROOM, "Secret Room").with_text("Roll. 1-3: loot 1. 4-6: gain a treasure."),
        MonsterCard::curse(ids::CURSE_OF_LOSS, "Curse of Loss").with_text("You need one more soul to win."),
        MonsterCard::curse(ids::CURSE_OF_PAIN, "Curse of Pain").with_text("Take 1 damage at the start of your turn."),
    ];

    if config.expansion_one {
        cards.extend([
            MonsterCard::new(ids::DEATHS_HEAD, "Death's Head", 2, 4, 1)
                .with_reward(Reward::loot(1))
                .with_text("Dies when any monster dies."),
            MonsterCard::boss(ids::SATAN, "Satan!", 6, 4, 2).with_reward(Reward::treasure(2)),
            MonsterCard::boss(ids::THE_LAMB, "The Lamb", 6, 3, 2).with_reward(Reward::treasure(2)),
        ]);
    }
    if config.expansion_two {
        cards.extend([
            MonsterCard::boss(ids::ISAAC_MONSTER, "Isaac", 6, 4, 2).with_reward(Reward::treasure(2)),
            MonsterCard::boss(ids::MOMS_HEART, "Mom's Heart", 7, 4, 2).with_reward(Reward::treasure(2)),
            MonsterCard::boss(ids::HUSH, "Hush", 8, 4, 2).with_reward(Reward::treasure(2)),
        ]);
    }
    cards
}

pub(super) fn register(catalog: &mut StarterCatalog) {
    catalog.register(
        ids::KEEPER_HEAD,
        Hooks::new().on_event(|_, node| match node.event.kind {
            EventKind::Damage {
                target: Target::Player(hurt),
                amount,
                monster: Some(ids::KEEPER_HEAD),
            } if amount > 0 => Some(Binding::new(Effect::LoseCents {
                player: hurt,
                amount: 2,
            })),
            _ => None,
        }),
    );
    catalog.register(
        ids::STONEY,
        Hooks::new().on_event(|_, node| match node.event.kind {
            EventKind::IntentionToAttack {
                monster: Some(ids::STONEY),
            } => Some(Binding::new(Effect::RaiseMonsterRoll {
                monster: ids::STONEY,
                amount: 1,
            })),
            _ => None,
        }),
    );
    catalog.register(
        ids::THE_HAUNT,
        Hooks::new().on_event(|ctx, node| match node.event.kind {
            EventKind::Damage {
                target: Target::Monster(ids::THE_HAUNT),
                amount: 2,
                ..
            } => Some(Binding::new(Effect::SetActiveEffect {
                player: ctx.board.active,
                key: ids::THE_HAUNT,
            })),
            _ => None,
        }),
    );
    catalog.register(
        ids::FAMINE,
        Hooks::new().on_death(|ctx| {
            Some(Binding::new(Effect::SkipNextTurn {
                player: ctx.board.active,
            }))
        }),
    );

    catalog.register(
        ids::CHEST,
        Hooks::new().on_death(|ctx| {
            let player = ctx.player;
            let gain = |amount| Effect::GainCents { player, amount };
            Some(Binding::with_roll(Effect::by_roll([
                (1, 2, gain(1)),
                (3, 4, gain(3)),
                (5, 6, gain(6)),
            ])))
        }),
    );
    catalog.register(
        ids::TROLL_BOMBS,
        Hooks::new().on_death(|ctx| {
            Some(Binding::new(Effect::Damage {
                target: Target::Player(ctx.player),
                amount: 2,
            }))
        }),
    );
    catalog.register(
        ids::SECRET_ROOM,
        Hooks::new().on_death(|ctx| {
            let player = ctx.player;
            Some(Binding::with_roll(Effect::by_roll([
                (1, 3, Effect::Loot { player, count: 1 }),
                (4, 6, Effect::GainTreasure { player, count: 1 }),
            ])))
        }),
    );

    catalog.register(
        ids::CURSE_OF_PAIN,
        Hooks::new().on_event(|ctx, node| match node.event.kind {
            EventKind::StartOfTurn if node.event.player == ctx.player => Some(Binding::new(Effect::Damage {
                target: Target::Player(ctx.player),
                amount: 1,
            })),
            _ => None,
        }),
    );
}
