//! The treasure deck.

use log::warn;

use super::{Hooks, StarterCatalog};
use crate::activation::{BindContext, Binding};
use crate::board::Board;
use crate::cards::{ids, CardId, ItemCard, TreasureCard};
use crate::core::{GameConfig, PlayerId};
use crate::effects::Effect;
use crate::error::{EngineResult, GameError};
use crate::stack::{EventKind, Target};

pub(super) fn deck(config: &GameConfig) -> Vec<TreasureCard> {
    let mut cards = vec![
        TreasureCard::active(ids::BOOK_OF_SIN, "Book of Sin").with_text("Roll. 1-2: gain 1c. 3-4: loot 1. 5-6: heal 1."),
        TreasureCard::active(ids::SACK_OF_PENNIES, "Sack of Pennies").with_text("Gain 1c."),
        TreasureCard::active(ids::TECH_X, "Tech X")
            .with_paid()
            .with_text("Add a counter. Remove 3 counters: kill a monster or player."),
        TreasureCard::active(ids::BLANK_CARD, "Blank Card").with_text("Your next loot card this turn is doubled."),
        TreasureCard::active(ids::CRYSTAL_BALL, "Crystal Ball").with_text("Guess the next roll. If right, loot 3."),
        TreasureCard::paid(ids::GUPPYS_PAW, "Guppy's Paw").with_text("Take 1 damage: prevent 2 damage to a player."),
        TreasureCard::passive(ids::BABY_HAUNT, "Baby Haunt").with_text("Monsters you attack are 1 harder to hit."),
        TreasureCard::passive(ids::BUMBO, "Bum-bo!").with_text("Cents you gain become counters. +2 to your next attack roll."),
        TreasureCard::passive(ids::CHAMPION_BELT, "Champion Belt").with_text("+1 attack. +1 attack on your first attack each turn."),
        TreasureCard::passive(ids::DADDY_HAUNT, "Daddy Haunt").with_text("Monsters deal 1 more damage to you."),
        TreasureCard::passive(ids::THE_DEAD_CAT, "The Dead Cat").with_text("Enters with 9 counters. Spend one to prevent 1 damage."),
        TreasureCard::passive(ids::DRY_BABY, "Dry Baby").with_text("You never take more than 1 damage at a time."),
        TreasureCard::passive(ids::EMPTY_VESSEL, "Empty Vessel").with_text("+1 attack with no loot. +1 to attack rolls with no cents."),
        TreasureCard::passive(ids::GUPPYS_COLLAR, "Guppy's Collar").with_text("When you die, roll: 1-3: prevent it."),
        TreasureCard::passive(ids::MAMA_HAUNT, "Mama Haunt").with_text("Given away when you die."),
        TreasureCard::passive(ids::MEAT, "Meat!").with_text("+1 to attack rolls."),
        TreasureCard::passive(ids::SYNTHOIL, "Synthoil").with_text("+1 to attack rolls."),
        TreasureCard::passive(ids::THE_MIDAS_TOUCH, "The Midas Touch").with_text("Gain 3c whenever you kill a monster."),
        TreasureCard::passive(ids::POLYDACTYLY, "Polydactyly").with_text("+1 loot play each turn."),
        TreasureCard::passive(ids::SHADOW, "Shadow").with_text("You collect what other players lose when they die."),
        TreasureCard::passive(ids::STEAMY_SALE, "Steamy Sale").with_text("Items cost you half."),
        TreasureCard::passive(ids::TRINITY_SHIELD, "Trinity Shield").with_text("Others cannot respond to your actions."),
    ];
    if config.expansion_one {
        cards.push(TreasureCard::passive(ids::ONE_UP, "1-Up!").with_text("Enters with a counter. Spend it to prevent a death."));
    }
    cards
}

pub(super) fn register(catalog: &mut StarterCatalog) {
    catalog.register(
        ids::BOOK_OF_SIN,
        Hooks::new().bind(|ctx| {
            let player = ctx.player;
            Ok(Binding::with_roll(Effect::by_roll([
                (1, 2, Effect::GainCents { player, amount: 1 }),
                (3, 4, Effect::Loot { player, count: 1 }),
                (
                    5,
                    6,
                    Effect::Heal {
                        target: Target::Player(player),
                        amount: 1,
                    },
                ),
            ])))
        }),
    );
    catalog.register(
        ids::SACK_OF_PENNIES,
        Hooks::new().bind(|ctx| Ok(Binding::new(Effect::GainCents { player: ctx.player, amount: 1 }))),
    );
    catalog.register(ids::TECH_X, Hooks::new().bind(tech_x));
    catalog.register(
        ids::BLANK_CARD,
        Hooks::new().bind(|ctx| {
            Ok(Binding::new(Effect::SetActiveEffect {
                player: ctx.player,
                key: ids::BLANK_CARD,
            }))
        }),
    );
    catalog.register(
        ids::CRYSTAL_BALL,
        Hooks::new().bind(|ctx| {
            let guess = ctx.choose_value("guess the next roll", 1, 6) as u8;
            Ok(Binding::new(Effect::GuessRoll {
                player: ctx.player,
                guess,
            }))
        }),
    );
    catalog.register(
        ids::GUPPYS_PAW,
        Hooks::new().bind(|ctx| {
            let node = ctx.choose_node("prevent which damage", |e| {
                matches!(e.kind, EventKind::Damage { target: Target::Player(_), .. })
            })?;
            let prevent = Effect::PreventDamage { node, amount: 2 };
            Ok(Binding::with_self_damage(Effect::cost_paid(ids::GUPPYS_PAW, prevent), 1))
        }),
    );

    catalog.register(
        ids::BABY_HAUNT,
        Hooks::new().on_event(|ctx, node| match node.event.kind {
            EventKind::IntentionToAttack { monster: Some(monster) } if node.event.player == ctx.player => {
                Some(Binding::new(Effect::RaiseMonsterRoll { monster, amount: 1 }))
            }
            _ => None,
        }),
    );
    catalog.register(
        ids::DADDY_HAUNT,
        Hooks::new().on_event(|ctx, node| match node.event.kind {
            EventKind::Damage {
                target: Target::Player(hurt),
                amount,
                monster: Some(_),
            } if hurt == ctx.player && amount > 0 && !ctx.owner().is_dead() => Some(Binding::new(Effect::Damage {
                target: Target::Player(hurt),
                amount: 1,
            })),
            _ => None,
        }),
    );

    catalog.register(ids::CHAMPION_BELT, Hooks::new().continuous(champion_belt));
    catalog.register(ids::POLYDACTYLY, Hooks::new().continuous(polydactyly));
    for card in [ids::MEAT, ids::SYNTHOIL] {
        catalog.register(card, Hooks::new().continuous(attack_roll_bonus));
    }
    catalog.register(ids::THE_DEAD_CAT, Hooks::new().continuous(counters_on_enter(9)));
    catalog.register(ids::ONE_UP, Hooks::new().continuous(counters_on_enter(1)));
}

/// Tap for a counter, or spend three to kill anything.
fn tech_x(ctx: &mut BindContext<'_>) -> EngineResult<Binding> {
    let counters = ctx.item().map_or(0, |item| item.counters());
    let fire = counters >= 3 && ctx.choose_value("0: add a counter, 1: fire", 0, 1) == 1;
    if !fire {
        return Ok(Binding::new(Effect::AddCounters {
            player: ctx.player,
            card: ids::TECH_X,
            count: 1,
        }));
    }
    let effect = match ctx.choose_target("kill what")? {
        Target::Monster(monster) => Effect::KillMonster { monster },
        Target::Player(player) if player == ctx.player => {
            return Err(GameError::NoLegalTarget("Tech X cannot target its owner".into()));
        }
        Target::Player(player) => Effect::KillPlayer { player },
    };
    Ok(Binding::paid(effect, 3, 0))
}

fn champion_belt(board: &mut Board, owner: PlayerId, _card: CardId, leaving: bool) {
    let player = &mut board.players[owner];
    if leaving {
        player.base_attacks = player.base_attacks.saturating_sub(1);
        player.attacks = player.attacks.saturating_sub(1);
    } else {
        player.base_attacks = player.base_attacks.saturating_add(1);
        player.attacks = player.attacks.saturating_add(1);
    }
}

fn polydactyly(board: &mut Board, owner: PlayerId, _card: CardId, leaving: bool) {
    let player = &mut board.players[owner];
    if leaving {
        player.base_loot_plays = player.base_loot_plays.saturating_sub(1);
        player.loot_plays = player.loot_plays.saturating_sub(1);
    } else {
        player.base_loot_plays = player.base_loot_plays.saturating_add(1);
        player.loot_plays = player.loot_plays.saturating_add(1);
    }
}

fn attack_roll_bonus(board: &mut Board, owner: PlayerId, _card: CardId, leaving: bool) {
    let player = &mut board.players[owner];
    player.attack_roll_bonus = if leaving {
        player.attack_roll_bonus.saturating_sub(1)
    } else {
        player.attack_roll_bonus.saturating_add(1)
    };
}

fn counters_on_enter(count: u8) -> impl Fn(&mut Board, PlayerId, CardId, bool) + Send + Sync + 'static {
    move |board, owner, card, leaving| {
        if leaving {
            return;
        }
        if let Err(e) = board.add_counters(owner, card, count) {
            warn!("{card} entered play without its counters: {e}");
        }
    }
}
