//! Resolution scenarios.
//!
//! Each test builds a dealt board, clears the monster slots so nothing
//! reacts by accident, pushes a few events and resolves them.

use std::sync::Arc;

use four_souls::activation::{activate_character, activate_item, Binding};
use four_souls::board::Board;
use four_souls::cards::{ids, CombatTarget, LootCard, MonsterCard, Reward, RollReward, TreasureCard};
use four_souls::catalog::StarterCatalog;
use four_souls::core::{GameConfig, PlayerId, ScriptedChoices};
use four_souls::effects::{Effect, Resolver};
use four_souls::error::GameError;
use four_souls::stack::{Event, EventKind};
use four_souls::zones::ActiveSlot;

fn board(seed: u64) -> Board {
    let mut b = Board::new(GameConfig::new(2).with_seed(seed), Arc::new(StarterCatalog::new())).unwrap();
    for slot in &mut b.monsters.slots {
        *slot = ActiveSlot::new();
    }
    b.active = PlayerId(0);
    b
}

fn place(b: &mut Board, monster: MonsterCard) {
    b.monsters.slots[0].push(monster);
}

// =============================================================================
// Damage Scenarios
// =============================================================================

/// Test that surviving damage only lowers hp.
#[test]
fn test_basic_damage() {
    let mut b = board(1);
    let p = PlayerId(1);
    place(&mut b, MonsterCard::new(ids::GAPER, "Gaper", 2, 4, 1).with_reward(Reward::cents(2)));
    let cents = b.players[p].cents;
    assert_eq!(b.players[p].character.hp(), 2);

    b.damage_player(PlayerId(0), p, 1, Some(ids::GAPER), None).unwrap();
    let mut input = ScriptedChoices::new([]);
    let resolved = Resolver::new(&mut b, &mut input).resolve_all().unwrap();

    assert_eq!(resolved, 1);
    assert_eq!(b.players[p].character.hp(), 1);
    assert!(!b.players[p].is_dead());
    assert_eq!(b.players[p].cents, cents);
    assert!(b.stack.is_empty());
}

/// Test that lethal damage pushes a death and the death takes its penalties.
#[test]
fn test_lethal_damage_runs_death_penalties() {
    let mut b = board(2);
    let p = PlayerId(1);
    b.add_card_to_board(p, TreasureCard::active(ids::SACK_OF_PENNIES, "Sack of Pennies").into())
        .unwrap();
    b.players[p].character.decrease_hp(1);
    let hand = b.players[p].hand.len();
    let cents = b.players[p].cents;

    b.damage_player(PlayerId(0), p, 1, None, None).unwrap();
    let mut input = ScriptedChoices::new([]);
    Resolver::new(&mut b, &mut input).resolve_next().unwrap();
    assert!(matches!(
        b.stack.peek().map(|n| &n.event.kind),
        Some(EventKind::CharacterDeath)
    ));

    Resolver::new(&mut b, &mut input).resolve_next().unwrap();
    let dead = &b.players[p];
    assert!(dead.is_dead());
    assert_eq!(dead.hand.len(), hand - 1);
    assert_eq!(dead.cents, cents - 1);
    assert!(!dead.has_item(ids::SACK_OF_PENNIES));
    assert!(dead.active_items.iter().all(|i| i.eternal));
    assert!(b.stack.is_empty());
}

/// Test that fully prevented damage fizzles and triggers nothing.
#[test]
fn test_prevented_damage_fizzles() {
    let mut b = board(3);
    let p = PlayerId(1);
    b.add_card_to_board(p, LootCard::trinket(ids::SWALLOWED_PENNY, "Swallowed Penny").into())
        .unwrap();
    let cents = b.players[p].cents;

    let hit = b.damage_player(PlayerId(0), p, 2, None, None).unwrap();
    b.push_triggered(p, ids::SOUL_HEART, Binding::new(Effect::PreventDamage { node: hit, amount: 2 }))
        .unwrap();

    let mut input = ScriptedChoices::new([]);
    let mut resolver = Resolver::new(&mut b, &mut input);
    resolver.resolve_next().unwrap();
    let cancelled = resolver.resolve_next().unwrap().unwrap();
    drop(resolver);

    assert_eq!(cancelled.node, hit);
    assert_eq!(cancelled.event.kind, EventKind::Fizzled);
    assert_eq!(cancelled.reactions, 0);
    assert_eq!(b.players[p].character.hp(), 2);
    assert_eq!(b.players[p].cents, cents);
}

/// Test that real damage does wake up a reacting trinket.
#[test]
fn test_damage_triggers_trinket() {
    let mut b = board(4);
    let p = PlayerId(1);
    b.add_card_to_board(p, LootCard::trinket(ids::SWALLOWED_PENNY, "Swallowed Penny").into())
        .unwrap();
    let cents = b.players[p].cents;

    b.damage_player(PlayerId(0), p, 1, None, None).unwrap();
    let mut input = ScriptedChoices::new([]);
    let first = Resolver::new(&mut b, &mut input).resolve_next().unwrap().unwrap();
    assert_eq!(first.reactions, 1);

    Resolver::new(&mut b, &mut input).resolve_all().unwrap();
    assert_eq!(b.players[p].cents, cents + 1);
}

// =============================================================================
// Monster Kill Scenarios
// =============================================================================

/// Test that a kill empties the slot and pushes the reward.
#[test]
fn test_monster_kill_pushes_reward() {
    let mut b = board(5);
    let p = PlayerId(0);
    place(&mut b, MonsterCard::new(ids::GAPER, "Gaper", 1, 4, 1).with_reward(Reward::cents(2)));
    let cents = b.players[p].cents;

    b.damage_monster(p, ids::GAPER, 1, None).unwrap();
    let mut input = ScriptedChoices::new([]);
    Resolver::new(&mut b, &mut input).resolve_next().unwrap();

    assert!(b.monsters.slots[0].is_empty());
    assert!(matches!(
        b.stack.peek().map(|n| &n.event.kind),
        Some(EventKind::MonsterReward { monster: ids::GAPER, .. })
    ));

    Resolver::new(&mut b, &mut input).resolve_all().unwrap();
    assert_eq!(b.players[p].cents, cents + 2);
}

/// Test that an on-death effect sits beneath the reward.
#[test]
fn test_boss_death_effect_and_soul() {
    let mut b = board(6);
    let p = PlayerId(0);
    place(&mut b, MonsterCard::boss(ids::FAMINE, "Famine", 1, 3, 1).with_reward(Reward::cents(3)));

    b.damage_monster(p, ids::FAMINE, 1, None).unwrap();
    let mut input = ScriptedChoices::new([]);
    Resolver::new(&mut b, &mut input).resolve_next().unwrap();

    let kinds: Vec<&EventKind> = b.stack.iter().map(|n| &n.event.kind).collect();
    assert!(matches!(kinds[0], EventKind::MonsterReward { .. }));
    assert!(matches!(kinds[1], EventKind::TriggeredEffect { source: ids::FAMINE, .. }));
    assert_eq!(b.players[p].soul_count(), 1);
}

/// Test that a linked kill with no partner on the table adds nothing.
#[test]
fn test_linked_kill_without_partner() {
    let mut b = board(7);
    place(&mut b, MonsterCard::new(ids::STONEY, "Stoney", 1, 5, 1).with_reward(Reward::loot(1)));

    b.damage_monster(PlayerId(0), ids::STONEY, 1, None).unwrap();
    let mut input = ScriptedChoices::new([]);
    Resolver::new(&mut b, &mut input).resolve_next().unwrap();

    assert_eq!(b.stack.len(), 1);
    assert!(b.monsters.active_monsters().next().is_none());
}

// =============================================================================
// Dice Tests
// =============================================================================

/// Test that a roll is written onto the event beneath and used by it.
#[test]
fn test_dice_roll_binds_to_event_below() {
    let mut b = board(8);
    let p = PlayerId(0);
    let cents = b.players[p].cents;
    let reward = b.stack.push(Event::new(
        p,
        EventKind::MonsterReward {
            monster: ids::KEEPER_HEAD,
            reward: Reward::per_roll(RollReward::Cents),
        },
    ));
    b.stack.push(Event::new(p, EventKind::DiceRoll { value: 4 }));

    let mut input = ScriptedChoices::new([]);
    Resolver::new(&mut b, &mut input).resolve_next().unwrap();
    assert_eq!(b.stack.peek().map(|n| n.id()), Some(reward));
    assert_eq!(b.stack.peek().and_then(|n| n.event.roll), Some(4));

    Resolver::new(&mut b, &mut input).resolve_next().unwrap();
    assert_eq!(b.players[p].cents, cents + 4);
}

/// Test that a roll with nothing beneath it stops resolution.
#[test]
fn test_orphan_roll_is_fatal() {
    let mut b = board(9);
    b.stack.push(Event::new(PlayerId(0), EventKind::DiceRoll { value: 3 }));

    let mut input = ScriptedChoices::new([]);
    let err = Resolver::new(&mut b, &mut input).resolve_next().unwrap_err();
    assert!(matches!(err, GameError::OrphanDiceRoll));
    assert!(err.is_fatal());
}

// =============================================================================
// Activation Tests
// =============================================================================

/// Test that a failed bind changes nothing.
#[test]
fn test_failed_bind_leaves_board_untouched() {
    let mut b = board(10);
    let p = PlayerId(0);
    b.players[p].active_items.clear();
    b.add_card_to_board(p, TreasureCard::active(ids::THE_D6, "The D6").into())
        .unwrap();

    let mut input = ScriptedChoices::new([]);
    let err = activate_item(&mut b, &mut input, p, ids::THE_D6).unwrap_err();
    assert!(matches!(err, GameError::NoLegalTarget(_)));
    assert!(!b.players[p].active_item(ids::THE_D6).unwrap().tapped);
    assert!(b.stack.is_empty());
}

/// Test that an item taps on use and cannot be used again.
#[test]
fn test_item_taps_once() {
    let mut b = board(11);
    let p = PlayerId(0);
    b.players[p].active_items.clear();
    b.add_card_to_board(p, TreasureCard::active(ids::SACK_OF_PENNIES, "Sack of Pennies").into())
        .unwrap();
    let cents = b.players[p].cents;

    let mut input = ScriptedChoices::new([]);
    activate_item(&mut b, &mut input, p, ids::SACK_OF_PENNIES).unwrap();
    assert!(matches!(
        activate_item(&mut b, &mut input, p, ids::SACK_OF_PENNIES),
        Err(GameError::AlreadyTapped { .. })
    ));

    Resolver::new(&mut b, &mut input).resolve_all().unwrap();
    assert_eq!(b.players[p].cents, cents + 1);
}

/// Test that passive items and missing cards cannot be activated.
#[test]
fn test_cannot_activate_passives() {
    let mut b = board(12);
    let p = PlayerId(0);
    b.add_card_to_board(p, TreasureCard::passive(ids::DRY_BABY, "Dry Baby").into())
        .unwrap();

    let mut input = ScriptedChoices::new([]);
    assert!(matches!(
        activate_item(&mut b, &mut input, p, ids::DRY_BABY),
        Err(GameError::CardNotFound { .. })
    ));
}

/// Test that the character taps once per recharge.
#[test]
fn test_character_taps() {
    let mut b = board(13);
    let p = PlayerId(0);
    // Characters are dealt tapped.
    b.players[p].character.tapped = false;

    let mut input = ScriptedChoices::new([]);
    let node = activate_character(&mut b, &mut input, p).unwrap();
    assert!(b.players[p].character.tapped);
    assert!(matches!(
        b.stack.search(node).map(|n| &n.event.kind),
        Some(EventKind::Activate { .. })
    ));
    assert!(matches!(
        activate_character(&mut b, &mut input, p),
        Err(GameError::AlreadyTapped { .. })
    ));
}

/// Test that a rerolled die still shows a face.
#[test]
fn test_reroll_through_an_item() {
    let mut b = board(14);
    let p = PlayerId(0);
    b.players[p].active_items.clear();
    b.add_card_to_board(p, TreasureCard::active(ids::THE_D6, "The D6").into())
        .unwrap();
    b.stack.push(Event::new(p, EventKind::IntentionToPurchase));
    let roll = b.stack.push(Event::new(p, EventKind::DiceRoll { value: 1 }));

    let mut input = ScriptedChoices::new([0]);
    activate_item(&mut b, &mut input, p, ids::THE_D6).unwrap();
    Resolver::new(&mut b, &mut input).resolve_next().unwrap();

    match b.stack.search(roll).map(|n| &n.event.kind) {
        Some(EventKind::DiceRoll { value }) => assert!((1..=6).contains(value)),
        other => panic!("roll should still be pending, found {other:?}"),
    }
    assert!(b.players[p].active_item(ids::THE_D6).unwrap().tapped);
}
