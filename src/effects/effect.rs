//! Effect definitions.
//!
//! An [`Effect`] is what a card does once its event resolves. Targets are
//! picked when the card is activated and stored in the effect itself, so
//! resolving never has to ask anyone "which one?" for a choice that was
//! already made.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::PlayerId;
use crate::stack::{NodeId, Target};

/// One of the three shared decks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckKind {
    Loot,
    Monster,
    Treasure,
}

/// A branch of [`Effect::ByRoll`], taken when `low <= roll <= high`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    pub low: u8,
    pub high: u8,
    pub effect: Effect,
}

impl RollOutcome {
    #[must_use]
    pub fn new(low: u8, high: u8, effect: Effect) -> Self {
        Self { low, high, effect }
    }

    #[must_use]
    pub fn matches(&self, roll: u8) -> bool {
        (self.low..=self.high).contains(&roll)
    }
}

/// A deferred game action with its targets already bound.
///
/// ## Resources
///
/// - `GainCents`, `LoseCents`, `TakeCents`: currency
/// - `Loot`, `DiscardLoot`, `GainTreasure`: cards in and out of play
/// - `AddAttacks`, `AddLootPlays`: per-turn counters
///
/// ## Stack manipulation
///
/// Effects naming a [`NodeId`] change an event still waiting on the stack.
/// If that event has resolved or fizzled in the meantime the effect does
/// nothing.
///
/// ## Composite
///
/// - `ByRoll`: pick a branch by the die roll attached to the event
/// - `CostPaid`: only applies if the activation's damage cost was survived
/// - `Batch`: several effects in order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Nothing,

    // === Resources ===
    GainCents { player: PlayerId, amount: u32 },
    LoseCents { player: PlayerId, amount: u32 },
    TakeCents {
        from: PlayerId,
        to: PlayerId,
        amount: u32,
    },
    Loot { player: PlayerId, count: u8 },
    /// The player picks which cards to discard when this resolves.
    DiscardLoot { player: PlayerId, count: u8 },
    GainTreasure { player: PlayerId, count: u8 },
    AddAttacks { player: PlayerId, count: u8 },
    AddLootPlays { player: PlayerId, count: u8 },

    // === Combat ===
    Heal { target: Target, amount: u8 },
    /// Pushes a damage event; it can still be prevented.
    Damage { target: Target, amount: u8 },
    /// Attack bonus until the end of the turn.
    BuffAttack { target: Target, amount: u8 },
    /// Make an active monster harder to hit until its stats reset.
    RaiseMonsterRoll { monster: CardId, amount: u8 },
    KillMonster { monster: CardId },
    KillPlayer { player: PlayerId },

    // === Stack ===
    PreventDamage { node: NodeId, amount: u8 },
    ModifyRoll { node: NodeId, delta: i8 },
    /// Replace a pending roll with a fresh one.
    Reroll { node: NodeId },
    Fizzle { node: NodeId },
    PreventDeath { node: NodeId, player: PlayerId },

    // === Cards ===
    Recharge { player: PlayerId, card: CardId },
    AddCounters {
        player: PlayerId,
        card: CardId,
        count: u8,
    },
    SpendCounters {
        player: PlayerId,
        card: CardId,
        count: u8,
    },
    /// The item leaves play and joins its owner's souls.
    ItemToSoul { player: PlayerId, card: CardId },
    /// A soul goes back on top of the monster deck.
    ReturnSoulToDeck { player: PlayerId, card: CardId },
    /// Look at the top cards of a deck and put them back in any order.
    ReorderDeckTop {
        player: PlayerId,
        deck: DeckKind,
        count: u8,
    },
    /// The player picks a loot card from hand and plays it.
    PlayLootFromHand { player: PlayerId },
    AddMonsterSlot,

    // === Flags ===
    SetActiveEffect { player: PlayerId, key: CardId },
    GuessRoll { player: PlayerId, guess: u8 },
    SkipNextTurn { player: PlayerId },

    // === Composite ===
    ByRoll(Vec<RollOutcome>),
    CostPaid { card: CardId, effect: Box<Effect> },
    Batch(Vec<Effect>),
}

impl Effect {
    /// Branch on the die roll.
    ///
    /// ```
    /// use four_souls::core::PlayerId;
    /// use four_souls::effects::Effect;
    ///
    /// let p = PlayerId(0);
    /// let chest = Effect::by_roll([
    ///     (1, 2, Effect::GainCents { player: p, amount: 1 }),
    ///     (3, 4, Effect::GainCents { player: p, amount: 3 }),
    ///     (5, 6, Effect::GainCents { player: p, amount: 6 }),
    /// ]);
    /// assert_eq!(chest.outcome(4), Some(&Effect::GainCents { player: p, amount: 3 }));
    /// ```
    pub fn by_roll(outcomes: impl IntoIterator<Item = (u8, u8, Effect)>) -> Self {
        Effect::ByRoll(
            outcomes
                .into_iter()
                .map(|(low, high, effect)| RollOutcome::new(low, high, effect))
                .collect(),
        )
    }

    /// A batch, collapsed when it holds zero or one effect.
    pub fn batch(effects: impl IntoIterator<Item = Effect>) -> Self {
        let mut effects: Vec<Effect> = effects.into_iter().filter(|e| !e.is_nothing()).collect();
        match effects.len() {
            0 => Effect::Nothing,
            1 => effects.swap_remove(0),
            _ => Effect::Batch(effects),
        }
    }

    /// Wrap in a cost check for `card`.
    #[must_use]
    pub fn cost_paid(card: CardId, effect: Effect) -> Self {
        Effect::CostPaid {
            card,
            effect: Box::new(effect),
        }
    }

    #[must_use]
    pub fn is_nothing(&self) -> bool {
        matches!(self, Effect::Nothing)
    }

    /// The branch of a `ByRoll` taken on `roll`.
    #[must_use]
    pub fn outcome(&self, roll: u8) -> Option<&Effect> {
        match self {
            Effect::ByRoll(outcomes) => outcomes.iter().find(|o| o.matches(roll)).map(|o| &o.effect),
            _ => None,
        }
    }

    /// The card whose cost gates this effect, if any.
    #[must_use]
    pub fn cost_card(&self) -> Option<CardId> {
        match self {
            Effect::CostPaid { card, .. } => Some(*card),
            _ => None,
        }
    }

    /// Double every amount in this effect.
    ///
    /// Used when a loot card resolves under the Blank Card modifier. Effects
    /// without an amount are unchanged.
    #[must_use]
    pub fn doubled(&self) -> Self {
        match self {
            Effect::GainCents { player, amount } => Effect::GainCents {
                player: *player,
                amount: amount.saturating_mul(2),
            },
            Effect::LoseCents { player, amount } => Effect::LoseCents {
                player: *player,
                amount: amount.saturating_mul(2),
            },
            Effect::TakeCents { from, to, amount } => Effect::TakeCents {
                from: *from,
                to: *to,
                amount: amount.saturating_mul(2),
            },
            Effect::Loot { player, count } => Effect::Loot {
                player: *player,
                count: count.saturating_mul(2),
            },
            Effect::DiscardLoot { player, count } => Effect::DiscardLoot {
                player: *player,
                count: count.saturating_mul(2),
            },
            Effect::GainTreasure { player, count } => Effect::GainTreasure {
                player: *player,
                count: count.saturating_mul(2),
            },
            Effect::Heal { target, amount } => Effect::Heal {
                target: *target,
                amount: amount.saturating_mul(2),
            },
            Effect::Damage { target, amount } => Effect::Damage {
                target: *target,
                amount: amount.saturating_mul(2),
            },
            Effect::PreventDamage { node, amount } => Effect::PreventDamage {
                node: *node,
                amount: amount.saturating_mul(2),
            },
            Effect::ByRoll(outcomes) => Effect::ByRoll(
                outcomes
                    .iter()
                    .map(|o| RollOutcome::new(o.low, o.high, o.effect.doubled()))
                    .collect(),
            ),
            Effect::CostPaid { card, effect } => Effect::cost_paid(*card, effect.doubled()),
            Effect::Batch(effects) => Effect::Batch(effects.iter().map(Effect::doubled).collect()),
            other => other.clone(),
        }
    }
}
