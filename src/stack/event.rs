//! Events: the things that go on the stack.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Reward};
use crate::core::PlayerId;
use crate::effects::Effect;

/// Something that can take damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    Player(PlayerId),
    /// An active monster, by card id.
    Monster(CardId),
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Player(p) => write!(f, "{p}"),
            Target::Monster(id) => write!(f, "Monster {}", id.raw()),
        }
    }
}

/// Where a purchased item comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseTarget {
    /// A shop slot by index.
    Shop(usize),
    /// The top card of the treasure deck, sight unseen.
    DeckTop,
}

/// Payload of an event. The resolver matches on this exhaustively.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// A character or active item was used.
    Activate { source: CardId, effect: Effect },

    /// Damage about to be dealt. `monster` is set when a monster deals it.
    Damage {
        target: Target,
        amount: u8,
        monster: Option<CardId>,
    },

    /// The event's player is dying.
    CharacterDeath,

    /// One attack roll against a monster already in battle.
    DeclareAttack { monster: CardId },

    /// The purchase is committed.
    DeclarePurchase { target: PurchaseTarget },

    /// A resolved die roll. Decides the event directly beneath it.
    DiceRoll { value: u8 },

    EndTurn,

    /// A cancelled event. Resolves to nothing.
    Fizzled,

    /// Window before an attack. `None` attacks the top of the monster deck.
    IntentionToAttack { monster: Option<CardId> },

    /// Window before a purchase.
    IntentionToPurchase,

    /// A loot card was played from hand.
    LootCardPlayed { card: CardId, effect: Effect },

    /// Payout for killing a monster.
    MonsterReward { monster: CardId, reward: Reward },

    /// A paid (non-tapping) item was used.
    PaidItemActivated { item: CardId, effect: Effect },

    StartOfTurn,

    /// A passive, on-death or bonus effect.
    TriggeredEffect { source: CardId, effect: Effect },
}

impl EventKind {
    /// Short name for logs and error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Activate { .. } => "activate",
            EventKind::Damage { .. } => "damage",
            EventKind::CharacterDeath => "character death",
            EventKind::DeclareAttack { .. } => "declare attack",
            EventKind::DeclarePurchase { .. } => "declare purchase",
            EventKind::DiceRoll { .. } => "dice roll",
            EventKind::EndTurn => "end turn",
            EventKind::Fizzled => "fizzled",
            EventKind::IntentionToAttack { .. } => "intention to attack",
            EventKind::IntentionToPurchase => "intention to purchase",
            EventKind::LootCardPlayed { .. } => "loot card played",
            EventKind::MonsterReward { .. } => "monster reward",
            EventKind::PaidItemActivated { .. } => "paid item activated",
            EventKind::StartOfTurn => "start of turn",
            EventKind::TriggeredEffect { .. } => "triggered effect",
        }
    }

    #[must_use]
    pub fn is_turn_boundary(&self) -> bool {
        matches!(self, EventKind::StartOfTurn | EventKind::EndTurn)
    }

    #[must_use]
    pub fn is_fizzled(&self) -> bool {
        matches!(self, EventKind::Fizzled)
    }

    /// The deferred effect carried by activation-like events.
    #[must_use]
    pub fn effect(&self) -> Option<&Effect> {
        match self {
            EventKind::Activate { effect, .. }
            | EventKind::LootCardPlayed { effect, .. }
            | EventKind::PaidItemActivated { effect, .. }
            | EventKind::TriggeredEffect { effect, .. } => Some(effect),
            _ => None,
        }
    }

    /// Damage aimed at this player.
    #[must_use]
    pub fn is_damage_to(&self, player: PlayerId) -> bool {
        matches!(self, EventKind::Damage { target: Target::Player(p), .. } if *p == player)
    }
}

/// A pending game action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// The player on whose behalf this was pushed.
    pub player: PlayerId,
    pub kind: EventKind,
    /// Die roll attached once the roll above it resolves.
    pub roll: Option<u8>,
}

impl Event {
    #[must_use]
    pub fn new(player: PlayerId, kind: EventKind) -> Self {
        Self {
            player,
            kind,
            roll: None,
        }
    }

    /// Attach a roll known at push time (combat damage carries its attack roll).
    #[must_use]
    pub fn with_roll(mut self, roll: u8) -> Self {
        self.roll = Some(roll);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_flags() {
        assert_eq!(EventKind::EndTurn.name(), "end turn");
        assert!(EventKind::StartOfTurn.is_turn_boundary());
        assert!(!EventKind::CharacterDeath.is_turn_boundary());
        assert!(EventKind::Fizzled.is_fizzled());
    }

    #[test]
    fn test_is_damage_to() {
        let dmg = EventKind::Damage {
            target: Target::Player(PlayerId(1)),
            amount: 2,
            monster: None,
        };
        assert!(dmg.is_damage_to(PlayerId(1)));
        assert!(!dmg.is_damage_to(PlayerId(0)));
        assert!(!EventKind::EndTurn.is_damage_to(PlayerId(1)));
    }

    #[test]
    fn test_effect_accessor() {
        let kind = EventKind::TriggeredEffect {
            source: CardId(48),
            effect: Effect::Nothing,
        };
        assert_eq!(kind.effect(), Some(&Effect::Nothing));
        assert!(EventKind::IntentionToPurchase.effect().is_none());
    }

    #[test]
    fn test_target_display() {
        assert_eq!(Target::Player(PlayerId(2)).to_string(), "Player 2");
        assert_eq!(Target::Monster(CardId(118)).to_string(), "Monster 118");
    }
}
