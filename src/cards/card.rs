//! Card identity and the closed set of card variants.

use serde::{Deserialize, Serialize};

use super::{CharacterCard, ItemCard, LootCard, MonsterCard, TreasureCard};
use crate::error::{EngineResult, GameError};

/// Printed card number. Unique per card design.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Immutable identity shared by every card variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInfo {
    pub id: CardId,
    pub name: String,
    pub text: String,
}

impl CardInfo {
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            text: String::new(),
        }
    }

    /// Set the rules text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

/// Accessors every card exposes.
///
/// `header` and `row` are the read-only projection used when a list of
/// cards is shown to a player making a choice.
pub trait CardBase {
    fn info(&self) -> &CardInfo;

    fn id(&self) -> CardId {
        self.info().id
    }

    fn name(&self) -> &str {
        &self.info().name
    }

    fn text(&self) -> &str {
        &self.info().text
    }

    /// Column titles matching [`row`](CardBase::row).
    fn header(&self) -> String;

    /// One-line listing of this card.
    fn row(&self) -> String;
}

/// Which of the four variants a card is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Character,
    Loot,
    Monster,
    Treasure,
}

/// Any card, whatever its variant.
///
/// Used where a zone can hold mixed variants (souls).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Card {
    Character(CharacterCard),
    Loot(LootCard),
    Monster(MonsterCard),
    Treasure(TreasureCard),
}

impl Card {
    #[must_use]
    pub fn kind(&self) -> CardKind {
        match self {
            Card::Character(_) => CardKind::Character,
            Card::Loot(_) => CardKind::Loot,
            Card::Monster(_) => CardKind::Monster,
            Card::Treasure(_) => CardKind::Treasure,
        }
    }

    /// Treasures and trinkets are items.
    #[must_use]
    pub fn as_item(&self) -> Option<&dyn ItemCard> {
        match self {
            Card::Treasure(t) => Some(t),
            Card::Loot(l) if l.trinket => Some(l),
            _ => None,
        }
    }

    /// Tap an activatable card.
    ///
    /// Only characters and activatable treasures have a tapped state; any
    /// other card reports [`GameError::NotActivatable`].
    pub fn tap(&mut self) -> EngineResult<()> {
        match self {
            Card::Character(c) if c.tapped => Err(GameError::AlreadyTapped { card: c.id() }),
            Card::Character(c) => {
                c.tapped = true;
                Ok(())
            }
            Card::Treasure(t) if t.is_activatable() => {
                if t.tapped {
                    return Err(GameError::AlreadyTapped { card: t.id() });
                }
                t.tapped = true;
                Ok(())
            }
            other => Err(GameError::NotActivatable { card: other.id() }),
        }
    }

    /// Ready an activatable card again.
    pub fn recharge(&mut self) -> EngineResult<()> {
        match self {
            Card::Character(c) => {
                c.tapped = false;
                Ok(())
            }
            Card::Treasure(t) if t.is_activatable() => {
                t.tapped = false;
                Ok(())
            }
            other => Err(GameError::NotActivatable { card: other.id() }),
        }
    }
}

impl CardBase for Card {
    fn info(&self) -> &CardInfo {
        match self {
            Card::Character(c) => c.info(),
            Card::Loot(l) => l.info(),
            Card::Monster(m) => m.info(),
            Card::Treasure(t) => t.info(),
        }
    }

    fn header(&self) -> String {
        match self {
            Card::Character(c) => c.header(),
            Card::Loot(l) => l.header(),
            Card::Monster(m) => m.header(),
            Card::Treasure(t) => t.header(),
        }
    }

    fn row(&self) -> String {
        match self {
            Card::Character(c) => c.row(),
            Card::Loot(l) => l.row(),
            Card::Monster(m) => m.row(),
            Card::Treasure(t) => t.row(),
        }
    }
}

impl From<CharacterCard> for Card {
    fn from(card: CharacterCard) -> Self {
        Card::Character(card)
    }
}

impl From<LootCard> for Card {
    fn from(card: LootCard) -> Self {
        Card::Loot(card)
    }
}

impl From<MonsterCard> for Card {
    fn from(card: MonsterCard) -> Self {
        Card::Monster(card)
    }
}

impl From<TreasureCard> for Card {
    fn from(card: TreasureCard) -> Self {
        Card::Treasure(card)
    }
}
