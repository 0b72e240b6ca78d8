//! Where cards come from.
//!
//! The engine never hard-codes a card list. A [`CardCatalog`] supplies the
//! characters, the starting item of each character, the three decks for a
//! given [`GameConfig`], and the [`CardBehavior`] attached to each card id.
//!
//! [`StarterCatalog`] is a small but complete rule set: eight characters,
//! a loot deck of currency, bombs, pills and trinkets, a monster deck with
//! bosses, bonus cards and curses, and a treasure deck of active, paid and
//! passive items. Tests and simulations run against it.
//!
//! ## Design Philosophy
//!
//! Card data and card behaviour are kept apart. The card records are plain
//! serializable values that move between zones; the behaviour stays in the
//! catalog, looked up by id whenever a hook has to run. Most behaviours are
//! built from closures with [`Hooks`], so a card is one registration line
//! rather than one type per card.
//!
//! ## Example Usage
//!
//! ```
//! use four_souls::catalog::{CardCatalog, StarterCatalog};
//! use four_souls::cards::ids;
//! use four_souls::core::GameConfig;
//!
//! let catalog = StarterCatalog::new();
//! let config = GameConfig::new(2);
//! assert!(catalog.loot_cards(&config).len() > 40);
//! assert!(catalog.behavior(ids::BOMB).is_some());
//! assert!(catalog.starting_item("Isaac").is_some_and(|item| item.eternal));
//! ```

mod characters;
mod loot;
mod monsters;
mod treasure;

use log::warn;
use rustc_hash::FxHashMap;

use crate::activation::{BindContext, Binding, CardBehavior};
use crate::board::Board;
use crate::cards::{CardId, CharacterCard, LootCard, MonsterCard, TreasureCard};
use crate::core::{GameConfig, PlayerId};
use crate::error::{EngineResult, GameError};
use crate::stack::EventNode;

/// Source of cards and card behaviour for a game.
pub trait CardCatalog: Send + Sync {
    /// Every playable character.
    fn characters(&self) -> Vec<CharacterCard>;

    /// The item a character starts with, by character name.
    fn starting_item(&self, character: &str) -> Option<TreasureCard>;

    fn loot_cards(&self, config: &GameConfig) -> Vec<LootCard>;

    fn monster_cards(&self, config: &GameConfig) -> Vec<MonsterCard>;

    fn treasure_cards(&self, config: &GameConfig) -> Vec<TreasureCard>;

    /// Hooks for a card id, if the card does anything.
    fn behavior(&self, card: CardId) -> Option<&dyn CardBehavior>;
}

type BindFn = Box<dyn Fn(&mut BindContext<'_>) -> EngineResult<Binding> + Send + Sync>;
type EventFn = Box<dyn Fn(&mut BindContext<'_>, &EventNode) -> Option<Binding> + Send + Sync>;
type ContinuousFn = Box<dyn Fn(&mut Board, PlayerId, CardId, bool) + Send + Sync>;
type DeathFn = Box<dyn Fn(&mut BindContext<'_>) -> Option<Binding> + Send + Sync>;

/// A [`CardBehavior`] assembled from closures.
///
/// Hooks that are not set fall back to the trait defaults.
#[derive(Default)]
pub struct Hooks {
    bind: Option<BindFn>,
    on_event: Option<EventFn>,
    continuous: Option<ContinuousFn>,
    on_death: Option<DeathFn>,
}

impl Hooks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn bind<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut BindContext<'_>) -> EngineResult<Binding> + Send + Sync + 'static,
    {
        self.bind = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_event<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut BindContext<'_>, &EventNode) -> Option<Binding> + Send + Sync + 'static,
    {
        self.on_event = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn continuous<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut Board, PlayerId, CardId, bool) + Send + Sync + 'static,
    {
        self.continuous = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_death<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut BindContext<'_>) -> Option<Binding> + Send + Sync + 'static,
    {
        self.on_death = Some(Box::new(f));
        self
    }
}

impl CardBehavior for Hooks {
    fn bind(&self, ctx: &mut BindContext<'_>) -> EngineResult<Binding> {
        match &self.bind {
            Some(f) => f(ctx),
            None => Err(GameError::NotActivatable { card: ctx.card }),
        }
    }

    fn on_event(&self, ctx: &mut BindContext<'_>, node: &EventNode) -> Option<Binding> {
        self.on_event.as_ref().and_then(|f| f(ctx, node))
    }

    fn continuous(&self, board: &mut Board, owner: PlayerId, card: CardId, leaving: bool) {
        if let Some(f) = &self.continuous {
            f(board, owner, card, leaving);
        }
    }

    fn on_death(&self, ctx: &mut BindContext<'_>) -> Option<Binding> {
        self.on_death.as_ref().and_then(|f| f(ctx))
    }
}

/// The built-in rule set.
pub struct StarterCatalog {
    behaviors: FxHashMap<CardId, Box<dyn CardBehavior>>,
}

impl StarterCatalog {
    #[must_use]
    pub fn new() -> Self {
        let mut catalog = Self {
            behaviors: FxHashMap::default(),
        };
        characters::register(&mut catalog);
        loot::register(&mut catalog);
        monsters::register(&mut catalog);
        treasure::register(&mut catalog);
        catalog
    }

    /// Attach behaviour to a card id. A second registration replaces the first.
    pub fn register(&mut self, card: CardId, behavior: impl CardBehavior + 'static) {
        if self.behaviors.insert(card, Box::new(behavior)).is_some() {
            warn!("behaviour for {card} registered twice");
        }
    }

    /// Number of cards with behaviour attached.
    #[must_use]
    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }
}

impl Default for StarterCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CardCatalog for StarterCatalog {
    fn characters(&self) -> Vec<CharacterCard> {
        characters::roster()
    }

    fn starting_item(&self, character: &str) -> Option<TreasureCard> {
        characters::starting_item(character)
    }

    fn loot_cards(&self, config: &GameConfig) -> Vec<LootCard> {
        loot::deck(config)
    }

    fn monster_cards(&self, config: &GameConfig) -> Vec<MonsterCard> {
        monsters::deck(config)
    }

    fn treasure_cards(&self, config: &GameConfig) -> Vec<TreasureCard> {
        treasure::deck(config)
    }

    fn behavior(&self, card: CardId) -> Option<&dyn CardBehavior> {
        self.behaviors.get(&card).map(Box::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;
    use crate::cards::{ids, CardBase, MonsterKind};

    #[test]
    fn test_every_character_has_a_starting_item() {
        let catalog = StarterCatalog::new();
        for character in catalog.characters() {
            let item = catalog.starting_item(character.name());
            assert!(item.is_some_and(|i| i.eternal), "{}", character.name());
        }
    }

    #[test]
    fn test_monster_ids_are_unique() {
        let catalog = StarterCatalog::new();
        let config = GameConfig::new(2).with_expansion_one(true).with_expansion_two(true);
        let cards = catalog.monster_cards(&config);
        let ids: FxHashSet<CardId> = cards.iter().map(CardBase::id).collect();
        assert_eq!(ids.len(), cards.len());
    }

    #[test]
    fn test_expansions_add_cards() {
        let catalog = StarterCatalog::new();
        let base = GameConfig::new(2);
        let full = base.clone().with_expansion_one(true).with_expansion_two(true);
        assert!(catalog.monster_cards(&full).len() > catalog.monster_cards(&base).len());
        assert!(catalog.treasure_cards(&full).len() > catalog.treasure_cards(&base).len());
    }

    #[test]
    fn test_monster_deck_has_bosses_and_extras() {
        let cards = StarterCatalog::new().monster_cards(&GameConfig::new(2));
        let count = |kind| cards.iter().filter(|m| m.kind == kind).count();
        assert!(count(MonsterKind::Boss) >= 6);
        assert!(count(MonsterKind::Basic) >= 6);
        assert!(count(MonsterKind::Bonus) >= 1);
        assert!(count(MonsterKind::Curse) >= 1);
    }

    #[test]
    fn test_activatable_treasure_has_behavior() {
        let catalog = StarterCatalog::new();
        let config = GameConfig::new(2).with_expansion_one(true).with_expansion_two(true);
        for item in catalog.treasure_cards(&config) {
            if item.is_activatable() {
                assert!(catalog.behavior(item.id()).is_some(), "{}", item.name());
            }
        }
    }

    #[test]
    fn test_non_trinket_loot_is_playable() {
        let catalog = StarterCatalog::new();
        for card in catalog.loot_cards(&GameConfig::new(2)) {
            if !card.trinket {
                assert!(catalog.behavior(card.id()).is_some(), "{}", card.name());
            }
        }
        assert!(catalog.behavior(ids::A_PENNY).is_some());
    }

    #[test]
    fn test_hooks_default_to_not_activatable() {
        let mut catalog = StarterCatalog::new();
        let before = catalog.len();
        catalog.register(CardId(9000), Hooks::new());
        assert_eq!(catalog.len(), before + 1);
        assert!(catalog.behavior(CardId(9000)).is_some());
    }
}
