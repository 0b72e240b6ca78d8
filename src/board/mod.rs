//! The board: the single root of mutable game state.
//!
//! ## Design Philosophy
//!
//! Everything that changes during a game lives in one [`Board`] value: the
//! three shared card areas, the players, the event stack and whose turn it
//! is. There are no globals. Card hooks get a shared reference through
//! [`BindContext`](crate::activation::BindContext) while they decide what
//! to do, and every change they make goes through one of the board's
//! mutators when their effect resolves.
//!
//! The mutators are split by concern:
//!
//! - `setup`: dealing a new game
//! - `economy`: cents, loot, items, counters
//! - `dice`: rolling and roll modifiers
//! - `combat`: damage, battles, kills and deaths
//! - `shop`: prices and purchases
//! - `turn`: turn boundaries and refilling the table
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use four_souls::board::Board;
//! use four_souls::catalog::StarterCatalog;
//! use four_souls::core::GameConfig;
//!
//! let board = Board::new(GameConfig::new(3).with_seed(11), Arc::new(StarterCatalog::new())).unwrap();
//! assert_eq!(board.player_count(), 3);
//! for (_, player) in board.players.iter() {
//!     assert_eq!(player.hand.len(), 3);
//!     assert_eq!(player.cents, 3);
//! }
//! ```

mod combat;
mod dice;
mod economy;
mod player;
mod setup;
mod shop;
mod turn;

pub use combat::DamageOutcome;
pub use player::Player;

use std::sync::Arc;

use log::trace;
use rustc_hash::FxHashMap;

use crate::activation::{Binding, Followup};
use crate::cards::CardId;
use crate::catalog::CardCatalog;
use crate::core::{GameConfig, GameRng, PlayerId, PlayerMap};
use crate::error::EngineResult;
use crate::stack::{Event, EventKind, EventStack, NodeId};
use crate::zones::{LootArea, MonsterArea, TreasureArea};

/// Complete game state.
pub struct Board {
    pub loot: LootArea,
    pub monsters: MonsterArea,
    pub treasure: TreasureArea,
    pub players: PlayerMap<Player>,
    pub stack: EventStack,
    /// Whose turn it is.
    pub active: PlayerId,
    /// Turn number, starting at 1.
    pub turn: u32,
    pub config: GameConfig,
    /// Crystal Ball guesses waiting for the next roll.
    pub dice_guesses: FxHashMap<PlayerId, u8>,
    /// Set when the stack was unwound by a forced end of turn.
    pub(crate) unwound: bool,
    rng: GameRng,
    dice: GameRng,
    catalog: Arc<dyn CardCatalog>,
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("turn", &self.turn)
            .field("active", &self.active)
            .field("players", &self.players)
            .field("stack", &self.stack)
            .field("monster_slots", &self.monsters.slots)
            .field("shop", &self.treasure.shop)
            .finish_non_exhaustive()
    }
}

impl Board {
    #[must_use]
    pub fn catalog(&self) -> &Arc<dyn CardCatalog> {
        &self.catalog
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn is_active(&self, player: PlayerId) -> bool {
        self.active == player
    }

    /// Players still alive, in seat order.
    pub fn living_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .filter(|(_, p)| !p.is_dead())
            .map(|(id, _)| id)
    }

    /// Every player but `player`, in turn order after them.
    #[must_use]
    pub fn other_players(&self, player: PlayerId) -> Vec<PlayerId> {
        PlayerId::turn_order(player, self.player_count())
            .skip(1)
            .collect()
    }

    /// Living players other than `player`, in turn order after them.
    #[must_use]
    pub fn living_others(&self, player: PlayerId) -> Vec<PlayerId> {
        PlayerId::turn_order(player, self.player_count())
            .skip(1)
            .filter(|&p| !self.players[p].is_dead())
            .collect()
    }

    /// Who has this item in play.
    #[must_use]
    pub fn owner_of(&self, item: CardId) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, p)| p.has_item(item))
            .map(|(id, _)| id)
    }

    /// Every card on the table: decks, discards, slots, shop and everything
    /// in front of a player. Characters are not counted.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let players: usize = self
            .players
            .values()
            .map(|p| {
                p.hand.len()
                    + p.active_items.len()
                    + p.passive_items.len()
                    + p.souls.len()
                    + p.curses.len()
            })
            .sum();
        self.loot.len()
            + self.monsters.pile.len()
            + self.monsters.cards_in_slots()
            + self.treasure.pile.len()
            + self.treasure.cards_in_shop()
            + players
    }

    /// Run `card`'s continuous hook for `owner`.
    pub(crate) fn run_continuous(&mut self, owner: PlayerId, card: CardId, leaving: bool) {
        let catalog = Arc::clone(&self.catalog);
        if let Some(behavior) = catalog.behavior(card) {
            trace!("continuous {card} for {owner} (leaving: {leaving})");
            behavior.continuous(self, owner, card, leaving);
        }
    }

    /// Push a reaction or on-death effect, then whatever its binding asks for.
    pub fn push_triggered(
        &mut self,
        player: PlayerId,
        source: CardId,
        binding: Binding,
    ) -> EngineResult<NodeId> {
        let node = self.stack.push(Event::new(
            player,
            EventKind::TriggeredEffect {
                source,
                effect: binding.effect,
            },
        ));
        self.apply_followup(player, binding.followup)?;
        Ok(node)
    }

    /// Everything a binding needs pushed above its effect.
    pub(crate) fn apply_followup(&mut self, player: PlayerId, followup: Followup) -> EngineResult<()> {
        match followup {
            Followup::None | Followup::PaidUse { .. } => Ok(()),
            Followup::RollDice => self.roll_dice().map(|_| ()),
            Followup::SelfDamage(amount) => self
                .damage_player(player, player, amount, None, None)
                .map(|_| ()),
        }
    }
}
