//! Card activation.
//!
//! Using a card is split in two so that a failed attempt never leaves half
//! a change behind:
//!
//! 1. **Bind**: the card's [`CardBehavior::bind`] checks its preconditions
//!    against a read-only view of the board and asks the player for every
//!    target it needs. It returns a [`Binding`]: the [`Effect`] to run later
//!    plus a [`Followup`] telling the commit step what else to do.
//! 2. **Commit**: [`activate_item`], [`activate_character`] and
//!    [`play_loot`] tap, pay, discard and push. Nothing is mutated before
//!    bind has succeeded.
//!
//! The same hook trait carries the two other ways a card can act: reacting
//! to a resolving event ([`CardBehavior::on_event`]) and changing the board
//! while it is in play ([`CardBehavior::continuous`]).
//!
//! ## Example Usage
//!
//! ```
//! use four_souls::activation::{Binding, Followup};
//! use four_souls::core::PlayerId;
//! use four_souls::effects::Effect;
//!
//! let chest = Binding::with_roll(Effect::by_roll([
//!     (1, 2, Effect::GainCents { player: PlayerId(0), amount: 1 }),
//!     (3, 6, Effect::GainCents { player: PlayerId(0), amount: 3 }),
//! ]));
//! assert_eq!(chest.followup, Followup::RollDice);
//! ```

mod protocol;

pub use protocol::{activate_character, activate_item, play_loot};

use crate::board::{Board, Player};
use crate::cards::{CardBase, CardId, ItemCard};
use crate::core::{pick_index, ChoiceProvider, PlayerId};
use crate::effects::{DeckKind, Effect};
use crate::error::{EngineResult, GameError};
use crate::stack::{Event, EventNode, NodeId, Target};

/// What the commit step does after pushing the bound effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Followup {
    None,
    /// Roll a die; the effect branches on the result.
    RollDice,
    /// The activator takes this much damage as a cost. The effect only
    /// applies if they survive it.
    SelfDamage(u8),
    /// The paid ability was used: remove counters or cents instead of tapping.
    PaidUse { counters: u8, cents: u32 },
}

/// Result of a successful bind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub effect: Effect,
    pub followup: Followup,
}

impl Binding {
    #[must_use]
    pub fn new(effect: Effect) -> Self {
        Self {
            effect,
            followup: Followup::None,
        }
    }

    #[must_use]
    pub fn with_roll(effect: Effect) -> Self {
        Self {
            effect,
            followup: Followup::RollDice,
        }
    }

    #[must_use]
    pub fn with_self_damage(effect: Effect, amount: u8) -> Self {
        Self {
            effect,
            followup: Followup::SelfDamage(amount),
        }
    }

    #[must_use]
    pub fn paid(effect: Effect, counters: u8, cents: u32) -> Self {
        Self {
            effect,
            followup: Followup::PaidUse { counters, cents },
        }
    }
}

/// Read-only view handed to card hooks, plus a way to ask the player.
pub struct BindContext<'a> {
    pub board: &'a Board,
    /// The player using the card, or its owner for reactions.
    pub player: PlayerId,
    /// The card whose hook is running.
    pub card: CardId,
    input: &'a mut dyn ChoiceProvider,
}

impl<'a> BindContext<'a> {
    pub fn new(
        board: &'a Board,
        player: PlayerId,
        card: CardId,
        input: &'a mut dyn ChoiceProvider,
    ) -> Self {
        Self {
            board,
            player,
            card,
            input,
        }
    }

    #[must_use]
    pub fn owner(&self) -> &Player {
        &self.board.players[self.player]
    }

    /// The hook's own card, when it is an item in front of `player`.
    #[must_use]
    pub fn item(&self) -> Option<&dyn ItemCard> {
        self.owner().item(self.card)
    }

    /// Pick one of `len` options. `None` when there are none.
    pub fn choose(&mut self, prompt: &str, len: usize) -> Option<usize> {
        pick_index(&mut *self.input, self.player, prompt, len)
    }

    /// Like [`choose`](Self::choose), but an empty list is a failed bind.
    pub fn choose_required(&mut self, prompt: &str, len: usize) -> EngineResult<usize> {
        self.choose(prompt, len)
            .ok_or_else(|| GameError::NoLegalTarget(prompt.to_string()))
    }

    /// A value in `min..=max`, clamped.
    pub fn choose_value(&mut self, prompt: &str, min: usize, max: usize) -> usize {
        self.input.choose(self.player, prompt, min, max).clamp(min, max)
    }

    /// A pending event matching `pred`, newest first.
    pub fn choose_node(
        &mut self,
        prompt: &str,
        pred: impl FnMut(&Event) -> bool,
    ) -> EngineResult<NodeId> {
        let nodes = self.board.stack.ids_where(pred);
        let index = self.choose_required(prompt, nodes.len())?;
        Ok(nodes[index])
    }

    /// An active monster or a living player.
    pub fn choose_target(&mut self, prompt: &str) -> EngineResult<Target> {
        let targets: Vec<Target> = self
            .board
            .monsters
            .active_monsters()
            .map(|m| Target::Monster(m.id()))
            .chain(self.board.living_players().map(Target::Player))
            .collect();
        let index = self.choose_required(prompt, targets.len())?;
        Ok(targets[index])
    }

    /// Any player other than `player`.
    pub fn choose_other_player(&mut self, prompt: &str) -> EngineResult<PlayerId> {
        let others = self.board.other_players(self.player);
        let index = self.choose_required(prompt, others.len())?;
        Ok(others[index])
    }

    pub fn choose_deck(&mut self, prompt: &str) -> DeckKind {
        match self.choose_value(prompt, 0, 2) {
            0 => DeckKind::Loot,
            1 => DeckKind::Monster,
            _ => DeckKind::Treasure,
        }
    }
}

/// Behaviour attached to a card id by the catalog.
///
/// Every hook has a default, so a card implements only what it does.
pub trait CardBehavior: Send + Sync {
    /// Validate and pick targets for a use of this card.
    fn bind(&self, ctx: &mut BindContext<'_>) -> EngineResult<Binding> {
        Err(GameError::NotActivatable { card: ctx.card })
    }

    /// React to an event that just resolved. `ctx.player` is the card's
    /// owner for items and curses, and the event's player for monsters.
    fn on_event(&self, _ctx: &mut BindContext<'_>, _node: &EventNode) -> Option<Binding> {
        None
    }

    /// Called once when the card enters play and once when it leaves.
    fn continuous(&self, _board: &mut Board, _owner: PlayerId, _card: CardId, _leaving: bool) {}

    /// Effect of a monster dying or a bonus card being revealed.
    fn on_death(&self, _ctx: &mut BindContext<'_>) -> Option<Binding> {
        None
    }
}
