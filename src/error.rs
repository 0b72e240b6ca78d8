//! Error taxonomy for the rules engine.
//!
//! Every failure the engine can report is a [`GameError`]. Errors fall into
//! three categories:
//!
//! - **Validation**: an action's preconditions do not hold (already tapped,
//!   not enough cents, no legal target). Nothing was mutated; the acting
//!   player may pick something else.
//! - **NotFound**: a lookup by id or index missed. Callers that acted on a
//!   stale reference treat this as "the effect no longer applies".
//! - **Invariant**: the data model is inconsistent. These are fatal and are
//!   propagated up to the driver instead of being swallowed.

use thiserror::Error;

use crate::cards::CardId;
use crate::core::PlayerId;
use crate::stack::NodeId;

/// Broad classification of a [`GameError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Rejected action, state untouched.
    Validation,
    /// Stale or missing reference.
    NotFound,
    /// Broken invariant; no safe recovery.
    Invariant,
}

/// Errors produced by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{card} is already tapped")]
    AlreadyTapped { card: CardId },

    #[error("{card} has no activated ability")]
    NotActivatable { card: CardId },

    #[error("{player} needs {needed} cents but has {available}")]
    InsufficientCents {
        player: PlayerId,
        needed: u32,
        available: u32,
    },

    #[error("no legal target: {0}")]
    NoLegalTarget(String),

    #[error("{player} has no {action} left this turn")]
    NoActionsRemaining {
        player: PlayerId,
        action: &'static str,
    },

    #[error("{player} is in battle")]
    InBattle { player: PlayerId },

    #[error("{player} is not in battle")]
    NotInBattle { player: PlayerId },

    #[error("the event stack must be empty for this action")]
    StackBusy,

    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),

    #[error("deck is empty")]
    EmptyDeck,

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{card} not found")]
    CardNotFound { card: CardId },

    #[error("{node} is not on the stack")]
    NodeNotFound { node: NodeId },

    #[error("{node} has fizzled")]
    EventFizzled { node: NodeId },

    #[error("monster slot {slot} is empty")]
    EmptySlot { slot: usize },

    #[error("{node} is not a {expected} event")]
    WrongEventKind {
        node: NodeId,
        expected: &'static str,
    },

    #[error("dice roll resolved with no event beneath it")]
    OrphanDiceRoll,

    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl GameError {
    /// Get the category of this error.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyTapped { .. }
            | Self::NotActivatable { .. }
            | Self::InsufficientCents { .. }
            | Self::NoLegalTarget(_)
            | Self::NoActionsRemaining { .. }
            | Self::InBattle { .. }
            | Self::NotInBattle { .. }
            | Self::StackBusy
            | Self::InvalidConfig(_) => ErrorCategory::Validation,

            Self::EmptyDeck
            | Self::IndexOutOfRange { .. }
            | Self::CardNotFound { .. }
            | Self::NodeNotFound { .. }
            | Self::EventFizzled { .. }
            | Self::EmptySlot { .. } => ErrorCategory::NotFound,

            Self::WrongEventKind { .. } | Self::OrphanDiceRoll | Self::Invariant(_) => {
                ErrorCategory::Invariant
            }
        }
    }

    /// True for errors that leave no safe way to continue the game.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.category() == ErrorCategory::Invariant
    }
}

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, GameError>;
