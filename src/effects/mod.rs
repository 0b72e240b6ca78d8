//! What cards do, and how it happens.
//!
//! - [`Effect`]: a deferred game action with its targets already chosen
//! - [`Resolver`]: pops events off the stack and applies them
//! - [`triggers`]: finds the cards that react to a resolved event
//!
//! ## Design Philosophy
//!
//! Effects are data. A card's hook returns an [`Effect`] value and the
//! resolver is the only code that turns one into board mutations, through
//! a single exhaustive `match`. Adding a new kind of effect means adding a
//! variant and the compiler points at every place that has to handle it.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use four_souls::board::Board;
//! use four_souls::catalog::StarterCatalog;
//! use four_souls::core::{GameConfig, PlayerId, ScriptedChoices};
//! use four_souls::effects::{Effect, Resolver};
//! use four_souls::stack::{Event, EventKind};
//! use four_souls::cards::CardId;
//!
//! let mut board = Board::new(GameConfig::new(2).with_seed(1), Arc::new(StarterCatalog::new())).unwrap();
//! let p = PlayerId(0);
//! board.stack.push(Event::new(p, EventKind::TriggeredEffect {
//!     source: CardId(0),
//!     effect: Effect::GainCents { player: p, amount: 4 },
//! }));
//!
//! let mut input = ScriptedChoices::new([]);
//! Resolver::new(&mut board, &mut input).resolve_all().unwrap();
//! assert_eq!(board.players[p].cents, 7);
//! ```

mod effect;
mod resolver;
pub mod triggers;

pub use effect::{DeckKind, Effect, RollOutcome};
pub use resolver::{Resolved, Resolver};
pub use triggers::Reaction;
