//! The event stack.
//!
//! Every state change in a game is pushed as an [`Event`] and resolved
//! last-in, first-out. Reactions pushed while an event resolves sit above
//! everything already waiting, so they finish first.
//!
//! ## Design Philosophy
//!
//! The stack is an explicit singly-linked list. Card effects remember the
//! [`NodeId`] of the event they want to change (a damage to prevent, a roll
//! to nudge) and come back to it later, after other events were pushed and
//! popped around it. The node ids grow with every push, which lets a search
//! stop as soon as it walks past where the target would have been.
//!
//! Cancelling never removes a node. [`EventStack::fizzle`] swaps the payload
//! for [`EventKind::Fizzled`], which resolves to nothing and draws no
//! reactions.

mod event;
mod event_stack;

pub use event::{Event, EventKind, PurchaseTarget, Target};
pub use event_stack::{EventNode, EventStack, NodeId};
