//! The singly-linked event stack.

use log::trace;
use serde::{Deserialize, Serialize};

use super::{Event, EventKind};
use crate::error::{EngineResult, GameError};

/// Stable identity of a pushed event.
///
/// Ids strictly increase with push order, so walking down from the top an
/// id smaller than the one sought means the target is gone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl NodeId {
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// One link of the stack.
pub struct EventNode {
    id: NodeId,
    pub event: Event,
    next: Option<Box<EventNode>>,
}

impl EventNode {
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The node directly beneath this one.
    #[must_use]
    pub fn below(&self) -> Option<&EventNode> {
        self.next.as_deref()
    }

    /// Detach and return the event.
    #[must_use]
    pub fn into_event(self) -> Event {
        self.event
    }
}

impl std::fmt::Debug for EventNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventNode")
            .field("id", &self.id)
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}

/// LIFO stack of pending events with O(1) access to the top.
///
/// Nodes are boxed links rather than vector slots so a [`NodeId`] captured
/// by a card effect keeps naming the same event however much the stack
/// grows or shrinks around it.
///
/// ```
/// use four_souls::core::PlayerId;
/// use four_souls::stack::{Event, EventKind, EventStack};
///
/// let mut stack = EventStack::new();
/// let first = stack.push(Event::new(PlayerId(0), EventKind::StartOfTurn));
/// let roll = stack.push(Event::new(PlayerId(0), EventKind::DiceRoll { value: 3 }));
///
/// assert_eq!(stack.add_to_dice_roll(5, roll).unwrap(), 6);
/// stack.fizzle(first).unwrap();
///
/// assert_eq!(stack.pop().map(|n| n.id()), Some(roll));
/// assert!(stack.pop().unwrap().event.kind.is_fizzled());
/// assert!(stack.is_empty());
/// ```
pub struct EventStack {
    top: Option<Box<EventNode>>,
    next_id: u64,
    size: usize,
}

impl Default for EventStack {
    fn default() -> Self {
        Self {
            top: None,
            next_id: 1,
            size: 0,
        }
    }
}

impl EventStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Push an event and return the id of its new node.
    pub fn push(&mut self, event: Event) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        trace!("push {id} {} for {}", event.kind.name(), event.player);
        let node = Box::new(EventNode {
            id,
            event,
            next: self.top.take(),
        });
        self.top = Some(node);
        self.size += 1;
        id
    }

    /// Remove the top node.
    pub fn pop(&mut self) -> Option<EventNode> {
        let mut node = self.top.take()?;
        self.top = node.next.take();
        self.size -= 1;
        trace!("pop {} {}", node.id, node.event.kind.name());
        Some(*node)
    }

    #[must_use]
    pub fn peek(&self) -> Option<&EventNode> {
        self.top.as_deref()
    }

    pub fn peek_mut(&mut self) -> Option<&mut EventNode> {
        self.top.as_deref_mut()
    }

    /// Find a node by id, walking down from the top.
    #[must_use]
    pub fn search(&self, id: NodeId) -> Option<&EventNode> {
        for node in self.iter() {
            if node.id == id {
                return Some(node);
            }
            if node.id < id {
                break;
            }
        }
        None
    }

    pub fn search_mut(&mut self, id: NodeId) -> Option<&mut EventNode> {
        let mut cursor = self.top.as_deref_mut();
        while let Some(node) = cursor {
            if node.id == id {
                return Some(node);
            }
            if node.id < id {
                return None;
            }
            cursor = node.next.as_deref_mut();
        }
        None
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.search(id).is_some()
    }

    /// Cancel an event in place.
    ///
    /// Fizzling a node that has already fizzled changes nothing. A node that
    /// has been popped is `NodeNotFound`.
    pub fn fizzle(&mut self, id: NodeId) -> EngineResult<()> {
        let node = self
            .search_mut(id)
            .ok_or(GameError::NodeNotFound { node: id })?;
        if !node.event.kind.is_fizzled() {
            trace!("fizzle {id} {}", node.event.kind.name());
            node.event.kind = EventKind::Fizzled;
        }
        Ok(())
    }

    /// Shift a pending dice roll by `delta`, clamped to 1..=6.
    ///
    /// Returns the new value.
    pub fn add_to_dice_roll(&mut self, delta: i8, id: NodeId) -> EngineResult<u8> {
        let node = self
            .search_mut(id)
            .ok_or(GameError::NodeNotFound { node: id })?;
        match &mut node.event.kind {
            EventKind::DiceRoll { value } => {
                let shifted = (i16::from(*value) + i16::from(delta)).clamp(1, 6);
                *value = shifted as u8;
                trace!("dice roll {id} now {value}");
                Ok(*value)
            }
            EventKind::Fizzled => Err(GameError::EventFizzled { node: id }),
            _ => Err(GameError::WrongEventKind {
                node: id,
                expected: "dice roll",
            }),
        }
    }

    /// Reduce a pending damage event. At zero the event fizzles.
    ///
    /// Returns the damage left.
    pub fn prevent_damage(&mut self, amount: u8, id: NodeId) -> EngineResult<u8> {
        let node = self
            .search_mut(id)
            .ok_or(GameError::NodeNotFound { node: id })?;
        let left = match &mut node.event.kind {
            EventKind::Damage { amount: pending, .. } => {
                *pending = pending.saturating_sub(amount);
                *pending
            }
            EventKind::Fizzled => return Err(GameError::EventFizzled { node: id }),
            _ => {
                return Err(GameError::WrongEventKind {
                    node: id,
                    expected: "damage",
                })
            }
        };
        if left == 0 {
            node.event.kind = EventKind::Fizzled;
            trace!("damage {id} fully prevented");
        }
        Ok(left)
    }

    /// Attach a die roll to a pending event.
    pub fn set_roll(&mut self, id: NodeId, roll: u8) -> EngineResult<()> {
        let node = self
            .search_mut(id)
            .ok_or(GameError::NodeNotFound { node: id })?;
        node.event.roll = Some(roll);
        Ok(())
    }

    /// Nodes from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &EventNode> {
        std::iter::successors(self.top.as_deref(), |node| node.next.as_deref())
    }

    /// The topmost node whose event matches.
    pub fn find_latest(&self, mut pred: impl FnMut(&Event) -> bool) -> Option<NodeId> {
        self.iter().find(|node| pred(&node.event)).map(EventNode::id)
    }

    /// Every matching node id, top first.
    pub fn ids_where(&self, mut pred: impl FnMut(&Event) -> bool) -> Vec<NodeId> {
        self.iter()
            .filter(|node| pred(&node.event))
            .map(EventNode::id)
            .collect()
    }

    /// Pop everything, top first.
    pub fn drain(&mut self) -> Vec<Event> {
        let mut events = Vec::with_capacity(self.size);
        while let Some(node) = self.pop() {
            events.push(node.into_event());
        }
        events
    }

    pub fn clear(&mut self) {
        self.drain();
    }
}

impl Drop for EventStack {
    fn drop(&mut self) {
        // Unlink iteratively so a tall stack cannot overflow on drop.
        let mut cursor = self.top.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl std::fmt::Debug for EventStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|node| (node.id, node.event.kind.name())))
            .finish()
    }
}
