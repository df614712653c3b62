//! The reactive node arena.
//!
//! Nodes live in a generational arena rather than behind `Rc`/reference
//! counting: the graph is inherently bidirectional (a dependency points at
//! its subscribers and vice versa), which a tracing-GC language shrugs off
//! but a systems language cannot represent with ordinary ownership. A
//! stable `NodeId { index, generation }` stands in for a pointer; handles
//! returned to callers own a `NodeId` and release the slot (and every
//! incident link) on `Drop`.

use std::any::Any;

use crate::flags::NodeFlags;
use crate::link::LinkId;

/// Stable identifier for a node in the arena. The generation guards against
/// use-after-free: a slot reused after its previous occupant was disposed
/// gets a bumped generation, so a stale `NodeId` from before the reuse no
/// longer resolves to anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    Signal,
    Computed,
    Effect,
    Scope,
}

/// The header every node variant shares: flags plus the four link-list
/// endpoints (`deps`/`depsTail` for outgoing
/// dependency links, `subs`/`subsTail` for incoming subscriber links).
pub(crate) struct NodeHeader {
    pub kind: NodeKind,
    pub flags: NodeFlags,
    pub deps: Option<LinkId>,
    pub deps_tail: Option<LinkId>,
    pub subs: Option<LinkId>,
    pub subs_tail: Option<LinkId>,
    /// Bumped whenever this node's own observable value changes (a signal
    /// committing a different value, or a computed recomputing to a
    /// different value). Links snapshot this to detect staleness during
    /// `validate` without re-running getters that didn't need to run.
    pub value_version: u64,
    pub label: Option<&'static str>,
    pub payload: NodePayload,
}

pub(crate) enum NodePayload {
    Signal(SignalPayload),
    Computed(ComputedPayload),
    Effect(EffectPayload),
    Scope(ScopePayload),
}

pub(crate) struct SignalPayload {
    pub current: Box<dyn Any>,
    pub pending: Option<Box<dyn Any>>,
    pub eq: Box<dyn Fn(&dyn Any, &dyn Any) -> bool>,
}

pub(crate) struct ComputedPayload {
    pub cached: Option<Box<dyn Any>>,
    pub getter: Box<dyn FnMut(Option<&dyn Any>) -> Box<dyn Any>>,
    pub eq: Box<dyn Fn(&dyn Any, &dyn Any) -> bool>,
}

pub(crate) struct EffectPayload {
    pub body: Box<dyn FnMut()>,
    pub scope: Option<NodeId>,
}

pub(crate) struct ScopePayload {
    /// Effects attached to this scope, in creation order. `stop()` tears
    /// them down in reverse.
    pub effects: Vec<NodeId>,
    /// Nested scopes opened while this scope was the innermost open one.
    /// `stop()` recurses into these, so stopping an outer scope tears down
    /// every scope nested inside it.
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

enum Slot {
    Occupied { generation: u32, node: NodeHeader },
    Vacant { generation: u32, next_free: Option<u32> },
}

/// The node arena. One per [`crate::runtime::Runtime`].
#[derive(Default)]
pub(crate) struct NodeArena {
    slots: Vec<Slot>,
    free_head: Option<u32>,
}

impl NodeArena {
    pub fn insert(&mut self, node: NodeHeader) -> NodeId {
        if let Some(index) = self.free_head {
            let slot = &mut self.slots[index as usize];
            let generation = match *slot {
                Slot::Vacant {
                    generation,
                    next_free,
                } => {
                    self.free_head = next_free;
                    generation
                }
                Slot::Occupied { .. } => unreachable!("free list points at occupied slot"),
            };
            *slot = Slot::Occupied { generation, node };
            NodeId { index, generation }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot::Occupied {
                generation: 0,
                node,
            });
            NodeId {
                index,
                generation: 0,
            }
        }
    }

    pub fn remove(&mut self, id: NodeId) -> Option<NodeHeader> {
        let slot = self.slots.get_mut(id.index as usize)?;
        match slot {
            Slot::Occupied { generation, .. } if *generation == id.generation => {
                let next_generation = generation.wrapping_add(1);
                let old = std::mem::replace(
                    slot,
                    Slot::Vacant {
                        generation: next_generation,
                        next_free: self.free_head,
                    },
                );
                self.free_head = Some(id.index);
                match old {
                    Slot::Occupied { node, .. } => Some(node),
                    Slot::Vacant { .. } => None,
                }
            }
            _ => None,
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeHeader> {
        match self.slots.get(id.index as usize)? {
            Slot::Occupied { generation, node } if *generation == id.generation => Some(node),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeHeader> {
        match self.slots.get_mut(id.index as usize)? {
            Slot::Occupied { generation, node } if *generation == id.generation => Some(node),
            _ => None,
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Total slots ever allocated, occupied or not. A cheap, conservative
    /// stand-in for a live-node count when enforcing [`crate::runtime::RuntimeConfig::max_nodes`].
    pub fn len(&self) -> usize {
        self.slots.len()
    }
}
