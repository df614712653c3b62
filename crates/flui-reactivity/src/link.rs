//! Dependency/subscriber edges.
//!
//! A [`Link`] is the one piece of state a naive reference-counted
//! implementation gets almost for free and an arena-based one has to build
//! by hand: it sits in two intrusive doubly-linked lists at once (the
//! subscriber's outgoing `deps` chain and the dependency's incoming `subs`
//! chain), so it can be spliced out of either side in O(1) without
//! rescanning a `Vec`. Links are arena-allocated next to nodes and recycled
//! through an intrusive free list (push on removal, pop on creation) —
//! dependency churn in the dynamic-dependency case would otherwise dominate
//! allocator traffic.

use crate::node::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

pub(crate) struct Link {
    pub dep: NodeId,
    pub sub: NodeId,
    /// The dependency's `value_version` as observed the last time this
    /// link was (re)established. `validate` compares this against the
    /// dependency's current version to decide whether it actually changed.
    pub version: u64,

    // Subscriber's outgoing dependency list.
    pub prev_dep: Option<LinkId>,
    pub next_dep: Option<LinkId>,

    // Dependency's incoming subscriber list.
    pub prev_sub: Option<LinkId>,
    pub next_sub: Option<LinkId>,
}

enum Slot {
    Occupied { generation: u32, link: Link },
    Vacant { generation: u32, next_free: Option<u32> },
}

#[derive(Default)]
pub(crate) struct LinkArena {
    slots: Vec<Slot>,
    free_head: Option<u32>,
}

impl LinkArena {
    pub fn insert(&mut self, link: Link) -> LinkId {
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
            *slot = Slot::Occupied { generation, link };
            LinkId { index, generation }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot::Occupied {
                generation: 0,
                link,
            });
            LinkId {
                index,
                generation: 0,
            }
        }
    }

    pub fn remove(&mut self, id: LinkId) -> Option<Link> {
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
                    Slot::Occupied { link, .. } => Some(link),
                    Slot::Vacant { .. } => None,
                }
            }
            _ => None,
        }
    }

    pub fn get(&self, id: LinkId) -> Option<&Link> {
        match self.slots.get(id.index as usize)? {
            Slot::Occupied { generation, link } if *generation == id.generation => Some(link),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: LinkId) -> Option<&mut Link> {
        match self.slots.get_mut(id.index as usize)? {
            Slot::Occupied { generation, link } if *generation == id.generation => Some(link),
            _ => None,
        }
    }
}
