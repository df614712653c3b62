//! Tree trait implementations for LayerTree
//!
//! This module implements `TreeRead<LayerId>` and `TreeNav<LayerId>` from flui-tree,
//! enabling generic tree algorithms and visitors to work with LayerTree.

use flui_foundation::LayerId;
use flui_tree::iter::{AllSiblings, Ancestors, DescendantsWithDepth};
use flui_tree::{TreeNav, TreeRead};

use super::layer_tree::{LayerNode, LayerTree};

// ============================================================================
// TREE READ IMPLEMENTATION
// ============================================================================

impl TreeRead<LayerId> for LayerTree {
    type Node = LayerNode;
    type NodeIter<'a> = LayerIdIter<'a>;

    const DEFAULT_CAPACITY: usize = 64;
    const INLINE_THRESHOLD: usize = 16;

    #[inline]
    fn get(&self, id: LayerId) -> Option<&Self::Node> {
        LayerTree::get(self, id)
    }

    #[inline]
    fn contains(&self, id: LayerId) -> bool {
        LayerTree::contains(self, id)
    }

    #[inline]
    fn len(&self) -> usize {
        LayerTree::len(self)
    }

    #[inline]
    fn node_ids(&self) -> Self::NodeIter<'_> {
        self.iter_slab().map(slab_index_to_layer_id)
    }
}

// ============================================================================
// TREE NAV IMPLEMENTATION
// ============================================================================

impl TreeNav<LayerId> for LayerTree {
    type ChildrenIter<'a> = ChildrenIter<'a>;
    type AncestorsIter<'a> = Ancestors<'a, LayerId, Self>;
    type DescendantsIter<'a> = DescendantsWithDepth<'a, LayerId, Self>;
    type SiblingsIter<'a> = AllSiblings<'a, LayerId, Self>;

    const MAX_DEPTH: usize = 32;
    const AVG_CHILDREN: usize = 4;

    #[inline]
    fn parent(&self, id: LayerId) -> Option<LayerId> {
        LayerTree::parent(self, id)
    }

    #[inline]
    fn children(&self, id: LayerId) -> Self::ChildrenIter<'_> {
        ChildrenIter::new(self, id)
    }

    #[inline]
    fn ancestors(&self, start: LayerId) -> Self::AncestorsIter<'_> {
        Ancestors::new(self, start)
    }

    #[inline]
    fn descendants(&self, root: LayerId) -> Self::DescendantsIter<'_> {
        DescendantsWithDepth::new(self, root)
    }

    #[inline]
    fn siblings(&self, id: LayerId) -> Self::SiblingsIter<'_> {
        AllSiblings::new(self, id)
    }

    #[inline]
    fn child_count(&self, id: LayerId) -> usize {
        self.get(id).map(|node| node.children().len()).unwrap_or(0)
    }

    #[inline]
    fn has_children(&self, id: LayerId) -> bool {
        self.get(id)
            .map(|node| !node.children().is_empty())
            .unwrap_or(false)
    }
}

// ============================================================================
// TYPE ALIASES FOR ITERATORS
// ============================================================================

/// Zero-cost iterator over all LayerIds in the tree.
///
/// Uses `fn` pointer instead of closure for named type.
pub type LayerIdIter<'a> =
    std::iter::Map<slab::Iter<'a, LayerNode>, fn((usize, &LayerNode)) -> LayerId>;

/// Converts slab index to LayerId (fn pointer for type alias).
#[inline]
fn slab_index_to_layer_id((index, _): (usize, &LayerNode)) -> LayerId {
    LayerId::new(index + 1)
}

/// Iterator over children of a layer node.
pub struct ChildrenIter<'a> {
    children: Option<&'a [LayerId]>,
    index: usize,
}

impl<'a> ChildrenIter<'a> {
    fn new(tree: &'a LayerTree, id: LayerId) -> Self {
        Self {
            children: tree.children(id),
            index: 0,
        }
    }
}

impl<'a> Iterator for ChildrenIter<'a> {
    type Item = LayerId;

    fn next(&mut self) -> Option<Self::Item> {
        let children = self.children?;
        if self.index < children.len() {
            let id = children[self.index];
            self.index += 1;
            Some(id)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .children
            .map(|c| c.len().saturating_sub(self.index))
            .unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChildrenIter<'_> {}

// ============================================================================
// TESTS
// ============================================================================
