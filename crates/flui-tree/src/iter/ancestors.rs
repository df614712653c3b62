//! Ancestor iterators.

use crate::traits::TreeNav;

/// Iterator over ancestors of a node.
///
/// Yields elements from the starting node up to and including the root.
/// The first element yielded is always the starting node itself.
///
/// # Example
///
/// ```rust,ignore
/// // For tree: root -> parent -> child
/// let ancestors: Vec<_> = tree.ancestors(child).collect();
/// assert_eq!(ancestors, vec![child, parent, root]);
/// ```
#[derive(Debug, Clone)]
pub struct Ancestors<'a, T: TreeNav> {
    tree: &'a T,
    current: Option<T::Id>,
}

impl<'a, T: TreeNav> Ancestors<'a, T> {
    /// Creates a new ancestors iterator starting from the given node.
    #[inline]
    pub fn new(tree: &'a T, start: T::Id) -> Self {
        Self {
            tree,
            current: Some(start),
        }
    }

    /// Returns the tree reference.
    #[inline]
    pub fn tree(&self) -> &'a T {
        self.tree
    }
}

impl<T: TreeNav> Iterator for Ancestors<'_, T> {
    type Item = T::Id;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;

        // Check if current exists in tree
        if !self.tree.contains(current) {
            self.current = None;
            return None;
        }

        // Move to parent for next iteration
        self.current = self.tree.parent(current);

        Some(current)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // We know there's at least 1 element if current is Some
        // Upper bound is MAX_DEPTH from the trait (typical tree depth)
        if self.current.is_some() {
            (1, Some(T::MAX_DEPTH))
        } else {
            (0, Some(0))
        }
    }
}

impl<T: TreeNav> std::iter::FusedIterator for Ancestors<'_, T> {}

/// Iterator over ancestors with their depths.
///
/// Yields `(Id, usize)` tuples where the depth is relative
/// to the starting node (starting node has depth 0).
///
/// # Example
///
/// ```rust,ignore
/// // For tree: root (depth 2) -> parent (depth 1) -> child (depth 0)
/// let ancestors: Vec<_> = tree.ancestors_with_depth(child).collect();
/// assert_eq!(ancestors, vec![
///     (child, 0),
///     (parent, 1),
///     (root, 2),
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct AncestorsWithDepth<'a, T: TreeNav> {
    inner: Ancestors<'a, T>,
    depth: usize,
}

impl<'a, T: TreeNav> AncestorsWithDepth<'a, T> {
    /// Creates a new ancestors-with-depth iterator.
    #[inline]
    pub fn new(tree: &'a T, start: T::Id) -> Self {
        Self {
            inner: Ancestors::new(tree, start),
            depth: 0,
        }
    }
}

impl<T: TreeNav> Iterator for AncestorsWithDepth<'_, T> {
    type Item = (T::Id, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let id = self.inner.next()?;
        let current_depth = self.depth;
        self.depth += 1;
        Some((id, current_depth))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: TreeNav> std::iter::FusedIterator for AncestorsWithDepth<'_, T> {}

// ============================================================================
// TESTS
// ============================================================================
