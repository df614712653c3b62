//! Rebuild queue for deferred component rebuild scheduling.
//!
//! Provides a thread-safe queue for scheduling component rebuilds from signal changes.
//! This allows signals to trigger rebuilds without direct access to BuildPipeline.

use flui_foundation::ElementId;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

/// Thread-safe queue for deferred rebuild requests.
///
/// When signals change, they push rebuild requests to this queue.
/// The PipelineOwner drains the queue at the start of each frame.
///
/// # Thread-Safety
///
/// Uses `Arc<Mutex<HashSet>>` for thread-safe access from multiple threads.
/// Multiple signals can schedule rebuilds concurrently.
///
/// # Example
///
/// ```rust,ignore
/// // Create queue
/// let queue = RebuildQueue::new();
///
/// // Schedule rebuild from signal
/// queue.push(element_id, depth);
///
/// // Later, in pipeline
/// for (element_id, depth) in queue.drain() {
///     pipeline.schedule(element_id, depth);
/// }
/// ```
#[derive(Clone)]
pub struct RebuildQueue {
    /// Pending rebuilds: (ElementId, depth)
    /// Uses HashSet to deduplicate multiple requests for same element
    inner: Arc<Mutex<HashSet<(ElementId, usize)>>>,
}

impl RebuildQueue {
    /// Create a new rebuild queue
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Schedule an element for rebuild
    ///
    /// If the element is already scheduled, this is a no-op (deduplication).
    ///
    /// # Parameters
    ///
    /// - `element_id`: The element to rebuild
    /// - `depth`: The depth of the element in the tree (for ordering)
    pub fn push(&self, element_id: ElementId, depth: usize) {
        let mut pending = self.inner.lock();
        let is_new = pending.insert((element_id, depth));

        #[cfg(debug_assertions)]
        if is_new {
            tracing::trace!(
                "[REBUILD_QUEUE] Scheduled rebuild: element={:?}, depth={}",
                element_id,
                depth
            );
        } else {
            tracing::trace!(
                "[REBUILD_QUEUE] Already scheduled: element={:?}, depth={} (deduplicated)",
                element_id,
                depth
            );
        }
    }

    /// Drain all pending rebuilds
    ///
    /// Returns all pending rebuilds and clears the queue.
    /// The returned vector is sorted by depth (parents before children).
    ///
    /// # Returns
    ///
    /// Vec of (ElementId, depth) tuples, sorted by depth ascending
    pub fn drain(&self) -> Vec<(ElementId, usize)> {
        let pending = std::mem::take(&mut *self.inner.lock());

        if !pending.is_empty() {
            #[cfg(debug_assertions)]
            tracing::debug!(
                "[REBUILD_QUEUE] Draining {} pending rebuilds",
                pending.len()
            );

            // Convert to Vec and sort by depth (parents before children)
            let mut rebuilds: Vec<_> = pending.into_iter().collect();
            rebuilds.sort_by_key(|(_, depth)| *depth);
            rebuilds
        } else {
            Vec::new()
        }
    }

    /// Check if any rebuilds are pending
    pub fn has_pending(&self) -> bool {
        !self.inner.lock().is_empty()
    }

    /// Get the number of pending rebuilds
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl Default for RebuildQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RebuildQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RebuildQueue")
            .field("pending_count", &self.len())
            .finish()
    }
}
