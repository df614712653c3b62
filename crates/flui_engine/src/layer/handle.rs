//! Layer handle for resource management
//!
//! Layers retain resources between frames. A LayerHandle maintains a reference
//! to a layer and automatically handles cleanup when the handle is dropped.

use std::sync::Arc;
use parking_lot::RwLock;

/// A handle to a layer that manages its lifecycle
///
/// # Resource Management
///
/// Layers retain GPU resources (textures, buffers, etc.) between frames for
/// performance. When a handle is dropped, the layer's resources are released.
///
/// # Example
///
/// ```rust,ignore
/// struct ClippingRenderObject {
///     clip_layer: LayerHandle<ClipRectLayer>,
/// }
///
/// impl ClippingRenderObject {
///     fn paint(&mut self, context: &mut PaintingContext, offset: Offset) {
///         // Reuse existing layer or create new one
///         self.clip_layer.layer = Some(context.push_clip_rect(
///             self.needs_compositing,
///             offset,
///             Offset::ZERO,
///             self.size,
///             |painter| self.paint_children(painter),
///             old_layer: self.clip_layer.layer.take(),
///         ));
///     }
///
///     fn dispose(&mut self) {
///         // Automatically releases resources
///         self.clip_layer.layer = None;
///     }
/// }
/// ```
pub struct LayerHandle<L> {
    /// The layer being managed (None if disposed)
    layer: Option<Arc<RwLock<L>>>,
}

impl<L> LayerHandle<L> {
    /// Create a new empty layer handle
    pub fn new() -> Self {
        Self { layer: None }
    }

    /// Get a reference to the layer, if it exists
    pub fn get(&self) -> Option<Arc<RwLock<L>>> {
        self.layer.clone()
    }

    /// Set the layer
    pub fn set(&mut self, layer: Option<L>) {
        self.layer = layer.map(|l| Arc::new(RwLock::new(l)));
    }

    /// Set the layer from an Arc
    pub fn set_arc(&mut self, layer: Option<Arc<RwLock<L>>>) {
        self.layer = layer;
    }

    /// Take the layer, leaving None in its place
    pub fn take(&mut self) -> Option<Arc<RwLock<L>>> {
        self.layer.take()
    }

    /// Check if this handle has a layer
    pub fn is_some(&self) -> bool {
        self.layer.is_some()
    }

    /// Check if this handle is empty
    pub fn is_none(&self) -> bool {
        self.layer.is_none()
    }

    /// Clear the handle, releasing the layer
    pub fn clear(&mut self) {
        self.layer = None;
    }
}

impl<L> Default for LayerHandle<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Clone for LayerHandle<L> {
    fn clone(&self) -> Self {
        Self {
            layer: self.layer.clone(),
        }
    }
}

impl<L> Drop for LayerHandle<L> {
    fn drop(&mut self) {
        // Layer resources are automatically released when Arc ref count reaches 0
        self.layer = None;
    }
}
