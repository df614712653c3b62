//! BackdropFilterLayer - Applies image filter to backdrop content
//!
//! This layer type enables effects like frosted glass by capturing the content
//! behind a widget and applying blur or color filters before compositing the
//! child content on top.

use crate::renderer::CommandRenderer;
use flui_types::{
    geometry::Rect,
    painting::{BlendMode, ImageFilter},
};

/// Layer that applies an image filter to backdrop content
///
/// # Architecture
///
/// ```text
/// Backdrop Content → Capture Texture → Apply Filter → Render Child → Composite
/// ```
///
/// # Rendering Process
///
/// 1. Capture current framebuffer content in specified bounds
/// 2. Apply image filter (blur, color adjustments, etc.) via GPU
/// 3. Render filtered backdrop to framebuffer
/// 4. Render child content on top (if present)
/// 5. Composite with blend mode
///
/// # Example
///
/// ```rust,ignore
/// use flui_engine::layer::BackdropFilterLayer;
/// use flui_types::painting::{BlendMode, ImageFilter};
/// use flui_types::geometry::Rect;
///
/// // Create frosted glass effect
/// let frosted_glass = BackdropFilterLayer::new(
///     ImageFilter::blur(10.0),  // 10px gaussian blur
///     BlendMode::SrcOver,
///     Rect::from_xywh(0.0, 0.0, 400.0, 300.0),
/// );
/// ```
#[derive(Debug)]
pub struct BackdropFilterLayer {
    /// Image filter to apply to backdrop
    pub filter: ImageFilter,

    /// Blend mode for compositing
    pub blend_mode: BlendMode,

    /// Bounds for backdrop capture (pre-computed for performance)
    pub bounds: Rect,
}

impl BackdropFilterLayer {
    /// Create new backdrop filter layer
    ///
    /// # Arguments
    ///
    /// * `filter` - Image filter (blur, color adjustments, etc.)
    /// * `blend_mode` - Blend mode for compositing
    /// * `bounds` - Bounding rectangle for backdrop capture
    pub fn new(filter: ImageFilter, blend_mode: BlendMode, bounds: Rect) -> Self {
        Self {
            filter,
            blend_mode,
            bounds,
        }
    }

    /// Get the bounding rectangle of this layer
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Render this layer using the provided renderer
    ///
    /// This is a placeholder implementation. Full GPU rendering will be
    /// implemented in Phase 2.3 (Backdrop Capture and Filtering).
    ///
    /// # TODO
    ///
    /// - Capture framebuffer in bounds
    /// - Apply image filter via GPU compute shader
    /// - Render filtered result to framebuffer
    /// - Render child content on top (if present)
    pub fn render(&self, _renderer: &mut dyn CommandRenderer) {
        // TODO: Implement actual GPU rendering in Phase 2.3
        // For now, this is a placeholder to establish the API
        tracing::warn!(
            "BackdropFilterLayer::render() called but not yet implemented (Phase 2.3 pending)"
        );
    }
}

// Thread safety: BackdropFilterLayer contains only owned, Send types
unsafe impl Send for BackdropFilterLayer {}
unsafe impl Sync for BackdropFilterLayer {}
