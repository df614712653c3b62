//! TextureLayer - External GPU texture rendering
//!
//! This layer displays an external GPU texture (video, camera, platform view)
//! at a specific location. Corresponds to Flutter's `TextureLayer`.

use flui_types::geometry::Rect;
use flui_types::painting::{FilterQuality, TextureId};

/// Layer that displays an external GPU texture.
///
/// Used for rendering content that comes from external sources:
/// - Video playback
/// - Camera preview
/// - Platform views (native UI)
/// - Custom GPU computations
///
/// # Architecture
///
/// ```text
/// External Source (Video/Camera/Native)
///   │
///   │ Provides GPU texture
///   ▼
/// TextureLayer
///   │
///   │ Composites texture at rect
///   ▼
/// Final Output
/// ```
///
/// # Example
///
/// ```rust
/// use flui_layer::TextureLayer;
/// use flui_types::geometry::Rect;
/// use flui_types::painting::{TextureId, FilterQuality};
///
/// // Create a texture layer for video playback
/// let texture_id = TextureId::new(42);
/// let rect = Rect::from_xywh(0.0, 0.0, 640.0, 480.0);
/// let layer = TextureLayer::new(texture_id, rect);
///
/// // With custom filter quality
/// let hq_layer = TextureLayer::new(texture_id, rect)
///     .with_filter_quality(FilterQuality::High);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureLayer {
    /// The texture ID referencing an external GPU texture
    texture_id: TextureId,

    /// Destination rectangle where the texture will be drawn
    rect: Rect,

    /// Whether the texture is frozen (not updating)
    freeze: bool,

    /// Filter quality for texture sampling
    filter_quality: FilterQuality,

    /// Opacity (0.0 = transparent, 1.0 = opaque)
    opacity: f32,
}

impl TextureLayer {
    /// Creates a new texture layer.
    ///
    /// # Arguments
    ///
    /// * `texture_id` - ID of the external GPU texture
    /// * `rect` - Destination rectangle for the texture
    #[inline]
    pub fn new(texture_id: TextureId, rect: Rect) -> Self {
        Self {
            texture_id,
            rect,
            freeze: false,
            filter_quality: FilterQuality::Low,
            opacity: 1.0,
        }
    }

    /// Creates a frozen texture layer (texture won't update).
    #[inline]
    pub fn frozen(texture_id: TextureId, rect: Rect) -> Self {
        Self {
            texture_id,
            rect,
            freeze: true,
            filter_quality: FilterQuality::Low,
            opacity: 1.0,
        }
    }

    /// Sets the filter quality for texture sampling.
    #[inline]
    pub fn with_filter_quality(mut self, quality: FilterQuality) -> Self {
        self.filter_quality = quality;
        self
    }

    /// Sets the opacity.
    #[inline]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Sets the freeze state.
    #[inline]
    pub fn with_freeze(mut self, freeze: bool) -> Self {
        self.freeze = freeze;
        self
    }

    /// Returns the texture ID.
    #[inline]
    pub fn texture_id(&self) -> TextureId {
        self.texture_id
    }

    /// Returns the destination rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Returns the bounds (same as rect for texture layers).
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.rect
    }

    /// Returns whether the texture is frozen.
    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.freeze
    }

    /// Returns the filter quality.
    #[inline]
    pub fn filter_quality(&self) -> FilterQuality {
        self.filter_quality
    }

    /// Returns the opacity.
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Sets the texture ID.
    #[inline]
    pub fn set_texture_id(&mut self, texture_id: TextureId) {
        self.texture_id = texture_id;
    }

    /// Sets the destination rectangle.
    #[inline]
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Sets the freeze state.
    #[inline]
    pub fn set_freeze(&mut self, freeze: bool) {
        self.freeze = freeze;
    }

    /// Sets the filter quality.
    #[inline]
    pub fn set_filter_quality(&mut self, quality: FilterQuality) {
        self.filter_quality = quality;
    }

    /// Sets the opacity.
    #[inline]
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    /// Returns true if the texture is fully transparent.
    #[inline]
    pub fn is_invisible(&self) -> bool {
        self.opacity <= 0.0
    }

    /// Returns true if the texture is fully opaque.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.opacity >= 1.0
    }
}

impl Default for TextureLayer {
    fn default() -> Self {
        Self {
            texture_id: TextureId::new(0),
            rect: Rect::ZERO,
            freeze: false,
            filter_quality: FilterQuality::Low,
            opacity: 1.0,
        }
    }
}

// Thread safety
unsafe impl Send for TextureLayer {}
unsafe impl Sync for TextureLayer {}
