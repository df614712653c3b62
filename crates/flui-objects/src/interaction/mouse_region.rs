//! RenderMouseRegion - Detects and tracks mouse hover events
//!
//! Implements Flutter's MouseRegion for detecting when the mouse cursor enters,
//! hovers over, or exits the widget's bounds. Provides callbacks for interactive
//! hover effects without affecting layout or painting.
//!
//! # Flutter Equivalence
//!
//! | FLUI | Flutter |
//! |------|---------|
//! | `RenderMouseRegion` | `RenderMouseRegion` from `package:flutter/src/rendering/proxy_box.dart` |
//! | `MouseCallbacks` | `MouseTrackerAnnotation` callbacks |
//! | `on_enter` | `onEnter` callback (PointerEnterEvent) |
//! | `on_exit` | `onExit` callback (PointerExitEvent) |
//! | `on_hover` | `onHover` callback (PointerHoverEvent) |
//! | `is_hovering` | Hover state tracking |
//!
//! # Layout Protocol
//!
//! 1. **Pass constraints to child**
//!    - Child receives same constraints (proxy behavior)
//!
//! 2. **Return child size**
//!    - Container size = child size (no size change)
//!
//! # Paint Protocol
//!
//! 1. **Paint child normally**
//!    - Child painted at widget offset
//!    - No visual changes from hover detection
//!
//! 2. **Register hover region** (TODO)
//!    - Hit test area registered for mouse tracking
//!    - System monitors mouse position relative to bounds
//!
//! # Event Handling Protocol
//!
//! 1. **Mouse enter**
//!    - Triggered when cursor enters widget bounds
//!    - Calls `on_enter` callback if provided
//!    - Sets `is_hovering = true`
//!
//! 2. **Mouse hover**
//!    - Triggered while cursor remains in bounds
//!    - Calls `on_hover` callback if provided
//!    - Provides current mouse position
//!
//! 3. **Mouse exit**
//!    - Triggered when cursor leaves widget bounds
//!    - Calls `on_exit` callback if provided
//!    - Sets `is_hovering = false`
//!
//! # Performance
//!
//! - **Layout**: O(1) - pass-through to child
//! - **Paint**: O(1) - pass-through to child
//! - **Event handling**: O(1) - callback invocation
//! - **Memory**: ~32 bytes (callbacks + hover state)
//!
//! # Use Cases
//!
//! - **Hover effects**: Change appearance on mouse hover (buttons, cards)
//! - **Tooltips**: Show tooltips when mouse enters region
//! - **Cursor changes**: Change cursor style over interactive elements
//! - **Hover animations**: Trigger animations on mouse enter/exit
//! - **Interactive feedback**: Provide visual feedback on hover
//! - **Custom hover logic**: Execute custom code on mouse events
//!
//! # Examples
//!
//! ```rust,ignore
//! use flui_rendering::{RenderMouseRegion, MouseCallbacks};
//!
//! // Hover detection with enter/exit callbacks
//! let callbacks = MouseCallbacks {
//!     on_enter: Some(|| println!("Mouse entered")),
//!     on_exit: Some(|| println!("Mouse exited")),
//!     on_hover: None,
//! };
//! let region = RenderMouseRegion::new(callbacks);
//!
//! // Track all mouse events
//! let all_events = MouseCallbacks {
//!     on_enter: Some(|| println!("Entered")),
//!     on_exit: Some(|| println!("Exited")),
//!     on_hover: Some(|| println!("Hovering")),
//! };
//! let tracking = RenderMouseRegion::new(all_events);
//! ```

use flui_interaction::HitTestResult;
use flui_rendering::{BoxHitTestCtx, BoxLayoutCtx, BoxPaintCtx, RenderBox, Single};
use flui_rendering::{RenderObject, RenderResult};
use flui_types::Size;

/// Mouse hover event callbacks.
///
/// Simplified callback structure for mouse tracking. In a full implementation,
/// these would receive event data (position, modifiers, etc.).
#[derive(Clone)]
pub struct MouseCallbacks {
    // TODO: Replace with proper callback types that receive mouse event data
    /// Called when mouse cursor enters the widget's bounds
    pub on_enter: Option<fn()>,

    /// Called when mouse cursor exits the widget's bounds
    pub on_exit: Option<fn()>,

    /// Called continuously while mouse cursor hovers over the widget
    pub on_hover: Option<fn()>,
}

impl std::fmt::Debug for MouseCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MouseCallbacks")
            .field("on_enter", &self.on_enter.is_some())
            .field("on_exit", &self.on_exit.is_some())
            .field("on_hover", &self.on_hover.is_some())
            .finish()
    }
}

/// RenderObject that detects and tracks mouse hover events.
///
/// Monitors the mouse cursor position and fires callbacks when the cursor enters,
/// hovers over, or exits the widget's bounds. Does not affect layout or painting,
/// only provides hover event detection.
///
/// # Arity
///
/// `Single` - Must have exactly 1 child.
///
/// # Protocol
///
/// Box protocol - Uses `BoxConstraints` and returns `Size`.
///
/// # Pattern
///
/// **Proxy** - Passes constraints unchanged, only adds hover event detection.
///
/// # Use Cases
///
/// - **Button hover effects**: Highlight buttons on mouse hover
/// - **Tooltip triggers**: Show tooltips when cursor enters
/// - **Cursor styling**: Change cursor appearance over interactive areas
/// - **Hover animations**: Trigger scale/color animations on hover
/// - **Link previews**: Show link preview on hover
/// - **Context-aware UI**: Update UI based on cursor position
///
/// # Flutter Compliance
///
/// Matches Flutter's RenderMouseRegion behavior:
/// - Passes constraints unchanged to child (proxy for layout)
/// - Size determined by child
/// - Tracks mouse enter/exit/hover events
/// - Provides callbacks for each event type
/// - Maintains hover state
/// - Does not affect visual rendering
/// - Uses MouseTrackerAnnotation for hit testing
///
/// # Implementation Note
///
/// **Simplified version:**
/// - Callbacks are simple function pointers (no event data)
/// - Hover detection is TODO (requires hit test integration)
///
/// **Production TODO:**
/// - Add proper event types with position, modifiers, timestamps
/// - Integrate with mouse tracker system
/// - Add cursor style support
/// - Implement hit test annotation registration
///
/// # Example
///
/// ```rust,ignore
/// use flui_rendering::{RenderMouseRegion, MouseCallbacks};
///
/// // Simple hover detection
/// let callbacks = MouseCallbacks {
///     on_enter: Some(|| println!("Cursor entered")),
///     on_exit: Some(|| println!("Cursor exited")),
///     on_hover: None,
/// };
/// let region = RenderMouseRegion::new(callbacks);
/// ```
#[derive(Debug)]
pub struct RenderMouseRegion {
    /// Event callbacks
    pub callbacks: MouseCallbacks,
    /// Whether the mouse is currently hovering
    pub is_hovering: bool,
}

impl RenderMouseRegion {
    /// Create new RenderMouseRegion
    pub fn new(callbacks: MouseCallbacks) -> Self {
        Self {
            callbacks,
            is_hovering: false,
        }
    }

    /// Get the callbacks
    pub fn callbacks(&self) -> &MouseCallbacks {
        &self.callbacks
    }

    /// Set new callbacks
    pub fn set_callbacks(&mut self, callbacks: MouseCallbacks) {
        self.callbacks = callbacks;
        // No need to mark needs_layout or needs_paint - callbacks don't affect rendering
    }

    /// Check if mouse is currently hovering
    pub fn is_hovering(&self) -> bool {
        self.is_hovering
    }

    /// Set hover state (called by hit testing system)
    pub fn set_hovering(&mut self, hovering: bool) {
        self.is_hovering = hovering;
    }
}

impl RenderObject for RenderMouseRegion {}

impl RenderBox<Single> for RenderMouseRegion {
    fn layout(&mut self, mut ctx: BoxLayoutCtx<'_, Single>) -> RenderResult<Size> {
        // Single arity: use ctx.single_child() which returns ElementId directly
        let child_id = ctx.single_child();

        // Proxy behavior: pass constraints unchanged to child
        Ok(ctx.layout_child(child_id, ctx.constraints)?)
    }

    fn paint(&self, ctx: &mut BoxPaintCtx<'_, Single>) {
        // Single arity: use ctx.single_child() which returns ElementId directly
        let child_id = ctx.single_child();

        // Proxy behavior: paint child at widget offset
        // Hover detection doesn't affect visual rendering
        ctx.paint_child(child_id, ctx.offset);

        // TODO: In a full implementation with mouse tracking support:
        // 1. Register MouseTrackerAnnotation with hit test system
        // 2. System monitors cursor position relative to widget bounds
        // 3. Fire on_enter callback when cursor enters bounds
        // 4. Fire on_hover callback while cursor remains in bounds
        // 5. Fire on_exit callback when cursor leaves bounds
        // 6. Update is_hovering state based on cursor position
    }

    fn hit_test(&self, ctx: &BoxHitTestCtx<'_, Single>, result: &mut HitTestResult) -> bool {
        // MouseRegion participates in hit testing to detect hover events
        // Delegate to child - if child is hit, this region is also hit
        //
        // TODO: When mouse tracking is implemented, add this region to result
        // with hover event handlers attached to enable enter/exit/hover callbacks
        ctx.hit_test_children(result)
    }
}
