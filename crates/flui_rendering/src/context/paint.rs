//! Paint context module.
//!
//! Paint is not protocol-specific - all render objects use the same Canvas API.
//! See `flui_painting::Canvas` for the painting implementation.
//!
//! TODO: Implement PaintContext that wraps Canvas directly without protocol dependency.
