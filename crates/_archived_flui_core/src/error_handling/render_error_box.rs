//! RenderErrorBox - Renders error display with red background
//!
//! This render object displays error information visually.
//!
//! # TODO
//!
//! This module is a placeholder for future visual error display.
//! Once the rendering system is fully integrated, this will render:
//! - Red background
//! - Error icon (⚠️ or ❌)
//! - Error message in white text
//! - Stack trace (if debug mode)

/// RenderErrorBox - Displays error with visual styling
///
/// # TODO
///
/// This is currently a placeholder. Visual rendering will be implemented
/// once the render integration is complete.
#[derive(Debug)]
#[allow(dead_code)]
pub struct RenderErrorBox {
    /// Error message to display
    _message: String,

    /// Optional details/stack trace
    _details: Option<String>,

    /// Whether to show detailed information
    _show_details: bool,
}

impl RenderErrorBox {
    /// Create a new error box render object
    ///
    /// # TODO
    ///
    /// This is a placeholder - actual rendering not yet implemented.
    #[allow(dead_code)]
    pub fn new(message: String, details: Option<String>, show_details: bool) -> Self {
        Self {
            _message: message,
            _details: details,
            _show_details: show_details,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_box_creation() {
        let error_box = RenderErrorBox::new(
            "Test error".to_string(),
            Some("Stack trace".to_string()),
            true,
        );
        // Just verify it compiles and creates successfully
        assert!(std::any::type_name_of_val(&error_box).contains("RenderErrorBox"));
    }
}
