//! Examples for flui_core
//!
//! Run examples with:
//! ```bash
//! cargo run -p flui_core --example simplified_view
//! ```

pub mod hit_test_demo;
pub mod simplified_view;
pub mod theme_provider_demo;
pub mod thread_safe_hooks;




