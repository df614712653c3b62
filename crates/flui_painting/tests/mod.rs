//! Integration tests for `flui_painting` crate.
//!
//! This module contains integration tests covering:
//! - Canvas composition API
//! - Transform API integration
//! - Thread safety guarantees

pub mod canvas_transform;
pub mod thread_safety;
