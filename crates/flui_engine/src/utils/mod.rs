//! Utility modules for flui_engine
//!
//! Contains helper utilities that don't fit into the main rendering pipeline.

pub mod text;

pub use text::{TextRenderParams, TextVertex, VectorTextError, VectorTextRenderer};
