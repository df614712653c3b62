//! Concrete asset type implementations.
//!
//! TODO: Implement ImageAsset and FontAsset in next phase

pub mod font;
pub mod image;

pub use font::FontAsset;
pub use image::ImageAsset;
