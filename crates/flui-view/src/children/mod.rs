//! Ergonomic child types for view composition.
//!
//! Provides `Child` and `Children` types for cleaner widget APIs.

mod child;
mod children;

pub use child::Child;
pub use children::Children;
