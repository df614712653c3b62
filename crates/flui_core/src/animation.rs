//! Animation re-exports for view system.
//!
//! This module re-exports animation-related types from foundation
//! for convenience in the view system.

pub use crate::foundation::{
    ChangeNotifier, Listenable, ListenerCallback, ListenerId, MergedListenable, ValueNotifier,
};
