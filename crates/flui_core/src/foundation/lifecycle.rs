//! Element lifecycle states
//!
//! Tracks the lifecycle of an element through mounting, updating, and unmounting.

use std::fmt;

/// Element lifecycle state
///
///
/// # States
///
/// - `Initial`: Element created but not mounted
/// - `Active`: Element mounted in tree
/// - `Inactive`: Element temporarily removed (e.g., in KeepAlive)
/// - `Defunct`: Element unmounted and disposed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Default)]
pub enum Lifecycle {
    /// Element created but not yet mounted
    #[default]
    Initial,

    /// Element mounted and active in tree
    Active,

    /// Element temporarily removed but kept alive
    Inactive,

    /// Element unmounted and disposed
    Defunct,
}

impl Lifecycle {
    /// Check if element is mounted (active or inactive)
    #[inline]
    pub fn is_mounted(self) -> bool {
        matches!(self, Lifecycle::Active | Lifecycle::Inactive)
    }

    /// Check if element is active
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, Lifecycle::Active)
    }

    /// Check if element is defunct
    #[inline]
    pub fn is_defunct(self) -> bool {
        matches!(self, Lifecycle::Defunct)
    }

    /// Check if element is in initial state
    #[inline]
    pub fn is_initial(self) -> bool {
        matches!(self, Lifecycle::Initial)
    }
}


impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lifecycle::Initial => write!(f, "Initial"),
            Lifecycle::Active => write!(f, "Active"),
            Lifecycle::Inactive => write!(f, "Inactive"),
            Lifecycle::Defunct => write!(f, "Defunct"),
        }
    }
}
