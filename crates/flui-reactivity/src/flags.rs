//! Node state flags.
//!
//! Every node in the reactive graph (signal, computed, effect, or scope)
//! carries one [`NodeFlags`] word. The combinations of `DIRTY`,
//! `PENDING_COMPUTED`, `QUEUED` and `STOPPED` are product-state, not
//! sum-state, so a bitset is the right representation: a single integer
//! word per node keeps the propagation engine's hot-path checks branchless.

use bitflags::bitflags;

bitflags! {
    /// State bits tracked on a reactive node's header.
    ///
    /// ```text
    /// Bit:  7 6 5 4 3 2 1 0
    ///       │ │ │ │ │ │ │ └─ MUTABLE
    ///       │ │ │ │ │ │ └─── DIRTY
    ///       │ │ │ │ │ └───── PENDING_COMPUTED
    ///       │ │ │ │ └─────── QUEUED
    ///       │ │ │ └───────── WATCHING
    ///       │ │ └─────────── RECURSED_CHECK
    ///       │ └───────────── STOPPED
    ///       └─────────────── DISPOSED
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct NodeFlags: u16 {
        /// Set on a Signal that has a committable pending value.
        const MUTABLE          = 0b0000_0001;

        /// The cached value (if any) is known-invalid; a pull must
        /// recompute before serving a read.
        const DIRTY             = 0b0000_0010;

        /// An upstream signal's pending value might change this node's
        /// value; a pull must validate before trusting the cache.
        /// Strictly weaker than `DIRTY`.
        const PENDING_COMPUTED  = 0b0000_0100;

        /// Effect is present exactly once in the flush queue.
        const QUEUED            = 0b0000_1000;

        /// Node participates in eager flushing (set on Effects).
        const WATCHING          = 0b0001_0000;

        /// Node is currently being evaluated; re-entrance indicates a
        /// cycle.
        const RECURSED_CHECK    = 0b0010_0000;

        /// Effect or scope has been disposed via `stop()`. No further
        /// work; idempotent.
        const STOPPED            = 0b0100_0000;

        /// Arena slot has been reclaimed. Distinct from `STOPPED`: a
        /// stopped effect's slot is still addressable until its handle
        /// drops, whereas `DISPOSED` means the slot itself is gone.
        const DISPOSED           = 0b1000_0000;
    }
}
