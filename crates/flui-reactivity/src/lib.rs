//! flui-reactivity — the push-pull reactive core underneath the rest of
//! the FLUI stack.
//!
//! This crate provides four primitives:
//!
//! - [`Signal`]: a mutable reactive root.
//! - [`Computed`]: a lazily-evaluated, memoized derivation.
//! - [`effect`]: an eager side-effecting subscriber.
//! - [`scope`]: a teardown grouping for effects.
//!
//! # Example
//!
//! ```
//! use flui_reactivity::{effect, Computed, Signal};
//!
//! let count = Signal::new(0);
//! let doubled = Computed::new(move || count.get() * 2);
//!
//! effect(move || {
//!     println!("doubled is now {}", doubled.get().unwrap());
//! })
//! .unwrap();
//!
//! count.set(21).unwrap();
//! ```
//!
//! # Update propagation
//!
//! Writing a signal never recomputes a dependent `Computed` eagerly — it
//! only marks reachable computeds as possibly stale and queues reachable
//! effects for a flush. A `Computed` only actually re-runs its getter the
//! next time it's read, and even then only if something it previously
//! read has genuinely changed value (not merely been marked stale), so a
//! diamond-shaped dependency graph recomputes each node at most once per
//! write. [`batch`] groups several writes into one flush; [`untrack`]
//! reads without registering a dependency.
//!
//! # Threading
//!
//! Every signal, computed, effect and scope lives in a thread-local
//! runtime. Handles created on one thread cannot be read or written from
//! another.

pub mod batch;
pub mod computed;
pub mod debug;
pub mod effect;
pub mod error;
pub mod flags;
pub(crate) mod link;
pub mod node;
pub mod runtime;
pub mod scope;
pub mod signal;

pub use batch::{batch, untrack};
pub use computed::{Computed, ComputedGuard};
pub use debug::{DebugSink, NodeKindDebug};
pub use effect::{effect, effect_labeled, EffectHandle};
pub use error::{ReactivityError, Result, ResultExt};
pub use flags::NodeFlags;
pub use node::NodeId;
pub use runtime::{configure, set_debug_sink, RuntimeConfig};
pub use scope::{scope, scope_labeled, ScopeHandle};
pub use signal::{Signal, SignalGuard};

/// Commonly used types for reactive programming.
///
/// ```
/// use flui_reactivity::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{batch, effect, scope, untrack, Computed, EffectHandle, ReactivityError, ScopeHandle, Signal};
}
