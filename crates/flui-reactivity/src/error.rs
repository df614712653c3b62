//! Error taxonomy for the reactive runtime.

use thiserror::Error;

/// Result type alias for fallible reactivity operations.
pub type Result<T> = std::result::Result<T, ReactivityError>;

/// Errors a public operation on the reactive graph can fail with.
#[derive(Error, Debug, Clone)]
pub enum ReactivityError {
    /// A Computed's getter transitively read itself.
    #[error("cycle detected while validating a computed value")]
    Cycle,

    /// User code wrote a signal that is currently being read as a
    /// dependency of the computed being evaluated, and the write would
    /// have changed the value. Writes of equal values are allowed and do
    /// not trigger this.
    #[error("signal written while it is being evaluated as a dependency")]
    BadReentrance,

    /// A Computed getter panicked. Carries the panic message; the
    /// computed is left `DIRTY` so the next `get`/`peek` retries.
    #[error("computed getter panicked: {0}")]
    GetterThrew(String),

    /// An effect body panicked. Delivered to the runtime's error sink
    /// rather than returned to a caller — nothing is `await`ing an
    /// effect's body, so there is no call site to propagate to. The drain
    /// continues with the next queued effect.
    #[error("effect body panicked: {0}")]
    EffectThrew(String),

    /// Operation attempted on an effect or scope that has already been
    /// stopped. `stop()` itself is idempotent and never returns this;
    /// it is reserved for operations that require liveness (e.g.
    /// registering a new effect on a stopped scope).
    #[error("operation attempted on a stopped node")]
    StoppedNode,
}

/// Attach context to a `Result` without writing out `map_err` by hand.
pub trait ResultExt<T> {
    fn expect_reactivity(self, msg: &str) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn expect_reactivity(self, msg: &str) -> T {
        self.unwrap_or_else(|e| panic!("{}: {}", msg, e))
    }
}
