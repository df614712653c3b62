//! [`Signal`]: the mutable root of the reactive graph.
//!
//! A signal is a thin, `Copy` handle over a [`NodeId`] — reading or writing
//! it goes through the thread-local runtime rather than through any state
//! the handle itself owns. Cloning a `Signal` aliases the same underlying
//! node; the node itself lives until disposed via [`SignalGuard`] or the
//! runtime is torn down.

use std::any::Any;
use std::marker::PhantomData;

use crate::error::Result;
use crate::node::NodeId;
use crate::runtime::with_runtime;

/// A mutable reactive value of type `T`.
///
/// `get` tracks a dependency on the currently-evaluating `Computed` or
/// `EffectHandle`, if any. `peek` reads without tracking. `set` replaces
/// the value and schedules propagation if it compares unequal to the
/// current value; writing an equal value is a no-op.
pub struct Signal<T> {
    id: NodeId,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Signal<T> {}

impl<T: std::fmt::Debug + 'static> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal").field("id", &self.id).finish()
    }
}

impl<T: PartialEq + 'static> Signal<T> {
    /// Create a signal with `PartialEq`-based change detection.
    pub fn new(initial: T) -> Self {
        Self::with_eq(initial, |a, b| a == b)
    }

    /// Create a labeled signal, for diagnostics and DevTools inspection.
    pub fn new_labeled(initial: T, label: &'static str) -> Self {
        Self::with_eq_labeled(initial, |a, b| a == b, Some(label))
    }
}

impl<T: 'static> Signal<T> {
    /// Create a signal with a custom equality function, for types that
    /// aren't `PartialEq` or where the default comparison is too coarse
    /// (e.g. comparing by identity instead of by structural equality).
    pub fn with_eq(initial: T, eq: impl Fn(&T, &T) -> bool + 'static) -> Self {
        Self::with_eq_labeled(initial, eq, None)
    }

    fn with_eq_labeled(
        initial: T,
        eq: impl Fn(&T, &T) -> bool + 'static,
        label: Option<&'static str>,
    ) -> Self {
        let eq = erase_eq(eq);
        let id = with_runtime(|rt| rt.create_signal(initial, eq, label));
        Self {
            id,
            _marker: PhantomData,
        }
    }

    /// Read the current value, tracking a dependency if called during a
    /// `Computed` recomputation or an effect run.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        with_runtime(|rt| rt.signal_get(self.id))
    }

    /// Read the current value without tracking a dependency.
    pub fn peek(&self) -> T
    where
        T: Clone,
    {
        with_runtime(|rt| rt.signal_peek(self.id))
    }

    /// Replace the value. Returns [`crate::error::ReactivityError::BadReentrance`]
    /// if called from inside a `Computed` getter that (transitively) reads
    /// this same signal — writing there would reintroduce the glitches the
    /// push-pull model exists to avoid.
    pub fn set(&self, value: T) -> Result<()> {
        with_runtime(|rt| rt.signal_set(self.id, value))
    }

    /// Read, transform and write back in one step. Equivalent to
    /// `self.set(f(self.peek()))`, without tracking the intermediate read.
    pub fn update(&self, f: impl FnOnce(T) -> T) -> Result<()>
    where
        T: Clone,
    {
        let current = self.peek();
        self.set(f(current))
    }

    pub(crate) fn id(&self) -> NodeId {
        self.id
    }
}

/// Owning handle that disposes its signal on drop. `Signal<T>` itself is
/// `Copy` and intentionally does not own disposal — most hosts let signals
/// live for the process lifetime, favoring cheap copyable handles over RAII
/// by default. Wrap a `Signal` in `SignalGuard` when scoped disposal is
/// wanted.
pub struct SignalGuard<T> {
    pub signal: Signal<T>,
}

impl<T: 'static> SignalGuard<T> {
    pub fn new(signal: Signal<T>) -> Self {
        Self { signal }
    }
}

impl<T> Drop for SignalGuard<T> {
    fn drop(&mut self) {
        with_runtime(|rt| rt.dispose_signal(self.signal.id));
    }
}

fn erase_eq<T: 'static>(
    eq: impl Fn(&T, &T) -> bool + 'static,
) -> Box<dyn Fn(&dyn Any, &dyn Any) -> bool> {
    Box::new(move |a, b| {
        let a = a.downcast_ref::<T>().expect("signal eq type mismatch");
        let b = b.downcast_ref::<T>().expect("signal eq type mismatch");
        eq(a, b)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_reflects_latest_set() {
        let s = Signal::new(1);
        assert_eq!(s.get(), 1);
        s.set(2).unwrap();
        assert_eq!(s.get(), 2);
    }

    #[test]
    fn equal_write_is_noop() {
        let s = Signal::new(5);
        let before = with_runtime(|rt| rt.value_version(s.id()));
        s.set(5).unwrap();
        let after = with_runtime(|rt| rt.value_version(s.id()));
        assert_eq!(before, after);
    }

    #[test]
    fn update_applies_function() {
        let s = Signal::new(10);
        s.update(|v| v + 5).unwrap();
        assert_eq!(s.get(), 15);
    }

    #[test]
    fn peek_does_not_panic_outside_tracking() {
        let s = Signal::new("hello".to_string());
        assert_eq!(s.peek(), "hello");
    }
}
