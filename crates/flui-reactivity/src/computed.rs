//! [`Computed`]: a lazily-evaluated, memoized derivation.
//!
//! A computed's getter is only re-run when `get`/`peek` is called on a
//! `Dirty` or `PendingComputed` node — writing to an upstream signal never
//! recomputes eagerly, it only marks reachable computeds as possibly stale.
//! `validate` (in [`crate::runtime`]) is what turns "possibly stale" into an
//! actual recompute, short-circuiting whenever every dependency's value
//! turns out to be unchanged (the diamond-dependency glitch-free
//! guarantee).

use std::any::Any;
use std::marker::PhantomData;

use crate::error::Result;
use crate::node::NodeId;
use crate::runtime::with_runtime;

/// A derived reactive value of type `T`, recomputed from a user-supplied
/// getter closure whenever a dependency it read last time has actually
/// changed.
pub struct Computed<T> {
    id: NodeId,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Computed<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Computed<T> {}

impl<T: std::fmt::Debug + 'static> std::fmt::Debug for Computed<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Computed").field("id", &self.id).finish()
    }
}

impl<T: PartialEq + 'static> Computed<T> {
    /// Create a computed with `PartialEq`-based change detection between
    /// successive recomputed values.
    pub fn new(getter: impl FnMut() -> T + 'static) -> Self {
        Self::with_eq(getter, |a, b| a == b)
    }

    pub fn new_labeled(mut getter: impl FnMut() -> T + 'static, label: &'static str) -> Self {
        Self::with_eq_labeled(move |_prev| getter(), |a, b| a == b, Some(label))
    }

    /// Create a computed whose getter receives the previous cached value,
    /// per the spec's `getter: (prev: Option<T>) -> T` contract — useful
    /// for accumulator-style derivations that fold onto their own last
    /// result rather than recomputing from scratch every time.
    pub fn with_prev(getter: impl FnMut(Option<&T>) -> T + 'static) -> Self {
        Self::with_eq_and_prev(getter, |a, b| a == b)
    }
}

impl<T: 'static> Computed<T> {
    /// Create a computed with a custom equality function between
    /// successive values, used to decide whether recomputation produced a
    /// real change worth propagating further.
    pub fn with_eq(
        mut getter: impl FnMut() -> T + 'static,
        eq: impl Fn(&T, &T) -> bool + 'static,
    ) -> Self {
        Self::with_eq_labeled(move |_prev| getter(), eq, None)
    }

    /// Like [`Self::with_eq`], but the getter also sees the previous cached
    /// value (`None` on the first evaluation).
    pub fn with_eq_and_prev(
        getter: impl FnMut(Option<&T>) -> T + 'static,
        eq: impl Fn(&T, &T) -> bool + 'static,
    ) -> Self {
        Self::with_eq_labeled(getter, eq, None)
    }

    fn with_eq_labeled(
        mut getter: impl FnMut(Option<&T>) -> T + 'static,
        eq: impl Fn(&T, &T) -> bool + 'static,
        label: Option<&'static str>,
    ) -> Self {
        let getter: Box<dyn FnMut(Option<&dyn Any>) -> Box<dyn Any>> = Box::new(move |prev| {
            let prev = prev.map(|p| p.downcast_ref::<T>().expect("computed prev type mismatch"));
            Box::new(getter(prev))
        });
        let eq = erase_eq(eq);
        let id = with_runtime(|rt| rt.create_computed::<T>(getter, eq, label));
        Self {
            id,
            _marker: PhantomData,
        }
    }

    /// Validate (recomputing if necessary) and read the current value,
    /// tracking a dependency if called during another `Computed`'s
    /// recomputation or an effect run.
    ///
    /// Returns [`crate::error::ReactivityError::Cycle`] if this computed's
    /// getter transitively reads itself, or
    /// [`crate::error::ReactivityError::GetterThrew`] if the getter
    /// panicked (the computed is left `Dirty`, so the next call retries).
    pub fn get(&self) -> Result<T>
    where
        T: Clone,
    {
        with_runtime(|rt| rt.computed_get(self.id))
    }

    /// Like [`Self::get`], but without tracking a dependency.
    pub fn peek(&self) -> Result<T>
    where
        T: Clone,
    {
        with_runtime(|rt| rt.computed_peek(self.id))
    }

    pub(crate) fn id(&self) -> NodeId {
        self.id
    }
}

/// Owning handle that disposes its computed on drop, unlinking it from
/// both its dependencies and its subscribers. See
/// [`crate::signal::SignalGuard`] for why `Computed` itself stays `Copy`
/// and does not dispose implicitly.
pub struct ComputedGuard<T> {
    pub computed: Computed<T>,
}

impl<T: 'static> ComputedGuard<T> {
    pub fn new(computed: Computed<T>) -> Self {
        Self { computed }
    }
}

impl<T> Drop for ComputedGuard<T> {
    fn drop(&mut self) {
        with_runtime(|rt| rt.dispose_computed(self.computed.id));
    }
}

fn erase_eq<T: 'static>(
    eq: impl Fn(&T, &T) -> bool + 'static,
) -> Box<dyn Fn(&dyn Any, &dyn Any) -> bool> {
    Box::new(move |a, b| {
        let a = a.downcast_ref::<T>().expect("computed eq type mismatch");
        let b = b.downcast_ref::<T>().expect("computed eq type mismatch");
        eq(a, b)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::untrack;
    use crate::signal::Signal;

    #[test]
    fn recomputes_on_dependency_change() {
        let s = Signal::new(1);
        let c = Computed::new(move || s.get() * 2);
        assert_eq!(c.get().unwrap(), 2);
        s.set(5).unwrap();
        assert_eq!(c.get().unwrap(), 10);
    }

    #[test]
    fn computed_of_computed_short_circuits_on_unchanged_parity() {
        let s = Signal::new(0);
        let parity = Computed::new(move || s.get() % 2 == 0);
        let downstream_runs = std::rc::Rc::new(std::cell::Cell::new(0));
        let downstream_runs2 = downstream_runs.clone();
        let label = Computed::new(move || {
            downstream_runs2.set(downstream_runs2.get() + 1);
            if parity.get().unwrap() {
                "even"
            } else {
                "odd"
            }
        });
        assert_eq!(label.get().unwrap(), "even");
        assert_eq!(downstream_runs.get(), 1);
        s.set(2).unwrap();
        assert_eq!(label.get().unwrap(), "even");
        assert_eq!(
            downstream_runs.get(),
            1,
            "parity unchanged, label should not recompute"
        );
        s.set(3).unwrap();
        assert_eq!(label.get().unwrap(), "odd");
        assert_eq!(downstream_runs.get(), 2);
    }

    #[test]
    fn self_referential_getter_is_a_cycle() {
        use std::cell::RefCell;
        let slot: std::rc::Rc<RefCell<Option<Computed<i32>>>> =
            std::rc::Rc::new(RefCell::new(None));
        let slot2 = slot.clone();
        let c = Computed::new(move || {
            if let Some(inner) = slot2.borrow().as_ref() {
                inner.peek().unwrap_or(0) + 1
            } else {
                0
            }
        });
        *slot.borrow_mut() = Some(c);
        assert!(c.get().is_err());
    }

    #[test]
    fn peek_does_not_register_dependency() {
        let s = Signal::new(1);
        let c = Computed::new(move || s.peek());
        assert_eq!(c.get().unwrap(), 1);
        s.set(2).unwrap();
        assert_eq!(c.get().unwrap(), 1);
    }

    #[test]
    fn untrack_inside_getter_skips_tracking() {
        let s = Signal::new(1);
        let c = Computed::new(move || untrack(|| s.get()));
        assert_eq!(c.get().unwrap(), 1);
        s.set(9).unwrap();
        assert_eq!(c.get().unwrap(), 1);
    }

    #[test]
    fn with_prev_sees_none_then_last_cached_value() {
        let s = Signal::new(1i32);
        let seen_prev = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let seen_prev2 = seen_prev.clone();
        let running_total = Computed::with_prev(move |prev| {
            seen_prev2.borrow_mut().push(prev.copied());
            prev.copied().unwrap_or(0) + s.get()
        });
        assert_eq!(running_total.get().unwrap(), 1);
        s.set(2).unwrap();
        assert_eq!(running_total.get().unwrap(), 3);
        s.set(3).unwrap();
        assert_eq!(running_total.get().unwrap(), 6);
        assert_eq!(*seen_prev.borrow(), vec![None, Some(1), Some(3)]);
    }
}
