//! [`batch`] and [`untrack`]: the two ways to step outside the default
//! one-write-one-propagation rhythm.
//!
//! `batch` defers commit-and-drain until its outermost call returns, so a
//! run of writes that individually would each trigger their own effect
//! flush instead coalesces into a single flush with every write visible.
//! `untrack` does the opposite kind of scoping: it doesn't touch batching
//! at all, it suppresses dependency *tracking* for reads performed inside
//! it, regardless of batch depth.

use crate::runtime::with_runtime;

/// Run `f`, deferring signal-commit and effect-drain until the outermost
/// `batch` call (nested calls just increment/decrement a depth counter)
/// returns. Reads inside `f` still observe each signal's own
/// already-written value immediately — batching defers *propagation*, not
/// visibility to the writer itself.
///
/// Panic-safe: if `f` unwinds, the depth counter is still decremented by
/// the guard's `Drop`, so a panic inside a batch can't wedge every future
/// batch into thinking it's nested.
pub fn batch<R>(f: impl FnOnce() -> R) -> R {
    let guard = BatchGuard::enter();
    let result = f();
    drop(guard);
    result
}

/// Run `f` without tracking any signal or computed reads performed inside
/// it against the currently-evaluating subscriber. Used inside a
/// `Computed` getter or effect body to read a value without making the
/// enclosing computation depend on it.
pub fn untrack<R>(f: impl FnOnce() -> R) -> R {
    with_runtime(|rt| rt.untrack(f))
}

struct BatchGuard;

impl BatchGuard {
    fn enter() -> Self {
        with_runtime(|rt| rt.enter_batch());
        Self
    }
}

impl Drop for BatchGuard {
    fn drop(&mut self) {
        let was_outermost = with_runtime(|rt| rt.exit_batch());
        if was_outermost {
            with_runtime(|rt| rt.commit_and_drain());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::effect;
    use crate::signal::Signal;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn nested_batches_flush_once_at_outermost_exit() {
        let a = Signal::new(0);
        let b = Signal::new(0);
        let runs = Rc::new(RefCell::new(0));
        let runs2 = runs.clone();
        effect(move || {
            a.get();
            b.get();
            *runs2.borrow_mut() += 1;
        })
        .unwrap();
        assert_eq!(*runs.borrow(), 1);
        batch(|| {
            a.set(1).unwrap();
            batch(|| {
                b.set(2).unwrap();
            });
            assert_eq!(*runs.borrow(), 1, "still inside the outer batch");
        });
        assert_eq!(*runs.borrow(), 2);
    }

    #[test]
    fn untrack_skips_dependency_registration() {
        let s = Signal::new(1);
        let reads = Rc::new(RefCell::new(0));
        let reads2 = reads.clone();
        effect(move || {
            untrack(|| {
                s.get();
            });
            *reads2.borrow_mut() += 1;
        })
        .unwrap();
        assert_eq!(*reads.borrow(), 1);
        s.set(2).unwrap();
        assert_eq!(*reads.borrow(), 1, "effect did not track the untracked read");
    }

    #[test]
    fn writer_observes_own_write_inside_batch() {
        let s = Signal::new(1);
        batch(|| {
            s.set(5).unwrap();
            assert_eq!(s.peek(), 5);
        });
    }
}
