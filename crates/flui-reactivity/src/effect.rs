//! [`effect`]: an eager, self-resubscribing side-effecting subscriber
//!.
//!
//! Unlike a `Computed`, an effect has no return value anyone else depends
//! on — it runs for its side effects (logging, syncing to a host widget,
//! scheduling a frame) and re-runs whenever a signal or computed it read
//! last time changes. It is queued rather than run inline from `mark`, so
//! a burst of writes inside a `batch` only triggers one run per affected
//! effect, after the batch's signals have all committed.

use crate::error::Result;
use crate::node::NodeId;
use crate::runtime::with_runtime;

/// A handle to a running effect. Dropping the handle does **not** stop the
/// effect — call [`EffectHandle::stop`] explicitly, or let its enclosing
/// [`crate::scope::ScopeHandle`] stop it. Explicit lifetime management is
/// preferred over drop-driven teardown in the reactive layer, where an
/// implicit stop-on-drop would silently sever side effects a host still
/// expects to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectHandle {
    id: NodeId,
}

impl EffectHandle {
    pub(crate) fn id(&self) -> NodeId {
        self.id
    }

    /// Stop the effect: it is unsubscribed from every dependency and will
    /// not run again. Idempotent.
    pub fn stop(&self) {
        with_runtime(|rt| rt.stop_effect(self.id));
    }

    /// Whether the effect has been stopped, either directly or via its
    /// scope.
    pub fn is_stopped(&self) -> bool {
        with_runtime(|rt| rt.flags(self.id).contains(crate::flags::NodeFlags::STOPPED))
    }
}

/// Run `body` once immediately, tracking every signal/computed it reads,
/// then re-run it whenever any of those dependencies change. Registers
/// with the innermost open [`crate::scope::scope`], if any, so the scope
/// can stop it along with its siblings.
///
/// The handle is returned even if `body` panics on this first run: the
/// node already exists (linked into its scope and dependencies) by the
/// time the body runs, so there's no well-formed "failed to create"
/// state to report through `Err` — a panicking first run is logged and
/// treated the same as a panic on any later (queued) run, and the caller
/// gets back a handle it can still `stop()`/dispose.
pub fn effect(body: impl FnMut() + 'static) -> Result<EffectHandle> {
    effect_labeled(body, None)
}

pub fn effect_labeled(
    body: impl FnMut() + 'static,
    label: Option<&'static str>,
) -> Result<EffectHandle> {
    let id = with_runtime(|rt| rt.create_effect(Box::new(body), label))?;
    Ok(EffectHandle { id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::batch;
    use crate::signal::Signal;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn runs_immediately_then_on_change() {
        let s = Signal::new(1);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen2 = seen.clone();
        effect(move || seen2.borrow_mut().push(s.get())).unwrap();
        assert_eq!(*seen.borrow(), vec![1]);
        s.set(2).unwrap();
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn stop_prevents_future_runs() {
        let s = Signal::new(1);
        let runs = Rc::new(RefCell::new(0));
        let runs2 = runs.clone();
        let handle = effect(move || {
            s.get();
            *runs2.borrow_mut() += 1;
        })
        .unwrap();
        assert_eq!(*runs.borrow(), 1);
        handle.stop();
        s.set(2).unwrap();
        assert_eq!(*runs.borrow(), 1);
        assert!(handle.is_stopped());
    }

    #[test]
    fn batch_coalesces_multiple_writes_into_one_run() {
        let a = Signal::new(1);
        let b = Signal::new(2);
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
            a.set(10).unwrap();
            b.set(20).unwrap();
        });
        assert_eq!(*runs.borrow(), 2);
    }

    #[test]
    fn panicking_first_run_still_yields_a_stoppable_handle() {
        let s = Signal::new(1);
        let handle = effect(move || {
            s.get();
            panic!("boom");
        })
        .unwrap();
        assert!(!handle.is_stopped());
        // The node survived the panic; later writes to its (successfully
        // tracked) dependency re-queue it instead of erroring.
        handle.stop();
        assert!(handle.is_stopped());
    }

    #[test]
    fn dynamic_dependencies_drop_stale_subscription() {
        let cond = Signal::new(true);
        let a = Signal::new(1);
        let b = Signal::new(2);
        let runs = Rc::new(RefCell::new(0));
        let runs2 = runs.clone();
        effect(move || {
            *runs2.borrow_mut() += 1;
            if cond.get() {
                a.get();
            } else {
                b.get();
            }
        })
        .unwrap();
        assert_eq!(*runs.borrow(), 1);
        cond.set(false).unwrap();
        assert_eq!(*runs.borrow(), 2);
        // `a` is no longer a dependency; writing it must not re-run.
        a.set(100).unwrap();
        assert_eq!(*runs.borrow(), 2);
        b.set(200).unwrap();
        assert_eq!(*runs.borrow(), 3);
    }
}
