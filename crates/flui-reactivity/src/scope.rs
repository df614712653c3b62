//! [`scope`]: groups effects by lifetime so a host can tear an entire
//! subtree of them down together.
//!
//! A scope doesn't itself participate in dependency tracking — it's a
//! teardown list. Any effect created while a scope is the innermost open
//! one registers with it; stopping the scope stops every registered
//! effect, most-recently-created first, mirroring the reverse-order
//! teardown a widget tree's drop order would give you for free in a
//! tracing-GC host.

use crate::node::NodeId;
use crate::runtime::with_runtime;

/// A handle to a scope. Like [`crate::effect::EffectHandle`], dropping it
/// does not stop the scope — call [`ScopeHandle::stop`] explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeHandle {
    id: NodeId,
}

impl ScopeHandle {
    pub(crate) fn id(&self) -> NodeId {
        self.id
    }

    /// Stop every effect registered with this scope, in reverse
    /// registration order. Idempotent.
    pub fn stop(&self) {
        with_runtime(|rt| rt.stop_scope(self.id));
    }

    pub fn is_stopped(&self) -> bool {
        with_runtime(|rt| rt.flags(self.id).contains(crate::flags::NodeFlags::STOPPED))
    }
}

/// Open a scope, run `body` inside it, and return a handle to stop it
/// later. Effects created anywhere in `body` — directly or through
/// functions it calls — register with this scope; nested `scope` calls
/// register their own scope with the outer one instead of with the outer
/// scope's effect list directly, so stopping the outer scope cascades.
pub fn scope(body: impl FnOnce()) -> ScopeHandle {
    scope_labeled(body, None)
}

pub fn scope_labeled(body: impl FnOnce(), label: Option<&'static str>) -> ScopeHandle {
    let id = with_runtime(|rt| rt.create_scope(label));
    with_runtime(|rt| rt.scope_stack_push(id));
    let guard = ScopeStackGuard;
    body();
    drop(guard);
    ScopeHandle { id }
}

/// Pops the scope stack on drop, so a panic inside `body` still leaves the
/// stack balanced for whatever runs next on this thread (mirrors
/// [`crate::batch::BatchGuard`]'s panic-safety for the batch depth counter).
struct ScopeStackGuard;

impl Drop for ScopeStackGuard {
    fn drop(&mut self) {
        with_runtime(|rt| rt.scope_stack_pop());
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
    fn stop_tears_down_every_effect_in_scope() {
        let s = Signal::new(1);
        let runs = Rc::new(RefCell::new(0));
        let handle = scope(|| {
            let runs_a = runs.clone();
            effect(move || {
                s.get();
                *runs_a.borrow_mut() += 1;
            })
            .unwrap();
            let runs_b = runs.clone();
            effect(move || {
                s.get();
                *runs_b.borrow_mut() += 1;
            })
            .unwrap();
        });
        assert_eq!(*runs.borrow(), 2);
        handle.stop();
        s.set(2).unwrap();
        assert_eq!(*runs.borrow(), 2, "both effects should be stopped");
        assert!(handle.is_stopped());
    }

    #[test]
    fn stop_cascades_into_nested_scopes() {
        let s = Signal::new(1);
        let runs = Rc::new(RefCell::new(0));
        let mut inner_handle = None;
        let outer = scope(|| {
            let runs_outer = runs.clone();
            effect(move || {
                s.get();
                *runs_outer.borrow_mut() += 1;
            })
            .unwrap();

            let runs_inner = runs.clone();
            inner_handle = Some(scope(|| {
                effect(move || {
                    s.get();
                    *runs_inner.borrow_mut() += 1;
                })
                .unwrap();
            }));
        });
        assert_eq!(*runs.borrow(), 2);

        outer.stop();
        s.set(2).unwrap();
        assert_eq!(
            *runs.borrow(),
            2,
            "stopping the outer scope should also stop effects in the nested scope"
        );
        assert!(outer.is_stopped());
        assert!(inner_handle.unwrap().is_stopped());
    }

    #[test]
    fn effects_outside_any_scope_are_unaffected_by_stop() {
        let s = Signal::new(1);
        let runs = Rc::new(RefCell::new(0));
        let runs2 = runs.clone();
        let handle = scope(|| {});
        effect(move || {
            s.get();
            *runs2.borrow_mut() += 1;
        })
        .unwrap();
        handle.stop();
        s.set(2).unwrap();
        assert_eq!(*runs.borrow(), 2);
    }
}
