//! End-to-end scenarios for the reactive graph: linear chains, diamonds,
//! dynamic dependencies, batching, effect disposal mid-drain, and cycle
//! detection.

use std::cell::RefCell;
use std::rc::Rc;

use flui_reactivity::{batch, effect, Computed, ReactivityError, Signal};

fn logger() -> (Rc<RefCell<Vec<i64>>>, impl Fn(i64)) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let log2 = log.clone();
    (log, move |v| log2.borrow_mut().push(v))
}

#[test]
fn linear_chain() {
    let (log, record) = logger();
    let a = Signal::new(1i64);
    let b = Computed::new(move || a.get() * 2);
    let c = Computed::new(move || b.get().unwrap() + 1);
    effect(move || record(c.get().unwrap())).unwrap();

    assert_eq!(*log.borrow(), vec![3]);
    a.set(2).unwrap();
    assert_eq!(*log.borrow(), vec![3, 5]);
    a.set(2).unwrap();
    assert_eq!(*log.borrow(), vec![3, 5], "same-value write must not propagate");
}

#[test]
fn diamond_is_glitch_free() {
    let (log, record) = logger();
    let a = Signal::new(1i64);
    let b = Computed::new(move || a.get() * 2);
    let c = Computed::new(move || a.get() * 3);
    let d = Computed::new(move || b.get().unwrap() + c.get().unwrap());
    effect(move || record(d.get().unwrap())).unwrap();

    assert_eq!(*log.borrow(), vec![5]);
    a.set(10).unwrap();
    assert_eq!(
        *log.borrow(),
        vec![5, 50],
        "diamond must produce exactly one additional log entry, no intermediate glitch"
    );
}

#[test]
fn dynamic_dependencies_retrack_correctly() {
    let (log, record) = logger();
    let flag = Signal::new(true);
    let x = Signal::new(10i64);
    let y = Signal::new(20i64);
    let d = Computed::new(move || if flag.get() { x.get() } else { y.get() });
    effect(move || record(d.get().unwrap())).unwrap();

    assert_eq!(*log.borrow(), vec![10]);
    y.set(99).unwrap();
    assert_eq!(*log.borrow(), vec![10], "y is not yet tracked");
    flag.set(false).unwrap();
    assert_eq!(*log.borrow(), vec![10, 20]);
    x.set(555).unwrap();
    assert_eq!(*log.borrow(), vec![10, 20], "x is no longer tracked");
    y.set(77).unwrap();
    assert_eq!(*log.borrow(), vec![10, 20, 77]);
}

#[test]
fn batching_coalesces_to_one_run() {
    let (log, record) = logger();
    let a = Signal::new(0i64);
    let b = Signal::new(0i64);
    effect(move || record(a.get() + b.get())).unwrap();

    assert_eq!(*log.borrow(), vec![0]);
    batch(|| {
        a.set(1).unwrap();
        b.set(2).unwrap();
    });
    assert_eq!(*log.borrow(), vec![0, 3]);
}

#[test]
fn effect_stopping_sibling_during_drain_completes_cleanly() {
    let s = Signal::new(0i64);
    let e1_runs = Rc::new(RefCell::new(0));
    let e2_runs = Rc::new(RefCell::new(0));
    let e2_handle_slot: Rc<RefCell<Option<flui_reactivity::EffectHandle>>> =
        Rc::new(RefCell::new(None));

    let e1_runs_inner = e1_runs.clone();
    let e2_slot_inner = e2_handle_slot.clone();
    let e1 = effect(move || {
        s.get();
        *e1_runs_inner.borrow_mut() += 1;
        if let Some(handle) = e2_slot_inner.borrow().as_ref() {
            handle.stop();
        }
    })
    .unwrap();

    let e2_runs_inner = e2_runs.clone();
    let e2 = effect(move || {
        s.get();
        *e2_runs_inner.borrow_mut() += 1;
    })
    .unwrap();
    *e2_handle_slot.borrow_mut() = Some(e2);

    assert_eq!(*e1_runs.borrow(), 1);
    assert_eq!(*e2_runs.borrow(), 1);

    s.set(1).unwrap();

    assert_eq!(*e1_runs.borrow(), 2, "e1 should run once more");
    assert_eq!(*e2_runs.borrow(), 1, "e2 should have been stopped before its queued run");
    assert!(e2.is_stopped());
    assert!(!e1.is_stopped());
}

#[test]
fn mutual_computed_cycle_is_detected_and_recoverable() {
    let c1_slot: Rc<RefCell<Option<Computed<i64>>>> = Rc::new(RefCell::new(None));
    let c2_slot: Rc<RefCell<Option<Computed<i64>>>> = Rc::new(RefCell::new(None));

    let c2_for_c1 = c2_slot.clone();
    let c1 = Computed::new(move || c2_for_c1.borrow().as_ref().unwrap().get().unwrap_or(0));
    *c1_slot.borrow_mut() = Some(c1);

    let c1_for_c2 = c1_slot.clone();
    let c2 = Computed::new(move || c1_for_c2.borrow().as_ref().unwrap().get().unwrap_or(0));
    *c2_slot.borrow_mut() = Some(c2);

    let result = c1.get();
    assert!(matches!(result, Err(ReactivityError::Cycle)));

    // Independent signals/computeds must still work after a cycle error.
    let independent = Signal::new(7i64);
    let derived = Computed::new(move || independent.get() + 1);
    assert_eq!(derived.get().unwrap(), 8);
}

#[test]
fn computed_with_no_dependencies_memoizes_forever() {
    let runs = Rc::new(RefCell::new(0));
    let runs2 = runs.clone();
    let c = Computed::new(move || {
        *runs2.borrow_mut() += 1;
        42
    });
    assert_eq!(c.get().unwrap(), 42);
    assert_eq!(c.get().unwrap(), 42);
    assert_eq!(c.get().unwrap(), 42);
    assert_eq!(*runs.borrow(), 1);
}

#[test]
fn peek_never_mutates_link_lists() {
    let a = Signal::new(1i64);
    let c = Computed::new(move || a.get() * 2);
    // Drive one real evaluation so `c` has an established dependency chain.
    assert_eq!(c.get().unwrap(), 2);
    // Repeated peeks must be side-effect free.
    for _ in 0..5 {
        assert_eq!(c.peek().unwrap(), 2);
    }
    a.set(3).unwrap();
    assert_eq!(c.get().unwrap(), 6);
}

#[test]
fn nested_batch_equals_single_batch() {
    let (log, record) = logger();
    let a = Signal::new(0i64);
    effect(move || record(a.get())).unwrap();
    assert_eq!(*log.borrow(), vec![0]);

    batch(|| {
        batch(|| {
            a.set(1).unwrap();
        });
    });
    assert_eq!(*log.borrow(), vec![0, 1]);
}
