//! Exercises the optional `DebugSink` observability surface end to end:
//! node creation, link creation, and value-committed events.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use flui_reactivity::{set_debug_sink, DebugSink, NodeKindDebug, NodeId, Signal};

#[derive(Default)]
struct Recorder {
    created: Vec<NodeKindDebug>,
    links: usize,
    links_removed: usize,
    commits: Vec<(String, String)>,
}

struct RecordingSink(Rc<RefCell<Recorder>>);

impl DebugSink for RecordingSink {
    fn on_node_created(&mut self, _id: NodeId, kind: NodeKindDebug, _label: Option<&str>) {
        self.0.borrow_mut().created.push(kind);
    }

    fn on_link_created(&mut self, _dep: NodeId, _sub: NodeId) {
        self.0.borrow_mut().links += 1;
    }

    fn on_link_removed(&mut self, _dep: NodeId, _sub: NodeId) {
        self.0.borrow_mut().links_removed += 1;
    }

    fn on_value_committed(&mut self, _node: NodeId, old: &dyn Any, new: &dyn Any, _cause: Option<NodeId>) {
        let old = old.downcast_ref::<i64>().map(|v| v.to_string()).unwrap_or_default();
        let new = new.downcast_ref::<i64>().map(|v| v.to_string()).unwrap_or_default();
        self.0.borrow_mut().commits.push((old, new));
    }
}

#[test]
fn sink_observes_node_creation_links_and_commits() {
    let recorder = Rc::new(RefCell::new(Recorder::default()));
    set_debug_sink(Some(Box::new(RecordingSink(recorder.clone()))));

    let s = Signal::new(1i64);
    assert_eq!(recorder.borrow().created, vec![NodeKindDebug::Signal]);

    let doubled = flui_reactivity::Computed::new(move || s.get() * 2);
    doubled.get().unwrap();
    assert!(recorder.borrow().links >= 1, "reading s inside the computed should link it");

    s.set(2).unwrap();
    assert_eq!(recorder.borrow().commits, vec![("1".to_string(), "2".to_string())]);

    set_debug_sink(None);
}

/// A getter that panics after re-reading an already-tracked dependency
/// must not sever that dependency's link: the link was successfully
/// reused this pass, and `end_tracking` already discards whatever of the
/// old chain went unread before the panic. Only the buggy extra wipe
/// this test guards against would remove it.
#[test]
fn getter_panic_after_reread_does_not_drop_the_reused_link() {
    use std::cell::Cell;

    let recorder = Rc::new(RefCell::new(Recorder::default()));

    let a = Signal::new(1i64);
    let should_panic = Rc::new(Cell::new(false));
    let sp = should_panic.clone();
    let c = flui_reactivity::Computed::new(move || {
        let v = a.get();
        if sp.get() {
            panic!("boom");
        }
        v
    });
    assert_eq!(c.get().unwrap(), 1);

    set_debug_sink(Some(Box::new(RecordingSink(recorder.clone()))));
    should_panic.set(true);
    a.set(2).unwrap();
    assert!(c.get().is_err(), "getter should have panicked");
    assert_eq!(
        recorder.borrow().links_removed,
        0,
        "the reused link to `a` must survive a panic that happens after re-reading it"
    );

    should_panic.set(false);
    a.set(3).unwrap();
    assert_eq!(c.get().unwrap(), 3, "recovery should see the latest value of `a`");

    set_debug_sink(None);
}
