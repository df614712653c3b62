//! The propagation engine and the thread-local runtime that owns it.
//!
//! Only one executor of reactive operations runs at a time, so each thread
//! gets its own independent state (tracking cursor, batch depth, effect
//! queue, scope stack) rather than a shared, synchronized runtime. Nodes
//! are not transferable between threads. This is held as a `thread_local!`,
//! never exposed
//! globally — every public entry point resolves it through a private
//! accessor ([`with_runtime`]) instead of handing callers a `Runtime`
//! value.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use smallvec::SmallVec;

use crate::debug::{DebugSink, NodeKindDebug};
use crate::error::{ReactivityError, Result};
use crate::flags::NodeFlags;
use crate::link::{Link, LinkArena, LinkId};
use crate::node::{
    ComputedPayload, EffectPayload, NodeArena, NodeHeader, NodeId, NodeKind, NodePayload,
    ScopePayload, SignalPayload,
};

/// Tunable limits, scaled to the arena/link data model: there is no
/// practical per-signal subscriber cap the way a `HashMap`-based fan-out
/// needed one, so that knob is dropped rather than carried forward unused.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Upper bound on live nodes, guarding against runaway signal/effect
    /// leaks in long-lived hosts. Checked on node creation.
    pub max_nodes: usize,
    /// Upper bound on recursive `validate` depth through chained
    /// computeds, a cheap backstop alongside cycle detection.
    pub max_computed_depth: usize,
    /// Upper bound on nested `batch` depth.
    pub max_batch_depth: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_nodes: 1_000_000,
            max_computed_depth: 1_000,
            max_batch_depth: 10_000,
        }
    }
}

/// One frame of the tracking-context stack: names the currently-evaluating
/// subscriber (`None` inside `untrack`) and the cursor used to reuse or
/// truncate its dependency links.
struct TrackFrame {
    subscriber: Option<NodeId>,
}

pub(crate) struct Runtime {
    nodes: RefCell<NodeArena>,
    links: RefCell<LinkArena>,
    tracking_stack: RefCell<Vec<TrackFrame>>,
    batch_depth: Cell<u32>,
    /// Signals with a committable pending value (`MUTABLE` flag set),
    /// queued for the next batch-commit boundary.
    pending_commit: RefCell<Vec<NodeId>>,
    effect_queue: RefCell<VecDeque<NodeId>>,
    scope_stack: RefCell<Vec<NodeId>>,
    debug_sink: RefCell<Option<Box<dyn DebugSink>>>,
    config: RefCell<RuntimeConfig>,
    computed_depth: Cell<usize>,
}

thread_local! {
    static RUNTIME: Runtime = Runtime::new(RuntimeConfig::default());
}

/// Resolve this thread's runtime. Crate-private: callers go through the
/// public API on `Signal`/`Computed`/`EffectHandle`/`ScopeHandle`, `batch`
/// and `untrack` instead of touching the runtime directly.
pub(crate) fn with_runtime<R>(f: impl FnOnce(&Runtime) -> R) -> R {
    RUNTIME.with(f)
}

/// Replace this thread's runtime configuration. Intended for host setup;
/// calling it after nodes already exist is allowed but only affects
/// subsequently-created nodes and subsequently-checked limits.
pub fn configure(config: RuntimeConfig) {
    with_runtime(|rt| {
        if rt.nodes.borrow().len() > 0 {
            tracing::debug!("flui_reactivity::configure called after nodes already exist");
        }
        *rt.config.borrow_mut() = config;
    });
}

/// Install a debug sink for DevTools-style observability. `None` (the
/// default) is free: call sites branch on `Option::is_some` and skip
/// straight past when disabled.
pub fn set_debug_sink(sink: Option<Box<dyn DebugSink>>) {
    with_runtime(|rt| *rt.debug_sink.borrow_mut() = sink);
}

impl Runtime {
    fn new(config: RuntimeConfig) -> Self {
        Self {
            nodes: RefCell::new(NodeArena::default()),
            links: RefCell::new(LinkArena::default()),
            tracking_stack: RefCell::new(Vec::new()),
            batch_depth: Cell::new(0),
            pending_commit: RefCell::new(Vec::new()),
            effect_queue: RefCell::new(VecDeque::new()),
            scope_stack: RefCell::new(Vec::new()),
            debug_sink: RefCell::new(None),
            config: RefCell::new(config),
            computed_depth: Cell::new(0),
        }
    }

    fn debug(&self, f: impl FnOnce(&mut dyn DebugSink)) {
        if let Some(sink) = self.debug_sink.borrow_mut().as_deref_mut() {
            f(sink);
        }
    }

    // ---------------------------------------------------------------
    // Node creation
    // ---------------------------------------------------------------

    pub fn create_signal<T: 'static>(
        &self,
        initial: T,
        eq: Box<dyn Fn(&dyn Any, &dyn Any) -> bool>,
        label: Option<&'static str>,
    ) -> NodeId {
        self.check_node_budget();
        let header = NodeHeader {
            kind: NodeKind::Signal,
            flags: NodeFlags::empty(),
            deps: None,
            deps_tail: None,
            subs: None,
            subs_tail: None,
            value_version: 0,
            label,
            payload: NodePayload::Signal(SignalPayload {
                current: Box::new(initial),
                pending: None,
                eq,
            }),
        };
        let id = self.nodes.borrow_mut().insert(header);
        self.debug(|s| s.on_node_created(id, NodeKindDebug::Signal, label));
        #[cfg(debug_assertions)]
        tracing::trace!(?id, "signal created");
        id
    }

    pub fn create_computed<T: 'static>(
        &self,
        getter: Box<dyn FnMut(Option<&dyn Any>) -> Box<dyn Any>>,
        eq: Box<dyn Fn(&dyn Any, &dyn Any) -> bool>,
        label: Option<&'static str>,
    ) -> NodeId {
        self.check_node_budget();
        let header = NodeHeader {
            kind: NodeKind::Computed,
            flags: NodeFlags::DIRTY,
            deps: None,
            deps_tail: None,
            subs: None,
            subs_tail: None,
            value_version: 0,
            label,
            payload: NodePayload::Computed(ComputedPayload {
                cached: None,
                getter,
                eq,
            }),
        };
        let id = self.nodes.borrow_mut().insert(header);
        self.debug(|s| s.on_node_created(id, NodeKindDebug::Computed, label));
        #[cfg(debug_assertions)]
        tracing::trace!(?id, "computed created");
        id
    }

    pub fn create_effect(&self, body: Box<dyn FnMut()>, label: Option<&'static str>) -> Result<NodeId> {
        self.check_node_budget();
        let scope = self.scope_stack.borrow().last().copied();
        let header = NodeHeader {
            kind: NodeKind::Effect,
            flags: NodeFlags::WATCHING,
            deps: None,
            deps_tail: None,
            subs: None,
            subs_tail: None,
            value_version: 0,
            label,
            payload: NodePayload::Effect(EffectPayload { body, scope }),
        };
        let id = self.nodes.borrow_mut().insert(header);
        self.debug(|s| s.on_node_created(id, NodeKindDebug::Effect, label));
        if let Some(scope_id) = scope {
            if let Some(node) = self.nodes.borrow_mut().get_mut(scope_id) {
                if let NodePayload::Scope(s) = &mut node.payload {
                    s.effects.push(id);
                }
            }
        }
        #[cfg(debug_assertions)]
        tracing::trace!(?id, "effect created");
        // A panic on the first run must not swallow the handle: the node
        // already exists, linked into its scope, so the caller needs the
        // id back to stop/dispose it even though its first run failed.
        if let Err(e) = self.run_effect_body(id) {
            tracing::error!(?id, error = %e, "effect body failed on first run");
        }
        Ok(id)
    }

    pub fn create_scope(&self, label: Option<&'static str>) -> NodeId {
        self.check_node_budget();
        let parent = self.scope_stack.borrow().last().copied();
        let header = NodeHeader {
            kind: NodeKind::Scope,
            flags: NodeFlags::empty(),
            deps: None,
            deps_tail: None,
            subs: None,
            subs_tail: None,
            value_version: 0,
            label,
            payload: NodePayload::Scope(ScopePayload {
                effects: Vec::new(),
                children: Vec::new(),
                parent,
            }),
        };
        let id = self.nodes.borrow_mut().insert(header);
        self.debug(|s| s.on_node_created(id, NodeKindDebug::Scope, label));
        if let Some(parent_id) = parent {
            if let Some(node) = self.nodes.borrow_mut().get_mut(parent_id) {
                if let NodePayload::Scope(s) = &mut node.payload {
                    s.children.push(id);
                }
            }
        }
        #[cfg(debug_assertions)]
        tracing::trace!(?id, ?parent, "scope created");
        id
    }

    fn check_node_budget(&self) {
        let len = self.nodes.borrow().len();
        let max_nodes = self.config.borrow().max_nodes;
        if len >= max_nodes {
            panic!(
                "flui_reactivity: node count limit exceeded ({} >= {})",
                len, max_nodes
            );
        }
    }

    pub fn scope_stack_push(&self, id: NodeId) {
        self.scope_stack.borrow_mut().push(id);
    }

    pub fn scope_stack_pop(&self) {
        self.scope_stack.borrow_mut().pop();
    }

    // ---------------------------------------------------------------
    // Flags / kind helpers
    // ---------------------------------------------------------------

    pub fn flags(&self, id: NodeId) -> NodeFlags {
        self.nodes
            .borrow()
            .get(id)
            .map(|n| n.flags)
            .unwrap_or(NodeFlags::DISPOSED)
    }

    fn set_flag(&self, id: NodeId, flag: NodeFlags) {
        if let Some(n) = self.nodes.borrow_mut().get_mut(id) {
            n.flags.insert(flag);
        }
    }

    fn clear_flag(&self, id: NodeId, flag: NodeFlags) {
        if let Some(n) = self.nodes.borrow_mut().get_mut(id) {
            n.flags.remove(flag);
        }
    }

    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.nodes.borrow().get(id).map(|n| n.kind)
    }

    pub fn value_version(&self, id: NodeId) -> u64 {
        self.nodes.borrow().get(id).map(|n| n.value_version).unwrap_or(0)
    }

    // ---------------------------------------------------------------
    // Tracking context
    // ---------------------------------------------------------------

    /// Record a read of `dep` against the currently-evaluating subscriber,
    /// if any (a no-op outside any tracked evaluation or inside
    /// `untrack`).
    pub fn track_read(&self, dep: NodeId) {
        let subscriber = match self.tracking_stack.borrow().last() {
            Some(TrackFrame {
                subscriber: Some(s),
            }) => *s,
            _ => return,
        };
        self.link_dependency(dep, subscriber);
    }

    /// Classic alien-signals-style link reuse: walk the subscriber's old
    /// dependency chain in lockstep with the reads performed this
    /// evaluation. A read that matches the next old link in sequence
    /// reuses it in place (bumping its version stamp); a read that doesn't
    /// match splices in a fresh link and abandons the remainder of the old
    /// chain for truncation once the evaluation completes.
    fn link_dependency(&self, dep: NodeId, sub: NodeId) {
        let deps_tail = self.nodes.borrow().get(sub).map(|n| n.deps_tail).flatten();
        let candidate = match deps_tail {
            Some(t) => self.links.borrow().get(t).and_then(|l| l.next_dep),
            None => self.nodes.borrow().get(sub).map(|n| n.deps).flatten(),
        };

        if let Some(c) = candidate {
            let matches = self.links.borrow().get(c).map(|l| l.dep) == Some(dep);
            if matches {
                let ver = self.value_version(dep);
                if let Some(l) = self.links.borrow_mut().get_mut(c) {
                    l.version = ver;
                }
                if let Some(n) = self.nodes.borrow_mut().get_mut(sub) {
                    n.deps_tail = Some(c);
                }
                return;
            }
            // Mismatch: the remainder starting at `c` is stale. Truncate it
            // now so a later read of the same `dep` further down the old
            // chain allocates a fresh link rather than resolving to a link
            // this pass already walked past.
            self.truncate_from(sub, c);
        }

        let link = Link {
            dep,
            sub,
            version: self.value_version(dep),
            prev_dep: deps_tail,
            next_dep: None,
            prev_sub: None,
            next_sub: None,
        };
        let link_id = self.links.borrow_mut().insert(link);

        match deps_tail {
            Some(t) => {
                if let Some(l) = self.links.borrow_mut().get_mut(t) {
                    l.next_dep = Some(link_id);
                }
            }
            None => {
                if let Some(n) = self.nodes.borrow_mut().get_mut(sub) {
                    n.deps = Some(link_id);
                }
            }
        }
        if let Some(n) = self.nodes.borrow_mut().get_mut(sub) {
            n.deps_tail = Some(link_id);
        }
        self.append_sub(dep, link_id);
        self.debug(|s| s.on_link_created(dep, sub));
    }

    fn append_sub(&self, dep: NodeId, link_id: LinkId) {
        let tail = self.nodes.borrow().get(dep).map(|n| n.subs_tail).flatten();
        if let Some(l) = self.links.borrow_mut().get_mut(link_id) {
            l.prev_sub = tail;
        }
        match tail {
            Some(t) => {
                if let Some(l) = self.links.borrow_mut().get_mut(t) {
                    l.next_sub = Some(link_id);
                }
            }
            None => {
                if let Some(n) = self.nodes.borrow_mut().get_mut(dep) {
                    n.subs = Some(link_id);
                }
            }
        }
        if let Some(n) = self.nodes.borrow_mut().get_mut(dep) {
            n.subs_tail = Some(link_id);
        }
    }

    /// Begin tracking `subscriber`'s dependencies: reset the tail cursor
    /// (but not the head — the old chain is walked for reuse) and push a
    /// tracking frame so reads during evaluation register against it.
    fn begin_tracking(&self, subscriber: Option<NodeId>) {
        if let Some(id) = subscriber {
            if let Some(n) = self.nodes.borrow_mut().get_mut(id) {
                n.deps_tail = None;
            }
        }
        self.tracking_stack.borrow_mut().push(TrackFrame { subscriber });
    }

    /// End tracking: truncate whatever remains of the old chain past the
    /// final reused/created link (or the whole chain, if nothing was
    /// read).
    fn end_tracking(&self, subscriber: Option<NodeId>) {
        self.tracking_stack.borrow_mut().pop();
        let Some(sub) = subscriber else { return };
        let tail = self.nodes.borrow().get(sub).map(|n| n.deps_tail).flatten();
        let stale_start = match tail {
            Some(t) => self.links.borrow().get(t).and_then(|l| l.next_dep),
            None => self.nodes.borrow().get(sub).map(|n| n.deps).flatten(),
        };
        if let Some(start) = stale_start {
            self.truncate_from(sub, start);
        }
        match tail {
            Some(t) => {
                if let Some(l) = self.links.borrow_mut().get_mut(t) {
                    l.next_dep = None;
                }
            }
            None => {
                if let Some(n) = self.nodes.borrow_mut().get_mut(sub) {
                    n.deps = None;
                }
            }
        }
    }

    /// Unlink and free every link from `start` to the end of the
    /// subscriber's old dependency chain, removing each from its
    /// dependency's subscriber list too.
    fn truncate_from(&self, sub: NodeId, start: LinkId) {
        let mut current = Some(start);
        while let Some(id) = current {
            let (dep, next_dep) = match self.links.borrow().get(id) {
                Some(l) => (l.dep, l.next_dep),
                None => break,
            };
            self.unlink_from_subs(dep, id);
            self.links.borrow_mut().remove(id);
            self.debug(|s| s.on_link_removed(dep, sub));
            current = next_dep;
        }
    }

    fn unlink_from_subs(&self, dep: NodeId, link_id: LinkId) {
        let (prev, next) = match self.links.borrow().get(link_id) {
            Some(l) => (l.prev_sub, l.next_sub),
            None => return,
        };
        match prev {
            Some(p) => {
                if let Some(l) = self.links.borrow_mut().get_mut(p) {
                    l.next_sub = next;
                }
            }
            None => {
                if let Some(n) = self.nodes.borrow_mut().get_mut(dep) {
                    n.subs = next;
                }
            }
        }
        match next {
            Some(nx) => {
                if let Some(l) = self.links.borrow_mut().get_mut(nx) {
                    l.prev_sub = prev;
                }
            }
            None => {
                if let Some(n) = self.nodes.borrow_mut().get_mut(dep) {
                    n.subs_tail = prev;
                }
            }
        }
    }

    /// Sever every outgoing dependency link of `node` (used when disposing
    /// a computed or stopping an effect).
    fn unlink_all_deps(&self, node: NodeId) {
        let head = self.nodes.borrow().get(node).map(|n| n.deps).flatten();
        if let Some(start) = head {
            self.truncate_from(node, start);
        }
        if let Some(n) = self.nodes.borrow_mut().get_mut(node) {
            n.deps = None;
            n.deps_tail = None;
        }
    }

    /// Sever every incoming subscriber link of `node` (used when disposing
    /// a signal or computed so its value can't be read by anyone after
    /// the handle drops).
    fn unlink_all_subs(&self, node: NodeId) {
        let mut current = self.nodes.borrow().get(node).map(|n| n.subs).flatten();
        while let Some(id) = current {
            let (sub, next, prev_dep, next_dep) = match self.links.borrow().get(id) {
                Some(l) => (l.sub, l.next_sub, l.prev_dep, l.next_dep),
                None => break,
            };
            match prev_dep {
                Some(p) => {
                    if let Some(l) = self.links.borrow_mut().get_mut(p) {
                        l.next_dep = next_dep;
                    }
                }
                None => {
                    if let Some(n) = self.nodes.borrow_mut().get_mut(sub) {
                        n.deps = next_dep;
                    }
                }
            }
            match next_dep {
                Some(nx) => {
                    if let Some(l) = self.links.borrow_mut().get_mut(nx) {
                        l.prev_dep = prev_dep;
                    }
                }
                None => {
                    if let Some(n) = self.nodes.borrow_mut().get_mut(sub) {
                        n.deps_tail = prev_dep;
                    }
                }
            }
            self.links.borrow_mut().remove(id);
            current = next;
        }
        if let Some(n) = self.nodes.borrow_mut().get_mut(node) {
            n.subs = None;
            n.subs_tail = None;
        }
    }

    pub fn untrack<R>(&self, f: impl FnOnce() -> R) -> R {
        self.begin_tracking(None);
        let r = f();
        self.end_tracking(None);
        r
    }

    // ---------------------------------------------------------------
    // Propagation engine
    // ---------------------------------------------------------------

    /// Iterative breadth-first walk of the subscriber graph reachable from
    /// a dirtied signal. Already-marked nodes are skipped; effects are
    /// leaves (not walked further). Uses an explicit worklist rather than
    /// recursion so deep dependency chains can't blow the call stack.
    fn mark(&self, start: NodeId) {
        // Most writes reach a handful of computeds/effects directly; a
        // `SmallVec` keeps that common case off the heap while still
        // growing for wide fan-out graphs.
        let mut frontier: SmallVec<[NodeId; 8]> = SmallVec::new();
        frontier.push(start);
        let mut i = 0;
        while i < frontier.len() {
            let node = frontier[i];
            i += 1;
            let mut link = self.nodes.borrow().get(node).map(|n| n.subs).flatten();
            while let Some(l) = link {
                let (sub, next) = match self.links.borrow().get(l) {
                    Some(link) => (link.sub, link.next_sub),
                    None => break,
                };
                match self.kind(sub) {
                    Some(NodeKind::Computed) => {
                        let flags = self.flags(sub);
                        if !flags.intersects(NodeFlags::PENDING_COMPUTED | NodeFlags::DIRTY) {
                            self.set_flag(sub, NodeFlags::PENDING_COMPUTED);
                            #[cfg(debug_assertions)]
                            tracing::trace!(?sub, "computed marked pending");
                            frontier.push(sub);
                        }
                    }
                    Some(NodeKind::Effect) => {
                        let flags = self.flags(sub);
                        if !flags.contains(NodeFlags::QUEUED) && !flags.contains(NodeFlags::STOPPED)
                        {
                            self.set_flag(sub, NodeFlags::QUEUED);
                            #[cfg(debug_assertions)]
                            tracing::trace!(?sub, "effect enqueued");
                            self.effect_queue.borrow_mut().push_back(sub);
                        }
                    }
                    _ => {}
                }
                link = next;
            }
        }
    }

    /// Drain the effect flush queue until empty. Effects enqueued during a
    /// run (including by that same effect) are processed in the same
    /// drain cycle, in FIFO order.
    fn drain(&self) {
        loop {
            let next = self.effect_queue.borrow_mut().pop_front();
            let Some(eff) = next else { break };
            self.clear_flag(eff, NodeFlags::QUEUED);
            #[cfg(debug_assertions)]
            tracing::trace!(?eff, "effect dequeued");
            if self.flags(eff).contains(NodeFlags::STOPPED) {
                continue;
            }
            if let Err(e) = self.run_effect_body(eff) {
                tracing::error!(?eff, error = %e, "effect body failed");
            }
        }
    }

    /// Commit every signal with a pending write, then drain the effect
    /// queue. Called when the outermost `batch` exits, or immediately
    /// after a top-level (non-batched) `set`.
    pub fn commit_and_drain(&self) {
        let pending: Vec<NodeId> = self.pending_commit.borrow_mut().drain(..).collect();
        for id in pending {
            let old = {
                let mut nodes = self.nodes.borrow_mut();
                let Some(node) = nodes.get_mut(id) else {
                    continue;
                };
                let NodePayload::Signal(s) = &mut node.payload else {
                    continue;
                };
                let Some(new_value) = s.pending.take() else {
                    continue;
                };
                let old = std::mem::replace(&mut s.current, new_value);
                node.flags.remove(NodeFlags::MUTABLE);
                // value_version was already bumped at `set` time.
                old
            };
            let nodes = self.nodes.borrow();
            if let Some(NodePayload::Signal(s)) = nodes.get(id).map(|n| &n.payload) {
                self.debug(|sink| sink.on_value_committed(id, old.as_ref(), s.current.as_ref(), Some(id)));
            }
        }
        self.drain();
    }

    pub fn batch_depth(&self) -> u32 {
        self.batch_depth.get()
    }

    pub fn enter_batch(&self) {
        self.batch_depth.set(self.batch_depth.get() + 1);
        if self.batch_depth.get() > self.config.borrow().max_batch_depth {
            panic!("flui_reactivity: batch nesting exceeded max_batch_depth");
        }
    }

    /// Returns `true` if this was the outermost batch (caller should
    /// commit and drain).
    pub fn exit_batch(&self) -> bool {
        let depth = self.batch_depth.get() - 1;
        self.batch_depth.set(depth);
        depth == 0
    }

    // ---------------------------------------------------------------
    // Signal operations
    // ---------------------------------------------------------------

    pub fn signal_get<T: Clone + 'static>(&self, id: NodeId) -> T {
        self.track_read(id);
        self.signal_peek(id)
    }

    pub fn signal_peek<T: Clone + 'static>(&self, id: NodeId) -> T {
        let nodes = self.nodes.borrow();
        let node = nodes.get(id).expect("signal accessed after disposal");
        let NodePayload::Signal(s) = &node.payload else {
            panic!("node is not a signal");
        };
        s.current
            .downcast_ref::<T>()
            .expect("signal type mismatch")
            .clone()
    }

    pub fn signal_set<T: 'static>(&self, id: NodeId, new: T) -> Result<()> {
        let is_reentrant_write = self
            .tracking_stack
            .borrow()
            .iter()
            .any(|f| matches!(f.subscriber, Some(s) if self.kind(s) == Some(NodeKind::Computed)));

        let changed = {
            let mut nodes = self.nodes.borrow_mut();
            let node = nodes.get_mut(id).expect("signal accessed after disposal");
            let NodePayload::Signal(s) = &mut node.payload else {
                panic!("node is not a signal");
            };
            let current_ref: &dyn Any = s.pending.as_deref().unwrap_or(s.current.as_ref());
            let changed = !(s.eq)(current_ref, &new);
            if changed {
                s.pending = Some(Box::new(new));
                node.flags.insert(NodeFlags::MUTABLE);
                node.value_version += 1;
            }
            changed
        };

        if !changed {
            return Ok(());
        }
        if is_reentrant_write {
            // Roll back: the write is rejected, so nothing should have
            // been queued for commit or propagated.
            let mut nodes = self.nodes.borrow_mut();
            if let Some(node) = nodes.get_mut(id) {
                if let NodePayload::Signal(s) = &mut node.payload {
                    s.pending = None;
                }
                node.flags.remove(NodeFlags::MUTABLE);
                node.value_version -= 1;
            }
            return Err(ReactivityError::BadReentrance);
        }

        self.pending_commit.borrow_mut().push(id);
        self.mark(id);
        #[cfg(debug_assertions)]
        tracing::trace!(?id, "signal set (pending commit)");
        if self.batch_depth.get() == 0 {
            self.commit_and_drain();
        }
        Ok(())
    }

    // ---------------------------------------------------------------
    // Computed validation
    // ---------------------------------------------------------------

    pub fn computed_get<T: Clone + 'static>(&self, id: NodeId) -> Result<T> {
        self.validate_computed(id)?;
        self.track_read(id);
        Ok(self.computed_peek_unchecked(id))
    }

    pub fn computed_peek<T: Clone + 'static>(&self, id: NodeId) -> Result<T> {
        self.validate_computed(id)?;
        Ok(self.computed_peek_unchecked(id))
    }

    fn computed_peek_unchecked<T: Clone + 'static>(&self, id: NodeId) -> T {
        let nodes = self.nodes.borrow();
        let node = nodes.get(id).expect("computed accessed after disposal");
        let NodePayload::Computed(c) = &node.payload else {
            panic!("node is not a computed");
        };
        c.cached
            .as_ref()
            .expect("computed read before first validation")
            .downcast_ref::<T>()
            .expect("computed type mismatch")
            .clone()
    }

    fn validate_computed(&self, id: NodeId) -> Result<()> {
        let flags = self.flags(id);
        if !flags.intersects(NodeFlags::DIRTY | NodeFlags::PENDING_COMPUTED) {
            return Ok(());
        }

        self.computed_depth.set(self.computed_depth.get() + 1);
        if self.computed_depth.get() > self.config.borrow().max_computed_depth {
            self.computed_depth.set(self.computed_depth.get() - 1);
            tracing::debug!(?id, "computed validation depth limit exceeded, reporting as cycle");
            return Err(ReactivityError::Cycle);
        }
        let result = self.validate_computed_inner(id);
        self.computed_depth.set(self.computed_depth.get() - 1);
        result
    }

    fn validate_computed_inner(&self, id: NodeId) -> Result<()> {
        let flags = self.flags(id);

        // Step 2: PendingComputed without Dirty — check whether any
        // dependency's value actually changed before committing to a
        // recompute.
        if flags.contains(NodeFlags::PENDING_COMPUTED) && !flags.contains(NodeFlags::DIRTY) {
            let mut any_changed = false;
            let mut link = self.nodes.borrow().get(id).map(|n| n.deps).flatten();
            while let Some(l) = link {
                let (dep, next) = match self.links.borrow().get(l) {
                    Some(link) => (link.dep, link.next_dep),
                    None => break,
                };
                if self.kind(dep) == Some(NodeKind::Computed) {
                    self.validate_computed(dep)?;
                }
                let dep_ver = self.value_version(dep);
                let link_ver = self.links.borrow().get(l).map(|l| l.version).unwrap_or(dep_ver);
                if dep_ver != link_ver {
                    if let Some(l) = self.links.borrow_mut().get_mut(l) {
                        l.version = dep_ver;
                    }
                    any_changed = true;
                }
                link = next;
            }
            if any_changed {
                self.set_flag(id, NodeFlags::DIRTY);
            } else {
                self.clear_flag(id, NodeFlags::PENDING_COMPUTED);
                return Ok(());
            }
        }

        // Step 3: Dirty (or just promoted) — recompute.
        self.recompute_computed(id)
    }

    fn recompute_computed(&self, id: NodeId) -> Result<()> {
        if self.flags(id).contains(NodeFlags::RECURSED_CHECK) {
            tracing::debug!(?id, "computed re-entered its own evaluation, reporting as cycle");
            return Err(ReactivityError::Cycle);
        }
        self.set_flag(id, NodeFlags::RECURSED_CHECK);
        let _guard = RecursedGuard { rt: self, id };

        self.begin_tracking(Some(id));

        // Pull both the getter closure and the previous cached value out
        // of the arena before calling out: the getter reads other nodes
        // via `track_read`, which borrows the same `RefCell`, so nothing
        // borrowed from `self.nodes` can still be live across the call.
        let (mut getter, prev_value) = {
            let mut nodes = self.nodes.borrow_mut();
            let node = nodes.get_mut(id).expect("computed accessed after disposal");
            let NodePayload::Computed(c) = &mut node.payload else {
                unreachable!()
            };
            let getter = std::mem::replace(&mut c.getter, Box::new(|_| unreachable!()));
            (getter, c.cached.take())
        };

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            getter(prev_value.as_deref())
        }));

        self.end_tracking(Some(id));

        match result {
            Ok(new_value) => {
                let changed;
                {
                    let mut nodes = self.nodes.borrow_mut();
                    let node = nodes.get_mut(id).unwrap();
                    let NodePayload::Computed(c) = &mut node.payload else {
                        unreachable!()
                    };
                    c.getter = getter;
                    changed = match &prev_value {
                        Some(old) => !(c.eq)(old.as_ref(), new_value.as_ref()),
                        None => true,
                    };
                    c.cached = Some(new_value);
                    if changed {
                        node.value_version += 1;
                    }
                    node.flags.remove(NodeFlags::DIRTY | NodeFlags::PENDING_COMPUTED);
                }
                if changed {
                    if let Some(old) = &prev_value {
                        let nodes = self.nodes.borrow();
                        if let Some(NodePayload::Computed(c)) = nodes.get(id).map(|n| &n.payload) {
                            self.debug(|sink| {
                                sink.on_value_committed(
                                    id,
                                    old.as_ref(),
                                    c.cached.as_deref().expect("just set"),
                                    None,
                                )
                            });
                        }
                    }
                }
                Ok(())
            }
            Err(payload) => {
                // Evaluation aborted mid-pass. `end_tracking` above already
                // truncated whatever tail of the old dependency chain this
                // (unfinished) run didn't reuse — the links it did reuse
                // before panicking are still correct dependencies of `id`
                // and must stay linked, or a later write to one of them
                // would never re-dirty this node. Leave DIRTY set for a
                // retry on next access, and restore the previous cached
                // value and getter so the node is otherwise untouched.
                if let Some(n) = self.nodes.borrow_mut().get_mut(id) {
                    let NodePayload::Computed(c) = &mut n.payload else {
                        unreachable!()
                    };
                    c.getter = getter;
                    c.cached = prev_value;
                }
                self.set_flag(id, NodeFlags::DIRTY);
                #[cfg(debug_assertions)]
                tracing::trace!(?id, "computed getter panicked, kept reused deps");
                Err(ReactivityError::GetterThrew(panic_message(payload)))
            }
        }
    }

    // ---------------------------------------------------------------
    // Effects
    // ---------------------------------------------------------------

    fn run_effect_body(&self, id: NodeId) -> Result<()> {
        if self.flags(id).contains(NodeFlags::RECURSED_CHECK) {
            tracing::debug!(?id, "effect re-entered its own run, reporting as cycle");
            return Err(ReactivityError::Cycle);
        }
        self.set_flag(id, NodeFlags::RECURSED_CHECK);
        let _guard = RecursedGuard { rt: self, id };

        self.begin_tracking(Some(id));

        let mut body = {
            let mut nodes = self.nodes.borrow_mut();
            let node = nodes.get_mut(id).expect("effect accessed after disposal");
            let NodePayload::Effect(e) = &mut node.payload else {
                unreachable!()
            };
            std::mem::replace(&mut e.body, Box::new(|| {}))
        };

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| body()));

        self.end_tracking(Some(id));

        // The effect may have stopped itself during its own run; only put
        // the body back if the node still exists and wasn't disposed.
        if let Some(node) = self.nodes.borrow_mut().get_mut(id) {
            if let NodePayload::Effect(e) = &mut node.payload {
                e.body = body;
            }
        } else {
            drop(body);
        }

        match result {
            Ok(()) => Ok(()),
            Err(payload) => Err(ReactivityError::EffectThrew(panic_message(payload))),
        }
    }

    pub fn stop_effect(&self, id: NodeId) {
        let already_stopped = self.flags(id).contains(NodeFlags::STOPPED);
        if already_stopped || !self.nodes.borrow().contains(id) {
            return;
        }
        self.set_flag(id, NodeFlags::STOPPED);
        self.clear_flag(id, NodeFlags::QUEUED);
        self.unlink_all_deps(id);
        #[cfg(debug_assertions)]
        tracing::trace!(?id, "effect stopped");
    }

    pub fn dispose_effect(&self, id: NodeId) {
        self.stop_effect(id);
        self.nodes.borrow_mut().remove(id);
        self.debug(|s| s.on_node_disposed(id));
    }

    // ---------------------------------------------------------------
    // Scopes
    // ---------------------------------------------------------------

    /// Stop every effect registered with this scope, then recurse into
    /// every nested scope opened while this one was innermost, so stopping
    /// an outer scope tears down its whole subtree. Effects run down
    /// first, most-recently-created first, then children in the same
    /// reverse-creation order.
    pub fn stop_scope(&self, id: NodeId) {
        if self.flags(id).contains(NodeFlags::STOPPED) {
            return;
        }
        let (effects, children) = {
            let mut nodes = self.nodes.borrow_mut();
            let Some(node) = nodes.get_mut(id) else {
                return;
            };
            let NodePayload::Scope(s) = &mut node.payload else {
                return;
            };
            (std::mem::take(&mut s.effects), std::mem::take(&mut s.children))
        };
        for effect in effects.into_iter().rev() {
            self.stop_effect(effect);
        }
        for child in children.into_iter().rev() {
            self.stop_scope(child);
        }
        self.set_flag(id, NodeFlags::STOPPED);
        #[cfg(debug_assertions)]
        tracing::trace!(?id, "scope stopped");
    }

    pub fn dispose_scope(&self, id: NodeId) {
        self.stop_scope(id);
        self.nodes.borrow_mut().remove(id);
        self.debug(|s| s.on_node_disposed(id));
    }

    // ---------------------------------------------------------------
    // Disposal
    // ---------------------------------------------------------------

    pub fn dispose_signal(&self, id: NodeId) {
        self.unlink_all_subs(id);
        self.nodes.borrow_mut().remove(id);
        self.debug(|s| s.on_node_disposed(id));
    }

    pub fn dispose_computed(&self, id: NodeId) {
        self.unlink_all_deps(id);
        self.unlink_all_subs(id);
        self.nodes.borrow_mut().remove(id);
        self.debug(|s| s.on_node_disposed(id));
    }
}

/// Ensures `RECURSED_CHECK` is cleared even when the guarded evaluation
/// returns early via `?` or unwinds through `catch_unwind`'s boundary.
struct RecursedGuard<'a> {
    rt: &'a Runtime,
    id: NodeId,
}

impl Drop for RecursedGuard<'_> {
    fn drop(&mut self) {
        self.rt.clear_flag(self.id, NodeFlags::RECURSED_CHECK);
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
