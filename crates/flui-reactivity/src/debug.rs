//! Optional observability hooks for a DevTools-style collaborator
//!. Disabled (the default, `None`) costs a single branch per
//! call site; nothing is allocated or boxed when no sink is installed.

use std::any::Any;

use crate::node::NodeId;

/// Kind of node reported to a [`DebugSink`], mirroring [`crate::node::NodeKind`]
/// without exposing the crate-private type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKindDebug {
    Signal,
    Computed,
    Effect,
    Scope,
}

/// Sink for reactive-graph lifecycle events. Install one with
/// [`crate::Runtime::set_debug_sink`] to drive a DevTools-style probe;
/// `flui_devtools` is the concrete precedent for what such a probe
/// consumes elsewhere in this workspace.
pub trait DebugSink {
    fn on_node_created(&mut self, _id: NodeId, _kind: NodeKindDebug, _label: Option<&str>) {}
    fn on_node_disposed(&mut self, _id: NodeId) {}
    fn on_link_created(&mut self, _dep: NodeId, _sub: NodeId) {}
    fn on_link_removed(&mut self, _dep: NodeId, _sub: NodeId) {}
    fn on_value_committed(
        &mut self,
        _node: NodeId,
        _old: &dyn Any,
        _new: &dyn Any,
        _cause: Option<NodeId>,
    ) {
    }
}
