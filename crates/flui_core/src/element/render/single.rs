//! SingleChildRenderObjectElement - for RenderObjects with one child
//!
//! A specialized element for RenderObjects that have exactly one child.
//! This is the proper Flutter architecture pattern for single-child widgets
//! like Padding, Opacity, Transform, etc.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{Element, ElementId, ElementTree, RenderObject, SingleChildRenderObjectWidget, Widget};

/// SingleChildRenderObjectElement manages RenderObjects with one child
///
/// This follows Flutter's architecture where each type of RenderObjectWidget
/// has a corresponding specialized Element type. This element handles:
/// - Creating and managing the RenderObject
/// - Managing a single child element
/// - Coordinating updates between widget, element, and render object
///
/// # Flutter Equivalent
///
/// This is the Rust equivalent of Flutter's `SingleChildRenderObjectElement`.
///
/// # Examples
///
/// ```rust,ignore
/// // Padding widget creates a SingleChildRenderObjectElement
/// impl Widget for Padding {
///     fn create_element(&self) -> Box<dyn Element> {
///         Box::new(SingleChildRenderObjectElement::new(self.clone()))
///     }
/// }
/// ```
pub struct SingleChildRenderObjectElement<W: SingleChildRenderObjectWidget> {
    id: ElementId,
    widget: W,
    parent: Option<ElementId>,
    dirty: bool,
    render_object: Option<Box<dyn RenderObject>>,
    /// Child element ID (managed by ElementTree)
    child: Option<ElementId>,
    /// Reference to ElementTree for child management
    tree: Option<Arc<RwLock<ElementTree>>>,
}

impl<W: SingleChildRenderObjectWidget> SingleChildRenderObjectElement<W> {
    /// Create new single child render object element from a widget
    pub fn new(widget: W) -> Self {
        Self {
            id: ElementId::new(),
            widget,
            parent: None,
            dirty: true,
            render_object: None,
            child: None,
            tree: None,
        }
    }

    /// Get reference to the render object
    pub fn render_object_ref(&self) -> Option<&dyn RenderObject> {
        self.render_object.as_ref().map(|r| r.as_ref())
    }

    /// Get mutable reference to the render object
    pub fn render_object_mut_ref(&mut self) -> Option<&mut dyn RenderObject> {
        self.render_object.as_mut().map(|r| r.as_mut())
    }

    /// Get child element ID
    pub fn child_id(&self) -> Option<ElementId> {
        self.child
    }

    /// Initialize the render object
    fn initialize_render_object(&mut self) {
        if self.render_object.is_none() {
            self.render_object = Some(self.widget.create_render_object());
        }
    }

    /// Update the render object with new widget configuration
    fn update_render_object(&mut self) {
        if let Some(render_object) = &mut self.render_object {
            self.widget.update_render_object(render_object.as_mut());
        }
    }

    /// Set child element ID (called by ElementTree after mounting)
    pub(crate) fn set_child(&mut self, child_id: ElementId) {
        self.child = Some(child_id);
    }

    /// Take old child for rebuild (called by ElementTree during rebuild)
    pub(crate) fn take_old_child(&mut self) -> Option<ElementId> {
        self.child.take()
    }
}

impl<W: SingleChildRenderObjectWidget> fmt::Debug for SingleChildRenderObjectElement<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleChildRenderObjectElement")
            .field("id", &self.id)
            .field("widget_type", &std::any::type_name::<W>())
            .field("parent", &self.parent)
            .field("dirty", &self.dirty)
            .field("has_render_object", &self.render_object.is_some())
            .field("child", &self.child)
            .finish()
    }
}

impl<W: SingleChildRenderObjectWidget> Element for SingleChildRenderObjectElement<W> {
    fn mount(&mut self, parent: Option<ElementId>, _slot: usize) {
        self.parent = parent;
        self.initialize_render_object();
        self.dirty = true;
    }

    fn unmount(&mut self) {
        // Unmount child first
        if let Some(child_id) = self.child.take() {
            if let Some(tree) = &self.tree {
                tree.write().remove(child_id);
            }
        }
        // Then clear render object
        self.render_object = None;
    }

    fn update(&mut self, new_widget: Box<dyn Any + Send + Sync>) {
        if let Ok(new_widget) = new_widget.downcast::<W>() {
            self.widget = *new_widget;
            self.update_render_object();
            self.dirty = true;
        }
    }

    fn rebuild(&mut self) -> Vec<(ElementId, Box<dyn Widget>, usize)> {
        if !self.dirty {
            return Vec::new();
        }
        self.dirty = false;

        // Update render object
        self.update_render_object();

        // Return child widget to be mounted/updated by ElementTree
        // Clone the child widget using dyn_clone::clone_box
        let child_widget = self.widget.child();
        vec![(self.id, dyn_clone::clone_box(child_widget), 0)]
    }

    fn id(&self) -> ElementId {
        self.id
    }

    fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    fn key(&self) -> Option<&dyn flui_foundation::Key> {
        self.widget.key()
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn visit_children(&self, visitor: &mut dyn FnMut(&dyn Element)) {
        if let Some(child_id) = self.child {
            if let Some(tree) = &self.tree {
                let tree_guard = tree.read();
                if let Some(child_element) = tree_guard.get(child_id) {
                    visitor(child_element);
                }
            }
        }
    }

    fn visit_children_mut(&mut self, visitor: &mut dyn FnMut(&mut dyn Element)) {
        if let Some(child_id) = self.child {
            if let Some(tree) = &self.tree {
                let mut tree_guard = tree.write();
                if let Some(child_element) = tree_guard.get_mut(child_id) {
                    visitor(child_element);
                }
            }
        }
    }

    fn set_tree_ref(&mut self, tree: Arc<RwLock<ElementTree>>) {
        self.tree = Some(tree);
    }

    fn widget_type_id(&self) -> std::any::TypeId {
        std::any::TypeId::of::<W>()
    }

    fn render_object(&self) -> Option<&dyn RenderObject> {
        self.render_object.as_ref().map(|ro| ro.as_ref())
    }

    fn render_object_mut(&mut self) -> Option<&mut dyn RenderObject> {
        self.render_object.as_mut().map(|ro| ro.as_mut())
    }

    fn take_old_child_for_rebuild(&mut self) -> Option<ElementId> {
        self.take_old_child()
    }

    fn set_child_after_mount(&mut self, child_id: ElementId) {
        self.set_child(child_id)
    }

    fn child_ids(&self) -> Vec<ElementId> {
        if let Some(child_id) = self.child {
            vec![child_id]
        } else {
            Vec::new()
        }
    }
}
