//! RenderObjectWidget - widgets that directly manage RenderObjects
//!
//! These widgets create and configure RenderObjects for layout and painting.

use std::fmt;

use crate::{RenderObject, Widget};

/// Base trait for widgets that create RenderObjects
///
/// Similar to Flutter's RenderObjectWidget. These widgets directly manage
/// a RenderObject for layout and painting, rather than composing other widgets.
pub trait RenderObjectWidget: Widget {
    /// Create the RenderObject for this widget
    ///
    /// Called when element is first mounted. Should create and return a new
    /// RenderObject instance.
    fn create_render_object(&self) -> Box<dyn RenderObject>;

    /// Update the RenderObject with new configuration
    ///
    /// Called when widget is updated. Should apply new configuration to the
    /// existing RenderObject.
    fn update_render_object(&self, render_object: &mut dyn RenderObject);
}

/// Widget that creates a RenderObject without children
///
/// Similar to Flutter's LeafRenderObjectWidget. Used for widgets that don't
/// have any children, like Image, Text (in some cases), or custom painters.
///
/// # Example
///
/// ```rust,ignore
/// use flui_rendering::RenderObject;
///
/// #[derive(Debug, Clone)]
/// struct CustomPaint {
///     color: Color,
/// }
///
/// impl LeafRenderObjectWidget for CustomPaint {
///     fn create_render_object(&self) -> Box<dyn RenderObject> {
///         Box::new(RenderCustomPaint::new(self.color))
///     }
///
///     fn update_render_object(&self, render_object: &mut dyn RenderObject) {
///         if let Some(render) = render_object.downcast_mut::<RenderCustomPaint>() {
///             render.set_color(self.color);
///         }
///     }
/// }
/// ```
pub trait LeafRenderObjectWidget: RenderObjectWidget + fmt::Debug + Clone + Send + Sync + 'static {
    // Inherits create_render_object and update_render_object from RenderObjectWidget
}

/// Widget that creates a RenderObject with a single child
///
/// Similar to Flutter's SingleChildRenderObjectWidget. Used for widgets that
/// have exactly one child, like Padding, Opacity, or Transform.
///
/// # Example
///
/// ```rust,ignore
/// use flui_rendering::RenderObject;
///
/// #[derive(Debug, Clone)]
/// struct Padding {
///     padding: EdgeInsets,
///     child: Box<dyn Widget>,
/// }
///
/// impl SingleChildRenderObjectWidget for Padding {
///     fn create_render_object(&self) -> Box<dyn RenderObject> {
///         Box::new(RenderPadding::new(self.padding))
///     }
///
///     fn update_render_object(&self, render_object: &mut dyn RenderObject) {
///         if let Some(render) = render_object.downcast_mut::<RenderPadding>() {
///             render.set_padding(self.padding);
///         }
///     }
///
///     fn child(&self) -> &dyn Widget {
///         &*self.child
///     }
/// }
/// ```
pub trait SingleChildRenderObjectWidget:
    RenderObjectWidget + fmt::Debug + Clone + Send + Sync + 'static
{
    /// Get the child widget
    fn child(&self) -> &dyn Widget;
}

/// Widget that creates a RenderObject with multiple children
///
/// Similar to Flutter's MultiChildRenderObjectWidget. Used for widgets that
/// have multiple children, like Row, Column, Stack, or Wrap.
///
/// # Example
///
/// ```rust,ignore
/// use flui_rendering::RenderObject;
///
/// #[derive(Debug, Clone)]
/// struct Row {
///     children: Vec<Box<dyn Widget>>,
///     main_axis_alignment: MainAxisAlignment,
/// }
///
/// impl MultiChildRenderObjectWidget for Row {
///     fn create_render_object(&self) -> Box<dyn RenderObject> {
///         Box::new(RenderFlex::new(Axis::Horizontal, self.main_axis_alignment))
///     }
///
///     fn update_render_object(&self, render_object: &mut dyn RenderObject) {
///         if let Some(render) = render_object.downcast_mut::<RenderFlex>() {
///             render.set_main_axis_alignment(self.main_axis_alignment);
///         }
///     }
///
///     fn children(&self) -> &[Box<dyn Widget>] {
///         &self.children
///     }
/// }
/// ```
pub trait MultiChildRenderObjectWidget:
    RenderObjectWidget + fmt::Debug + Clone + Send + Sync + 'static
{
    /// Get the children widgets
    fn children(&self) -> &[Box<dyn Widget>];
}
