use std::any::Any;

use nalgebra::Vector2;

use crate::app::context::AppContext;
use crate::app::info::AppInfo;
use crate::app::update::Update;
use crate::input::PointerEvent;
use crate::layout::{LayoutNode, MeasureSpec};
use crate::vgi::Graphics;
use framed_theme::id::WidgetId;

/// A boxed widget.
pub type BoxedWidget = Box<dyn Widget>;

/// The base trait for all widgets.
///
/// # Widget Lifecycle
///
/// Each frame the host may run, in this order:
///
/// 1. **Input**: [`on_pointer()`](Widget::on_pointer) for pointer events hitting the widget
/// 2. **Update**: [`update()`](Widget::update) to react to context changes
/// 3. **Measure**: [`measure()`](Widget::measure) once per layout pass, possibly several
///    times with different constraints
/// 4. **Render**: [`render()`](Widget::render) with the committed layout of the last pass
///
/// Widgets never call measure or render themselves. To get them re-run they insert
/// [`Update::LAYOUT`] or [`Update::DRAW`] into the context's update manager; the host
/// decides when the next pass happens and may merge several requests into one.
pub trait Widget: Any {
    /// Measure the widget for the given width and height constraints.
    ///
    /// The returned size becomes the committed size of the next render.
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Vector2<f32>;

    /// Render the widget into the committed layout.
    fn render(
        &mut self,
        graphics: &mut dyn Graphics,
        layout_node: &LayoutNode,
        info: &mut AppInfo,
        context: AppContext,
    );

    /// Update the widget state with given info and layout. Returns if the app should be updated.
    fn update(&mut self, _layout: &LayoutNode, _context: AppContext, _info: &mut AppInfo) -> Update {
        Update::empty()
    }

    /// Handle a pointer event. Returns if the event was consumed.
    fn on_pointer(&mut self, _event: &PointerEvent, _layout: &LayoutNode, _context: &AppContext) -> bool {
        false
    }

    /// Report clicks as [UiEvent::Click](crate::app::context::UiEvent::Click) from `source`.
    ///
    /// Returns `false` if the widget cannot be clicked.
    fn set_on_click_listener(&mut self, _source: &str) -> bool {
        false
    }

    /// Return the widget id.
    fn widget_id(&self) -> WidgetId;

    /// Access the widget as [Any], for typed lookups.
    fn as_any(&self) -> &dyn Any;

    /// Access the widget as mutable [Any], for typed lookups.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
