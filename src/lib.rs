#![warn(missing_docs)]

//! A small widget toolkit with a configurable, bordered text box.

pub use nalgebra as math;
pub use vello::peniko as color;

pub use framed_core as core;
pub use framed_services as services;
pub use framed_theme as theme;
pub use framed_widgets as widgets;

/// A "prelude" for users of the framed toolkit.
///
/// ```rust
/// use framed::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::app::context::{AppContext, UiEvent};
    pub use crate::core::app::runner::{FrameReport, FrameRunner};
    pub use crate::core::app::tree::WidgetTree;
    pub use crate::core::app::update::Update;
    pub use crate::core::app::Screen;
    pub use crate::core::attrs::{AttributeSet, AttributeValue};
    pub use crate::core::config::{DisplayMetrics, FramedConfig};
    pub use crate::core::input::{PointerAction, PointerEvent};
    pub use crate::core::layout::*;
    pub use crate::core::menu::MenuItem;
    pub use crate::core::widget::Widget;

    // Math
    pub use nalgebra::Vector2;

    // Widgets
    pub use crate::widgets::button::Button;
    pub use crate::widgets::inflate::{InflateError, Inflater, LayoutResource};
    pub use crate::widgets::text_box::TextBox;
}
