use std::any::Any;

use framed_core::app::context::{AppContext, UiEvent};
use framed_core::app::info::AppInfo;
use framed_core::app::update::{Update, UpdateManager};
use framed_core::attrs::AttributeSet;
use framed_core::input::{PointerAction, PointerEvent};
use framed_core::layout::{LayoutNode, MeasureMode, MeasureSpec};
use framed_core::text_render::{TextMetrics, TextRenderContext};
use framed_core::vg::kurbo::{Affine, Point, RoundedRect};
use framed_core::vg::peniko::Color;
use framed_core::vgi::paint::Paint;
use framed_core::vgi::{shape_to_path, Graphics};
use framed_core::widget::Widget;
use framed_theme::id::WidgetId;
use nalgebra::Vector2;

const DEFAULT_LABEL: &str = "Button";
const DEFAULT_TEXT_SIZE: f32 = 16.0;
const PADDING_X: f32 = 12.0;
const PADDING_Y: f32 = 6.0;
const CORNER_RADIUS: f32 = 4.0;

/// A labelled area that reports a click when pressed and released.
///
/// Clicks are posted as [UiEvent::Click] once a listener is registered through
/// [Widget::set_on_click_listener].
///
/// ### Attributes
/// - `text` - The label. Defaults to `"Button"`.
/// - `textSize` - The label size in density-independent units. Defaults to `16`.
///
/// ### Theming
/// The background uses the palette's `button` color, or `button_pressed` while held down.
pub struct Button {
    label: String,
    label_width: f32,
    text_paint: Paint,
    background: Paint,
    idle_color: Color,
    pressed_color: Color,
    density: f32,
    state: ButtonState,
    source: Option<String>,
    metrics: Box<dyn TextMetrics>,
    update: UpdateManager,
}

impl Button {
    /// Create a new button with the given label.
    pub fn new(context: &AppContext, label: impl Into<String>) -> Self {
        let label: String = label.into();
        Self::from_attributes(context, &AttributeSet::new().with("text", label))
    }

    /// Create a button configured by the given attributes.
    pub fn from_attributes(context: &AppContext, attrs: &AttributeSet) -> Self {
        Self::with_text_metrics(context, attrs, Box::new(TextRenderContext::new()))
    }

    /// Create a button that measures and draws its label with `metrics`.
    pub fn with_text_metrics(
        context: &AppContext,
        attrs: &AttributeSet,
        mut metrics: Box<dyn TextMetrics>,
    ) -> Self {
        let palette = context.palette();
        let density = context.display().density;

        let label = attrs
            .string("text")
            .unwrap_or_else(|| DEFAULT_LABEL.to_string());
        let text_size = attrs.float("textSize").unwrap_or(DEFAULT_TEXT_SIZE);

        let mut text_paint = Paint::new();
        text_paint.set_color(palette.text);
        text_paint.set_text_size(text_size * density);

        let mut background = Paint::new();
        background.set_color(palette.button);

        let label_width = metrics.measure_text(&label, &text_paint);

        Self {
            label,
            label_width,
            text_paint,
            background,
            idle_color: palette.button,
            pressed_color: palette.button_pressed,
            density,
            state: ButtonState::Idle,
            source: None,
            metrics,
            update: context.update().clone(),
        }
    }

    /// The label shown.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the label, then request a layout and a repaint.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
        self.label_width = self.metrics.measure_text(&self.label, &self.text_paint);
        self.update.insert(Update::LAYOUT | Update::DRAW);
    }

    /// The current press state.
    pub fn state(&self) -> ButtonState {
        self.state
    }

    fn set_state(&mut self, state: ButtonState) {
        if self.state == state {
            return;
        }

        self.state = state;
        self.background.set_color(match state {
            ButtonState::Idle => self.idle_color,
            ButtonState::Pressed => self.pressed_color,
        });
        self.update.insert(Update::DRAW);
    }

    fn content_size(&self) -> Vector2<f32> {
        Vector2::new(
            self.label_width + 2.0 * PADDING_X * self.density,
            self.text_paint.text_size + 2.0 * PADDING_Y * self.density,
        )
    }
}

fn resolve(spec: MeasureSpec, wanted: f32) -> f32 {
    match spec.mode {
        MeasureMode::Exactly => spec.size,
        MeasureMode::AtMost => spec.size.min(wanted.ceil()),
        MeasureMode::Unspecified => wanted.ceil(),
    }
}

impl Widget for Button {
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Vector2<f32> {
        let content = self.content_size();
        Vector2::new(resolve(width, content.x), resolve(height, content.y))
    }

    fn render(
        &mut self,
        graphics: &mut dyn Graphics,
        layout_node: &LayoutNode,
        _: &mut AppInfo,
        _: AppContext,
    ) {
        let size = layout_node.layout.size;
        let transform = Affine::translate((
            layout_node.layout.location.x as f64,
            layout_node.layout.location.y as f64,
        ));

        let background = RoundedRect::new(
            0.0,
            0.0,
            size.width as f64,
            size.height as f64,
            (CORNER_RADIUS * self.density) as f64,
        );
        self.background
            .draw(graphics, transform, &shape_to_path(&background));

        let descent = self.metrics.descent(&self.text_paint);
        let origin = Point::new(
            (size.width - self.label_width) as f64 / 2.0,
            (size.height + self.text_paint.text_size) as f64 / 2.0 - descent as f64,
        );
        self.metrics
            .draw_text(graphics, &self.label, origin, transform, &self.text_paint);
    }

    fn on_pointer(&mut self, event: &PointerEvent, layout: &LayoutNode, context: &AppContext) -> bool {
        match event.action {
            PointerAction::Down => {
                self.set_state(ButtonState::Pressed);
                true
            },
            PointerAction::Move => true,
            PointerAction::Up => {
                let released = self.state == ButtonState::Pressed && layout.contains(event.position);
                self.set_state(ButtonState::Idle);

                if released {
                    if let Some(source) = &self.source {
                        context.post(UiEvent::Click {
                            source: source.clone(),
                        });
                    }
                }
                true
            },
            // Let other widgets see cancellations too.
            PointerAction::Cancel | PointerAction::Outside => {
                self.set_state(ButtonState::Idle);
                false
            },
            PointerAction::Hover => false,
        }
    }

    fn set_on_click_listener(&mut self, source: &str) -> bool {
        log::debug!("Button '{}' reports clicks as '{}'", self.label, source);
        self.source = Some(source.to_string());
        true
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("framed-widgets", "Button")
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The internal state of the button.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ButtonState {
    /// The button is idling (inactive).
    Idle,
    /// The pointer went down on the button and has not been released yet.
    Pressed,
}
