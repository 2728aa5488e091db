use std::any::Any;

use framed_core::app::context::AppContext;
use framed_core::app::info::AppInfo;
use framed_core::app::update::{Update, UpdateManager};
use framed_core::attrs::AttributeSet;
use framed_core::input::{PointerAction, PointerEvent};
use framed_core::layout::{LayoutNode, MeasureMode, MeasureSpec};
use framed_core::text_render::{TextMetrics, TextRenderContext};
use framed_core::vg::kurbo::{Affine, Point, RoundedRect};
use framed_core::vg::peniko::Color;
use framed_core::vgi::paint::{Paint, PaintStyle};
use framed_core::vgi::{shape_to_path, Graphics};
use framed_core::widget::Widget;
use framed_theme::id::WidgetId;
use nalgebra::Vector2;

/// Text shown when none is configured.
pub const DEFAULT_TEXT: &str = "Hello Big World!";

/// Text size in density-independent units when none is configured.
pub const DEFAULT_TEXT_SIZE: f32 = 24.0;

/// Corner radius in density-independent units when none is configured.
pub const DEFAULT_BORDER_RADIUS: f32 = 10.0;

/// Size reported for an unconstrained axis.
const UNSPECIFIED_SIZE: f32 = 100.0;

/// A single line of text, centered inside a rounded-rectangle border.
///
/// ### Attributes
/// - `text` - The text to show. Defaults to [DEFAULT_TEXT].
/// - `textSize` - The text size in density-independent units. Defaults to [DEFAULT_TEXT_SIZE].
/// - `borderColor` - The border color, as `#RRGGBB`/`#AARRGGBB` or a packed `0xAARRGGBB`
///   integer. Defaults to the palette's border color.
/// - `borderRadius` - The corner radius in density-independent units.
///   Defaults to [DEFAULT_BORDER_RADIUS].
///
/// Missing or malformed attributes fall back to their defaults.
///
/// ### Measuring
/// The width wraps the text (never exceeding an upper bound); the height wraps the text size.
/// Unconstrained axes measure [UNSPECIFIED_SIZE] pixels.
pub struct TextBox {
    text: String,
    text_size: f32,
    border_color: Color,
    border_radius: f32,
    border_width: f32,
    density: f32,
    text_width: f32,
    resolved_border_radius: f32,
    text_paint: Paint,
    border_paint: Paint,
    metrics: Box<dyn TextMetrics>,
    update: UpdateManager,
}

impl TextBox {
    /// Create a text box with default configuration.
    pub fn new(context: &AppContext) -> Self {
        Self::from_attributes(context, &AttributeSet::new())
    }

    /// Create a text box configured by the given attributes.
    pub fn from_attributes(context: &AppContext, attrs: &AttributeSet) -> Self {
        Self::with_text_metrics(context, attrs, Box::new(TextRenderContext::new()))
    }

    /// Create a text box that measures and draws its text with `metrics`.
    pub fn with_text_metrics(
        context: &AppContext,
        attrs: &AttributeSet,
        metrics: Box<dyn TextMetrics>,
    ) -> Self {
        let palette = context.palette();
        let density = context.display().density;

        let text = attrs.string("text").unwrap_or_else(|| {
            log::debug!("No text configured, using default");
            DEFAULT_TEXT.to_string()
        });
        let text_size = attrs.float("textSize").unwrap_or_else(|| {
            log::debug!("No text size configured, using {}", DEFAULT_TEXT_SIZE);
            DEFAULT_TEXT_SIZE
        });
        let border_color = attrs.color("borderColor").unwrap_or_else(|| {
            log::debug!("No border color configured, using palette border");
            palette.border
        });
        let border_radius = attrs.float("borderRadius").unwrap_or_else(|| {
            log::debug!("No border radius configured, using {}", DEFAULT_BORDER_RADIUS);
            DEFAULT_BORDER_RADIUS
        });

        let mut text_paint = Paint::new();
        text_paint.set_style(PaintStyle::Fill);
        text_paint.set_color(palette.text);
        text_paint.set_text_size(text_size * density);

        let mut widget = Self {
            text,
            text_size,
            border_color,
            border_radius,
            border_width: 0.0,
            density,
            text_width: 0.0,
            resolved_border_radius: 0.0,
            text_paint,
            border_paint: Paint::new(),
            metrics,
            update: context.update().clone(),
        };

        widget.measure_text();

        widget.border_paint.set_style(PaintStyle::Stroke);
        widget.border_paint.set_color(widget.border_color);
        widget.border_paint.set_stroke_width(widget.border_width);

        widget.resolved_border_radius = widget.border_radius * density;

        widget
    }

    /// Replace the text, then request a layout and a repaint.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.measure_text();
        self.update.insert(Update::LAYOUT | Update::DRAW);
    }

    /// The text shown.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the text size in density-independent units, then request a layout and a repaint.
    ///
    /// The size is not validated.
    pub fn set_text_size(&mut self, size: f32) {
        self.text_size = size;
        self.text_paint.set_text_size(size * self.density);
        self.measure_text();
        self.update.insert(Update::LAYOUT | Update::DRAW);
    }

    /// The text size in density-independent units.
    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    /// The text size in pixels.
    pub fn resolved_text_size(&self) -> f32 {
        self.text_paint.text_size
    }

    /// The advance width of the text in pixels.
    pub fn text_width(&self) -> f32 {
        self.text_width
    }

    /// The border color.
    pub fn border_color(&self) -> Color {
        self.border_color
    }

    /// The corner radius in density-independent units.
    pub fn border_radius(&self) -> f32 {
        self.border_radius
    }

    /// The corner radius in pixels.
    pub fn resolved_border_radius(&self) -> f32 {
        self.resolved_border_radius
    }

    /// The border stroke width in density-independent units.
    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    fn measure_text(&mut self) {
        self.text_width = self.metrics.measure_text(&self.text, &self.text_paint);
    }

    fn resolve_density(&mut self, density: f32) {
        self.density = density;
        self.text_paint.set_text_size(self.text_size * density);
        self.resolved_border_radius = self.border_radius * density;
        self.measure_text();
    }
}

impl Widget for TextBox {
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Vector2<f32> {
        let measured_width = match width.mode {
            MeasureMode::Exactly => {
                log::debug!("Width is exactly {}", width.size);
                width.size
            },
            MeasureMode::AtMost => {
                log::debug!("Width is at most {}", width.size);
                width.size.min(self.text_width.ceil())
            },
            MeasureMode::Unspecified => {
                log::debug!("Width is unspecified");
                UNSPECIFIED_SIZE
            },
        };

        let measured_height = match height.mode {
            MeasureMode::Exactly => {
                log::debug!("Height is exactly {}", height.size);
                height.size
            },
            MeasureMode::AtMost => {
                log::debug!("Height is at most {}", height.size);
                self.resolved_text_size().ceil()
            },
            MeasureMode::Unspecified => {
                log::debug!("Height is unspecified");
                UNSPECIFIED_SIZE
            },
        };

        Vector2::new(measured_width, measured_height)
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

        let center = Point::new(size.width as f64 / 2.0, size.height as f64 / 2.0);
        let descent = self.metrics.descent(&self.text_paint);
        let origin = Point::new(
            center.x - self.text_width as f64 / 2.0,
            center.y + self.resolved_text_size() as f64 / 2.0 - descent as f64,
        );

        self.metrics
            .draw_text(graphics, &self.text, origin, transform, &self.text_paint);

        // Inset so the right and bottom edges are not clipped by antialiasing.
        let border = RoundedRect::new(
            0.0,
            0.0,
            size.width as f64 - 0.5,
            size.height as f64 - 0.5,
            self.resolved_border_radius as f64,
        );

        self.border_paint
            .draw(graphics, transform, &shape_to_path(&border));
    }

    fn update(&mut self, _: &LayoutNode, context: AppContext, _: &mut AppInfo) -> Update {
        let density = context.display().density;
        if density == self.density {
            return Update::empty();
        }

        log::debug!("Density changed from {} to {}", self.density, density);
        self.resolve_density(density);

        Update::LAYOUT | Update::DRAW
    }

    fn on_pointer(&mut self, event: &PointerEvent, _: &LayoutNode, _: &AppContext) -> bool {
        match event.action {
            PointerAction::Down
            | PointerAction::Move
            | PointerAction::Up
            | PointerAction::Cancel
            | PointerAction::Outside => true,
            _ => false,
        }
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("framed-widgets", "TextBox")
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
