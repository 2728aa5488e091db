// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text measurement and rendering.
//!
//! Widgets talk to text through the [TextMetrics] trait. [TextRenderContext] is the
//! real implementation, backed by Parley and the system fonts;
//! [FixedAdvanceMetrics] gives deterministic metrics without fonts.

use std::cell::RefCell;
use std::rc::Rc;

use parley::fontique::{Collection, CollectionOptions};
use parley::{Alignment, FontContext, Layout, LayoutContext, StyleProperty};
use vello::kurbo::{Affine, Point};
use vello::peniko::{Brush, Fill};

use crate::vgi::paint::Paint;
use crate::vgi::Graphics;

/// Brush index type for Parley integration
#[derive(Clone, PartialEq, Default, Debug)]
pub struct BrushIndex(pub usize);

/// Text metrics and drawing, as used by widgets.
pub trait TextMetrics {
    /// The advance width of `text` when drawn with `paint`, in pixels.
    fn measure_text(&mut self, text: &str, paint: &Paint) -> f32;

    /// How far glyphs of the paint's font reach below the baseline, in pixels (positive).
    fn descent(&mut self, paint: &Paint) -> f32;

    /// Draw `text` with its baseline starting at `origin`, in the space given by `transform`.
    fn draw_text(
        &mut self,
        graphics: &mut dyn Graphics,
        text: &str,
        origin: Point,
        transform: Affine,
        paint: &Paint,
    );
}

/// Text rendering context that manages font and layout contexts
pub struct TextRenderContext {
    font_cx: FontContext,
    layout_cx: LayoutContext<BrushIndex>,
}

impl TextRenderContext {
    /// Create a new text rendering context with the system fonts.
    pub fn new() -> Self {
        let font_cx = FontContext {
            collection: Collection::new(CollectionOptions {
                system_fonts: true,
                ..Default::default()
            }),
            source_cache: Default::default(),
        };

        Self {
            font_cx,
            layout_cx: LayoutContext::new(),
        }
    }

    /// Shape a single unwrapped line of text.
    fn layout(&mut self, text: &str, font_size: f32) -> Layout<BrushIndex> {
        let display_scale = 1.0;
        let mut builder = self
            .layout_cx
            .ranged_builder(&mut self.font_cx, text, display_scale, true);

        builder.push_default(StyleProperty::FontSize(font_size));

        let mut layout = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, Alignment::Start, Default::default());

        layout
    }
}

impl TextMetrics for TextRenderContext {
    fn measure_text(&mut self, text: &str, paint: &Paint) -> f32 {
        if text.is_empty() {
            return 0.0;
        }

        let layout = self.layout(text, paint.text_size);

        let mut total_width = 0.0;
        for line in layout.lines() {
            for item in line.items() {
                let parley::PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };

                for glyph in glyph_run.glyphs() {
                    total_width += glyph.advance;
                }
            }
        }

        total_width
    }

    fn descent(&mut self, paint: &Paint) -> f32 {
        // Any non-empty sample yields the font's line metrics.
        let layout = self.layout("Hg", paint.text_size);
        let descent = layout
            .lines()
            .next()
            .map(|line| line.metrics().descent)
            .unwrap_or(0.0);
        descent
    }

    fn draw_text(
        &mut self,
        graphics: &mut dyn Graphics,
        text: &str,
        origin: Point,
        transform: Affine,
        paint: &Paint,
    ) {
        if text.is_empty() {
            return;
        }

        let layout = self.layout(text, paint.text_size);

        let Some(scene) = graphics.as_scene_mut() else {
            log::debug!("Graphics backend has no scene, skipping text '{}'", text);
            return;
        };

        let Some(first_line) = layout.lines().next() else {
            log::warn!("Could not render text '{}' - no suitable font available", text);
            return;
        };

        // Parley positions glyphs relative to the layout's top edge.
        let baseline = first_line.metrics().baseline as f64;
        let transform = transform * Affine::translate((origin.x, origin.y - baseline));

        render_layout(scene, &layout, &paint.brush, transform, false);
    }
}

impl Default for TextRenderContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Several widgets can share one set of metrics, e.g. a single [TextRenderContext]
/// and its font collection.
impl<M: TextMetrics> TextMetrics for Rc<RefCell<M>> {
    fn measure_text(&mut self, text: &str, paint: &Paint) -> f32 {
        self.borrow_mut().measure_text(text, paint)
    }

    fn descent(&mut self, paint: &Paint) -> f32 {
        self.borrow_mut().descent(paint)
    }

    fn draw_text(
        &mut self,
        graphics: &mut dyn Graphics,
        text: &str,
        origin: Point,
        transform: Affine,
        paint: &Paint,
    ) {
        self.borrow_mut()
            .draw_text(graphics, text, origin, transform, paint);
    }
}

/// Render a Parley layout to the scene with a single brush.
fn render_layout(
    scene: &mut vello::Scene,
    layout: &Layout<BrushIndex>,
    brush: &Brush,
    transform: Affine,
    hint: bool,
) {
    for line in layout.lines() {
        for item in line.items() {
            let parley::PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                continue;
            };

            let mut x = glyph_run.offset();
            let y = glyph_run.baseline();
            let run = glyph_run.run();
            let font = run.font();
            let font_size = run.font_size();
            let synthesis = run.synthesis();
            let glyph_xform = synthesis
                .skew()
                .map(|angle| Affine::skew(angle.to_radians().tan() as f64, 0.0));
            let coords = run.normalized_coords();

            scene
                .draw_glyphs(font)
                .brush(brush)
                .hint(hint)
                .transform(transform)
                .glyph_transform(glyph_xform)
                .font_size(font_size)
                .normalized_coords(coords)
                .draw(
                    Fill::NonZero,
                    glyph_run.glyphs().map(|glyph| {
                        let gx = x + glyph.x;
                        let gy = y - glyph.y;
                        x += glyph.advance;
                        vello::Glyph {
                            id: glyph.id as _,
                            x: gx,
                            y: gy,
                        }
                    }),
                );
        }
    }
}

/// A text draw captured by [FixedAdvanceMetrics].
#[derive(Clone, Debug, PartialEq)]
pub struct DrawnText {
    /// The text drawn.
    pub text: String,
    /// Baseline start, before `transform`.
    pub origin: Point,
    /// Transform the text was drawn with.
    pub transform: Affine,
    /// Font size in pixels.
    pub text_size: f32,
}

/// Font-free text metrics: every character advances by the same fraction of the font size.
///
/// Text is not rasterized; draws are logged instead and can be inspected through
/// the handle returned by [FixedAdvanceMetrics::drawn].
#[derive(Clone, Debug)]
pub struct FixedAdvanceMetrics {
    advance: f32,
    descent: f32,
    drawn: Rc<RefCell<Vec<DrawnText>>>,
}

impl FixedAdvanceMetrics {
    /// Create metrics where each character is `advance × size` wide and the
    /// descent is `descent × size`.
    pub fn new(advance: f32, descent: f32) -> Self {
        Self {
            advance,
            descent,
            drawn: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Shared handle to the log of drawn text.
    pub fn drawn(&self) -> Rc<RefCell<Vec<DrawnText>>> {
        self.drawn.clone()
    }
}

impl Default for FixedAdvanceMetrics {
    fn default() -> Self {
        Self::new(0.5, 0.25)
    }
}

impl TextMetrics for FixedAdvanceMetrics {
    fn measure_text(&mut self, text: &str, paint: &Paint) -> f32 {
        text.chars().count() as f32 * self.advance * paint.text_size
    }

    fn descent(&mut self, paint: &Paint) -> f32 {
        self.descent * paint.text_size
    }

    fn draw_text(
        &mut self,
        _graphics: &mut dyn Graphics,
        text: &str,
        origin: Point,
        transform: Affine,
        paint: &Paint,
    ) {
        self.drawn.borrow_mut().push(DrawnText {
            text: text.to_string(),
            origin,
            transform,
            text_size: paint.text_size,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vgi::recording::RecordingGraphics;

    #[test]
    fn test_fixed_advance_metrics() {
        let mut metrics = FixedAdvanceMetrics::new(0.5, 0.25);
        let mut paint = Paint::new();
        paint.set_text_size(20.0);

        assert_eq!(metrics.measure_text("Hello", &paint), 50.0);
        assert_eq!(metrics.measure_text("", &paint), 0.0);
        assert_eq!(metrics.descent(&paint), 5.0);
    }

    #[test]
    fn test_fixed_advance_logs_draws() {
        let mut metrics = FixedAdvanceMetrics::default();
        let drawn = metrics.drawn();
        let mut graphics = RecordingGraphics::new();

        metrics.draw_text(
            &mut graphics,
            "Hi",
            Point::new(3.0, 4.0),
            Affine::IDENTITY,
            &Paint::default(),
        );

        let drawn = drawn.borrow();
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].text, "Hi");
        assert_eq!(drawn[0].origin, Point::new(3.0, 4.0));
        assert!(graphics.commands.is_empty());
    }

    #[test]
    fn test_shared_metrics() {
        let shared = Rc::new(RefCell::new(FixedAdvanceMetrics::new(0.5, 0.25)));
        let mut first: Box<dyn TextMetrics> = Box::new(shared.clone());
        let mut second: Box<dyn TextMetrics> = Box::new(shared.clone());
        let mut graphics = RecordingGraphics::new();
        let paint = Paint::default();

        assert_eq!(first.measure_text("abcd", &paint), 24.0);
        first.draw_text(&mut graphics, "a", Point::ZERO, Affine::IDENTITY, &paint);
        second.draw_text(&mut graphics, "b", Point::ZERO, Affine::IDENTITY, &paint);

        assert_eq!(shared.borrow().drawn().borrow().len(), 2);
    }

    #[test]
    fn test_empty_text_measures_zero() {
        let mut context = TextRenderContext::new();
        assert_eq!(context.measure_text("", &Paint::default()), 0.0);
    }
}
