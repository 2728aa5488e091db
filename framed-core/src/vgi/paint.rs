use vello::kurbo::{Affine, BezPath, Stroke};
use vello::peniko::{Brush, Color, Fill};

use crate::vgi::Graphics;

/// Whether a [Paint] fills shapes or only outlines them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PaintStyle {
    /// Fill the interior.
    Fill,
    /// Stroke the outline; the interior is left untouched.
    Stroke,
}

/// Style state for drawing shapes and text.
///
/// Widgets create their paints once and reuse them for every frame, mutating
/// them only when their configuration changes.
#[derive(Clone, Debug)]
pub struct Paint {
    /// The brush used to fill or stroke.
    pub brush: Brush,
    /// Fill or stroke.
    pub style: PaintStyle,
    /// Stroke parameters, used when [PaintStyle::Stroke] is set.
    pub stroke: Stroke,
    /// Font size in pixels, used for text.
    pub text_size: f32,
}

impl Paint {
    /// Create a solid black fill paint.
    pub fn new() -> Self {
        Self {
            brush: Brush::Solid(Color::from_rgb8(0, 0, 0)),
            style: PaintStyle::Fill,
            stroke: Stroke::new(0.0),
            text_size: 12.0,
        }
    }

    /// Fill or stroke `shape`, depending on the paint style.
    pub fn draw(&self, graphics: &mut dyn Graphics, transform: Affine, shape: &BezPath) {
        match self.style {
            PaintStyle::Fill => graphics.fill(Fill::NonZero, transform, &self.brush, None, shape),
            PaintStyle::Stroke => graphics.stroke(&self.stroke, transform, &self.brush, None, shape),
        }
    }

    /// Set a solid color.
    pub fn set_color(&mut self, color: Color) {
        self.brush = Brush::Solid(color);
    }

    /// The solid color of the paint, if it uses one.
    pub fn color(&self) -> Option<Color> {
        match &self.brush {
            Brush::Solid(color) => Some(*color),
            _ => None,
        }
    }

    /// Set the paint style.
    pub fn set_style(&mut self, style: PaintStyle) {
        self.style = style;
    }

    /// Set the stroke width in pixels.
    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke.width = width as f64;
    }

    /// The stroke width in pixels.
    pub fn stroke_width(&self) -> f32 {
        self.stroke.width as f32
    }

    /// Set the font size in pixels.
    pub fn set_text_size(&mut self, size: f32) {
        self.text_size = size;
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use vello::kurbo::Rect;

    use super::*;
    use crate::vgi::recording::{DrawCommand, RecordingGraphics};
    use crate::vgi::shape_to_path;

    #[test]
    fn test_draw_follows_style() {
        let shape = shape_to_path(&Rect::new(0.0, 0.0, 20.0, 10.0));
        let mut graphics = RecordingGraphics::new();
        let mut paint = Paint::new();

        paint.draw(&mut graphics, Affine::IDENTITY, &shape);

        paint.set_style(PaintStyle::Stroke);
        paint.set_stroke_width(2.0);
        paint.draw(&mut graphics, Affine::IDENTITY, &shape);

        assert_eq!(graphics.fills().count(), 1);
        match &graphics.commands[1] {
            DrawCommand::Stroke { style, .. } => assert_eq!(style.width, 2.0),
            other => panic!("expected a stroke, got {:?}", other),
        }
    }
}
