use vello::kurbo::{Affine, BezPath, Stroke};
use vello::peniko::{Brush, Fill};

use crate::vgi::Graphics;

/// A draw call captured by [RecordingGraphics].
#[derive(Clone, Debug)]
pub enum DrawCommand {
    /// A [Graphics::fill] call.
    Fill {
        /// Transform applied to the shape.
        transform: Affine,
        /// Brush used.
        brush: Brush,
        /// The filled shape.
        shape: BezPath,
    },
    /// A [Graphics::stroke] call.
    Stroke {
        /// Stroke style.
        style: Stroke,
        /// Transform applied to the shape.
        transform: Affine,
        /// Brush used.
        brush: Brush,
        /// The stroked shape.
        shape: BezPath,
    },
}

/// A [Graphics] backend that keeps a list of the calls made on it instead of drawing.
///
/// Headless hosts and tests use it to inspect what a widget paints.
#[derive(Clone, Debug, Default)]
pub struct RecordingGraphics {
    /// The recorded calls, in order.
    pub commands: Vec<DrawCommand>,
}

impl RecordingGraphics {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded strokes.
    pub fn strokes(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Stroke { .. }))
    }

    /// All recorded fills.
    pub fn fills(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Fill { .. }))
    }
}

impl Graphics for RecordingGraphics {
    fn fill(
        &mut self,
        _fill_rule: Fill,
        transform: Affine,
        brush: &Brush,
        _brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.commands.push(DrawCommand::Fill {
            transform,
            brush: brush.clone(),
            shape: shape.clone(),
        });
    }

    fn stroke(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: &Brush,
        _brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.commands.push(DrawCommand::Stroke {
            style: style.clone(),
            transform,
            brush: brush.clone(),
            shape: shape.clone(),
        });
    }

    fn as_scene_mut(&mut self) -> Option<&mut vello::Scene> {
        None
    }
}
