//! Vector Graphics Interface abstraction.
//!
//! Widgets draw through the [Graphics] trait so they stay decoupled from the
//! concrete backend ([vello_vg::VelloGraphics] by default).

use vello::kurbo::{Affine, BezPath, Shape, Stroke};
use vello::peniko::{Brush, Fill};

/// A trait for rendering vector graphics.
///
/// Note: Methods use `&BezPath` for object-safety. To use concrete shape types
/// (Rect, RoundedRect, Line, etc.), convert them with [shape_to_path].
pub trait Graphics {
    /// Fill a shape with the given brush.
    fn fill(
        &mut self,
        fill_rule: Fill,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    );

    /// Stroke a shape with the given brush.
    fn stroke(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    );

    /// Access the underlying Scene for operations that require it (e.g., glyph runs).
    /// Returns None if the graphics backend doesn't provide Scene access.
    fn as_scene_mut(&mut self) -> Option<&mut vello::Scene>;
}

/// Helper function to convert a shape to BezPath for use with Graphics trait.
pub fn shape_to_path(shape: &impl Shape) -> BezPath {
    shape.to_path(0.1)
}

/// A default graphics implementation using Vello.
pub mod vello_vg;

/// Contains the [Paint](paint::Paint) style object.
pub mod paint;

/// A [Graphics] implementation that records draw calls.
pub mod recording;
