use vello::kurbo::{Affine, BezPath, Stroke};
use vello::peniko::{Brush, Fill};
use vello::Scene;

use crate::vgi::Graphics;

/// Draws straight into a borrowed [Scene].
pub struct VelloGraphics<'a> {
    scene: &'a mut Scene,
}

impl<'a> VelloGraphics<'a> {
    /// Draw into `scene` on top of what it already holds.
    pub fn new(scene: &'a mut Scene) -> Self {
        Self { scene }
    }
}

impl Graphics for VelloGraphics<'_> {
    fn fill(
        &mut self,
        fill_rule: Fill,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.scene
            .fill(fill_rule, transform, brush, brush_transform, shape);
    }

    fn stroke(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.scene
            .stroke(style, transform, brush, brush_transform, shape);
    }

    fn as_scene_mut(&mut self) -> Option<&mut Scene> {
        Some(self.scene)
    }
}

#[cfg(test)]
mod tests {
    use vello::kurbo::Rect;
    use vello::peniko::Color;

    use super::*;
    use crate::vgi::shape_to_path;

    #[test]
    fn test_exposes_scene_for_glyphs() {
        let mut scene = Scene::new();
        let mut graphics = VelloGraphics::new(&mut scene);

        graphics.stroke(
            &Stroke::new(1.0),
            Affine::IDENTITY,
            &Brush::Solid(Color::from_rgb8(0, 0, 255)),
            None,
            &shape_to_path(&Rect::new(0.0, 0.0, 10.0, 10.0)),
        );

        assert!(graphics.as_scene_mut().is_some());
    }
}
