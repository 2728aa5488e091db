// SPDX-License-Identifier: MIT OR Apache-2.0
use vello::kurbo::{Point, Rect};

pub use taffy::{
    AlignItems, AvailableSpace, Dimension, Display, FlexDirection, Layout, LengthPercentage,
    Size, Style,
};

/// Contains the per-axis measure specifications.
pub mod measure;

pub use measure::{MeasureMode, MeasureSpec};

/// The computed layout of a widget and its children, in absolute window coordinates.
#[derive(Clone, Debug)]
pub struct LayoutNode {
    /// The computed layout.
    pub layout: Layout,
    /// The layouts of the child widgets.
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    /// A childless node at the origin with the given committed size.
    pub fn with_size(width: f32, height: f32) -> Self {
        Self::with_bounds(0.0, 0.0, width, height)
    }

    /// A childless node with the given location and committed size.
    pub fn with_bounds(x: f32, y: f32, width: f32, height: f32) -> Self {
        let mut layout = Layout::new();
        layout.location.x = x;
        layout.location.y = y;
        layout.size.width = width;
        layout.size.height = height;

        Self {
            layout,
            children: Vec::new(),
        }
    }

    /// The node's bounds as a rectangle.
    pub fn bounds(&self) -> Rect {
        let location = self.layout.location;
        let size = self.layout.size;
        Rect::new(
            location.x as f64,
            location.y as f64,
            (location.x + size.width) as f64,
            (location.y + size.height) as f64,
        )
    }

    /// Returns if the point lies within the node's bounds.
    pub fn contains(&self, point: Point) -> bool {
        let bounds = self.bounds();
        point.x >= bounds.x0 && point.x < bounds.x1 && point.y >= bounds.y0 && point.y < bounds.y1
    }
}
