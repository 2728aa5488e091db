use nalgebra::Vector2;

use crate::input::PointerEvent;

/// The application information container.
pub struct AppInfo {
    /// Pointer events received since the last frame.
    pub pointer_events: Vec<PointerEvent>,
    /// The size of the window.
    pub size: Vector2<f64>,
    /// Number of frames run so far.
    pub frame: u64,
}

impl AppInfo {
    /// Reset the application information for a new frame.
    pub fn reset(&mut self) {
        self.pointer_events.clear();
    }
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            pointer_events: Vec::with_capacity(4),
            size: Vector2::new(0.0, 0.0),
            frame: 0,
        }
    }
}
