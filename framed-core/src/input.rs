use vello::kurbo::Point;

/// What happened to a pointer (finger, stylus or mouse).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// Contact started.
    Down,
    /// Contact moved.
    Move,
    /// Contact ended.
    Up,
    /// The gesture was aborted by the host.
    Cancel,
    /// Something happened outside the bounds of the receiving widget.
    Outside,
    /// The pointer moved without contact.
    Hover,
}

/// A pointer event in window coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// The kind of event.
    pub action: PointerAction,
    /// Position in window coordinates.
    pub position: Point,
}

impl PointerEvent {
    /// Create a new pointer event.
    pub fn new(action: PointerAction, position: impl Into<Point>) -> Self {
        Self {
            action,
            position: position.into(),
        }
    }

    /// Returns if the event is delivered regardless of where the pointer is.
    pub fn is_broadcast(&self) -> bool {
        matches!(self.action, PointerAction::Cancel | PointerAction::Outside)
    }
}
