// SPDX-License-Identifier: MIT OR Apache-2.0
use taffy::AvailableSpace;

/// How a parent constrains one axis of a child during measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureMode {
    /// No constraint; the child may be as large as it wants.
    Unspecified,
    /// The child may be at most the given size.
    AtMost,
    /// The child must be exactly the given size.
    Exactly,
}

/// A measure constraint for one axis: a mode and the size it refers to.
///
/// The size is meaningless for [MeasureMode::Unspecified].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureSpec {
    /// The constraint mode.
    pub mode: MeasureMode,
    /// The imposed size, in pixels.
    pub size: f32,
}

impl MeasureSpec {
    /// An unconstrained axis.
    pub fn unspecified() -> Self {
        Self {
            mode: MeasureMode::Unspecified,
            size: 0.0,
        }
    }

    /// An axis bounded by `size`.
    pub fn at_most(size: f32) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    /// An axis fixed to `size`.
    pub fn exactly(size: f32) -> Self {
        Self {
            mode: MeasureMode::Exactly,
            size,
        }
    }

    /// Translate taffy's view of an axis into a measure spec.
    ///
    /// A known dimension fixes the size; definite available space bounds it;
    /// min/max-content sizing leaves it unconstrained.
    pub fn from_taffy(known: Option<f32>, available: AvailableSpace) -> Self {
        if let Some(size) = known {
            return Self::exactly(size);
        }

        match available {
            AvailableSpace::Definite(size) => Self::at_most(size),
            AvailableSpace::MinContent | AvailableSpace::MaxContent => Self::unspecified(),
        }
    }

    /// Bound an unconstrained axis by `size`; constrained axes are kept.
    pub fn or_at_most(self, size: f32) -> Self {
        match self.mode {
            MeasureMode::Unspecified => Self::at_most(size),
            MeasureMode::AtMost | MeasureMode::Exactly => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_taffy() {
        assert_eq!(
            MeasureSpec::from_taffy(Some(40.0), AvailableSpace::Definite(100.0)),
            MeasureSpec::exactly(40.0)
        );
        assert_eq!(
            MeasureSpec::from_taffy(None, AvailableSpace::Definite(100.0)),
            MeasureSpec::at_most(100.0)
        );
        assert_eq!(
            MeasureSpec::from_taffy(None, AvailableSpace::MaxContent).mode,
            MeasureMode::Unspecified
        );
        assert_eq!(
            MeasureSpec::from_taffy(None, AvailableSpace::MinContent).mode,
            MeasureMode::Unspecified
        );
    }

    #[test]
    fn test_or_at_most_bounds_content_sizing() {
        let content = MeasureSpec::from_taffy(None, AvailableSpace::MaxContent).or_at_most(640.0);
        assert_eq!(content, MeasureSpec::at_most(640.0));

        assert_eq!(
            MeasureSpec::exactly(40.0).or_at_most(640.0),
            MeasureSpec::exactly(40.0)
        );
        assert_eq!(
            MeasureSpec::at_most(100.0).or_at_most(640.0),
            MeasureSpec::at_most(100.0)
        );
    }
}
