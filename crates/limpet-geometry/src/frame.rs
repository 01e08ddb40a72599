//! The frame record a sticky element reports to its container's registry.

use crate::{Axis, Edge, Rect};

/// A sticky element's measured rectangle plus the edge it targets.
///
/// One per registered sticky element. Created when the element first
/// measures its geometry, replaced wholesale on every geometry change,
/// and removed when the element unregisters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickyFrame {
    pub rect: Rect,
    pub edge: Edge,
}

impl StickyFrame {
    pub const fn new(rect: Rect, edge: Edge) -> Self {
        Self { rect, edge }
    }

    /// The leading coordinate of this frame along the given axis.
    pub fn min_along(&self, axis: Axis) -> f32 {
        self.rect.min_along(axis)
    }

    /// The trailing coordinate of this frame along the given axis.
    pub fn max_along(&self, axis: Axis) -> f32 {
        self.rect.max_along(axis)
    }

    /// The length of this frame along the given axis.
    pub fn extent_along(&self, axis: Axis) -> f32 {
        self.rect.extent_along(axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn along_axis_accessors_follow_the_axis() {
        let frame = StickyFrame::new(Rect::new(10.0, 20.0, 30.0, 40.0), Edge::Starting);
        assert_eq!(frame.min_along(Axis::Vertical), 20.0);
        assert_eq!(frame.max_along(Axis::Vertical), 60.0);
        assert_eq!(frame.extent_along(Axis::Vertical), 40.0);
        assert_eq!(frame.min_along(Axis::Horizontal), 10.0);
        assert_eq!(frame.max_along(Axis::Horizontal), 40.0);
        assert_eq!(frame.extent_along(Axis::Horizontal), 30.0);
    }
}
