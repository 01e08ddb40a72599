//! Tap-to-scroll target computation.

use crate::ScrollState;
use limpet_geometry::{Axis, Edge, Point, StickyFrame};

/// Computes the point the container should scroll to so the element's
/// sticking boundary lands exactly at `threshold`.
///
/// Pure function: invoking it does not scroll. The cross-axis component of
/// the returned point is the current content offset, unchanged.
///
/// For a starting edge the element's leading boundary aligns with the
/// threshold; for an ending edge the element's own extent is added so its
/// trailing boundary aligns instead.
pub fn scroll_target_for(
    frame: &StickyFrame,
    axis: Axis,
    threshold: f32,
    scroll: &ScrollState,
) -> Point {
    let offset = scroll.offset();
    let inset = scroll.content_insets().leading_along(axis);

    let along = match frame.edge {
        Edge::Starting => frame.min_along(axis) + offset.along(axis) - threshold + inset,
        Edge::Ending => {
            frame.max_along(axis) + offset.along(axis) - threshold
                + inset
                + frame.extent_along(axis)
        }
    };

    offset.with_along(axis, along)
}
