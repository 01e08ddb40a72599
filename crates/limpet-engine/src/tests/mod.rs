mod engine_tests;
mod tap_tests;

use crate::policy::{CollapseTuning, PolicyInput};
use limpet_geometry::{Axis, Edge, Rect, StickyFrame};

/// A vertical-axis policy input with an 800pt container and no safe-area
/// inset; the fixture the policy tests share.
pub(crate) fn vertical_input<'a>(
    edge: Edge,
    rect: Rect,
    others: &'a [StickyFrame],
) -> PolicyInput<'a> {
    PolicyInput {
        axis: Axis::Vertical,
        edge,
        rect,
        safe_area_inset: 0.0,
        container_end: 800.0,
        others,
        collapse_tuning: CollapseTuning::default(),
    }
}

/// A starting-edge frame at the given y with the given height, full width.
pub(crate) fn top_frame(y: f32, height: f32) -> StickyFrame {
    StickyFrame::new(Rect::new(0.0, y, 320.0, height), Edge::Starting)
}

/// An ending-edge frame at the given y with the given height, full width.
pub(crate) fn bottom_frame(y: f32, height: f32) -> StickyFrame {
    StickyFrame::new(Rect::new(0.0, y, 320.0, height), Edge::Ending)
}
