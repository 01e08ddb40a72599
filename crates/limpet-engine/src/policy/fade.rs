//! Fade policy: the pinned element shrinks and fades as the next one covers it.

use super::{overlays_previous, PolicyInput, StickyOutput, VisualEffects};
use limpet_geometry::Edge;

/// Pins a sticking element at the container edge and derives a fade amount
/// from how far the next same-edge frame already reaches into the pinned
/// extent. The element shrinks toward its sticking edge (not its center),
/// darkening and blurring in proportion.
pub(super) fn evaluate(input: &PolicyInput<'_>) -> StickyOutput {
    let threshold = input.edge_threshold();
    if !input.is_sticking(threshold) {
        return StickyOutput {
            overlays: overlays_previous(input),
            ..StickyOutput::default()
        };
    }

    let extent = input.extent();
    let fade_amount = fade_amount(input, threshold, extent);

    // Half-extent normalization: fully faded once the next frame has covered
    // half of this element.
    let ratio = if extent > 0.0 {
        fade_amount / (2.0 * extent)
    } else {
        0.0
    };
    let scale = (1.0 - ratio).max(0.0);

    // Scaling happens about the element's center; shift it back so the
    // sticking edge stays glued to the threshold.
    let recenter = (extent - extent * scale) / 2.0;
    let pin = input.pin_offset(threshold);
    let offset = match input.edge {
        Edge::Starting => pin - recenter,
        Edge::Ending => pin + recenter,
    };

    StickyOutput {
        is_sticking: true,
        overlays: overlays_previous(input),
        offset: input.offset_point(offset),
        effects: VisualEffects {
            scale,
            brightness: ratio,
            blur: ratio,
        },
    }
}

/// How much the nearest next same-edge frame already overlaps this element
/// once it is pinned at `threshold`. Zero when no next frame has reached
/// the pinned extent yet.
fn fade_amount(input: &PolicyInput<'_>, threshold: f32, extent: f32) -> f32 {
    let Some(next) = input.next_frame() else {
        return 0.0;
    };
    match input.edge {
        Edge::Starting => {
            let pinned_max = threshold + extent;
            (pinned_max - next.min_along(input.axis)).max(0.0)
        }
        Edge::Ending => {
            let pinned_min = threshold - extent;
            (next.max_along(input.axis) - pinned_min).max(0.0)
        }
    }
}
