//! Collapse policy: every following element compresses the pinned one.

use super::{overlays_previous, PolicyInput, StickyOutput, VisualEffects};
use limpet_geometry::Edge;

/// Like Fade, but the fade amount accumulates the overlap of *all*
/// qualifying next same-edge frames, and the accumulated amount pushes the
/// element past its edge (scaled asymmetrically per edge) instead of only
/// shrinking it in place. The divisors and shift factors come from the
/// input's [`CollapseTuning`](super::CollapseTuning).
pub(super) fn evaluate(input: &PolicyInput<'_>) -> StickyOutput {
    let threshold = input.edge_threshold();
    if !input.is_sticking(threshold) {
        return StickyOutput {
            overlays: overlays_previous(input),
            ..StickyOutput::default()
        };
    }

    let fade_amount = collapse_amount(input, threshold);
    let tuning = input.collapse_tuning;

    let pin = input.pin_offset(threshold);
    let offset = match input.edge {
        Edge::Starting => pin - fade_amount * tuning.starting_shift,
        Edge::Ending => pin + fade_amount * tuning.ending_shift,
    };

    StickyOutput {
        is_sticking: true,
        overlays: overlays_previous(input),
        offset: input.offset_point(offset),
        effects: VisualEffects {
            scale: (1.0 - fade_amount / tuning.scale_divisor).max(0.0),
            brightness: fade_amount / tuning.brightness_divisor,
            blur: fade_amount / tuning.blur_divisor,
        },
    }
}

/// Combined overlap of all qualifying next same-edge frames: each
/// contributes its extent minus its clearance past the threshold, floored
/// at zero. A frame still more than its own extent away contributes nothing.
fn collapse_amount(input: &PolicyInput<'_>, threshold: f32) -> f32 {
    input
        .next_frames()
        .map(|next| {
            let clearance = match input.edge {
                Edge::Starting => next.min_along(input.axis) - threshold,
                Edge::Ending => threshold - next.max_along(input.axis),
            };
            (next.extent_along(input.axis) - clearance).max(0.0)
        })
        .sum()
}
