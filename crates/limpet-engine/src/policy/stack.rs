//! Stack policy: same-edge elements queue behind one another.

use super::{PolicyInput, StickyOutput, VisualEffects};

/// Pins a sticking element flush against its cumulative threshold.
///
/// The threshold already incorporates the extents of every other same-edge
/// frame positioned before this one, so multiple sticking elements tile the
/// edge without an explicit collision search.
pub(super) fn evaluate(input: &PolicyInput<'_>) -> StickyOutput {
    let threshold = input.stack_threshold();
    if !input.is_sticking(threshold) {
        return StickyOutput::default();
    }

    StickyOutput {
        is_sticking: true,
        overlays: true,
        offset: input.offset_point(input.pin_offset(threshold)),
        effects: VisualEffects::IDENTITY,
    }
}
