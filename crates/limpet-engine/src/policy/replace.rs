//! Replace policy: the incoming element shoves the pinned one out of the way.

use super::{PolicyInput, StickyOutput, VisualEffects};
use limpet_geometry::Edge;

/// Pins a sticking element exactly at the container edge, unless a nearer
/// same-edge frame further along the stacking direction would be overlapped
/// once this element is pinned; in that case the offset is reduced so this
/// element sits flush against the competitor's leading boundary and is
/// pushed off-screen as the competitor approaches the edge.
pub(super) fn evaluate(input: &PolicyInput<'_>) -> StickyOutput {
    let threshold = input.edge_threshold();
    if !input.is_sticking(threshold) {
        return StickyOutput::default();
    }

    let extent = input.extent();
    let offset = match input.edge {
        Edge::Starting => {
            let pinned_max = threshold + extent;
            // Nearest same-edge frame below us whose leading boundary falls
            // inside our pinned extent.
            let competitor = input
                .next_frames()
                .map(|other| other.min_along(input.axis))
                .filter(|other_min| *other_min < pinned_max)
                .min_by(f32::total_cmp);
            match competitor {
                Some(other_min) => other_min - extent - input.min(),
                None => input.pin_offset(threshold),
            }
        }
        Edge::Ending => {
            let pinned_min = threshold - extent;
            let competitor = input
                .next_frames()
                .map(|other| other.max_along(input.axis))
                .filter(|other_max| *other_max > pinned_min)
                .max_by(f32::total_cmp);
            match competitor {
                Some(other_max) => other_max + extent - input.max(),
                None => input.pin_offset(threshold),
            }
        }
    };

    StickyOutput {
        is_sticking: true,
        overlays: true,
        offset: input.offset_point(offset),
        effects: VisualEffects::IDENTITY,
    }
}
