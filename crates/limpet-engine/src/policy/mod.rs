//! Conflict-resolution policies for sticky elements.
//!
//! A policy is a pure function: it consumes one element's frame, the edge
//! it targets, the axis, the safe-area inset, the container end coordinate,
//! and the other sticky frames, and produces the element's sticking state,
//! draw-order hint, positional offset, and visual parameters. Nothing is
//! retained between evaluations; recomputing with unchanged inputs yields
//! identical outputs.
//!
//! All policies share the same threshold contract: the coordinate along the
//! scroll axis at which the element's sticking boundary is held fixed once
//! sticking begins. Replace, Fade, and Collapse pin directly at the
//! container edge (extended by the safe-area inset); Stack extends the
//! threshold by the cumulative size of other same-edge frames so elements
//! queue instead of overlapping.

mod collapse;
mod fade;
mod identity;
mod replace;
mod stack;

pub(crate) use identity::identity_output;

use limpet_geometry::{Axis, Edge, Point, Rect, StickyFrame};
use std::fmt;
use std::str::FromStr;

/// The conflict-resolution strategy for a container's sticky elements.
///
/// The set is closed; configuration surfaces that need to name a policy go
/// through [`FromStr`], which fails fast on anything unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StickyPolicy {
    /// An incoming element shoves the pinned one out of the way.
    Replace,
    /// Same-edge elements queue behind one another.
    Stack,
    /// The pinned element shrinks and fades as the next one covers it.
    Fade,
    /// All following elements compress the pinned one toward the edge.
    Collapse,
}

impl StickyPolicy {
    /// Evaluates this policy for one element.
    pub fn evaluate(self, input: &PolicyInput<'_>) -> StickyOutput {
        match self {
            StickyPolicy::Replace => replace::evaluate(input),
            StickyPolicy::Stack => stack::evaluate(input),
            StickyPolicy::Fade => fade::evaluate(input),
            StickyPolicy::Collapse => collapse::evaluate(input),
        }
    }

    /// The sticking threshold this policy assigns to the element.
    ///
    /// Used by the tap-to-scroll calculator: scrolling so the element's
    /// sticking boundary lands exactly here puts it on the cusp of sticking.
    pub fn threshold(self, input: &PolicyInput<'_>) -> f32 {
        match self {
            StickyPolicy::Stack => input.stack_threshold(),
            _ => input.edge_threshold(),
        }
    }
}

impl fmt::Display for StickyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StickyPolicy::Replace => "replace",
            StickyPolicy::Stack => "stack",
            StickyPolicy::Fade => "fade",
            StickyPolicy::Collapse => "collapse",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing an unrecognized policy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePolicyError {
    name: String,
}

impl fmt::Display for ParsePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized sticky policy {:?}; expected one of replace, stack, fade, collapse",
            self.name
        )
    }
}

impl std::error::Error for ParsePolicyError {}

impl FromStr for StickyPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "replace" => Ok(StickyPolicy::Replace),
            "stack" => Ok(StickyPolicy::Stack),
            "fade" => Ok(StickyPolicy::Fade),
            "collapse" => Ok(StickyPolicy::Collapse),
            other => Err(ParsePolicyError {
                name: other.to_owned(),
            }),
        }
    }
}

/// Tunable visual constants for the Collapse policy.
///
/// The divisors shape how quickly a collapsing element shrinks, darkens,
/// and blurs; the shift factors scale how far the accumulated overlap
/// pushes the element past its edge. The defaults carry the values the
/// policy was designed around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollapseTuning {
    pub scale_divisor: f32,
    pub brightness_divisor: f32,
    pub blur_divisor: f32,
    /// Offset shift per unit of collapse on the starting edge.
    pub starting_shift: f32,
    /// Offset shift per unit of collapse on the ending edge.
    pub ending_shift: f32,
}

impl Default for CollapseTuning {
    fn default() -> Self {
        Self {
            scale_divisor: 700.0,
            brightness_divisor: 400.0,
            blur_divisor: 50.0,
            starting_shift: 0.75,
            ending_shift: 1.25,
        }
    }
}

/// Continuous visual parameters a renderer applies to a sticky element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualEffects {
    /// Scale factor about the element's center; 1 is unscaled.
    pub scale: f32,
    /// Darkening amount; 0 is unchanged.
    pub brightness: f32,
    /// Blur amount; 0 is sharp.
    pub blur: f32,
}

impl VisualEffects {
    pub const IDENTITY: VisualEffects = VisualEffects {
        scale: 1.0,
        brightness: 0.0,
        blur: 0.0,
    };
}

impl Default for VisualEffects {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Result of evaluating a policy for one element.
///
/// The default value is the identity transform: not sticking, baseline
/// depth, zero offset, undistorted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StickyOutput {
    /// Whether the element is currently held at its threshold.
    pub is_sticking: bool,
    /// Draw-order hint: whether the element should render above siblings.
    pub overlays: bool,
    /// Translation to apply to the element's position.
    pub offset: Point,
    /// Scale/brightness/blur; identity for Replace and Stack.
    pub effects: VisualEffects,
}

/// Everything a policy evaluation reads.
///
/// Assembled fresh by the container context for every recomputation; the
/// `others` slice is the registry minus the element being evaluated.
#[derive(Debug, Clone)]
pub struct PolicyInput<'a> {
    pub axis: Axis,
    pub edge: Edge,
    pub rect: Rect,
    /// Safe-area inset for the targeted edge; 0 unless the container allows
    /// this edge to extend into the unsafe area.
    pub safe_area_inset: f32,
    /// Container extent along the scroll axis.
    pub container_end: f32,
    pub others: &'a [StickyFrame],
    pub collapse_tuning: CollapseTuning,
}

impl<'a> PolicyInput<'a> {
    /// The element's leading coordinate along the axis.
    pub fn min(&self) -> f32 {
        self.rect.min_along(self.axis)
    }

    /// The element's trailing coordinate along the axis.
    pub fn max(&self) -> f32 {
        self.rect.max_along(self.axis)
    }

    /// The element's length along the axis.
    pub fn extent(&self) -> f32 {
        self.rect.extent_along(self.axis)
    }

    /// The container's own edge coordinate, extended by the safe-area inset.
    ///
    /// Replace, Fade, and Collapse pin directly here.
    pub fn edge_threshold(&self) -> f32 {
        match self.edge {
            Edge::Starting => -self.safe_area_inset,
            Edge::Ending => self.container_end + self.safe_area_inset,
        }
    }

    /// The container edge extended by the cumulative extent of every other
    /// same-edge frame whose position precedes (starting) or follows
    /// (ending) this element.
    ///
    /// Comparison is inclusive, so frames at exactly the same coordinate
    /// count toward each other's threshold.
    pub fn stack_threshold(&self) -> f32 {
        match self.edge {
            Edge::Starting => {
                let min = self.min();
                let preceding: f32 = self
                    .same_edge_others()
                    .filter(|other| other.min_along(self.axis) <= min)
                    .map(|other| other.extent_along(self.axis))
                    .sum();
                -self.safe_area_inset + preceding
            }
            Edge::Ending => {
                let max = self.max();
                let following: f32 = self
                    .same_edge_others()
                    .filter(|other| other.max_along(self.axis) >= max)
                    .map(|other| other.extent_along(self.axis))
                    .sum();
                self.container_end + self.safe_area_inset - following
            }
        }
    }

    /// Whether the element's sticking boundary has crossed past `threshold`
    /// in the off-screen direction. Exactly at the threshold is not sticking.
    pub fn is_sticking(&self, threshold: f32) -> bool {
        match self.edge {
            Edge::Starting => self.min() < threshold,
            Edge::Ending => self.max() > threshold,
        }
    }

    /// The along-axis offset that pins the sticking boundary at `threshold`.
    pub fn pin_offset(&self, threshold: f32) -> f32 {
        match self.edge {
            Edge::Starting => threshold - self.min(),
            Edge::Ending => threshold - self.max(),
        }
    }

    /// Builds the output offset vector from an along-axis value.
    pub fn offset_point(&self, along: f32) -> Point {
        Point::from_along(self.axis, along)
    }

    /// Other frames targeting the same edge as this element.
    pub fn same_edge_others(&self) -> impl Iterator<Item = &StickyFrame> {
        let edge = self.edge;
        self.others.iter().filter(move |other| other.edge == edge)
    }

    /// The nearest same-edge frame on the container-ward side of this
    /// element: the one a sticking element is about to cover.
    pub fn previous_frame(&self) -> Option<&StickyFrame> {
        match self.edge {
            Edge::Starting => {
                let min = self.min();
                self.same_edge_others()
                    .filter(|other| other.min_along(self.axis) < min)
                    .max_by(|a, b| a.min_along(self.axis).total_cmp(&b.min_along(self.axis)))
            }
            Edge::Ending => {
                let max = self.max();
                self.same_edge_others()
                    .filter(|other| other.max_along(self.axis) > max)
                    .min_by(|a, b| a.max_along(self.axis).total_cmp(&b.max_along(self.axis)))
            }
        }
    }

    /// The nearest same-edge frame following this element in the stacking
    /// direction: the one that will cover it next.
    pub fn next_frame(&self) -> Option<&StickyFrame> {
        match self.edge {
            Edge::Starting => {
                let min = self.min();
                self.same_edge_others()
                    .filter(|other| other.min_along(self.axis) > min)
                    .min_by(|a, b| a.min_along(self.axis).total_cmp(&b.min_along(self.axis)))
            }
            Edge::Ending => {
                let max = self.max();
                self.same_edge_others()
                    .filter(|other| other.max_along(self.axis) < max)
                    .max_by(|a, b| a.max_along(self.axis).total_cmp(&b.max_along(self.axis)))
            }
        }
    }

    /// Same-edge frames following this element in the stacking direction.
    pub fn next_frames(&self) -> impl Iterator<Item = &StickyFrame> {
        let axis = self.axis;
        let edge = self.edge;
        let min = self.min();
        let max = self.max();
        self.same_edge_others().filter(move |other| match edge {
            Edge::Starting => other.min_along(axis) > min,
            Edge::Ending => other.max_along(axis) < max,
        })
    }
}

/// Depth rule shared by Fade and Collapse.
///
/// An element renders above its siblings until the previous same-edge frame
/// (the nearest one on the container-ward side) would still show past it;
/// with no previous frame it always overlays.
pub(crate) fn overlays_previous(input: &PolicyInput<'_>) -> bool {
    let Some(previous) = input.previous_frame() else {
        return true;
    };
    match input.edge {
        // The previous frame, pinned, covers the span up to its extent past
        // the container edge; we draw on top once our leading boundary has
        // entered that span.
        Edge::Starting => {
            input.min() < previous.extent_along(input.axis) - input.safe_area_inset
        }
        Edge::Ending => {
            input.max()
                > input.container_end + input.safe_area_inset - previous.extent_along(input.axis)
        }
    }
}
