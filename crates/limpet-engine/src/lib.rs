//! Sticky-positioning engine for scrollable containers.
//!
//! Limpet lets arbitrary elements inside a scrollable container stick to an
//! edge of the visible viewport as the user scrolls, and resolves conflicts
//! when several sticky elements compete for the same edge.
//!
//! The engine is headless and UI-agnostic. A container layer is expected to
//! provide:
//! - the scroll axis and a conflict-resolution [`StickyPolicy`]
//! - a continuously updated [`ScrollState`] (offset, sizes, insets)
//! - a shared coordinate space in which element frames are measured
//!
//! Elements register their measured frames through a [`StickyHandle`] and
//! read back, on every geometry or scroll change, their sticking state,
//! draw-order hint, positional offset, and visual parameters. The engine
//! never scrolls by itself; tap-to-scroll only proposes a target point for
//! the container to animate toward.

mod context;
mod handle;
mod registry;
mod scroll_state;
mod tap;

pub mod policy;

#[cfg(test)]
mod tests;

pub use context::StickyContext;
pub use handle::StickyHandle;
pub use registry::{FrameId, FrameRegistry, OtherFrames};
pub use scroll_state::ScrollState;
pub use tap::scroll_target_for;

pub use policy::{
    CollapseTuning, ParsePolicyError, PolicyInput, StickyOutput, StickyPolicy, VisualEffects,
};

pub mod prelude {
    pub use crate::context::StickyContext;
    pub use crate::handle::StickyHandle;
    pub use crate::policy::{StickyOutput, StickyPolicy, VisualEffects};
    pub use crate::registry::{FrameId, FrameRegistry};
    pub use crate::scroll_state::ScrollState;
    pub use limpet_geometry::prelude::*;
}
