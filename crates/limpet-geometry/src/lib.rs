//! Pure math/data for the Limpet sticky-positioning engine
//!
//! This crate contains the geometry primitives (points, sizes, rectangles,
//! insets), the axis/edge vocabulary, and the frame record that sticky
//! elements report to the engine. It carries no policy logic.

mod axis;
mod frame;
mod geometry;

pub use axis::*;
pub use frame::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::axis::{Axis, Edge, EdgeSet};
    pub use crate::frame::StickyFrame;
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
