//! Identity fallback used when no container context is available.

use super::StickyOutput;

/// The no-op output: never sticking, baseline depth, zero offset,
/// undistorted. Every policy degrades to this before the container has
/// reported its geometry.
pub(crate) fn identity_output() -> StickyOutput {
    StickyOutput::default()
}
