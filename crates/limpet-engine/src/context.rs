//! The explicit container context handed to sticky elements.

use crate::policy::{identity_output, CollapseTuning, PolicyInput, StickyOutput, StickyPolicy};
use crate::registry::{FrameId, FrameRegistry};
use crate::scroll_state::ScrollState;
use crate::tap;
use limpet_geometry::{Axis, Edge, EdgeInsets, EdgeSet, Point, Rect, StickyFrame};

/// Everything a sticky element needs from its container: the scroll axis,
/// the conflict-resolution policy, which edges may extend into the unsafe
/// area, and shared handles to the frame registry and scroll state.
///
/// The container constructs one context and passes it (cheaply cloned) to
/// every sticky element; there is no ambient/global lookup, which also
/// makes it trivial to inject a fixture context in tests.
#[derive(Clone, Debug)]
pub struct StickyContext {
    axis: Axis,
    policy: StickyPolicy,
    safe_area_edges: EdgeSet,
    safe_area_insets: EdgeInsets,
    collapse_tuning: CollapseTuning,
    registry: FrameRegistry,
    scroll: ScrollState,
}

impl StickyContext {
    pub fn new(axis: Axis, policy: StickyPolicy) -> Self {
        Self {
            axis,
            policy,
            safe_area_edges: EdgeSet::NONE,
            safe_area_insets: EdgeInsets::ZERO,
            collapse_tuning: CollapseTuning::default(),
            registry: FrameRegistry::new(),
            scroll: ScrollState::new(),
        }
    }

    /// Allows the given edges to extend into the unsafe screen area.
    pub fn with_safe_area_edges(mut self, edges: EdgeSet) -> Self {
        self.safe_area_edges = edges;
        self
    }

    /// Sets the platform safe-area insets.
    pub fn with_safe_area_insets(mut self, insets: EdgeInsets) -> Self {
        self.safe_area_insets = insets;
        self
    }

    /// Overrides the Collapse policy's visual constants.
    pub fn with_collapse_tuning(mut self, tuning: CollapseTuning) -> Self {
        self.collapse_tuning = tuning;
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn policy(&self) -> StickyPolicy {
        self.policy
    }

    pub fn registry(&self) -> &FrameRegistry {
        &self.registry
    }

    pub fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    /// Registers a sticky element and returns its handle.
    pub fn attach(&self, rect: Rect, edge: Edge) -> crate::StickyHandle {
        crate::StickyHandle::new(self.clone(), rect, edge)
    }

    /// The safe-area inset that applies to the given edge: the platform
    /// inset when the edge is allowed into the unsafe area, zero otherwise.
    pub fn safe_area_inset(&self, edge: Edge) -> f32 {
        if !self.safe_area_edges.contains(self.axis, edge) {
            return 0.0;
        }
        match edge {
            Edge::Starting => self.safe_area_insets.leading_along(self.axis),
            Edge::Ending => self.safe_area_insets.trailing_along(self.axis),
        }
    }

    /// The container extent along the scroll axis, or `None` before the
    /// container has reported its size.
    pub fn container_end(&self) -> Option<f32> {
        if !self.scroll.is_laid_out() {
            return None;
        }
        Some(self.scroll.container_size().along(self.axis))
    }

    /// Evaluates the configured policy for the element registered as `id`.
    ///
    /// Degrades to the identity output (never sticking, no transform) when
    /// the element is unregistered or the container has no geometry yet.
    pub fn resolve(&self, id: FrameId) -> StickyOutput {
        let Some(frame) = self.registry.frame(id) else {
            log::debug!("resolve for unregistered sticky frame; returning identity");
            return identity_output();
        };
        let Some(container_end) = self.container_end() else {
            log::debug!("resolve before container layout; returning identity");
            return identity_output();
        };

        let others = self.registry.frames_excluding(id);
        let input = PolicyInput {
            axis: self.axis,
            edge: frame.edge,
            rect: frame.rect,
            safe_area_inset: self.safe_area_inset(frame.edge),
            container_end,
            others: &others,
            collapse_tuning: self.collapse_tuning,
        };
        self.policy.evaluate(&input)
    }

    /// The point the container should scroll to so the element registered
    /// as `id` lands exactly at its sticking threshold.
    ///
    /// `None` when the element is unregistered or the container has no
    /// geometry yet; tapping then has nothing to align to.
    pub fn scroll_target(&self, id: FrameId) -> Option<Point> {
        let frame = self.registry.frame(id)?;
        let container_end = self.container_end()?;

        let others = self.registry.frames_excluding(id);
        let input = PolicyInput {
            axis: self.axis,
            edge: frame.edge,
            rect: frame.rect,
            safe_area_inset: self.safe_area_inset(frame.edge),
            container_end,
            others: &others,
            collapse_tuning: self.collapse_tuning,
        };
        let threshold = self.policy.threshold(&input);
        Some(tap::scroll_target_for(&frame, self.axis, threshold, &self.scroll))
    }

    pub(crate) fn register_frame(&self, frame: StickyFrame) -> FrameId {
        self.registry.register(frame)
    }
}
