//! Element-facing handle over a registered sticky frame.

use crate::context::StickyContext;
use crate::policy::StickyOutput;
use crate::registry::FrameId;
use limpet_geometry::{Edge, Point, Rect, StickyFrame};
use std::cell::{Cell, RefCell};

type StickingCallback = Box<dyn Fn(bool)>;
type TapCallback = Box<dyn Fn()>;

/// A sticky element's registration with its container.
///
/// Created via [`StickyContext::attach`]; dropping the handle removes the
/// element's frame from the registry, so a departed element can never keep
/// influencing threshold math for the ones that remain.
pub struct StickyHandle {
    context: StickyContext,
    id: FrameId,
    edge: Cell<Edge>,
    tap_to_scroll: Cell<bool>,
    last_sticking: Cell<bool>,
    on_sticking_changed: RefCell<Option<StickingCallback>>,
    on_tap: RefCell<Option<TapCallback>>,
}

impl StickyHandle {
    pub(crate) fn new(context: StickyContext, rect: Rect, edge: Edge) -> Self {
        let id = context.register_frame(StickyFrame::new(rect, edge));
        Self {
            context,
            id,
            edge: Cell::new(edge),
            tap_to_scroll: Cell::new(false),
            last_sticking: Cell::new(false),
            on_sticking_changed: RefCell::new(None),
            on_tap: RefCell::new(None),
        }
    }

    /// The identity token this element is registered under.
    pub fn id(&self) -> FrameId {
        self.id
    }

    pub fn edge(&self) -> Edge {
        self.edge.get()
    }

    /// Reports a new measured rectangle for this element.
    pub fn update_frame(&self, rect: Rect) {
        self.context
            .registry()
            .update(self.id, StickyFrame::new(rect, self.edge.get()));
    }

    /// Changes the edge this element pins to.
    pub fn set_edge(&self, edge: Edge) {
        if self.edge.replace(edge) == edge {
            return;
        }
        if let Some(frame) = self.context.registry().frame(self.id) {
            self.context
                .registry()
                .update(self.id, StickyFrame::new(frame.rect, edge));
        }
    }

    /// Opts this element in or out of tap-to-scroll.
    pub fn set_tap_to_scroll(&self, enabled: bool) {
        self.tap_to_scroll.set(enabled);
    }

    /// Registers a callback fired once per sticking-state transition,
    /// synchronously from [`resolve`](StickyHandle::resolve).
    pub fn on_sticking_changed(&self, callback: impl Fn(bool) + 'static) {
        *self.on_sticking_changed.borrow_mut() = Some(Box::new(callback));
    }

    /// Registers a callback fired on every tap, after any scroll request.
    pub fn on_tap(&self, callback: impl Fn() + 'static) {
        *self.on_tap.borrow_mut() = Some(Box::new(callback));
    }

    /// Recomputes this element's sticky output from the current registry
    /// and scroll state, firing the sticking-changed callback when the
    /// state transitioned since the previous resolve.
    pub fn resolve(&self) -> StickyOutput {
        let output = self.context.resolve(self.id);
        if self.last_sticking.replace(output.is_sticking) != output.is_sticking {
            if let Some(callback) = self.on_sticking_changed.borrow().as_ref() {
                callback(output.is_sticking);
            }
        }
        output
    }

    /// The scroll target that would align this element with its threshold.
    pub fn scroll_target(&self) -> Option<Point> {
        self.context.scroll_target(self.id)
    }

    /// Handles a tap on the element: requests a scroll to the element's
    /// threshold when tap-to-scroll is enabled, then notifies the tap
    /// callback. Returns the requested target, if any.
    pub fn tap(&self) -> Option<Point> {
        let target = if self.tap_to_scroll.get() {
            let target = self.context.scroll_target(self.id);
            if let Some(point) = target {
                self.context.scroll_state().request_scroll_target(point);
            }
            target
        } else {
            None
        };
        if let Some(callback) = self.on_tap.borrow().as_ref() {
            callback();
        }
        target
    }
}

impl Drop for StickyHandle {
    fn drop(&mut self) {
        self.context.registry().unregister(self.id);
    }
}

impl std::fmt::Debug for StickyHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StickyHandle")
            .field("id", &self.id)
            .field("edge", &self.edge.get())
            .field("tap_to_scroll", &self.tap_to_scroll.get())
            .finish()
    }
}
