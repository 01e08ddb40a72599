//! Scroll state shared between a container and its sticky elements.

use limpet_geometry::{EdgeInsets, Point, Size};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SCROLL_STATE_ID: AtomicU64 = AtomicU64::new(1);

/// State object describing a scrollable container's current geometry.
///
/// Owned and mutated by the container; sticky elements and policies only
/// read it, except [`ScrollState::request_scroll_target`], the narrow write
/// channel used by tap-to-scroll. Cloning shares the same underlying state.
///
/// Every mutation notifies registered change listeners synchronously, so a
/// container can drive policy recomputation and be guaranteed to read the
/// state it just wrote.
#[derive(Clone)]
pub struct ScrollState {
    inner: Rc<ScrollStateInner>,
}

struct ScrollStateInner {
    /// Unique ID for debugging.
    id: u64,
    offset: Cell<Point>,
    content_size: Cell<Size>,
    container_size: Cell<Size>,
    content_insets: Cell<EdgeInsets>,
    /// Set once the container has reported its size at least once. Policies
    /// degrade to the identity transform until then.
    laid_out: Cell<bool>,
    /// The point an element asked the container to scroll to, if any.
    scroll_target: Cell<Option<Point>>,
    change_listeners: RefCell<HashMap<u64, Box<dyn Fn()>>>,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    pub fn new() -> Self {
        let id = NEXT_SCROLL_STATE_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            inner: Rc::new(ScrollStateInner {
                id,
                offset: Cell::new(Point::ZERO),
                content_size: Cell::new(Size::ZERO),
                container_size: Cell::new(Size::ZERO),
                content_insets: Cell::new(EdgeInsets::ZERO),
                laid_out: Cell::new(false),
                scroll_target: Cell::new(None),
                change_listeners: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// Get the unique ID of this ScrollState.
    pub fn id(&self) -> u64 {
        self.inner.id
    }

    /// The current content offset.
    pub fn offset(&self) -> Point {
        self.inner.offset.get()
    }

    /// The total size of the scrollable content.
    pub fn content_size(&self) -> Size {
        self.inner.content_size.get()
    }

    /// The size of the visible viewport.
    pub fn container_size(&self) -> Size {
        self.inner.container_size.get()
    }

    /// The container's content insets.
    pub fn content_insets(&self) -> EdgeInsets {
        self.inner.content_insets.get()
    }

    /// Whether the container has reported its size at least once.
    pub fn is_laid_out(&self) -> bool {
        self.inner.laid_out.get()
    }

    pub fn set_offset(&self, offset: Point) {
        if self.inner.offset.replace(offset) != offset {
            self.notify();
        }
    }

    pub fn set_content_size(&self, size: Size) {
        if self.inner.content_size.replace(size) != size {
            self.notify();
        }
    }

    pub fn set_container_size(&self, size: Size) {
        let changed = self.inner.container_size.replace(size) != size;
        let first = !self.inner.laid_out.replace(true);
        if changed || first {
            self.notify();
        }
    }

    pub fn set_content_insets(&self, insets: EdgeInsets) {
        if self.inner.content_insets.replace(insets) != insets {
            self.notify();
        }
    }

    /// Requests that the container scroll to `target`.
    ///
    /// The engine never scrolls by itself; the container observes the
    /// pending target (via a change listener or [`take_scroll_target`])
    /// and performs the actual, optionally animated, scroll.
    ///
    /// [`take_scroll_target`]: ScrollState::take_scroll_target
    pub fn request_scroll_target(&self, target: Point) {
        self.inner.scroll_target.set(Some(target));
        self.notify();
    }

    /// Returns the pending scroll target without consuming it.
    pub fn scroll_target(&self) -> Option<Point> {
        self.inner.scroll_target.get()
    }

    /// Consumes and returns the pending scroll target.
    pub fn take_scroll_target(&self) -> Option<Point> {
        self.inner.scroll_target.take()
    }

    /// Adds a change listener and returns its id.
    pub fn add_change_listener(&self, listener: Box<dyn Fn()>) -> u64 {
        static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);
        let id = NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed);
        self.inner
            .change_listeners
            .borrow_mut()
            .insert(id, listener);
        id
    }

    /// Removes a change listener by id.
    pub fn remove_change_listener(&self, id: u64) {
        self.inner.change_listeners.borrow_mut().remove(&id);
    }

    fn notify(&self) {
        let listeners = self.inner.change_listeners.borrow();
        for listener in listeners.values() {
            listener();
        }
    }
}

impl std::fmt::Debug for ScrollState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollState")
            .field("id", &self.inner.id)
            .field("offset", &self.offset())
            .field("content_size", &self.content_size())
            .field("container_size", &self.container_size())
            .field("content_insets", &self.content_insets())
            .finish()
    }
}
