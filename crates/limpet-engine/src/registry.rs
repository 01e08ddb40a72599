//! The per-container registry of sticky element frames.
//!
//! Elements write their measured frames into the registry (keyed by a
//! process-unique identity token) and the policies read it back as "all
//! other sticky frames". Merging is last-write-wins per identity, applied
//! synchronously before any recomputation reads the registry.

use indexmap::IndexMap;
use limpet_geometry::StickyFrame;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_FRAME_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity token for a registered sticky element.
///
/// Allocated on registration, invalid after unregistration, never reused
/// within a process. Carries no ordering or equality guarantee across
/// element lifetimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(u64);

/// Scratch list of "other" frames handed to a policy evaluation.
///
/// Registries are small; eight inline slots avoid an allocation per
/// recomputation in the common case.
pub type OtherFrames = SmallVec<[StickyFrame; 8]>;

/// Mapping from element identity to its current frame record.
///
/// Owned by the container and shared with elements; cloning shares the
/// same underlying registry. Removal is removal, not a tombstone: a stale
/// entry would let a now-absent element affect threshold math for others.
#[derive(Clone)]
pub struct FrameRegistry {
    inner: Rc<RegistryInner>,
}

struct RegistryInner {
    frames: RefCell<IndexMap<u64, StickyFrame>>,
    /// Callbacks invoked synchronously after every mutation, so a container
    /// can re-run policy evaluation while the registry is already current.
    change_listeners: RefCell<HashMap<u64, Box<dyn Fn()>>>,
}

impl Default for FrameRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameRegistry {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RegistryInner {
                frames: RefCell::new(IndexMap::new()),
                change_listeners: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// Registers a new frame and returns its identity token.
    pub fn register(&self, frame: StickyFrame) -> FrameId {
        let id = NEXT_FRAME_ID.fetch_add(1, Ordering::Relaxed);
        self.inner.frames.borrow_mut().insert(id, frame);
        log::trace!("registered sticky frame {id}");
        self.notify();
        FrameId(id)
    }

    /// Replaces the frame stored under `id`. Last write wins.
    ///
    /// Updating an unregistered id is ignored; the element already
    /// unregistered and must not reappear in threshold math.
    pub fn update(&self, id: FrameId, frame: StickyFrame) {
        let mut frames = self.inner.frames.borrow_mut();
        if let Some(slot) = frames.get_mut(&id.0) {
            if *slot == frame {
                return;
            }
            *slot = frame;
            drop(frames);
            self.notify();
        } else {
            log::trace!("ignored frame update for unregistered id {}", id.0);
        }
    }

    /// Removes the entry for `id`. The token is invalid afterwards.
    pub fn unregister(&self, id: FrameId) {
        let removed = self.inner.frames.borrow_mut().shift_remove(&id.0);
        if removed.is_some() {
            log::trace!("unregistered sticky frame {}", id.0);
            self.notify();
        }
    }

    /// Returns the current frame for `id`, if it is still registered.
    pub fn frame(&self, id: FrameId) -> Option<StickyFrame> {
        self.inner.frames.borrow().get(&id.0).copied()
    }

    /// Returns every registered frame except the one under `id`.
    ///
    /// This is the "other sticky frames" input to a policy evaluation.
    pub fn frames_excluding(&self, id: FrameId) -> OtherFrames {
        self.inner
            .frames
            .borrow()
            .iter()
            .filter(|(key, _)| **key != id.0)
            .map(|(_, frame)| *frame)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.frames.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.frames.borrow().is_empty()
    }

    pub fn contains(&self, id: FrameId) -> bool {
        self.inner.frames.borrow().contains_key(&id.0)
    }

    /// Adds a change listener and returns its id.
    pub fn add_change_listener(&self, listener: Box<dyn Fn()>) -> u64 {
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

impl std::fmt::Debug for FrameRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameRegistry")
            .field("len", &self.len())
            .finish()
    }
}
