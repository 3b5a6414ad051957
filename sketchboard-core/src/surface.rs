//! The drawing-surface capability consumed by history tracking.
//!
//! A surface serializes its whole state into an opaque [`Snapshot`], restores
//! itself from one, and reports edits through handlers registered with
//! [`DrawingSurface::on_change`].

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use crate::{ObjectId, SceneObject, SurfaceError};

/// Version tag written into every [`SceneDocument`].
pub const SCENE_FORMAT_VERSION: u32 = 1;

/// Opaque serialized copy of a surface at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snapshot(String);

impl Snapshot {
    pub fn new(data: impl Into<String>) -> Self {
        Snapshot(data.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Snapshot payload of a [`crate::SceneCanvas`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    pub version: u32,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
    Cleared,
}

/// Who caused a change. Only `User` changes are history-worthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOrigin {
    User,
    Restore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    pub origin: ChangeOrigin,
    pub object: Option<ObjectId>,
}

impl ChangeEvent {
    pub fn user(kind: ChangeKind, object: Option<ObjectId>) -> Self {
        Self {
            kind,
            origin: ChangeOrigin::User,
            object,
        }
    }

    pub fn restore(kind: ChangeKind, object: Option<ObjectId>) -> Self {
        Self {
            kind,
            origin: ChangeOrigin::Restore,
            object,
        }
    }

    pub fn is_user_mutation(&self) -> bool {
        self.origin == ChangeOrigin::User
    }
}

pub type ChangeHandler = Box<dyn FnMut(&ChangeEvent)>;

pub trait DrawingSurface {
    fn serialize(&self) -> Result<Snapshot, SurfaceError>;

    /// Replace the whole surface with `snapshot`. On error the surface must be
    /// left exactly as it was.
    fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SurfaceError>;

    fn on_change(&mut self, handler: ChangeHandler);
}

/// Inbox of change notifications, shared between a surface's handler and the
/// code that processes them on the same thread.
#[derive(Clone, Default)]
pub struct ChangeQueue {
    inner: Rc<RefCell<VecDeque<ChangeEvent>>>,
}

impl ChangeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler that appends every notification to this queue.
    pub fn handler(&self) -> ChangeHandler {
        let inner = Rc::clone(&self.inner);
        Box::new(move |event: &ChangeEvent| inner.borrow_mut().push_back(event.clone()))
    }

    pub fn peek(&self) -> Option<ChangeEvent> {
        self.inner.borrow().front().cloned()
    }

    /// Take the oldest pending notification.
    pub fn pop(&self) -> Option<ChangeEvent> {
        self.inner.borrow_mut().pop_front()
    }

    pub fn drain(&self) -> Vec<ChangeEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl fmt::Debug for ChangeQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeQueue")
            .field("pending", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ObjectId;

    #[test]
    fn queue_collects_events_in_order() {
        let queue = ChangeQueue::new();
        let mut handler = queue.handler();

        let id = ObjectId::new();
        handler(&ChangeEvent::user(ChangeKind::Added, Some(id)));
        handler(&ChangeEvent::restore(ChangeKind::Cleared, None));
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.peek().and_then(|e| e.object), Some(id));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop().and_then(|e| e.object), Some(id));
        assert_eq!(queue.len(), 1);

        let events = queue.drain();
        assert_eq!(events.len(), 1);
        assert!(!events[0].is_user_mutation());
        assert!(queue.is_empty());
        assert!(queue.pop().is_none());
    }

    #[test]
    fn drain_empties_the_queue() {
        let queue = ChangeQueue::new();
        let mut handler = queue.handler();
        let id = ObjectId::new();
        handler(&ChangeEvent::user(ChangeKind::Added, Some(id)));
        handler(&ChangeEvent::restore(ChangeKind::Cleared, None));

        let events = queue.drain();
        assert_eq!(events[0].object, Some(id));
        assert!(events[0].is_user_mutation());
        assert!(!events[1].is_user_mutation());
        assert!(queue.is_empty());
    }
}
