//! Single-slot observer registry.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Replaceable, optional, non-owning reference to an observer.
///
/// The slot never keeps its observer alive. A gesture raised while the slot
/// is empty, or after the observer has been dropped, is discarded: it is not
/// queued and it is not retried.
pub struct ObserverSlot<O: ?Sized> {
    observer: RefCell<Option<Weak<O>>>,
}

impl<O: ?Sized> ObserverSlot<O> {
    /// An empty slot.
    pub fn empty() -> Self {
        Self {
            observer: RefCell::new(None),
        }
    }

    /// Replace the current observer.
    pub fn attach(&self, observer: &Rc<O>) {
        *self.observer.borrow_mut() = Some(Rc::downgrade(observer));
    }

    /// Empty the slot.
    pub fn detach(&self) {
        self.observer.borrow_mut().take();
    }

    /// The observer, if one is attached and still alive.
    pub fn current(&self) -> Option<Rc<O>> {
        self.observer.borrow().as_ref().and_then(Weak::upgrade)
    }

    /// Whether a live observer is attached.
    pub fn is_attached(&self) -> bool {
        self.current().is_some()
    }

    /// Deliver a gesture to the attached observer, or drop it.
    ///
    /// The slot is not borrowed while `deliver` runs, so the observer may
    /// re-attach or detach from inside the callback.
    pub fn notify(&self, gesture: &'static str, deliver: impl FnOnce(&O)) {
        match self.current() {
            Some(observer) => {
                tracing::debug!(gesture, "forwarding gesture");
                deliver(&*observer);
            }
            None => tracing::debug!(gesture, "no observer attached, gesture dropped"),
        }
    }
}

impl<O: ?Sized> Default for ObserverSlot<O> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<O: ?Sized> fmt::Debug for ObserverSlot<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverSlot")
            .field("attached", &self.is_attached())
            .finish()
    }
}
