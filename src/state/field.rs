//! Observable scalar cells.

use crossbeam::channel::{unbounded, Receiver, Sender};
use std::cell::{Cell, RefCell};
use std::fmt;

/// A reactive cell read and written by both engine and presentation.
///
/// Every `set` bumps the revision and publishes an owned snapshot of the new
/// value to each live subscriber. Writers are never concurrent: the last
/// write wins.
pub struct ObservableField<T> {
    value: RefCell<T>,
    revision: Cell<u64>,
    subscribers: RefCell<Vec<Sender<T>>>,
}

/// String-valued field.
pub type StringField = ObservableField<String>;

/// Boolean field.
pub type BoolField = ObservableField<bool>;

impl<T: Clone> ObservableField<T> {
    /// Create a field holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            value: RefCell::new(initial),
            revision: Cell::new(0),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Read the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }

    /// Replace the value and publish it.
    pub fn set(&self, value: impl Into<T>) {
        let value = value.into();
        *self.value.borrow_mut() = value.clone();
        self.revision.set(self.revision.get() + 1);
        self.publish(value);
    }

    /// Mutate the value in place and publish the result.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let snapshot = {
            let mut value = self.value.borrow_mut();
            f(&mut value);
            value.clone()
        };
        self.revision.set(self.revision.get() + 1);
        self.publish(snapshot);
    }

    /// Number of writes since construction.
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    /// Receive a snapshot of every subsequent write.
    ///
    /// Dropping the receiver unsubscribes on the next write.
    pub fn subscribe(&self) -> Receiver<T> {
        let (tx, rx) = unbounded();
        self.subscribers.borrow_mut().push(tx);
        rx
    }

    fn publish(&self, value: T) {
        self.subscribers
            .borrow_mut()
            .retain(|tx| tx.send(value.clone()).is_ok());
    }
}

impl<T: Clone + Default> Default for ObservableField<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for ObservableField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableField")
            .field("value", &*self.value.borrow())
            .field("revision", &self.revision.get())
            .finish()
    }
}
