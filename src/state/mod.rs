//! Reactive state shared by the engine and the presentation.
//!
//! Everything here is confined to the presentation thread. Cells use
//! interior mutability so that an engine callback may mutate a contract
//! while the presentation still holds a shared reference to it.

pub mod collection;
pub mod field;
pub mod observer;

pub use collection::{SelectableCollection, SelectionError};
pub use field::{BoolField, ObservableField, StringField};
pub use observer::ObserverSlot;
