//! Ordered option lists with a current selection.

use crossbeam::channel::Receiver;
use thiserror::Error;

use super::field::{ObservableField, StringField};

/// Errors raised when selecting from a [`SelectableCollection`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("\"{0}\" is not one of the available options")]
    NotAnOption(String),
}

/// Uniquely labelled options plus the label currently selected.
///
/// A non-empty selection always names one of the options, so the engine has
/// to populate the options before anything can be selected. The empty string
/// means nothing is selected.
#[derive(Debug, Default)]
pub struct SelectableCollection {
    options: ObservableField<Vec<String>>,
    selection: StringField,
}

impl SelectableCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection with a fixed set of options.
    pub fn with_options<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let collection = Self::new();
        collection.populate(options);
        collection
    }

    /// Append options, skipping labels that are already present.
    pub fn populate<I, S>(&self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.update(|options| {
            for item in items {
                let item = item.into();
                if options.contains(&item) {
                    tracing::debug!(option = %item, "skipping duplicate option");
                    continue;
                }
                options.push(item);
            }
        });
    }

    /// All options in insertion order.
    pub fn options(&self) -> Vec<String> {
        self.options.get()
    }

    /// Whether `label` is one of the options.
    pub fn contains(&self, label: &str) -> bool {
        self.options.with(|options| options.iter().any(|o| o == label))
    }

    /// Selected label, or an empty string when nothing is selected.
    pub fn selected(&self) -> String {
        self.selection.get()
    }

    /// Selected label, `None` when nothing is selected.
    pub fn selection(&self) -> Option<String> {
        Some(self.selection.get()).filter(|s| !s.is_empty())
    }

    /// Select `label`. An empty label clears the selection.
    pub fn select(&self, label: &str) -> Result<(), SelectionError> {
        if !label.is_empty() && !self.contains(label) {
            return Err(SelectionError::NotAnOption(label.to_string()));
        }
        self.selection.set(label);
        Ok(())
    }

    /// Clear the selection.
    pub fn clear_selection(&self) {
        self.selection.set(String::new());
    }

    /// Subscribe to selection changes.
    pub fn subscribe_selection(&self) -> Receiver<String> {
        self.selection.subscribe()
    }

    /// Subscribe to option list changes.
    pub fn subscribe_options(&self) -> Receiver<Vec<String>> {
        self.options.subscribe()
    }
}
