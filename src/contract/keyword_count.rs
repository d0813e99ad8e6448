//! Number-of-keywords-correct entry.

use std::rc::Rc;

use crate::contract::{Contract, Visibility};
use crate::coordinator::{Modality, PresentationCoordinator, Slot, Surface};
use crate::state::StringField;

pub trait KeywordCountObserver {
    fn notify_submit_clicked(&self);
}

#[derive(Debug, Default)]
pub struct KeywordCountFields {
    count: StringField,
}

pub type KeywordCountUi = Contract<KeywordCountFields, dyn KeywordCountObserver>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordCountSnapshot {
    pub visible: bool,
    pub count: String,
}

impl KeywordCountUi {
    pub fn new(coordinator: &Rc<PresentationCoordinator>) -> Self {
        Contract::from_parts(
            KeywordCountFields::default(),
            Visibility::coordinated(
                coordinator,
                Slot::Running(Surface::Response(Modality::KeywordCount)),
            ),
        )
    }

    /// The count exactly as typed.
    pub fn correct_keywords(&self) -> String {
        self.state().count.get()
    }

    /// The count as a number, `None` when blank or not a non-negative integer.
    pub fn correct_keywords_count(&self) -> Option<u32> {
        self.state().count.with(|count| count.trim().parse().ok())
    }

    pub fn set_correct_keywords(&self, count: impl Into<String>) {
        self.state().count.set(count.into());
    }

    pub fn notify_submit_clicked(&self) {
        self.notify("submit", |o| o.notify_submit_clicked());
    }

    pub fn snapshot(&self) -> KeywordCountSnapshot {
        KeywordCountSnapshot {
            visible: self.is_visible(),
            count: self.correct_keywords(),
        }
    }
}
