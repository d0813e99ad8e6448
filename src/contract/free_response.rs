//! Typed free-response form.

use std::rc::Rc;

use crate::contract::{Contract, Visibility};
use crate::coordinator::{Modality, PresentationCoordinator, Slot, Surface};
use crate::state::{BoolField, StringField};

pub trait FreeResponseObserver {
    fn notify_submit_clicked(&self);
}

#[derive(Debug, Default)]
pub struct FreeResponseFields {
    response: StringField,
    flagged: BoolField,
}

pub type FreeResponseUi = Contract<FreeResponseFields, dyn FreeResponseObserver>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FreeResponseSnapshot {
    pub visible: bool,
    pub response: String,
    pub flagged: bool,
}

impl FreeResponseUi {
    pub fn new(coordinator: &Rc<PresentationCoordinator>) -> Self {
        Contract::from_parts(
            FreeResponseFields::default(),
            Visibility::coordinated(
                coordinator,
                Slot::Running(Surface::Response(Modality::FreeResponse)),
            ),
        )
    }

    pub fn free_response(&self) -> String {
        self.state().response.get()
    }

    pub fn set_free_response(&self, text: impl Into<String>) {
        self.state().response.set(text.into());
    }

    pub fn clear_free_response(&self) {
        self.state().response.set(String::new());
    }

    pub fn flagged(&self) -> bool {
        self.state().flagged.get()
    }

    pub fn set_flagged(&self, flagged: bool) {
        self.state().flagged.set(flagged);
    }

    pub fn clear_flag(&self) {
        self.state().flagged.set(false);
    }

    pub fn notify_submit_clicked(&self) {
        self.notify("submit", |o| o.notify_submit_clicked());
    }

    pub fn snapshot(&self) -> FreeResponseSnapshot {
        FreeResponseSnapshot {
            visible: self.is_visible(),
            response: self.free_response(),
            flagged: self.flagged(),
        }
    }
}
