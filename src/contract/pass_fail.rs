//! Single correct/incorrect grade.

use std::rc::Rc;

use crate::contract::{Contract, Visibility};
use crate::coordinator::{Modality, PresentationCoordinator, Slot, Surface};

pub trait PassFailObserver {
    fn notify_correct_clicked(&self);
    fn notify_incorrect_clicked(&self);
}

pub type PassFailUi = Contract<(), dyn PassFailObserver>;

impl PassFailUi {
    pub fn new(coordinator: &Rc<PresentationCoordinator>) -> Self {
        Contract::from_parts(
            (),
            Visibility::coordinated(
                coordinator,
                Slot::Running(Surface::Response(Modality::PassFail)),
            ),
        )
    }

    pub fn notify_correct_clicked(&self) {
        self.notify("correct", |o| o.notify_correct_clicked());
    }

    pub fn notify_incorrect_clicked(&self) {
        self.notify("incorrect", |o| o.notify_incorrect_clicked());
    }
}
