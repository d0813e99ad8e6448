//! Tester-only setup used to exercise observer wiring without a full form.

use std::rc::Rc;

use super::{TestSetupObserver, TestSetupUi};
use crate::contract::{Contract, Visibility};
use crate::coordinator::{PresentationCoordinator, Slot};
use crate::state::StringField;

#[derive(Debug, Default)]
pub struct MinimalTesterFields {
    tester_id: StringField,
}

/// Setup form with a tester ID and a confirm button.
pub type MinimalTesterSetup = Contract<MinimalTesterFields, dyn TestSetupObserver>;

impl MinimalTesterSetup {
    pub fn new(coordinator: &Rc<PresentationCoordinator>) -> Self {
        Contract::from_parts(
            MinimalTesterFields::default(),
            Visibility::coordinated(coordinator, Slot::TestSetup),
        )
    }

    pub fn set_tester_id(&self, value: impl Into<String>) {
        self.state().tester_id.set(value.into());
    }

    pub fn notify_confirm_clicked(&self) {
        self.notify("confirm", |o| o.notify_confirm_clicked());
    }
}

impl TestSetupUi for MinimalTesterSetup {
    fn show(&self) {
        Contract::show(self);
    }

    fn hide(&self) {
        Contract::hide(self);
    }

    fn is_visible(&self) -> bool {
        Contract::is_visible(self)
    }

    fn subject_id(&self) -> String {
        String::new()
    }

    fn tester_id(&self) -> String {
        self.state().tester_id.get()
    }

    fn session(&self) -> String {
        String::new()
    }

    fn test_settings_file(&self) -> String {
        String::new()
    }

    fn starting_snr(&self) -> String {
        String::new()
    }

    fn transducer(&self) -> String {
        String::new()
    }

    fn rme_setting(&self) -> String {
        String::new()
    }

    fn populate_transducer_menu(&self, _transducers: &[String]) {}

    fn attach(&self, observer: &Rc<dyn TestSetupObserver>) {
        Contract::attach(self, observer);
    }

    fn detach(&self) {
        Contract::detach(self);
    }
}
