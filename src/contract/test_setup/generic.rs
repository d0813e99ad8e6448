//! Generic test setup form.

use std::rc::Rc;

use super::{TestSetupObserver, TestSetupUi};
use crate::contract::{Contract, Visibility};
use crate::coordinator::{PresentationCoordinator, Slot};
use crate::state::{SelectableCollection, SelectionError, StringField};

#[derive(Debug, Default)]
pub struct GenericSetupFields {
    subject_id: StringField,
    tester_id: StringField,
    session: StringField,
    starting_snr: StringField,
    rme_setting: StringField,
    test_settings_file: StringField,
    transducers: SelectableCollection,
}

/// Free-text subject/tester/session entry, transducer menu, settings file
/// and starting SNR.
pub type GenericTestSetup = Contract<GenericSetupFields, dyn TestSetupObserver>;

/// Immutable view of a [`GenericTestSetup`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenericSetupSnapshot {
    pub visible: bool,
    pub subject_id: String,
    pub tester_id: String,
    pub session: String,
    pub starting_snr: String,
    pub rme_setting: String,
    pub test_settings_file: String,
    pub transducers: Vec<String>,
    pub transducer: String,
}

impl GenericTestSetup {
    pub fn new(coordinator: &Rc<PresentationCoordinator>) -> Self {
        Contract::from_parts(
            GenericSetupFields::default(),
            Visibility::coordinated(coordinator, Slot::TestSetup),
        )
    }

    pub fn set_subject_id(&self, value: impl Into<String>) {
        self.state().subject_id.set(value.into());
    }

    pub fn set_tester_id(&self, value: impl Into<String>) {
        self.state().tester_id.set(value.into());
    }

    pub fn set_session(&self, value: impl Into<String>) {
        self.state().session.set(value.into());
    }

    pub fn set_starting_snr(&self, value: impl Into<String>) {
        self.state().starting_snr.set(value.into());
    }

    pub fn set_rme_setting(&self, value: impl Into<String>) {
        self.state().rme_setting.set(value.into());
    }

    pub fn set_test_settings_file(&self, path: impl Into<String>) {
        self.state().test_settings_file.set(path.into());
    }

    pub fn select_transducer(&self, transducer: &str) -> Result<(), SelectionError> {
        self.state().transducers.select(transducer)
    }

    pub fn transducers(&self) -> &SelectableCollection {
        &self.state().transducers
    }

    pub fn notify_confirm_clicked(&self) {
        self.notify("confirm", |o| o.notify_confirm_clicked());
    }

    pub fn notify_play_calibration_clicked(&self) {
        self.notify("play_calibration", |o| o.notify_play_calibration_clicked());
    }

    pub fn snapshot(&self) -> GenericSetupSnapshot {
        let fields = self.state();
        GenericSetupSnapshot {
            visible: self.is_visible(),
            subject_id: fields.subject_id.get(),
            tester_id: fields.tester_id.get(),
            session: fields.session.get(),
            starting_snr: fields.starting_snr.get(),
            rme_setting: fields.rme_setting.get(),
            test_settings_file: fields.test_settings_file.get(),
            transducers: fields.transducers.options(),
            transducer: fields.transducers.selected(),
        }
    }
}

impl TestSetupUi for GenericTestSetup {
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
        self.state().subject_id.get()
    }

    fn tester_id(&self) -> String {
        self.state().tester_id.get()
    }

    fn session(&self) -> String {
        self.state().session.get()
    }

    fn test_settings_file(&self) -> String {
        self.state().test_settings_file.get()
    }

    fn starting_snr(&self) -> String {
        self.state().starting_snr.get()
    }

    fn transducer(&self) -> String {
        self.state().transducers.selected()
    }

    fn rme_setting(&self) -> String {
        self.state().rme_setting.get()
    }

    fn populate_transducer_menu(&self, transducers: &[String]) {
        self.state().transducers.populate(transducers.iter().cloned());
    }

    fn attach(&self, observer: &Rc<dyn TestSetupObserver>) {
        Contract::attach(self, observer);
    }

    fn detach(&self) {
        Contract::detach(self);
    }
}
