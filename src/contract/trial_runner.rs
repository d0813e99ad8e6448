//! Trial runner: exit/next-trial controls, trial text, the continue-testing
//! dialog and the results sheet.

use std::rc::Rc;

use crate::contract::{Contract, Visibility};
use crate::coordinator::{Dialog, PresentationCoordinator, Slot, Surface};
use crate::state::{BoolField, StringField};

pub trait TrialRunnerObserver {
    fn exit_test(&self);
    fn play_trial(&self);
    fn decline_continuing_testing(&self);
    fn accept_continuing_testing(&self);
}

#[derive(Debug)]
pub struct TrialRunnerFields {
    coordinator: Rc<PresentationCoordinator>,
    primary_text: StringField,
    secondary_text: StringField,
    exit_enabled: BoolField,
    next_trial_enabled: BoolField,
    continue_testing_message: StringField,
    sheet_message: StringField,
}

pub type TrialRunnerUi = Contract<TrialRunnerFields, dyn TrialRunnerObserver>;

/// Immutable view of a [`TrialRunnerUi`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrialRunnerSnapshot {
    pub visible: bool,
    pub primary_text: String,
    pub secondary_text: String,
    pub exit_enabled: bool,
    pub next_trial_enabled: bool,
    pub continue_testing_dialog: bool,
    pub continue_testing_message: String,
    pub sheet: Option<String>,
}

impl TrialRunnerUi {
    pub fn new(coordinator: &Rc<PresentationCoordinator>) -> Self {
        let fields = TrialRunnerFields {
            coordinator: Rc::clone(coordinator),
            primary_text: StringField::default(),
            secondary_text: StringField::default(),
            exit_enabled: BoolField::default(),
            next_trial_enabled: BoolField::default(),
            continue_testing_message: StringField::default(),
            sheet_message: StringField::default(),
        };
        Contract::from_parts(
            fields,
            Visibility::coordinated(coordinator, Slot::Running(Surface::TrialRunner)),
        )
    }

    /// Set the primary trial text.
    pub fn display(&self, text: impl Into<String>) {
        self.state().primary_text.set(text.into());
    }

    /// Set the secondary trial text.
    pub fn secondary_display(&self, text: impl Into<String>) {
        self.state().secondary_text.set(text.into());
    }

    pub fn primary_text(&self) -> String {
        self.state().primary_text.get()
    }

    pub fn secondary_text(&self) -> String {
        self.state().secondary_text.get()
    }

    pub fn show_exit_test_button(&self) {
        self.state().exit_enabled.set(true);
    }

    pub fn hide_exit_test_button(&self) {
        self.state().exit_enabled.set(false);
    }

    pub fn exit_test_button_visible(&self) -> bool {
        self.state().exit_enabled.get()
    }

    pub fn show_next_trial_button(&self) {
        self.state().next_trial_enabled.set(true);
    }

    pub fn hide_next_trial_button(&self) {
        self.state().next_trial_enabled.set(false);
    }

    pub fn next_trial_button_visible(&self) -> bool {
        self.state().next_trial_enabled.get()
    }

    pub fn show_continue_testing_dialog(&self) {
        self.state().coordinator.open_dialog(Dialog::ContinueTesting);
    }

    pub fn hide_continue_testing_dialog(&self) {
        self.state().coordinator.close_dialog(Dialog::ContinueTesting);
    }

    pub fn continue_testing_dialog_visible(&self) -> bool {
        self.state().coordinator.dialog() == Some(Dialog::ContinueTesting)
    }

    pub fn set_continue_testing_dialog_message(&self, message: impl Into<String>) {
        self.state().continue_testing_message.set(message.into());
    }

    pub fn continue_testing_dialog_message(&self) -> String {
        self.state().continue_testing_message.get()
    }

    /// Raise the informational results sheet with `message`.
    pub fn show_sheet(&self, message: impl Into<String>) {
        let fields = self.state();
        fields.sheet_message.set(message.into());
        fields.coordinator.open_dialog(Dialog::ResultSheet);
    }

    /// Close the results sheet. No engine notification.
    pub fn dismiss_sheet(&self) {
        self.state().coordinator.close_dialog(Dialog::ResultSheet);
    }

    /// Message of the open results sheet.
    pub fn sheet(&self) -> Option<String> {
        let fields = self.state();
        (fields.coordinator.dialog() == Some(Dialog::ResultSheet))
            .then(|| fields.sheet_message.get())
    }

    pub fn exit_test(&self) {
        self.notify("exit_test", |o| o.exit_test());
    }

    pub fn play_trial(&self) {
        self.notify("play_trial", |o| o.play_trial());
    }

    /// The dialog closes before the engine hears the answer, so the engine
    /// may reopen it from inside the callback.
    pub fn accept_continuing_testing(&self) {
        self.hide_continue_testing_dialog();
        self.notify("accept_continuing_testing", |o| o.accept_continuing_testing());
    }

    pub fn decline_continuing_testing(&self) {
        self.hide_continue_testing_dialog();
        self.notify("decline_continuing_testing", |o| o.decline_continuing_testing());
    }

    pub fn snapshot(&self) -> TrialRunnerSnapshot {
        let fields = self.state();
        TrialRunnerSnapshot {
            visible: self.is_visible(),
            primary_text: fields.primary_text.get(),
            secondary_text: fields.secondary_text.get(),
            exit_enabled: fields.exit_enabled.get(),
            next_trial_enabled: fields.next_trial_enabled.get(),
            continue_testing_dialog: self.continue_testing_dialog_visible(),
            continue_testing_message: fields.continue_testing_message.get(),
            sheet: self.sheet(),
        }
    }
}
