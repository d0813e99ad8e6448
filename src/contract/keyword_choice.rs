//! Per-keyword correctness marking for three-keyword sentences.
//!
//! The sentence is laid out as four text fragments around three keyword
//! buttons:
//!
//! ```text
//! <preceding first> [first] <following first> [second] <following second> [third] <following third>
//! ```

use std::rc::Rc;

use crate::contract::{Contract, Visibility};
use crate::coordinator::{Modality, PresentationCoordinator, Slot, Surface};
use crate::state::{BoolField, StringField};

pub trait KeywordChoiceObserver {
    fn notify_first_keyword_button_clicked(&self);
    fn notify_second_keyword_button_clicked(&self);
    fn notify_third_keyword_button_clicked(&self);
    fn notify_all_wrong_button_clicked(&self);
    fn notify_reset_button_clicked(&self);
    fn notify_submit_clicked(&self);
}

#[derive(Debug, Default)]
pub struct KeywordChoiceFields {
    correct: [BoolField; 3],
    labels: [StringField; 3],
    text_preceding_first: StringField,
    text_following_first: StringField,
    text_following_second: StringField,
    text_following_third: StringField,
    flagged: BoolField,
}

pub type KeywordChoiceUi = Contract<KeywordChoiceFields, dyn KeywordChoiceObserver>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordChoiceSnapshot {
    pub visible: bool,
    pub correct: [bool; 3],
    pub labels: [String; 3],
    pub text_preceding_first: String,
    pub text_following_first: String,
    pub text_following_second: String,
    pub text_following_third: String,
    pub flagged: bool,
}

impl KeywordChoiceUi {
    pub fn new(coordinator: &Rc<PresentationCoordinator>) -> Self {
        Contract::from_parts(
            KeywordChoiceFields::default(),
            Visibility::coordinated(
                coordinator,
                Slot::Running(Surface::Response(Modality::KeywordChoice)),
            ),
        )
    }

    fn mark(&self, index: usize, correct: bool) {
        self.state().correct[index].set(correct);
    }

    pub fn mark_first_keyword_correct(&self) {
        self.mark(0, true);
    }

    pub fn mark_second_keyword_correct(&self) {
        self.mark(1, true);
    }

    pub fn mark_third_keyword_correct(&self) {
        self.mark(2, true);
    }

    pub fn mark_first_keyword_incorrect(&self) {
        self.mark(0, false);
    }

    pub fn mark_second_keyword_incorrect(&self) {
        self.mark(1, false);
    }

    pub fn mark_third_keyword_incorrect(&self) {
        self.mark(2, false);
    }

    pub fn first_keyword_correct(&self) -> bool {
        self.state().correct[0].get()
    }

    pub fn second_keyword_correct(&self) -> bool {
        self.state().correct[1].get()
    }

    pub fn third_keyword_correct(&self) -> bool {
        self.state().correct[2].get()
    }

    pub fn set_first_keyword_button_text(&self, text: impl Into<String>) {
        self.state().labels[0].set(text.into());
    }

    pub fn set_second_keyword_button_text(&self, text: impl Into<String>) {
        self.state().labels[1].set(text.into());
    }

    pub fn set_third_keyword_button_text(&self, text: impl Into<String>) {
        self.state().labels[2].set(text.into());
    }

    pub fn set_text_preceding_first_keyword_button(&self, text: impl Into<String>) {
        self.state().text_preceding_first.set(text.into());
    }

    pub fn set_text_following_first_keyword_button(&self, text: impl Into<String>) {
        self.state().text_following_first.set(text.into());
    }

    pub fn set_text_following_second_keyword_button(&self, text: impl Into<String>) {
        self.state().text_following_second.set(text.into());
    }

    pub fn set_text_following_third_keyword_button(&self, text: impl Into<String>) {
        self.state().text_following_third.set(text.into());
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

    /// Mark every keyword incorrect and clear the flag.
    pub fn reset(&self) {
        self.all_wrong();
        self.clear_flag();
    }

    /// Mark every keyword incorrect.
    pub fn all_wrong(&self) {
        for flag in &self.state().correct {
            flag.set(false);
        }
    }

    // Clicks only report to the engine. Correctness changes through the
    // `mark_*`, `reset` and `all_wrong` mutators.
    pub fn notify_first_keyword_button_clicked(&self) {
        self.notify("first_keyword", |o| o.notify_first_keyword_button_clicked());
    }

    pub fn notify_second_keyword_button_clicked(&self) {
        self.notify("second_keyword", |o| o.notify_second_keyword_button_clicked());
    }

    pub fn notify_third_keyword_button_clicked(&self) {
        self.notify("third_keyword", |o| o.notify_third_keyword_button_clicked());
    }

    pub fn notify_reset_button_clicked(&self) {
        self.notify("reset", |o| o.notify_reset_button_clicked());
    }

    pub fn notify_all_wrong_button_clicked(&self) {
        self.notify("all_wrong", |o| o.notify_all_wrong_button_clicked());
    }

    pub fn notify_submit_clicked(&self) {
        self.notify("submit", |o| o.notify_submit_clicked());
    }

    pub fn snapshot(&self) -> KeywordChoiceSnapshot {
        let fields = self.state();
        KeywordChoiceSnapshot {
            visible: self.is_visible(),
            correct: [
                fields.correct[0].get(),
                fields.correct[1].get(),
                fields.correct[2].get(),
            ],
            labels: [
                fields.labels[0].get(),
                fields.labels[1].get(),
                fields.labels[2].get(),
            ],
            text_preceding_first: fields.text_preceding_first.get(),
            text_following_first: fields.text_following_first.get(),
            text_following_second: fields.text_following_second.get(),
            text_following_third: fields.text_following_third.get(),
            flagged: fields.flagged.get(),
        }
    }
}
