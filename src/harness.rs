//! Tester engine: a minimal engine that attaches to every contract, logs
//! each gesture and walks the session phases.
//!
//! Flow: confirm shows the trial runner, playing a trial shows the next
//! response form in rotation, submitting a response returns to the trial
//! runner, and exiting returns to test setup. Every third trial asks whether
//! to continue.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::contract::{
    CalibrationValidationObserver, ContractSet, FreeResponseObserver, KeywordChoiceObserver,
    KeywordChoiceUi, KeywordCountObserver, PassFailObserver, RunMenuObserver, SyllablesObserver, TestSetupObserver,
    TestSetupProvider, TestSetupUi, TrialRunnerObserver, ValidationResult,
};
use crate::coordinator::Modality;

/// Trials between continue-testing prompts.
const TRIALS_PER_BLOCK: u32 = 3;

pub struct TesterEngine {
    contracts: Rc<ContractSet>,
    trials: Cell<u32>,
    rotation: Cell<usize>,
    gestures: RefCell<Vec<&'static str>>,
}

impl TesterEngine {
    /// Build the engine and attach it to every contract in `contracts`.
    pub fn attach(contracts: Rc<ContractSet>) -> Rc<Self> {
        let engine = Rc::new(Self {
            contracts,
            trials: Cell::new(0),
            rotation: Cell::new(0),
            gestures: RefCell::default(),
        });

        let contracts = &engine.contracts;
        let test_setup: Rc<dyn TestSetupObserver> = engine.clone();
        contracts.test_setup.attach(&test_setup);
        let trial_runner: Rc<dyn TrialRunnerObserver> = engine.clone();
        contracts.trial_runner.attach(&trial_runner);
        let free_response: Rc<dyn FreeResponseObserver> = engine.clone();
        contracts.free_response.attach(&free_response);
        let syllables: Rc<dyn SyllablesObserver> = engine.clone();
        contracts.syllables.attach(&syllables);
        let keyword_choice: Rc<dyn KeywordChoiceObserver> = engine.clone();
        contracts.keyword_choice.attach(&keyword_choice);
        let keyword_count: Rc<dyn KeywordCountObserver> = engine.clone();
        contracts.keyword_count.attach(&keyword_count);
        let pass_fail: Rc<dyn PassFailObserver> = engine.clone();
        contracts.pass_fail.attach(&pass_fail);
        let calibration: Rc<dyn CalibrationValidationObserver> = engine.clone();
        contracts.calibration_validation.attach(&calibration);
        let run_menu: Rc<dyn RunMenuObserver> = engine.clone();
        contracts.run_menu.attach(&run_menu);

        tracing::info!(variant = %contracts.test_setup.variant(), "tester engine attached");
        engine
    }

    pub fn contracts(&self) -> &Rc<ContractSet> {
        &self.contracts
    }

    /// Gestures received so far, oldest first.
    pub fn gestures(&self) -> Vec<&'static str> {
        self.gestures.borrow().clone()
    }

    /// Trials played since the last confirm.
    pub fn trials(&self) -> u32 {
        self.trials.get()
    }

    fn record(&self, gesture: &'static str) {
        tracing::info!(gesture, "gesture received");
        self.gestures.borrow_mut().push(gesture);
    }

    /// Reason the current setup cannot start a test, if any.
    fn setup_problem(&self) -> Option<String> {
        let setup = &self.contracts.test_setup;
        match setup {
            TestSetupProvider::FacemaskStudy(_) if setup.test_settings_file().is_empty() => {
                Some("Select a condition before confirming.".to_string())
            }
            TestSetupProvider::Generic(_) => {
                let snr = setup.starting_snr();
                (!snr.is_empty() && snr.trim().parse::<i32>().is_err())
                    .then(|| format!("Unable to read starting SNR \"{snr}\"."))
            }
            _ => None,
        }
    }

    fn show_trial_runner(&self) {
        let runner = &self.contracts.trial_runner;
        runner.show();
        runner.show_exit_test_button();
        runner.show_next_trial_button();
    }

    fn next_modality(&self) -> Modality {
        let index = self.rotation.get();
        self.rotation.set((index + 1) % Modality::ALL.len());
        Modality::ALL[index]
    }

    fn prepare(&self, modality: Modality) {
        let contracts = &self.contracts;
        match modality {
            Modality::FreeResponse => {
                contracts.free_response.clear_free_response();
                contracts.free_response.clear_flag();
            }
            Modality::Syllables => contracts.syllables.clear_flag(),
            Modality::KeywordChoice => {
                let choice = &contracts.keyword_choice;
                choice.clear_flag();
                mark_all_keywords_correct(choice);
                choice.set_text_preceding_first_keyword_button("The");
                choice.set_first_keyword_button_text("boy");
                choice.set_text_following_first_keyword_button("");
                choice.set_second_keyword_button_text("fell");
                choice.set_text_following_second_keyword_button("from the");
                choice.set_third_keyword_button_text("window");
                choice.set_text_following_third_keyword_button(".");
            }
            Modality::KeywordCount => contracts.keyword_count.set_correct_keywords(""),
            Modality::PassFail => {}
        }
    }

    fn response_submitted(&self) {
        self.show_trial_runner();
        if self.trials.get() % TRIALS_PER_BLOCK == 0 {
            let runner = &self.contracts.trial_runner;
            runner.set_continue_testing_dialog_message(format!(
                "{} trials completed. Continue testing?",
                self.trials.get()
            ));
            runner.show_continue_testing_dialog();
        }
    }
}

impl TestSetupObserver for TesterEngine {
    fn notify_confirm_clicked(&self) {
        self.record("test_setup.confirm");
        if let Some(problem) = self.setup_problem() {
            self.contracts.session.show_error_message(problem);
            return;
        }
        self.trials.set(0);
        let runner = &self.contracts.trial_runner;
        runner.display("Press Play Trial to begin");
        runner.secondary_display(format!(
            "Subject {} / Tester {}",
            self.contracts.test_setup.subject_id(),
            self.contracts.test_setup.tester_id()
        ));
        self.show_trial_runner();
    }

    fn notify_play_calibration_clicked(&self) {
        self.record("test_setup.play_calibration");
    }

    fn notify_play_left_speaker_calibration_clicked(&self) {
        self.record("test_setup.play_left_speaker_calibration");
    }

    fn notify_play_right_speaker_calibration_clicked(&self) {
        self.record("test_setup.play_right_speaker_calibration");
    }
}

impl TrialRunnerObserver for TesterEngine {
    fn exit_test(&self) {
        self.record("trial_runner.exit_test");
        self.contracts.test_setup.show();
    }

    fn play_trial(&self) {
        self.record("trial_runner.play_trial");
        let trial = self.trials.get() + 1;
        self.trials.set(trial);
        let modality = self.next_modality();
        self.contracts.trial_runner.display(format!("Trial {trial}"));
        self.prepare(modality);
        self.contracts.show_modality(modality);
    }

    fn decline_continuing_testing(&self) {
        self.record("trial_runner.decline_continuing_testing");
        self.contracts
            .trial_runner
            .show_sheet(format!("Test complete after {} trials.", self.trials.get()));
        self.contracts.test_setup.show();
    }

    fn accept_continuing_testing(&self) {
        self.record("trial_runner.accept_continuing_testing");
    }
}

impl FreeResponseObserver for TesterEngine {
    fn notify_submit_clicked(&self) {
        self.record("free_response.submit");
        tracing::info!(response = %self.contracts.free_response.free_response(), "free response");
        self.response_submitted();
    }
}

impl SyllablesObserver for TesterEngine {
    fn notify_response_button_clicked(&self) {
        self.record("syllables.response");
        tracing::info!(syllable = %self.contracts.syllables.syllable(), "syllable response");
        self.response_submitted();
    }
}

impl KeywordChoiceObserver for TesterEngine {
    fn notify_first_keyword_button_clicked(&self) {
        self.record("keyword_choice.first_keyword");
        self.contracts.keyword_choice.mark_first_keyword_incorrect();
    }

    fn notify_second_keyword_button_clicked(&self) {
        self.record("keyword_choice.second_keyword");
        self.contracts.keyword_choice.mark_second_keyword_incorrect();
    }

    fn notify_third_keyword_button_clicked(&self) {
        self.record("keyword_choice.third_keyword");
        self.contracts.keyword_choice.mark_third_keyword_incorrect();
    }

    fn notify_all_wrong_button_clicked(&self) {
        self.record("keyword_choice.all_wrong");
        self.contracts.keyword_choice.all_wrong();
    }

    fn notify_reset_button_clicked(&self) {
        self.record("keyword_choice.reset");
        mark_all_keywords_correct(&self.contracts.keyword_choice);
    }

    fn notify_submit_clicked(&self) {
        self.record("keyword_choice.submit");
        let snapshot = self.contracts.keyword_choice.snapshot();
        tracing::info!(correct = ?snapshot.correct, flagged = snapshot.flagged, "keyword choice");
        self.response_submitted();
    }
}

impl KeywordCountObserver for TesterEngine {
    fn notify_submit_clicked(&self) {
        self.record("keyword_count.submit");
        match self.contracts.keyword_count.correct_keywords_count() {
            Some(count) => {
                tracing::info!(count, "keyword count");
                self.response_submitted();
            }
            None => self.contracts.session.show_error_message(format!(
                "\"{}\" is not a keyword count.",
                self.contracts.keyword_count.correct_keywords()
            )),
        }
    }
}

impl PassFailObserver for TesterEngine {
    fn notify_correct_clicked(&self) {
        self.record("pass_fail.correct");
        self.response_submitted();
    }

    fn notify_incorrect_clicked(&self) {
        self.record("pass_fail.incorrect");
        self.response_submitted();
    }
}

impl CalibrationValidationObserver for TesterEngine {
    fn notify_menu_selected(&self) {
        self.record("calibration_validation.menu_selected");
        let validation = &self.contracts.calibration_validation;
        validation.present(&ValidationResult::default());
        validation.start();
    }

    fn notify_close_clicked(&self) {
        self.record("calibration_validation.close");
        self.contracts.calibration_validation.stop();
    }
}

impl RunMenuObserver for TesterEngine {
    fn notify_run_calibration_clicked(&self) {
        self.record("run_menu.run_calibration");
    }

    fn notify_validation_menu_selected(&self) {
        self.record("run_menu.validation_menu_selected");
        self.contracts.calibration_validation.notify_menu_selected();
    }
}

/// Keywords start out correct; the tester marks the missed ones.
fn mark_all_keywords_correct(choice: &KeywordChoiceUi) {
    choice.mark_first_keyword_correct();
    choice.mark_second_keyword_correct();
    choice.mark_third_keyword_correct();
}
