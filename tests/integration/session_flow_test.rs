//! The tester engine driving a whole session through the contracts.

use std::rc::Rc;

use avsin::contract::{TestSetupProvider, TestSetupUi};
use avsin::coordinator::{Dialog, Modality, Phase, Surface};
use avsin::harness::TesterEngine;
use avsin::resources::StaticResources;
use avsin::{ContractSet, SetupVariant};

fn session(variant: SetupVariant) -> (Rc<TesterEngine>, Rc<ContractSet>) {
    let contracts = Rc::new(ContractSet::new(variant, &StaticResources::new()));
    let engine = TesterEngine::attach(Rc::clone(&contracts));
    (engine, contracts)
}

fn running(contracts: &ContractSet) -> Option<Surface> {
    match contracts.coordinator.phase() {
        Phase::TestRunning { surface } => surface,
        Phase::SessionConfiguring => None,
    }
}

fn confirm(contracts: &ContractSet) {
    let TestSetupProvider::Generic(setup) = &contracts.test_setup else {
        panic!("expected generic setup");
    };
    setup.notify_confirm_clicked();
}

#[test]
fn test_full_session() {
    let (engine, contracts) = session(SetupVariant::Generic);
    let TestSetupProvider::Generic(setup) = &contracts.test_setup else {
        panic!("expected generic setup");
    };
    setup.set_subject_id("S01");
    setup.set_tester_id("RA");
    setup.set_starting_snr("0");
    confirm(&contracts);
    assert_eq!(running(&contracts), Some(Surface::TrialRunner));
    assert!(!contracts.test_setup.is_visible());

    // Trial 1: free response
    contracts.trial_runner.play_trial();
    assert_eq!(running(&contracts), Some(Surface::Response(Modality::FreeResponse)));
    contracts.free_response.set_free_response("the dog ran");
    contracts.free_response.notify_submit_clicked();
    assert_eq!(running(&contracts), Some(Surface::TrialRunner));

    // Trial 2: syllables
    contracts.trial_runner.play_trial();
    assert_eq!(running(&contracts), Some(Surface::Response(Modality::Syllables)));
    contracts.syllables.notify_response_button_clicked("Sh");
    assert_eq!(contracts.syllables.syllable(), "Sh");

    // Trial 3: keyword choice, then the continue prompt
    contracts.trial_runner.play_trial();
    assert_eq!(running(&contracts), Some(Surface::Response(Modality::KeywordChoice)));
    assert_eq!(contracts.keyword_choice.snapshot().labels[1], "fell");
    contracts.keyword_choice.notify_first_keyword_button_clicked();
    contracts.keyword_choice.notify_submit_clicked();
    assert_eq!(contracts.coordinator.dialog(), Some(Dialog::ContinueTesting));
    assert_eq!(
        contracts.trial_runner.continue_testing_dialog_message(),
        "3 trials completed. Continue testing?"
    );

    contracts.trial_runner.accept_continuing_testing();
    assert_eq!(contracts.coordinator.dialog(), None);
    assert_eq!(running(&contracts), Some(Surface::TrialRunner));

    // Trials 4-6
    contracts.trial_runner.play_trial();
    contracts.keyword_count.set_correct_keywords("2");
    contracts.keyword_count.notify_submit_clicked();
    contracts.trial_runner.play_trial();
    contracts.pass_fail.notify_correct_clicked();
    contracts.trial_runner.play_trial();
    assert_eq!(running(&contracts), Some(Surface::Response(Modality::FreeResponse)));
    assert_eq!(contracts.free_response.free_response(), "");
    contracts.free_response.notify_submit_clicked();

    contracts.trial_runner.decline_continuing_testing();
    assert_eq!(contracts.coordinator.phase(), Phase::SessionConfiguring);
    assert_eq!(
        contracts.trial_runner.sheet().as_deref(),
        Some("Test complete after 6 trials.")
    );
    assert_eq!(engine.trials(), 6);

    let gestures = engine.gestures();
    assert_eq!(gestures.first(), Some(&"test_setup.confirm"));
    assert_eq!(gestures.last(), Some(&"trial_runner.decline_continuing_testing"));
    assert_eq!(
        gestures.iter().filter(|g| **g == "trial_runner.play_trial").count(),
        6
    );
}

#[test]
fn test_exit_returns_to_setup() {
    let (_engine, contracts) = session(SetupVariant::Generic);
    confirm(&contracts);
    contracts.trial_runner.play_trial();
    contracts.trial_runner.exit_test();

    assert_eq!(contracts.coordinator.phase(), Phase::SessionConfiguring);
    assert!(contracts.test_setup.is_visible());
}

#[test]
fn test_bad_starting_snr_raises_error_alert() {
    let (_engine, contracts) = session(SetupVariant::Generic);
    let TestSetupProvider::Generic(setup) = &contracts.test_setup else {
        panic!("expected generic setup");
    };
    setup.set_starting_snr("loud");
    setup.notify_confirm_clicked();

    assert!(contracts.session.error_message_visible());
    assert_eq!(
        contracts.session.error_message(),
        "Unable to read starting SNR \"loud\"."
    );
    assert_eq!(contracts.coordinator.phase(), Phase::SessionConfiguring);

    contracts.session.dismiss_error_message();
    assert!(!contracts.session.error_message_visible());
}

#[test]
fn test_bad_keyword_count_stays_on_form() {
    let (_engine, contracts) = session(SetupVariant::MinimalTester);
    for _ in 0..4 {
        contracts.trial_runner.play_trial();
    }
    assert_eq!(running(&contracts), Some(Surface::Response(Modality::KeywordCount)));

    contracts.keyword_count.set_correct_keywords("many");
    contracts.keyword_count.notify_submit_clicked();
    assert!(contracts.session.error_message_visible());
    assert_eq!(running(&contracts), Some(Surface::Response(Modality::KeywordCount)));
}

#[test]
fn test_dropping_engine_silences_gestures() {
    let (engine, contracts) = session(SetupVariant::Generic);
    drop(engine);

    confirm(&contracts);
    contracts.trial_runner.play_trial();
    assert_eq!(contracts.coordinator.phase(), Phase::SessionConfiguring);
    assert!(!contracts.trial_runner.is_attached());
}
