//! Visibility and mutual exclusion across every role.

use avsin::coordinator::{Modality, Phase, Slot, Surface};
use avsin::resources::StaticResources;
use avsin::{ContractSet, SetupVariant, TestSetupProvider};
use avsin::contract::TestSetupUi;

fn contracts() -> ContractSet {
    ContractSet::new(SetupVariant::Generic, &StaticResources::new())
}

/// Visibility of every coordinated role, setup first.
fn visible(contracts: &ContractSet) -> Vec<bool> {
    vec![
        contracts.test_setup.is_visible(),
        contracts.trial_runner.is_visible(),
        contracts.free_response.is_visible(),
        contracts.syllables.is_visible(),
        contracts.keyword_choice.is_visible(),
        contracts.keyword_count.is_visible(),
        contracts.pass_fail.is_visible(),
    ]
}

#[test]
fn test_last_show_or_hide_wins() {
    let contracts = contracts();
    let runner = &contracts.trial_runner;

    let sequences: [&[bool]; 4] = [
        &[true],
        &[true, false],
        &[false, true, true],
        &[true, true, false, false, true, false],
    ];
    for sequence in sequences {
        for &show in sequence {
            if show {
                runner.show();
            } else {
                runner.hide();
            }
        }
        assert_eq!(runner.is_visible(), *sequence.last().unwrap(), "{sequence:?}");
    }
}

#[test]
fn test_standalone_roles_last_write_wins() {
    let contracts = contracts();
    let window = &contracts.calibration_validation;
    window.show();
    window.hide();
    window.show();
    assert!(window.is_visible());
    window.hide();
    window.hide();
    assert!(!window.is_visible());

    // Independent of the session phase
    contracts.calibration_validation.show();
    contracts.show_modality(Modality::PassFail);
    assert!(contracts.calibration_validation.is_visible());
    assert!(contracts.run_menu.is_visible());
}

#[test]
fn test_at_most_one_running_surface() {
    let contracts = contracts();

    contracts.trial_runner.show();
    contracts.free_response.show();
    contracts.syllables.show();
    contracts.keyword_choice.show();
    contracts.keyword_count.show();
    contracts.pass_fail.show();

    assert_eq!(
        visible(&contracts),
        vec![false, false, false, false, false, false, true]
    );
    assert_eq!(
        contracts.coordinator.phase(),
        Phase::TestRunning {
            surface: Some(Surface::Response(Modality::PassFail))
        }
    );
}

#[test]
fn test_hiding_setup_enters_test_running() {
    let contracts = contracts();
    assert_eq!(contracts.coordinator.phase(), Phase::SessionConfiguring);
    assert_eq!(visible(&contracts), vec![true, false, false, false, false, false, false]);

    contracts.test_setup.hide();
    assert_eq!(contracts.coordinator.phase(), Phase::TestRunning { surface: None });
    assert!(visible(&contracts).iter().all(|v| !v));

    contracts.test_setup.show();
    assert_eq!(contracts.coordinator.phase(), Phase::SessionConfiguring);
}

#[test]
fn test_hiding_an_invisible_surface_changes_nothing() {
    let contracts = contracts();
    contracts.show_modality(Modality::Syllables);
    contracts.free_response.hide();
    assert!(contracts.syllables.is_visible());
    assert!(contracts
        .coordinator
        .is_visible(Slot::Running(Surface::Response(Modality::Syllables))));
}

#[test]
fn test_every_setup_variant_shares_the_slot() {
    for variant in [
        SetupVariant::Generic,
        SetupVariant::FacemaskStudy,
        SetupVariant::MinimalTester,
    ] {
        let contracts = ContractSet::new(variant, &StaticResources::new());
        assert!(matches!(
            (&contracts.test_setup, variant),
            (TestSetupProvider::Generic(_), SetupVariant::Generic)
                | (TestSetupProvider::FacemaskStudy(_), SetupVariant::FacemaskStudy)
                | (TestSetupProvider::MinimalTester(_), SetupVariant::MinimalTester)
        ));
        contracts.trial_runner.show();
        assert!(!contracts.test_setup.is_visible());
    }
}
