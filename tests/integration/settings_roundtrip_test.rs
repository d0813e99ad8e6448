//! Persisted settings survive a save and a load into fresh contracts.

use std::fs;

use avsin::contract::test_setup::FACEMASK_CONDITIONS;
use avsin::contract::TestSetupUi;
use avsin::resources::{BundledResources, ResourceResolver, StaticResources};
use avsin::storage::{
    MemorySettingsStore, PersistedSettings, SettingsError, SettingsKey, SettingsStore,
    TomlSettingsStore,
};
use avsin::{ContractSet, SetupVariant, TestSetupProvider};
use tempfile::TempDir;

const DEVICES: [&str; 2] = ["Built-in Output", "RME Fireface UCX"];
const SCREENS: [&str; 2] = ["Built-in Retina Display", "DELL U2719D"];

/// Contracts with menus populated the way the binary does at startup.
fn startup(variant: SetupVariant, resolver: &dyn ResourceResolver) -> ContractSet {
    let contracts = ContractSet::new(variant, resolver);
    contracts.session.populate_audio_device_menu(DEVICES);
    contracts.session.populate_subject_screen_menu(SCREENS);
    contracts
        .test_setup
        .populate_transducer_menu(&["headphone".to_string(), "2 speakers".to_string()]);
    contracts
}

fn load_into(store: &dyn SettingsStore, contracts: &ContractSet) {
    store
        .load()
        .unwrap()
        .apply(&contracts.session, &contracts.test_setup);
}

#[test]
fn test_generic_round_trip_through_toml() {
    let dir = TempDir::new().unwrap();
    let store = TomlSettingsStore::new(dir.path().join("nested").join("settings.toml"));

    let before = startup(SetupVariant::Generic, &StaticResources::new());
    before.session.select_audio_device("RME Fireface UCX").unwrap();
    before.session.select_subject_screen("DELL U2719D").unwrap();
    let TestSetupProvider::Generic(setup) = &before.test_setup else {
        panic!("expected generic setup");
    };
    setup.set_subject_id("S012");
    setup.set_tester_id("RA");
    setup.set_session("2");
    setup.set_starting_snr("-4");
    setup.select_transducer("2 speakers").unwrap();
    setup.set_test_settings_file("/Users/lab/settings/adaptive-pass-fail.txt");
    setup.set_rme_setting("Fireface 48k");

    let saved = PersistedSettings::capture(&before.session, &before.test_setup);
    for key in SettingsKey::ALL {
        assert!(!saved.get(key).is_empty(), "{key} was not captured");
    }
    store.save(&saved).unwrap();

    let after = startup(SetupVariant::Generic, &StaticResources::new());
    load_into(&store, &after);

    assert_eq!(PersistedSettings::capture(&after.session, &after.test_setup), saved);
}

#[test]
fn test_facemask_round_trip() {
    let dir = TempDir::new().unwrap();
    for stem in FACEMASK_CONDITIONS {
        fs::write(dir.path().join(format!("{stem}.txt")), "").unwrap();
    }
    let resources = BundledResources::new(dir.path());
    let store = MemorySettingsStore::new();

    let before = startup(SetupVariant::FacemaskStudy, &resources);
    before.session.select_audio_device("Built-in Output").unwrap();
    let TestSetupProvider::FacemaskStudy(setup) = &before.test_setup else {
        panic!("expected facemask setup");
    };
    setup.set_subject_id("F03");
    setup.select_condition("CommunicatorMask_AO").unwrap();
    setup.set_minus_ten_db_starting_snr(true);

    let saved = PersistedSettings::capture(&before.session, &before.test_setup);
    assert_eq!(saved.starting_snr, "-10");
    store.save(&saved).unwrap();

    let after = startup(SetupVariant::FacemaskStudy, &resources);
    load_into(&store, &after);

    let TestSetupProvider::FacemaskStudy(restored) = &after.test_setup else {
        panic!("expected facemask setup");
    };
    assert_eq!(restored.condition(), "CommunicatorMask_AO");
    assert!(restored.minus_ten_db_starting_snr());
    assert_eq!(PersistedSettings::capture(&after.session, &after.test_setup), saved);
}

#[test]
fn test_missing_file_loads_empty_values() {
    let dir = TempDir::new().unwrap();
    let store = TomlSettingsStore::new(dir.path().join("absent.toml"));
    let settings = store.load().unwrap();
    assert_eq!(settings, PersistedSettings::default());

    let contracts = startup(SetupVariant::Generic, &StaticResources::new());
    settings.apply(&contracts.session, &contracts.test_setup);
    assert_eq!(contracts.test_setup.subject_id(), "");
    assert_eq!(contracts.session.audio_device(), "");
}

#[test]
fn test_partial_file_keeps_other_keys_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "TesterID = \"MK\"\nTransducer = \"headphone\"\n").unwrap();

    let contracts = startup(SetupVariant::Generic, &StaticResources::new());
    load_into(&TomlSettingsStore::new(&path), &contracts);

    assert_eq!(contracts.test_setup.tester_id(), "MK");
    assert_eq!(contracts.test_setup.transducer(), "headphone");
    assert_eq!(contracts.test_setup.session(), "");
}

#[test]
fn test_stale_selection_is_skipped() {
    let store = MemorySettingsStore::new();
    let mut stored = PersistedSettings::default();
    stored.set(SettingsKey::AudioDevice, "Unplugged Interface");
    stored.set(SettingsKey::SubjectId, "S001");
    store.save(&stored).unwrap();

    let contracts = startup(SetupVariant::Generic, &StaticResources::new());
    load_into(&store, &contracts);

    assert_eq!(contracts.session.audio_device(), "");
    assert_eq!(contracts.test_setup.subject_id(), "S001");
}

#[test]
fn test_malformed_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "SubjectID = [").unwrap();

    let result = TomlSettingsStore::new(&path).load();
    assert!(matches!(result, Err(SettingsError::ParseError(_))));
}

fn generic_record() -> PersistedSettings {
    let mut stored = PersistedSettings::default();
    stored.set(SettingsKey::AudioDevice, "RME Fireface UCX");
    stored.set(SettingsKey::SubjectScreen, "DELL U2719D");
    stored.set(SettingsKey::SubjectId, "S1");
    stored.set(SettingsKey::TesterId, "RA");
    stored.set(SettingsKey::Session, "2");
    stored.set(SettingsKey::StartingSnr, "-4");
    stored.set(SettingsKey::Transducer, "headphone");
    stored.set(SettingsKey::TestSettingsFilePath, "/Users/lab/settings/adaptive.txt");
    stored.set(SettingsKey::RmeSetting, "B");
    stored
}

/// Load, apply and save back without touching any field.
fn untouched_session(variant: SetupVariant, stored: &PersistedSettings) -> PersistedSettings {
    let store = MemorySettingsStore::new();
    store.save(stored).unwrap();

    let contracts = startup(variant, &StaticResources::new());
    let mut settings = store.load().unwrap();
    settings.apply(&contracts.session, &contracts.test_setup);
    settings.capture_into(&contracts.session, &contracts.test_setup);
    store.save(&settings).unwrap();
    store.load().unwrap()
}

#[test]
fn test_untouched_facemask_run_keeps_generic_values() {
    let stored = generic_record();
    assert_eq!(untouched_session(SetupVariant::FacemaskStudy, &stored), stored);
}

#[test]
fn test_untouched_minimal_run_keeps_generic_values() {
    let stored = generic_record();
    assert_eq!(untouched_session(SetupVariant::MinimalTester, &stored), stored);
}

#[test]
fn test_untouched_generic_run_round_trips() {
    let stored = generic_record();
    assert_eq!(untouched_session(SetupVariant::Generic, &stored), stored);
}

#[test]
fn test_stale_selections_survive_a_save() {
    let mut stored = generic_record();
    stored.set(SettingsKey::AudioDevice, "Unplugged Interface");
    stored.set(SettingsKey::SubjectScreen, "Projector");
    stored.set(SettingsKey::Transducer, "3 speakers");

    assert_eq!(untouched_session(SetupVariant::Generic, &stored), stored);
}

#[test]
fn test_minimal_edit_only_changes_tester_id() {
    let stored = generic_record();
    let contracts = startup(SetupVariant::MinimalTester, &StaticResources::new());
    let mut settings = stored.clone();
    settings.apply(&contracts.session, &contracts.test_setup);

    let TestSetupProvider::MinimalTester(setup) = &contracts.test_setup else {
        panic!("expected minimal setup");
    };
    setup.set_tester_id("MK");
    settings.capture_into(&contracts.session, &contracts.test_setup);

    let mut expected = stored;
    expected.set(SettingsKey::TesterId, "MK");
    assert_eq!(settings, expected);
}

#[test]
fn test_facemask_toggle_overwrites_starting_snr() {
    let stored = generic_record();
    let contracts = startup(SetupVariant::FacemaskStudy, &StaticResources::new());
    let mut settings = stored.clone();
    settings.apply(&contracts.session, &contracts.test_setup);

    let TestSetupProvider::FacemaskStudy(setup) = &contracts.test_setup else {
        panic!("expected facemask setup");
    };
    assert!(!setup.minus_ten_db_starting_snr());
    setup.set_minus_ten_db_starting_snr(true);
    settings.capture_into(&contracts.session, &contracts.test_setup);

    assert_eq!(settings.starting_snr, "-10");
    assert_eq!(settings.tester_id, "RA");
    assert_eq!(settings.transducer, "headphone");
}
