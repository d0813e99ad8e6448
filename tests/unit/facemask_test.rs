//! Facemask study condition table.

use std::fs;

use avsin::contract::test_setup::{build_condition_table, FacemaskStudySetup, FACEMASK_CONDITIONS};
use avsin::contract::TestSetupUi;
use avsin::coordinator::PresentationCoordinator;
use avsin::resources::{BundledResources, StaticResources};
use tempfile::TempDir;

fn bundle() -> (TempDir, BundledResources) {
    let dir = TempDir::new().unwrap();
    for stem in FACEMASK_CONDITIONS {
        fs::write(dir.path().join(format!("{stem}.txt")), "method: adaptive pass fail\n").unwrap();
    }
    let resources = BundledResources::new(dir.path());
    (dir, resources)
}

#[test]
fn test_catalogue_stems_resolve_to_bundled_files() {
    let (_dir, resources) = bundle();
    let table = build_condition_table(FACEMASK_CONDITIONS, &resources);

    for stem in ["NoMask_AO", "NoMask_AV", "CommunicatorMask_AO", "CommunicatorMask_AV"] {
        let path = table.settings_path(stem).unwrap();
        assert!(path.is_file(), "{stem}");
        assert!(!path.as_os_str().is_empty());
    }
}

#[test]
fn test_names_outside_catalogue_are_absent() {
    let (_dir, resources) = bundle();
    let table = build_condition_table(FACEMASK_CONDITIONS, &resources);
    assert!(table.settings_path("ClearMask_AV").is_none());
    assert!(table.settings_path("").is_none());
}

#[test]
fn test_catalogue_order_is_kept() {
    let table = build_condition_table(FACEMASK_CONDITIONS, &StaticResources::new());
    assert_eq!(table.names().collect::<Vec<_>>(), FACEMASK_CONDITIONS.to_vec());
}

#[test]
fn test_setup_reports_selected_condition_file() {
    let (_dir, resources) = bundle();
    let setup = FacemaskStudySetup::new(&PresentationCoordinator::new(), &resources);

    setup.select_condition("NoMask_AV").unwrap();
    assert!(setup.test_settings_file().ends_with("NoMask_AV.txt"));
    assert!(setup.select_condition("ClearMask_AV").is_err());
    assert_eq!(setup.condition(), "NoMask_AV");
}

#[test]
fn test_missing_bundle_file_gives_empty_path() {
    let setup = FacemaskStudySetup::new(&PresentationCoordinator::new(), &StaticResources::new());
    setup.select_condition("NoMask_AO").unwrap();
    assert_eq!(setup.test_settings_file(), "");
}
