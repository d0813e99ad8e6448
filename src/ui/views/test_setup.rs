//! Test setup forms, one per setup variant.

use egui::{RichText, Ui};
use rfd::FileDialog;

use super::{choice_row, text_row};
use crate::contract::test_setup::{FacemaskStudySetup, GenericTestSetup, MinimalTesterSetup};
use crate::contract::{TestSetupProvider, TestSetupUi};

/// Render whichever form `setup` holds.
pub fn show(ui: &mut Ui, setup: &TestSetupProvider) {
    ui.heading("Test Setup");
    ui.add_space(8.0);
    match setup {
        TestSetupProvider::Generic(generic) => show_generic(ui, generic),
        TestSetupProvider::FacemaskStudy(facemask) => show_facemask(ui, facemask),
        TestSetupProvider::MinimalTester(minimal) => show_minimal(ui, minimal),
    }
}

fn show_generic(ui: &mut Ui, setup: &GenericTestSetup) {
    let snapshot = setup.snapshot();

    egui::Grid::new("generic_setup")
        .num_columns(2)
        .spacing([16.0, 8.0])
        .show(ui, |ui| {
            text_row(ui, "Subject ID", snapshot.subject_id, |v| setup.set_subject_id(v));
            text_row(ui, "Tester ID", snapshot.tester_id, |v| setup.set_tester_id(v));
            text_row(ui, "Session", snapshot.session, |v| setup.set_session(v));
            text_row(ui, "RME Setting", snapshot.rme_setting, |v| setup.set_rme_setting(v));
            choice_row(ui, "Transducer", "transducer", setup.transducers());
            text_row(ui, "Starting SNR (dB)", snapshot.starting_snr, |v| {
                setup.set_starting_snr(v)
            });

            ui.label("Test Settings File");
            ui.horizontal(|ui| {
                let mut path = snapshot.test_settings_file;
                if ui.text_edit_singleline(&mut path).changed() {
                    setup.set_test_settings_file(path);
                }
                if ui.button("Browse...").clicked() {
                    if let Some(picked) = FileDialog::new()
                        .add_filter("Test settings", &["txt"])
                        .pick_file()
                    {
                        setup.set_test_settings_file(picked.display().to_string());
                    }
                }
            });
            ui.end_row();
        });

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button("Play Calibration").clicked() {
            setup.notify_play_calibration_clicked();
        }
        if ui.button(RichText::new("Confirm").strong()).clicked() {
            setup.notify_confirm_clicked();
        }
    });
}

fn show_facemask(ui: &mut Ui, setup: &FacemaskStudySetup) {
    let snapshot = setup.snapshot();

    egui::Grid::new("facemask_setup")
        .num_columns(2)
        .spacing([16.0, 8.0])
        .show(ui, |ui| {
            text_row(ui, "Subject ID", snapshot.subject_id, |v| setup.set_subject_id(v));
            choice_row(ui, "Condition", "condition", setup.conditions());

            ui.label("Starting SNR");
            let mut minus_ten = snapshot.minus_ten_db_starting_snr;
            if ui.checkbox(&mut minus_ten, "-10 dB (otherwise 0 dB)").changed() {
                setup.set_minus_ten_db_starting_snr(minus_ten);
            }
            ui.end_row();
        });

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button("Play Left Speaker").clicked() {
            setup.notify_play_left_speaker_calibration_clicked();
        }
        if ui.button("Play Right Speaker").clicked() {
            setup.notify_play_right_speaker_calibration_clicked();
        }
        if ui.button(RichText::new("Confirm").strong()).clicked() {
            setup.notify_confirm_clicked();
        }
    });
}

fn show_minimal(ui: &mut Ui, setup: &MinimalTesterSetup) {
    egui::Grid::new("minimal_setup")
        .num_columns(2)
        .spacing([16.0, 8.0])
        .show(ui, |ui| {
            text_row(ui, "Tester ID", setup.tester_id(), |v| setup.set_tester_id(v));
        });

    ui.add_space(12.0);
    if ui.button(RichText::new("Confirm").strong()).clicked() {
        setup.notify_confirm_clicked();
    }
}
