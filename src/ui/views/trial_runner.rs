//! Trial runner controls and its dialogs.

use egui::{RichText, Ui, Vec2};

use crate::contract::TrialRunnerUi;
use crate::ui::theme::Palette;

/// Render the trial text and the exit/play controls.
pub fn show(ui: &mut Ui, runner: &TrialRunnerUi, palette: &Palette) {
    let snapshot = runner.snapshot();

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(RichText::new(&snapshot.primary_text).size(28.0).strong());
        ui.label(RichText::new(&snapshot.secondary_text).color(palette.text_secondary));
        ui.add_space(24.0);

        ui.horizontal(|ui| {
            if ui
                .add_enabled(
                    snapshot.exit_enabled && !snapshot.continue_testing_dialog,
                    egui::Button::new("Exit Test"),
                )
                .clicked()
            {
                runner.exit_test();
            }
            if ui
                .add_enabled(
                    snapshot.next_trial_enabled,
                    egui::Button::new(RichText::new("Play Trial").strong()),
                )
                .clicked()
            {
                runner.play_trial();
            }
        });
    });
}

/// Render the continue-testing dialog or the results sheet, whichever is open.
pub fn show_dialogs(ctx: &egui::Context, runner: &TrialRunnerUi) {
    let snapshot = runner.snapshot();

    if snapshot.continue_testing_dialog {
        egui::Window::new("Continue Testing?")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_size(Vec2::new(320.0, 100.0));
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(&snapshot.continue_testing_message);
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        if ui.button("Exit").clicked() {
                            runner.decline_continuing_testing();
                        }
                        if ui.button("Continue").clicked() {
                            runner.accept_continuing_testing();
                        }
                    });
                });
            });
    }

    if let Some(message) = snapshot.sheet {
        egui::Window::new("Results")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_size(Vec2::new(320.0, 100.0));
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(message);
                    ui.add_space(12.0);
                    if ui.button("Close").clicked() {
                        runner.dismiss_sheet();
                    }
                });
            });
    }
}
