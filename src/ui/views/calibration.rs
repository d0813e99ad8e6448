//! Calibration validation results window.

use egui::{RichText, Vec2};

use crate::contract::CalibrationValidationUi;

pub fn show(ctx: &egui::Context, window: &CalibrationValidationUi) {
    let snapshot = window.snapshot();
    if !snapshot.visible {
        return;
    }

    egui::Window::new("Calibration Validation")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.set_min_size(Vec2::new(280.0, 120.0));
            egui::Grid::new("validation_results")
                .num_columns(3)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    ui.label("");
                    ui.label(RichText::new("Accuracy (deg)").strong());
                    ui.label(RichText::new("Precision (deg)").strong());
                    ui.end_row();

                    ui.label("Left eye");
                    ui.label(&snapshot.left_eye_accuracy_degrees);
                    ui.label(&snapshot.left_eye_precision_degrees);
                    ui.end_row();

                    ui.label("Right eye");
                    ui.label(&snapshot.right_eye_accuracy_degrees);
                    ui.label(&snapshot.right_eye_precision_degrees);
                    ui.end_row();
                });
            ui.add_space(8.0);
            if ui.button("Close").clicked() {
                window.notify_close_clicked();
            }
        });
}
