//! Audio device and subject screen pickers, plus the error alert.

use egui::{RichText, Ui, Vec2};

use super::choice_row;
use crate::contract::SessionSetupUi;
use crate::ui::theme::Palette;

/// Render the device pickers.
pub fn show(ui: &mut Ui, session: &SessionSetupUi) {
    egui::Grid::new("session_setup")
        .num_columns(2)
        .spacing([16.0, 8.0])
        .show(ui, |ui| {
            choice_row(ui, "Audio Device", "audio_device", session.audio_devices());
            choice_row(ui, "Subject Screen", "subject_screen", session.subject_screens());
        });
}

/// Render the error alert while the engine has one raised.
pub fn show_error_alert(ctx: &egui::Context, session: &SessionSetupUi, palette: &Palette) {
    let snapshot = session.snapshot();
    if !snapshot.error_visible {
        return;
    }

    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_size(Vec2::new(320.0, 100.0));
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(RichText::new(&snapshot.error_message).color(palette.error));
                ui.add_space(12.0);
                if ui.button("OK").clicked() {
                    session.dismiss_error_message();
                }
            });
        });
}
