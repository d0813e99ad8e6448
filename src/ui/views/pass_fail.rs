//! Correct/incorrect grading.

use egui::{RichText, Ui, Vec2};

use crate::contract::PassFailUi;
use crate::ui::theme::Palette;

pub fn show(ui: &mut Ui, form: &PassFailUi, palette: &Palette) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.horizontal(|ui| {
            let size = Vec2::new(120.0, 48.0);
            let correct = egui::Button::new(RichText::new("Correct").color(palette.correct))
                .min_size(size);
            if ui.add(correct).clicked() {
                form.notify_correct_clicked();
            }
            let incorrect = egui::Button::new(RichText::new("Incorrect").color(palette.incorrect))
                .min_size(size);
            if ui.add(incorrect).clicked() {
                form.notify_incorrect_clicked();
            }
        });
    });
}
