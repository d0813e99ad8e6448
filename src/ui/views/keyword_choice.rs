//! Keyword correctness marking.

use egui::{RichText, Ui};

use crate::contract::KeywordChoiceUi;
use crate::ui::theme::Palette;

pub fn show(ui: &mut Ui, form: &KeywordChoiceUi, palette: &Palette) {
    let snapshot = form.snapshot();
    let keyword = |index: usize| {
        let color = if snapshot.correct[index] {
            palette.correct
        } else {
            palette.incorrect
        };
        egui::Button::new(RichText::new(&snapshot.labels[index]).color(color).strong())
    };

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.horizontal_wrapped(|ui| {
            ui.label(&snapshot.text_preceding_first);
            if ui.add(keyword(0)).clicked() {
                form.notify_first_keyword_button_clicked();
            }
            ui.label(&snapshot.text_following_first);
            if ui.add(keyword(1)).clicked() {
                form.notify_second_keyword_button_clicked();
            }
            ui.label(&snapshot.text_following_second);
            if ui.add(keyword(2)).clicked() {
                form.notify_third_keyword_button_clicked();
            }
            ui.label(&snapshot.text_following_third);
        });

        ui.add_space(12.0);
        let mut flagged = snapshot.flagged;
        if ui.checkbox(&mut flagged, "Flag").changed() {
            form.set_flagged(flagged);
        }

        ui.horizontal(|ui| {
            if ui.button("Reset").clicked() {
                form.notify_reset_button_clicked();
            }
            if ui.button("All Wrong").clicked() {
                form.notify_all_wrong_button_clicked();
            }
            if ui.button(RichText::new("Submit").strong()).clicked() {
                form.notify_submit_clicked();
            }
        });
    });
}
