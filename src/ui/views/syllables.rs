//! Syllable response grid.

use egui::{RichText, Ui, Vec2};

use crate::contract::{SyllablesUi, SYLLABLE_GRID};
use crate::ui::theme::Palette;

pub fn show(ui: &mut Ui, form: &SyllablesUi, palette: &Palette) {
    let snapshot = form.snapshot();

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        egui::Grid::new("syllable_grid")
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for row in SYLLABLE_GRID {
                    for label in row {
                        let mut text = RichText::new(label).size(20.0);
                        if label == snapshot.syllable {
                            text = text.color(palette.accent).strong();
                        }
                        let button = egui::Button::new(text).min_size(Vec2::new(64.0, 48.0));
                        if ui.add(button).clicked() {
                            form.notify_response_button_clicked(label);
                        }
                    }
                    ui.end_row();
                }
            });

        ui.add_space(12.0);
        let mut flagged = snapshot.flagged;
        if ui.checkbox(&mut flagged, "Flag").changed() {
            form.set_flagged(flagged);
        }
    });
}
