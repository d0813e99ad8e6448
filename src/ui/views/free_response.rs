//! Free response entry.

use egui::Ui;

use crate::contract::FreeResponseUi;

pub fn show(ui: &mut Ui, form: &FreeResponseUi) {
    let snapshot = form.snapshot();

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        let mut response = snapshot.response;
        let edit = ui.add(egui::TextEdit::singleline(&mut response).desired_width(360.0));
        if edit.changed() {
            form.set_free_response(response);
        }
        let entered = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let mut flagged = snapshot.flagged;
        if ui.checkbox(&mut flagged, "Flag").changed() {
            form.set_flagged(flagged);
        }

        ui.add_space(12.0);
        if ui.button("Submit").clicked() || entered {
            form.notify_submit_clicked();
        }
    });
}
