//! Correct-keyword count entry.

use egui::Ui;

use crate::contract::KeywordCountUi;

pub fn show(ui: &mut Ui, form: &KeywordCountUi) {
    let snapshot = form.snapshot();

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label("Correct keywords");
        let mut count = snapshot.count;
        if ui
            .add(egui::TextEdit::singleline(&mut count).desired_width(80.0))
            .changed()
        {
            form.set_correct_keywords(count);
        }
        ui.add_space(12.0);
        if ui.button("Submit").clicked() {
            form.notify_submit_clicked();
        }
    });
}
