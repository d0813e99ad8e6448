//! Application menu.

use egui::Ui;

use crate::contract::RunMenu;

pub fn show(ui: &mut Ui, menu: &RunMenu) {
    if !menu.is_visible() {
        return;
    }
    ui.horizontal(|ui| {
        ui.menu_button("Run", |ui| {
            if ui.button("Eye Tracker Calibration").clicked() {
                menu.notify_run_calibration_clicked();
                ui.close();
            }
            if ui.button("Calibration Validation").clicked() {
                menu.notify_validation_menu_selected();
                ui.close();
            }
        });
    });
}
