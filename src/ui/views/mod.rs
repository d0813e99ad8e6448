//! One egui view per contract.
//!
//! Views read a contract snapshot each frame, write edits back through the
//! contract's setters and forward clicks through its gesture methods. They
//! hold no state of their own.

pub mod calibration;
pub mod free_response;
pub mod keyword_choice;
pub mod keyword_count;
pub mod pass_fail;
pub mod run_menu;
pub mod session;
pub mod syllables;
pub mod test_setup;
pub mod trial_runner;

use egui::Ui;

use crate::state::SelectableCollection;

/// Labelled single-line text edit; `apply` receives the edited text.
pub(crate) fn text_row(ui: &mut Ui, label: &str, value: String, apply: impl FnOnce(String)) {
    ui.label(label);
    let mut text = value;
    if ui.text_edit_singleline(&mut text).changed() {
        apply(text);
    }
    ui.end_row();
}

/// Labelled drop-down over a [`SelectableCollection`].
pub(crate) fn choice_row(ui: &mut Ui, label: &str, id: &str, collection: &SelectableCollection) {
    ui.label(label);
    let selected = collection.selected();
    let shown = if selected.is_empty() {
        "Select...".to_string()
    } else {
        selected.clone()
    };
    egui::ComboBox::from_id_salt(id)
        .selected_text(shown)
        .show_ui(ui, |ui| {
            for option in collection.options() {
                if ui.selectable_label(option == selected, &option).clicked() {
                    if let Err(e) = collection.select(&option) {
                        tracing::warn!(error = %e, "menu selection rejected");
                    }
                }
            }
        });
    ui.end_row();
}
