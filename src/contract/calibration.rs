//! Read-only eye-tracker calibration validation window.

use crate::contract::{Contract, Visibility};
use crate::state::StringField;

pub trait CalibrationValidationObserver {
    fn notify_menu_selected(&self);
    fn notify_close_clicked(&self);
}

/// Gaze error for one eye, in degrees of visual angle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonocularResult {
    /// Distance between the target and the mean gaze point
    pub error_of_mean_gaze_degrees: f32,
    /// Spread of gaze samples around their mean
    pub standard_deviation_from_mean_gaze_degrees: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationResult {
    pub left: MonocularResult,
    pub right: MonocularResult,
}

#[derive(Debug, Default)]
pub struct CalibrationValidationFields {
    left_eye_accuracy_degrees: StringField,
    left_eye_precision_degrees: StringField,
    right_eye_accuracy_degrees: StringField,
    right_eye_precision_degrees: StringField,
}

/// Standalone window: its visibility does not take part in the session phase.
pub type CalibrationValidationUi =
    Contract<CalibrationValidationFields, dyn CalibrationValidationObserver>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CalibrationValidationSnapshot {
    pub visible: bool,
    pub left_eye_accuracy_degrees: String,
    pub left_eye_precision_degrees: String,
    pub right_eye_accuracy_degrees: String,
    pub right_eye_precision_degrees: String,
}

fn degrees(value: f32) -> String {
    format!("{value}")
}

impl CalibrationValidationUi {
    pub fn new() -> Self {
        Contract::from_parts(
            CalibrationValidationFields::default(),
            Visibility::standalone(false),
        )
    }

    /// Open the window.
    pub fn start(&self) {
        self.show();
    }

    /// Close the window.
    pub fn stop(&self) {
        self.hide();
    }

    /// Write a validation result into the four display fields.
    pub fn present(&self, result: &ValidationResult) {
        let fields = self.state();
        fields
            .left_eye_accuracy_degrees
            .set(degrees(result.left.error_of_mean_gaze_degrees));
        fields
            .left_eye_precision_degrees
            .set(degrees(result.left.standard_deviation_from_mean_gaze_degrees));
        fields
            .right_eye_accuracy_degrees
            .set(degrees(result.right.error_of_mean_gaze_degrees));
        fields
            .right_eye_precision_degrees
            .set(degrees(result.right.standard_deviation_from_mean_gaze_degrees));
    }

    pub fn left_eye_accuracy_degrees(&self) -> String {
        self.state().left_eye_accuracy_degrees.get()
    }

    pub fn left_eye_precision_degrees(&self) -> String {
        self.state().left_eye_precision_degrees.get()
    }

    pub fn right_eye_accuracy_degrees(&self) -> String {
        self.state().right_eye_accuracy_degrees.get()
    }

    pub fn right_eye_precision_degrees(&self) -> String {
        self.state().right_eye_precision_degrees.get()
    }

    pub fn notify_menu_selected(&self) {
        self.notify("validation_menu", |o| o.notify_menu_selected());
    }

    pub fn notify_close_clicked(&self) {
        self.notify("validation_close", |o| o.notify_close_clicked());
    }

    pub fn snapshot(&self) -> CalibrationValidationSnapshot {
        CalibrationValidationSnapshot {
            visible: self.is_visible(),
            left_eye_accuracy_degrees: self.left_eye_accuracy_degrees(),
            left_eye_precision_degrees: self.left_eye_precision_degrees(),
            right_eye_accuracy_degrees: self.right_eye_accuracy_degrees(),
            right_eye_precision_degrees: self.right_eye_precision_degrees(),
        }
    }
}

impl Default for CalibrationValidationUi {
    fn default() -> Self {
        Self::new()
    }
}
