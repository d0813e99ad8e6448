//! Session-wide settings: output device, subject screen and the error alert.

use crate::state::{BoolField, SelectableCollection, SelectionError, StringField};

/// Immutable view of [`SessionSetupUi`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSetupSnapshot {
    pub audio_devices: Vec<String>,
    pub audio_device: String,
    pub subject_screens: Vec<String>,
    pub subject_screen: String,
    pub error_visible: bool,
    pub error_message: String,
}

/// Session setup contract.
///
/// Always present; it has no gestures. The error alert is the only
/// user-visible error channel and is driven entirely by the engine.
#[derive(Debug, Default)]
pub struct SessionSetupUi {
    audio_devices: SelectableCollection,
    subject_screens: SelectableCollection,
    error_visible: BoolField,
    error_message: StringField,
}

impl SessionSetupUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer `devices` in the audio device menu.
    pub fn populate_audio_device_menu<I, S>(&self, devices: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.audio_devices.populate(devices);
    }

    /// Offer `screens` in the subject screen menu.
    pub fn populate_subject_screen_menu<I, S>(&self, screens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subject_screens.populate(screens);
    }

    /// Selected audio device, empty when none.
    pub fn audio_device(&self) -> String {
        self.audio_devices.selected()
    }

    /// Selected subject screen, empty when none.
    pub fn subject_screen(&self) -> String {
        self.subject_screens.selected()
    }

    pub fn select_audio_device(&self, device: &str) -> Result<(), SelectionError> {
        self.audio_devices.select(device)
    }

    pub fn select_subject_screen(&self, screen: &str) -> Result<(), SelectionError> {
        self.subject_screens.select(screen)
    }

    pub fn audio_devices(&self) -> &SelectableCollection {
        &self.audio_devices
    }

    pub fn subject_screens(&self) -> &SelectableCollection {
        &self.subject_screens
    }

    /// Raise the error alert with `message`.
    pub fn show_error_message(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(%message, "engine reported error");
        self.error_visible.set(true);
        self.error_message.set(message);
    }

    /// Close the alert. The engine is not notified.
    pub fn dismiss_error_message(&self) {
        self.error_visible.set(false);
    }

    pub fn error_message_visible(&self) -> bool {
        self.error_visible.get()
    }

    pub fn error_message(&self) -> String {
        self.error_message.get()
    }

    pub fn snapshot(&self) -> SessionSetupSnapshot {
        SessionSetupSnapshot {
            audio_devices: self.audio_devices.options(),
            audio_device: self.audio_device(),
            subject_screens: self.subject_screens.options(),
            subject_screen: self.subject_screen(),
            error_visible: self.error_message_visible(),
            error_message: self.error_message(),
        }
    }
}
