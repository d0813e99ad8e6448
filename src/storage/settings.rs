//! Durable test-setup fields, loaded at startup and saved at shutdown.
//!
//! The store is a flat table of opaque strings under nine recognized keys.
//! A key missing from the store loads as an empty string.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::contract::{SessionSetupUi, TestSetupProvider, TestSetupUi};

/// Recognized persisted setting names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsKey {
    AudioDevice,
    SubjectScreen,
    SubjectId,
    TesterId,
    Session,
    StartingSnr,
    Transducer,
    TestSettingsFilePath,
    RmeSetting,
}

impl SettingsKey {
    /// Every key, in store order.
    pub const ALL: [SettingsKey; 9] = [
        SettingsKey::AudioDevice,
        SettingsKey::SubjectScreen,
        SettingsKey::SubjectId,
        SettingsKey::TesterId,
        SettingsKey::Session,
        SettingsKey::StartingSnr,
        SettingsKey::Transducer,
        SettingsKey::TestSettingsFilePath,
        SettingsKey::RmeSetting,
    ];

    /// Name of the key in the store.
    pub fn as_str(self) -> &'static str {
        match self {
            SettingsKey::AudioDevice => "AudioDevice",
            SettingsKey::SubjectScreen => "SubjectScreen",
            SettingsKey::SubjectId => "SubjectID",
            SettingsKey::TesterId => "TesterID",
            SettingsKey::Session => "Session",
            SettingsKey::StartingSnr => "StartingSNR",
            SettingsKey::Transducer => "Transducer",
            SettingsKey::TestSettingsFilePath => "TestSettingsFilePath",
            SettingsKey::RmeSetting => "RMESetting",
        }
    }
}

impl std::fmt::Display for SettingsKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of every persisted field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedSettings {
    #[serde(rename = "AudioDevice")]
    pub audio_device: String,
    #[serde(rename = "SubjectScreen")]
    pub subject_screen: String,
    #[serde(rename = "SubjectID")]
    pub subject_id: String,
    #[serde(rename = "TesterID")]
    pub tester_id: String,
    #[serde(rename = "Session")]
    pub session: String,
    #[serde(rename = "StartingSNR")]
    pub starting_snr: String,
    #[serde(rename = "Transducer")]
    pub transducer: String,
    #[serde(rename = "TestSettingsFilePath")]
    pub test_settings_file_path: String,
    #[serde(rename = "RMESetting")]
    pub rme_setting: String,
}

impl PersistedSettings {
    pub fn get(&self, key: SettingsKey) -> &str {
        match key {
            SettingsKey::AudioDevice => &self.audio_device,
            SettingsKey::SubjectScreen => &self.subject_screen,
            SettingsKey::SubjectId => &self.subject_id,
            SettingsKey::TesterId => &self.tester_id,
            SettingsKey::Session => &self.session,
            SettingsKey::StartingSnr => &self.starting_snr,
            SettingsKey::Transducer => &self.transducer,
            SettingsKey::TestSettingsFilePath => &self.test_settings_file_path,
            SettingsKey::RmeSetting => &self.rme_setting,
        }
    }

    pub fn set(&mut self, key: SettingsKey, value: impl Into<String>) {
        let slot = match key {
            SettingsKey::AudioDevice => &mut self.audio_device,
            SettingsKey::SubjectScreen => &mut self.subject_screen,
            SettingsKey::SubjectId => &mut self.subject_id,
            SettingsKey::TesterId => &mut self.tester_id,
            SettingsKey::Session => &mut self.session,
            SettingsKey::StartingSnr => &mut self.starting_snr,
            SettingsKey::Transducer => &mut self.transducer,
            SettingsKey::TestSettingsFilePath => &mut self.test_settings_file_path,
            SettingsKey::RmeSetting => &mut self.rme_setting,
        };
        *slot = value.into();
    }

    /// Read every field value out of the contracts into a fresh record.
    ///
    /// Keys the active variant does not own read as its defaults. Use
    /// [`PersistedSettings::capture_into`] to save over a loaded record.
    pub fn capture(session: &SessionSetupUi, setup: &TestSetupProvider) -> Self {
        Self {
            audio_device: session.audio_device(),
            subject_screen: session.subject_screen(),
            subject_id: setup.subject_id(),
            tester_id: setup.tester_id(),
            session: setup.session(),
            starting_snr: setup.starting_snr(),
            transducer: setup.transducer(),
            test_settings_file_path: setup.test_settings_file(),
            rme_setting: setup.rme_setting(),
        }
    }

    /// Fold the contracts' current values into this record.
    ///
    /// Only the keys the active setup variant owns are overwritten. A
    /// selection that is empty, because the stored value was no longer
    /// offered or nothing was ever chosen, keeps the stored value. An
    /// untouched record therefore saves back unchanged.
    pub fn capture_into(&mut self, session: &SessionSetupUi, setup: &TestSetupProvider) {
        keep_unless_empty(&mut self.audio_device, session.audio_device());
        keep_unless_empty(&mut self.subject_screen, session.subject_screen());

        match setup {
            TestSetupProvider::Generic(generic) => {
                self.subject_id = generic.subject_id();
                self.tester_id = generic.tester_id();
                self.session = generic.session();
                self.starting_snr = generic.starting_snr();
                self.test_settings_file_path = generic.test_settings_file();
                self.rme_setting = generic.rme_setting();
                keep_unless_empty(&mut self.transducer, generic.transducer());
            }
            TestSetupProvider::FacemaskStudy(facemask) => {
                self.subject_id = facemask.subject_id();
                // The toggle only distinguishes -10 dB from anything else.
                if facemask.minus_ten_db_starting_snr() != (self.starting_snr == "-10") {
                    self.starting_snr = facemask.starting_snr();
                }
                keep_unless_empty(
                    &mut self.test_settings_file_path,
                    facemask.test_settings_file(),
                );
            }
            TestSetupProvider::MinimalTester(minimal) => {
                self.tester_id = minimal.tester_id();
            }
        }
        tracing::debug!(variant = %setup.variant(), "captured settings");
    }

    /// Write the stored values into the contracts.
    ///
    /// Menus must already be populated. A stored selection that is no longer
    /// offered is skipped, and fields a setup variant does not have are
    /// ignored.
    pub fn apply(&self, session: &SessionSetupUi, setup: &TestSetupProvider) {
        restore_selection(SettingsKey::AudioDevice, &self.audio_device, |value| {
            session.select_audio_device(value)
        });
        restore_selection(SettingsKey::SubjectScreen, &self.subject_screen, |value| {
            session.select_subject_screen(value)
        });

        match setup {
            TestSetupProvider::Generic(generic) => {
                generic.set_subject_id(self.subject_id.as_str());
                generic.set_tester_id(self.tester_id.as_str());
                generic.set_session(self.session.as_str());
                generic.set_starting_snr(self.starting_snr.as_str());
                generic.set_rme_setting(self.rme_setting.as_str());
                generic.set_test_settings_file(self.test_settings_file_path.as_str());
                restore_selection(SettingsKey::Transducer, &self.transducer, |value| {
                    generic.select_transducer(value)
                });
            }
            TestSetupProvider::FacemaskStudy(facemask) => {
                facemask.set_subject_id(self.subject_id.as_str());
                facemask.set_minus_ten_db_starting_snr(self.starting_snr == "-10");
                let condition = facemask
                    .condition_table()
                    .iter()
                    .find(|c| {
                        c.settings_path
                            .as_deref()
                            .is_some_and(|p| p == Path::new(&self.test_settings_file_path))
                    })
                    .map(|c| c.name.clone());
                if let Some(condition) = condition {
                    restore_selection(SettingsKey::TestSettingsFilePath, &condition, |value| {
                        facemask.select_condition(value)
                    });
                }
            }
            TestSetupProvider::MinimalTester(minimal) => {
                minimal.set_tester_id(self.tester_id.as_str());
            }
        }
        tracing::debug!(variant = %setup.variant(), "applied persisted settings");
    }
}

fn keep_unless_empty(stored: &mut String, current: String) {
    if !current.is_empty() {
        *stored = current;
    }
}

fn restore_selection<E: std::fmt::Display>(
    key: SettingsKey,
    value: &str,
    select: impl FnOnce(&str) -> Result<(), E>,
) {
    if value.is_empty() {
        return;
    }
    if let Err(e) = select(value) {
        tracing::warn!(%key, value, error = %e, "stored selection no longer offered");
    }
}

/// Settings persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

/// Durable key-value store for [`PersistedSettings`].
pub trait SettingsStore {
    fn load(&self) -> Result<PersistedSettings, SettingsError>;
    fn save(&self, settings: &PersistedSettings) -> Result<(), SettingsError>;
}

/// Settings kept as a flat TOML string table.
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for TomlSettingsStore {
    fn load(&self) -> Result<PersistedSettings, SettingsError> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "no stored settings");
            return Ok(PersistedSettings::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| SettingsError::IoError(e.to_string()))?;

        toml::from_str(&content).map_err(|e| SettingsError::ParseError(e.to_string()))
    }

    fn save(&self, settings: &PersistedSettings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::IoError(e.to_string()))?;
        }

        let content = toml::to_string_pretty(settings)
            .map_err(|e| SettingsError::SerializeError(e.to_string()))?;

        std::fs::write(&self.path, content).map_err(|e| SettingsError::IoError(e.to_string()))?;

        tracing::debug!(path = %self.path.display(), "saved settings");
        Ok(())
    }
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    stored: RefCell<PersistedSettings>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<PersistedSettings, SettingsError> {
        Ok(self.stored.borrow().clone())
    }

    fn save(&self, settings: &PersistedSettings) -> Result<(), SettingsError> {
        *self.stored.borrow_mut() = settings.clone();
        Ok(())
    }
}
