//! Application configuration.
//!
//! Stored as TOML in the platform data directory. A missing file yields the
//! defaults; unknown sections are ignored.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::contract::SetupVariant;
use crate::ui::Theme;

/// Main window geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    /// Initial width in points
    pub width: f32,
    /// Initial height in points
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 640.0,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Test setup form to present
    pub test_setup: SetupVariant,
    /// Directory holding bundled test settings files
    pub resources_dir: PathBuf,
    /// Persisted settings file; relative paths resolve against `data_dir`
    pub settings_file: PathBuf,
    /// Transducers offered by the generic setup form
    pub transducers: Vec<String>,
    /// Audio devices offered by the tester harness
    pub audio_devices: Vec<String>,
    /// Subject screens offered by the tester harness
    pub subject_screens: Vec<String>,
    /// Window settings
    pub window: WindowSettings,
    /// Theme preference
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            test_setup: SetupVariant::default(),
            resources_dir: PathBuf::from("resources"),
            settings_file: PathBuf::from("settings.toml"),
            transducers: ["headphone", "1 speaker", "2 speakers"]
                .map(String::from)
                .to_vec(),
            audio_devices: vec!["Default Output".to_string()],
            subject_screens: vec!["Main Display".to_string()],
            window: WindowSettings::default(),
            theme: Theme::default(),
        }
    }
}

impl AppConfig {
    /// Absolute path of the persisted settings file.
    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(&self.settings_file)
    }

    /// Absolute path of the bundled resources directory.
    pub fn resources_path(&self) -> PathBuf {
        self.data_dir.join(&self.resources_dir)
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("edu", "avsin", "AvSpeechInNoise")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut config = load_config_from(&get_config_path())?;
    config.data_dir = get_data_dir();
    Ok(config)
}

/// Load application configuration from `path`, defaulting when it is missing.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save application configuration to `path`.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
