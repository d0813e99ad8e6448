//! Configuration and persisted settings.

pub mod config;
pub mod settings;

pub use config::{load_config, save_config, AppConfig, ConfigError, WindowSettings};
pub use settings::{
    MemorySettingsStore, PersistedSettings, SettingsError, SettingsKey, SettingsStore,
    TomlSettingsStore,
};
