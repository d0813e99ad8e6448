//! Audiovisual speech-in-noise tester.
//!
//! Main entry point for the application.

use anyhow::Context as _;
use eframe::egui;
use std::rc::Rc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use avsin::contract::TestSetupUi;
use avsin::harness::TesterEngine;
use avsin::resources::BundledResources;
use avsin::storage::config::{get_data_dir, load_config};
use avsin::storage::{AppConfig, PersistedSettings, SettingsStore, TomlSettingsStore};
use avsin::ContractSet;

mod app;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting avsin v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig {
            data_dir: get_data_dir(),
            ..Default::default()
        }
    });

    let resources = BundledResources::new(config.resources_path());
    let contracts = Rc::new(ContractSet::new(config.test_setup, &resources));
    contracts
        .session
        .populate_audio_device_menu(config.audio_devices.iter().cloned());
    contracts
        .session
        .populate_subject_screen_menu(config.subject_screens.iter().cloned());
    contracts.test_setup.populate_transducer_menu(&config.transducers);

    let store = TomlSettingsStore::new(config.settings_path());
    let mut settings = store.load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load settings: {}", e);
        PersistedSettings::default()
    });
    settings.apply(&contracts.session, &contracts.test_setup);

    let engine = TesterEngine::attach(Rc::clone(&contracts));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([640.0, 480.0])
            .with_title("AV Speech in Noise"),
        ..Default::default()
    };

    let app_contracts = Rc::clone(&contracts);
    let app_config = config.clone();
    eframe::run_native(
        "AV Speech in Noise",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::AvsinApp::new(
                cc,
                &app_config,
                app_contracts,
                engine,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("running the presentation")?;

    settings.capture_into(&contracts.session, &contracts.test_setup);
    store
        .save(&settings)
        .with_context(|| format!("saving settings to {}", store.path().display()))?;

    Ok(())
}
