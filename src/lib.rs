//! avsin - presentation layer for audiovisual speech-in-noise testing
//!
//! Exposes one contract per presentation role (test setup, trial runner,
//! each response form, calibration validation, run menu) to an external
//! test engine. Contracts hold observable state, report user gestures to an
//! attached observer, and take their visibility from a single coordinator
//! so that at most one response surface is ever shown.

pub mod contract;
pub mod coordinator;
pub mod harness;
pub mod resources;
pub mod state;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use contract::{ContractSet, SetupVariant, TestSetupProvider};
pub use coordinator::{Modality, Phase, PresentationCoordinator};
pub use storage::{AppConfig, PersistedSettings, SettingsStore};
