//! Application menu entries that start calibration tasks.

use crate::contract::{Contract, Visibility};

pub trait RunMenuObserver {
    fn notify_run_calibration_clicked(&self);
    fn notify_validation_menu_selected(&self);
}

/// Always-present menu; has no state of its own.
pub type RunMenu = Contract<(), dyn RunMenuObserver>;

impl RunMenu {
    pub fn new() -> Self {
        Contract::from_parts((), Visibility::standalone(true))
    }

    pub fn notify_run_calibration_clicked(&self) {
        self.notify("run_calibration", |o| o.notify_run_calibration_clicked());
    }

    pub fn notify_validation_menu_selected(&self) {
        self.notify("validation_menu", |o| o.notify_validation_menu_selected());
    }
}

impl Default for RunMenu {
    fn default() -> Self {
        Self::new()
    }
}
