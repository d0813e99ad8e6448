//! Main application state and egui integration.

use eframe::egui;
use std::rc::Rc;

use avsin::harness::TesterEngine;
use avsin::storage::AppConfig;
use avsin::ui::Presentation;
use avsin::ContractSet;

/// Main application state.
pub struct AvsinApp {
    /// Renders the contracts
    presentation: Presentation,
    /// Keeps the engine alive; contracts only hold weak references to it
    _engine: Rc<TesterEngine>,
}

impl AvsinApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: &AppConfig,
        contracts: Rc<ContractSet>,
        engine: Rc<TesterEngine>,
    ) -> Self {
        cc.egui_ctx.set_visuals(config.theme.visuals());

        Self {
            presentation: Presentation::new(contracts, config.theme),
            _engine: engine,
        }
    }
}

impl eframe::App for AvsinApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.presentation.show(ctx);

        // Engine callbacks during this frame may have changed what is drawn
        if self.presentation.poll_changes() {
            ctx.request_repaint();
        }
    }
}
