//! egui presentation of the contract set.
//!
//! Rendering is a function of the coordinator phase: the test setup form
//! while configuring, otherwise the single visible running surface. The
//! session error alert, the calibration validation window and the trial
//! runner dialogs are drawn as overlays on top of either phase.

pub mod theme;
pub mod views;

use crossbeam::channel::Receiver;
use std::cell::RefCell;
use std::rc::Rc;

use crate::contract::{
    CalibrationValidationSnapshot, ContractSet, FreeResponseSnapshot, KeywordChoiceSnapshot,
    KeywordCountSnapshot, SessionSetupSnapshot, SyllablesSnapshot, TrialRunnerSnapshot,
};
use crate::coordinator::{Dialog, Modality, Phase, Surface};

pub use theme::{Palette, Theme};

/// Engine-driven state as it was when a frame started drawing.
#[derive(Debug, PartialEq)]
struct Drawn {
    session: SessionSetupSnapshot,
    trial_runner: TrialRunnerSnapshot,
    calibration: CalibrationValidationSnapshot,
    response: Option<ResponseDrawn>,
}

#[derive(Debug, PartialEq)]
enum ResponseDrawn {
    FreeResponse(FreeResponseSnapshot),
    Syllables(SyllablesSnapshot),
    KeywordChoice(KeywordChoiceSnapshot),
    KeywordCount(KeywordCountSnapshot),
    PassFail,
}

impl Drawn {
    fn capture(contracts: &ContractSet) -> Self {
        let response = match contracts.coordinator.visible_surface() {
            Some(Surface::Response(modality)) => Some(match modality {
                Modality::FreeResponse => {
                    ResponseDrawn::FreeResponse(contracts.free_response.snapshot())
                }
                Modality::Syllables => ResponseDrawn::Syllables(contracts.syllables.snapshot()),
                Modality::KeywordChoice => {
                    ResponseDrawn::KeywordChoice(contracts.keyword_choice.snapshot())
                }
                Modality::KeywordCount => {
                    ResponseDrawn::KeywordCount(contracts.keyword_count.snapshot())
                }
                Modality::PassFail => ResponseDrawn::PassFail,
            }),
            _ => None,
        };
        Self {
            session: contracts.session.snapshot(),
            trial_runner: contracts.trial_runner.snapshot(),
            calibration: contracts.calibration_validation.snapshot(),
            response,
        }
    }
}

/// Draws every contract and tracks coordinator changes.
pub struct Presentation {
    contracts: Rc<ContractSet>,
    palette: Palette,
    phase_rx: Receiver<Phase>,
    dialog_rx: Receiver<Option<Dialog>>,
    drawn: RefCell<Option<Drawn>>,
}

impl Presentation {
    pub fn new(contracts: Rc<ContractSet>, theme: Theme) -> Self {
        let phase_rx = contracts.coordinator.subscribe();
        let dialog_rx = contracts.coordinator.subscribe_dialog();
        Self {
            contracts,
            palette: theme.palette(),
            phase_rx,
            dialog_rx,
            drawn: RefCell::new(None),
        }
    }

    /// Drain coordinator updates and compare the engine-driven fields with
    /// what the last frame drew. True if the screen is out of date.
    pub fn poll_changes(&self) -> bool {
        let current = Drawn::capture(&self.contracts);
        let mut changed = self.drawn.borrow().as_ref() != Some(&current);
        for phase in self.phase_rx.try_iter() {
            tracing::trace!(?phase, "phase update");
            changed = true;
        }
        for dialog in self.dialog_rx.try_iter() {
            tracing::trace!(?dialog, "dialog update");
            changed = true;
        }
        changed
    }

    /// Render one frame.
    pub fn show(&self, ctx: &egui::Context) {
        let contracts = &self.contracts;
        self.drawn.replace(Some(Drawn::capture(contracts)));

        egui::TopBottomPanel::top("run_menu").show(ctx, |ui| {
            views::run_menu::show(ui, &contracts.run_menu);
        });

        egui::CentralPanel::default().show(ctx, |ui| match contracts.coordinator.phase() {
            Phase::SessionConfiguring => {
                views::session::show(ui, &contracts.session);
                ui.separator();
                views::test_setup::show(ui, &contracts.test_setup);
            }
            Phase::TestRunning { surface: None } => {
                ui.centered_and_justified(|ui| {
                    ui.label(egui::RichText::new("Waiting for the next trial").weak());
                });
            }
            Phase::TestRunning {
                surface: Some(Surface::TrialRunner),
            } => views::trial_runner::show(ui, &contracts.trial_runner, &self.palette),
            Phase::TestRunning {
                surface: Some(Surface::Response(modality)),
            } => self.show_response(ui, modality),
        });

        views::trial_runner::show_dialogs(ctx, &contracts.trial_runner);
        views::calibration::show(ctx, &contracts.calibration_validation);
        views::session::show_error_alert(ctx, &contracts.session, &self.palette);
    }

    fn show_response(&self, ui: &mut egui::Ui, modality: Modality) {
        let contracts = &self.contracts;
        match modality {
            Modality::FreeResponse => views::free_response::show(ui, &contracts.free_response),
            Modality::Syllables => views::syllables::show(ui, &contracts.syllables, &self.palette),
            Modality::KeywordChoice => {
                views::keyword_choice::show(ui, &contracts.keyword_choice, &self.palette)
            }
            Modality::KeywordCount => views::keyword_count::show(ui, &contracts.keyword_count),
            Modality::PassFail => views::pass_fail::show(ui, &contracts.pass_fail, &self.palette),
        }
    }
}
