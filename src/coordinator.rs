//! Phase ownership and mutual exclusion between response surfaces.
//!
//! The coordinator holds one tagged [`Phase`] value. Every contract whose
//! visibility participates in the session flow asks the coordinator to show
//! or hide it, and the presentation renders purely as a function of the
//! phase. At most one running surface can therefore be visible at a time.

use crossbeam::channel::Receiver;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

use crate::state::ObservableField;

/// Mutually exclusive response-collection forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    /// Typed free response
    FreeResponse,
    /// Consonant syllable grid
    Syllables,
    /// Per-keyword correctness marking
    KeywordChoice,
    /// Number of keywords correct
    KeywordCount,
    /// Single correct/incorrect grade
    PassFail,
}

impl Modality {
    /// Every modality, in menu order.
    pub const ALL: [Modality; 5] = [
        Modality::FreeResponse,
        Modality::Syllables,
        Modality::KeywordChoice,
        Modality::KeywordCount,
        Modality::PassFail,
    ];
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Modality::FreeResponse => write!(f, "Free Response"),
            Modality::Syllables => write!(f, "Syllables"),
            Modality::KeywordChoice => write!(f, "Keyword Choice"),
            Modality::KeywordCount => write!(f, "Keyword Count"),
            Modality::PassFail => write!(f, "Pass/Fail"),
        }
    }
}

/// A surface that can be visible while a test is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// Exit/play-trial controls and trial text
    TrialRunner,
    /// One of the response forms
    Response(Modality),
}

/// Modal dialogs raised by the trial runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialog {
    /// "Continue testing?" with accept/decline
    ContinueTesting,
    /// Informational results sheet
    ResultSheet,
}

/// The single source of truth for what the session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Test setup is visible, no running surface is
    #[default]
    SessionConfiguring,
    /// Test setup is hidden; at most one running surface is visible
    TestRunning {
        /// The visible surface, if any
        surface: Option<Surface>,
    },
}

/// What a contract's `show`/`hide` controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The test setup form
    TestSetup,
    /// A running surface
    Running(Surface),
}

/// Owner of the current phase and the current modal dialog.
#[derive(Debug, Default)]
pub struct PresentationCoordinator {
    phase: ObservableField<Phase>,
    dialog: ObservableField<Option<Dialog>>,
}

impl PresentationCoordinator {
    /// Create a shared coordinator starting in [`Phase::SessionConfiguring`].
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    /// The visible running surface, if any.
    pub fn visible_surface(&self) -> Option<Surface> {
        match self.phase() {
            Phase::SessionConfiguring => None,
            Phase::TestRunning { surface } => surface,
        }
    }

    /// Replace the phase. Everything not named by `phase` is hidden.
    ///
    /// Leaving the running phase closes the continue-testing dialog. The
    /// results sheet stays open over the setup form until dismissed.
    pub fn transition_to(&self, phase: Phase) {
        let previous = self.phase();
        if previous == phase {
            return;
        }
        tracing::info!(?previous, next = ?phase, "phase transition");
        if phase == Phase::SessionConfiguring {
            self.close_dialog(Dialog::ContinueTesting);
        }
        self.phase.set(phase);
    }

    /// Whether `slot` is visible in the current phase.
    pub fn is_visible(&self, slot: Slot) -> bool {
        match (slot, self.phase()) {
            (Slot::TestSetup, Phase::SessionConfiguring) => true,
            (Slot::Running(wanted), Phase::TestRunning { surface }) => surface == Some(wanted),
            _ => false,
        }
    }

    /// Make `slot` the visible one.
    pub fn show(&self, slot: Slot) {
        match slot {
            Slot::TestSetup => self.transition_to(Phase::SessionConfiguring),
            Slot::Running(surface) => self.transition_to(Phase::TestRunning {
                surface: Some(surface),
            }),
        }
    }

    /// Hide `slot` if it is the visible one; otherwise nothing changes.
    pub fn hide(&self, slot: Slot) {
        if !self.is_visible(slot) {
            return;
        }
        self.transition_to(Phase::TestRunning { surface: None });
    }

    /// The open dialog, if any.
    pub fn dialog(&self) -> Option<Dialog> {
        self.dialog.get()
    }

    /// Open `dialog`, replacing any other open dialog.
    ///
    /// The continue-testing dialog only opens while a test is running.
    pub fn open_dialog(&self, dialog: Dialog) {
        if dialog == Dialog::ContinueTesting && self.phase() == Phase::SessionConfiguring {
            tracing::debug!(?dialog, "not running a test, dialog ignored");
            return;
        }
        if self.dialog() != Some(dialog) {
            tracing::debug!(?dialog, "opening dialog");
            self.dialog.set(Some(dialog));
        }
    }

    /// Close `dialog` if it is the open one.
    pub fn close_dialog(&self, dialog: Dialog) {
        if self.dialog() == Some(dialog) {
            tracing::debug!(?dialog, "closing dialog");
            self.dialog.set(None::<Dialog>);
        }
    }

    /// Subscribe to phase changes.
    pub fn subscribe(&self) -> Receiver<Phase> {
        self.phase.subscribe()
    }

    /// Subscribe to dialog changes.
    pub fn subscribe_dialog(&self) -> Receiver<Option<Dialog>> {
        self.dialog.subscribe()
    }
}
