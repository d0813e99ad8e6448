//! Engine-facing contracts, one per presentation role.
//!
//! Every role shares the same envelope, [`Contract`]: role state, a
//! visibility binding and an [`ObserverSlot`] for gesture delivery. Roles
//! differ only in their state type `S` and observer trait `O`, and add their
//! getters, mutators and gesture forwarders as inherent methods on their
//! own instantiation.
//!
//! All methods take `&self`. The engine and the presentation hold shared
//! references to the same contract on the presentation thread.

pub mod calibration;
pub mod free_response;
pub mod keyword_choice;
pub mod keyword_count;
pub mod pass_fail;
pub mod run_menu;
pub mod session;
pub mod syllables;
pub mod test_setup;
pub mod trial_runner;

use std::fmt;
use std::rc::Rc;

use crate::coordinator::{Modality, PresentationCoordinator, Slot, Surface};
use crate::resources::ResourceResolver;
use crate::state::{BoolField, ObserverSlot};

pub use calibration::{
    CalibrationValidationObserver, CalibrationValidationSnapshot, CalibrationValidationUi,
    MonocularResult, ValidationResult,
};
pub use free_response::{FreeResponseObserver, FreeResponseSnapshot, FreeResponseUi};
pub use keyword_choice::{KeywordChoiceObserver, KeywordChoiceSnapshot, KeywordChoiceUi};
pub use keyword_count::{KeywordCountObserver, KeywordCountSnapshot, KeywordCountUi};
pub use pass_fail::{PassFailObserver, PassFailUi};
pub use run_menu::{RunMenu, RunMenuObserver};
pub use session::{SessionSetupSnapshot, SessionSetupUi};
pub use syllables::{SyllablesObserver, SyllablesSnapshot, SyllablesUi, SYLLABLE_GRID};
pub use test_setup::{
    FacemaskStudySetup, GenericTestSetup, MinimalTesterSetup, SetupVariant, TestSetupObserver,
    TestSetupProvider, TestSetupUi,
};
pub use trial_runner::{TrialRunnerObserver, TrialRunnerSnapshot, TrialRunnerUi};

/// How a contract's `show`/`hide` is realised.
pub enum Visibility {
    /// A flag owned by the contract itself
    Standalone(BoolField),
    /// A slot in the coordinator's phase
    Coordinated {
        coordinator: Rc<PresentationCoordinator>,
        slot: Slot,
    },
}

impl Visibility {
    /// A standalone flag with the given initial value.
    pub fn standalone(visible: bool) -> Self {
        Visibility::Standalone(BoolField::new(visible))
    }

    /// A binding to `slot` in `coordinator`.
    pub fn coordinated(coordinator: &Rc<PresentationCoordinator>, slot: Slot) -> Self {
        Visibility::Coordinated {
            coordinator: Rc::clone(coordinator),
            slot,
        }
    }

    fn set(&self, visible: bool) {
        match self {
            Visibility::Standalone(flag) => flag.set(visible),
            Visibility::Coordinated { coordinator, slot } => {
                if visible {
                    coordinator.show(*slot);
                } else {
                    coordinator.hide(*slot);
                }
            }
        }
    }

    fn get(&self) -> bool {
        match self {
            Visibility::Standalone(flag) => flag.get(),
            Visibility::Coordinated { coordinator, slot } => coordinator.is_visible(*slot),
        }
    }
}

impl fmt::Debug for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Standalone(flag) => f.debug_tuple("Standalone").field(&flag.get()).finish(),
            Visibility::Coordinated { slot, .. } => {
                f.debug_struct("Coordinated").field("slot", slot).finish()
            }
        }
    }
}

/// The show/hide/attach envelope shared by every role.
pub struct Contract<S, O: ?Sized> {
    state: S,
    visibility: Visibility,
    observer: ObserverSlot<O>,
}

impl<S, O: ?Sized> Contract<S, O> {
    /// Assemble a contract from its state and visibility binding.
    pub fn from_parts(state: S, visibility: Visibility) -> Self {
        Self {
            state,
            visibility,
            observer: ObserverSlot::empty(),
        }
    }

    /// Construct with the observer already injected.
    pub fn with_observer(self, observer: &Rc<O>) -> Self {
        self.observer.attach(observer);
        self
    }

    /// Make the contract visible. Idempotent.
    pub fn show(&self) {
        self.visibility.set(true);
    }

    /// Hide the contract. Idempotent.
    pub fn hide(&self) {
        self.visibility.set(false);
    }

    /// Whether the contract is currently visible.
    pub fn is_visible(&self) -> bool {
        self.visibility.get()
    }

    /// Replace the observer that receives gestures.
    pub fn attach(&self, observer: &Rc<O>) {
        self.observer.attach(observer);
    }

    /// Remove the observer; subsequent gestures are dropped.
    pub fn detach(&self) {
        self.observer.detach();
    }

    /// Whether a live observer is attached.
    pub fn is_attached(&self) -> bool {
        self.observer.is_attached()
    }

    pub(crate) fn state(&self) -> &S {
        &self.state
    }

    pub(crate) fn notify(&self, gesture: &'static str, deliver: impl FnOnce(&O)) {
        self.observer.notify(gesture, deliver);
    }
}

impl<S: fmt::Debug, O: ?Sized> fmt::Debug for Contract<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Contract")
            .field("state", &self.state)
            .field("visibility", &self.visibility)
            .field("observer", &self.observer)
            .finish()
    }
}

/// Every contract the engine drives, built once at startup.
pub struct ContractSet {
    pub coordinator: Rc<PresentationCoordinator>,
    pub session: SessionSetupUi,
    pub test_setup: TestSetupProvider,
    pub trial_runner: TrialRunnerUi,
    pub free_response: FreeResponseUi,
    pub syllables: SyllablesUi,
    pub keyword_choice: KeywordChoiceUi,
    pub keyword_count: KeywordCountUi,
    pub pass_fail: PassFailUi,
    pub calibration_validation: CalibrationValidationUi,
    pub run_menu: RunMenu,
}

impl ContractSet {
    /// Build every contract around one coordinator.
    pub fn new(variant: SetupVariant, resolver: &dyn ResourceResolver) -> Self {
        let coordinator = PresentationCoordinator::new();
        Self {
            session: SessionSetupUi::new(),
            test_setup: TestSetupProvider::new(variant, &coordinator, resolver),
            trial_runner: TrialRunnerUi::new(&coordinator),
            free_response: FreeResponseUi::new(&coordinator),
            syllables: SyllablesUi::new(&coordinator),
            keyword_choice: KeywordChoiceUi::new(&coordinator),
            keyword_count: KeywordCountUi::new(&coordinator),
            pass_fail: PassFailUi::new(&coordinator),
            calibration_validation: CalibrationValidationUi::new(),
            run_menu: RunMenu::new(),
            coordinator,
        }
    }

    /// Show the response form for `modality`, hiding every other surface.
    pub fn show_modality(&self, modality: Modality) {
        self.coordinator
            .show(Slot::Running(Surface::Response(modality)));
    }
}
