//! Test setup contract and its interchangeable providers.
//!
//! The engine only sees [`TestSetupUi`]. Which form the subject and tester
//! actually fill in is chosen at startup by [`SetupVariant`].

pub mod facemask;
pub mod generic;
pub mod minimal;

use serde::{Deserialize, Serialize};
use std::rc::Rc;

use crate::coordinator::PresentationCoordinator;
use crate::resources::ResourceResolver;

pub use facemask::{
    build_condition_table, Condition, ConditionTable, FacemaskStudySetup, FacemaskStudySnapshot,
    FACEMASK_CONDITIONS,
};
pub use generic::{GenericSetupSnapshot, GenericTestSetup};
pub use minimal::MinimalTesterSetup;

/// Gestures raised by a test setup form.
pub trait TestSetupObserver {
    fn notify_confirm_clicked(&self);
    fn notify_play_calibration_clicked(&self);
    fn notify_play_left_speaker_calibration_clicked(&self);
    fn notify_play_right_speaker_calibration_clicked(&self);
}

/// What the engine reads from, and drives on, any test setup form.
///
/// Fields a variant does not offer read as empty strings.
pub trait TestSetupUi {
    fn show(&self);
    fn hide(&self);
    fn is_visible(&self) -> bool;
    fn subject_id(&self) -> String;
    fn tester_id(&self) -> String;
    fn session(&self) -> String;
    fn test_settings_file(&self) -> String;
    fn starting_snr(&self) -> String;
    fn transducer(&self) -> String;
    fn rme_setting(&self) -> String;
    fn populate_transducer_menu(&self, transducers: &[String]);
    fn attach(&self, observer: &Rc<dyn TestSetupObserver>);
    fn detach(&self);
}

/// Which test setup form the application presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupVariant {
    /// Full free-text form with transducer and settings file pickers
    #[default]
    Generic,
    /// Facemask study: fixed conditions and an SNR toggle
    FacemaskStudy,
    /// Tester ID only; used to check observer wiring
    MinimalTester,
}

impl std::fmt::Display for SetupVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupVariant::Generic => write!(f, "Generic"),
            SetupVariant::FacemaskStudy => write!(f, "Facemask Study"),
            SetupVariant::MinimalTester => write!(f, "Minimal Tester"),
        }
    }
}

/// The test setup form chosen for this run.
#[derive(Debug)]
pub enum TestSetupProvider {
    Generic(GenericTestSetup),
    FacemaskStudy(FacemaskStudySetup),
    MinimalTester(MinimalTesterSetup),
}

impl TestSetupProvider {
    /// Build the form for `variant`.
    pub fn new(
        variant: SetupVariant,
        coordinator: &Rc<PresentationCoordinator>,
        resolver: &dyn ResourceResolver,
    ) -> Self {
        tracing::debug!(%variant, "building test setup");
        match variant {
            SetupVariant::Generic => TestSetupProvider::Generic(GenericTestSetup::new(coordinator)),
            SetupVariant::FacemaskStudy => {
                TestSetupProvider::FacemaskStudy(FacemaskStudySetup::new(coordinator, resolver))
            }
            SetupVariant::MinimalTester => {
                TestSetupProvider::MinimalTester(MinimalTesterSetup::new(coordinator))
            }
        }
    }

    pub fn variant(&self) -> SetupVariant {
        match self {
            TestSetupProvider::Generic(_) => SetupVariant::Generic,
            TestSetupProvider::FacemaskStudy(_) => SetupVariant::FacemaskStudy,
            TestSetupProvider::MinimalTester(_) => SetupVariant::MinimalTester,
        }
    }

    fn as_ui(&self) -> &dyn TestSetupUi {
        match self {
            TestSetupProvider::Generic(setup) => setup,
            TestSetupProvider::FacemaskStudy(setup) => setup,
            TestSetupProvider::MinimalTester(setup) => setup,
        }
    }
}

impl TestSetupUi for TestSetupProvider {
    fn show(&self) {
        self.as_ui().show();
    }

    fn hide(&self) {
        self.as_ui().hide();
    }

    fn is_visible(&self) -> bool {
        self.as_ui().is_visible()
    }

    fn subject_id(&self) -> String {
        self.as_ui().subject_id()
    }

    fn tester_id(&self) -> String {
        self.as_ui().tester_id()
    }

    fn session(&self) -> String {
        self.as_ui().session()
    }

    fn test_settings_file(&self) -> String {
        self.as_ui().test_settings_file()
    }

    fn starting_snr(&self) -> String {
        self.as_ui().starting_snr()
    }

    fn transducer(&self) -> String {
        self.as_ui().transducer()
    }

    fn rme_setting(&self) -> String {
        self.as_ui().rme_setting()
    }

    fn populate_transducer_menu(&self, transducers: &[String]) {
        self.as_ui().populate_transducer_menu(transducers);
    }

    fn attach(&self, observer: &Rc<dyn TestSetupObserver>) {
        self.as_ui().attach(observer);
    }

    fn detach(&self) {
        self.as_ui().detach();
    }
}
