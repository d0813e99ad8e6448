//! Consonant syllable grid.

use std::rc::Rc;

use crate::contract::{Contract, Visibility};
use crate::coordinator::{Modality, PresentationCoordinator, Slot, Surface};
use crate::state::{BoolField, StringField};

/// Response labels, three rows of seven.
pub const SYLLABLE_GRID: [[&str; 7]; 3] = [
    ["B", "D", "G", "F", "Ghee", "H", "Yee"],
    ["K", "L", "M", "N", "P", "R", "Sh"],
    ["S", "Th", "T", "Ch", "V", "W", "Z"],
];

pub trait SyllablesObserver {
    fn notify_response_button_clicked(&self);
}

#[derive(Debug, Default)]
pub struct SyllablesFields {
    selected: StringField,
    flagged: BoolField,
}

pub type SyllablesUi = Contract<SyllablesFields, dyn SyllablesObserver>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyllablesSnapshot {
    pub visible: bool,
    pub syllable: String,
    pub flagged: bool,
}

fn in_grid(label: &str) -> bool {
    SYLLABLE_GRID.iter().flatten().any(|entry| *entry == label)
}

impl SyllablesUi {
    pub fn new(coordinator: &Rc<PresentationCoordinator>) -> Self {
        Contract::from_parts(
            SyllablesFields::default(),
            Visibility::coordinated(
                coordinator,
                Slot::Running(Surface::Response(Modality::Syllables)),
            ),
        )
    }

    /// The most recently clicked label, empty before the first click.
    pub fn syllable(&self) -> String {
        self.state().selected.get()
    }

    pub fn flagged(&self) -> bool {
        self.state().flagged.get()
    }

    pub fn set_flagged(&self, flagged: bool) {
        self.state().flagged.set(flagged);
    }

    pub fn clear_flag(&self) {
        self.state().flagged.set(false);
    }

    /// Record `label` as the response and notify once.
    pub fn notify_response_button_clicked(&self, label: &str) {
        if !in_grid(label) {
            tracing::warn!(label, "ignoring click on a label outside the syllable grid");
            return;
        }
        self.state().selected.set(label);
        self.notify("response_button", |o| o.notify_response_button_clicked());
    }

    pub fn snapshot(&self) -> SyllablesSnapshot {
        SyllablesSnapshot {
            visible: self.is_visible(),
            syllable: self.syllable(),
            flagged: self.flagged(),
        }
    }
}
