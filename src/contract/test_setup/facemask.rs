//! Facemask study setup: a fixed catalogue of conditions, each backed by a
//! bundled test settings file.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::{TestSetupObserver, TestSetupUi};
use crate::contract::{Contract, Visibility};
use crate::coordinator::{PresentationCoordinator, Slot};
use crate::resources::ResourceResolver;
use crate::state::{BoolField, SelectableCollection, SelectionError, StringField};

/// Condition stems offered by the facemask study, in menu order.
pub const FACEMASK_CONDITIONS: [&str; 4] = [
    "NoMask_AO",
    "NoMask_AV",
    "CommunicatorMask_AO",
    "CommunicatorMask_AV",
];

const SETTINGS_EXTENSION: &str = "txt";

/// A named experimental condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Name shown in the condition menu
    pub name: String,
    /// Bundled test settings file, if the bundle has one
    pub settings_path: Option<PathBuf>,
}

/// Insertion-ordered, immutable condition lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionTable {
    entries: Vec<Condition>,
}

impl ConditionTable {
    /// Condition names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|c| c.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Condition> {
        self.entries.iter().find(|c| c.name == name)
    }

    /// Settings file for `name`; `None` for unknown or unresolved names.
    pub fn settings_path(&self, name: &str) -> Option<&Path> {
        self.get(name).and_then(|c| c.settings_path.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Condition> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve every stem to a condition.
///
/// The display name is the stem itself. A repeated stem replaces the earlier
/// entry in place.
pub fn build_condition_table<'a, I>(stems: I, resolver: &dyn ResourceResolver) -> ConditionTable
where
    I: IntoIterator<Item = &'a str>,
{
    let entries = stems.into_iter().fold(Vec::<Condition>::new(), |mut entries, stem| {
        let settings_path = resolver.resource_path(stem, SETTINGS_EXTENSION);
        if settings_path.is_none() {
            tracing::warn!(condition = stem, "no bundled test settings for condition");
        }
        let condition = Condition {
            name: stem.to_string(),
            settings_path,
        };
        match entries.iter_mut().find(|c| c.name == condition.name) {
            Some(existing) => *existing = condition,
            None => entries.push(condition),
        }
        entries
    });
    ConditionTable { entries }
}

#[derive(Debug)]
pub struct FacemaskStudyFields {
    subject_id: StringField,
    condition: SelectableCollection,
    minus_ten_db_starting_snr: BoolField,
    table: ConditionTable,
}

/// Facemask study test setup.
pub type FacemaskStudySetup = Contract<FacemaskStudyFields, dyn TestSetupObserver>;

/// Immutable view of a [`FacemaskStudySetup`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FacemaskStudySnapshot {
    pub visible: bool,
    pub subject_id: String,
    pub conditions: Vec<String>,
    pub condition: String,
    pub minus_ten_db_starting_snr: bool,
}

impl FacemaskStudySetup {
    /// Build with the study's condition catalogue.
    pub fn new(coordinator: &Rc<PresentationCoordinator>, resolver: &dyn ResourceResolver) -> Self {
        Self::with_conditions(coordinator, build_condition_table(FACEMASK_CONDITIONS, resolver))
    }

    /// Build with an explicit condition table.
    pub fn with_conditions(coordinator: &Rc<PresentationCoordinator>, table: ConditionTable) -> Self {
        let fields = FacemaskStudyFields {
            subject_id: StringField::default(),
            condition: SelectableCollection::with_options(table.names()),
            minus_ten_db_starting_snr: BoolField::default(),
            table,
        };
        Contract::from_parts(fields, Visibility::coordinated(coordinator, Slot::TestSetup))
    }

    pub fn set_subject_id(&self, value: impl Into<String>) {
        self.state().subject_id.set(value.into());
    }

    /// Selected condition name, empty when none.
    pub fn condition(&self) -> String {
        self.state().condition.selected()
    }

    pub fn select_condition(&self, name: &str) -> Result<(), SelectionError> {
        self.state().condition.select(name)
    }

    pub fn conditions(&self) -> &SelectableCollection {
        &self.state().condition
    }

    pub fn condition_table(&self) -> &ConditionTable {
        &self.state().table
    }

    /// Settings file for `name`, `None` when there is no mapping.
    pub fn condition_settings_path(&self, name: &str) -> Option<&Path> {
        self.state().table.settings_path(name)
    }

    pub fn minus_ten_db_starting_snr(&self) -> bool {
        self.state().minus_ten_db_starting_snr.get()
    }

    pub fn set_minus_ten_db_starting_snr(&self, enabled: bool) {
        self.state().minus_ten_db_starting_snr.set(enabled);
    }

    pub fn notify_confirm_clicked(&self) {
        self.notify("confirm", |o| o.notify_confirm_clicked());
    }

    pub fn notify_play_left_speaker_calibration_clicked(&self) {
        self.notify("play_left_speaker_calibration", |o| {
            o.notify_play_left_speaker_calibration_clicked()
        });
    }

    pub fn notify_play_right_speaker_calibration_clicked(&self) {
        self.notify("play_right_speaker_calibration", |o| {
            o.notify_play_right_speaker_calibration_clicked()
        });
    }

    pub fn snapshot(&self) -> FacemaskStudySnapshot {
        let fields = self.state();
        FacemaskStudySnapshot {
            visible: self.is_visible(),
            subject_id: fields.subject_id.get(),
            conditions: fields.condition.options(),
            condition: fields.condition.selected(),
            minus_ten_db_starting_snr: fields.minus_ten_db_starting_snr.get(),
        }
    }
}

impl TestSetupUi for FacemaskStudySetup {
    fn show(&self) {
        Contract::show(self);
    }

    fn hide(&self) {
        Contract::hide(self);
    }

    fn is_visible(&self) -> bool {
        Contract::is_visible(self)
    }

    fn subject_id(&self) -> String {
        self.state().subject_id.get()
    }

    fn tester_id(&self) -> String {
        String::new()
    }

    fn session(&self) -> String {
        String::new()
    }

    fn test_settings_file(&self) -> String {
        let condition = self.condition();
        self.condition_settings_path(&condition)
            .map(|path| path.display().to_string())
            .unwrap_or_default()
    }

    fn starting_snr(&self) -> String {
        if self.minus_ten_db_starting_snr() {
            "-10".to_string()
        } else {
            "0".to_string()
        }
    }

    fn transducer(&self) -> String {
        String::new()
    }

    fn rme_setting(&self) -> String {
        String::new()
    }

    fn populate_transducer_menu(&self, _transducers: &[String]) {}

    fn attach(&self, observer: &Rc<dyn TestSetupObserver>) {
        Contract::attach(self, observer);
    }

    fn detach(&self) {
        Contract::detach(self);
    }
}
