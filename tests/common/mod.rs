use std::sync::{Arc, Mutex};

use calorie_core::presenter::Presenter;
use calorie_core::storage::JsonStorage;
use calorie_core::tracker::{Entry, EntryKind, TrackerSummary};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated file-backed storage rooted in a unique directory.
pub fn temp_storage() -> JsonStorage {
    let temp = TempDir::new().expect("create temp dir");
    let storage =
        JsonStorage::new(Some(temp.path().to_path_buf())).expect("create json storage backend");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    storage
}

/// One observed presenter notification, trimmed to what the tests assert on.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    InitialDisplay(TrackerSummary),
    LoadItems { meals: Vec<String>, workouts: Vec<String> },
    NewEntry(EntryKind, String),
    Recompute(TrackerSummary),
    LimitChanged(i64),
}

/// Presenter that records every notification for later inspection. Clones
/// share the same log, so one copy can go into the tracker while the test
/// keeps another.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .expect("lock notification log")
            .clone()
    }

    fn record(&self, notification: Notification) {
        self.notifications
            .lock()
            .expect("lock notification log")
            .push(notification);
    }
}

impl Presenter for RecordingPresenter {
    fn initial_display(&self, summary: &TrackerSummary) {
        self.record(Notification::InitialDisplay(summary.clone()));
    }

    fn load_items(&self, meals: &[Entry], workouts: &[Entry]) {
        self.record(Notification::LoadItems {
            meals: meals.iter().map(|entry| entry.name.clone()).collect(),
            workouts: workouts.iter().map(|entry| entry.name.clone()).collect(),
        });
    }

    fn new_entry(&self, kind: EntryKind, entry: &Entry) {
        self.record(Notification::NewEntry(kind, entry.name.clone()));
    }

    fn recompute(&self, summary: &TrackerSummary) {
        self.record(Notification::Recompute(summary.clone()));
    }

    fn limit_changed(&self, limit: i64) {
        self.record(Notification::LimitChanged(limit));
    }
}
