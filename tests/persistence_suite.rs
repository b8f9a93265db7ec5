mod common;

use std::fs;
use std::path::{Path, PathBuf};

use calorie_core::presenter::NullPresenter;
use calorie_core::storage::{StorageBackend, DEFAULT_CALORIE_LIMIT};
use calorie_core::tracker::{CalorieTracker, Entry};
use common::{Notification, RecordingPresenter};

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => String::from("tmp"),
    };
    tmp.set_extension(ext);
    tmp
}

#[test]
fn restart_restores_the_full_session() {
    let storage = common::temp_storage();
    let mut tracker = CalorieTracker::new(Box::new(storage.clone()), Box::new(NullPresenter));
    tracker.initialize();

    tracker.set_limit(1800);
    tracker.add_meal(Entry::new("Eggs", 300)).expect("add meal");
    tracker.add_meal(Entry::new("Toast", 150)).expect("add meal");
    tracker.add_workout(Entry::new("Run", 400)).expect("add workout");
    let toast_id = tracker.meals()[1].id;
    tracker.remove_meal(toast_id);

    // Simulated restart: a fresh tracker over the same storage directory.
    let presenter = RecordingPresenter::new();
    let mut restarted = CalorieTracker::new(Box::new(storage), Box::new(presenter.clone()));
    restarted.initialize();

    assert_eq!(restarted.calorie_limit(), 1800);
    assert_eq!(restarted.total_calories(), -100);
    assert_eq!(restarted.meals().len(), 1);
    assert_eq!(restarted.meals()[0].name, "Eggs");
    assert_eq!(restarted.workouts().len(), 1);
    assert_eq!(restarted.summary(), tracker.summary());

    let log = presenter.notifications();
    assert!(matches!(log[0], Notification::InitialDisplay(_)));
    assert_eq!(
        log[1],
        Notification::LoadItems {
            meals: vec!["Eggs".into()],
            workouts: vec!["Run".into()],
        }
    );
}

#[test]
fn empty_store_starts_with_defaults() {
    let storage = common::temp_storage();
    let mut tracker = CalorieTracker::new(Box::new(storage), Box::new(NullPresenter));
    tracker.initialize();

    assert_eq!(tracker.calorie_limit(), DEFAULT_CALORIE_LIMIT);
    assert_eq!(tracker.total_calories(), 0);
    assert!(tracker.meals().is_empty());
    assert!(tracker.workouts().is_empty());
}

#[test]
fn corrupt_store_degrades_to_defaults() {
    let storage = common::temp_storage();
    fs::write(storage.base_dir().join("meals.json"), "[{]").expect("write garbage");
    fs::write(storage.base_dir().join("total.json"), "\"NaN\"").expect("write garbage");

    let mut tracker = CalorieTracker::new(Box::new(storage), Box::new(NullPresenter));
    tracker.initialize();

    assert_eq!(tracker.total_calories(), 0);
    assert!(tracker.meals().is_empty());
}

#[test]
fn reset_clears_the_store_but_not_the_limit_key_semantics() {
    let storage = common::temp_storage();
    let mut tracker = CalorieTracker::new(Box::new(storage.clone()), Box::new(NullPresenter));
    tracker.initialize();

    tracker.set_limit(1600);
    tracker.add_meal(Entry::new("Eggs", 300)).expect("add meal");
    tracker.reset();

    // The in-memory session keeps its limit for the rest of the run; the
    // store forgets everything, so a restart reverts the limit to default.
    assert_eq!(tracker.calorie_limit(), 1600);
    assert_eq!(storage.total_calories(0), 0);
    assert!(storage.meals().is_empty());
    assert_eq!(storage.calorie_limit(), DEFAULT_CALORIE_LIMIT);
}

#[test]
fn failed_staged_write_preserves_the_previous_snapshot() {
    let storage = common::temp_storage();
    storage
        .save_meal(&Entry::new("Eggs", 300))
        .expect("initial save");
    let path = storage.base_dir().join("meals.json");
    let original = fs::read_to_string(&path).expect("read original file");

    // Create a directory that collides with the staging file name to force
    // the write to fail before the rename.
    fs::create_dir_all(tmp_path_for(&path)).expect("occupy tmp path");

    let result = storage.save_meal(&Entry::new("Toast", 150));
    assert!(
        result.is_err(),
        "expected save to fail when the staging path is a directory"
    );

    let current = fs::read_to_string(&path).expect("read after failure");
    assert_eq!(
        current, original,
        "a failed staged write must leave the previous snapshot intact"
    );
}
