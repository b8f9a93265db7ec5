use tracing::warn;
use uuid::Uuid;

use crate::errors::ValidationError;
use crate::presenter::Presenter;
use crate::storage::{self, StorageBackend, DEFAULT_CALORIE_LIMIT};

use super::entry::{Entry, EntryKind};
use super::summary::TrackerSummary;

/// Owns the authoritative in-memory tracker state: the configured limit, the
/// running total, and the meal/workout collections. Every mutation keeps the
/// total consistent with the collections, persists through the injected
/// storage backend, and notifies the presenter.
pub struct CalorieTracker {
    calorie_limit: i64,
    total_calories: i64,
    meals: Vec<Entry>,
    workouts: Vec<Entry>,
    storage: Box<dyn StorageBackend>,
    presenter: Box<dyn Presenter>,
}

impl CalorieTracker {
    /// Wires a tracker to its collaborators. State holds the defaults until
    /// [`CalorieTracker::initialize`] restores the persisted session.
    pub fn new(storage: Box<dyn StorageBackend>, presenter: Box<dyn Presenter>) -> Self {
        Self {
            calorie_limit: DEFAULT_CALORIE_LIMIT,
            total_calories: 0,
            meals: Vec::new(),
            workouts: Vec::new(),
            storage,
            presenter,
        }
    }

    /// Restores the persisted session, then emits the initial display plus a
    /// load-items notification so the presenter can render existing entries.
    /// Called once at startup.
    pub fn initialize(&mut self) {
        self.calorie_limit = self.storage.calorie_limit();
        self.total_calories = self.storage.total_calories(0);
        self.meals = self.storage.meals();
        self.workouts = self.storage.workouts();
        self.presenter.initial_display(&self.summary());
        self.presenter.load_items(&self.meals, &self.workouts);
    }

    /// Logs a meal, adding its calories to the running total.
    pub fn add_meal(&mut self, entry: Entry) -> Result<(), ValidationError> {
        self.validate_new_entry(&entry)?;
        self.total_calories += entry.calories;
        self.persist_total();
        self.persist(self.storage.save_meal(&entry), "save meal");
        self.presenter.new_entry(EntryKind::Meal, &entry);
        self.meals.push(entry);
        self.presenter.recompute(&self.summary());
        Ok(())
    }

    /// Logs a workout, subtracting its calories from the running total.
    pub fn add_workout(&mut self, entry: Entry) -> Result<(), ValidationError> {
        self.validate_new_entry(&entry)?;
        self.total_calories -= entry.calories;
        self.persist_total();
        self.persist(self.storage.save_workout(&entry), "save workout");
        self.presenter.new_entry(EntryKind::Workout, &entry);
        self.workouts.push(entry);
        self.presenter.recompute(&self.summary());
        Ok(())
    }

    /// Removes the meal with the given id, giving its calories back to the
    /// remaining budget. Unknown ids are a no-op, so removal is idempotent.
    pub fn remove_meal(&mut self, id: Uuid) {
        let index = match self.meals.iter().position(|entry| entry.id == id) {
            Some(index) => index,
            None => return,
        };
        let entry = self.meals.remove(index);
        self.total_calories -= entry.calories;
        self.persist_total();
        self.persist(self.storage.remove_meal(id), "remove meal");
        self.presenter.recompute(&self.summary());
    }

    /// Removes the workout with the given id, charging its calories back to
    /// the running total. Unknown ids are a no-op.
    pub fn remove_workout(&mut self, id: Uuid) {
        let index = match self.workouts.iter().position(|entry| entry.id == id) {
            Some(index) => index,
            None => return,
        };
        let entry = self.workouts.remove(index);
        self.total_calories += entry.calories;
        self.persist_total();
        self.persist(self.storage.remove_workout(id), "remove workout");
        self.presenter.recompute(&self.summary());
    }

    /// Replaces the daily calorie limit. Range checking is left to the
    /// caller; a zero limit renders as fully spent rather than failing.
    pub fn set_limit(&mut self, limit: i64) {
        self.calorie_limit = limit;
        self.persist(self.storage.set_calorie_limit(limit), "set limit");
        self.presenter.limit_changed(limit);
        self.presenter.recompute(&self.summary());
    }

    /// Clears all entries and the running total, and erases the store. The
    /// configured limit stays in place; only `set_limit` changes it.
    pub fn reset(&mut self) {
        self.total_calories = 0;
        self.meals.clear();
        self.workouts.clear();
        self.persist(self.storage.clear_all(), "clear storage");
        self.presenter.recompute(&self.summary());
    }

    pub fn calorie_limit(&self) -> i64 {
        self.calorie_limit
    }

    pub fn total_calories(&self) -> i64 {
        self.total_calories
    }

    /// Logged meals in insertion order.
    pub fn meals(&self) -> &[Entry] {
        &self.meals
    }

    /// Logged workouts in insertion order.
    pub fn workouts(&self) -> &[Entry] {
        &self.workouts
    }

    /// Snapshot of the derived display values for the current state.
    pub fn summary(&self) -> TrackerSummary {
        TrackerSummary::from_parts(
            self.calorie_limit,
            self.total_calories,
            &self.meals,
            &self.workouts,
        )
    }

    fn validate_new_entry(&self, entry: &Entry) -> Result<(), ValidationError> {
        if entry.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if entry.calories < 0 {
            return Err(ValidationError::NegativeCalories(entry.calories));
        }
        let duplicate = self
            .meals
            .iter()
            .chain(self.workouts.iter())
            .any(|existing| existing.id == entry.id);
        if duplicate {
            return Err(ValidationError::DuplicateId(entry.id));
        }
        Ok(())
    }

    fn persist_total(&self) {
        self.persist(
            self.storage.update_total_calories(self.total_calories),
            "update total",
        );
    }

    fn persist(&self, result: storage::Result<()>, operation: &str) {
        if let Err(err) = result {
            warn!(
                "failed to {}: {}; continuing with in-memory state",
                operation, err
            );
        }
    }
}
