use std::sync::Mutex;

use uuid::Uuid;

use crate::tracker::Entry;

use super::{Result, StorageBackend, DEFAULT_CALORIE_LIMIT};

#[derive(Debug, Default)]
struct State {
    calorie_limit: Option<i64>,
    total_calories: Option<i64>,
    meals: Vec<Entry>,
    workouts: Vec<Entry>,
}

/// In-memory storage backend for tests and ephemeral sessions. Holds the same
/// four logical keys as [`super::JsonStorage`] but never touches disk.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    state: Mutex<State>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("memory storage mutex poisoned")
    }
}

impl StorageBackend for MemoryStorage {
    fn calorie_limit(&self) -> i64 {
        self.state().calorie_limit.unwrap_or(DEFAULT_CALORIE_LIMIT)
    }

    fn set_calorie_limit(&self, limit: i64) -> Result<()> {
        self.state().calorie_limit = Some(limit);
        Ok(())
    }

    fn total_calories(&self, default: i64) -> i64 {
        self.state().total_calories.unwrap_or(default)
    }

    fn update_total_calories(&self, total: i64) -> Result<()> {
        self.state().total_calories = Some(total);
        Ok(())
    }

    fn meals(&self) -> Vec<Entry> {
        self.state().meals.clone()
    }

    fn save_meal(&self, entry: &Entry) -> Result<()> {
        self.state().meals.push(entry.clone());
        Ok(())
    }

    fn remove_meal(&self, id: Uuid) -> Result<()> {
        self.state().meals.retain(|entry| entry.id != id);
        Ok(())
    }

    fn workouts(&self) -> Vec<Entry> {
        self.state().workouts.clone()
    }

    fn save_workout(&self, entry: &Entry) -> Result<()> {
        self.state().workouts.push(entry.clone());
        Ok(())
    }

    fn remove_workout(&self, id: Uuid) -> Result<()> {
        self.state().workouts.retain(|entry| entry.id != id);
        Ok(())
    }

    fn clear_all(&self) -> Result<()> {
        *self.state() = State::default();
        Ok(())
    }
}
