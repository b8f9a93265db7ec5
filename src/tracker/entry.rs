use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single logged meal or workout. Immutable once created; removal is the
/// only lifecycle event after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    pub name: String,
    pub calories: i64,
}

impl Entry {
    /// Creates an entry with a freshly generated id.
    pub fn new(name: impl Into<String>, calories: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            calories,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Identifies which collection an entry belongs to in notifications.
pub enum EntryKind {
    Meal,
    Workout,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Meal => "Meal",
            EntryKind::Workout => "Workout",
        };
        f.write_str(label)
    }
}
