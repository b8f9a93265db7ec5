pub mod json_backend;
pub mod memory;

use uuid::Uuid;

use crate::errors::StorageError;
use crate::tracker::Entry;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Limit assumed when the store has no persisted value.
pub const DEFAULT_CALORIE_LIMIT: i64 = 2000;

/// Abstraction over persistence backends capable of storing tracker state.
///
/// Reads are lenient: a missing or corrupt value falls back to its default so
/// a damaged store never prevents a session from starting. Writes surface
/// [`StorageError`] and must leave the previously persisted state intact.
pub trait StorageBackend: Send + Sync {
    fn calorie_limit(&self) -> i64;
    fn set_calorie_limit(&self, limit: i64) -> Result<()>;
    fn total_calories(&self, default: i64) -> i64;
    fn update_total_calories(&self, total: i64) -> Result<()>;
    fn meals(&self) -> Vec<Entry>;
    fn save_meal(&self, entry: &Entry) -> Result<()>;
    fn remove_meal(&self, id: Uuid) -> Result<()>;
    fn workouts(&self) -> Vec<Entry>;
    fn save_workout(&self, entry: &Entry) -> Result<()>;
    fn remove_workout(&self, id: Uuid) -> Result<()>;
    /// Erases limit, total, and both collections. The limit reverts to
    /// [`DEFAULT_CALORIE_LIMIT`] on the next read.
    fn clear_all(&self) -> Result<()>;
}

pub use json_backend::JsonStorage;
pub use memory::MemoryStorage;
