//! Display-facing notification seam. The tracker pushes immutable payloads
//! through this trait; it never reads presentation state back.

use crate::tracker::{Entry, EntryKind, TrackerSummary};

/// Receives state-change notifications so a UI shell can re-render.
pub trait Presenter: Send + Sync {
    /// Full display refresh, emitted once after the persisted session loads.
    fn initial_display(&self, summary: &TrackerSummary);
    /// Entries restored from storage, in insertion order.
    fn load_items(&self, meals: &[Entry], workouts: &[Entry]);
    /// A single entry was appended to one of the collections.
    fn new_entry(&self, kind: EntryKind, entry: &Entry);
    /// Totals changed; derived display values should be redrawn.
    fn recompute(&self, summary: &TrackerSummary);
    /// The daily limit was replaced.
    fn limit_changed(&self, limit: i64);
}

/// Presenter that ignores every notification, for headless sessions.
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn initial_display(&self, _summary: &TrackerSummary) {}

    fn load_items(&self, _meals: &[Entry], _workouts: &[Entry]) {}

    fn new_entry(&self, _kind: EntryKind, _entry: &Entry) {}

    fn recompute(&self, _summary: &TrackerSummary) {}

    fn limit_changed(&self, _limit: i64) {}
}
