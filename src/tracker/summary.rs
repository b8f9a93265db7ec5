use serde::{Deserialize, Serialize};

use super::entry::Entry;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Derived display values for the current tracker state. Computed on demand,
/// never stored.
pub struct TrackerSummary {
    pub calorie_limit: i64,
    pub total_calories: i64,
    pub consumed: i64,
    pub burned: i64,
    pub remaining: i64,
    pub progress_percent: f64,
    pub over_budget: bool,
}

impl TrackerSummary {
    pub fn from_parts(
        calorie_limit: i64,
        total_calories: i64,
        meals: &[Entry],
        workouts: &[Entry],
    ) -> Self {
        let remaining = calorie_limit - total_calories;
        Self {
            calorie_limit,
            total_calories,
            consumed: sum_calories(meals),
            burned: sum_calories(workouts),
            remaining,
            progress_percent: progress_percent(total_calories, calorie_limit),
            over_budget: remaining <= 0,
        }
    }
}

/// Total calories across a collection of entries.
pub fn sum_calories(entries: &[Entry]) -> i64 {
    entries.iter().map(|entry| entry.calories).sum()
}

/// Share of the limit already spent, clamped to 100. A zero limit reads as
/// fully spent rather than a division error.
pub fn progress_percent(total: i64, limit: i64) -> f64 {
    if limit == 0 {
        return 100.0;
    }
    let percentage = (total as f64 / limit as f64) * 100.0;
    percentage.min(100.0)
}
