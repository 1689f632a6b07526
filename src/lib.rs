//! RepChart - Exercise Progress Charting
//!
//! Data side of an exercise progress screen: filters logged sets into time
//! periods, builds per-metric series with axis ticks and goal lines, and
//! computes progress-toward-goal gauges from saved per-exercise goals.

pub mod exercise;
pub mod goals;
pub mod progress;
pub mod storage;

// Re-export commonly used types
pub use exercise::{ExerciseRef, PlannedSet, SetRecord};
pub use goals::{ExerciseGoals, GoalForm, GoalGauges, GoalRepository, GoalStore};
pub use progress::{Metric, ProgressChart, TimePeriod, TimeSeriesReducer};
pub use storage::config::AppConfig;
