//! Exercise goals module.
//!
//! Per-exercise performance targets used for chart goal lines and gauges:
//! - Goal types and the persisted name-keyed goal set
//! - Goal repository backed by a key-value blob
//! - Progress-toward-goal gauge readings
//! - Edit-goals form model

pub mod form;
pub mod progress;
pub mod store;
pub mod types;

// Re-exports for convenience
pub use form::{GoalForm, GoalFormError};
pub use progress::{current_max, progress_percent, GaugeReading, GoalGauges};
pub use store::{decode_goals, encode_goals, GoalRepository, GoalStore, GoalStoreError, GOALS_KEY};
pub use types::{ExerciseGoals, GoalSet};
