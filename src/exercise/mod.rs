//! Exercise and logged-set types consumed by the progress charts.
//!
//! These mirror the records supplied by the surrounding workout app. The
//! charting code only reads them.

pub mod types;

pub use types::{ExerciseRef, PlannedSet, SetRecord};
