//! Exercise goal type definitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::progress::metric::Metric;

/// Targets for one exercise. Zero means "no goal set".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseGoals {
    /// Target weight
    pub weight: f64,
    /// Target repetitions
    pub reps: u32,
    /// Target duration in minutes
    pub duration: u32,
}

impl ExerciseGoals {
    /// Create a goal set.
    pub fn new(weight: f64, reps: u32, duration: u32) -> Self {
        Self {
            weight,
            reps,
            duration,
        }
    }

    /// Goal value for a metric.
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Weight => self.weight,
            Metric::Reps => f64::from(self.reps),
            Metric::Duration => f64::from(self.duration),
        }
    }
}

/// All goals, keyed by exercise display name.
pub type GoalSet = BTreeMap<String, ExerciseGoals>;
