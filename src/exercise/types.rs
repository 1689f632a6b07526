//! Exercise identity, planned sets and logged set records.
//!
//! T012: Define SetRecord with optional timestamps and metrics
//! T013: Effective date and value precedence helpers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::progress::metric::Metric;

/// Identity of an exercise as referenced from a planned set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRef {
    /// Stable identifier
    pub id: String,
    /// Display name (not unique, may be missing)
    #[serde(default)]
    pub name: Option<String>,
}

impl ExerciseRef {
    /// Create an exercise reference.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }

    /// Name shown in titles, falling back to a generic label.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Exercise")
    }
}

/// A set as planned in a workout, before it was performed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannedSet {
    /// Unique identifier
    pub id: String,
    /// Exercise this set belongs to
    #[serde(default)]
    pub exercise: Option<ExerciseRef>,
    /// Planned weight
    #[serde(default)]
    pub weight: Option<f64>,
    /// Planned repetitions
    #[serde(default)]
    pub reps: Option<u32>,
    /// Planned duration in minutes
    #[serde(default)]
    pub duration: Option<u32>,
}

impl PlannedSet {
    /// Create an empty planned set for an exercise.
    pub fn new(id: impl Into<String>, exercise: ExerciseRef) -> Self {
        Self {
            id: id.into(),
            exercise: Some(exercise),
            ..Default::default()
        }
    }

    /// Planned value for a metric.
    pub fn planned_value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Weight => self.weight,
            Metric::Reps => self.reps.map(f64::from),
            Metric::Duration => self.duration.map(f64::from),
        }
    }
}

/// One logged performance of a set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    /// Unique identifier
    pub id: String,
    /// When the set was started
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    /// When the set was completed
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Time spent active in minutes
    #[serde(default)]
    pub active_duration: Option<f64>,
    /// Weight actually used
    #[serde(default)]
    pub weight_used: Option<f64>,
    /// Repetitions actually completed
    #[serde(default)]
    pub reps_completed: Option<u32>,
    /// The planned set this record was logged against
    #[serde(default)]
    pub planned: Option<PlannedSet>,
}

impl SetRecord {
    /// Create an empty record logged against a planned set.
    pub fn new(id: impl Into<String>, planned: PlannedSet) -> Self {
        Self {
            id: id.into(),
            planned: Some(planned),
            ..Default::default()
        }
    }

    /// Completion time if present, else start time.
    pub fn effective_date(&self) -> Option<DateTime<Utc>> {
        self.completed_at.or(self.started_at)
    }

    /// Exercise this record belongs to, via its planned set.
    pub fn exercise(&self) -> Option<&ExerciseRef> {
        self.planned.as_ref().and_then(|set| set.exercise.as_ref())
    }

    /// Recorded value for a metric, ignoring the plan.
    pub fn recorded_value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Weight => self.weight_used,
            Metric::Reps => self.reps_completed.map(f64::from),
            Metric::Duration => self.active_duration,
        }
    }

    /// Value for a metric: what was recorded, falling back to what was planned.
    pub fn value(&self, metric: Metric) -> Option<f64> {
        self.recorded_value(metric).or_else(|| {
            self.planned
                .as_ref()
                .and_then(|set| set.planned_value(metric))
        })
    }
}
