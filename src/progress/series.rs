//! Series extraction and y-axis scaling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::metric::Metric;
use crate::exercise::{ExerciseRef, SetRecord};

/// Headroom added above the goal line or highest point.
pub const CHART_HEADROOM: f64 = 10.0;

/// Ceiling used for an empty chart before headroom.
pub const EMPTY_CHART_CEILING: f64 = 100.0;

/// One chartable point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Effective date of the record
    pub date: DateTime<Utc>,
    /// Metric value
    pub value: f64,
}

/// How records are matched to the charted exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseMatch {
    /// Match on exercise identifier
    Id(String),
    /// Match on display name (names can collide)
    Name(String),
}

impl ExerciseMatch {
    /// Match by identifier, the canonical key.
    pub fn for_exercise(exercise: &ExerciseRef) -> Self {
        ExerciseMatch::Id(exercise.id.clone())
    }

    /// Whether a record belongs to the target exercise.
    pub fn matches(&self, record: &SetRecord) -> bool {
        let Some(exercise) = record.exercise() else {
            return false;
        };

        match self {
            ExerciseMatch::Id(id) => exercise.id == *id,
            ExerciseMatch::Name(name) => exercise.name.as_deref() == Some(name.as_str()),
        }
    }
}

/// Build the series for one exercise and metric, sorted by date.
///
/// Records that do not match, or lack an effective date or metric value, are
/// skipped. Points sharing a date keep their input order.
pub fn extract_series<'a, I>(records: I, exercise: &ExerciseMatch, metric: Metric) -> Vec<SeriesPoint>
where
    I: IntoIterator<Item = &'a SetRecord>,
{
    let mut points: Vec<SeriesPoint> = records
        .into_iter()
        .filter(|record| exercise.matches(record))
        .filter_map(|record| {
            let date = record.effective_date()?;
            let value = record.value(metric)?;
            Some(SeriesPoint { date, value })
        })
        .collect();

    // sort_by_key is stable
    points.sort_by_key(|point| point.date);
    points
}

/// Highest value in a series.
pub fn series_max(series: &[SeriesPoint]) -> Option<f64> {
    series.iter().map(|point| point.value).reduce(f64::max)
}

/// Upper bound of the y-axis.
///
/// Leaves headroom above the goal line when a goal is set, otherwise above
/// the highest point (or a placeholder ceiling when there is no data).
pub fn chart_upper_bound(series: &[SeriesPoint], goal_value: f64) -> f64 {
    if goal_value > 0.0 {
        return goal_value + CHART_HEADROOM;
    }

    series_max(series).unwrap_or(EMPTY_CHART_CEILING) + CHART_HEADROOM
}
