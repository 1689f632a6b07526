//! Progress-toward-goal gauges.
//!
//! T040: Percentage of goal from all-time best
//! T041: Gauge section readings for weight, reps and duration

use serde::{Deserialize, Serialize};

use super::store::GoalRepository;
use crate::exercise::{ExerciseRef, SetRecord};
use crate::progress::metric::Metric;
use crate::progress::series::ExerciseMatch;

/// Percentage of `goal` reached by `current_max`, rounded.
///
/// Zero when no goal is set. Not clamped: beating a goal reads above 100.
pub fn progress_percent(current_max: f64, goal: f64) -> i64 {
    if goal > 0.0 {
        (current_max / goal * 100.0).round() as i64
    } else {
        0
    }
}

/// All-time best value of a metric for the matching exercise.
pub fn current_max<'a, I>(records: I, exercise: &ExerciseMatch, metric: Metric) -> Option<f64>
where
    I: IntoIterator<Item = &'a SetRecord>,
{
    records
        .into_iter()
        .filter(|record| exercise.matches(record))
        .filter_map(|record| record.value(metric))
        .reduce(f64::max)
}

/// One gauge: best value against goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeReading {
    /// Metric shown on the gauge
    pub metric: Metric,
    /// All-time best (0 when nothing was logged)
    pub current_max: f64,
    /// Goal value (0 when unset)
    pub goal: f64,
    /// Percentage of goal reached
    pub percent: i64,
}

impl GaugeReading {
    /// Build a reading from a best value and goal.
    pub fn new(metric: Metric, current_max: f64, goal: f64) -> Self {
        Self {
            metric,
            current_max,
            goal,
            percent: progress_percent(current_max, goal),
        }
    }

    /// How full to draw the gauge, between 0 and 1.
    pub fn fill_fraction(&self) -> f64 {
        if self.goal > 0.0 {
            (self.current_max / self.goal).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Weight, reps and duration gauges for one exercise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalGauges {
    pub weight: GaugeReading,
    pub reps: GaugeReading,
    pub duration: GaugeReading,
}

impl GoalGauges {
    /// Compute gauges from all records of the exercise and its saved goals.
    pub fn compute<R: GoalRepository + ?Sized>(
        records: &[SetRecord],
        exercise: &ExerciseRef,
        goals: &R,
    ) -> Self {
        let matcher = ExerciseMatch::for_exercise(exercise);
        // Unnamed exercises have no goals to look up
        let saved = exercise
            .name
            .as_deref()
            .map(|name| goals.goals_for(name))
            .unwrap_or_default();

        let reading = |metric: Metric| {
            let best = current_max(records, &matcher, metric).unwrap_or(0.0);
            GaugeReading::new(metric, best, saved.value(metric))
        };

        Self {
            weight: reading(Metric::Weight),
            reps: reading(Metric::Reps),
            duration: reading(Metric::Duration),
        }
    }

    /// Readings in display order.
    pub fn readings(&self) -> [GaugeReading; 3] {
        [self.weight, self.reps, self.duration]
    }
}
