//! Chart assembly for one exercise, metric and period.
//!
//! T024: TimeSeriesReducer with injected goal repository
//! T025: Goal line and y-axis ceiling
//! T026: Empty-state placeholder

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::Serialize;

use super::axis::{axis_labels, axis_ticks};
use super::metric::Metric;
use super::period::{filter_by_period, TimePeriod};
use super::series::{chart_upper_bound, extract_series, ExerciseMatch, SeriesPoint};
use crate::exercise::{ExerciseRef, SetRecord};
use crate::goals::store::GoalRepository;
use crate::storage::config::Units;

/// Goal line for a metric: the saved goal, or 0 when none is saved.
pub fn goal_line_value<R: GoalRepository + ?Sized>(exercise_name: &str, metric: Metric, goals: &R) -> f64 {
    goals.goals_for(exercise_name).value(metric)
}

/// Everything needed to draw one progress chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressChart {
    /// Chart heading, e.g. `Weight Progress (lbs)`
    pub title: String,
    pub metric: Metric,
    pub period: TimePeriod,
    /// Points sorted by date
    pub points: Vec<SeriesPoint>,
    /// X-axis tick dates
    pub ticks: Vec<NaiveDate>,
    /// Label for each tick
    pub tick_labels: Vec<String>,
    /// Goal reference line (0 = no goal)
    pub goal_line: f64,
    /// Top of the y-axis
    pub y_max: f64,
}

/// Text shown instead of a chart with nothing to plot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    pub message: String,
    pub hint: &'static str,
}

impl ProgressChart {
    /// Whether there is anything worth plotting.
    pub fn has_data(&self) -> bool {
        self.points.iter().any(|point| point.value != 0.0)
    }

    /// Whether a goal line should be drawn.
    pub fn has_goal(&self) -> bool {
        self.goal_line > 0.0
    }

    /// Empty-state text, when there is no data.
    pub fn placeholder(&self) -> Option<Placeholder> {
        if self.has_data() {
            return None;
        }

        Some(Placeholder {
            message: format!(
                "No {} data for this time period.",
                self.metric.display_name().to_lowercase()
            ),
            hint: "Try another time period.",
        })
    }
}

/// Reduces raw set records into progress charts.
pub struct TimeSeriesReducer<'a, R: ?Sized> {
    goals: &'a R,
    units: Units,
}

impl<'a, R: GoalRepository + ?Sized> TimeSeriesReducer<'a, R> {
    /// Create a reducer reading goal lines from `goals`.
    pub fn new(goals: &'a R) -> Self {
        Self {
            goals,
            units: Units::default(),
        }
    }

    /// Use a unit system for chart titles. Values are plotted as stored.
    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    /// Build the chart of `metric` for `exercise` over `period`, relative to `now`.
    pub fn chart<Tz: TimeZone>(
        &self,
        records: &[SetRecord],
        exercise: &ExerciseRef,
        metric: Metric,
        period: TimePeriod,
        now: &DateTime<Tz>,
    ) -> ProgressChart {
        let in_period = filter_by_period(records, period, now);
        let points = extract_series(in_period, &ExerciseMatch::for_exercise(exercise), metric);

        let goal_line = exercise
            .name
            .as_deref()
            .map(|name| goal_line_value(name, metric, self.goals))
            .unwrap_or(0.0);
        let y_max = chart_upper_bound(&points, goal_line);

        let ticks = axis_ticks(period, now);
        let tick_labels = axis_labels(period, &ticks);

        tracing::debug!(
            "{} {} chart for '{}': {} of {} records plotted, goal {}",
            period,
            metric,
            exercise.id,
            points.len(),
            records.len(),
            goal_line
        );

        ProgressChart {
            title: metric.labelled("Progress", self.units),
            metric,
            period,
            points,
            ticks,
            tick_labels,
            goal_line,
            y_max,
        }
    }

    /// Charts for every metric, in gauge order.
    pub fn charts<Tz: TimeZone>(
        &self,
        records: &[SetRecord],
        exercise: &ExerciseRef,
        period: TimePeriod,
        now: &DateTime<Tz>,
    ) -> Vec<ProgressChart> {
        Metric::ALL
            .iter()
            .map(|metric| self.chart(records, exercise, *metric, period, now))
            .collect()
    }
}
