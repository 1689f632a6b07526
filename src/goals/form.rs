//! Edit-goals form model.
//!
//! Holds the raw text of the three goal fields while the user edits them and
//! turns them into validated goals on save. Cancelling is just dropping the
//! form.

use thiserror::Error;

use super::store::{GoalRepository, GoalStoreError};
use super::types::ExerciseGoals;
use crate::progress::metric::Metric;
use crate::storage::config::Units;

/// Editable goal fields for one exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalForm {
    exercise_name: Option<String>,
    /// Weight goal input
    pub weight: String,
    /// Reps goal input
    pub reps: String,
    /// Duration goal input (minutes)
    pub duration: String,
}

impl GoalForm {
    /// Create a form pre-filled with existing goals.
    pub fn new(exercise_name: Option<&str>, goals: ExerciseGoals) -> Self {
        Self {
            exercise_name: exercise_name.map(str::to_string),
            weight: format_decimal(goals.weight),
            reps: goals.reps.to_string(),
            duration: goals.duration.to_string(),
        }
    }

    /// Create a form pre-filled from a goal repository.
    pub fn load<R: GoalRepository + ?Sized>(exercise_name: Option<&str>, goals: &R) -> Self {
        let saved = exercise_name
            .map(|name| goals.goals_for(name))
            .unwrap_or_default();
        Self::new(exercise_name, saved)
    }

    /// Navigation title.
    pub fn title(&self) -> String {
        format!("Edit {} goals", self.exercise_name.as_deref().unwrap_or("Exercise"))
    }

    /// Field label, e.g. `Weight Goal (lbs)`.
    pub fn field_label(metric: Metric, units: Units) -> String {
        metric.labelled("Goal", units)
    }

    /// Parse and validate the inputs.
    pub fn submit(&self) -> Result<ExerciseGoals, GoalFormError> {
        Ok(ExerciseGoals {
            weight: parse_decimal(Metric::Weight, &self.weight)?,
            reps: parse_count(Metric::Reps, &self.reps)?,
            duration: parse_count(Metric::Duration, &self.duration)?,
        })
    }

    /// Validate and write the goals under the exercise name.
    pub fn save<R: GoalRepository + ?Sized>(&self, goals: &mut R) -> Result<ExerciseGoals, GoalFormError> {
        let name = self.exercise_name.as_deref().ok_or(GoalFormError::MissingExerciseName)?;
        let parsed = self.submit()?;
        goals.put(name, parsed)?;
        Ok(parsed)
    }
}

/// Format with at most two fraction digits and no trailing zeros.
fn format_decimal(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn parse_decimal(metric: Metric, input: &str) -> Result<f64, GoalFormError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let value: f64 = trimmed
        .replace(',', "")
        .parse()
        .map_err(|_| GoalFormError::InvalidNumber(metric, input.to_string()))?;

    if !value.is_finite() {
        return Err(GoalFormError::InvalidNumber(metric, input.to_string()));
    }
    if value < 0.0 {
        return Err(GoalFormError::Negative(metric));
    }

    // Stored with the same precision the field displays
    Ok((value * 100.0).round() / 100.0)
}

fn parse_count(metric: Metric, input: &str) -> Result<u32, GoalFormError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    if trimmed.starts_with('-') {
        return Err(GoalFormError::Negative(metric));
    }

    trimmed
        .parse()
        .map_err(|_| GoalFormError::InvalidNumber(metric, input.to_string()))
}

/// Goal form errors.
#[derive(Debug, Error)]
pub enum GoalFormError {
    #[error("{0} goal is not a valid number: {1:?}")]
    InvalidNumber(Metric, String),

    #[error("{0} goal cannot be negative")]
    Negative(Metric),

    #[error("Exercise has no name to save goals under")]
    MissingExerciseName,

    #[error("Failed to save goals: {0}")]
    StoreError(#[from] GoalStoreError),
}
