//! Charted metric selector.

use serde::{Deserialize, Serialize};

use crate::storage::config::Units;

/// A measurable quantity of a logged set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Weight lifted
    Weight,
    /// Repetitions completed
    Reps,
    /// Active duration in minutes
    Duration,
}

impl Metric {
    /// All metrics in gauge display order.
    pub const ALL: [Metric; 3] = [Metric::Weight, Metric::Reps, Metric::Duration];

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Metric::Weight => "Weight",
            Metric::Reps => "Reps",
            Metric::Duration => "Duration",
        }
    }

    /// Get unit of measurement, if the metric has one.
    pub fn unit(&self, units: Units) -> Option<&'static str> {
        match self {
            Metric::Weight => Some(units.weight_label()),
            Metric::Reps => None,
            Metric::Duration => Some("min"),
        }
    }

    /// Display name, a noun and the unit, e.g. `Weight Progress (lbs)`.
    pub fn labelled(&self, noun: &str, units: Units) -> String {
        match self.unit(units) {
            Some(unit) => format!("{} {} ({})", self.display_name(), noun, unit),
            None => format!("{} {}", self.display_name(), noun),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "weight" => Ok(Metric::Weight),
            "reps" => Ok(Metric::Reps),
            "duration" => Ok(Metric::Duration),
            other => Err(format!("unknown metric: {}", other)),
        }
    }
}
