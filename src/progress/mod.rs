//! Exercise progress charting.
//!
//! Turns logged set records into chartable data:
//! - Time period filtering (day, week, month, six months, year)
//! - Per-metric series extraction
//! - Axis tick dates and labels
//! - Goal line and y-axis ceiling

pub mod axis;
pub mod chart;
pub mod metric;
pub mod period;
pub mod series;

// Re-exports for convenience
pub use axis::{axis_labels, axis_ticks, tick_label};
pub use chart::{goal_line_value, Placeholder, ProgressChart, TimeSeriesReducer};
pub use metric::Metric;
pub use period::{filter_by_period, PeriodWindow, TimePeriod};
pub use series::{chart_upper_bound, extract_series, series_max, ExerciseMatch, SeriesPoint};
