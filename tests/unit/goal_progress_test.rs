//! Unit tests for goal progress percentages.

use repchart::goals::{progress_percent, GaugeReading};
use repchart::Metric;

#[test]
fn test_progress_percent_examples() {
    assert_eq!(progress_percent(50.0, 100.0), 50);
    assert_eq!(progress_percent(10.0, 0.0), 0);
    assert_eq!(progress_percent(120.0, 100.0), 120);
}

#[test]
fn test_progress_percent_rounds() {
    assert_eq!(progress_percent(1.0, 3.0), 33);
    assert_eq!(progress_percent(0.996, 1.0), 100);
    assert_eq!(progress_percent(0.0, 45.0), 0);
}

#[test]
fn test_negative_goal_reads_zero() {
    assert_eq!(progress_percent(10.0, -5.0), 0);
    assert_eq!(GaugeReading::new(Metric::Reps, 10.0, -5.0).fill_fraction(), 0.0);
}
