//! Unit tests for series extraction and chart scaling.

use chrono::{Duration, TimeZone, Utc};
use repchart::progress::{chart_upper_bound, extract_series, ExerciseMatch, Metric, SeriesPoint};
use repchart::{ExerciseRef, PlannedSet, SetRecord};

fn curl() -> ExerciseRef {
    ExerciseRef::new("ex-curl", "Curl")
}

#[test]
fn test_series_sorted_for_any_input_order() {
    let base = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    // Deterministic shuffle of day offsets
    let offsets: Vec<i64> = (0..40).map(|i| (i * 17) % 40).collect();

    let records: Vec<SetRecord> = offsets
        .iter()
        .map(|days| {
            let mut record = SetRecord::new(format!("r{}", days), PlannedSet::new("s", curl()));
            record.started_at = Some(base + Duration::days(*days));
            record.reps_completed = Some(*days as u32);
            record
        })
        .collect();

    let series = extract_series(&records, &ExerciseMatch::for_exercise(&curl()), Metric::Reps);
    assert_eq!(series.len(), 40);
    assert!(series.windows(2).all(|w| w[0].date <= w[1].date));
}

#[test]
fn test_planned_value_fallback() {
    let mut planned = PlannedSet::new("s", curl());
    planned.weight = Some(30.0);

    let mut record = SetRecord::new("r", planned);
    record.completed_at = Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());

    let series = extract_series([&record], &ExerciseMatch::Name("Curl".to_string()), Metric::Weight);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].value, 30.0);
}

#[test]
fn test_upper_bound_examples() {
    let date = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let point = |value| SeriesPoint { date, value };

    assert_eq!(chart_upper_bound(&[], 0.0), 110.0);
    assert_eq!(chart_upper_bound(&[point(90.0)], 100.0), 110.0);
    assert_eq!(chart_upper_bound(&[point(150.0)], 0.0), 160.0);
}
