//! Unit tests for time period filtering.
//!
//! T027: Filtered dates stay inside the period window

use chrono::{DateTime, Duration, TimeZone, Utc};
use repchart::progress::{filter_by_period, TimePeriod};
use repchart::SetRecord;

/// Records every 36 hours across two years before and after `now`.
fn spread_records(now: DateTime<Utc>) -> Vec<SetRecord> {
    (-500..=500)
        .map(|i| SetRecord {
            id: format!("r{}", i),
            started_at: Some(now + Duration::hours(36 * i)),
            ..Default::default()
        })
        .collect()
}

#[test]
fn test_filtered_dates_fall_inside_window() {
    let now = Utc.with_ymd_and_hms(2025, 2, 19, 14, 30, 0).unwrap();
    let records = spread_records(now);

    for period in TimePeriod::ALL {
        let window = period.window(&now).unwrap();
        let kept = filter_by_period(&records, period, &now);

        assert!(!kept.is_empty(), "{} kept nothing", period);
        for record in &kept {
            let date = record.effective_date().unwrap();
            assert!(window.contains(date), "{} kept {} outside window", period, date);
        }

        // Nothing inside the window was dropped
        let expected = records
            .iter()
            .filter(|r| window.contains(r.effective_date().unwrap()))
            .count();
        assert_eq!(kept.len(), expected, "{} dropped records", period);
    }
}

#[test]
fn test_rolling_windows_exclude_future_records() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
    let records = vec![
        SetRecord {
            id: "future".to_string(),
            completed_at: Some(now + Duration::minutes(1)),
            ..Default::default()
        },
        SetRecord {
            id: "now".to_string(),
            completed_at: Some(now),
            ..Default::default()
        },
    ];

    let kept = filter_by_period(&records, TimePeriod::Year, &now);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, "now");
}

#[test]
fn test_completion_date_wins_over_start() {
    let now = Utc.with_ymd_and_hms(2025, 2, 19, 12, 0, 0).unwrap();
    // Started last week, completed this week
    let record = SetRecord {
        id: "long".to_string(),
        started_at: Some(Utc.with_ymd_and_hms(2025, 2, 16, 23, 0, 0).unwrap()),
        completed_at: Some(Utc.with_ymd_and_hms(2025, 2, 17, 1, 0, 0).unwrap()),
        ..Default::default()
    };

    assert_eq!(filter_by_period(&[record], TimePeriod::Week, &now).len(), 1);
}
