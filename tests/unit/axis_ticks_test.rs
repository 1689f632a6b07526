//! Unit tests for axis tick generation.

use chrono::{Datelike, Duration, TimeZone, Utc, Weekday};
use repchart::progress::{axis_ticks, TimePeriod};

#[test]
fn test_week_ticks_for_every_day_of_a_month() {
    for day in 1..=31 {
        let now = Utc.with_ymd_and_hms(2025, 3, day, 6, 0, 0).unwrap();
        let ticks = axis_ticks(TimePeriod::Week, &now);

        assert_eq!(ticks.len(), 8);
        assert_eq!(ticks[0].weekday(), Weekday::Mon);
        assert!(ticks[0] <= now.date_naive() && now.date_naive() < ticks[7]);
        for pair in ticks.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }
}

#[test]
fn test_month_ticks_stay_in_month() {
    let now = Utc.with_ymd_and_hms(2024, 2, 29, 6, 0, 0).unwrap();
    let ticks = axis_ticks(TimePeriod::Month, &now);

    assert_eq!(ticks.len(), 4);
    assert!(ticks.iter().all(|d| d.month() == 2 && d.weekday() == Weekday::Mon));
}

#[test]
fn test_month_start_ticks_are_ascending_firsts() {
    let now = Utc.with_ymd_and_hms(2025, 1, 31, 6, 0, 0).unwrap();

    for (period, count) in [(TimePeriod::SixMonths, 6), (TimePeriod::Year, 12)] {
        let ticks = axis_ticks(period, &now);
        assert_eq!(ticks.len(), count);
        assert!(ticks.iter().all(|d| d.day() == 1));
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ticks.last().map(|d| (d.year(), d.month())), Some((2025, 1)));
    }
}
