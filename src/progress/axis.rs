//! X-axis tick dates and labels per time period.
//!
//! T022: Tick rules for week, month, six-month and year charts
//! T023: Tick label formatting

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, TimeZone, Weekday};

use super::period::{week_start, TimePeriod};

/// Tick dates for a period, computed from `now` only.
///
/// - `Day`: today and tomorrow (the bounds of the day)
/// - `Week`: Monday of this week plus the next seven days (8 dates)
/// - `Month`: every Monday of the current month
/// - `SixMonths` / `Year`: first of each month ending at the current month,
///   oldest first
pub fn axis_ticks<Tz: TimeZone>(period: TimePeriod, now: &DateTime<Tz>) -> Vec<NaiveDate> {
    let today = now.date_naive();

    match period {
        TimePeriod::Day => std::iter::once(today).chain(today.succ_opt()).collect(),
        TimePeriod::Week => {
            let monday = week_start(today);
            (0..=7).map(|offset| monday + Duration::days(offset)).collect()
        }
        TimePeriod::Month => mondays_in_month(today),
        TimePeriod::SixMonths => month_starts(today, 6),
        TimePeriod::Year => month_starts(today, 12),
    }
}

fn mondays_in_month(today: NaiveDate) -> Vec<NaiveDate> {
    let Some(first) = today.with_day(1) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|date| date.month() == first.month())
        .filter(|date| date.weekday() == Weekday::Mon)
        .collect()
}

fn month_starts(today: NaiveDate, count: u32) -> Vec<NaiveDate> {
    let Some(current) = today.with_day(1) else {
        return Vec::new();
    };

    (0..count)
        .rev()
        .filter_map(|back| current.checked_sub_months(Months::new(back)))
        .collect()
}

/// Format a tick date the way the chart for `period` labels it.
pub fn tick_label(period: TimePeriod, date: NaiveDate) -> String {
    match period {
        TimePeriod::Day => date.format("%b %-d").to_string(),
        TimePeriod::Week => date.format("%a").to_string(),
        TimePeriod::Month => date.format("%-d").to_string(),
        TimePeriod::SixMonths => date.format("%b").to_string(),
        // Single letter keeps twelve labels readable
        TimePeriod::Year => date.format("%b").to_string().chars().take(1).collect(),
    }
}

/// Labels for a list of tick dates.
pub fn axis_labels(period: TimePeriod, ticks: &[NaiveDate]) -> Vec<String> {
    ticks.iter().map(|date| tick_label(period, *date)).collect()
}
