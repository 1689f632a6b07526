//! Time period selector and record filtering.
//!
//! T020: Define TimePeriod with calendar and rolling windows
//! T021: Filter records by period relative to an explicit `now`
//!
//! `Day`, `Week` and `Month` are calendar buckets containing `now`; `SixMonths`
//! and `Year` are rolling windows ending at `now`. All calendar arithmetic is
//! done in the time zone of `now`.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::exercise::SetRecord;

/// Window selector for progress charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimePeriod {
    /// Calendar day containing now
    Day,
    /// ISO week (Monday start) containing now
    #[default]
    Week,
    /// Calendar month containing now
    Month,
    /// Rolling six calendar months ending now
    SixMonths,
    /// Rolling twelve calendar months ending now
    Year,
}

/// Inclusive bounds of a period, in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindow {
    /// First instant inside the window
    pub start: DateTime<Utc>,
    /// Last instant inside the window
    pub end: DateTime<Utc>,
}

impl PeriodWindow {
    /// Whether an instant falls inside the window.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

impl TimePeriod {
    /// All periods in picker order.
    pub const ALL: [TimePeriod; 5] = [
        TimePeriod::Day,
        TimePeriod::Week,
        TimePeriod::Month,
        TimePeriod::SixMonths,
        TimePeriod::Year,
    ];

    /// Short label shown on the period picker.
    pub fn label(&self) -> &'static str {
        match self {
            TimePeriod::Day => "D",
            TimePeriod::Week => "W",
            TimePeriod::Month => "M",
            TimePeriod::SixMonths => "6M",
            TimePeriod::Year => "Y",
        }
    }

    /// Length of a rolling window in calendar months.
    fn rolling_months(&self) -> Option<u32> {
        match self {
            TimePeriod::SixMonths => Some(6),
            TimePeriod::Year => Some(12),
            _ => None,
        }
    }

    /// Whether an instant falls inside this period relative to `now`.
    pub fn contains<Tz: TimeZone>(&self, instant: DateTime<Utc>, now: &DateTime<Tz>) -> bool {
        let local = instant.with_timezone(&now.timezone());

        match self {
            TimePeriod::Day => local.date_naive() == now.date_naive(),
            TimePeriod::Week => local.iso_week() == now.iso_week(),
            TimePeriod::Month => local.year() == now.year() && local.month() == now.month(),
            TimePeriod::SixMonths | TimePeriod::Year => {
                let months = self.rolling_months().unwrap_or(0);
                match now.clone().checked_sub_months(Months::new(months)) {
                    Some(start) => local >= start && local <= *now,
                    None => false,
                }
            }
        }
    }

    /// Compute the inclusive window bounds relative to `now`.
    ///
    /// Returns `None` when a bound does not exist in the time zone of `now`
    /// (e.g. local midnight skipped by a DST change).
    pub fn window<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<PeriodWindow> {
        if let Some(months) = self.rolling_months() {
            let start = now.clone().checked_sub_months(Months::new(months))?;
            return Some(PeriodWindow {
                start: start.with_timezone(&Utc),
                end: now.with_timezone(&Utc),
            });
        }

        let today = now.date_naive();
        let (first, next) = match self {
            TimePeriod::Day => (today, today.succ_opt()?),
            TimePeriod::Week => {
                let monday = week_start(today);
                (monday, monday + Duration::days(7))
            }
            _ => {
                let first = today.with_day(1)?;
                (first, first.checked_add_months(Months::new(1))?)
            }
        };

        let tz = now.timezone();
        let start = local_midnight(&tz, first)?;
        let next_start = local_midnight(&tz, next)?;

        Some(PeriodWindow {
            start: start.with_timezone(&Utc),
            end: next_start.with_timezone(&Utc) - Duration::nanoseconds(1),
        })
    }
}

impl std::fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for TimePeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" | "d" => Ok(TimePeriod::Day),
            "week" | "w" => Ok(TimePeriod::Week),
            "month" | "m" => Ok(TimePeriod::Month),
            "sixmonths" | "six-months" | "6m" => Ok(TimePeriod::SixMonths),
            "year" | "y" => Ok(TimePeriod::Year),
            other => Err(format!("unknown time period: {}", other)),
        }
    }
}

/// Monday of the ISO week containing `date`.
pub(crate) fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&date.and_hms_opt(0, 0, 0)?).earliest()
}

/// Keep the records whose effective date falls inside `period` relative to `now`.
///
/// Records without an effective date are dropped. Input order is preserved.
pub fn filter_by_period<'a, Tz: TimeZone>(
    records: &'a [SetRecord],
    period: TimePeriod,
    now: &DateTime<Tz>,
) -> Vec<&'a SetRecord> {
    records
        .iter()
        .filter(|record| {
            record
                .effective_date()
                .map(|date| period.contains(date, now))
                .unwrap_or(false)
        })
        .collect()
}
