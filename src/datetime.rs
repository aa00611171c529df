//! Date and time utility functions
//!
//! This module provides date arithmetic for duration-length spans, interval
//! and relative-date text the way booking screens display them ("Today,
//! 2:30 PM", "2 weeks, 3 days"), day-boundary clamps, and conversions
//! between time-of-day string representations. All operations use the local
//! system time zone implicitly; nothing here converts between zones.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical calendar-date format accepted and produced by this module
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// 24-hour wall-clock format for time-of-day strings
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// 12-hour wall-clock format with AM/PM marker (e.g. "2:30 PM")
pub const MERIDIAN_TIME_FORMAT: &str = "%-I:%M %p";

/// Long display format for dates outside the today/yesterday window
pub const DISPLAY_DATETIME_FORMAT: &str = "%-d %b %Y, %-I:%M %p";

/// Unit used to compute a date offset from a span start.
///
/// Wire names follow the duration vocabulary of the record model:
/// `days`, `weeks`, `months`, `year`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    #[default]
    Days,
    Weeks,
    Months,
    #[serde(rename = "year")]
    Years,
}

/// Error returned when a duration unit name is not recognized.
#[derive(Debug, thiserror::Error)]
#[error("Unrecognized duration unit: {0}")]
pub struct ParseDurationUnitError(String);

impl FromStr for DurationUnit {
    type Err = ParseDurationUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "days" => Ok(DurationUnit::Days),
            "weeks" => Ok(DurationUnit::Weeks),
            "months" => Ok(DurationUnit::Months),
            "year" => Ok(DurationUnit::Years),
            other => Err(ParseDurationUnitError(other.to_string())),
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DurationUnit::Days => "days",
            DurationUnit::Weeks => "weeks",
            DurationUnit::Months => "months",
            DurationUnit::Years => "year",
        };
        f.write_str(name)
    }
}

/// Computes the inclusive end date of a span starting at `start`.
///
/// Adds `duration` units to the start date and steps back one day, so a
/// 1-day span ends on its own start date. Month and year addition clamp to
/// the end of shorter months the way [`chrono::Months`] does.
///
/// # Arguments
/// * `unit` - Duration unit of the span
/// * `duration` - Number of units; `0` yields the day before `start`
/// * `start` - First day of the span
///
/// # Returns
/// * `Option<NaiveDate>` - Inclusive end date, or `None` when the arithmetic
///   leaves the representable date range
pub fn end_date(unit: DurationUnit, duration: u32, start: NaiveDate) -> Option<NaiveDate> {
    let exclusive_end = match unit {
        DurationUnit::Days => start.checked_add_signed(Duration::days(i64::from(duration)))?,
        DurationUnit::Weeks => start.checked_add_signed(Duration::weeks(i64::from(duration)))?,
        DurationUnit::Months => start.checked_add_months(Months::new(duration))?,
        DurationUnit::Years => start.checked_add_months(Months::new(duration.checked_mul(12)?))?,
    };

    exclusive_end.checked_sub_signed(Duration::days(1))
}

/// Renders the inclusive length of a date interval as weeks-and-days text.
///
/// The inclusive day count of `[start, end]` splits into whole weeks and
/// leftover days: "2 weeks", "3 days", or "2 weeks, 3 days" depending on
/// which components are non-zero. A count of exactly one is singular. A
/// reversed or empty interval renders the degenerate "0 weeks, 0 days".
pub fn interval_text(start: NaiveDate, end: NaiveDate) -> String {
    let total_days = (end - start).num_days() + 1;
    if total_days <= 0 {
        return "0 weeks, 0 days".to_string();
    }

    let weeks = total_days / 7;
    let days = total_days % 7;
    let weeks_text = if weeks == 1 { "week" } else { "weeks" };
    let days_text = if days == 1 { "day" } else { "days" };

    match (weeks, days) {
        (_, 0) => format!("{weeks} {weeks_text}"),
        (0, _) => format!("{days} {days_text}"),
        _ => format!("{weeks} {weeks_text}, {days} {days_text}"),
    }
}

/// First representable instant of the given calendar day (00:00:00.000).
pub fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last displayed instant of the given calendar day (23:59:59.999).
pub fn day_end(date: NaiveDate) -> NaiveDateTime {
    // 86_399_999 ms past midnight is 23:59:59.999 on every calendar day
    day_start(date) + Duration::milliseconds(86_399_999)
}

/// Tests whether `moment` falls within a day-aligned interval.
///
/// The interval spans from `start` at 00:00:00.000 through `end` at
/// 23:59:59.999, both inclusive. An absent bound is open-ended: it falls
/// back to the minimum or maximum representable datetime.
pub fn is_within_min_max_interval(
    moment: NaiveDateTime,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> bool {
    let lower = start.map(day_start).unwrap_or(NaiveDateTime::MIN);
    let upper = end.map(day_end).unwrap_or(NaiveDateTime::MAX);
    moment >= lower && moment <= upper
}

/// Parses a time-of-day string in "HH:MM:SS" or "HH:MM" form.
pub fn parse_time(time: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .ok()
}

/// Anchors a time-of-day string to today's local date.
///
/// # Arguments
/// * `time` - Time string in "HH:MM:SS" or "HH:MM" form
///
/// # Returns
/// * `Option<NaiveDateTime>` - Today at that wall-clock time, or `None` when
///   the string is not a valid time of day
pub fn time_to_datetime(time: &str) -> Option<NaiveDateTime> {
    parse_time(time).map(|t| Local::now().date_naive().and_time(t))
}

/// Formats the time-of-day component of a datetime as "HH:MM:SS".
pub fn datetime_to_time(moment: NaiveDateTime) -> String {
    moment.format(TIME_FORMAT).to_string()
}

/// Reformats a 24-hour time-of-day string as "h:mm AM/PM".
pub fn time_to_meridian(time: &str) -> Option<String> {
    parse_time(time).map(|t| t.format(MERIDIAN_TIME_FORMAT).to_string())
}

/// Converts a 12-hour clock string ("h:mm am" / "h:mm PM") to "HH:MM:00".
///
/// The meridian marker is accepted in either case. Midnight is the usual
/// special case: "12:05 am" converts to "00:05:00". Returns `None` for
/// anything that is not a valid 12-hour clock reading.
pub fn convert_time_12_to_24(time12h: &str) -> Option<String> {
    let normalized = time12h.trim().to_uppercase();
    let parsed = NaiveTime::parse_from_str(&normalized, "%I:%M %p").ok()?;
    Some(parsed.format("%H:%M:00").to_string())
}

/// Parses a datetime string in any of the formats the crate accepts.
///
/// Tries RFC3339 first (e.g. "2025-01-15T14:30:00Z"), then ISO 8601 without
/// timezone, then the space-separated variant, then a bare calendar date at
/// midnight. Naive inputs resolve in the local time zone.
pub fn parse_datetime(input: &str) -> Option<DateTime<Local>> {
    if let Ok(moment) = DateTime::parse_from_rfc3339(input) {
        return Some(moment.with_timezone(&Local));
    }

    if let Ok(naive) =
        NaiveDateTime::parse_from_str(input, &format!("{ISO_DATE_FORMAT}T%H:%M:%S"))
    {
        return Some(resolve_local(naive));
    }

    if let Ok(naive) =
        NaiveDateTime::parse_from_str(input, &format!("{ISO_DATE_FORMAT} %H:%M:%S"))
    {
        return Some(resolve_local(naive));
    }

    NaiveDate::parse_from_str(input, ISO_DATE_FORMAT)
        .ok()
        .map(|date| resolve_local(day_start(date)))
}

/// Formats a datetime relative to the current local day.
///
/// Today and yesterday render as "Today, h:mm AM/PM" and "Yesterday, …";
/// everything else falls back to the long "d MMM yyyy, h:mm AM/PM" form.
pub fn format_relative(moment: DateTime<Local>) -> String {
    let today = Local::now().date_naive();
    let days_diff = (moment.date_naive() - today).num_days();
    let time_part = moment.format(MERIDIAN_TIME_FORMAT);

    match days_diff {
        0 => format!("Today, {time_part}"),
        -1 => format!("Yesterday, {time_part}"),
        _ => moment.format(DISPLAY_DATETIME_FORMAT).to_string(),
    }
}

/// Parses and formats a datetime string relative to the current local day.
///
/// # Arguments
/// * `input` - Datetime string in any format [`parse_datetime`] accepts
///
/// # Returns
/// * `String` - Relative or long-form text, or "Invalid date" when the
///   input does not parse
pub fn relative_date(input: &str) -> String {
    match parse_datetime(input) {
        Some(moment) => format_relative(moment),
        None => "Invalid date".to_string(),
    }
}

/// Sorts a copy of `records` by parsing the named field as a datetime.
///
/// Fields parse through [`parse_datetime`] (string fields) or count as epoch
/// milliseconds (numeric fields). Records whose field is missing or does not
/// parse sort after all dated records regardless of direction; the sort is
/// stable, so ties keep their input order.
pub fn sort_by_date(records: &[Value], key: &str, descending: bool) -> Vec<Value> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        compare_timestamps(field_timestamp(a, key), field_timestamp(b, key), descending)
    });
    sorted
}

/// Local resolution for naive datetimes; ambiguous or skipped local times
/// (DST transitions) fall back to the UTC reading, like the rest of the
/// crate's lenient parsing.
fn resolve_local(naive: NaiveDateTime) -> DateTime<Local> {
    Local
        .from_local_datetime(&naive)
        .single()
        .unwrap_or_else(|| Local.from_utc_datetime(&naive))
}

/// Epoch milliseconds of a record's date field, `None` when unusable.
fn field_timestamp(record: &Value, key: &str) -> Option<i64> {
    match record.get(key)? {
        Value::String(text) => parse_datetime(text).map(|moment| moment.timestamp_millis()),
        Value::Number(number) => number.as_i64(),
        _ => None,
    }
}

fn compare_timestamps(a: Option<i64>, b: Option<i64>, descending: bool) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            if descending {
                b.cmp(&a)
            } else {
                a.cmp(&b)
            }
        }
    }
}
