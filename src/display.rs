//! Display-value and numeric formatting
//!
//! Screens prefer a consistent placeholder over an empty cell, so these
//! helpers map "nothing to show" to `"---"` (general values) or `"--"`
//! (numbers) instead of panicking or returning errors on bad input.

use chrono::{DateTime, Local};
use serde_json::Value;

use crate::datetime;

/// Placeholder rendered for values with nothing to display
pub const EMPTY_PLACEHOLDER: &str = "---";

/// Placeholder rendered for numbers that cannot be formatted
pub const NUMBER_PLACEHOLDER: &str = "--";

/// Display format for calendar dates ("05 Mar, 2024")
pub const DISPLAY_DATE_FORMAT: &str = "%d %b, %Y";

/// How [`display_value`] should interpret the value it renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayKind {
    /// Render the value's bare string form
    #[default]
    Text,
    /// Parse the value as a date and render it as "dd MMM, yyyy"
    Date,
}

/// Formats an optional loosely-shaped value for display.
///
/// Empty-ish values (absent, `null`, `""`, `false`) render the `"---"`
/// placeholder, with one exception: the number `0` is a real reading and
/// renders as `"0"`. Strings render unquoted; any other value renders its
/// compact JSON form.
///
/// With [`DisplayKind::Date`], string values parse through the crate's
/// datetime fallback chain and numbers count as epoch milliseconds; input
/// that fails to parse degrades to the placeholder rather than erroring.
pub fn display_value(value: Option<&Value>, kind: DisplayKind) -> String {
    let value = match value {
        Some(value) => value,
        None => return EMPTY_PLACEHOLDER.to_string(),
    };

    if kind == DisplayKind::Date && is_truthy(value) {
        return format_date_value(value).unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string());
    }

    if is_truthy(value) || is_zero(value) {
        return bare_string(value);
    }

    EMPTY_PLACEHOLDER.to_string()
}

/// Formats a number without decimals when it is whole, with `precision`
/// fractional digits otherwise.
///
/// Ties round away from zero, the same rounding [`crate::collections::average_by`]
/// uses, so `2.5` at precision 0 renders `"3"`. A fractional value whose
/// rounded form is whole drops the decimals too: `2.999` at precision 2
/// renders `"3"`, while `2.5` at precision 2 keeps its `"2.50"`. Non-finite
/// input renders the `"--"` placeholder.
pub fn to_fixed_if_decimal(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return NUMBER_PLACEHOLDER.to_string();
    }
    if value.fract() == 0.0 {
        return format!("{value}");
    }

    // The {:.p$} formatter rounds ties to even; ties here must round away
    // from zero, so scale and round before formatting
    let factor = 10_f64.powi(precision as i32);
    let rounded = (value * factor).round() / factor;
    if rounded.fract() == 0.0 {
        format!("{rounded}")
    } else {
        format!("{rounded:.precision$}")
    }
}

/// Parses a trimmed decimal integer, defaulting to `0` on anything else.
///
/// Deliberately strict: `"12px"` is `0` here, not a prefix-parsed `12`.
pub fn parse_int_or_zero(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}

/// Parses a trimmed finite float, defaulting to `0.0` on anything else.
pub fn parse_float_or_zero(value: &str) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => parsed,
        _ => 0.0,
    }
}

/// Truthiness rule for loosely-shaped values: `null`, `false`, `0`, and the
/// empty string are empty-ish, everything else has content.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn is_zero(value: &Value) -> bool {
    value.as_f64() == Some(0.0)
}

fn bare_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Renders a value as a calendar date, `None` when it cannot be read as one.
fn format_date_value(value: &Value) -> Option<String> {
    let moment: DateTime<Local> = match value {
        Value::String(text) => datetime::parse_datetime(text)?,
        Value::Number(number) => {
            DateTime::from_timestamp_millis(number.as_i64()?)?.with_timezone(&Local)
        }
        _ => return None,
    };

    Some(moment.format(DISPLAY_DATE_FORMAT).to_string())
}
