use chrono::{DateTime, Local};
use frontdesk::display::*;
use serde_json::json;

#[test]
fn test_display_value_absent_and_null_use_placeholder() {
    assert_eq!(display_value(None, DisplayKind::Text), "---");
    assert_eq!(display_value(Some(&json!(null)), DisplayKind::Text), "---");
}

#[test]
fn test_display_value_empty_string_and_false_use_placeholder() {
    assert_eq!(display_value(Some(&json!("")), DisplayKind::Text), "---");
    assert_eq!(display_value(Some(&json!(false)), DisplayKind::Text), "---");
}

#[test]
fn test_display_value_zero_is_a_real_reading() {
    assert_eq!(display_value(Some(&json!(0)), DisplayKind::Text), "0");
}

#[test]
fn test_display_value_strings_render_unquoted() {
    assert_eq!(display_value(Some(&json!("Dr. Reyes")), DisplayKind::Text), "Dr. Reyes");
}

#[test]
fn test_display_value_other_values_render_compact_json() {
    assert_eq!(display_value(Some(&json!(42)), DisplayKind::Text), "42");
    assert_eq!(display_value(Some(&json!(true)), DisplayKind::Text), "true");
    assert_eq!(display_value(Some(&json!([1, 2])), DisplayKind::Text), "[1,2]");
}

#[test]
fn test_display_value_date_kind_formats_date_strings() {
    assert_eq!(
        display_value(Some(&json!("2024-03-05")), DisplayKind::Date),
        "05 Mar, 2024"
    );
    assert_eq!(
        display_value(Some(&json!("2024-03-05T14:30:00")), DisplayKind::Date),
        "05 Mar, 2024"
    );
}

#[test]
fn test_display_value_date_kind_accepts_epoch_millis() {
    let millis: i64 = 1_709_640_000_000;
    let expected = DateTime::from_timestamp_millis(millis)
        .unwrap()
        .with_timezone(&Local)
        .format(DISPLAY_DATE_FORMAT)
        .to_string();
    assert_eq!(display_value(Some(&json!(millis)), DisplayKind::Date), expected);
}

#[test]
fn test_display_value_date_kind_degrades_on_unparsable_input() {
    assert_eq!(display_value(Some(&json!("soonish")), DisplayKind::Date), "---");
    assert_eq!(display_value(Some(&json!(null)), DisplayKind::Date), "---");
    assert_eq!(display_value(None, DisplayKind::Date), "---");
}

#[test]
fn test_display_value_date_kind_zero_still_renders_zero() {
    // 0 is not truthy, so date interpretation never kicks in
    assert_eq!(display_value(Some(&json!(0)), DisplayKind::Date), "0");
}

#[test]
fn test_to_fixed_if_decimal_whole_numbers_drop_decimals() {
    assert_eq!(to_fixed_if_decimal(3.0, 2), "3");
    assert_eq!(to_fixed_if_decimal(0.0, 2), "0");
    assert_eq!(to_fixed_if_decimal(-7.0, 4), "-7");
}

#[test]
fn test_to_fixed_if_decimal_fractions_keep_precision() {
    assert_eq!(to_fixed_if_decimal(3.14159, 2), "3.14");
    assert_eq!(to_fixed_if_decimal(2.5, 2), "2.50");
    assert_eq!(to_fixed_if_decimal(-1.5, 1), "-1.5");
}

#[test]
fn test_to_fixed_if_decimal_rounding_to_whole_drops_decimals() {
    assert_eq!(to_fixed_if_decimal(2.999, 2), "3");
    assert_eq!(to_fixed_if_decimal(1.9999, 2), "2");
}

#[test]
fn test_to_fixed_if_decimal_ties_round_away_from_zero() {
    assert_eq!(to_fixed_if_decimal(2.5, 0), "3");
    assert_eq!(to_fixed_if_decimal(1.5, 0), "2");
    assert_eq!(to_fixed_if_decimal(0.25, 1), "0.3");
    assert_eq!(to_fixed_if_decimal(-2.5, 0), "-3");
}

#[test]
fn test_to_fixed_if_decimal_non_finite_uses_placeholder() {
    assert_eq!(to_fixed_if_decimal(f64::NAN, 2), "--");
    assert_eq!(to_fixed_if_decimal(f64::INFINITY, 2), "--");
    assert_eq!(to_fixed_if_decimal(f64::NEG_INFINITY, 2), "--");
}

#[test]
fn test_parse_int_or_zero() {
    assert_eq!(parse_int_or_zero("42"), 42);
    assert_eq!(parse_int_or_zero(" 7 "), 7);
    assert_eq!(parse_int_or_zero("-3"), -3);
    assert_eq!(parse_int_or_zero("12px"), 0);
    assert_eq!(parse_int_or_zero("3.5"), 0);
    assert_eq!(parse_int_or_zero(""), 0);
}

#[test]
fn test_parse_float_or_zero() {
    assert_eq!(parse_float_or_zero("3.14"), 3.14);
    assert_eq!(parse_float_or_zero(" 2.5 "), 2.5);
    assert_eq!(parse_float_or_zero("1e3"), 1000.0);
    assert_eq!(parse_float_or_zero("-0.5"), -0.5);
    assert_eq!(parse_float_or_zero("abc"), 0.0);
    assert_eq!(parse_float_or_zero("NaN"), 0.0);
    assert_eq!(parse_float_or_zero(""), 0.0);
}
