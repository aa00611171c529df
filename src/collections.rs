//! Set operations, ordering, and projection over record collections
//!
//! Records here are plain [`serde_json::Value`]s. Two records are considered
//! the same identity when an identity key is supplied and their values at
//! that field are equal (two absent fields compare equal), or, without a key,
//! when the whole values are equal.

use std::cmp::Ordering;

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Returns the elements of `a` that have no identity-match in `b`.
///
/// # Arguments
/// * `a` - Collection to filter
/// * `b` - Collection to match against
/// * `key` - Optional identity key; without it, whole-value equality decides
pub fn difference(a: &[Value], b: &[Value], key: Option<&str>) -> Vec<Value> {
    a.iter()
        .filter(|x| !b.iter().any(|y| same_identity(x, y, key)))
        .cloned()
        .collect()
}

/// Returns the elements of `a` that do have an identity-match in `b`.
///
/// Same identity rule as [`difference`].
pub fn intersection(a: &[Value], b: &[Value], key: Option<&str>) -> Vec<Value> {
    a.iter()
        .filter(|x| b.iter().any(|y| same_identity(x, y, key)))
        .cloned()
        .collect()
}

/// Keeps one record per distinct value of `key`, the last occurrence winning.
///
/// Output order is the first-insertion order of the distinct key values, so
/// a later duplicate replaces the kept record without moving it. Key values
/// are bucketed by their JSON serialization: the number `1` and the string
/// `"1"` stay distinct, while every record missing the field lands in one
/// shared `null` bucket. That last grouping is a documented edge case, not
/// an error.
pub fn unique_by(records: &[Value], key: &str) -> Vec<Value> {
    let mut kept: IndexMap<String, Value> = IndexMap::new();
    for record in records {
        kept.insert(identity_bucket(record.get(key)), record.clone());
    }
    kept.into_values().collect()
}

/// Sorts a copy of `records` by the stringified value of `key`.
///
/// String fields compare by their raw contents, any other non-null field by
/// its compact JSON form. `null` and missing fields sort after all non-null
/// values regardless of direction. The comparison is plain byte order, which
/// keeps the result deterministic across platforms; the underlying sort is
/// stable, so equal keys keep their relative order.
pub fn sort_by_field(records: &[Value], key: &str, descending: bool) -> Vec<Value> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        compare_nulls_last(field_sort_string(a, key), field_sort_string(b, key), descending)
    });
    sorted
}

/// Projects `record` down to the named fields.
///
/// Fields absent from the record are omitted from the output rather than
/// written as `null`. Non-object records project to an empty object.
pub fn pick_fields(record: &Value, fields: &[&str]) -> Value {
    let mut picked = Map::new();
    if let Some(map) = record.as_object() {
        for &field in fields {
            if let Some(value) = map.get(field) {
                picked.insert(field.to_string(), value.clone());
            }
        }
    }
    Value::Object(picked)
}

/// Projects every record in `records` down to the named fields.
pub fn pick_fields_all(records: &[Value], fields: &[&str]) -> Vec<Value> {
    records.iter().map(|record| pick_fields(record, fields)).collect()
}

/// Averages the numeric field `key` across `records`, rounded to
/// `fractional_digits` digits.
///
/// An empty collection averages to `0.0`. Missing or non-numeric field
/// values contribute `0.0` to the sum but still count toward the divisor.
pub fn average_by(records: &[Value], key: &str, fractional_digits: u32) -> f64 {
    if records.is_empty() {
        return 0.0;
    }

    let sum: f64 = records
        .iter()
        .map(|record| record.get(key).and_then(Value::as_f64).unwrap_or(0.0))
        .sum();

    round_to(sum / records.len() as f64, fractional_digits)
}

/// Returns the counting sequence `[1, 2, …, n]`; `n == 0` yields an empty vec.
pub fn number_sequence(n: u32) -> Vec<u32> {
    (1..=n).collect()
}

/// Identity rule shared by [`difference`] and [`intersection`].
fn same_identity(a: &Value, b: &Value, key: Option<&str>) -> bool {
    match key {
        Some(key) => a.get(key) == b.get(key),
        None => a == b,
    }
}

/// Canonical bucket for an identity-key value; absent fields bucket as `null`.
fn identity_bucket(value: Option<&Value>) -> String {
    value.unwrap_or(&Value::Null).to_string()
}

/// Sort string for a record field, `None` for null or missing fields.
fn field_sort_string(record: &Value, key: &str) -> Option<String> {
    match record.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => Some(other.to_string()),
    }
}

/// Compares two optional sort strings, `None` (null/missing) always last.
fn compare_nulls_last(a: Option<String>, b: Option<String>, descending: bool) -> Ordering {
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

fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10_f64.powi(digits as i32);
    (value * factor).round() / factor
}
