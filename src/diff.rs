//! Detailed diff of two snapshots of the same logical collection
//!
//! Given an `old` and a `new` snapshot, [`detailed_diff`] partitions the
//! records into three buckets: `added` (identity only present in `new`),
//! `removed` (identity only present in `old`), and `updated` (identity
//! present in both, at least one top-level field changed). No record appears
//! in more than one bucket.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::collections::{difference, intersection, sort_by_field};

/// One retained record whose shallow fields changed between snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdatedEntry {
    /// The record as it appeared in the old snapshot
    pub from: Value,
    /// The record as it appears in the new snapshot
    pub to: Value,
    /// Names of the top-level fields whose values differ
    pub keys_updated: Vec<String>,
}

/// Result of diffing two snapshots of one collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailedDiff {
    /// Records with no identity-match in the old snapshot
    pub added: Vec<Value>,
    /// Records with no identity-match in the new snapshot
    pub removed: Vec<Value>,
    /// Records present in both snapshots that changed in place
    pub updated: Vec<UpdatedEntry>,
}

impl DetailedDiff {
    /// True when the two snapshots were identical under the diff's key rule.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }
}

/// Diffs two snapshots of the same logical collection.
///
/// With `key`, records are matched across snapshots by that identity field
/// and the retained records on each side are sorted by it (nulls last) so
/// the pairwise comparison lines up deterministically. Without a key,
/// matching falls back to whole-value equality and pairing order is the
/// byte order of each record's compact JSON serialization - the crate's
/// canonical record order. On duplicate-free snapshots a keyless diff never
/// produces `updated` entries (only value-equal records land on both
/// sides); duplicates with differing multiplicities make the positional
/// pairing implementation-defined and can pair non-equal records into
/// `updated` entries.
///
/// # Arguments
/// * `old` - The earlier snapshot
/// * `new` - The later snapshot
/// * `key` - Optional identity key naming a top-level field
pub fn detailed_diff(old: &[Value], new: &[Value], key: Option<&str>) -> DetailedDiff {
    let removed = difference(old, new, key);
    let added = difference(new, old, key);

    let (retained_old, retained_new) = match key {
        Some(key) => (
            sort_by_field(&intersection(old, new, Some(key)), key, false),
            sort_by_field(&intersection(new, old, Some(key)), key, false),
        ),
        None => (
            sort_canonical(intersection(old, new, None)),
            sort_canonical(intersection(new, old, None)),
        ),
    };

    let updated = retained_old
        .iter()
        .zip(retained_new.iter())
        .filter_map(|(from, to)| {
            let keys_updated = changed_fields(from, to);
            (!keys_updated.is_empty()).then(|| UpdatedEntry {
                from: from.clone(),
                to: to.clone(),
                keys_updated,
            })
        })
        .collect();

    DetailedDiff {
        added,
        removed,
        updated,
    }
}

/// Names of the top-level fields that differ between two records.
///
/// Every field present in either record is checked with deep value equality;
/// nested values only count through their top-level field. Fields of `from`
/// come first in map order, then fields present only in `to`. Non-object
/// records have no fields and always compare clean.
pub fn changed_fields(from: &Value, to: &Value) -> Vec<String> {
    let empty = Map::new();
    let from_map = from.as_object().unwrap_or(&empty);
    let to_map = to.as_object().unwrap_or(&empty);

    let mut changed: Vec<String> = from_map
        .iter()
        .filter_map(|(field, old)| (to_map.get(field) != Some(old)).then(|| field.clone()))
        .collect();
    changed.extend(
        to_map
            .keys()
            .filter(|field| !from_map.contains_key(field.as_str()))
            .cloned(),
    );

    changed
}

/// Ascending order over the compact JSON serialization of whole records.
fn sort_canonical(mut records: Vec<Value>) -> Vec<Value> {
    records.sort_by_cached_key(|record| record.to_string());
    records
}
