//! Query-parameter filtering of sequence reads.
//!
//! A GET on a sequence can be narrowed by arbitrary query parameters.
//! An element is kept iff it is a mapping and, for at least one filter key,
//! its field under that key is itself a mapping whose KEY SET contains the
//! requested value. Membership is tested against the sub-object's keys, not
//! its values, and multiple filter keys combine with OR. This matching rule
//! is part of the store's contract; do not "fix" it to value equality.

use serde_json::Value;

/// Shape the raw query list into filter pairs.
///
/// The reserved `cols` key belongs to the projector and is skipped, as are
/// pairs with an empty value. Duplicate keys collapse to their first value.
#[must_use]
pub fn filter_params(query: &[(String, String)]) -> Vec<(String, String)> {
    let mut filters: Vec<(String, String)> = Vec::new();
    for (key, value) in query {
        if key == "cols" || value.is_empty() {
            continue;
        }
        if filters.iter().any(|(seen, _)| seen == key) {
            continue;
        }
        filters.push((key.clone(), value.clone()));
    }
    filters
}

/// Apply the OR-combined filters to a sequence target.
///
/// Non-sequence targets and an empty filter set pass through unfiltered.
/// Always returns an owned copy; the live document is never touched by a
/// read.
#[must_use]
pub fn apply_filters(target: &Value, filters: &[(String, String)]) -> Value {
    let Value::Array(items) = target else {
        return target.clone();
    };
    if filters.is_empty() {
        return target.clone();
    }
    let kept = items
        .iter()
        .filter(|element| matches_any(element, filters))
        .cloned()
        .collect();
    Value::Array(kept)
}

fn matches_any(element: &Value, filters: &[(String, String)]) -> bool {
    let Value::Object(fields) = element else {
        return false;
    };
    filters.iter().any(|(key, wanted)| {
        matches!(fields.get(key), Some(Value::Object(sub)) if sub.contains_key(wanted))
    })
}
