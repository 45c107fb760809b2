//! The per-verb mutation engine.
//!
//! Each request resolves to exactly one [`StoreOutcome`]; the outcome
//! variant carries the HTTP status instead of threading a mutable default
//! status through the verb branches. Reads go through [`read`], which never
//! touches the live tree; mutations go through [`apply`], which re-derives
//! the mutable slot for `parent[last]` from the segment prefix.
//!
//! Body interpretation is uniform across POST and PATCH: bytes that parse
//! as JSON are data, anything else is an opaque string. Only PUT demands
//! valid JSON.

use http::Method;
use serde_json::Value;

use super::filter::{apply_filters, filter_params};
use super::navigator::{container_mut, navigate};
use super::project::{column_list, project_columns};

/// Outcome of applying one request to the document.
///
/// The variant is the status; [`StoreOutcome::status`] maps it to the wire
/// code and [`StoreOutcome::into_body`] yields the response body, if any.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreOutcome {
    /// GET resolved; carries the (filtered, projected) copy of the target.
    Found(Value),
    /// A mutation was accepted.
    Applied,
    /// DELETE removed the addressed node.
    Deleted,
    /// The path did not resolve, or a verb precondition was unmet.
    NotFound,
    /// POST addressed an existing node that is not a sequence.
    NotAppendable,
    /// PUT body was not valid JSON.
    InvalidBody,
}

impl StoreOutcome {
    /// The HTTP status code this outcome maps to.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            StoreOutcome::Found(_) | StoreOutcome::Applied => 200,
            StoreOutcome::Deleted => 204,
            StoreOutcome::NotFound => 404,
            StoreOutcome::NotAppendable => 405,
            StoreOutcome::InvalidBody => 400,
        }
    }

    /// The response body, if this outcome carries one.
    #[must_use]
    pub fn into_body(self) -> Option<Value> {
        match self {
            StoreOutcome::Found(value) => Some(value),
            _ => None,
        }
    }
}

/// Serve a GET: resolve the path, then filter and project sequence targets.
///
/// Filtering and projection operate on a copy; a read never mutates the
/// document.
#[must_use]
pub fn read(root: &Value, segments: &[String], query: &[(String, String)]) -> StoreOutcome {
    let nav = navigate(root, segments);
    let Some(target) = nav.target else {
        return StoreOutcome::NotFound;
    };
    let filters = filter_params(query);
    let mut result = apply_filters(target, &filters);
    let cols = column_list(query);
    project_columns(&mut result, &cols);
    StoreOutcome::Found(result)
}

/// Apply a mutating verb to the document.
///
/// Unrecognized methods are accepted but perform no action and report the
/// path as not found.
pub fn apply(
    root: &mut Value,
    method: &Method,
    segments: &[String],
    body: Option<&str>,
) -> StoreOutcome {
    match method.as_str() {
        "POST" => post(root, segments, body),
        "PUT" => put(root, segments, body),
        "PATCH" => patch(root, segments, body),
        "DELETE" => delete(root, segments),
        _ => StoreOutcome::NotFound,
    }
}

/// Interpret a request body the lenient way: JSON when parseable, the raw
/// string otherwise. An absent body is the empty string.
fn lenient_body(body: Option<&str>) -> Value {
    let raw = body.unwrap_or_default();
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// POST appends to an existing sequence.
fn post(root: &mut Value, segments: &[String], body: Option<&str>) -> StoreOutcome {
    match container_mut(root, segments) {
        Some(Value::Array(items)) => {
            items.push(lenient_body(body));
            StoreOutcome::Applied
        }
        Some(_) => StoreOutcome::NotAppendable,
        None => StoreOutcome::NotFound,
    }
}

/// PUT replaces `parent[last]` wholesale, creating the slot if absent.
fn put(root: &mut Value, segments: &[String], body: Option<&str>) -> StoreOutcome {
    let Some((last, prefix)) = segments.split_last() else {
        return StoreOutcome::NotFound;
    };
    let Some(parent) = container_mut(root, prefix) else {
        return StoreOutcome::NotFound;
    };
    let Ok(value) = serde_json::from_str::<Value>(body.unwrap_or_default()) else {
        return StoreOutcome::InvalidBody;
    };
    set_child(parent, last, value);
    StoreOutcome::Applied
}

/// PATCH shallow-merges into an existing target, or replaces it with the
/// raw string when the body is not JSON.
fn patch(root: &mut Value, segments: &[String], body: Option<&str>) -> StoreOutcome {
    let Some((last, prefix)) = segments.split_last() else {
        return StoreOutcome::NotFound;
    };
    let Some(parent) = container_mut(root, prefix) else {
        return StoreOutcome::NotFound;
    };
    let Some(target) = child_mut(parent, last) else {
        return StoreOutcome::NotFound;
    };
    let raw = body.unwrap_or_default();
    match serde_json::from_str::<Value>(raw) {
        Ok(updates) => merge_into(target, updates),
        Err(_) => *target = Value::String(raw.to_string()),
    }
    StoreOutcome::Applied
}

/// DELETE removes the addressed key or element from its parent.
fn delete(root: &mut Value, segments: &[String]) -> StoreOutcome {
    let Some((last, prefix)) = segments.split_last() else {
        return StoreOutcome::NotFound;
    };
    let Some(parent) = container_mut(root, prefix) else {
        return StoreOutcome::NotFound;
    };
    match parent {
        Value::Object(map) => match map.remove(last) {
            Some(_) => StoreOutcome::Deleted,
            None => StoreOutcome::NotFound,
        },
        Value::Array(items) => match last.parse::<usize>() {
            Ok(index) if index < items.len() => {
                items.remove(index);
                StoreOutcome::Deleted
            }
            _ => StoreOutcome::NotFound,
        },
        _ => StoreOutcome::NotFound,
    }
}

/// Write `value` into `parent[segment]`.
///
/// Mappings insert or replace the key. Sequences accept numeric segments,
/// padding with nulls past the end. Writes that the tree cannot represent
/// (non-numeric index into a sequence, child of a scalar) are dropped; the
/// verb still reports success because the slot was addressable.
fn set_child(parent: &mut Value, segment: &str, value: Value) {
    match parent {
        Value::Object(map) => {
            map.insert(segment.to_string(), value);
        }
        Value::Array(items) => {
            if let Ok(index) = segment.parse::<usize>() {
                if index >= items.len() {
                    items.resize(index + 1, Value::Null);
                }
                items[index] = value;
            }
        }
        _ => {}
    }
}

fn child_mut<'a>(parent: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match parent {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(items) => {
            let index = segment.parse::<usize>().ok()?;
            items.get_mut(index)
        }
        _ => None,
    }
}

/// Shallow merge: mapping fields win over existing keys, sequence updates
/// overwrite by index and extend past the end. Mismatched shape pairs leave
/// the target untouched.
fn merge_into(target: &mut Value, updates: Value) {
    match (target, updates) {
        (Value::Object(fields), Value::Object(updates)) => {
            for (key, value) in updates {
                fields.insert(key, value);
            }
        }
        (Value::Array(items), Value::Array(updates)) => {
            for (index, value) in updates.into_iter().enumerate() {
                if index < items.len() {
                    items[index] = value;
                } else {
                    items.push(value);
                }
            }
        }
        _ => {}
    }
}
