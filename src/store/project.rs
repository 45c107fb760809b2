//! Column projection of sequence reads.
//!
//! The reserved `cols` query parameter names the fields a GET on a sequence
//! should keep. It may repeat and each occurrence may carry a comma-joined
//! list; all occurrences flatten into one allow-list.

use serde_json::Value;

/// Flatten every `cols` occurrence in the query into one allow-list.
#[must_use]
pub fn column_list(query: &[(String, String)]) -> Vec<String> {
    query
        .iter()
        .filter(|(key, _)| key == "cols")
        .flat_map(|(_, value)| value.split(','))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strip every field outside the allow-list from each mapping element.
///
/// Operates in place on an already-copied read result, never on the live
/// document. An empty allow-list or a non-sequence value is a no-op;
/// non-mapping elements pass through untouched.
pub fn project_columns(value: &mut Value, cols: &[String]) {
    if cols.is_empty() {
        return;
    }
    let Value::Array(items) = value else {
        return;
    };
    for item in items {
        if let Value::Object(fields) = item {
            fields.retain(|key, _| cols.iter().any(|c| c == key));
        }
    }
}
