//! Tree navigation.
//!
//! A segment sequence is resolved against the document by one child-lookup
//! rule: mappings are indexed by key, sequences by numeric-looking segment,
//! anything else has no children. [`navigate`] performs the read-only walk
//! and reports the three-level context (target, parent, grandparent) the
//! mutation verbs reason about; [`container_mut`] re-walks a segment prefix
//! mutably so a verb can address `parent[last]` without holding references
//! across the read phase.

use serde_json::Value;

/// Result of resolving a segment sequence against the document.
///
/// `parent` is the container that directly held `target` at the last
/// successful step of the walk; `grandparent` is one level further up.
/// When the target is absent, `parent` still refers to the container the
/// final lookup was attempted in, which is what lets PUT address
/// not-yet-existing keys.
#[derive(Debug)]
pub struct Navigation<'a> {
    /// The node the full path resolved to, if it exists.
    pub target: Option<&'a Value>,
    /// Container one level above the target (the document root for empty or
    /// single-segment paths).
    pub parent: &'a Value,
    /// Container two levels above the target.
    pub grandparent: &'a Value,
    /// True when the walk performed the final segment's lookup, i.e. every
    /// segment before the last resolved. False for an empty sequence: there
    /// is no last segment to address.
    pub reached_last: bool,
}

impl Navigation<'_> {
    /// Whether the full path resolved to an existing node.
    #[must_use]
    pub fn target_exists(&self) -> bool {
        self.target.is_some()
    }
}

/// Look up a child node by segment.
///
/// Sequences only accept segments that parse as an index; a lookup into a
/// scalar yields nothing, which downstream verbs treat as "not found".
fn child<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Walk `segments` against `root`, tracking target, parent and grandparent.
///
/// The walk stops as soon as a segment fails to resolve; remaining segments
/// are not evaluated. An empty sequence leaves all three levels at the root.
#[must_use]
pub fn navigate<'a>(root: &'a Value, segments: &[String]) -> Navigation<'a> {
    let mut current = root;
    let mut parent = root;
    let mut grandparent = root;
    let mut reached_last = false;

    for (i, segment) in segments.iter().enumerate() {
        grandparent = parent;
        parent = current;
        let next = child(current, segment);
        if i == segments.len() - 1 {
            reached_last = true;
        }
        match next {
            Some(value) => current = value,
            None => {
                return Navigation {
                    target: None,
                    parent,
                    grandparent,
                    reached_last,
                }
            }
        }
    }

    Navigation {
        target: Some(current),
        parent,
        grandparent,
        reached_last,
    }
}

/// Mutably resolve a full segment prefix, yielding the addressed container.
///
/// For a request path `s0..sn`, `container_mut(root, &s[..n-1])` is the
/// mutable slot whose `s[n-1]` child the verb operates on. Returns `None`
/// exactly when [`navigate`] would report `reached_last == false` for the
/// full path.
pub fn container_mut<'a>(root: &'a mut Value, prefix: &[String]) -> Option<&'a mut Value> {
    let mut current = root;
    for segment in prefix {
        current = match current {
            Value::Object(map) => map.get_mut(segment)?,
            Value::Array(items) => {
                let index = segment.parse::<usize>().ok()?;
                items.get_mut(index)?
            }
            _ => return None,
        };
    }
    Some(current)
}
