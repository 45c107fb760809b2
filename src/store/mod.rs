//! The document tree and the operations addressing it.
//!
//! The store is a single `serde_json::Value` — a mapping at the root —
//! shared by all connection handlers behind a read/write lock. Reads walk
//! the tree through [`navigate`]; mutations re-derive their slot through
//! [`container_mut`] so no reference into the tree is held across the
//! request's body-read boundary.

mod engine;
mod filter;
mod navigator;
mod project;

use std::sync::{Arc, RwLock};

use serde_json::Value;

pub use engine::{apply, read, StoreOutcome};
pub use filter::{apply_filters, filter_params};
pub use navigator::{container_mut, navigate, Navigation};
pub use project::{column_list, project_columns};

/// The shared document root.
///
/// One per process; cloned handles all point at the same tree.
pub type SharedDocument = Arc<RwLock<Value>>;

/// Wrap a seed value as the shared document root.
///
/// The root must be a mapping; any other seed shape is discarded in favor
/// of an empty mapping, mirroring the constructor contract of the store.
#[must_use]
pub fn new_document(seed: Value) -> SharedDocument {
    let root = if seed.is_object() {
        seed
    } else {
        Value::Object(serde_json::Map::new())
    };
    Arc::new(RwLock::new(root))
}
