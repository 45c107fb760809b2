//! Store-level tests through the public library API, no HTTP involved.

use doctree::store::{apply, navigate, new_document, read, StoreOutcome};
use http::Method;
use serde_json::json;

fn segs(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_new_document_discards_non_mapping_seed() {
    let doc = new_document(json!([1, 2, 3]));
    assert_eq!(*doc.read().unwrap(), json!({}));

    let doc = new_document(json!({ "k": 1 }));
    assert_eq!(*doc.read().unwrap(), json!({ "k": 1 }));
}

#[test]
fn test_navigation_reports_three_levels_through_shared_document() {
    let doc = new_document(json!({ "a": { "b": [7] } }));
    let guard = doc.read().unwrap();
    let nav = navigate(&guard, &segs(&["a", "b", "0"]));
    assert_eq!(nav.target, Some(&json!(7)));
    assert_eq!(nav.parent, &json!([7]));
    assert_eq!(nav.grandparent, &json!({ "b": [7] }));
    assert!(nav.reached_last);
    assert!(nav.target_exists());
}

#[test]
fn test_crud_lifecycle_of_a_collection() {
    let doc = new_document(json!({}));
    let mut root = doc.write().unwrap();

    // Create the collection, fill it, reshape an element, drop another.
    assert_eq!(
        apply(&mut root, &Method::PUT, &segs(&["pets"]), Some("[]")),
        StoreOutcome::Applied
    );
    for body in ["{\"name\":\"rex\",\"age\":3}", "{\"name\":\"ada\",\"age\":5}"] {
        assert_eq!(
            apply(&mut root, &Method::POST, &segs(&["pets"]), Some(body)),
            StoreOutcome::Applied
        );
    }
    assert_eq!(
        apply(&mut root, &Method::PATCH, &segs(&["pets", "0"]), Some("{\"age\":4}")),
        StoreOutcome::Applied
    );
    assert_eq!(
        apply(&mut root, &Method::DELETE, &segs(&["pets", "1"]), None),
        StoreOutcome::Deleted
    );

    assert_eq!(
        read(&root, &segs(&["pets"]), &[]),
        StoreOutcome::Found(json!([{ "name": "rex", "age": 4 }]))
    );
}

#[test]
fn test_reads_do_not_mutate_even_with_projection() {
    let doc = new_document(json!({ "rows": [{ "a": 1, "b": 2 }] }));
    let root = doc.read().unwrap();

    let projected = read(
        &root,
        &segs(&["rows"]),
        &[("cols".to_string(), "a".to_string())],
    );
    assert_eq!(projected, StoreOutcome::Found(json!([{ "a": 1 }])));
    // The live tree still has both fields.
    assert_eq!(*root, json!({ "rows": [{ "a": 1, "b": 2 }] }));
}

#[test]
fn test_outcome_statuses() {
    assert_eq!(StoreOutcome::Found(json!(1)).status(), 200);
    assert_eq!(StoreOutcome::Applied.status(), 200);
    assert_eq!(StoreOutcome::Deleted.status(), 204);
    assert_eq!(StoreOutcome::NotFound.status(), 404);
    assert_eq!(StoreOutcome::NotAppendable.status(), 405);
    assert_eq!(StoreOutcome::InvalidBody.status(), 400);
    assert_eq!(StoreOutcome::Applied.into_body(), None);
    assert_eq!(StoreOutcome::Found(json!(1)).into_body(), Some(json!(1)));
}
