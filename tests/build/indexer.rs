//! Index entry construction through the public build API.

use std::collections::HashMap;

use omnisearch::build::{build_entry, build_index, ContentRecord, Language};
use omnisearch::types::DocumentType;

fn languages() -> HashMap<String, Language> {
    serde_json::from_str(r#"{"js": {"short": "js", "long": "JavaScript"}}"#).unwrap()
}

fn record(json: &str) -> ContentRecord {
    serde_json::from_str(json).unwrap()
}

#[test]
fn entry_carries_tokens_rank_type_and_url() {
    let record = record(
        r#"{
            "id": "js/s/array-map",
            "title": "Array map",
            "type": "snippet",
            "tags": ["array"],
            "language": "js",
            "body": "Maps each element using a callback function.",
            "excerpt": "Maps an array's elements."
        }"#,
    );
    let entry = build_entry(&record, &languages()).unwrap();
    assert_eq!(entry.url, "/js/s/array-map");
    assert_eq!(entry.kind, DocumentType::Snippet);
    assert_eq!(entry.tag, "JavaScript");
    assert!(entry.contains_token("array"));
    assert!(entry.contains_token("map"));
    assert!(entry.rank > 0.0);
}

#[test]
fn tokens_are_deduplicated_and_lowercased() {
    let record = record(
        r#"{
            "id": "js/s/x",
            "title": "Array Array ARRAY",
            "type": "snippet",
            "excerpt": "array"
        }"#,
    );
    let entry = build_entry(&record, &languages()).unwrap();
    assert_eq!(entry.search_tokens, vec!["array".to_string()]);
}

#[test]
fn records_without_identity_fields_are_rejected() {
    let no_id = record(r#"{"title": "T", "type": "snippet", "excerpt": "x"}"#);
    assert!(build_entry(&no_id, &languages()).is_err());

    let no_title = record(r#"{"id": "js/s/x", "type": "snippet", "excerpt": "x"}"#);
    assert!(build_entry(&no_title, &languages()).is_err());
}

#[test]
fn a_rejected_record_fails_the_whole_index_build() {
    let good = record(
        r#"{"id": "js/s/ok", "title": "Fine", "type": "snippet", "excerpt": "fine"}"#,
    );
    let bad = record(r#"{"id": "", "title": "Broken", "type": "snippet", "excerpt": "x"}"#);
    let err = build_index(&[good, bad], &languages()).unwrap_err();
    assert!(err.contains("missing an id"));
}

#[test]
fn index_entries_are_pre_sorted_by_descending_rank() {
    let rich = record(
        r#"{
            "id": "js/s/rich",
            "title": "Array sort",
            "type": "snippet",
            "tags": ["array", "sort"],
            "language": "js",
            "body": "Sorts a javascript array with a custom function.",
            "excerpt": "Sorts an array."
        }"#,
    );
    let plain = record(
        r#"{
            "id": "aa/s/plain",
            "title": "Plain note",
            "type": "snippet",
            "excerpt": "Nothing remarkable here."
        }"#,
    );
    // "aa/s/plain" would come first by id; rank order must win.
    let index = build_index(&[plain, rich], &languages()).unwrap();
    assert_eq!(index[0].url, "/js/s/rich");
    assert!(index[0].rank > index[1].rank);
}
