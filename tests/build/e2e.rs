//! End-to-end: build input → artifact on disk → loaded session → search.

use std::fs;

use omnisearch::build::{run_build, ARTIFACT_FILE_NAME};
use omnisearch::types::{DocumentType, SearchIndexArtifact, SearchReply};
use omnisearch::SearchSession;

use super::common::{collection_record_json, snippet_record_json, write_input_dir};

#[test]
fn build_writes_a_loadable_artifact() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_input_dir(
        input.path(),
        &[
            (
                "map.json",
                snippet_record_json("js/s/array-map", "Array map", "Maps an array."),
            ),
            (
                "arrays.json",
                collection_record_json("c/arrays", "Arrays", "Everything about arrays."),
            ),
        ],
    );

    run_build(
        input.path().to_str().unwrap(),
        output.path().to_str().unwrap(),
    )
    .unwrap();

    let raw = fs::read_to_string(output.path().join(ARTIFACT_FILE_NAME)).unwrap();
    let artifact: SearchIndexArtifact = serde_json::from_str(&raw).unwrap();
    assert_eq!(artifact.search_index.len(), 2);

    // The wire shape carries the joined token string, not an array
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entries = value["searchIndex"].as_array().unwrap();
    assert!(entries[0]["searchTokens"].is_string());
    assert!(entries[0]["rank"].is_number());
}

#[test]
fn built_artifact_answers_queries_symmetrically() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_input_dir(
        input.path(),
        &[(
            "unique.json",
            snippet_record_json(
                "js/s/unique-elements",
                "Unique array elements",
                "Finds the unique elements.",
            ),
        )],
    );

    run_build(
        input.path().to_str().unwrap(),
        output.path().to_str().unwrap(),
    )
    .unwrap();

    let raw = fs::read_to_string(output.path().join(ARTIFACT_FILE_NAME)).unwrap();
    let mut session = SearchSession::new();
    session.begin_load();
    session.finish_load(serde_json::from_str(&raw).unwrap());

    // The exact indexed phrase, in a different casing, must score 1.0
    match session.search("Unique Array Elements").unwrap() {
        SearchReply::Results(results) => {
            assert_eq!(results.snippets.len(), 1);
            assert_eq!(results.snippets[0].score, 1.0);
            assert_eq!(results.snippets[0].document.url, "/js/s/unique-elements");
        }
        SearchReply::Prompt => panic!("expected results"),
    }
}

#[test]
fn collections_and_snippets_partition_after_a_real_build() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_input_dir(
        input.path(),
        &[
            (
                "map.json",
                snippet_record_json("js/s/array-map", "Array map", "Maps an array."),
            ),
            (
                "arrays.json",
                collection_record_json("c/arrays", "Array collection", "All array snippets."),
            ),
        ],
    );

    run_build(
        input.path().to_str().unwrap(),
        output.path().to_str().unwrap(),
    )
    .unwrap();

    let raw = fs::read_to_string(output.path().join(ARTIFACT_FILE_NAME)).unwrap();
    let mut session = SearchSession::new();
    session.begin_load();
    session.finish_load(serde_json::from_str(&raw).unwrap());

    match session.search("array").unwrap() {
        SearchReply::Results(results) => {
            assert_eq!(results.collections.len(), 1);
            assert_eq!(results.snippets.len(), 1);
            assert_eq!(results.collections[0].document.kind, DocumentType::Collection);
            assert_eq!(results.collections[0].document.tag, "2 snippets");
        }
        SearchReply::Prompt => panic!("expected results"),
    }
}

#[test]
fn build_fails_loudly_on_a_record_without_a_title() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_input_dir(
        input.path(),
        &[(
            "broken.json",
            r#"{"id": "js/s/broken", "type": "snippet", "excerpt": "x"}"#.to_string(),
        )],
    );

    let err = run_build(
        input.path().to_str().unwrap(),
        output.path().to_str().unwrap(),
    )
    .unwrap_err();
    assert!(err.contains("missing a title"));
    assert!(!output.path().join(ARTIFACT_FILE_NAME).exists());
}
