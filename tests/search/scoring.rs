//! Match scoring and threshold behavior.

use omnisearch::types::{DocumentType, SearchReply, SearchResults};
use omnisearch::{search_by_keyphrase, RELEVANCE_THRESHOLD};

use super::common::make_doc;

fn results(reply: SearchReply) -> SearchResults {
    match reply {
        SearchReply::Results(results) => results,
        SearchReply::Prompt => panic!("expected results, got prompt"),
    }
}

#[test]
fn threshold_constant_is_three_tenths() {
    assert_eq!(RELEVANCE_THRESHOLD, 0.3);
}

#[test]
fn exactly_three_of_ten_tokens_is_excluded() {
    let query = "alpha bravo charlie delta echo foxtrot golf hotel india juliet";
    let index = vec![make_doc(
        "/three",
        DocumentType::Snippet,
        &["alpha", "bravo", "charlie"],
    )];
    assert!(results(search_by_keyphrase(&index, query)).is_empty());
}

#[test]
fn four_of_ten_tokens_is_included() {
    let query = "alpha bravo charlie delta echo foxtrot golf hotel india juliet";
    let index = vec![make_doc(
        "/four",
        DocumentType::Snippet,
        &["alpha", "bravo", "charlie", "delta"],
    )];
    let results = results(search_by_keyphrase(&index, query));
    assert_eq!(results.snippets.len(), 1);
    assert!((results.snippets[0].score - 0.4).abs() < 1e-9);
}

#[test]
fn match_score_is_normalized_by_query_token_count() {
    let index = vec![make_doc("/d", DocumentType::Snippet, &["alpha", "bravo"])];
    let results = results(search_by_keyphrase(&index, "alpha bravo charlie delta"));
    assert_eq!(results.snippets.len(), 1);
    assert!((results.snippets[0].score - 0.5).abs() < 1e-9);
}

#[test]
fn matching_is_presence_based_not_frequency_based() {
    // The document token set is deduplicated at build time, and the score
    // only asks whether each query token is present.
    let index = vec![make_doc("/d", DocumentType::Snippet, &["alpha"])];
    let single = results(search_by_keyphrase(&index, "alpha bravo"));
    let repeated = results(search_by_keyphrase(&index, "alpha alpha alpha bravo"));
    assert_eq!(single.snippets[0].score, repeated.snippets[0].score);
}

#[test]
fn short_query_prompts_even_when_a_matching_token_exists() {
    let index = vec![make_doc("/d", DocumentType::Snippet, &["aa"])];
    assert_eq!(search_by_keyphrase(&index, ""), SearchReply::Prompt);
    assert_eq!(search_by_keyphrase(&index, "a"), SearchReply::Prompt);
}

#[test]
fn query_of_only_stop_words_matches_nothing() {
    let index = vec![make_doc("/d", DocumentType::Snippet, &["array"])];
    let results = results(search_by_keyphrase(&index, "the and of"));
    assert!(results.is_empty());
    assert_eq!(results.total_matches, 0);
}

#[test]
fn total_matches_counts_before_truncation() {
    let index: Vec<_> = (0..120)
        .map(|i| make_doc(&format!("/s{i}"), DocumentType::Snippet, &["alpha"]))
        .collect();
    let results = results(search_by_keyphrase(&index, "alpha"));
    assert_eq!(results.snippets.len(), 100);
    assert_eq!(results.total_matches, 120);
}

#[test]
fn spec_end_to_end_scenario() {
    let index = vec![
        make_doc("/js/s/array-map", DocumentType::Snippet, &["array", "map"]),
        make_doc(
            "/c/promises",
            DocumentType::Collection,
            &["promise", "collection"],
        ),
    ];
    let results = results(search_by_keyphrase(&index, "array"));
    assert!(results.collections.is_empty());
    assert_eq!(results.snippets.len(), 1);
    assert_eq!(results.snippets[0].document.url, "/js/s/array-map");
    assert_eq!(results.snippets[0].score, 1.0);
    assert_eq!(results.total_matches, 1);
}
