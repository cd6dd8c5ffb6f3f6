// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query-time search: keyphrase in, partitioned results out.
//!
//! Scoring is a normalized overlap coefficient: the fraction of query tokens
//! present in a document's token set. No frequency weighting, no requirement
//! that every token matches. Documents clearing the relevance threshold are
//! stably sorted by score — ties keep index order, which is rank order — then
//! partitioned by content type and capped for display.
//!
//! Every search produces fresh [`ScoredDocument`] values. The index itself is
//! never written to, so overlapping or repeated searches cannot observe each
//! other's scores.

pub mod session;

use std::cmp::Ordering;

pub use session::{SearchSession, SessionState};

use crate::tokenize::tokenize;
use crate::types::{DocumentType, IndexedDocument, ScoredDocument, SearchReply, SearchResults};

/// Minimum fraction of query tokens a document must match, exclusive.
///
/// Matching exactly 3 of 10 tokens (0.3) is out; 4 of 10 is in.
pub const RELEVANCE_THRESHOLD: f64 = 0.3;

/// Display cap for the collections partition.
pub const MAX_COLLECTION_RESULTS: usize = 5;

/// Display cap for the snippets partition.
pub const MAX_SNIPPET_RESULTS: usize = 100;

/// Score every indexed document against a keyphrase and assemble results.
///
/// Queries of length ≤ 1 after trimming short-circuit to
/// [`SearchReply::Prompt`] without scoring — a single character would match
/// most of the index and help nobody. A query that tokenizes to nothing
/// (all stop words, all punctuation) returns empty results.
pub fn search_by_keyphrase(index: &[IndexedDocument], keyphrase: &str) -> SearchReply {
    let query = keyphrase.trim().to_lowercase();
    if query.chars().count() <= 1 {
        return SearchReply::Prompt;
    }

    let query_tokens = tokenize(&query);
    if query_tokens.is_empty() {
        return SearchReply::Results(SearchResults::default());
    }

    let mut matches: Vec<ScoredDocument> = index
        .iter()
        .filter_map(|document| {
            let hits = query_tokens
                .iter()
                .filter(|token| document.contains_token(token.as_str()))
                .count();
            let score = hits as f64 / query_tokens.len() as f64;
            (score > RELEVANCE_THRESHOLD).then(|| ScoredDocument {
                document: document.clone(),
                score,
            })
        })
        .collect();

    // Stable: equal scores keep index order, and the index is rank-sorted.
    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let total_matches = matches.len();
    let mut collections = Vec::new();
    let mut snippets = Vec::new();
    for hit in matches {
        match hit.document.kind {
            DocumentType::Collection => collections.push(hit),
            DocumentType::Snippet => snippets.push(hit),
        }
    }
    collections.truncate(MAX_COLLECTION_RESULTS);
    snippets.truncate(MAX_SNIPPET_RESULTS);

    SearchReply::Results(SearchResults {
        collections,
        snippets,
        total_matches,
    })
}
