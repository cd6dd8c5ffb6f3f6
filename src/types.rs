// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search index.
//!
//! These types define the wire shape of the index artifact and the values the
//! query engine hands back. The artifact is a single JSON document fetched
//! once per session, so the entry type stays lean: url, title, display tag,
//! content type, the persisted token set, and the static rank.
//!
//! # Invariants
//!
//! - `IndexedDocument` is immutable after the index loads. Query-time match
//!   scores live on [`ScoredDocument`], never on the document itself — the
//!   static `rank` and the per-query match score are different numbers and
//!   must not share a field.
//! - `search_tokens` is a set persisted as an ordered sequence: deduplicated,
//!   first-occurrence order, joined with the tokenizer's delimiter on disk.
//! - Artifact entries are pre-sorted by descending `rank` at build time, so
//!   index order doubles as the tiebreak order for equal match scores.

use serde::{Deserialize, Serialize};

/// Content type of an indexed document, used to partition search results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Collection,
    Snippet,
}

impl DocumentType {
    /// Lowercase string form, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentType::Collection => "collection",
            DocumentType::Snippet => "snippet",
        }
    }
}

/// One searchable entry in the index artifact.
///
/// Created once per content item at build time; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndexedDocument {
    pub url: String,
    pub title: String,
    /// Short display tag shown next to the title in results (language name
    /// for snippets, snippet count for collections).
    pub tag: String,
    #[serde(rename = "type")]
    pub kind: DocumentType,
    /// Deduplicated token set, persisted as a delimiter-joined string.
    #[serde(with = "token_string")]
    pub search_tokens: Vec<String>,
    /// Static ranking score, computed at build time. Not the match score.
    pub rank: f64,
}

impl IndexedDocument {
    /// Presence test against the document's token set.
    pub fn contains_token(&self, token: &str) -> bool {
        self.search_tokens.iter().any(|t| t == token)
    }
}

/// The serialized index: `{ "searchIndex": [entry, …] }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndexArtifact {
    pub search_index: Vec<IndexedDocument>,
}

/// A document paired with its match score for the current query.
///
/// Fresh values are produced for every search; sharing score state across
/// queries is how stale results happen.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDocument {
    pub document: IndexedDocument,
    /// Normalized overlap coefficient in `[0, 1]` against the query tokens.
    pub score: f64,
}

/// Partitioned, capped search results.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResults {
    pub collections: Vec<ScoredDocument>,
    pub snippets: Vec<ScoredDocument>,
    /// Number of documents that passed the relevance filter, counted before
    /// the per-type display caps were applied.
    pub total_matches: usize,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty() && self.snippets.is_empty()
    }
}

/// Outcome of a search request against a ready session.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchReply {
    /// Query too short to score; caller shows the "start typing" prompt.
    Prompt,
    Results(SearchResults),
}

/// Serde adapter persisting a token sequence as one delimiter-joined string.
///
/// Keeping serialization and parsing in a single module guarantees the build
/// and query sides of the index can never disagree about the encoding.
mod token_string {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::tokenize::{join_tokens, split_tokens};

    pub fn serialize<S>(tokens: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&join_tokens(tokens))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let joined = String::deserialize(deserializer)?;
        Ok(split_tokens(&joined))
    }
}
