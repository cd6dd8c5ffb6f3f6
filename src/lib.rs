//! Content build pipeline and client-side search for a snippet catalog.
//!
//! One tokenizer feeds both sides of the index. At build time it turns each
//! content record's excerpt and title into a deduplicated token set; at query
//! time it normalizes the user's keyphrase the exact same way. Matching is a
//! presence-based overlap coefficient, so symmetric normalization is the load
//! bearing invariant of the whole crate.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ tokenize.rs │────▶│   build/     │────▶│ search-data.json │
//! │ ranking.rs  │     │ (records →   │     │    (artifact)    │
//! │             │     │  entries)    │     └────────┬─────────┘
//! └──────┬──────┘     └──────────────┘              │ load once
//!        │                                          ▼
//!        │            ┌──────────────┐     ┌──────────────────┐
//!        └───────────▶│   search/    │◀────│ SearchSession    │
//!                     │ (overlap     │     │ (Uninitialized → │
//!                     │  scoring)    │     │  Loading → Ready)│
//!                     └──────────────┘     └──────────────────┘
//! ```
//!
//! The static `rank` (build time, query-independent) and the per-query match
//! score are deliberately separate values: the first lives on
//! [`types::IndexedDocument`], the second only ever on
//! [`types::ScoredDocument`].

pub mod build;
pub mod content;
pub mod ranking;
pub mod search;
pub mod tokenize;
pub mod types;
pub mod utils;

// Re-exports for public API
pub use ranking::rank_indexable_content;
pub use search::{
    search_by_keyphrase, SearchSession, SessionState, MAX_COLLECTION_RESULTS, MAX_SNIPPET_RESULTS,
    RELEVANCE_THRESHOLD,
};
pub use tokenize::{
    strip_markdown, tokenize, tokenize_document, MIN_TOKEN_LENGTH, TOKEN_DELIMITER,
};
pub use types::{
    DocumentType, IndexedDocument, ScoredDocument, SearchIndexArtifact, SearchReply, SearchResults,
};
pub use utils::{escape_html, normalize};
