// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-record index entry construction.
//!
//! Two different texts feed each entry, and the asymmetry is deliberate:
//!
//! - **Tokens** come from the excerpt and title only. Keeping the token set
//!   narrow biases matching toward what a document is *about* rather than
//!   every word its body happens to mention.
//! - **Rank** is computed over the full indexable text (title, tags,
//!   language, body, excerpt), so the static ordering reflects the whole
//!   document.

use std::collections::HashMap;

use crate::content::{by_rank, Records};
use crate::ranking::rank_indexable_content;
use crate::tokenize::tokenize_document;
use crate::types::{DocumentType, IndexedDocument};

use super::content::{ContentRecord, Language};

/// Build one index entry from a raw record.
///
/// Fails if either identity field (`id`, `title`) is missing or blank —
/// an entry nobody can link to or display must not reach the artifact.
pub fn build_entry(
    record: &ContentRecord,
    languages: &HashMap<String, Language>,
) -> Result<IndexedDocument, String> {
    if record.id.trim().is_empty() {
        return Err(format!(
            "record is missing an id (title: '{}')",
            record.title
        ));
    }
    if record.title.trim().is_empty() {
        return Err(format!("record '{}' is missing a title", record.id));
    }

    let language = record.language.as_deref().and_then(|key| languages.get(key));
    let search_tokens = tokenize_document(&format!("{} {}", record.excerpt, record.title));
    let rank = rank_indexable_content(&indexable_text(record, language));

    Ok(IndexedDocument {
        url: format!("/{}", record.id),
        title: record.title.clone(),
        tag: display_tag(record, language),
        kind: record.kind,
        search_tokens,
        rank,
    })
}

/// Build the full index: every record becomes an entry, then entries are
/// pre-sorted by descending rank (stable, so equal ranks keep record order).
pub fn build_index(
    records: &[ContentRecord],
    languages: &HashMap<String, Language>,
) -> Result<Vec<IndexedDocument>, String> {
    let entries = records
        .iter()
        .map(|record| build_entry(record, languages))
        .collect::<Result<Vec<_>, String>>()?;
    Ok(by_rank(Records::new(entries)).into_vec())
}

/// Everything the ranker should see, lowercased and space-joined.
fn indexable_text(record: &ContentRecord, language: Option<&Language>) -> String {
    let mut parts: Vec<&str> = vec![record.title.as_str()];
    parts.extend(record.tags.iter().map(String::as_str));
    if let Some(language) = language {
        parts.push(language.long.as_str());
    }
    parts.push(record.body.as_str());
    parts.push(record.excerpt.as_str());
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// The short tag shown next to a result: language (or first tag) for
/// snippets, snippet count for collections.
fn display_tag(record: &ContentRecord, language: Option<&Language>) -> String {
    match record.kind {
        DocumentType::Snippet => language
            .map(|l| l.long.clone())
            .or_else(|| record.tags.first().cloned())
            .unwrap_or_default(),
        DocumentType::Collection => format!("{} snippets", record.snippet_ids.len()),
    }
}
