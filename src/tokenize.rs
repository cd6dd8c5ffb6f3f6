// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenization: free text in, normalized search tokens out.
//!
//! The same tokenizer runs on both sides of the index: over document text at
//! build time and over the user's keyphrase at query time. If the two sides
//! ever normalize differently, matches silently disappear, so everything
//! funnels through [`tokenize`]. The document path ([`tokenize_document`])
//! additionally strips markdown syntax first; queries never contain markdown.
//!
//! A token is lowercase, diacritic-free, at least [`MIN_TOKEN_LENGTH`]
//! characters, not a stop word, and appears once per document regardless of
//! how often the source text repeats it. Matching downstream is
//! presence-based, not frequency-based.

use std::sync::LazyLock;

use regex::Regex;

use crate::utils::normalize;

/// Tokens shorter than this carry no matching signal and are discarded.
pub const MIN_TOKEN_LENGTH: usize = 2;

/// Delimiter used when persisting a token set as a single string.
///
/// Must match on the build and query sides; the artifact stores token sets
/// joined with this character for compactness.
pub const TOKEN_DELIMITER: char = ';';

/// Words too common to discriminate between documents.
const STOP_WORDS: &[&str] = &[
    "about", "after", "all", "also", "an", "and", "any", "are", "as", "at",
    "be", "been", "but", "by", "can", "could", "do", "does", "each", "for",
    "from", "had", "has", "have", "how", "if", "in", "into", "is", "it",
    "its", "just", "more", "most", "no", "not", "of", "on", "one", "only",
    "or", "other", "our", "out", "over", "some", "such", "than", "that",
    "the", "their", "them", "then", "there", "these", "they", "this", "to",
    "under", "up", "use", "used", "using", "was", "we", "well", "were",
    "what", "when", "where", "which", "while", "will", "with", "you", "your",
];

// Markdown constructs whose *syntax* would otherwise leak into the token
// stream. Punctuation-level markers (emphasis, headings, blockquotes) need no
// handling here: the tokenizer splits on non-alphanumeric characters anyway.
static FENCED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("fenced code pattern"));
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]*)`").expect("inline code pattern"));
static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\([^)]*\)").expect("image pattern"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").expect("link pattern"));
static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z][^>]*>").expect("html tag pattern"));

/// Strip markdown syntax from text, keeping the human-readable content.
///
/// Fenced code blocks are dropped entirely; links and images keep their label
/// text but lose the URL (otherwise every document would match "https").
/// Replacements insert a space so adjacent words never fuse into one token.
pub fn strip_markdown(text: &str) -> String {
    let text = FENCED_CODE.replace_all(text, " ");
    let text = IMAGE.replace_all(&text, "$1 ");
    let text = LINK.replace_all(&text, "$1 ");
    let text = INLINE_CODE.replace_all(&text, "$1 ");
    let text = HTML_TAG.replace_all(&text, " ");
    text.into_owned()
}

/// Turn free text into a normalized, deduplicated token sequence.
///
/// Pure and deterministic: the same input always yields the same tokens, in
/// first-occurrence order. This is the query-time entry point; document text
/// goes through [`tokenize_document`] so markdown syntax is removed first.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    let mut tokens: Vec<String> = Vec::new();
    for raw in normalized.split(|c: char| !c.is_alphanumeric()) {
        if raw.len() < MIN_TOKEN_LENGTH {
            continue;
        }
        if STOP_WORDS.contains(&raw) {
            continue;
        }
        if tokens.iter().any(|t| t == raw) {
            continue;
        }
        tokens.push(raw.to_string());
    }
    tokens
}

/// Tokenize document text at build time: strip markdown, then [`tokenize`].
pub fn tokenize_document(text: &str) -> Vec<String> {
    tokenize(&strip_markdown(text))
}

/// Join a token sequence into its persisted form.
pub fn join_tokens(tokens: &[String]) -> String {
    let mut joined = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            joined.push(TOKEN_DELIMITER);
        }
        joined.push_str(token);
    }
    joined
}

/// Split a persisted token string back into a token sequence.
///
/// The inverse of [`join_tokens`]; empty segments (from an empty source
/// string) are dropped rather than surfacing as zero-length tokens.
pub fn split_tokens(joined: &str) -> Vec<String> {
    joined
        .split(TOKEN_DELIMITER)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
