// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for omnisearch CLI output.
//!
//! Colors are applied only when stdout is a TTY and `NO_COLOR` is unset, so
//! piped output stays clean. The search renderer mirrors the three states of
//! the browser surface: the prompt for short queries, partitioned result
//! lists, and the not-found message — with the query HTML-escaped exactly as
//! the web surface must escape it before interpolation.

use std::collections::HashMap;
use std::sync::OnceLock;

use omnisearch::content::Page;
use omnisearch::types::{
    DocumentType, IndexedDocument, ScoredDocument, SearchIndexArtifact, SearchReply, SearchResults,
};
use omnisearch::utils::escape_html;

/// Token length floor for the inspect frequency table; shorter tokens are
/// too generic to be worth reporting.
const FREQUENCY_MIN_TOKEN_LENGTH: usize = 3;

/// How many tokens the inspect frequency table shows.
const FREQUENCY_TABLE_SIZE: usize = 10;

static COLOR: OnceLock<bool> = OnceLock::new();

fn color_enabled() -> bool {
    *COLOR.get_or_init(|| std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout))
}

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";

fn paint(code: &str, text: &str) -> String {
    if color_enabled() {
        format!("{}{}{}", code, text, RESET)
    } else {
        text.to_string()
    }
}

/// Render a search reply the way the browser surface would.
pub fn render_reply(query: &str, reply: &SearchReply) {
    match reply {
        SearchReply::Prompt => {
            println!("Start typing a keyphrase to see matching snippets.");
        }
        SearchReply::Results(results) if results.is_empty() => {
            println!(
                "We couldn't find any results for the keyphrase {}.",
                paint(BOLD, &escape_html(query))
            );
        }
        SearchReply::Results(results) => render_results(results),
    }
}

fn render_results(results: &SearchResults) {
    if !results.collections.is_empty() {
        println!("{}", paint(BOLD, "Collections"));
        for hit in &results.collections {
            render_hit(hit);
        }
        println!();
    }
    if !results.snippets.is_empty() {
        println!("{}", paint(BOLD, "Snippets"));
        for hit in &results.snippets {
            render_hit(hit);
        }
        println!();
    }
    let shown = results.collections.len() + results.snippets.len();
    if shown < results.total_matches {
        println!(
            "{}",
            paint(
                DIM,
                &format!("{} of {} matches shown", shown, results.total_matches)
            )
        );
    }
}

fn render_hit(hit: &ScoredDocument) {
    println!(
        "  {}  {}  {}  {}",
        paint(GREEN, &format!("{:>5.2}", hit.score)),
        hit.document.title,
        paint(DIM, &hit.document.tag),
        paint(CYAN, &hit.document.url),
    );
}

/// Render one page of the ranked catalog listing.
pub fn render_page(page: &Page<IndexedDocument>) {
    for document in &page.items {
        println!(
            "  {}  {}  {}  {}",
            paint(GREEN, &format!("{:>5.2}", document.rank)),
            document.title,
            paint(DIM, &document.tag),
            paint(CYAN, &document.url),
        );
    }
    println!();
    println!(
        "{}",
        paint(
            DIM,
            &format!(
                "page {} of {} │ {} documents",
                page.page_number, page.page_count, page.item_count
            )
        )
    );
}

/// Render artifact statistics: counts, checksum, top token frequencies.
pub fn render_inspect(path: &str, bytes: &[u8], artifact: &SearchIndexArtifact) {
    let snippets = artifact
        .search_index
        .iter()
        .filter(|d| matches!(d.kind, DocumentType::Snippet))
        .count();
    let collections = artifact.search_index.len() - snippets;

    println!("{}", paint(BOLD, path));
    println!("  size:        {} bytes", bytes.len());
    println!("  checksum:    {:#010x}", crc32fast::hash(bytes));
    println!("  documents:   {}", artifact.search_index.len());
    println!("  snippets:    {}", snippets);
    println!("  collections: {}", collections);

    let frequencies = token_frequencies(artifact);
    if !frequencies.is_empty() {
        println!();
        println!("{}", paint(BOLD, "Most frequent search tokens"));
        for (token, count) in frequencies {
            println!("  {:>5}  {}", count, token);
        }
    }
}

/// Count token occurrences across all documents, most frequent first.
///
/// Ties break alphabetically so the table is stable across runs.
fn token_frequencies(artifact: &SearchIndexArtifact) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for document in &artifact.search_index {
        for token in &document.search_tokens {
            if token.chars().count() >= FREQUENCY_MIN_TOKEN_LENGTH {
                *counts.entry(token).or_insert(0) += 1;
            }
        }
    }
    let mut frequencies: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(token, count)| (token.to_string(), count))
        .collect();
    frequencies.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    frequencies.truncate(FREQUENCY_TABLE_SIZE);
    frequencies
}
