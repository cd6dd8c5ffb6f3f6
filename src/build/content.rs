//! Raw content records and the build manifest.
//!
//! The build input is a directory holding `manifest.json` plus one JSON file
//! per content record. The manifest lists the record files and carries the
//! language table used to resolve display names at index time.

use std::collections::HashMap;

use serde::Deserialize;

use crate::types::DocumentType;

#[derive(Deserialize, Clone, Debug)]
pub struct InputManifest {
    pub version: u32,
    pub documents: Vec<String>,
    #[serde(default)]
    pub languages: HashMap<String, Language>,
}

/// A programming language known to the catalog.
#[derive(Deserialize, Clone, Debug)]
pub struct Language {
    pub short: String,
    pub long: String,
}

/// One raw content record, as authored.
///
/// `id` and `title` are identity fields: the indexer rejects records where
/// either is missing or blank instead of emitting a half-populated entry.
/// They default to empty here so the error surfaces as a build failure with
/// a useful message rather than a serde type error.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub short_title: Option<String>,
    #[serde(rename = "type")]
    pub kind: DocumentType,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Language table key; resolved against the manifest's `languages`.
    #[serde(default)]
    pub language: Option<String>,
    /// Full markdown body.
    #[serde(default)]
    pub body: String,
    /// Short markdown description.
    #[serde(default)]
    pub excerpt: String,
    #[serde(default = "default_listed")]
    pub listed: bool,
    #[serde(default)]
    pub date_modified: Option<String>,
    /// For collections: the snippets they contain.
    #[serde(default)]
    pub snippet_ids: Vec<String>,
}

fn default_listed() -> bool {
    true
}
