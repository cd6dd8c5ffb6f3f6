// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the omnisearch command-line interface.
//!
//! Four subcommands: `build` turns a directory of content records into the
//! search index artifact, `search` queries a built artifact, `inspect`
//! summarizes one, and `list` pages through the indexed catalog by rank.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};

use omnisearch::content::CARDS_PER_PAGE;
use omnisearch::types::DocumentType;

#[derive(Parser)]
#[command(
    name = "omnisearch",
    about = "Snippet catalog search index builder",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the search index artifact from a directory of content records
    Build {
        /// Input directory containing manifest.json and record files
        #[arg(short, long)]
        input: String,

        /// Output directory for the search-data.json artifact
        #[arg(short, long)]
        output: String,
    },

    /// Search a built artifact and display results
    Search {
        /// Path to search-data.json
        artifact: String,

        /// Search keyphrase
        query: String,
    },

    /// Inspect a built artifact: counts, checksum, token frequencies
    Inspect {
        /// Path to search-data.json
        artifact: String,
    },

    /// List indexed documents by rank, paginated
    List {
        /// Path to search-data.json
        artifact: String,

        /// Restrict the listing to one content type
        #[arg(long, value_enum)]
        kind: Option<KindArg>,

        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Documents per page
        #[arg(long, default_value_t = CARDS_PER_PAGE)]
        per_page: usize,
    },
}

/// Content type filter for the `list` subcommand.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Collection,
    Snippet,
}

impl From<KindArg> for DocumentType {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Collection => DocumentType::Collection,
            KindArg::Snippet => DocumentType::Snippet,
        }
    }
}
