use std::fs;

use clap::Parser;

use omnisearch::build::run_build;
use omnisearch::content::{by_rank, DocumentStore};
use omnisearch::search::SearchSession;
use omnisearch::types::SearchIndexArtifact;

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build { input, output } => run_build(&input, &output),
        Commands::Search { artifact, query } => run_search(&artifact, &query),
        Commands::Inspect { artifact } => run_inspect(&artifact),
        Commands::List {
            artifact,
            kind,
            page,
            per_page,
        } => run_list(&artifact, kind, page, per_page),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn load_artifact(path: &str) -> Result<SearchIndexArtifact, String> {
    let raw = fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    serde_json::from_str(&raw).map_err(|e| format!("Invalid index artifact {}: {}", path, e))
}

fn run_search(path: &str, query: &str) -> Result<(), String> {
    let mut session = SearchSession::new();
    if session.begin_load() {
        session.finish_load(load_artifact(path)?);
    }
    match session.search(query) {
        Some(reply) => {
            display::render_reply(query, &reply);
            Ok(())
        }
        None => Err("search index is not loaded".to_string()),
    }
}

fn run_inspect(path: &str) -> Result<(), String> {
    let bytes = fs::read(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    let artifact: SearchIndexArtifact = serde_json::from_slice(&bytes)
        .map_err(|e| format!("Invalid index artifact {}: {}", path, e))?;
    display::render_inspect(path, &bytes, &artifact);
    Ok(())
}

fn run_list(
    path: &str,
    kind: Option<cli::KindArg>,
    page: usize,
    per_page: usize,
) -> Result<(), String> {
    let store = DocumentStore::from_artifact(load_artifact(path)?);
    let records = match kind {
        Some(kind) => store.of_kind(kind.into()),
        None => store.records().clone(),
    };
    let page = by_rank(records).paginate(page, per_page);
    display::render_page(&page);
    Ok(())
}
