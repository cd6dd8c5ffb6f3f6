//! The build pipeline: raw content records in, search index artifact out.
//!
//! Loading and indexing are embarrassingly parallel, so both run through
//! rayon with indicatif progress bars. The output is a single JSON artifact
//! (`search-data.json`) served as-is to the search client.

pub mod content;
pub mod indexer;

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use rayon::prelude::*;

pub use content::{ContentRecord, InputManifest, Language};
pub use indexer::{build_entry, build_index};

use crate::types::{DocumentType, SearchIndexArtifact};

/// File name of the serialized index artifact.
pub const ARTIFACT_FILE_NAME: &str = "search-data.json";

/// Create a progress style for the main progress bars
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap()
    .progress_chars("━━╸")
}

/// Load all content records from the input directory in parallel.
///
/// Records are re-sorted by id after loading so the build is deterministic
/// regardless of scheduling.
pub fn load_records(
    input_dir: &Path,
    manifest: &InputManifest,
) -> Result<Vec<ContentRecord>, String> {
    let mut records = manifest
        .documents
        .par_iter()
        .map(|filename| {
            let path = input_dir.join(filename);
            let raw = fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
            serde_json::from_str::<ContentRecord>(&raw)
                .map_err(|e| format!("Invalid JSON in {}: {}", filename, e))
        })
        .collect::<Result<Vec<ContentRecord>, String>>()?;
    records.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(records)
}

/// Load all content records in parallel with progress reporting.
pub fn load_records_with_progress(
    input_dir: &Path,
    manifest: &InputManifest,
    progress: &ProgressBar,
) -> Result<Vec<ContentRecord>, String> {
    let counter = AtomicUsize::new(0);
    let total = manifest.documents.len();

    let mut records = manifest
        .documents
        .par_iter()
        .map(|filename| {
            let path = input_dir.join(filename);
            let raw = fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
            let record = serde_json::from_str::<ContentRecord>(&raw)
                .map_err(|e| format!("Invalid JSON in {}: {}", filename, e))?;

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            Ok(record)
        })
        .collect::<Result<Vec<ContentRecord>, String>>()?;
    records.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(records)
}

pub fn run_build(input_dir: &str, output_dir: &str) -> Result<(), String> {
    let input_path = Path::new(input_dir);
    let output_path = Path::new(output_dir);

    let multi = MultiProgress::new();

    // 1. Read manifest
    let manifest_path = input_path.join("manifest.json");
    let manifest_content = fs::read_to_string(&manifest_path)
        .map_err(|e| format!("Failed to read manifest: {}", e))?;
    let manifest: InputManifest = serde_json::from_str(&manifest_content)
        .map_err(|e| format!("Invalid manifest JSON: {}", e))?;

    // 2. Load records in parallel with progress bar
    let load_pb = multi.add(ProgressBar::new(manifest.documents.len() as u64));
    load_pb.set_style(create_progress_style());
    load_pb.set_prefix("Loading");
    load_pb.set_message("records...");

    let records = load_records_with_progress(input_path, &manifest, &load_pb)?;
    load_pb.finish_with_message(format!("loaded {} records", records.len()));

    if records.is_empty() {
        eprintln!("⚠️  No records loaded; skipping build");
        return Ok(());
    }

    // 3. Tokenize and rank every record
    let index_pb = multi.add(ProgressBar::new(records.len() as u64));
    index_pb.set_style(create_progress_style());
    index_pb.set_prefix("Indexing");
    index_pb.set_message("records...");

    let entries = build_index(&records, &manifest.languages)?;
    index_pb.set_position(entries.len() as u64);
    index_pb.finish_with_message(format!("indexed {} documents", entries.len()));

    // 4. Serialize the artifact
    let artifact = SearchIndexArtifact {
        search_index: entries,
    };
    let serialized = serde_json::to_string(&artifact)
        .map_err(|e| format!("Failed to serialize index: {}", e))?;

    // 5. Write it out
    fs::create_dir_all(output_path).map_err(|e| format!("Failed to create output dir: {}", e))?;
    let artifact_path = output_path.join(ARTIFACT_FILE_NAME);
    fs::write(&artifact_path, &serialized)
        .map_err(|e| format!("Failed to write {}: {}", artifact_path.display(), e))?;
    eprintln!("  ✓ {}", artifact_path.display());

    // Final summary
    let snippets = artifact
        .search_index
        .iter()
        .filter(|d| d.kind == DocumentType::Snippet)
        .count();
    let collections = artifact.search_index.len() - snippets;
    let tokens: usize = artifact
        .search_index
        .iter()
        .map(|d| d.search_tokens.len())
        .sum();
    eprintln!();
    eprintln!("✅ Build complete");
    eprintln!(
        "   {} snippets │ {} collections │ {} tokens │ {} bytes",
        snippets,
        collections,
        tokens,
        serialized.len()
    );

    Ok(())
}
