//! Main analysis pipeline.
//!
//! Expands the inputs, reads each file in turn, merges the per-file counts
//! of every file that was read to the end, and assembles the final
//! [`Report`].

use std::path::{Path, PathBuf};

use analyzer_core::models::{AnalysisMetadata, FileFailure, Report};
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::aggregator::Aggregator;
use crate::reader::{expand_inputs, process_single_file};

// ── Public types ──────────────────────────────────────────────────────────────

/// The complete output of [`analyze_files`].
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Final level and message frequencies.
    pub aggregator: Aggregator,
    /// Report ready for rendering. Unreadable inputs are listed in
    /// `report.metadata.failed_files`.
    pub report: Report,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the full analysis pipeline.
///
/// 1. Expand directories into the files beneath them.
/// 2. Read each file into a private [`Aggregator`]; malformed lines are
///    skipped with a warning.
/// 3. Merge every file that was read successfully; warn about the rest.
/// 4. Rank the `top_k` most frequent messages and build the [`Report`].
///
/// Never fails: unreadable inputs are recorded in
/// [`AnalysisMetadata::failed_files`] and the run carries on.
pub fn analyze_files(inputs: &[PathBuf], top_k: usize) -> AnalysisResult {
    let start = std::time::Instant::now();
    let files = expand_inputs(inputs);

    info!("Analysing {} file(s)", files.len());

    let mut aggregator = Aggregator::new();
    let mut metadata = AnalysisMetadata {
        files_requested: files.len(),
        ..AnalysisMetadata::default()
    };

    for path in &files {
        match process_single_file(path) {
            Ok(summary) => {
                metadata.files_processed += 1;
                metadata.lines_read += summary.lines_read;
                metadata.lines_skipped += summary.lines_skipped;
                aggregator.merge(summary.aggregator);
            }
            Err(e) => {
                warn!("{}", e);
                metadata.failed_files.push(FileFailure {
                    path: e.path().map_or_else(|| path.clone(), Path::to_path_buf),
                    error: e.to_string(),
                });
            }
        }
    }
    metadata.files_failed = metadata.failed_files.len();

    let report = build_report(&aggregator, top_k, metadata, start);

    debug!(
        "Processed {} entries from {} of {} files in {:.3}s",
        report.total_entries,
        report.metadata.files_processed,
        report.metadata.files_requested,
        report.metadata.elapsed_seconds,
    );

    AnalysisResult { aggregator, report }
}

/// Derive the read-only [`Report`] from the final tables.
fn build_report(
    aggregator: &Aggregator,
    top_k: usize,
    mut metadata: AnalysisMetadata,
    start: std::time::Instant,
) -> Report {
    let top_messages = aggregator.top_messages(top_k);

    metadata.generated_at = Utc::now().to_rfc3339();
    metadata.elapsed_seconds = start.elapsed().as_secs_f64();

    Report {
        total_entries: aggregator.total_entries(),
        levels: aggregator.level_distribution(),
        top_k,
        top_messages,
        metadata,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
