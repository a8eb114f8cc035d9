mod bootstrap;

use std::io::Write;

use analyzer_core::formatting::{render_json, render_text};
use analyzer_core::settings::Settings;
use analyzer_data::analysis::analyze_files;
use anyhow::{Context, Result};

fn main() -> Result<()> {
    // Exits with a usage message (status 2) when no file is given.
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_deref())?;

    tracing::info!("Log analyzer v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!(
        "Inputs: {}, top: {}, format: {}",
        settings.files.len(),
        settings.top,
        settings.format
    );

    let result = analyze_files(&settings.files, settings.top);

    let rendered = if settings.json_output() {
        render_json(&result.report)?
    } else {
        render_text(&result.report)
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(rendered.as_bytes())
        .and_then(|()| out.flush())
        .context("failed to write report")?;

    let metadata = &result.report.metadata;
    for failure in &metadata.failed_files {
        tracing::debug!("Skipped {}", failure.path.display());
    }
    tracing::info!(
        "Done: {} entries, {} of {} file(s) failed",
        result.report.total_entries,
        metadata.files_failed,
        metadata.files_requested
    );

    Ok(())
}
