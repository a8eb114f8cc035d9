//! Console rendering of a [`Report`].

use std::fmt::Write;

use crate::error::Result;
use crate::models::Report;

/// Render the plain-text report.
///
/// # Examples
///
/// ```
/// use analyzer_core::formatting::render_text;
/// use analyzer_core::models::{AnalysisMetadata, LevelCount, RankedMessage, Report};
///
/// let report = Report {
///     total_entries: 1,
///     levels: vec![LevelCount { level: "INFO".into(), count: 1 }],
///     top_k: 3,
///     top_messages: vec![RankedMessage { rank: 1, message: "ok".into(), count: 1 }],
///     metadata: AnalysisMetadata::default(),
/// };
/// assert_eq!(
///     render_text(&report),
///     "Total log entries: 1\n\nLog level distribution:\nINFO: 1\n\n\
///      Top 3 most frequent log messages:\n1. ok: 1\n",
/// );
/// ```
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Total log entries: {}", report.total_entries);
    out.push('\n');

    out.push_str("Log level distribution:\n");
    for level in &report.levels {
        let _ = writeln!(out, "{}: {}", level.level, level.count);
    }
    out.push('\n');

    let _ = writeln!(out, "Top {} most frequent log messages:", report.top_k);
    for ranked in &report.top_messages {
        let _ = writeln!(out, "{}. {}: {}", ranked.rank, ranked.message, ranked.count);
    }

    out
}

/// Render the report, including run metadata, as pretty-printed JSON.
pub fn render_json(report: &Report) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
