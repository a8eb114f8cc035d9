use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// One successfully parsed log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Severity or category token (second space-delimited field).
    pub level: String,
    /// Everything after the second field, internal whitespace preserved.
    pub message: String,
}

impl LogEntry {
    pub fn new(level: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            message: message.into(),
        }
    }
}

/// Why a line could not be turned into a [`LogEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailureReason {
    /// Fewer than three space-delimited fields were present.
    TooFewFields { found: usize },
}

impl std::fmt::Display for ParseFailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseFailureReason::TooFewFields { found } => {
                write!(f, "expected 3 fields, found {}", found)
            }
        }
    }
}

/// A line that is not a log entry. Carries the raw line for reporting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a log entry ({reason}): [{line}]")]
pub struct ParseFailure {
    pub line: String,
    pub reason: ParseFailureReason,
}

/// A message together with its frequency and 1-based position in the ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedMessage {
    pub rank: usize,
    pub message: String,
    pub count: u64,
}

/// Number of entries observed for a single level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCount {
    pub level: String,
    pub count: u64,
}

/// Diagnostics collected during one analysis run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// RFC 3339 timestamp when the report was generated.
    pub generated_at: String,
    /// Number of input files after directory expansion.
    pub files_requested: usize,
    /// Files read to the end and merged into the statistics.
    pub files_processed: usize,
    /// Files that could not be opened or read.
    pub files_failed: usize,
    /// The failed files and why, in processing order.
    pub failed_files: Vec<FileFailure>,
    /// Lines read from successfully processed files.
    pub lines_read: u64,
    /// Lines skipped because they were not log entries.
    pub lines_skipped: u64,
    /// Wall-clock seconds spent on ingestion and ranking.
    pub elapsed_seconds: f64,
}

/// The final read-only statistics for a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Sum of all level counts.
    pub total_entries: u64,
    /// Level distribution, sorted by level name.
    pub levels: Vec<LevelCount>,
    /// How many messages were requested for the ranking.
    pub top_k: usize,
    /// Highest-frequency messages, at most `top_k` of them.
    pub top_messages: Vec<RankedMessage>,
    pub metadata: AnalysisMetadata,
}

/// An input that contributed nothing because it could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    pub path: PathBuf,
    /// Display form of the underlying error.
    pub error: String,
}
