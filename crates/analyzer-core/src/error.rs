use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the log analyzer.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// A log file could not be opened.
    #[error("Unable to open file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A log file was opened but reading (or decompressing) it failed.
    #[error("Unable to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report could not be serialized.
    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

impl AnalyzerError {
    /// The input path this error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            AnalyzerError::FileOpen { path, .. } | AnalyzerError::FileRead { path, .. } => {
                Some(path.as_path())
            }
            _ => None,
        }
    }
}

/// Convenience alias used throughout the analyzer crates.
pub type Result<T> = std::result::Result<T, AnalyzerError>;
