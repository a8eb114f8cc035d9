use clap::builder::TypedValueParser;
use clap::Parser;
use std::path::PathBuf;

use crate::ranking::DEFAULT_TOP_K;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Summarise log files: entry count, level distribution and most frequent messages
#[derive(Parser, Debug, Clone)]
#[command(
    name = "log-analyzer",
    about = "Summarise log files: entry count, level distribution and most frequent messages",
    version
)]
pub struct Settings {
    /// Log files or directories to analyse (`.gz` files are decompressed, directories are walked recursively in path order)
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Number of most frequent messages to report
    #[arg(long, default_value_t = DEFAULT_TOP_K, value_parser = clap::value_parser!(u16).range(1..=1000).map(usize::from))]
    pub top: usize,

    /// Report format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Log file path (diagnostics go to stderr when unset)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments. Exits with a usage message on error.
    pub fn load() -> Self {
        Self::load_from(std::env::args_os())
    }

    /// Same as [`load`](Self::load) but accepts an explicit argument list.
    pub fn load_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::resolve(Settings::parse_from(args))
    }

    /// Fallible variant of [`load_from`](Self::load_from) for callers that
    /// want to inspect the error instead of exiting.
    pub fn try_load_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Settings::try_parse_from(args).map(Self::resolve)
    }

    /// Whether the report should be rendered as JSON.
    pub fn json_output(&self) -> bool {
        self.format == "json"
    }

    /// `--debug` overrides log level.
    fn resolve(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
