//! Log file discovery and line-by-line loading.
//!
//! Opens plain or gzip-compressed files (chosen by a `.gz` filename suffix),
//! yields their lines, and folds each file into a private [`Aggregator`] so a
//! file that fails part-way through contributes nothing to the run.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use analyzer_core::error::{AnalyzerError, Result};
use analyzer_core::parser::parse_line;
use flate2::read::MultiGzDecoder;
use tracing::{debug, warn};

use crate::aggregator::Aggregator;

// ── Public API ────────────────────────────────────────────────────────────────

/// Expand directories in `inputs` into the regular files beneath them.
///
/// Files found under a directory are sorted by path; everything else keeps
/// its argument order. Paths that do not exist are passed through unchanged
/// so the failure is reported when the file is opened.
pub fn expand_inputs(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::with_capacity(inputs.len());

    for input in inputs {
        if !input.is_dir() {
            files.push(input.clone());
            continue;
        }

        let mut found: Vec<PathBuf> = walkdir::WalkDir::new(input)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", input.display(), e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .collect();

        if found.is_empty() {
            warn!("No files found in {}", input.display());
        }
        found.sort();
        files.extend(found);
    }

    files
}

/// Whether `path` should be read through a gzip decoder.
pub fn is_gzip_path(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().ends_with(".gz")
}

/// Open `path` as a buffered line source, decompressing `.gz` files.
pub fn open_log(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|source| AnalyzerError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    if is_gzip_path(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(BufReader::new(
            file,
        )))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Counts gathered from one fully read file.
#[derive(Debug, Default)]
pub struct FileSummary {
    /// Frequencies for this file alone.
    pub aggregator: Aggregator,
    pub lines_read: u64,
    pub lines_skipped: u64,
}

/// Read every line of `path`, parsing and counting it.
///
/// Lines that are not log entries are logged and skipped. An error opening,
/// reading or decompressing the file aborts this file only; the caller
/// decides what to do with it.
pub fn process_single_file(path: &Path) -> Result<FileSummary> {
    let reader = open_log(path)?;
    let mut summary = FileSummary::default();

    for (index, line) in LogLines::new(reader).enumerate() {
        let line = line.map_err(|source| AnalyzerError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        summary.lines_read += 1;

        match parse_line(&line) {
            Ok(entry) => summary.aggregator.observe(&entry),
            Err(failure) => {
                summary.lines_skipped += 1;
                warn!(
                    "Unable to read log entry in {} at line {}: {}",
                    path.display(),
                    index + 1,
                    failure
                );
            }
        }
    }

    debug!(
        "File {}: {} read, {} skipped, {} counted",
        path.display(),
        summary.lines_read,
        summary.lines_skipped,
        summary.aggregator.total_entries(),
    );

    Ok(summary)
}

// ── LogLines ──────────────────────────────────────────────────────────────────

/// Line iterator that tolerates invalid UTF-8.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`; the terminator is not part of
/// the line. Invalid byte sequences are replaced with U+FFFD instead of
/// failing the whole file.
pub struct LogLines<R> {
    reader: R,
    buf: Vec<u8>,
    /// The previous line ended in `\r`; a `\n` right after it belongs to it.
    skip_lf: bool,
}

impl<R: BufRead> LogLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            skip_lf: false,
        }
    }

    fn take_line(&self) -> String {
        String::from_utf8_lossy(&self.buf).into_owned()
    }
}

impl<R: BufRead> Iterator for LogLines<R> {
    type Item = std::io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        let mut partial = false;

        loop {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Some(Err(e)),
            };

            if available.is_empty() {
                return partial.then(|| Ok(self.take_line()));
            }

            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    self.skip_lf = available[end] == b'\r';
                    self.buf.extend_from_slice(&available[..end]);
                    self.reader.consume(end + 1);
                    return Some(Ok(self.take_line()));
                }
                None => {
                    let len = available.len();
                    self.buf.extend_from_slice(available);
                    self.reader.consume(len);
                    partial = true;
                }
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
