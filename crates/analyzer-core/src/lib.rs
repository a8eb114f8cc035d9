//! Core types for the log analyzer.
//!
//! Holds the pure pieces of the pipeline: the data model, the error type,
//! command-line settings, the line parser, top-K ranking and report
//! rendering. Nothing here touches the filesystem.

pub mod error;
pub mod formatting;
pub mod models;
pub mod parser;
pub mod ranking;
pub mod settings;

pub use error::{AnalyzerError, Result};
