//! Data ingestion layer for the log analyzer.
//!
//! Responsible for discovering and reading plain or gzip-compressed log
//! files, counting parsed entries into frequency tables, and running the
//! top-level analysis pipeline.

pub mod aggregator;
pub mod analysis;
pub mod reader;

pub use analyzer_core as core;
