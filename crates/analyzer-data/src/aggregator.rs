//! Frequency counting over parsed log entries.
//!
//! An [`Aggregator`] owns two independent [`FrequencyTable`]s, one keyed by
//! level and one keyed by message, and is threaded explicitly through the
//! ingestion pipeline.

use std::collections::BTreeMap;

use analyzer_core::models::{LevelCount, LogEntry, RankedMessage};
use analyzer_core::ranking::rank_messages;

// ── FrequencyTable ────────────────────────────────────────────────────────────

/// Count of observations per exact key.
///
/// Every key present has a count of at least 1. Keys compare by exact string
/// equality and iterate in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation of `key`.
    pub fn increment(&mut self, key: &str) {
        self.add(key, 1);
    }

    /// Record `n` observations of `key`. Adding zero leaves the table unchanged.
    pub fn add(&mut self, key: &str, n: u64) {
        if n == 0 {
            return;
        }
        // Avoid allocating a new key for the common already-present case.
        if let Some(count) = self.counts.get_mut(key) {
            *count += n;
        } else {
            self.counts.insert(key.to_string(), n);
        }
    }

    /// Count for `key`, or 0 when it was never observed.
    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// `(key, count)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Fold `other` into this table by summing counts key by key.
    pub fn merge(&mut self, other: FrequencyTable) {
        if self.counts.is_empty() {
            self.counts = other.counts;
            return;
        }
        for (key, n) in other.counts {
            *self.counts.entry(key).or_insert(0) += n;
        }
    }
}

// ── Aggregator ────────────────────────────────────────────────────────────────

/// Level and message frequencies accumulated across any number of inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregator {
    levels: FrequencyTable,
    messages: FrequencyTable,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one parsed entry in both tables.
    pub fn observe(&mut self, entry: &LogEntry) {
        self.levels.increment(&entry.level);
        self.messages.increment(&entry.message);
    }

    /// Sum another aggregator's tables into this one.
    pub fn merge(&mut self, other: Aggregator) {
        self.levels.merge(other.levels);
        self.messages.merge(other.messages);
    }

    /// Total number of entries observed (sum of the level table).
    pub fn total_entries(&self) -> u64 {
        self.levels.total()
    }

    pub fn levels(&self) -> &FrequencyTable {
        &self.levels
    }

    pub fn messages(&self) -> &FrequencyTable {
        &self.messages
    }

    /// Level distribution sorted by level name.
    pub fn level_distribution(&self) -> Vec<LevelCount> {
        self.levels
            .iter()
            .map(|(level, count)| LevelCount {
                level: level.to_string(),
                count,
            })
            .collect()
    }

    /// The `k` most frequent messages, ties broken alphabetically.
    pub fn top_messages(&self, k: usize) -> Vec<RankedMessage> {
        rank_messages(self.messages.iter(), k)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
