//! Top-K selection over counted keys.
//!
//! [`top_k_by`] is generic over the element type and the ordering; the
//! message ranking used by the report is built on top of it with
//! [`by_count_then_key`], which orders by count descending and breaks ties by
//! key ascending so the ranking never depends on hash or insertion order.

use std::cmp::Ordering;

use crate::models::RankedMessage;

/// Number of messages ranked when no explicit value is configured.
pub const DEFAULT_TOP_K: usize = 3;

// ── Generic selection ─────────────────────────────────────────────────────────

/// Return the first `k` elements of `items` under `compare`, in order.
///
/// The result has `min(k, items.len())` elements. Only the selected prefix is
/// fully sorted; the rest is partitioned away in linear time.
pub fn top_k_by<T, F>(mut items: Vec<T>, k: usize, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if k == 0 {
        return Vec::new();
    }
    if items.len() > k {
        items.select_nth_unstable_by(k - 1, &mut compare);
        items.truncate(k);
    }
    items.sort_by(compare);
    items
}

// ── Comparators ───────────────────────────────────────────────────────────────

/// Count descending, then key ascending (byte-wise).
pub fn by_count_then_key<K: Ord>(a: &(K, u64), b: &(K, u64)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

// ── Message ranking ───────────────────────────────────────────────────────────

/// Rank `(message, count)` pairs and keep the `k` most frequent.
///
/// Ranks are 1-based. Messages with equal counts are ranked alphabetically.
pub fn rank_messages<'a, I>(counts: I, k: usize) -> Vec<RankedMessage>
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    let pairs: Vec<(&str, u64)> = counts.into_iter().collect();
    top_k_by(pairs, k, by_count_then_key)
        .into_iter()
        .enumerate()
        .map(|(i, (message, count))| RankedMessage {
            rank: i + 1,
            message: message.to_string(),
            count,
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
