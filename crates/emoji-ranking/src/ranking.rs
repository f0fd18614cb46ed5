//! Top-N reduction with competition ranking.

use serde::Serialize;

use crate::tally::EmojiCounts;

pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub emoji: String,
    pub count: u64,
}

/// Keep the `top_n` highest counts and rank them.
///
/// The sort is stable, so equal counts stay in first-seen order.
pub fn rank_top(counts: &EmojiCounts, top_n: usize) -> Vec<RankedEntry> {
    let mut sorted: Vec<(&str, u64)> = counts.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted.truncate(top_n);
    assign_ranks(sorted)
}

/// Assign competition ranks to entries already sorted by descending count.
///
/// Tied counts share a rank and the next distinct count skips ahead by the
/// size of the tie group: `[10, 10, 7]` ranks as `[1, 1, 3]`.
pub fn assign_ranks<'a>(sorted: impl IntoIterator<Item = (&'a str, u64)>) -> Vec<RankedEntry> {
    let mut out: Vec<RankedEntry> = Vec::new();
    for (position, (emoji, count)) in sorted.into_iter().enumerate() {
        let rank = match out.last() {
            Some(prev) if prev.count == count => prev.rank,
            _ => position + 1,
        };
        out.push(RankedEntry {
            rank,
            emoji: emoji.to_string(),
            count,
        });
    }
    out
}
