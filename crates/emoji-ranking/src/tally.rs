//! Emoji count table built fresh for each run.

use std::collections::HashMap;

use crate::extract::EmojiIncrement;

/// Cumulative count per emoji token.
///
/// Iteration follows first-seen order, which is what breaks ties when the
/// table is ranked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiCounts {
    /// Token -> position in `entries`.
    index: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl EmojiCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `token`, inserting it at zero first if unseen.
    pub fn merge_increment(&mut self, token: &str, amount: u64) {
        match self.index.get(token) {
            Some(&pos) => {
                let count = &mut self.entries[pos].1;
                *count = count.saturating_add(amount);
            }
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push((token.to_string(), amount));
            }
        }
    }

    /// Merge every increment produced for one message.
    pub fn merge(&mut self, increments: impl IntoIterator<Item = EmojiIncrement>) {
        for inc in increments {
            self.merge_increment(&inc.token, inc.amount);
        }
    }

    pub fn get(&self, token: &str) -> Option<u64> {
        self.index.get(token).map(|&pos| self.entries[pos].1)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, (_, count)| acc.saturating_add(*count))
    }
}
