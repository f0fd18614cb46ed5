//! Report text rendering.

use std::fmt;

use crate::ranking::RankedEntry;

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "第{}位 {}: {}回", self.rank, self.emoji, self.count)
    }
}

/// One line per entry, newline-separated, no trailing newline.
pub fn format_report(entries: &[RankedEntry]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(rank: usize, emoji: &str, count: u64) -> RankedEntry {
        RankedEntry {
            rank,
            emoji: emoji.into(),
            count,
        }
    }

    #[test]
    fn renders_one_line_per_entry() {
        let report = format_report(&[
            entry(1, ":tada:", 4),
            entry(1, ":fire:", 4),
            entry(3, ":eyes:", 1),
        ]);
        assert_eq!(
            report,
            "第1位 :tada:: 4回\n第1位 :fire:: 4回\n第3位 :eyes:: 1回"
        );
    }

    #[test]
    fn empty_input_is_empty_string() {
        assert_eq!(format_report(&[]), "");
    }

    #[test]
    fn no_trailing_newline() {
        let report = format_report(&[entry(1, ":a:", 1)]);
        assert!(!report.ends_with('\n'));
        assert_eq!(report.lines().count(), 1);
    }
}
