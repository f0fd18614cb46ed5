//! Monthly emoji usage ranking for a Slack workspace.
//!
//! Enumerates every conversation the bot can see, drains each channel's
//! history for the trailing month, counts `:emoji:` markers in message
//! text plus reaction counts, and reduces the tally to a ranked top-N
//! report.

pub mod aggregate;
pub mod channels;
pub mod extract;
pub mod history;
pub mod ranking;
pub mod report;
pub mod source;
pub mod tally;
pub mod window;

#[cfg(test)]
mod tests;

pub use aggregate::{
    PublishTarget, RankingAggregator, RankingOptions, run_ranking_and_publish,
    run_ranking_and_publish_at,
};
pub use extract::{EmojiIncrement, extract};
pub use ranking::{DEFAULT_TOP_N, RankedEntry, rank_top};
pub use report::format_report;
pub use source::WorkspaceSource;
pub use tally::EmojiCounts;
pub use window::Cutoff;

use slack_client::SlackError;

/// Errors that abort a ranking run.
///
/// There is no partial-success mode: any of these means nothing is posted.
#[derive(Debug, thiserror::Error)]
pub enum RankingError {
    #[error("Failed to list channels: {0}")]
    ListChannels(#[source] SlackError),

    #[error("Failed to fetch history for channel {channel}: {source}")]
    History {
        channel: String,
        #[source]
        source: SlackError,
    },

    #[error("History for channel {channel} exceeded {pages} pages")]
    PageLimitExceeded { channel: String, pages: usize },

    #[error("History for channel {channel} reported more pages after page {page} but no cursor")]
    MissingCursor { channel: String, page: usize },

    #[error("Failed to post report to {channel}: {source}")]
    Publish {
        channel: String,
        #[source]
        source: SlackError,
    },

    #[error("Cannot compute the one-month window before {0}")]
    InvalidWindow(String),
}
