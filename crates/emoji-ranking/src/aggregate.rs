//! Ranking pipeline orchestration and the publish entry point.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use slack_client::SlackError;

use crate::RankingError;
use crate::channels::list_channels;
use crate::extract::extract;
use crate::history::{DEFAULT_MAX_HISTORY_PAGES, fetch_history};
use crate::ranking::{DEFAULT_TOP_N, RankedEntry, rank_top};
use crate::report::format_report;
use crate::source::WorkspaceSource;
use crate::tally::EmojiCounts;
use crate::window::{Cutoff, one_month_before};

/// Tunables for one ranking run.
#[derive(Debug, Clone)]
pub struct RankingOptions {
    pub top_n: usize,
    pub max_history_pages: usize,
    /// Timezone the one-month window is computed in.
    pub timezone: Tz,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            max_history_pages: DEFAULT_MAX_HISTORY_PAGES,
            timezone: chrono_tz::Asia::Tokyo,
        }
    }
}

/// Where the finished report goes.
#[derive(Debug, Clone)]
pub struct PublishTarget {
    pub channel: String,
    /// Log the report instead of posting it.
    pub dry_run: bool,
}

/// Tallies emoji across every visible channel and ranks the result.
///
/// Channels and pages are fetched strictly one after another; the count
/// table lives only for the duration of one call.
pub struct RankingAggregator<'a, S> {
    source: &'a S,
    options: RankingOptions,
}

impl<'a, S: WorkspaceSource> RankingAggregator<'a, S> {
    pub fn new(source: &'a S, options: RankingOptions) -> Self {
        Self { source, options }
    }

    /// Rank the trailing month ending now.
    pub async fn aggregate(&self) -> Result<Vec<RankedEntry>, RankingError> {
        let now = Utc::now().with_timezone(&self.options.timezone);
        self.aggregate_at(now).await
    }

    /// Rank the trailing month ending at `now`.
    pub async fn aggregate_at(&self, now: DateTime<Tz>) -> Result<Vec<RankedEntry>, RankingError> {
        let cutoff = one_month_before(&now)?;
        let counts = self.tally_since(cutoff).await?;
        Ok(rank_top(&counts, self.options.top_n))
    }

    /// Count every emoji in messages newer than `cutoff`.
    pub async fn tally_since(&self, cutoff: Cutoff) -> Result<EmojiCounts, RankingError> {
        let channels = list_channels(self.source).await?;
        tracing::info!(
            channels = channels.len(),
            oldest = cutoff.epoch_seconds(),
            "Aggregating emoji usage"
        );

        let mut counts = EmojiCounts::new();
        let mut message_total = 0usize;
        for channel in &channels {
            let messages = fetch_history(
                self.source,
                channel,
                cutoff,
                self.options.max_history_pages,
            )
            .await?;
            message_total += messages.len();
            for message in &messages {
                counts.merge(extract(message));
            }
        }

        tracing::info!(
            channels = channels.len(),
            messages = message_total,
            distinct_emoji = counts.len(),
            "Emoji tally complete"
        );
        Ok(counts)
    }
}

/// Aggregate, format and post the monthly ranking.
///
/// Returns the report text. An empty ranking still produces (and posts)
/// an empty report; Slack refusing it with `no_text` is not a failure.
pub async fn run_ranking_and_publish<S: WorkspaceSource>(
    source: &S,
    target: &PublishTarget,
    options: RankingOptions,
) -> Result<String, RankingError> {
    let now = Utc::now().with_timezone(&options.timezone);
    run_ranking_and_publish_at(source, target, options, now).await
}

/// [`run_ranking_and_publish`] with an explicit clock.
pub async fn run_ranking_and_publish_at<S: WorkspaceSource>(
    source: &S,
    target: &PublishTarget,
    options: RankingOptions,
    now: DateTime<Tz>,
) -> Result<String, RankingError> {
    let entries = RankingAggregator::new(source, options)
        .aggregate_at(now)
        .await?;
    let report = format_report(&entries);

    if target.dry_run {
        tracing::warn!(channel = %target.channel, "Dry run: report not posted");
        tracing::info!("Report:\n{report}");
        return Ok(report);
    }

    match source.post_message(&target.channel, &report).await {
        Ok(()) => {}
        Err(SlackError::Slack { error, .. }) if report.is_empty() && error == "no_text" => {
            tracing::info!(
                channel = %target.channel,
                "No emoji this period, empty report declined by Slack"
            );
            return Ok(report);
        }
        Err(err) => {
            return Err(RankingError::Publish {
                channel: target.channel.clone(),
                source: err,
            });
        }
    }
    tracing::info!(
        channel = %target.channel,
        entries = entries.len(),
        "Ranking posted"
    );
    Ok(report)
}
