//! Channel history retrieval with bounded cursor pagination.

use slack_client::{HistoryRequest, Message};

use crate::RankingError;
use crate::source::WorkspaceSource;
use crate::window::Cutoff;

/// Platform page size maximum for `conversations.history`.
pub const HISTORY_PAGE_LIMIT: u32 = 1000;

/// Default cap on pages drained from a single channel.
pub const DEFAULT_MAX_HISTORY_PAGES: usize = 500;

/// Lazily fetches a channel's history one page at a time.
///
/// Ends when the server reports `has_more == false`. Requesting more than
/// `max_pages` pages, or `has_more` without a cursor to continue from, is
/// an error rather than a silent truncation.
pub struct HistoryPager<'a, S> {
    source: &'a S,
    channel: String,
    oldest: Cutoff,
    cursor: Option<String>,
    pages: usize,
    max_pages: usize,
    finished: bool,
}

impl<'a, S: WorkspaceSource> HistoryPager<'a, S> {
    pub fn new(source: &'a S, channel: &str, oldest: Cutoff, max_pages: usize) -> Self {
        Self {
            source,
            channel: channel.to_string(),
            oldest,
            cursor: None,
            pages: 0,
            max_pages: max_pages.max(1),
            finished: false,
        }
    }

    /// Fetch the next page, or `None` once the history is drained.
    pub async fn next_page(&mut self) -> Result<Option<Vec<Message>>, RankingError> {
        if self.finished {
            return Ok(None);
        }
        if self.pages >= self.max_pages {
            return Err(RankingError::PageLimitExceeded {
                channel: self.channel.clone(),
                pages: self.max_pages,
            });
        }

        let request = HistoryRequest {
            channel: self.channel.clone(),
            oldest: Some(self.oldest.as_slack_ts()),
            limit: HISTORY_PAGE_LIMIT,
            cursor: self.cursor.take(),
        };
        let page = self
            .source
            .conversation_history(&request)
            .await
            .map_err(|source| RankingError::History {
                channel: self.channel.clone(),
                source,
            })?;
        self.pages += 1;

        tracing::debug!(
            channel = %self.channel,
            page = self.pages,
            messages = page.messages.len(),
            has_more = page.has_more,
            "Fetched history page"
        );

        match (page.has_more, page.next_cursor) {
            (false, _) => self.finished = true,
            (true, Some(cursor)) => self.cursor = Some(cursor),
            (true, None) => {
                return Err(RankingError::MissingCursor {
                    channel: self.channel.clone(),
                    page: self.pages,
                });
            }
        }

        Ok(Some(page.messages))
    }

    /// Pages fetched so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages
    }
}

/// Every message in `channel` newer than `oldest`, across all pages, in order.
pub async fn fetch_history<S: WorkspaceSource>(
    source: &S,
    channel: &str,
    oldest: Cutoff,
    max_pages: usize,
) -> Result<Vec<Message>, RankingError> {
    let mut pager = HistoryPager::new(source, channel, oldest, max_pages);
    let mut out = Vec::new();
    while let Some(messages) = pager.next_page().await? {
        out.extend(messages);
    }
    Ok(out)
}
