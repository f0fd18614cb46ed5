//! Channel enumeration.

use slack_client::{ConversationType, ConversationsQuery};

use crate::RankingError;
use crate::source::WorkspaceSource;

/// Platform single-page maximum for `conversations.list`.
pub const CHANNEL_PAGE_LIMIT: u32 = 1000;

/// Public, private, group DM and DM conversations, archived ones excluded.
pub fn channels_query() -> ConversationsQuery {
    ConversationsQuery {
        types: ConversationType::ALL.to_vec(),
        exclude_archived: true,
        limit: CHANNEL_PAGE_LIMIT,
        cursor: None,
    }
}

/// IDs of every conversation visible to the bot, in platform order.
///
/// Only the first page is requested. A failure here aborts the run.
pub async fn list_channels<S: WorkspaceSource>(source: &S) -> Result<Vec<String>, RankingError> {
    let page = source
        .list_conversations(&channels_query())
        .await
        .map_err(RankingError::ListChannels)?;

    if page.next_cursor.is_some() {
        tracing::warn!(
            count = page.channels.len(),
            limit = CHANNEL_PAGE_LIMIT,
            "Channel list truncated at single-page maximum"
        );
    }

    Ok(page.channels.into_iter().map(|c| c.id).collect())
}
