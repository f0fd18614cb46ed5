//! Workspace capabilities the ranking pipeline depends on.

use std::future::Future;

use slack_client::{
    ChannelPage, ConversationsQuery, HistoryPage, HistoryRequest, SlackApiClient, SlackError,
};

/// Read and write operations against the messaging platform.
///
/// [`SlackApiClient`] is the production implementation; tests substitute an
/// in-memory workspace.
pub trait WorkspaceSource {
    /// Fetch one page of conversations matching `query`.
    fn list_conversations(
        &self,
        query: &ConversationsQuery,
    ) -> impl Future<Output = Result<ChannelPage, SlackError>>;

    /// Fetch one page of a channel's history.
    fn conversation_history(
        &self,
        request: &HistoryRequest,
    ) -> impl Future<Output = Result<HistoryPage, SlackError>>;

    /// Post `text` to `channel`.
    fn post_message(
        &self,
        channel: &str,
        text: &str,
    ) -> impl Future<Output = Result<(), SlackError>>;
}

impl WorkspaceSource for SlackApiClient {
    async fn list_conversations(
        &self,
        query: &ConversationsQuery,
    ) -> Result<ChannelPage, SlackError> {
        SlackApiClient::list_conversations(self, query).await
    }

    async fn conversation_history(
        &self,
        request: &HistoryRequest,
    ) -> Result<HistoryPage, SlackError> {
        SlackApiClient::conversation_history(self, request).await
    }

    async fn post_message(&self, channel: &str, text: &str) -> Result<(), SlackError> {
        SlackApiClient::post_message(self, channel, text)
            .await
            .map(|_| ())
    }
}
