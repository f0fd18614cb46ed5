use super::*;

/// Slack caps `limit` at 1000 for both conversation endpoints.
const MAX_PAGE_LIMIT: u32 = 1000;

impl SlackApiClient {
    /// Get one page of conversations visible to the bot.
    pub async fn list_conversations(
        &self,
        query: &ConversationsQuery,
    ) -> Result<ChannelPage, SlackError> {
        let params = conversations_list_params(query);
        let body = self
            .authenticated_get("conversations.list", &params)
            .await?;
        let resp: ConversationsListResponse = serde_json::from_str(&body)?;
        let page = ChannelPage::from(resp);
        tracing::debug!(count = page.channels.len(), "Fetched conversations page");
        Ok(page)
    }

    /// Get one page of a conversation's message history.
    pub async fn conversation_history(
        &self,
        request: &HistoryRequest,
    ) -> Result<HistoryPage, SlackError> {
        let params = history_params(request);
        let body = self
            .authenticated_get("conversations.history", &params)
            .await?;
        let resp: HistoryResponse = serde_json::from_str(&body)?;
        Ok(HistoryPage::from(resp))
    }
}

pub(super) fn conversations_list_params(query: &ConversationsQuery) -> Vec<(&'static str, String)> {
    let types = query
        .types
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(",");
    let mut params = vec![
        ("types", types),
        ("exclude_archived", query.exclude_archived.to_string()),
        ("limit", query.limit.clamp(1, MAX_PAGE_LIMIT).to_string()),
    ];
    if let Some(cursor) = query.cursor.as_ref().filter(|c| !c.is_empty()) {
        params.push(("cursor", cursor.clone()));
    }
    params
}

pub(super) fn history_params(request: &HistoryRequest) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("channel", request.channel.clone()),
        ("limit", request.limit.clamp(1, MAX_PAGE_LIMIT).to_string()),
    ];
    if let Some(oldest) = request.oldest.as_ref().filter(|v| !v.is_empty()) {
        params.push(("oldest", oldest.clone()));
    }
    if let Some(cursor) = request.cursor.as_ref().filter(|c| !c.is_empty()) {
        params.push(("cursor", cursor.clone()));
    }
    params
}
