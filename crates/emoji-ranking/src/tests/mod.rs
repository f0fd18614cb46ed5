use std::collections::HashMap;
use std::sync::Mutex;

use slack_client::{
    Channel, ChannelPage, ConversationsQuery, HistoryPage, HistoryRequest, Message, Reaction,
    SlackError,
};

use crate::source::WorkspaceSource;


/// In-memory workspace that serves scripted pages and records every call.
#[derive(Default)]
struct FakeSource {
    channels: Vec<String>,
    channel_cursor: Option<String>,
    fail_listing: bool,
    pages: HashMap<String, Vec<HistoryPage>>,
    failing_history: Option<String>,
    fail_post: bool,
    reject_empty_text: bool,
    served: Mutex<HashMap<String, usize>>,
    list_queries: Mutex<Vec<ConversationsQuery>>,
    history_calls: Mutex<Vec<HistoryRequest>>,
    posted: Mutex<Vec<(String, String)>>,
}

impl FakeSource {
    fn new() -> Self {
        Self::default()
    }

    fn with_channel(mut self, id: &str, pages: Vec<HistoryPage>) -> Self {
        self.channels.push(id.to_string());
        self.pages.insert(id.to_string(), pages);
        self
    }

    fn list_queries(&self) -> Vec<ConversationsQuery> {
        self.list_queries.lock().unwrap().clone()
    }

    fn history_calls(&self) -> Vec<HistoryRequest> {
        self.history_calls.lock().unwrap().clone()
    }

    fn posted(&self) -> Vec<(String, String)> {
        self.posted.lock().unwrap().clone()
    }
}

impl WorkspaceSource for FakeSource {
    async fn list_conversations(
        &self,
        query: &ConversationsQuery,
    ) -> Result<ChannelPage, SlackError> {
        self.list_queries.lock().unwrap().push(query.clone());
        if self.fail_listing {
            return Err(SlackError::Slack {
                method: "conversations.list".into(),
                error: "invalid_auth".into(),
            });
        }
        Ok(ChannelPage {
            channels: self
                .channels
                .iter()
                .map(|id| Channel {
                    id: id.clone(),
                    name: None,
                    is_archived: false,
                    is_private: false,
                    is_im: false,
                    is_mpim: false,
                })
                .collect(),
            next_cursor: self.channel_cursor.clone(),
        })
    }

    async fn conversation_history(
        &self,
        request: &HistoryRequest,
    ) -> Result<HistoryPage, SlackError> {
        self.history_calls.lock().unwrap().push(request.clone());

        if self.failing_history.as_deref() == Some(request.channel.as_str()) {
            return Err(SlackError::ApiError {
                status: 500,
                message: "boom".into(),
            });
        }

        let mut served = self.served.lock().unwrap();
        let index = served.entry(request.channel.clone()).or_insert(0);
        let page = self
            .pages
            .get(&request.channel)
            .and_then(|pages| pages.get(*index))
            .cloned()
            .unwrap_or_default();
        *index += 1;
        Ok(page)
    }

    async fn post_message(&self, channel: &str, text: &str) -> Result<(), SlackError> {
        if self.fail_post {
            return Err(SlackError::Slack {
                method: "chat.postMessage".into(),
                error: "channel_not_found".into(),
            });
        }
        if text.is_empty() && self.reject_empty_text {
            return Err(SlackError::Slack {
                method: "chat.postMessage".into(),
                error: "no_text".into(),
            });
        }
        self.posted
            .lock()
            .unwrap()
            .push((channel.to_string(), text.to_string()));
        Ok(())
    }
}

fn message(text: Option<&str>, reactions: &[(&str, u64)]) -> Message {
    Message {
        text: text.map(str::to_string),
        reactions: (!reactions.is_empty()).then(|| {
            reactions
                .iter()
                .map(|(name, count)| Reaction {
                    name: name.to_string(),
                    count: *count,
                    users: Vec::new(),
                })
                .collect()
        }),
        ..Message::default()
    }
}

/// A page that continues with `cursor`, or the last page when `None`.
fn page(messages: Vec<Message>, cursor: Option<&str>) -> HistoryPage {
    HistoryPage {
        messages,
        has_more: cursor.is_some(),
        next_cursor: cursor.map(str::to_string),
    }
}
