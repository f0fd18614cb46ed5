use serde::{Deserialize, Serialize};

/// Common envelope present on every Slack Web API response.
#[derive(Debug, Deserialize)]
pub struct SlackEnvelope {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ResponseMetadata {
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl ResponseMetadata {
    /// The continuation cursor, treating an empty string as "no more pages".
    pub fn cursor(self) -> Option<String> {
        self.next_cursor.filter(|cursor| !cursor.is_empty())
    }
}

/// Conversation kinds accepted by `conversations.list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationType {
    PublicChannel,
    PrivateChannel,
    Mpim,
    Im,
}

impl ConversationType {
    pub const ALL: [ConversationType; 4] = [
        ConversationType::PublicChannel,
        ConversationType::PrivateChannel,
        ConversationType::Mpim,
        ConversationType::Im,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConversationType::PublicChannel => "public_channel",
            ConversationType::PrivateChannel => "private_channel",
            ConversationType::Mpim => "mpim",
            ConversationType::Im => "im",
        }
    }
}

/// Parameters for one `conversations.list` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationsQuery {
    pub types: Vec<ConversationType>,
    pub exclude_archived: bool,
    pub limit: u32,
    pub cursor: Option<String>,
}

/// Parameters for one `conversations.history` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub channel: String,
    /// Only messages after this Unix timestamp (seconds, Slack `ts` format).
    pub oldest: Option<String>,
    pub limit: u32,
    pub cursor: Option<String>,
}

/// Conversation entry from `conversations.list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub is_im: bool,
    #[serde(default)]
    pub is_mpim: bool,
}

/// Emoji reaction attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    /// Emoji name without the surrounding colons.
    pub name: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub users: Vec<String>,
}

/// A message from `conversations.history`.
///
/// Slack omits empty collections, so everything but the payload the
/// ranking needs is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub subtype: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub reactions: Option<Vec<Reaction>>,
}

impl Message {
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    pub fn reactions(&self) -> &[Reaction] {
        self.reactions.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Deserialize)]
pub struct ConversationsListResponse {
    #[serde(default)]
    pub channels: Option<Vec<Channel>>,
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
}

/// One page of channel history with its pagination state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryPage {
    pub messages: Vec<Message>,
    pub has_more: bool,
    pub next_cursor: Option<String>,
}

impl From<HistoryResponse> for HistoryPage {
    fn from(resp: HistoryResponse) -> Self {
        Self {
            messages: resp.messages.unwrap_or_default(),
            has_more: resp.has_more,
            next_cursor: resp.response_metadata.and_then(ResponseMetadata::cursor),
        }
    }
}

/// One page of `conversations.list` with its continuation cursor.
#[derive(Debug, Clone, Default)]
pub struct ChannelPage {
    pub channels: Vec<Channel>,
    pub next_cursor: Option<String>,
}

impl From<ConversationsListResponse> for ChannelPage {
    fn from(resp: ConversationsListResponse) -> Self {
        Self {
            channels: resp.channels.unwrap_or_default(),
            next_cursor: resp.response_metadata.and_then(ResponseMetadata::cursor),
        }
    }
}
