//! Slack Web API client.
//!
//! Typed access to `conversations.list`, `conversations.history` and
//! `chat.postMessage` with Bearer token injection. Slack reports most
//! failures as HTTP 200 with `"ok": false`, so every response envelope
//! is checked before the payload is handed back.

mod chat;
mod conversations;
mod request;

pub mod models;


use std::time::Duration;

pub use models::{
    Channel, ChannelPage, ConversationType, ConversationsListResponse, ConversationsQuery,
    HistoryPage, HistoryRequest, HistoryResponse, Message, Reaction, ResponseMetadata,
    SlackEnvelope,
};

use crate::SlackError;

pub const SLACK_API_BASE: &str = "https://slack.com/api";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Slack Web API client bound to a single bot token.
pub struct SlackApiClient {
    pub(super) http: reqwest::Client,
    pub(super) base_url: String,
    pub(super) token: String,
}

impl SlackApiClient {
    /// Create a client against the public Slack API.
    pub fn new(token: String) -> Result<Self, SlackError> {
        Self::with_options(
            token,
            SLACK_API_BASE,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Create a client against a custom API base (proxy or mock server).
    pub fn with_options(
        token: String,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, SlackError> {
        if token.trim().is_empty() {
            return Err(SlackError::InvalidToken("token is empty".into()));
        }
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }
}
