//! Slack Web API client library.
//!
//! Provides bearer-token authenticated access to the conversation
//! and chat endpoints used by the emoji ranking bot.

pub mod api;

pub use api::{
    Channel, ChannelPage, ConversationType, ConversationsQuery, HistoryPage, HistoryRequest,
    Message, Reaction, SlackApiClient,
};

/// Unified error type for the slack-client crate.
#[derive(Debug, thiserror::Error)]
pub enum SlackError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Slack API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Slack method {method} failed: {error}")]
    Slack { method: String, error: String },

    #[error("Invalid bot token: {0}")]
    InvalidToken(String),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}
