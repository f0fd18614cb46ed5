use serde::{Deserialize, Serialize};

use super::*;

#[derive(Debug, Serialize)]
struct PostMessageBody<'a> {
    channel: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    #[serde(default)]
    ts: Option<String>,
}

impl SlackApiClient {
    /// Post a plain-text message to a channel.
    ///
    /// Returns the `ts` of the created message when Slack reports one.
    pub async fn post_message(
        &self,
        channel: &str,
        text: &str,
    ) -> Result<Option<String>, SlackError> {
        let body = self
            .authenticated_post("chat.postMessage", &PostMessageBody { channel, text })
            .await?;
        let resp: PostMessageResponse = serde_json::from_str(&body)?;
        tracing::debug!(channel, ts = ?resp.ts, "Posted message");
        Ok(resp.ts)
    }
}
