use serde::Serialize;
use url::Url;

use super::*;

impl SlackApiClient {
    /// Build the URL for a Web API method with the given query parameters.
    pub(super) fn method_url(
        &self,
        method: &str,
        params: &[(&str, String)],
    ) -> Result<Url, SlackError> {
        let mut url = Url::parse(&format!("{}/{method}", self.base_url))?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Execute a GET request for a Web API method with the bot token.
    pub(super) async fn authenticated_get(
        &self,
        method: &str,
        params: &[(&str, String)],
    ) -> Result<String, SlackError> {
        let url = self.method_url(method, params)?;
        let resp = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        check_response(method, status, body)
    }

    /// Execute a POST request for a Web API method with a JSON body.
    pub(super) async fn authenticated_post(
        &self,
        method: &str,
        body: &impl Serialize,
    ) -> Result<String, SlackError> {
        let url = self.method_url(method, &[])?;
        let resp = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        let resp_body = resp.text().await?;
        check_response(method, status, resp_body)
    }
}

/// Reject non-2xx statuses and `"ok": false` envelopes.
fn check_response(
    method: &str,
    status: reqwest::StatusCode,
    body: String,
) -> Result<String, SlackError> {
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        tracing::warn!(method, "Slack rate limit hit");
    }

    if !status.is_success() {
        return Err(SlackError::ApiError {
            status: status.as_u16(),
            message: body,
        });
    }

    let envelope: SlackEnvelope = serde_json::from_str(&body)?;
    if !envelope.ok {
        return Err(SlackError::Slack {
            method: method.to_string(),
            error: envelope.error.unwrap_or_else(|| "unknown_error".into()),
        });
    }

    Ok(body)
}
