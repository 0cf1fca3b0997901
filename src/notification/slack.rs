//! A client for sending announcements to a Slack incoming webhook.

use crate::notification::{DispatchError, SlackSink};
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;
use tracing::{info, instrument, warn};

const SLACK_WEBHOOK_HOST: &str = "https://hooks.slack.com";

/// A client for Slack's incoming-webhook contract.
///
/// Slack acknowledges a delivered message with the literal response body
/// `ok`; anything else is treated as a rejection.
pub struct SlackClient {
    http: reqwest::Client,
    base_url: String,
}

impl SlackClient {
    /// Creates a new `SlackClient` against the real Slack webhook host.
    pub fn new() -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            base_url: SLACK_WEBHOOK_HOST.to_string(),
        })
    }
}

#[async_trait]
impl SlackSink for SlackClient {
    /// Posts the message to the configured webhook path.
    ///
    /// Issues exactly one request; there are no retries.
    #[instrument(skip(self, message, webhook_path))]
    async fn send(&self, message: &str, webhook_path: &str) -> Result<String, DispatchError> {
        let url = format!("{}/services/{}", self.base_url, webhook_path);
        let payload = json!({ "text": message });

        let response = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| DispatchError::Transport {
                sink: "Slack",
                detail: e.to_string(),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DispatchError::Transport {
                sink: "Slack",
                detail: e.to_string(),
            })?;

        // Slack's webhook contract is body-based: only the literal `ok`
        // counts as delivered, regardless of status code.
        if body == "ok" {
            info!("Slack accepted the message.");
            Ok(body)
        } else {
            let detail = if body.is_empty() {
                "no response received".to_string()
            } else {
                body
            };
            warn!(status = %status, detail = %detail, "Slack did not accept the message");
            Err(DispatchError::Rejected {
                sink: "Slack",
                detail,
            })
        }
    }
}
