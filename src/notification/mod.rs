//! Sink contracts and the dispatch error taxonomy.
//!
//! This module defines the trait seams for the two notification sinks
//! (Slack webhook, SNS topic) so the orchestrator can be exercised with
//! fakes, plus the typed error that every dispatch failure funnels into.

use async_trait::async_trait;
use thiserror::Error;

pub mod slack;
pub mod sns;

pub use slack::SlackClient;
pub use sns::SnsPublisher;

/// A failure anywhere on the path from inbound event to settled sink outcome.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The inbound path segment is not one of the recognized categories.
    #[error("Invalid path specified: {0}")]
    InvalidCategory(String),

    /// The sink's secret is not configured for the active stage.
    #[error("No {0} provided.")]
    MissingConfig(&'static str),

    /// The sink could not be reached at all (DNS, TLS, timeout, reset).
    #[error("Error with {sink} request: {detail}")]
    Transport { sink: &'static str, detail: String },

    /// The sink was reachable but reported failure; detail is verbatim.
    #[error("{sink} rejected the message: {detail}")]
    Rejected { sink: &'static str, detail: String },
}

impl DispatchError {
    /// The HTTP status the response envelope should carry for this error.
    pub fn status_code(&self) -> i64 {
        match self {
            DispatchError::InvalidCategory(_) => 400,
            DispatchError::MissingConfig(_) => 500,
            DispatchError::Transport { .. } | DispatchError::Rejected { .. } => 502,
        }
    }
}

/// Sends a message to a Slack incoming webhook.
#[async_trait]
pub trait SlackSink: Send + Sync {
    /// Posts `message` to the webhook at `webhook_path`.
    ///
    /// Returns the raw response body on success (Slack's contract is the
    /// literal body `ok`).
    async fn send(&self, message: &str, webhook_path: &str) -> Result<String, DispatchError>;
}

/// Publishes a message to a pub/sub topic.
#[async_trait]
pub trait TopicSink: Send + Sync {
    /// Publishes `message` to `topic_arn`, returning the provider's
    /// message id.
    async fn publish(&self, message: &str, topic_arn: &str) -> Result<String, DispatchError>;
}
