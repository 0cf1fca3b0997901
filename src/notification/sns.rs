//! A publisher for fanning announcements out to an SNS topic.

use crate::notification::{DispatchError, TopicSink};
use async_trait::async_trait;
use aws_sdk_sns::error::{DisplayErrorContext, SdkError};
use aws_sdk_sns::operation::publish::PublishError;
use tracing::{info, instrument};

/// Publishes messages to SNS via the AWS SDK, one `Publish` call per
/// dispatch, no retries beyond whatever the SDK does internally.
pub struct SnsPublisher {
    client: aws_sdk_sns::Client,
}

impl SnsPublisher {
    /// Creates a new `SnsPublisher` over a shared SDK client.
    pub fn new(client: aws_sdk_sns::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TopicSink for SnsPublisher {
    /// Publishes the JSON-encoded message to the topic.
    #[instrument(skip(self, message, topic_arn))]
    async fn publish(&self, message: &str, topic_arn: &str) -> Result<String, DispatchError> {
        // Subscribers receive the message JSON-encoded (a quoted string),
        // matching what the Slack sink's consumers already parse.
        let payload = serde_json::to_string(message).map_err(|e| DispatchError::Rejected {
            sink: "SNS",
            detail: e.to_string(),
        })?;

        let output = self
            .client
            .publish()
            .topic_arn(topic_arn)
            .message(payload)
            .send()
            .await
            .map_err(publish_dispatch_error)?;

        let message_id = output.message_id().unwrap_or_default().to_string();
        info!(message_id = %message_id, "SNS accepted the message.");
        Ok(message_id)
    }
}

/// Maps an SDK publish error onto the dispatch taxonomy: failures to reach
/// the service at all are transport failures, everything else is a
/// sink-reported rejection.
fn publish_dispatch_error(error: SdkError<PublishError>) -> DispatchError {
    let detail = DisplayErrorContext(&error).to_string();
    match error {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => DispatchError::Transport {
            sink: "SNS",
            detail,
        },
        _ => DispatchError::Rejected {
            sink: "SNS",
            detail,
        },
    }
}
