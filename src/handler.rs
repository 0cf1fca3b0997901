//! The invocation orchestrator.
//!
//! One inbound API Gateway proxy event becomes one fan-out to the two
//! notification sinks and exactly one response envelope. Every outcome,
//! success or failure, funnels through the same finalize step; nothing
//! escapes as a handler error.

use crate::config::{Config, Stage};
use crate::message::Category;
use crate::notification::{DispatchError, SlackSink, TopicSink};
use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use aws_lambda_events::encodings::Body;
use http::HeaderMap;
use lambda_runtime::LambdaEvent;
use std::sync::Arc;
use tracing::{error, info};

/// The fixed confirmation body returned when both sinks accept the message.
pub const SUCCESS_BODY: &str = "Message sent, thanks guys!";

/// Fans a resolved announcement out to the configured sinks and folds the
/// joined outcome into an API Gateway response.
pub struct Dispatcher {
    config: Config,
    slack: Arc<dyn SlackSink>,
    topic: Arc<dyn TopicSink>,
}

impl Dispatcher {
    /// Creates a new `Dispatcher` over the given sinks.
    pub fn new(config: Config, slack: Arc<dyn SlackSink>, topic: Arc<dyn TopicSink>) -> Self {
        Self {
            config,
            slack,
            topic,
        }
    }

    /// Handles one invocation end to end.
    ///
    /// Always returns a well-formed envelope; failures are folded into the
    /// status code and body, never propagated.
    pub async fn handle(
        &self,
        event: LambdaEvent<ApiGatewayProxyRequest>,
    ) -> ApiGatewayProxyResponse {
        let stage = Stage::from_invoked_arn(&event.context.invoked_function_arn);
        info!("Running in {} mode.", stage);
        let secrets = self.config.for_stage(stage);

        let path = event
            .payload
            .path_parameters
            .get("proxy")
            .map(String::as_str)
            .unwrap_or_default();
        info!(path = %path, "Received closing event.");

        // Resolve before any dispatch: an unknown category must not cause
        // partial side effects.
        let category: Category = match path.parse() {
            Ok(category) => category,
            Err(error) => return finish_request(Err(error)),
        };
        let message = category.message();

        // Both branches always run to completion; a failure in one does not
        // cancel the other's in-flight request.
        let (slack_outcome, topic_outcome) = tokio::join!(
            self.dispatch_slack(message, secrets.slack_hook),
            self.dispatch_topic(message, secrets.sns_topic),
        );

        if let Err(error) = &topic_outcome {
            error!(%error, "SNS dispatch failed");
        }
        if let Err(error) = &slack_outcome {
            error!(%error, "Slack dispatch failed");
        }

        // Any sink failure fails the invocation; the Slack error wins the
        // body when both fail.
        let result = match (slack_outcome, topic_outcome) {
            (Ok(_), Ok(message_id)) => Ok(message_id),
            (Err(error), _) => Err(error),
            (_, Err(error)) => Err(error),
        };

        finish_request(result)
    }

    async fn dispatch_slack(
        &self,
        message: &str,
        webhook_path: Option<&str>,
    ) -> Result<String, DispatchError> {
        let webhook_path = webhook_path.ok_or(DispatchError::MissingConfig("SLACK_HOOK"))?;
        self.slack.send(message, webhook_path).await
    }

    async fn dispatch_topic(
        &self,
        message: &str,
        topic_arn: Option<&str>,
    ) -> Result<String, DispatchError> {
        let topic_arn = topic_arn.ok_or(DispatchError::MissingConfig("SNS_TOPIC"))?;
        self.topic.publish(message, topic_arn).await
    }
}

/// The single exit point: logs the joined outcome and builds the envelope.
fn finish_request(result: Result<String, DispatchError>) -> ApiGatewayProxyResponse {
    match result {
        Ok(message_id) => {
            info!(message_id = %message_id, "All sinks accepted the message.");
            build_response(200, SUCCESS_BODY.to_string())
        }
        Err(error) => {
            error!(%error, "Invocation failed");
            build_response(error.status_code(), error.to_string())
        }
    }
}

fn build_response(status_code: i64, body: String) -> ApiGatewayProxyResponse {
    ApiGatewayProxyResponse {
        status_code,
        headers: HeaderMap::new(),
        multi_value_headers: HeaderMap::new(),
        body: Some(Body::Text(body)),
        is_base64_encoded: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_text(response: &ApiGatewayProxyResponse) -> &str {
        match response.body.as_ref() {
            Some(Body::Text(text)) => text,
            other => panic!("expected a text body, got {other:?}"),
        }
    }

    #[test]
    fn success_envelope_is_200_with_fixed_body() {
        let response = finish_request(Ok("msg-id-123".to_string()));

        assert_eq!(response.status_code, 200);
        assert_eq!(body_text(&response), SUCCESS_BODY);
        assert!(!response.is_base64_encoded);
        assert!(response.headers.is_empty());
    }

    #[test]
    fn failure_envelope_carries_the_error_status_and_text() {
        let response = finish_request(Err(DispatchError::Rejected {
            sink: "Slack",
            detail: "invalid_payload".to_string(),
        }));

        assert_eq!(response.status_code, 502);
        assert_eq!(
            body_text(&response),
            "Slack rejected the message: invalid_payload"
        );
    }
}
