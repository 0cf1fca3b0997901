//! Lambda entrypoint: wires the real sinks and runs the dispatcher.

use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use closingbell::config::Config;
use closingbell::notification::{SlackClient, SnsPublisher};
use closingbell::Dispatcher;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // CloudWatch supplies timestamps; keep the log lines bare.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .without_time()
        .init();

    let config = Config::load()?;

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let sns = SnsPublisher::new(aws_sdk_sns::Client::new(&aws_config));
    let slack = SlackClient::new()?;
    info!("Sink clients initialized.");

    let dispatcher = Dispatcher::new(config, Arc::new(slack), Arc::new(sns));
    let dispatcher = &dispatcher;

    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<ApiGatewayProxyRequest>| async move {
            Ok::<ApiGatewayProxyResponse, Error>(dispatcher.handle(event).await)
        },
    ))
    .await
}
