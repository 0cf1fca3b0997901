//! closingbell - a serverless "we're closing" announcer.
//!
//! A single button press arrives as an API Gateway proxy event; the handler
//! resolves the path to a fixed announcement and fans it out concurrently
//! to a Slack incoming webhook and an SNS topic, then folds both outcomes
//! into one response envelope.

pub mod config;
pub mod handler;
pub mod message;
pub mod notification;

pub use handler::Dispatcher;
