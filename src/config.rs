//! Configuration management for the dispatcher.
//!
//! All configuration arrives as process environment variables, one secret
//! per sink per stage. It is loaded once at startup with `figment` and
//! threaded through the handler explicitly; nothing mutates process state
//! per invocation.

use anyhow::Result;
use figment::{providers::Env, Figment};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The deployment stage an invocation runs under.
///
/// Selected from the trailing qualifier of the invoked-function ARN; only
/// an exact `prod` alias counts as production, everything else is `dev`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Prod,
    Dev,
}

impl Stage {
    /// Normalizes a stage from an invoked-function ARN such as
    /// `arn:aws:lambda:us-east-1:123456789012:function:closingbell:prod`.
    pub fn from_invoked_arn(arn: &str) -> Self {
        match arn.rsplit(':').next() {
            Some("prod") => Stage::Prod,
            _ => Stage::Dev,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Prod => write!(f, "prod"),
            Stage::Dev => write!(f, "dev"),
        }
    }
}

/// Per-stage sink secrets, all optional.
///
/// An absent key disables that sink for that stage; the corresponding
/// dispatch then fails with a configuration-missing error instead of a
/// network call. Absence is never a startup error.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    /// Slack webhook path (the part after `/services/`) for prod.
    pub slack_hook_prod: Option<String>,
    /// Slack webhook path for dev.
    pub slack_hook_dev: Option<String>,
    /// SNS topic ARN for prod.
    pub sns_topic_prod: Option<String>,
    /// SNS topic ARN for dev.
    pub sns_topic_dev: Option<String>,
}

/// The secrets selected for one invocation's stage.
#[derive(Debug, Clone, Copy)]
pub struct StageConfig<'a> {
    pub slack_hook: Option<&'a str>,
    pub sns_topic: Option<&'a str>,
}

impl Config {
    /// Loads the sink secrets from the process environment.
    pub fn load() -> Result<Self> {
        let config: Config = Figment::new()
            .merge(Env::raw().only(&[
                "slack_hook_prod",
                "slack_hook_dev",
                "sns_topic_prod",
                "sns_topic_dev",
            ]))
            .extract()?;
        Ok(config)
    }

    /// Selects the secret pair for the given stage.
    pub fn for_stage(&self, stage: Stage) -> StageConfig<'_> {
        match stage {
            Stage::Prod => StageConfig {
                slack_hook: self.slack_hook_prod.as_deref(),
                sns_topic: self.sns_topic_prod.as_deref(),
            },
            Stage::Dev => StageConfig {
                slack_hook: self.slack_hook_dev.as_deref(),
                sns_topic: self.sns_topic_dev.as_deref(),
            },
        }
    }
}
