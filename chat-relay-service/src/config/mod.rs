use service_core::config::{self as core_config, get_env, is_production};
use service_core::error::AppError;
use std::time::Duration;

/// Upper bound on a single webhook call; the downstream workflow engine is slow.
const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 600;

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub common: core_config::Config,
    pub webhook: WebhookConfig,
}

#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Destination every chat request is POSTed to.
    pub url: String,
    pub timeout: Duration,
}

impl RelayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = is_production();

        let timeout_secs = get_env(
            "WEBHOOK_TIMEOUT_SECS",
            Some(&DEFAULT_WEBHOOK_TIMEOUT_SECS.to_string()),
            is_prod,
        )?
        .parse()
        .unwrap_or(DEFAULT_WEBHOOK_TIMEOUT_SECS);

        Ok(RelayConfig {
            common: common_config,
            webhook: WebhookConfig {
                url: get_env("WEBHOOK_URL", None, is_prod)?,
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}
