//! HTTP client for the downstream workflow webhook.
//!
//! One POST per call, bounded by the configured timeout. Nothing is retried.

use crate::config::WebhookConfig;
use reqwest::{header::CONTENT_TYPE, Client};
use serde::Serialize;
use serde_json::{json, Value};
use service_core::error::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Webhook rejected request with status {status}")]
    Rejected { status: u16, body: String },

    #[error("Webhook request timed out")]
    Timeout,

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Client error: {0}")]
    Client(String),
}

impl WebhookError {
    /// Metric label for this failure.
    pub fn outcome(&self) -> &'static str {
        match self {
            WebhookError::Rejected { .. } => "rejected",
            WebhookError::Timeout => "timeout",
            WebhookError::Connection(_) => "connection_error",
            WebhookError::Client(_) => "internal_error",
        }
    }
}

impl From<reqwest::Error> for WebhookError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            WebhookError::Timeout
        } else {
            WebhookError::Connection(err.to_string())
        }
    }
}

impl From<WebhookError> for AppError {
    fn from(err: WebhookError) -> Self {
        match err {
            WebhookError::Rejected { status, body } => {
                tracing::warn!(status, body = %body, "Webhook rejected chat request");
                AppError::UpstreamRejected(status)
            }
            WebhookError::Timeout => AppError::UpstreamTimeout,
            WebhookError::Connection(cause) => AppError::UpstreamConnection(cause),
            WebhookError::Client(cause) => AppError::InternalError(anyhow::anyhow!(cause)),
        }
    }
}

/// Downstream status plus its body, JSON when it parses.
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookResponse {
    pub status: u16,
    pub body: Value,
}

impl WebhookResponse {
    /// Non-JSON bodies are wrapped as `{"response": <text>}`.
    pub fn parse_body(text: &str) -> Value {
        serde_json::from_str(text).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Webhook body is not JSON, wrapping as text");
            json!({ "response": text })
        })
    }
}

#[derive(Clone)]
pub struct WebhookClient {
    client: Client,
    url: String,
}

impl WebhookClient {
    pub fn new(config: &WebhookConfig) -> Result<Self, WebhookError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| WebhookError::Client(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST `payload` as JSON and relay the downstream answer.
    ///
    /// Statuses of 400 and above are returned as [`WebhookError::Rejected`].
    pub async fn forward<T>(&self, payload: &T) -> Result<WebhookResponse, WebhookError>
    where
        T: Serialize + ?Sized,
    {
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;

        tracing::info!(status, "Webhook response status");
        tracing::debug!(body = %text, "Webhook response body");

        if status >= 400 {
            return Err(WebhookError::Rejected { status, body: text });
        }

        Ok(WebhookResponse {
            status,
            body: WebhookResponse::parse_body(&text),
        })
    }
}
