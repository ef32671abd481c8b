use chat_relay_service::config::{RelayConfig, WebhookConfig};
use chat_relay_service::startup::Application;
use serde_json::{json, Value};
use service_core::config::Config as CoreConfig;
use std::time::Duration;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the relay on a random port, forwarding to `webhook_url`.
    pub async fn spawn(webhook_url: &str) -> Self {
        Self::spawn_with_timeout(webhook_url, Duration::from_secs(5)).await
    }

    pub async fn spawn_with_timeout(webhook_url: &str, timeout: Duration) -> Self {
        let config = RelayConfig {
            common: CoreConfig { port: 0 },
            webhook: WebhookConfig {
                url: webhook_url.to_string(),
                timeout,
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub async fn post_chat(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}/chat", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

pub fn chat_body() -> Value {
    json!({
        "user_question": "Summarize the key findings",
        "user_email": "reader@example.com",
        "session_id": "session-7f3a",
        "article_url": "https://example.com/articles/rust-async"
    })
}
