pub mod chat;
pub mod metrics;
pub mod webhook;

pub use chat::submit_chat_request;
pub use webhook::{WebhookClient, WebhookError, WebhookResponse};
