use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Chat question about an article, forwarded to the webhook as-is.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "Question cannot be empty"))]
    pub user_question: String,
    #[validate(email(message = "Invalid email address"))]
    pub user_email: String,
    #[validate(length(min = 1, message = "Session ID cannot be empty"))]
    pub session_id: String,
    #[validate(length(min = 1, message = "Article URL cannot be empty"))]
    pub article_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub status: String,
    pub webhook_status: u16,
    pub session_id: String,
    pub data: Value,
}

impl ChatResponse {
    pub fn success(webhook_status: u16, session_id: String, data: Value) -> Self {
        Self {
            status: "success".to_string(),
            webhook_status,
            session_id,
            data,
        }
    }
}
