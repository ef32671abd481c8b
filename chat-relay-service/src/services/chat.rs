use crate::models::{ChatRequest, ChatResponse};
use crate::services::metrics::record_webhook_outcome;
use crate::services::WebhookClient;
use service_core::error::AppError;
use validator::Validate;

/// Validate a chat request and forward it to the webhook.
///
/// Validation failures return before any network call is made. Downstream
/// failures are returned to the caller; nothing is retried or kept.
#[tracing::instrument(skip(webhook, request), fields(session_id = %request.session_id))]
pub async fn submit_chat_request(
    webhook: &WebhookClient,
    request: ChatRequest,
) -> Result<ChatResponse, AppError> {
    request.validate()?;

    tracing::info!(
        article_url = %request.article_url,
        question_length = request.user_question.len(),
        "Received chat request"
    );
    tracing::debug!(payload = ?request, url = %webhook.url(), "Sending payload to webhook");

    match webhook.forward(&request).await {
        Ok(response) => {
            record_webhook_outcome("success");
            Ok(ChatResponse::success(
                response.status,
                request.session_id,
                response.body,
            ))
        }
        Err(e) => {
            record_webhook_outcome(e.outcome());
            Err(e.into())
        }
    }
}
