use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::models::{ChatRequest, ChatResponse};
use crate::services::submit_chat_request;
use crate::startup::AppState;
use service_core::error::AppError;

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::InvalidBody(e.body_text()))?;

    let response = submit_chat_request(&state.webhook, request).await?;
    Ok(Json(response))
}
