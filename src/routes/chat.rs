use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{debug, error, info};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, HealthResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    // An unreadable body carries no message.
    let Json(payload) = payload.map_err(|rejection| {
        debug!(%rejection, "Rejected chat request body");
        AppError::InvalidInput
    })?;

    let message = payload.validated_message()?;

    info!(message_len = message.len(), "Answering chat message");

    match state.chat.generate_reply(message).await {
        Ok(response) => Ok(Json(ChatResponse { response })),
        Err(err) => {
            error!(error = %err, details = ?err, "Error communicating with Gemini API");
            Err(AppError::Upstream(err))
        }
    }
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Chatbot API is running".to_string(),
    })
}
