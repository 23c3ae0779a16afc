// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorBody;
use crate::services::GenerationError;

pub const INVALID_MESSAGE: &str = "Message is required and must be a string";
pub const UPSTREAM_FAILED: &str = "Failed to get response from AI";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Message is required and must be a string")]
    InvalidInput,

    #[error("Failed to get response from AI: {0}")]
    Upstream(#[from] GenerationError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidInput => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: INVALID_MESSAGE.to_string(),
                    details: None,
                },
            ),
            AppError::Upstream(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: UPSTREAM_FAILED.to_string(),
                    details: Some(err.to_string()),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
