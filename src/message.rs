// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<Value>,
    // Accepted for client compatibility, never forwarded upstream.
    #[serde(default)]
    pub history: Option<Value>,
}

impl ChatRequest {
    /// The message text, or `InvalidInput` if it is missing, not a string, or empty.
    pub fn validated_message(&self) -> Result<&str, AppError> {
        match &self.message {
            Some(Value::String(text)) if !text.is_empty() => Ok(text),
            _ => Err(AppError::InvalidInput),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
