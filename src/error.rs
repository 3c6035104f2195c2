use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("SerpAPI key not configured")]
    ConfigMissing,

    #[error("SerpAPI returned status {0}")]
    UpstreamStatus(u16),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message placed in the `{"error": ...}` search envelope
    ///
    /// Never includes upstream bodies or transport internals.
    pub fn envelope_message(&self) -> String {
        match self {
            AppError::ConfigMissing => "SerpAPI key not configured".to_string(),
            AppError::UpstreamStatus(status) => format!("SerpAPI error {}", status),
            AppError::Transport(_) => "Network error contacting SerpAPI".to_string(),
            AppError::InvalidInput(_) | AppError::Internal(_) => {
                "Unexpected server error".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::UpstreamStatus(_) | AppError::Transport(_) => {
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
            AppError::ConfigMissing | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
