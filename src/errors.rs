use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::booking::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::json!({
                    "error": self.to_string(),
                    "code": e.code(),
                    "field": e.field().as_str(),
                    "message": e.user_message(),
                }),
            ),
            AppError::BadRequest(_) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": self.to_string() }),
            ),
            AppError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": self.to_string() }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
