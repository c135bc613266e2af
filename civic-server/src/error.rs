use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::MessageResponse;
use thiserror::Error;

/// Per-request failure outcomes. None of them is fatal to the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServerError {
    /// Required field missing or empty (400, no body)
    #[error("Bad request")]
    BadRequest,

    /// Status update for an unknown complaint id (404, no body)
    #[error("Complaint not found")]
    NotFound,

    /// Org login mismatch (401 with message body)
    #[error("Invalid credentials")]
    Unauthorized,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::BadRequest => StatusCode::BAD_REQUEST.into_response(),
            ServerError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ServerError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(MessageResponse::new(self.to_string())),
            )
                .into_response(),
        }
    }
}

/// 处理器的 Result 类型别名
pub type AppResult<T> = std::result::Result<T, ServerError>;
