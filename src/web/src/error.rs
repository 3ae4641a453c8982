use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chalk_core::CoreError;
use log::error;
use serde_json::json;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Boundary error: a structured kind + message pair. Store internals never
/// reach the response body beyond what the engine put into the message.
#[derive(Debug)]
pub enum ApiError {
    Core(CoreError),
    BadRequest(String),
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError::Core(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            ApiError::Core(e) => {
                let status = match e {
                    CoreError::NotFound(_) => StatusCode::NOT_FOUND,
                    CoreError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                    CoreError::Conflict(_) => StatusCode::CONFLICT,
                    CoreError::Upstream(_) => StatusCode::BAD_GATEWAY,
                };
                (status, e.kind(), e.to_string())
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, "invalid_input", message),
        };

        if status.is_server_error() {
            error!("request failed: {}", message);
        }

        (
            status,
            Json(json!({ "error": { "kind": kind, "message": message } })),
        )
            .into_response()
    }
}
