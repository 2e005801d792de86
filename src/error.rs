use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Errors raised while handling a request.
///
/// Classification itself cannot fail; these all come from the request boundary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    InvalidRequest(#[from] JsonRejection),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            // Keep the framework's distinction between 400, 415 and 422
            AppError::InvalidRequest(rejection) => rejection.status(),
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::InvalidRequest(rejection) => {
                tracing::debug!(status = status.as_u16(), error = %rejection, "Rejected request body");
                rejection.body_text()
            }
            AppError::NotFound(_) => self.to_string(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
