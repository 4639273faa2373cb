use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use heatmap_app::{ApiError, AppError};

/// JSON error body for the non-SVG routes.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    body: ApiError,
}

impl HttpError {
    fn with_code(status: StatusCode, message: impl Into<String>, code: &str) -> Self {
        Self {
            status,
            body: ApiError {
                status: status.as_u16(),
                message: message.into(),
                code: Some(code.to_string()),
            },
        }
    }

    pub fn not_found() -> Self {
        Self::with_code(StatusCode::NOT_FOUND, "not found", "not_found")
    }

    /// A blocking task panicked or was cancelled.
    pub fn task_failed(err: tokio::task::JoinError) -> Self {
        Self::with_code(StatusCode::INTERNAL_SERVER_ERROR, err.to_string(), "task_failed")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<AppError> for HttpError {
    fn from(err: AppError) -> Self {
        let body = ApiError::from(err);
        let status = StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self { status, body }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::warn!(status = self.status.as_u16(), message = %self.body.message, "request failed");
        }
        (self.status, Json(self.body)).into_response()
    }
}
