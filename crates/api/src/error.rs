use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::error::CoreError;
use roster_upstream::UpstreamError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`UpstreamError`] for failures
/// of the backing API, and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `roster_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure talking to the upstream employee API.
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request did not finish within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// A failure inside the middleware stack; the message is logged only.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::BadIdentifier(_) => {
                    (StatusCode::BAD_REQUEST, "BAD_IDENTIFIER", core.to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Upstream errors ---
            AppError::Upstream(err) => classify_upstream_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Timeout => (
                StatusCode::REQUEST_TIMEOUT,
                "REQUEST_TIMEOUT",
                "Request timed out".to_string(),
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_error()
            }
        };

        let body = json!({
            "status": "error",
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify an upstream error into an HTTP status, error code, and message.
///
/// - `NotFound` maps to 404.
/// - Rate limiting, server errors and everything else map to 500 with a
///   sanitized message; upstream is never retried.
fn classify_upstream_error(err: &UpstreamError) -> (StatusCode, &'static str, String) {
    match err {
        UpstreamError::NotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Employee not found".to_string(),
        ),
        UpstreamError::RateLimited { retry_after } => {
            tracing::error!(
                retry_after = retry_after.as_deref().unwrap_or("unspecified"),
                "Upstream rate limited the request"
            );
            internal_error()
        }
        other => {
            tracing::error!(error = %other, "Upstream error");
            internal_error()
        }
    }
}

fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
