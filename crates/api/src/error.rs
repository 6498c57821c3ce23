use assetdesk_core::error::{CoreError, ErrorKind};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps an already classified [`CoreError`]; this layer only maps its
/// [`ErrorKind`] to a status and serializes it.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct AppError(#[from] pub CoreError);

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.0.kind();
        let status = StatusCode::from_u16(kind.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = match (kind, self.0) {
            (ErrorKind::Validation, CoreError::Validation(errors)) => json!({
                "message": "Validation failed",
                "code": kind.code(),
                "errors": errors,
            }),
            // Already logged with entity and operation where it was classified.
            (ErrorKind::Internal, _) => json!({
                "message": "An internal error occurred",
                "code": kind.code(),
            }),
            (ErrorKind::Validation | ErrorKind::NotFound | ErrorKind::Conflict, err) => json!({
                "message": message(&err),
                "code": kind.code(),
            }),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Wire message for non-internal errors.
fn message(err: &CoreError) -> String {
    match err {
        CoreError::Conflict(msg) => msg.clone(),
        other => other.to_string(),
    }
}
