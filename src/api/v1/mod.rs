//! V1 API handlers.

mod attachments;
mod comments;
mod tasks;
mod users;

#[cfg(test)]
mod test_support;

pub use attachments::*;
pub use comments::*;
pub use tasks::*;
pub use users::*;

use axum::{Json, http::StatusCode};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::service::{ErrorKind, ServiceError};

/// Error response DTO
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Entity not found: Task with id '3f2b8f0e-6a1c-4d52-9a43-0d6c1f1b7e10'")]
    pub error: String,
}

/// Error half of every handler result.
pub type HandlerError = (StatusCode, Json<ErrorResponse>);

/// Map a service error onto its HTTP status and body.
pub(crate) fn error_response(err: ServiceError) -> HandlerError {
    let status = match err.kind() {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Storage => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!(error = %err, "request failed");
    }

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// Lenient numeric query parameter: absent or unparsable values are `None`.
pub(crate) fn lenient_i64(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbError;

    #[test]
    fn error_kinds_map_to_statuses() {
        let cases = [
            (ServiceError::validation("bad"), StatusCode::BAD_REQUEST),
            (
                ServiceError::from(DbError::not_found("Task", "x")),
                StatusCode::NOT_FOUND,
            ),
            (
                ServiceError::from(DbError::Conflict {
                    entity_type: "User".to_string(),
                    message: "duplicate".to_string(),
                }),
                StatusCode::CONFLICT,
            ),
            (
                ServiceError::from(DbError::Storage {
                    message: "disk I/O error".to_string(),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let (status, Json(body)) = error_response(err);
            assert_eq!(status, expected);
            assert!(!body.error.is_empty());
        }
    }

    #[test]
    fn lenient_i64_ignores_garbage() {
        assert_eq!(lenient_i64(Some("25")), Some(25));
        assert_eq!(lenient_i64(Some(" 3 ")), Some(3));
        assert_eq!(lenient_i64(Some("ten")), None);
        assert_eq!(lenient_i64(Some("")), None);
        assert_eq!(lenient_i64(None), None);
    }
}
