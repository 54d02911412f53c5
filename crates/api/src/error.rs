use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds a database variant.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `roster_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, field, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    None,
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation { field, message } => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    Some(field.as_str()),
                    message.clone(),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        None,
                        "An internal error occurred".to_string(),
                    )
                }
            },
            AppError::Database(err) => classify_sqlx_error(err),
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(field) = field {
            body["field"] = json!(field);
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, field, and message.
///
/// - `RowNotFound` maps to 404.
/// - Foreign key violations on the state reference (error code 23503) map to
///   400 as a state validation failure. This is the transactional backstop:
///   if the referenced state vanishes between the existence check and the
///   insert, the constraint refuses the write instead of persisting a
///   dangling reference.
/// - Everything else maps to 500 with a sanitized message. Unexpected
///   persistence failures deliberately do NOT share 400 with validation
///   failures.
fn classify_sqlx_error(
    err: &sqlx::Error,
) -> (StatusCode, &'static str, Option<&'static str>, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            None,
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL foreign key violation: error code 23503.
            if db_err.code().as_deref() == Some("23503") {
                return (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    Some("state"),
                    "Referenced state does not exist".to_string(),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                None,
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                None,
                "An internal error occurred".to_string(),
            )
        }
    }
}
