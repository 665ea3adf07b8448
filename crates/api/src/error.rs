use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use biblioteca_core::error::CoreError;

/// Static body for every 500 response. Driver errors are logged with
/// full detail server-side; clients only ever see this message.
const INTERNAL_ERROR_BODY: &str = "erro interno no servidor";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the database variant.
/// Implements [`IntoResponse`] to produce the plain-text status
/// contract: 404 with a per-entity message, 400 with the validation
/// message, 500 with a static generic body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `biblioteca_core`.
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
        let (status, body) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        INTERNAL_ERROR_BODY.to_string(),
                    )
                }
            },
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_BODY.to_string(),
                )
            }
        };

        (status, body).into_response()
    }
}
