pub mod codes;
pub mod handlers;
pub mod messages;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// JSON body of every error response.
///
/// ```json
/// {
///   "message": "Gagal mengambil data produk dari database.",
///   "error": "Table 'toko.produk' doesn't exist",
///   "hint": "Pastikan Anda sudah meng-import file .sql ..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable summary of what failed
    pub message: String,
    /// Underlying error text, when there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Remediation advice for the operator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
            hint: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    /// A failed statement. The database's own message is returned to the
    /// caller in `error`.
    #[error("{message}: {source}")]
    Database {
        message: String,
        #[source]
        source: DbErr,
        hint: Option<String>,
    },
}

impl AppError {
    pub fn database(message: impl Into<String>, source: DbErr) -> Self {
        AppError::Database {
            message: message.into(),
            source,
            hint: None,
        }
    }

    /// Attach a hint to a database error. Other variants are returned as is.
    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        match self {
            AppError::Database {
                message, source, ..
            } => AppError::Database {
                message,
                source,
                hint: Some(hint.into()),
            },
            other => other,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(e) => e.status(),
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn db_error_code(error: &DbErr) -> ErrorCode {
    match error {
        DbErr::Conn(_) => ErrorCode::DatabaseConnection,
        DbErr::Query(_) | DbErr::Exec(_) => ErrorCode::DatabaseError,
        _ => ErrorCode::DatabaseUnhandled,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                let message = match e {
                    JsonRejection::JsonDataError(_) => messages::INVALID_BODY,
                    _ => messages::INVALID_JSON,
                };
                ErrorResponse::new(message).with_error(e.body_text())
            }
            AppError::BadRequest(msg) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Bad request: {}",
                    msg
                );
                ErrorResponse::new(msg)
            }
            AppError::NotFound(msg) => {
                tracing::info!(
                    error_code = ErrorCode::NotFound.code(),
                    "Not found: {}",
                    msg
                );
                ErrorResponse::new(msg)
            }
            AppError::Database {
                message,
                source,
                hint,
            } => {
                let code = db_error_code(&source);
                tracing::error!(
                    error_code = code.code(),
                    error_kind = code.as_str(),
                    "{}: {:?}",
                    message,
                    source
                );
                ErrorResponse {
                    message,
                    error: Some(source.to_string()),
                    hint,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
