use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

use crate::messages;

/// The statement a database failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::List => messages::LIST_FAILED,
            Operation::Get => messages::GET_FAILED,
            Operation::Create => messages::CREATE_FAILED,
            Operation::Update => messages::UPDATE_FAILED,
            Operation::Delete => messages::DELETE_FAILED,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Carries the id exactly as it appeared in the path.
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Database error during {operation}: {source}")]
    Database {
        operation: Operation,
        #[source]
        source: DbErr,
    },
}

impl ProductError {
    pub fn database(operation: Operation) -> impl FnOnce(DbErr) -> Self {
        move |source| ProductError::Database { operation, source }
    }
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::NotFound(_) => AppError::NotFound(messages::NOT_FOUND.to_string()),
            ProductError::Database {
                operation: Operation::List,
                source,
            } => AppError::database(messages::LIST_FAILED, source)
                .with_hint(messages::LIST_FAILED_HINT),
            ProductError::Database { operation, source } => {
                AppError::database(operation.failure_message(), source)
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
