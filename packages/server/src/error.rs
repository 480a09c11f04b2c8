use axum::http::StatusCode;
use common::storage::StorageError;
use sea_orm::DbErr;
use serde::Serialize;

use crate::event::HttpResponse;

/// Error body returned by every handler on failure.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// Missing or invalid input. Always raised before any write.
    Validation(String),
    MethodNotAllowed,
    /// The object store refused or failed an upload. The cause is returned to the client.
    Upload(String),
    Internal(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorBody { error: msg }),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorBody {
                    error: "Method not allowed".into(),
                },
            ),
            AppError::Upload(cause) => {
                tracing::error!("Upload failed: {}", cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: format!("Upload failed: {cause}"),
                    },
                )
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "An unexpected error occurred".into(),
                    },
                )
            }
        }
    }
}

impl From<AppError> for HttpResponse {
    fn from(err: AppError) -> Self {
        let (status, body) = err.status_and_body();
        HttpResponse::json(status, &body)
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Upload(err.to_string())
    }
}
