use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;
use utoipa::ToSchema;

use crate::{
    codec::CodecError,
    dao::storage::StorageError,
    dto::validation::{FieldFailure, RequestValidationError},
};

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage backend failed or refused the operation.
    #[error("storage failure")]
    Storage(#[source] StorageError),
    /// Invalid input reached the service despite request validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// A stored record could not be converted back to its display form.
    #[error("corrupt record `{id}`")]
    CorruptRecord {
        id: String,
        #[source]
        source: CodecError,
    },
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        ServiceError::Storage(err)
    }
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request parameters and/or body failed validation.
    #[error(transparent)]
    InvalidRequest(#[from] RequestValidationError),
    /// Operation failed; carries the fixed message for the endpoint.
    #[error("{0}")]
    BadRequest(String),
    /// Requested resource not found.
    #[error("{0}")]
    NotFound(String),
}

impl AppError {
    /// Map a service failure to a response carrying the endpoint's fixed `message`.
    ///
    /// Only not-found failures keep their own status; the cause of every other
    /// failure is logged and hidden from the client.
    pub fn from_service(err: ServiceError, message: &'static str) -> Self {
        match err {
            ServiceError::NotFound(detail) => {
                warn!(%detail, "{message}");
                AppError::NotFound(message.to_owned())
            }
            other => {
                warn!(error = ?other, "{message}");
                AppError::BadRequest(message.to_owned())
            }
        }
    }
}

/// Error envelope shared by every endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Always `true`.
    pub error: bool,
    pub msg: String,
    /// Field-level details, present for validation failures only.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldFailure>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::InvalidRequest(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let msg = self.to_string();
        let fields = match self {
            AppError::InvalidRequest(err) => err.into_failures(),
            _ => Vec::new(),
        };

        let payload = Json(ErrorBody {
            error: true,
            msg,
            fields,
        });

        (status, payload).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::validation::RequestPart;

    #[test]
    fn store_failures_collapse_to_the_endpoint_message() {
        let source = std::io::Error::other("disk on fire");
        let err = AppError::from_service(
            ServiceError::Storage(StorageError::unavailable("boom".into(), source)),
            "Failed to list games",
        );

        assert!(matches!(&err, AppError::BadRequest(msg) if msg == "Failed to list games"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_keeps_its_status() {
        let err = AppError::from_service(
            ServiceError::NotFound("ad `x`".into()),
            "Failed to fetch the discord of the given ad",
        );
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_failures_are_bad_requests() {
        let err: AppError = RequestValidationError::Params(vec![FieldFailure::malformed(
            RequestPart::Params,
            "bad id",
        )])
        .into();
        assert_eq!(err.to_string(), "Invalid request parameter(s)");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
