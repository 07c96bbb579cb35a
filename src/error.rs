//! Error types for the profile service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::nexon::NexonError;
use crate::scouter::ScouterError;

// == App Error Enum ==
/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Nothing stored or found for the request
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The upstream profile API failed
    #[error("Upstream error: {0}")]
    Upstream(#[from] ScouterError),

    /// A Nexon Open API call failed; the message names the failing step
    #[error(transparent)]
    Nexon(#[from] NexonError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Nexon(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            AppError::Nexon(err) if err.is_rate_limited() => StatusCode::TOO_MANY_REQUESTS,
            AppError::Nexon(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::NotFound(msg) | AppError::InvalidRequest(msg) => msg.clone(),
            AppError::Upstream(err) => err.to_string(),
            AppError::Nexon(err) => err.to_string(),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the service.
pub type Result<T> = std::result::Result<T, AppError>;
