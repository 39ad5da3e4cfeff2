//! Error-to-response mapping
//!
//! Translates the domain taxonomy into HTTP statuses with a structured
//! `{"error": ...}` body. Chat failures absorbed by the retry fallback
//! never reach this path; what arrives here is validation (400), upstream
//! completion problems (502), and internal failures (500).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use vca_domain::error::Error;

use crate::models::ErrorBody;

/// Wrapper making domain errors usable as handler rejections
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::Validation { .. } => StatusCode::BAD_REQUEST,
            Error::Network { .. } | Error::Completion { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Validation messages are user-facing verbatim; everything else is
        // reported with its taxonomy prefix and logged.
        let message = match &self.0 {
            Error::Validation { message } => message.clone(),
            other => {
                error!(error = %other, "request failed");
                other.to_string()
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
