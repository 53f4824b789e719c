//! Error handling for goanalyzer-http
//!
//! Analysis itself cannot fail; these errors come from the boundary checks
//! around it.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use goanalyzer_core::Error as CoreError;
use serde_json::json;
use std::cmp::PartialEq;
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Rejected by the analyzer boundary
    #[error(transparent)]
    Analysis(#[from] CoreError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PartialEq<StatusCode> for AppError {
    fn eq(&self, status_code: &StatusCode) -> bool {
        let (error_status, _) = self.status_and_message();
        &error_status == status_code
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        self.status_and_message().0
    }

    /// Get the status code and error message for this error
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Analysis(err @ CoreError::InputTooLarge { .. }) => {
                (StatusCode::PAYLOAD_TOO_LARGE, err.to_string())
            }
            Self::Analysis(err @ CoreError::Config(_)) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = self.status_and_message();
        tracing::warn!(%status, "request rejected: {}", error_message);

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
