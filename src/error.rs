// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use thiserror::Error;

use crate::gatekeeper::ValidationIssue;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // 400 Bad Request
    #[error("{0}")]
    BadRequest(String),

    // 400 Bad Request with every accumulated issue
    #[error("request failed validation with {} issue(s)", .0.len())]
    Validation(Vec<ValidationIssue>),

    // 404 Not Found
    #[error("{0}")]
    NotFound(String),

    // 413 Payload Too Large
    #[error("{0}")]
    PayloadTooLarge(String),

    // 500 Internal Server Error: a gate stage ran before the stage it depends on
    #[error("stage '{stage}' requires {requirement}")]
    PreconditionNotMet {
        stage: &'static str,
        requirement: &'static str,
    },
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::Validation(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::PayloadTooLarge(_) => 413,
            ApiError::PreconditionNotMet { .. } => 500,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> String {
        match self {
            ApiError::PreconditionNotMet { .. } => "Internal Server Error".to_string(),
            other => other.to_string(),
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::Validation(issues) => json!({ "errors": issues }),
            _ => json!({ "error": self.message() }),
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn validation(issues: Vec<ValidationIssue>) -> Self {
        ApiError::Validation(issues)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        ApiError::PayloadTooLarge(message.into())
    }

    pub fn precondition_not_met(stage: &'static str, requirement: &'static str) -> Self {
        ApiError::PreconditionNotMet { stage, requirement }
    }
}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}
