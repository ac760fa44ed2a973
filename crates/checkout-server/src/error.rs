//! Error Types
//!
//! `CallableError` is what a caller sees; it renders as the callable error
//! envelope `{"error": {"status": ..., "message": ...}}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use checkout_payments::PaymentError;
use serde::Serialize;
use thiserror::Error;

/// Errors returned from a callable invocation
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CallableError {
    /// No verified caller identity
    #[error("{0}")]
    Unauthenticated(String),

    /// Request body is not a valid callable envelope
    #[error("{0}")]
    InvalidArgument(String),

    /// Checkout session creation failed; carries the raw error text
    #[error("{0}")]
    Internal(String),
}

impl CallableError {
    pub fn unauthenticated() -> Self {
        CallableError::Unauthenticated("User must be authenticated".into())
    }

    /// Wire status name
    pub fn status(&self) -> &'static str {
        match self {
            CallableError::Unauthenticated(_) => "UNAUTHENTICATED",
            CallableError::InvalidArgument(_) => "INVALID_ARGUMENT",
            CallableError::Internal(_) => "INTERNAL",
        }
    }

    pub fn http_status(&self) -> StatusCode {
        match self {
            CallableError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            CallableError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            CallableError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PaymentError> for CallableError {
    fn from(err: PaymentError) -> Self {
        CallableError::Internal(err.message().to_string())
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    status: &'static str,
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope<'a> {
    error: ErrorBody<'a>,
}

impl IntoResponse for CallableError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let body = ErrorEnvelope {
            error: ErrorBody {
                status: self.status(),
                message: &message,
            },
        };
        (self.http_status(), Json(body)).into_response()
    }
}

/// Startup configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("{name} is not a valid URL: {reason}")]
    InvalidUrl { name: &'static str, reason: String },

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}
