//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Errors raised while creating a checkout session
#[derive(Error, Debug)]
pub enum PaymentError {
    /// The payment provider rejected the request
    #[error("Stripe error: {0}")]
    Provider(String),

    /// The provider could not be reached or timed out
    #[error("Network error: {0}")]
    Network(String),

    /// Provider credentials or settings are missing
    #[error("Configuration error: {0}")]
    Config(String),

    /// A session was created but carries no redirect URL
    #[error("Stripe error: {0}")]
    MissingUrl(String),
}

impl PaymentError {
    /// The underlying error text without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            PaymentError::Provider(msg)
            | PaymentError::Network(msg)
            | PaymentError::Config(msg)
            | PaymentError::MissingUrl(msg) => msg,
        }
    }

    /// Stable identifier of the error kind, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            PaymentError::Provider(_) => "provider",
            PaymentError::Network(_) => "network",
            PaymentError::Config(_) => "config",
            PaymentError::MissingUrl(_) => "missing_url",
        }
    }
}

impl From<stripe::StripeError> for PaymentError {
    fn from(err: stripe::StripeError) -> Self {
        match err {
            stripe::StripeError::Stripe(request) => {
                let message = request
                    .message
                    .clone()
                    .unwrap_or_else(|| request.to_string());
                PaymentError::Provider(message)
            }
            stripe::StripeError::Timeout => {
                PaymentError::Network("timeout communicating with stripe".into())
            }
            stripe::StripeError::ClientError(msg) => PaymentError::Network(msg),
            other => PaymentError::Provider(other.to_string()),
        }
    }
}
