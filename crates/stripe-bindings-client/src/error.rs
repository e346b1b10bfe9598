//! Client error types.

use stripe_bindings_core::{ApiErrorKind, IdError};

/// Errors that can occur when calling the Stripe API.
#[derive(Debug, thiserror::Error)]
pub enum StripeError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Stripe returned an error response.
    #[error("Stripe API error ({status}): {kind} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error type.
        kind: ApiErrorKind,
        /// Error message.
        message: String,
        /// Error code.
        code: Option<String>,
        /// Parameter that caused the error.
        param: Option<String>,
        /// Card issuer's decline reason.
        decline_code: Option<String>,
        /// Value of the `Request-Id` response header.
        request_id: Option<String>,
    },

    /// Response body could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An identifier failed validation.
    #[error("Invalid identifier: {0}")]
    InvalidId(#[from] IdError),

    /// Request URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl StripeError {
    /// HTTP status of an API error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Error type of an API error.
    #[must_use]
    pub fn kind(&self) -> Option<ApiErrorKind> {
        match self {
            Self::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Whether the API reported that the object does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
