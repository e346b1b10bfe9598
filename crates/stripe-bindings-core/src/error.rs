//! Error payloads returned by the API.
//!
//! Every non-2xx response carries a body of the form
//! `{"error": {"type": "...", "message": "...", ...}}`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The `type` field of an API error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    /// Problem on Stripe's side.
    ApiError,
    /// The card could not be charged.
    CardError,
    /// An idempotency key was reused with different parameters.
    IdempotencyError,
    /// The request had invalid parameters.
    InvalidRequestError,
    /// The API key was missing or invalid.
    AuthenticationError,
    /// Too many requests hit the API too quickly.
    RateLimitError,
    /// A type this library does not know, a missing `type`, or an
    /// undecodable error body.
    #[default]
    #[serde(other)]
    Unknown,
}

impl ApiErrorKind {
    /// The wire name of this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ApiError => "api_error",
            Self::CardError => "card_error",
            Self::IdempotencyError => "idempotency_error",
            Self::InvalidRequestError => "invalid_request_error",
            Self::AuthenticationError => "authentication_error",
            Self::RateLimitError => "rate_limit_error",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// API error response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    /// Error details.
    pub error: ErrorDetail,
}

/// API error detail.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    /// Error type.
    #[serde(default, rename = "type")]
    pub kind: ApiErrorKind,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
    /// Short machine-readable code (e.g. `resource_missing`).
    #[serde(default)]
    pub code: Option<String>,
    /// Parameter that caused the error.
    #[serde(default)]
    pub param: Option<String>,
    /// Card issuer's reason for a decline.
    #[serde(default)]
    pub decline_code: Option<String>,
}
