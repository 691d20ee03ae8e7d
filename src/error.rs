//! Error types for PokeAPI operations.

use thiserror::Error;

/// Errors that can occur during PokeAPI operations.
///
/// HTTP failure statuses are mapped to dedicated variants (`NotFound`,
/// `RateLimited`, `Server`) so callers can match narrowly; any other
/// status >= 400 surfaces as the generic [`Api`](PokeApiError::Api)
/// variant. Matching on `PokeApiError` itself handles all kinds uniformly.
#[derive(Debug, Error)]
pub enum PokeApiError {
    /// Unexpected HTTP failure status not otherwise classified.
    #[error("unexpected HTTP error {status}")]
    Api { status: u16 },

    /// Pokemon not found (404).
    #[error("pokemon '{identifier}' not found")]
    NotFound { identifier: String },

    /// Request exceeded the configured timeout.
    #[error("request to PokeAPI timed out")]
    Timeout,

    /// Rate limited by the API (429).
    #[error("rate limited by PokeAPI")]
    RateLimited,

    /// Server-side error (5xx).
    #[error("PokeAPI server error")]
    Server,

    /// Transport-level failure (DNS, connection refused, TLS, ...).
    #[error("network error while calling PokeAPI: {0}")]
    Network(#[source] reqwest::Error),

    /// Response body was not the expected JSON shape.
    #[error("failed to decode PokeAPI response: {0}")]
    Decode(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl PokeApiError {
    /// Whether retrying the call externally could plausibly succeed.
    ///
    /// The client itself never retries; this is a hint for callers that
    /// implement their own retry policy.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PokeApiError::Timeout | PokeApiError::RateLimited | PokeApiError::Server
        )
    }
}

/// Result type alias for PokeAPI operations.
pub type Result<T> = core::result::Result<T, PokeApiError>;
