use thiserror::Error;

use crate::endpoint::Endpoint;

/// Errors raised on our side of the wire.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The configured base URL is not usable.
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A successful response did not have the expected JSON shape.
    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Returns `true` when the request hit the configured timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }
}
