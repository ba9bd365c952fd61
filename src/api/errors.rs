/// Errors from the REST transport layer.
use thiserror::Error;

/// Failures surfaced by the remote API. Propagated to the user unchanged; never retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, TLS, connection, timeout).
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        /// API path, e.g. `/libraries/install`.
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{endpoint} returned {status}{}: {message}", .error_code.as_deref().map(|c| format!(" ({c})")).unwrap_or_default())]
    Http {
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Platform error code such as `RESOURCE_DOES_NOT_EXIST`, when the body carried one.
        error_code: Option<String>,
        message: String,
    },

    /// The response body was not the JSON we expected.
    #[error("could not decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP client itself could not be constructed.
    #[error("could not initialise HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    /// Machine-readable code for the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Transport { .. } | Self::Client(_) => "transport_error",
            Self::Http {
                error_code: Some(code),
                ..
            } => code,
            Self::Http { .. } => "http_error",
            Self::Decode { .. } => "decode_error",
        }
    }
}
