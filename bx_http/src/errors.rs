use bx_ratelimit::RateLimitError;
use bytes::Bytes;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpError {
    /// Missing or invalid client setting, raised before any request is sent
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Connection failure, timeout or interrupted body read
    #[error("HTTP request failed: {source} (API endpoint: {endpoint})")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-200 response; the body is kept as received and never parsed
    #[error("Status code: {status} (API endpoint: {endpoint})")]
    Status { endpoint: String, status: String, body: Bytes },

    /// Body is not JSON or does not have the `{success, message, result}` shape
    #[error("Invalid response envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    /// Envelope reported `success: false`; holds the server message verbatim
    #[error("{0}")]
    Api(String),

    /// `result` does not match the record type expected for the endpoint
    #[error("Failed to decode result (API endpoint: {endpoint}): {source}")]
    Payload {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl HttpError {
    /// Endpoint the failing request was sent to, when known
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            HttpError::Transport { endpoint, .. }
            | HttpError::Status { endpoint, .. }
            | HttpError::Payload { endpoint, .. } => Some(endpoint.as_str()),
            HttpError::Config(_) | HttpError::Envelope(_) | HttpError::Api(_) => None,
        }
    }
}

impl From<RateLimitError> for HttpError {
    fn from(err: RateLimitError) -> Self {
        HttpError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HttpError>;
