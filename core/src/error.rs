//! Error types for the API client.
//!
//! # Design
//! `TransportError` is whatever the network layer reported: a non-2xx
//! status, a timeout, or a connection failure. The client never classifies
//! or rewrites it; `ApiError::Transport` carries it to the caller as-is.
//! The remaining `ApiError` variants cover the JSON boundary on either side
//! of the round-trip.

use crate::http::HttpMethod;

/// Errors raised by a `Transport` while executing a request.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The server answered with a status outside 2xx.
    #[error("HTTP {status} for {method} {url}: {body}")]
    Status {
        method: HttpMethod,
        url: String,
        status: u16,
        body: String,
    },

    /// The request did not complete before its deadline.
    #[error("request timed out")]
    Timeout,

    /// DNS, TCP or TLS failure before a response arrived.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The request could not be expressed on the wire (bad URL, bad header).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("transport failure: {0}")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// The HTTP status attached to the error, if the server responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors returned by `HttpClient` verb methods.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Propagated unchanged from the transport.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The request payload or query could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(#[source] serde_json::Error),

    /// The 2xx response body does not match the requested result type.
    #[error("deserialization failed (HTTP {status}): {source}")]
    DeserializationError {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// The transport error behind this failure, if there is one.
    pub fn as_transport(&self) -> Option<&TransportError> {
        match self {
            ApiError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

/// Errors raised while loading a `ClientConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid client config: {0}")]
    Parse(#[from] serde_json::Error),
}
