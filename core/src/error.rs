//! Error types for the rides API client.
//!
//! # Design
//! Every non-2xx response lands in `Http` with the raw status code and body;
//! the API has no per-status semantics worth separate variants. `Network` is
//! the "no response at all" case (DNS, refused connection, timeout) and is
//! produced only by the transport — the sans-IO build/parse layer can never
//! return it.

use std::fmt;

/// Errors returned by `RidesClient` build/parse methods and the `Transport`.
#[derive(Debug)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    Decode(String),

    /// The request payload could not be serialized to JSON.
    Encode(String),

    /// No response was obtained; carries the underlying transport message.
    Network(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::Decode(msg) => write!(f, "decoding response failed: {msg}"),
            ApiError::Encode(msg) => write!(f, "encoding request failed: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
