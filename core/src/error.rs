//! Error types for the albums API client.
//!
//! # Design
//! Every non-2xx response lands in `HttpError` with the raw status code and
//! body, 404 included; `is_not_found` covers the common check. Transport,
//! decode and encode failures each get their own variant so callers can tell
//! "the server said no" apart from "we never got a usable answer".

use thiserror::Error;

/// Boxed error returned by `Transport` implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by `AlbumsApi` and `AlbumsClient`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection, DNS, timeout).
    #[error("transport failure: {0}")]
    Transport(#[source] BoxError),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body did not match the expected envelope.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The mutation payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("query encoding failed: {0}")]
    Query(#[from] serde_html_form::ser::Error),

    /// An update payload carried no album id to address.
    #[error("album id is required for update")]
    MissingId,

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
