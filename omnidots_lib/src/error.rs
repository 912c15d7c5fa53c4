//! Error types for the Honeycomb API client.

use thiserror::Error;

/// Base error type for Honeycomb client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The configured base server URL did not parse.
    #[error("invalid server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Network, DNS, or TLS failure from the underlying transport.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response claimed a JSON content type but the body did not parse.
    #[error("decoding {operation} response: {source}")]
    Decode {
        operation: &'static str,
        source: serde_json::Error,
    },

    /// A registered request editor refused the request.
    #[error("request editor failed: {0}")]
    Editor(String),

    #[error("{0}")]
    Other(String),
}
