//! Errors a single provider attempt can end with.
//!
//! The dispatcher never surfaces these to its caller; they decide whether the
//! chain moves on and end up in log lines or diagnostic text.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// Connection refused, DNS failure, timeout, or body read failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The body was not the JSON shape we expected.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Well-formed response without any generated text.
    #[error("response contained no text")]
    EmptyResponse,

    #[error("invalid value for header {0}")]
    InvalidHeader(&'static str),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
