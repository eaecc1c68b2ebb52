//! Error types for the index transport.

use thiserror::Error;

/// Errors that can occur talking to the search index.
#[derive(Debug, Error)]
pub enum SolrError {
    /// The request could not be sent or the response body not read.
    #[error("index request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The index answered with a non-success HTTP status.
    #[error("index returned HTTP {code}: {body}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode index response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The client could not be constructed from the given configuration.
    #[error("failed to build index client: {0}")]
    Build(String),
}
