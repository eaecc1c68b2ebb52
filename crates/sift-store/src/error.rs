//! Error types for the document store transport.

use thiserror::Error;

/// Errors that can occur talking to the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested resource does not exist in the store.
    ///
    /// This is the one tolerated-absence variant: during a reindex it means
    /// "there happen to be none of these" rather than a failure of the
    /// store itself.
    #[error("not found in document store: {resource}")]
    NotFound {
        /// Description of the missing resource (kind or bag name).
        resource: String,
    },

    /// The request could not be sent or the response body not read.
    #[error("document store request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success HTTP status.
    #[error("document store returned HTTP {code}: {body}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode document store response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The client could not be constructed from the given configuration.
    #[error("failed to build document store client: {0}")]
    Build(String),
}
