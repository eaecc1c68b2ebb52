//! Error types for search orchestration and reindexing.

use thiserror::Error;

use sift_solr::SolrError;
use sift_store::StoreError;

/// Errors that can occur while executing a search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// No object kind was requested; surfaced before any transport call.
    #[error("no search kind requested")]
    MissingKind,

    /// An index document lacked the primary-key id field, so it cannot be
    /// hydrated from the store.
    #[error("index document missing primary-key id field")]
    MissingId,

    /// The index transport failed.
    #[error(transparent)]
    Index(#[from] SolrError),

    /// The document store transport failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Fatal errors that abort a reindex.
///
/// A store `NotFound` while listing a kind is not fatal; it is consumed
/// into the per-kind report instead of surfacing here.
#[derive(Debug, Error)]
pub enum ReindexError {
    /// The index transport failed.
    #[error(transparent)]
    Index(#[from] SolrError),

    /// The document store transport failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
