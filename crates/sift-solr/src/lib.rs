//! HTTP transport to the Solr-style search index.
//!
//! A thin, blocking request/response boundary: `select` for queries and
//! `update` for the two index-maintenance operations (delete-by-query and
//! commit), both wrapped in the index's fixed XML envelope. Query text
//! passed to [`SolrClient::select`] must already be index-native; the
//! rewriting lives in `sift-query`.
//!
//! No retries and no caching happen here; errors propagate to the caller
//! as [`SolrError`].

#![warn(missing_docs)]

mod client;
mod error;
mod types;
mod xml;

pub use client::SolrClient;
pub use error::SolrError;
pub use types::{ResponseBody, SelectRequest, SelectResponse, doc_id};
