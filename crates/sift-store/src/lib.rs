//! HTTP transport to the backing document store.
//!
//! The document store is the system of record: the index holds only a
//! flattened, searchable projection, and every search result is hydrated
//! back into a full object from here. This crate is a thin, blocking
//! request/response boundary exposing the four operations the search layer
//! needs: bulk-get by id, list-by-kind, bag/item listing, and resubmitting
//! an object for indexing.
//!
//! The store makes no ordering promise for bulk-gets; callers that care
//! about order (the search orchestrator does) must re-sort.

#![warn(missing_docs)]

mod client;
mod error;
mod types;

pub use client::StoreClient;
pub use error::StoreError;
pub use types::ObjectDoc;
