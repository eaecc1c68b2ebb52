//! Transport seams for the two external collaborators.
//!
//! The orchestrator and reindexer are written against these traits so
//! tests can substitute in-memory fakes; the production implementations
//! are the thin HTTP clients from `sift-solr` and `sift-store`.

use sift_solr::{SelectRequest, SelectResponse, SolrClient, SolrError};
use sift_store::{ObjectDoc, StoreClient, StoreError};

/// The search index boundary.
pub trait SearchIndex {
    /// Executes one query against the index.
    fn select(&self, request: &SelectRequest) -> Result<SelectResponse, SolrError>;

    /// Deletes every document matching `query`; not visible until committed.
    fn delete_by_query(&self, query: &str) -> Result<(), SolrError>;

    /// Commits pending index changes.
    fn commit(&self) -> Result<(), SolrError>;
}

/// The document store boundary.
pub trait ObjectStore {
    /// Fetches the full objects for `ids` in one round-trip, in an order of
    /// the store's choosing.
    fn bulk_get(&self, ids: &[String]) -> Result<Vec<ObjectDoc>, StoreError>;

    /// Lists every live instance of a builtin kind.
    fn list_all(&self, kind: &str) -> Result<Vec<ObjectDoc>, StoreError>;

    /// Lists the names of every data bag.
    fn list_bag_names(&self) -> Result<Vec<String>, StoreError>;

    /// Lists every item in the named data bag.
    fn list_items_in_bag(&self, bag: &str) -> Result<Vec<ObjectDoc>, StoreError>;

    /// Resubmits one stored object for indexing.
    fn submit_for_indexing(&self, kind: &str, object: &ObjectDoc) -> Result<(), StoreError>;
}

impl SearchIndex for SolrClient {
    fn select(&self, request: &SelectRequest) -> Result<SelectResponse, SolrError> {
        Self::select(self, request)
    }

    fn delete_by_query(&self, query: &str) -> Result<(), SolrError> {
        Self::delete_by_query(self, query)
    }

    fn commit(&self) -> Result<(), SolrError> {
        Self::commit(self)
    }
}

impl ObjectStore for StoreClient {
    fn bulk_get(&self, ids: &[String]) -> Result<Vec<ObjectDoc>, StoreError> {
        Self::bulk_get(self, ids)
    }

    fn list_all(&self, kind: &str) -> Result<Vec<ObjectDoc>, StoreError> {
        Self::list_all(self, kind)
    }

    fn list_bag_names(&self) -> Result<Vec<String>, StoreError> {
        Self::list_bag_names(self)
    }

    fn list_items_in_bag(&self, bag: &str) -> Result<Vec<ObjectDoc>, StoreError> {
        Self::list_items_in_bag(self, bag)
    }

    fn submit_for_indexing(&self, kind: &str, object: &ObjectDoc) -> Result<(), StoreError> {
        Self::submit_for_indexing(self, kind, object)
    }
}
