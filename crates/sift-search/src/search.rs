//! Search execution.
//!
//! One search is one index round-trip plus, when anything matched, one
//! bulk-fetch from the document store to hydrate the matching ids into
//! full objects.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use sift_query::{FilterSet, transform};
use sift_solr::{SelectRequest, doc_id};
use sift_store::ObjectDoc;

use crate::{
    error::SearchError,
    params::SearchParams,
    transport::{ObjectStore, SearchIndex},
};

/// One hydrated page of search results.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    /// Hydrated objects, in the index's result order.
    pub objects: Vec<ObjectDoc>,
    /// Offset of the first result within the full match set.
    pub start: u64,
    /// Total number of matches across all pages.
    pub total: u64,
    /// Raw index response header. Diagnostic metadata only; not part of
    /// the caller contract.
    pub response_header: Value,
}

/// Executes scoped searches against one database partition.
pub struct Searcher<'a, I, S> {
    /// Index transport.
    index: &'a I,
    /// Document store transport.
    store: &'a S,
    /// Database partition every query is scoped to.
    database: String,
}

impl<'a, I: SearchIndex, S: ObjectStore> Searcher<'a, I, S> {
    /// Creates a searcher scoped to `database`.
    pub fn new(index: &'a I, store: &'a S, database: impl Into<String>) -> Self {
        Self {
            index,
            store,
            database: database.into(),
        }
    }

    /// Runs one search and hydrates the results.
    ///
    /// Issues exactly one index round-trip, and exactly one store
    /// round-trip when the index returned any documents. A missing or
    /// empty `type` parameter fails before either.
    pub fn search(&self, params: &SearchParams) -> Result<Page, SearchError> {
        let kind = params
            .kind
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(SearchError::MissingKind)?;

        let request = SelectRequest {
            q: transform(&params.q),
            fq: FilterSet::scoped(&self.database, kind).render(),
            sort: params.sort.clone(),
            start: params.start,
            rows: params.rows,
        };

        let response = self.index.select(&request)?;
        let body = response.response;
        debug!(
            kind,
            num_found = body.num_found,
            returned = body.docs.len(),
            "index query complete"
        );

        if body.docs.is_empty() {
            return Ok(Page {
                objects: Vec::new(),
                start: body.start,
                total: body.num_found,
                response_header: response.response_header,
            });
        }

        let ids = body
            .docs
            .iter()
            .map(|doc| doc_id(doc).map(str::to_string).ok_or(SearchError::MissingId))
            .collect::<Result<Vec<_>, _>>()?;

        let fetched = self.store.bulk_get(&ids)?;
        let objects = in_index_order(&ids, fetched);

        Ok(Page {
            objects,
            start: body.start,
            total: body.num_found,
            response_header: response.response_header,
        })
    }
}

/// Reorders store results to match the index's id order.
///
/// The store makes no ordering promise, but callers see the index's sort.
/// Ids the store no longer has are dropped with a warning rather than
/// failing the whole page.
fn in_index_order(ids: &[String], fetched: Vec<ObjectDoc>) -> Vec<ObjectDoc> {
    let mut by_id: HashMap<String, ObjectDoc> =
        fetched.into_iter().map(|o| (o.id.clone(), o)).collect();

    let mut objects = Vec::with_capacity(ids.len());
    for id in ids {
        match by_id.remove(id) {
            Some(object) => objects.push(object),
            None => warn!(id, "indexed document missing from store; dropped from results"),
        }
    }
    objects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockIndex, MockStore, object, select_response};

    /// Default store with canned bulk-get objects.
    fn store_with(objects: Vec<ObjectDoc>) -> MockStore {
        MockStore {
            objects,
            ..MockStore::default()
        }
    }

    #[test]
    fn missing_kind_fails_before_any_transport_call() {
        let index = MockIndex::returning(select_response(&[], 0, 0));
        let store = store_with(Vec::new());
        let searcher = Searcher::new(&index, &store, "chef_prod");

        let err = searcher.search(&SearchParams::default()).unwrap_err();

        assert!(matches!(err, SearchError::MissingKind));
        assert!(index.selects.borrow().is_empty());
        assert!(store.calls.borrow().is_empty());
    }

    #[test]
    fn empty_kind_also_fails() {
        let index = MockIndex::returning(select_response(&[], 0, 0));
        let store = store_with(Vec::new());
        let searcher = Searcher::new(&index, &store, "chef_prod");

        let err = searcher.search(&SearchParams::for_kind("")).unwrap_err();
        assert!(matches!(err, SearchError::MissingKind));
    }

    #[test]
    fn zero_results_skip_the_store() {
        let index = MockIndex::returning(select_response(&[], 0, 5));
        let store = store_with(Vec::new());
        let searcher = Searcher::new(&index, &store, "chef_prod");

        let page = searcher.search(&SearchParams::for_kind("node")).unwrap();

        assert!(page.objects.is_empty());
        assert_eq!(page.start, 5);
        assert_eq!(page.total, 0);
        assert!(store.calls.borrow().is_empty());
    }

    #[test]
    fn query_is_transformed_and_filter_scoped() {
        let index = MockIndex::returning(select_response(&[], 0, 0));
        let store = store_with(Vec::new());
        let searcher = Searcher::new(&index, &store, "chef_prod");

        let mut params = SearchParams::for_kind("node");
        params.q = "role:web".to_string();
        searcher.search(&params).unwrap();

        let selects = index.selects.borrow();
        assert_eq!(selects.len(), 1);
        assert_eq!(selects[0].q, "content:role__=__web");
        assert_eq!(
            selects[0].fq,
            "+X_CHEF_database_CHEF_X:chef_prod +X_CHEF_type_CHEF_X:node"
        );
        assert_eq!(selects[0].sort, "X_CHEF_id_CHEF_X asc");
        assert_eq!(selects[0].start, 0);
        assert_eq!(selects[0].rows, 1000);
    }

    #[test]
    fn data_bag_kind_scopes_to_bag_clauses() {
        let index = MockIndex::returning(select_response(&[], 0, 0));
        let store = store_with(Vec::new());
        let searcher = Searcher::new(&index, &store, "chef_prod");

        searcher.search(&SearchParams::for_kind("users")).unwrap();

        let selects = index.selects.borrow();
        assert_eq!(
            selects[0].fq,
            "+X_CHEF_database_CHEF_X:chef_prod \
             +X_CHEF_type_CHEF_X:data_bag_item +data_bag:users"
        );
    }

    #[test]
    fn bulk_get_receives_exactly_the_index_ids() {
        let index = MockIndex::returning(select_response(&["a", "b", "c"], 3, 0));
        let store = store_with(vec![object("a"), object("b"), object("c")]);
        let searcher = Searcher::new(&index, &store, "chef_prod");

        let page = searcher.search(&SearchParams::for_kind("node")).unwrap();

        let bulk_gets = store.bulk_gets.borrow();
        assert_eq!(bulk_gets.len(), 1);
        assert_eq!(bulk_gets[0], vec!["a", "b", "c"]);
        assert_eq!(page.objects.len(), 3);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn hydrated_objects_follow_index_order() {
        let index = MockIndex::returning(select_response(&["b", "a"], 2, 0));
        // Store replies in its own order.
        let store = store_with(vec![object("a"), object("b")]);
        let searcher = Searcher::new(&index, &store, "chef_prod");

        let page = searcher.search(&SearchParams::for_kind("node")).unwrap();

        let ids: Vec<&str> = page.objects.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn objects_missing_from_store_are_dropped() {
        let index = MockIndex::returning(select_response(&["a", "gone", "b"], 3, 0));
        let store = store_with(vec![object("a"), object("b")]);
        let searcher = Searcher::new(&index, &store, "chef_prod");

        let page = searcher.search(&SearchParams::for_kind("node")).unwrap();

        let ids: Vec<&str> = page.objects.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn doc_without_id_field_is_an_error() {
        let mut response = select_response(&[], 1, 0);
        response.response.docs = vec![serde_json::json!({"other": "x"})];
        let index = MockIndex::returning(response);
        let store = store_with(Vec::new());
        let searcher = Searcher::new(&index, &store, "chef_prod");

        let err = searcher.search(&SearchParams::for_kind("node")).unwrap_err();

        assert!(matches!(err, SearchError::MissingId));
        assert!(store.calls.borrow().is_empty());
    }

    #[test]
    fn paging_params_forwarded() {
        let index = MockIndex::returning(select_response(&[], 0, 0));
        let store = store_with(Vec::new());
        let searcher = Searcher::new(&index, &store, "chef_prod");

        let mut params = SearchParams::for_kind("role");
        params.start = 40;
        params.rows = 20;
        params.sort = "X_CHEF_id_CHEF_X desc".to_string();
        searcher.search(&params).unwrap();

        let selects = index.selects.borrow();
        assert_eq!(selects[0].start, 40);
        assert_eq!(selects[0].rows, 20);
        assert_eq!(selects[0].sort, "X_CHEF_id_CHEF_X desc");
    }
}
