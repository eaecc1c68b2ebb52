//! In-memory fakes for the transport seams, shared by the orchestrator and
//! reindexer tests.

use std::{cell::RefCell, collections::HashMap};

use serde_json::{Map, Value, json};
use sift_query::fields::ID_FIELD;
use sift_solr::{ResponseBody, SelectRequest, SelectResponse, SolrError};
use sift_store::{ObjectDoc, StoreError};

use crate::transport::{ObjectStore, SearchIndex};

/// Builds an index select response whose docs carry the given ids.
pub(crate) fn select_response(ids: &[&str], num_found: u64, start: u64) -> SelectResponse {
    let docs = ids
        .iter()
        .map(|id| {
            let mut doc = Map::new();
            doc.insert(ID_FIELD.to_string(), Value::String((*id).to_string()));
            Value::Object(doc)
        })
        .collect();

    SelectResponse {
        response_header: json!({"status": 0}),
        response: ResponseBody {
            docs,
            start,
            num_found,
        },
    }
}

/// Builds a store object with a recognizable body.
pub(crate) fn object(id: &str) -> ObjectDoc {
    ObjectDoc {
        id: id.to_string(),
        body: json!({"name": id}),
    }
}

/// A fake index that replays a canned select response and records calls.
pub(crate) struct MockIndex {
    /// Canned response for every select.
    pub response: SelectResponse,
    /// Recorded select requests.
    pub selects: RefCell<Vec<SelectRequest>>,
    /// Recorded update operations, in call order.
    pub ops: RefCell<Vec<String>>,
}

impl MockIndex {
    /// Creates a fake returning `response` for every select.
    pub fn returning(response: SelectResponse) -> Self {
        Self {
            response,
            selects: RefCell::new(Vec::new()),
            ops: RefCell::new(Vec::new()),
        }
    }
}

impl SearchIndex for MockIndex {
    fn select(&self, request: &SelectRequest) -> Result<SelectResponse, SolrError> {
        self.selects.borrow_mut().push(request.clone());
        Ok(self.response.clone())
    }

    fn delete_by_query(&self, query: &str) -> Result<(), SolrError> {
        self.ops.borrow_mut().push(format!("delete {query}"));
        Ok(())
    }

    fn commit(&self) -> Result<(), SolrError> {
        self.ops.borrow_mut().push("commit".to_string());
        Ok(())
    }
}

/// Canned behavior for one kind's listing.
pub(crate) enum Listing {
    /// Listing succeeds with these objects.
    Rows(Vec<ObjectDoc>),
    /// The store reports not-found for this kind.
    Missing,
    /// The store fails hard.
    Broken,
}

/// A fake document store with per-kind canned listings and call recording.
#[derive(Default)]
pub(crate) struct MockStore {
    /// Canned bulk-get result.
    pub objects: Vec<ObjectDoc>,
    /// Canned listing behavior per kind; unlisted kinds return no objects.
    pub listings: HashMap<String, Listing>,
    /// Canned bag names.
    pub bag_names: Vec<String>,
    /// When set, bag-name listing reports not-found.
    pub bags_missing: bool,
    /// Canned items per bag.
    pub bag_items: HashMap<String, Vec<ObjectDoc>>,
    /// Recorded bulk-get id lists.
    pub bulk_gets: RefCell<Vec<Vec<String>>>,
    /// Recorded submissions as (kind, id) pairs.
    pub submissions: RefCell<Vec<(String, String)>>,
    /// Flat call log for ordering assertions.
    pub calls: RefCell<Vec<String>>,
}

impl ObjectStore for MockStore {
    fn bulk_get(&self, ids: &[String]) -> Result<Vec<ObjectDoc>, StoreError> {
        self.calls.borrow_mut().push("bulk_get".to_string());
        self.bulk_gets.borrow_mut().push(ids.to_vec());
        Ok(self.objects.clone())
    }

    fn list_all(&self, kind: &str) -> Result<Vec<ObjectDoc>, StoreError> {
        self.calls.borrow_mut().push(format!("list {kind}"));
        match self.listings.get(kind) {
            Some(Listing::Rows(objects)) => Ok(objects.clone()),
            Some(Listing::Missing) => Err(StoreError::NotFound {
                resource: kind.to_string(),
            }),
            Some(Listing::Broken) => Err(StoreError::Status {
                code: 500,
                body: "boom".to_string(),
            }),
            None => Ok(Vec::new()),
        }
    }

    fn list_bag_names(&self) -> Result<Vec<String>, StoreError> {
        self.calls.borrow_mut().push("list_bags".to_string());
        if self.bags_missing {
            return Err(StoreError::NotFound {
                resource: "data_bags".to_string(),
            });
        }
        Ok(self.bag_names.clone())
    }

    fn list_items_in_bag(&self, bag: &str) -> Result<Vec<ObjectDoc>, StoreError> {
        self.calls.borrow_mut().push(format!("list_bag {bag}"));
        Ok(self.bag_items.get(bag).cloned().unwrap_or_default())
    }

    fn submit_for_indexing(&self, kind: &str, doc: &ObjectDoc) -> Result<(), StoreError> {
        self.calls.borrow_mut().push(format!("submit {}", doc.id));
        self.submissions
            .borrow_mut()
            .push((kind.to_string(), doc.id.clone()));
        Ok(())
    }
}
