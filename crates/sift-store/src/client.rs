//! Blocking HTTP client for the document store.

use std::time::Duration;

use reqwest::{
    StatusCode,
    blocking::{Client, Response},
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    error::StoreError,
    types::{BulkGetRequest, NamesResponse, ObjectDoc, RowsResponse, SubmitRequest},
};

/// A blocking client for one document store endpoint.
pub struct StoreClient {
    /// Underlying HTTP client.
    http: Client,
    /// Base URL without a trailing slash.
    base: String,
}

impl StoreClient {
    /// Creates a client for the store at `base_url`.
    ///
    /// `timeout` bounds each round-trip; this layer performs no retries.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, StoreError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Build(e.to_string()))?;

        Ok(Self {
            http,
            base: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the full objects for `ids` in one round-trip.
    ///
    /// The store returns objects in an order of its own choosing.
    pub fn bulk_get(&self, ids: &[String]) -> Result<Vec<ObjectDoc>, StoreError> {
        debug!(count = ids.len(), "store bulk-get");
        let url = format!("{}/bulk_get", self.base);
        let response = self
            .http
            .post(&url)
            .json(&BulkGetRequest { keys: ids })
            .send()?;

        let decoded: RowsResponse = Self::decode(response, "bulk_get")?;
        Ok(decoded.rows)
    }

    /// Lists every live instance of a builtin kind.
    pub fn list_all(&self, kind: &str) -> Result<Vec<ObjectDoc>, StoreError> {
        debug!(kind, "store list");
        let url = format!("{}/objects/{kind}", self.base);
        let response = self.http.get(&url).send()?;

        let decoded: RowsResponse = Self::decode(response, kind)?;
        Ok(decoded.rows)
    }

    /// Lists the names of every data bag.
    pub fn list_bag_names(&self) -> Result<Vec<String>, StoreError> {
        debug!("store list bag names");
        let url = format!("{}/data_bags", self.base);
        let response = self.http.get(&url).send()?;

        let decoded: NamesResponse = Self::decode(response, "data_bags")?;
        Ok(decoded.names)
    }

    /// Lists every item in the named data bag.
    pub fn list_items_in_bag(&self, bag: &str) -> Result<Vec<ObjectDoc>, StoreError> {
        debug!(bag, "store list bag items");
        let url = format!("{}/data_bags/{bag}", self.base);
        let response = self.http.get(&url).send()?;

        let decoded: RowsResponse = Self::decode(response, bag)?;
        Ok(decoded.rows)
    }

    /// Resubmits one stored object for indexing.
    pub fn submit_for_indexing(&self, kind: &str, object: &ObjectDoc) -> Result<(), StoreError> {
        debug!(kind, id = %object.id, "store submit for indexing");
        let url = format!("{}/index_queue", self.base);
        let response = self
            .http
            .post(&url)
            .json(&SubmitRequest {
                kind,
                id: &object.id,
                item: &object.body,
            })
            .send()?;

        Self::check_status(response, &object.id).map(|_| ())
    }

    /// Decodes a JSON response after status checking.
    fn decode<T: DeserializeOwned>(response: Response, resource: &str) -> Result<T, StoreError> {
        let body = Self::check_status(response, resource)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Reads the response body, mapping 404 to [`StoreError::NotFound`] and
    /// other non-success statuses to [`StoreError::Status`].
    fn check_status(response: Response, resource: &str) -> Result<String, StoreError> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound {
                resource: resource.to_string(),
            });
        }

        let body = response.text()?;
        if !status.is_success() {
            return Err(StoreError::Status {
                code: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let client = StoreClient::new("http://localhost:5984/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base, "http://localhost:5984");
    }
}
