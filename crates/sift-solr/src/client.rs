//! Blocking HTTP client for the search index.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use tracing::debug;

use crate::{
    error::SolrError,
    types::{SelectRequest, SelectResponse},
    xml,
};

/// Fixed output-format parameters sent with every `select`.
const WT: &str = "json";
/// Indentation is always off; responses are machine-consumed.
const INDENT: &str = "off";

/// A blocking client for one index endpoint.
pub struct SolrClient {
    /// Underlying HTTP client.
    http: Client,
    /// Base URL without a trailing slash.
    base: String,
}

impl SolrClient {
    /// Creates a client for the index at `base_url`.
    ///
    /// `timeout` bounds each round-trip; this layer performs no retries.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SolrError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SolrError::Build(e.to_string()))?;

        Ok(Self {
            http,
            base: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Executes one query against the index.
    pub fn select(&self, request: &SelectRequest) -> Result<SelectResponse, SolrError> {
        let url = format!("{}/select", self.base);
        debug!(q = %request.q, fq = %request.fq, start = request.start, rows = request.rows, "index select");

        let params = [
            ("q", request.q.clone()),
            ("fq", request.fq.clone()),
            ("sort", request.sort.clone()),
            ("start", request.start.to_string()),
            ("rows", request.rows.to_string()),
            ("wt", WT.to_string()),
            ("indent", INDENT.to_string()),
        ];

        let response = self.http.get(&url).query(&params).send()?;
        let body = Self::success_body(response)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Deletes every document matching `query`.
    ///
    /// The deletion is not visible to subsequent selects until
    /// [`SolrClient::commit`] is called.
    pub fn delete_by_query(&self, query: &str) -> Result<(), SolrError> {
        debug!(query, "index delete-by-query");
        self.update(&xml::delete_by_query(query))
    }

    /// Commits pending index changes.
    pub fn commit(&self) -> Result<(), SolrError> {
        debug!("index commit");
        self.update(&xml::commit())
    }

    /// Posts one XML body to the `update` endpoint.
    fn update(&self, body: &str) -> Result<(), SolrError> {
        let url = format!("{}/update", self.base);
        let response = self
            .http
            .post(&url)
            .header("Content-Type", "text/xml")
            .body(body.to_string())
            .send()?;

        Self::success_body(response).map(|_| ())
    }

    /// Reads the response body, mapping non-success statuses to an error.
    fn success_body(response: Response) -> Result<String, SolrError> {
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(SolrError::Status {
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
        let client = SolrClient::new("http://localhost:8983/solr/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base, "http://localhost:8983/solr");
    }
}
