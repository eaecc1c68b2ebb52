//! Wire types for the document store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A stored object: its primary-key id plus the full JSON body.
///
/// The id is carried alongside the body (rather than dug out of it) because
/// the store addresses objects by id at the transport level; the body's own
/// shape varies by kind and is opaque to the search layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDoc {
    /// Primary-key id, as known to both the store and the index.
    pub id: String,
    /// Full object body.
    #[serde(rename = "doc")]
    pub body: Value,
}

/// Response shape shared by bulk-get and the listing endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RowsResponse {
    /// Returned objects, in store order.
    #[serde(default)]
    pub rows: Vec<ObjectDoc>,
}

/// Response shape of the bag-name listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct NamesResponse {
    /// Bag names.
    #[serde(default)]
    pub names: Vec<String>,
}

/// Request body for a bulk-get.
#[derive(Debug, Serialize)]
pub(crate) struct BulkGetRequest<'a> {
    /// Ids to fetch.
    pub keys: &'a [String],
}

/// Request body for submitting one object for indexing.
#[derive(Debug, Serialize)]
pub(crate) struct SubmitRequest<'a> {
    /// Object kind (builtin kind or bag name).
    pub kind: &'a str,
    /// Primary-key id.
    pub id: &'a str,
    /// Full object body.
    pub item: &'a Value,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_rows_response() {
        let body = r#"{"rows": [{"id": "node-1", "doc": {"name": "node-1"}}]}"#;
        let decoded: RowsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.rows.len(), 1);
        assert_eq!(decoded.rows[0].id, "node-1");
        assert_eq!(decoded.rows[0].body["name"], "node-1");
    }

    #[test]
    fn decodes_empty_rows() {
        let decoded: RowsResponse = serde_json::from_str("{}").unwrap();
        assert!(decoded.rows.is_empty());
    }

    #[test]
    fn decodes_names_response() {
        let decoded: NamesResponse =
            serde_json::from_str(r#"{"names": ["users", "secrets"]}"#).unwrap();
        assert_eq!(decoded.names, vec!["users", "secrets"]);
    }

    #[test]
    fn bulk_get_request_shape() {
        let keys = vec!["a".to_string(), "b".to_string()];
        let body = serde_json::to_value(BulkGetRequest { keys: &keys }).unwrap();
        assert_eq!(body, json!({"keys": ["a", "b"]}));
    }
}
