//! Wire types for the index's `select` endpoint.

use serde::Deserialize;
use serde_json::Value;
use sift_query::fields::ID_FIELD;

/// Parameters for one `select` round-trip.
///
/// `q` must already be in index-native form and `fq` a rendered filter
/// conjunction; output format parameters (`wt`, `indent`) are fixed by the
/// client and not part of the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectRequest {
    /// Index-native query string.
    pub q: String,
    /// Rendered scoping filter (`+field:value` conjunction).
    pub fq: String,
    /// Sort specification, e.g. `X_CHEF_id_CHEF_X asc`.
    pub sort: String,
    /// Page offset.
    pub start: usize,
    /// Page size.
    pub rows: usize,
}

/// A decoded `select` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectResponse {
    /// Raw response header; carried through for diagnostics only.
    #[serde(rename = "responseHeader", default)]
    pub response_header: Value,
    /// The result payload.
    pub response: ResponseBody,
}

/// The result payload of a `select` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseBody {
    /// Matching documents for the requested page, in index result order.
    #[serde(default)]
    pub docs: Vec<Value>,
    /// Offset of the first returned document.
    #[serde(default)]
    pub start: u64,
    /// Total number of matching documents across all pages.
    #[serde(rename = "numFound", default)]
    pub num_found: u64,
}

/// Extracts the primary-key id from an index document.
///
/// The id field is single-valued in practice, but the index reports
/// multivalued fields as arrays, so both shapes are accepted.
pub fn doc_id(doc: &Value) -> Option<&str> {
    match doc.get(ID_FIELD)? {
        Value::String(id) => Some(id),
        Value::Array(values) => values.first()?.as_str(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_select_response() {
        let body = r#"{
            "responseHeader": {"status": 0, "QTime": 3},
            "response": {
                "docs": [{"X_CHEF_id_CHEF_X": "node-1"}],
                "start": 0,
                "numFound": 42
            }
        }"#;

        let decoded: SelectResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.response.num_found, 42);
        assert_eq!(decoded.response.start, 0);
        assert_eq!(decoded.response.docs.len(), 1);
        assert_eq!(decoded.response_header["QTime"], 3);
    }

    #[test]
    fn decodes_response_with_missing_fields() {
        let decoded: SelectResponse = serde_json::from_str(r#"{"response": {}}"#).unwrap();
        assert!(decoded.response.docs.is_empty());
        assert_eq!(decoded.response.num_found, 0);
    }

    #[test]
    fn doc_id_from_string_field() {
        let doc = json!({"X_CHEF_id_CHEF_X": "role-web"});
        assert_eq!(doc_id(&doc), Some("role-web"));
    }

    #[test]
    fn doc_id_from_multivalued_field() {
        let doc = json!({"X_CHEF_id_CHEF_X": ["role-web"]});
        assert_eq!(doc_id(&doc), Some("role-web"));
    }

    #[test]
    fn doc_id_missing() {
        assert_eq!(doc_id(&json!({"other": "x"})), None);
        assert_eq!(doc_id(&json!({"X_CHEF_id_CHEF_X": 7})), None);
    }
}
