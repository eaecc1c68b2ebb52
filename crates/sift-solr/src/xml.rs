//! XML bodies for the index's `update` endpoint.
//!
//! The update protocol takes small XML documents behind a fixed prolog.
//! The only queries sent this way are partition-scope deletions built from
//! internal field names, which never contain markup, so no escaping layer
//! is needed here.

/// Fixed prolog prepended to every update body.
const XML_PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Builds a delete-by-query update body.
pub(crate) fn delete_by_query(query: &str) -> String {
    format!("{XML_PROLOG}<delete><query>{query}</query></delete>")
}

/// Builds a commit update body.
pub(crate) fn commit() -> String {
    format!("{XML_PROLOG}<commit/>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_body_wraps_query() {
        assert_eq!(
            delete_by_query("X_CHEF_database_CHEF_X:chef_prod"),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <delete><query>X_CHEF_database_CHEF_X:chef_prod</query></delete>"
        );
    }

    #[test]
    fn commit_body_is_fixed() {
        assert_eq!(
            commit(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><commit/>"
        );
    }
}
