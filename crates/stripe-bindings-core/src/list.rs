//! List envelopes returned by the `GET /<resource>` endpoints.

use serde::{Deserialize, Serialize};

/// An object with a Stripe identifier, used as a pagination cursor.
pub trait Object {
    /// The object's id as sent to the API.
    fn object_id(&self) -> &str;
}

/// Everything in a list envelope except the page data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMeta {
    /// Object type (always "list").
    #[serde(default)]
    pub object: String,
    /// Whether more objects follow this page.
    #[serde(default)]
    pub has_more: bool,
    /// URL for the list endpoint.
    #[serde(default)]
    pub url: Option<String>,
    /// Total number of objects, when the endpoint reports it.
    #[serde(default)]
    pub total_count: Option<u64>,
}

/// One page of a list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct List<T> {
    /// Pagination metadata.
    #[serde(flatten)]
    pub meta: ListMeta,
    /// Objects on this page.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_envelope_splits_meta_and_data() {
        let page: List<serde_json::Value> = serde_json::from_value(serde_json::json!({
            "object": "list",
            "url": "/v1/customers",
            "has_more": true,
            "data": [{"id": "cus_1"}, {"id": "cus_2"}],
        }))
        .unwrap();

        assert!(page.meta.has_more);
        assert_eq!(page.meta.url.as_deref(), Some("/v1/customers"));
        assert_eq!(page.meta.total_count, None);
        assert_eq!(page.data.len(), 2);
    }
}
