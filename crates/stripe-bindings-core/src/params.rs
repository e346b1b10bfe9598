//! Parameters shared by every request and by every list request.

use std::collections::BTreeMap;

use crate::form::{Form, FormParams};

/// Largest page size the list endpoints accept.
pub const MAX_LIST_LIMIT: u32 = 100;

/// Parameters every request accepts.
///
/// `metadata` and `expand` travel in the form body. `idempotency_key` and
/// `stripe_account` travel as request headers and are read by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    /// Key/value pairs stored on the object (`metadata[key]=value`).
    pub metadata: BTreeMap<String, String>,
    /// Response fields to expand (`expand[]=path`).
    pub expand: Vec<String>,
    /// Value of the `Idempotency-Key` header.
    pub idempotency_key: Option<String>,
    /// Connected account to act on behalf of (`Stripe-Account` header).
    pub stripe_account: Option<String>,
}

impl Params {
    /// Add a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Request expansion of a response field.
    #[must_use]
    pub fn with_expand(mut self, path: impl Into<String>) -> Self {
        self.expand.push(path.into());
        self
    }

    /// Set the idempotency key for this request.
    #[must_use]
    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// Act on behalf of a connected account.
    #[must_use]
    pub fn for_account(mut self, account: impl Into<String>) -> Self {
        self.stripe_account = Some(account.into());
        self
    }
}

impl FormParams for Params {
    fn append_to(&self, form: &mut Form) {
        for (key, value) in &self.metadata {
            form.add(format!("metadata[{key}]"), value.as_str());
        }
        for path in &self.expand {
            form.add("expand[]", path.as_str());
        }
    }
}

/// A filter on a timestamp-like list field.
///
/// `eq` is sent as `field=value`, the bounds as `field[gt]=value` and so on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeQuery {
    /// Exact match. Values `<= 0` are not sent.
    pub eq: Option<i64>,
    /// Strictly greater than.
    pub gt: Option<i64>,
    /// Greater than or equal.
    pub gte: Option<i64>,
    /// Strictly less than.
    pub lt: Option<i64>,
    /// Less than or equal.
    pub lte: Option<i64>,
}

impl RangeQuery {
    /// Match an exact value.
    #[must_use]
    pub fn exact(value: i64) -> Self {
        Self {
            eq: Some(value),
            ..Self::default()
        }
    }

    /// Write this filter under `field`.
    pub fn append_to(&self, field: &str, form: &mut Form) {
        if let Some(eq) = self.eq.filter(|v| *v > 0) {
            form.add(field, eq.to_string());
        }
        let bounds = [
            ("gt", self.gt),
            ("gte", self.gte),
            ("lt", self.lt),
            ("lte", self.lte),
        ];
        for (op, value) in bounds {
            if let Some(value) = value {
                form.add(format!("{field}[{op}]"), value.to_string());
            }
        }
    }
}

/// Free-form list filters for fields without a typed parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    entries: Vec<(String, String, String)>,
}

impl Filters {
    /// Add a filter. An empty `op` sends `key=value`, otherwise `key[op]=value`.
    pub fn add_filter(&mut self, key: impl Into<String>, op: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), op.into(), value.into()));
    }

    /// Whether no filters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FormParams for Filters {
    fn append_to(&self, form: &mut Form) {
        for (key, op, value) in &self.entries {
            if op.is_empty() {
                form.add(key.as_str(), value.as_str());
            } else {
                form.add(format!("{key}[{op}]"), value.as_str());
            }
        }
    }
}

/// Parameters every list request accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Page size, clamped to `1..=100`.
    pub limit: Option<u32>,
    /// Cursor: return objects after this id.
    pub starting_after: Option<String>,
    /// Cursor: return objects before this id. Paginates backwards.
    pub ending_before: Option<String>,
    /// Fetch one page only instead of following `has_more`.
    pub single: bool,
    /// Extra filters.
    pub filters: Filters,
    /// Common request parameters.
    pub params: Params,
}

impl ListParams {
    /// Set the page size.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Only fetch the first page.
    #[must_use]
    pub fn single_page(mut self) -> Self {
        self.single = true;
        self
    }
}

impl FormParams for ListParams {
    fn append_to(&self, form: &mut Form) {
        if let Some(limit) = self.limit {
            form.add("limit", limit.clamp(1, MAX_LIST_LIMIT).to_string());
        }
        form.add_opt("starting_after", self.starting_after.as_deref());
        form.add_opt("ending_before", self.ending_before.as_deref());
        self.filters.append_to(form);
        self.params.append_to(form);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_write_metadata_and_expand() {
        let params = Params::default()
            .with_metadata("order_id", "6735")
            .with_expand("customer")
            .with_idempotency_key("abc");
        let form = params.to_form();

        assert_eq!(form.get("metadata[order_id]"), Some("6735"));
        assert_eq!(form.get_all("expand[]"), vec!["customer"]);
        // headers never leak into the body
        assert_eq!(form.len(), 2);
    }

    #[test]
    fn limit_is_clamped() {
        let form = ListParams::default().with_limit(500).to_form();
        assert_eq!(form.get("limit"), Some("100"));

        let form = ListParams::default().with_limit(0).to_form();
        assert_eq!(form.get("limit"), Some("1"));
    }

    #[test]
    fn filters_with_and_without_operator() {
        let mut params = ListParams::default();
        params.filters.add_filter("limit", "", "3");
        params.filters.add_filter("created", "gte", "1400000000");
        let form = params.to_form();

        assert_eq!(form.get("limit"), Some("3"));
        assert_eq!(form.get("created[gte]"), Some("1400000000"));
    }

    #[test]
    fn range_query_skips_non_positive_exact_value() {
        let mut form = Form::new();
        RangeQuery::exact(0).append_to("created", &mut form);
        assert!(form.is_empty());

        let range = RangeQuery {
            gte: Some(10),
            lt: Some(20),
            ..RangeQuery::default()
        };
        range.append_to("date", &mut form);
        assert_eq!(form.encode(), "date%5Bgte%5D=10&date%5Blt%5D=20");
    }
}
