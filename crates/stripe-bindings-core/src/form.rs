//! Form-encoded request bodies.
//!
//! Stripe takes request parameters as `application/x-www-form-urlencoded`
//! pairs. Nested objects use bracketed keys (`shipping[address][city]`) and
//! arrays use empty brackets (`expand[]`).

use url::form_urlencoded;

/// An ordered collection of form key/value pairs.
///
/// Keys may repeat (`expand[]` does). Pairs are encoded in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pairs: Vec<(String, String)>,
}

impl Form {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair, keeping any existing pairs with the same key.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Append a pair when `value` is present.
    pub fn add_opt<V: ToString>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.add(key, value.to_string());
        }
    }

    /// Append a pair when `value` is non-empty.
    pub fn add_non_empty(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.add(key, value);
        }
    }

    /// Replace every pair with this key by a single pair.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.remove(&key);
        self.pairs.push((key, value.into()));
    }

    /// Remove every pair with this key.
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    /// Return the first value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Return every value stored under `key`, in insertion order.
    #[must_use]
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Whether the form has no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterate over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode as `application/x-www-form-urlencoded`.
    #[must_use]
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

/// A parameter type that knows how to write itself into a [`Form`].
pub trait FormParams {
    /// Append this value's parameters to `form`.
    fn append_to(&self, form: &mut Form);

    /// Build a fresh form holding only this value's parameters.
    fn to_form(&self) -> Form {
        let mut form = Form::new();
        self.append_to(&mut form);
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_in_insertion_order() {
        let mut form = Form::new();
        form.add("amount", "100");
        form.add("currency", "usd");
        assert_eq!(form.encode(), "amount=100&currency=usd");
    }

    #[test]
    fn escapes_brackets_and_spaces() {
        let mut form = Form::new();
        form.add("shipping[name]", "Jane Doe");
        assert_eq!(form.encode(), "shipping%5Bname%5D=Jane+Doe");
    }

    #[test]
    fn repeated_keys_are_kept() {
        let mut form = Form::new();
        form.add("expand[]", "customer");
        form.add("expand[]", "balance_transaction");
        assert_eq!(form.get_all("expand[]"), vec!["customer", "balance_transaction"]);
        assert_eq!(form.len(), 2);
    }

    #[test]
    fn set_replaces_existing_values() {
        let mut form = Form::new();
        form.add("starting_after", "cus_1");
        form.add("limit", "3");
        form.set("starting_after", "cus_2");
        assert_eq!(form.get_all("starting_after"), vec!["cus_2"]);
        assert_eq!(form.get("limit"), Some("3"));
    }

    #[test]
    fn optional_and_empty_values_are_skipped() {
        let mut form = Form::new();
        form.add_opt::<i64>("balance", None);
        form.add_non_empty("description", "");
        assert!(form.is_empty());
        assert_eq!(form.encode(), "");
    }
}
