//! Fields that hold either an id or, when requested with `expand[]`, the
//! full object.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::list::Object;

/// A related object that is sent as a bare id unless the request expanded it.
///
/// Resources this crate does not model are carried as `serde_json::Value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expandable<T> {
    /// The field was not expanded.
    Id(String),
    /// The field was expanded into the full object.
    Object(Box<T>),
}

impl<T: Object> Expandable<T> {
    /// The related object's id, whether or not it was expanded.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Object(object) => object.object_id(),
        }
    }
}

impl<T> Expandable<T> {
    /// Whether the field was expanded.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// The expanded object, if there is one.
    #[must_use]
    pub fn as_object(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Object(object) => Some(object),
        }
    }
}

impl Object for Value {
    fn object_id(&self) -> &str {
        self.get("id").and_then(Value::as_str).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_bare_id() {
        let field: Expandable<Value> = serde_json::from_value(json!("card_1")).unwrap();
        assert_eq!(field, Expandable::Id("card_1".to_string()));
        assert_eq!(field.id(), "card_1");
        assert!(field.as_object().is_none());
    }

    #[test]
    fn decodes_expanded_object() {
        let field: Expandable<Value> =
            serde_json::from_value(json!({"id": "card_1", "object": "card", "last4": "4242"}))
                .unwrap();

        assert!(field.is_object());
        assert_eq!(field.id(), "card_1");
        assert_eq!(
            field.as_object().and_then(|card| card.get("last4")),
            Some(&json!("4242"))
        );
    }

    #[test]
    fn expanded_object_without_id_has_empty_id() {
        let field: Expandable<Value> = serde_json::from_value(json!({"object": "card"})).unwrap();
        assert_eq!(field.id(), "");
    }

    #[test]
    fn serializes_back_to_wire_shape() {
        let field: Expandable<Value> = Expandable::Id("txn_1".to_string());
        assert_eq!(serde_json::to_value(&field).unwrap(), json!("txn_1"));
    }
}
