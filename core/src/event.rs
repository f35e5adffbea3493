use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{GreetingError, Result};

/// Key consulted by the greeting handler.
pub const NAME_KEY: &str = "name";

/// The payload delivered by the invoking platform.
///
/// Any JSON object is accepted and only [`NAME_KEY`] is ever read; other
/// fields ride along untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Event {
    fields: Map<String, Value>,
}

impl Event {
    /// Fails with [`GreetingError::InvalidEvent`] when the payload is not a mapping.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(GreetingError::InvalidEvent {
                found: json_kind(&other),
            }),
        }
    }

    pub fn name(&self) -> Option<&Value> {
        self.fields.get(NAME_KEY)
    }

    /// Returns the `name` field, or `default` when the key is absent.
    ///
    /// A present value is never replaced, even when it is an empty string or
    /// `null`. Non-string values are rendered as compact JSON.
    pub fn resolve_name<'a>(&'a self, default: &'a str) -> Cow<'a, str> {
        match self.name() {
            None => Cow::Borrowed(default),
            Some(Value::String(name)) => Cow::Borrowed(name.as_str()),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(value: Value) -> Event {
        Event::from_value(value).unwrap()
    }

    #[test]
    fn test_present_name() {
        let event = event(json!({ "name": "Alice" }));
        assert_eq!(event.resolve_name("Guest"), "Alice");
    }

    #[test]
    fn test_absent_name_uses_default() {
        let event = event(json!({ "other": "field" }));
        assert_eq!(event.name(), None);
        assert_eq!(event.resolve_name("Guest"), "Guest");
    }

    #[test]
    fn test_empty_string_is_present() {
        let event = event(json!({ "name": "" }));
        assert_eq!(event.resolve_name("Guest"), "");
    }

    #[test]
    fn test_non_string_names_pass_through() {
        assert_eq!(event(json!({ "name": 42 })).resolve_name("Guest"), "42");
        assert_eq!(event(json!({ "name": true })).resolve_name("Guest"), "true");
        assert_eq!(event(json!({ "name": null })).resolve_name("Guest"), "null");
        assert_eq!(
            event(json!({ "name": ["a", "b"] })).resolve_name("Guest"),
            r#"["a","b"]"#
        );
    }

    #[test]
    fn test_non_mapping_payloads_are_rejected() {
        for (payload, kind) in [
            (json!(null), "null"),
            (json!("Alice"), "string"),
            (json!(7), "number"),
            (json!(false), "boolean"),
            (json!([{ "name": "Alice" }]), "array"),
        ] {
            match Event::from_value(payload) {
                Err(GreetingError::InvalidEvent { found }) => assert_eq!(found, kind),
                other => panic!("Expected InvalidEvent, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_deserialize_transparent() {
        let event: Event = serde_json::from_str(r#"{"name":"Bob","extra":1}"#).unwrap();
        assert_eq!(event.name(), Some(&json!("Bob")));
        assert_eq!(event.resolve_name("Guest"), "Bob");
    }
}
