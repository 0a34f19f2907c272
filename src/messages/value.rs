// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The recursive value type stored in a node's fact-set.
//!
//! Plugins report facts as either plain text or nested groups of named
//! text values. Restricting the type to strings and string-keyed maps is
//! what lets the message layer promise that canonical JSON encoding never
//! fails: nothing unserializable is representable in the first place.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One node's fact-set: attribute name mapped to its reported value.
pub type FactSet = BTreeMap<String, Value>;

/// A single fact value reported about a node.
///
/// Serializes untagged, so a `Text` value encodes as a bare JSON string
/// and a `Map` value encodes as a JSON object. A standard decoder reads
/// either form back without any wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A plain textual value, passed through opaquely.
    Text(String),
    /// A nested group of named values for structured facts.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Render this value as the text placed in a form control's value slot.
    ///
    /// Text values render as-is. Map values render as their compact JSON so
    /// that structured facts still produce a usable editable representation
    /// rather than being skipped.
    pub fn render_text(&self) -> String {
        match self {
            Value::Text(text) => text.clone(),
            // String-keyed maps of strings always encode.
            Value::Map(map) => serde_json::to_string(map).unwrap_or_default(),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_value_serializes_as_bare_string() {
        let value = Value::from("on");
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"on\"");
    }

    #[test]
    fn test_map_value_serializes_as_object() {
        let mut inner = BTreeMap::new();
        inner.insert("speed".to_string(), Value::from("9600"));
        let value = Value::Map(inner);
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"speed":"9600"}"#
        );
    }

    #[test]
    fn test_untagged_deserialization_picks_the_right_variant() {
        let text: Value = serde_json::from_str("\"off\"").unwrap();
        assert_eq!(text, Value::from("off"));

        let map: Value = serde_json::from_str(r#"{"speed":"9600"}"#).unwrap();
        match map {
            Value::Map(inner) => assert_eq!(inner.get("speed"), Some(&Value::from("9600"))),
            Value::Text(other) => panic!("expected a map, got text '{}'", other),
        }
    }

    #[test]
    fn test_render_text_for_plain_text() {
        assert_eq!(Value::from("reset").render_text(), "reset");
    }

    #[test]
    fn test_render_text_for_map_is_compact_json() {
        let mut inner = BTreeMap::new();
        inner.insert("port".to_string(), Value::from("ttyS0"));
        inner.insert("speed".to_string(), Value::from("115200"));
        assert_eq!(
            Value::Map(inner).render_text(),
            r#"{"port":"ttyS0","speed":"115200"}"#
        );
    }
}
