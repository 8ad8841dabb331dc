//! Raw model output and tolerant field access.
//!
//! Every agent call produces a [`ModelOutput`]: a JSON object with arbitrary
//! keys. Nothing about its shape is guaranteed, so accessors never fail; a
//! missing or mistyped key reads as an empty list or empty string.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sentinel error for an empty model reply
pub const EMPTY_RESPONSE: &str = "Empty response";
/// Sentinel error for a reply that is not a JSON object
pub const INVALID_JSON: &str = "Invalid JSON from model";

/// A JSON object returned by a model call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelOutput(Map<String, Value>);

impl ModelOutput {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Decode model text, degrading to a sentinel object instead of failing.
    ///
    /// - blank text → `{"raw": "", "error": "Empty response"}`
    /// - anything but a JSON object → `{"raw": <text>, "error": "Invalid JSON from model"}`
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::empty_response();
        }
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => Self(map),
            _ => Self::invalid_json(text),
        }
    }

    pub fn empty_response() -> Self {
        Self::sentinel("", EMPTY_RESPONSE)
    }

    pub fn invalid_json(raw: &str) -> Self {
        Self::sentinel(raw, INVALID_JSON)
    }

    fn sentinel(raw: &str, error: &str) -> Self {
        let mut map = Map::new();
        map.insert("raw".to_string(), Value::String(raw.to_string()));
        map.insert("error".to_string(), Value::String(error.to_string()));
        Self(map)
    }

    /// The sentinel error, if this output is degraded
    pub fn error(&self) -> Option<&str> {
        self.0.get("error").and_then(Value::as_str)
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self.error(), Some(EMPTY_RESPONSE) | Some(INVALID_JSON))
    }

    /// Read a list of strings. Non-string items are kept as their JSON text.
    pub fn list(&self, key: &str) -> Vec<String> {
        match self.0.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Read a string. Numbers and booleans are stringified; anything else is empty.
    pub fn text(&self, key: &str) -> String {
        match self.0.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Keys not in `known`, in sorted order
    pub fn unexpected_keys(&self, known: &[&str]) -> Vec<String> {
        self.0
            .keys()
            .filter(|k| !known.contains(&k.as_str()) && !matches!(k.as_str(), "raw" | "error"))
            .cloned()
            .collect()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<Map<String, Value>> for ModelOutput {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_text_object() {
        let out = ModelOutput::from_text(r#"{"top_strengths": ["a", "b"]}"#);
        assert!(!out.is_degraded());
        assert_eq!(out.list("top_strengths"), vec!["a", "b"]);
    }

    #[test]
    fn test_from_text_blank_is_empty_response() {
        let out = ModelOutput::from_text("   \n");
        assert_eq!(out.error(), Some(EMPTY_RESPONSE));
        assert_eq!(out.text("raw"), "");
        assert!(out.is_degraded());
    }

    #[test]
    fn test_from_text_garbage_is_invalid_json() {
        let out = ModelOutput::from_text("Sure! Here are my thoughts");
        assert_eq!(out.error(), Some(INVALID_JSON));
        assert_eq!(out.text("raw"), "Sure! Here are my thoughts");
    }

    #[test]
    fn test_from_text_non_object_json_is_invalid_json() {
        let out = ModelOutput::from_text(r#"["a", "b"]"#);
        assert_eq!(out.error(), Some(INVALID_JSON));
        assert_eq!(out.text("raw"), r#"["a", "b"]"#);
    }

    #[test]
    fn test_missing_and_mistyped_keys_read_empty() {
        let out = ModelOutput::from_text(r#"{"top_gaps": "not a list", "n": null}"#);
        assert!(out.list("top_gaps").is_empty());
        assert!(out.list("absent").is_empty());
        assert_eq!(out.text("n"), "");
        assert_eq!(out.text("absent"), "");
    }

    #[test]
    fn test_list_keeps_non_string_items_as_json() {
        let map = json!({"items": ["x", 3, {"k": "v"}]});
        let out = ModelOutput::new(map.as_object().unwrap().clone());
        assert_eq!(out.list("items"), vec!["x", "3", r#"{"k":"v"}"#]);
    }

    #[test]
    fn test_model_error_field_is_not_degraded() {
        let out = ModelOutput::from_text(r#"{"error": "quota", "raw": "x"}"#);
        assert!(!out.is_degraded());
    }

    #[test]
    fn test_unexpected_keys() {
        let out = ModelOutput::from_text(r#"{"top_gaps": [], "mood": "ok"}"#);
        assert_eq!(out.unexpected_keys(&["top_gaps"]), vec!["mood"]);

        let out = ModelOutput::from_text(r#"{"zeta": 1, "top_gaps": [], "alpha": 2}"#);
        assert_eq!(out.unexpected_keys(&["top_gaps"]), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_serializes_transparently() {
        let out = ModelOutput::empty_response();
        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(value, json!({"raw": "", "error": "Empty response"}));
    }
}
