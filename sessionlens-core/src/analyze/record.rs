//! Best-effort JSONL record decoding.
//!
//! Session logs carry heterogeneous, partially-structured records with no
//! enforced schema. Rather than deserializing into a fixed struct, a record
//! wraps the raw JSON object and exposes typed accessors that return `None`
//! when a field is absent or has an unexpected shape.

use crate::error::{Error, Result};

/// One decoded record from a session log line.
#[derive(Debug, Clone)]
pub struct LogRecord {
    value: serde_json::Value,
}

impl LogRecord {
    /// Decode one line of a session log.
    ///
    /// Returns `Ok(None)` for lines that are not valid JSON; these are
    /// skipped silently. A line that decodes to a non-object value is an
    /// `Err` - the caller reports it and continues with the next line.
    pub fn parse(line: &str) -> Result<Option<LogRecord>> {
        let value: serde_json::Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(_) => return Ok(None),
        };

        if !value.is_object() {
            return Err(Error::Record(format!(
                "expected a JSON object, got {}",
                json_type_name(&value)
            )));
        }

        Ok(Some(LogRecord { value }))
    }

    /// The record's `type` field, if it is a string.
    pub fn record_type(&self) -> Option<&str> {
        self.value.get("type").and_then(|v| v.as_str())
    }

    /// The record's `summary` field, if it is a string.
    pub fn summary(&self) -> Option<&str> {
        self.value.get("summary").and_then(|v| v.as_str())
    }

    /// Textual content of a nested `message` object, if present.
    ///
    /// Non-string content (e.g. structured content blocks) yields `None`.
    pub fn message_content(&self) -> Option<&str> {
        self.value
            .get("message")?
            .get("content")
            .and_then(|v| v.as_str())
    }

    /// The record's `tool` field, if it is a string.
    pub fn tool(&self) -> Option<&str> {
        self.value.get("tool").and_then(|v| v.as_str())
    }

    /// True if the record carries an `error` key (of any shape).
    pub fn has_error_field(&self) -> bool {
        self.value.get("error").is_some()
    }

    /// Compact JSON serialization of the whole record.
    ///
    /// Used as the record's textual form for substring-based error
    /// detection and classification.
    pub fn to_compact_json(&self) -> String {
        self.value.to_string()
    }

    /// Consume the record, returning the raw JSON value.
    pub fn into_value(self) -> serde_json::Value {
        self.value
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
