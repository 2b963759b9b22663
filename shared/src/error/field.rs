//! Field-level validation errors returned by the masters backend
//!
//! The backend answers a rejected POST/PUT with a JSON object mapping each
//! field to a list of messages:
//!
//! ```json
//! { "name": ["This field may not be blank."], "non_field_errors": ["..."] }
//! ```
//!
//! Values are not always arrays: `detail` is usually a bare string and
//! nested serializers produce objects. Everything is flattened to strings
//! while keeping the order the server used.

use serde::Serialize;
use serde_json::Value;

/// Key used by the backend for messages not tied to a single field
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Key used by the backend for a single top-level message
pub const DETAIL: &str = "detail";

/// Ordered field → messages mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    entries: Vec<(String, Vec<String>)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a response body; `None` unless the body is a JSON object
    pub fn parse(body: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(body).ok()?;
        Self::from_value(&value)
    }

    /// Build from an already decoded JSON value; `None` unless it is an object
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let entries = map
            .iter()
            .map(|(key, val)| {
                let mut messages = Vec::new();
                collect_messages(val, &mut messages);
                (key.clone(), messages)
            })
            .collect();
        Some(Self { entries })
    }

    /// Append messages for a field
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        match self.entries.iter_mut().find(|(k, _)| *k == field) {
            Some((_, messages)) => messages.push(message.into()),
            None => self.entries.push((field, vec![message.into()])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Messages for one field
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == field)
            .map(|(_, v)| v.as_slice())
    }

    /// The `detail` message, if the backend sent one
    pub fn detail(&self) -> Option<&str> {
        self.get(DETAIL)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// One line per field, `field: msg, msg`, joined with newlines
    pub fn display_text(&self) -> String {
        self.entries
            .iter()
            .map(|(key, messages)| format!("{}: {}", key, messages.join(", ")))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Case-insensitive substring search over the aggregated text
    pub fn contains_text(&self, needle: &str) -> bool {
        self.display_text()
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_text())
    }
}

fn collect_messages(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Null => {}
        Value::String(s) => out.push(s.clone()),
        Value::Array(items) => {
            for item in items {
                collect_messages(item, out);
            }
        }
        Value::Object(map) => {
            for (key, nested) in map {
                let mut inner = Vec::new();
                collect_messages(nested, &mut inner);
                out.push(format!("{}: {}", key, inner.join(", ")));
            }
        }
        other => out.push(other.to_string()),
    }
}
