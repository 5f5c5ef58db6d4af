use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the authentication backend.
///
/// `detail` is usually a string. Request validation failures (422) carry a
/// list of objects instead, each with a `msg` field.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Value,
}

impl ErrorBody {
    /// Parse an error body from raw response text. Returns `None` when the
    /// text is not a JSON object.
    pub fn parse(text: &str) -> Option<Self> {
        serde_json::from_str(text).ok()
    }

    /// The human-readable detail message, if the body carries one.
    ///
    /// For a validation list, the first entry's `msg` is used.
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Array(items) => items
                .first()
                .and_then(|item| item.get("msg"))
                .and_then(Value::as_str)
                .filter(|msg| !msg.trim().is_empty())
                .map(str::to_string),
            _ => None,
        }
    }

    /// Extract the detail message straight from response text.
    pub fn detail_from_text(text: &str) -> Option<String> {
        Self::parse(text).and_then(|body| body.message())
    }
}
