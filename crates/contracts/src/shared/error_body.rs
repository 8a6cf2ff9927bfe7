use serde::{Deserialize, Serialize};

/// Error body returned by the API on non-2xx responses: `{"detail": "..."}`
///
/// Validation failures may carry a structured `detail`, so it is kept as raw
/// JSON and only surfaced when it is a plain string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Server-supplied message, if the body carries a non-empty string detail.
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}
