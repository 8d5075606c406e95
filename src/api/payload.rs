//! Commander Payload
//!
//! The backend's commander record, kept opaque. Nothing in this crate looks
//! inside it; it is carried from the response to the screen unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque commander record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommanderPayload(serde_json::Value);

impl CommanderPayload {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    /// A value that counts as "nothing was handed over": `null`, `false`,
    /// zero or the empty string. Objects and arrays are never blank, even
    /// when empty.
    pub fn is_blank(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(_) | Value::Object(_) => false,
        }
    }

    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_json(self) -> serde_json::Value {
        self.0
    }

    /// Pretty-printed JSON for display
    pub fn to_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

impl From<serde_json::Value> for CommanderPayload {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for CommanderPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
