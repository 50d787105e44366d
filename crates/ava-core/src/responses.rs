//! Wire envelopes returned by the LMS backend.
//!
//! Successful responses wrap their payload as `{ "message": ..., "data": ... }`.
//! Failed responses may carry a JSON body with a `message` and/or `error`
//! field, or nothing parseable at all.

use serde::{Deserialize, Serialize};

/// Success envelope. Gateway functions unwrap and return `data`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

/// Error body as sent by the backend. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Parse an error body, returning `None` when it is not a JSON object.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// The backend's own explanation: `message` first, then `error`.
    /// Blank strings count as absent.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .or_else(|| self.error.as_deref().filter(|e| !e.trim().is_empty()))
    }
}
