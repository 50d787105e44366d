//! Execution context marker.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a gateway call executes.
///
/// Server execution may reach an internal backend address that the browser
/// cannot, and must never touch browser-only facilities such as toast
/// notifications. The context is always passed explicitly; nothing sniffs it
/// from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionContext {
    /// Server-side rendering or any other non-interactive process.
    Server,
    /// Interactive client with local persistent storage.
    Browser,
}

impl ExecutionContext {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::Browser => "browser",
        }
    }

    /// Whether user-facing notifications may be pushed in this context.
    #[must_use]
    pub const fn can_notify(self) -> bool {
        matches!(self, Self::Browser)
    }
}

impl fmt::Display for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_browser_can_notify() {
        assert!(ExecutionContext::Browser.can_notify());
        assert!(!ExecutionContext::Server.can_notify());
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&ExecutionContext::Server).unwrap();
        assert_eq!(json, "\"server\"");
    }
}
