//! Backend API endpoint configuration.

use ava_core::ExecutionContext;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_user_agent() -> String {
    "ava-gateway/0.1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL used for server execution. May be an internal network
    /// address the browser cannot reach.
    #[serde(default)]
    pub internal_url: String,

    /// Base URL of the public-facing origin, used for browser execution.
    #[serde(default)]
    pub public_url: String,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            internal_url: String::new(),
            public_url: String::new(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Check if at least one base URL is set.
    pub fn is_configured(&self) -> bool {
        !self.internal_url.trim().is_empty() || !self.public_url.trim().is_empty()
    }

    /// Resolve the base URL for an execution context, without a trailing slash.
    ///
    /// Server execution prefers `internal_url` and falls back to `public_url`.
    /// Browser execution only ever uses `public_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingUrl`] when no usable URL is set and
    /// [`ConfigError::InvalidUrl`] when the URL is not `http(s)://`.
    pub fn base_url(&self, context: ExecutionContext) -> Result<String, ConfigError> {
        let (field, raw) = match context {
            ExecutionContext::Server if !self.internal_url.trim().is_empty() => {
                ("api.internal_url", self.internal_url.trim())
            }
            ExecutionContext::Server | ExecutionContext::Browser => {
                ("api.public_url", self.public_url.trim())
            }
        };

        if raw.is_empty() {
            return Err(ConfigError::MissingUrl { field });
        }
        if !(raw.starts_with("http://") || raw.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl {
                field,
                reason: format!("expected an http(s) URL, got '{raw}'"),
            });
        }

        Ok(raw.trim_end_matches('/').to_string())
    }
}
