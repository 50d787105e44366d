//! Errors from loading settings and resolving the backend URL.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layer failed to parse or merge.
    #[error("failed to load settings: {0}")]
    Load(#[from] figment::Error),

    #[error("no backend URL configured ({field} is empty)")]
    MissingUrl { field: &'static str },

    #[error("{field} is not a usable backend URL: {reason}")]
    InvalidUrl { field: &'static str, reason: String },
}
