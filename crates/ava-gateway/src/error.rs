//! Gateway error types.

use ava_config::ConfigError;
use thiserror::Error;

/// Category of a failed call, independent of the exact status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 401, or no credential available for an endpoint that needs one.
    Unauthenticated,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 400 and 422
    Validation,
    /// 409
    Conflict,
    /// 500 and 503
    Server,
    /// The request never got a response.
    Network,
    /// Any other status, or a local failure.
    Other,
}

impl ErrorKind {
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthenticated,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            400 | 422 => Self::Validation,
            409 => Self::Conflict,
            500 | 503 => Self::Server,
            _ => Self::Other,
        }
    }
}

/// Errors returned by gateway calls. `Display` is the user-facing message.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        kind: ErrorKind,
        /// Backend-provided message, or the fixed message for the status.
        message: String,
    },

    /// No credential for an endpoint that requires one. No request was sent.
    #[error("Unauthorized. Log in again.")]
    NotAuthenticated,

    /// HTTP transport error.
    #[error("Connection error. Check your connection and try again.")]
    Network(#[source] reqwest::Error),

    /// A success response whose body could not be parsed.
    #[error("unexpected response from server: {0}")]
    Decode(String),

    /// A request body could not be built.
    #[error("invalid request: {0}")]
    Encode(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GatewayError {
    /// HTTP status, when the backend answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Api { kind, .. } => *kind,
            Self::NotAuthenticated => ErrorKind::Unauthenticated,
            Self::Network(_) => ErrorKind::Network,
            Self::Decode(_) | Self::Encode(_) | Self::Config(_) => ErrorKind::Other,
        }
    }

    /// Whether trying again (possibly after logging in) can succeed.
    /// The gateway itself never retries.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Unauthenticated | ErrorKind::Server | ErrorKind::Network
        )
    }
}
