//! Per-call credential resolution.

use std::fmt;
use std::sync::Arc;

use ava_core::ExecutionContext;

use crate::cookie::{TOKEN_COOKIE, USER_ID_COOKIE, cookie_value, normalize_token};
use crate::session_store::{SessionKey, SessionStore};

/// A normalized bearer credential. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Normalize a raw stored value. `None` when nothing usable is left.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        normalize_token(raw).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

/// Where a gateway call runs and where its credential comes from.
#[derive(Clone)]
pub enum CallContext {
    /// Server execution: the credential is the `token` cookie of the
    /// incoming request.
    Server { cookie_header: Option<String> },
    /// Browser execution: the credential is in local persistent storage.
    Browser { store: Arc<dyn SessionStore> },
}

impl CallContext {
    #[must_use]
    pub const fn server(cookie_header: Option<String>) -> Self {
        Self::Server { cookie_header }
    }

    #[must_use]
    pub fn browser(store: Arc<dyn SessionStore>) -> Self {
        Self::Browser { store }
    }

    #[must_use]
    pub const fn execution(&self) -> ExecutionContext {
        match self {
            Self::Server { .. } => ExecutionContext::Server,
            Self::Browser { .. } => ExecutionContext::Browser,
        }
    }

    /// Resolve the bearer credential. Absence is not an error.
    #[must_use]
    pub fn bearer(&self) -> Option<BearerToken> {
        let raw = match self {
            Self::Server { cookie_header } => cookie_header
                .as_deref()
                .and_then(|h| cookie_value(h, TOKEN_COOKIE)),
            Self::Browser { store } => store.get(SessionKey::Token),
        };
        raw.as_deref().and_then(BearerToken::parse)
    }

    /// Id of the logged-in user, if the session carries one.
    #[must_use]
    pub fn user_id(&self) -> Option<String> {
        let raw = match self {
            Self::Server { cookie_header } => cookie_header
                .as_deref()
                .and_then(|h| cookie_value(h, USER_ID_COOKIE)),
            Self::Browser { store } => store.get(SessionKey::UserId),
        }?;
        let id = raw.trim().trim_matches('"').trim();
        (!id.is_empty()).then(|| id.to_string())
    }
}

impl fmt::Debug for CallContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Server { cookie_header } => f
                .debug_struct("Server")
                .field("has_cookie", &cookie_header.is_some())
                .finish(),
            Self::Browser { .. } => f.debug_struct("Browser").finish_non_exhaustive(),
        }
    }
}
