//! # ava-auth
//!
//! Session handling for the AVA gateway.
//!
//! Provides the session store (`MemoryStore`, `FileStore`), bearer resolution
//! from either the request cookie (server) or local storage (browser),
//! unverified token payload decoding, and role-based route mapping.

pub mod claims;
pub mod cookie;
pub mod credential;
pub mod error;
pub mod routes;
pub mod session_store;

pub use claims::{AuthPayload, decode_payload, has_any_role};
pub use credential::{BearerToken, CallContext};
pub use error::AuthError;
pub use routes::{Landing, RouteDecision, guard, has_route_access, landing_route};
pub use session_store::{FileStore, MemoryStore, SessionKey, SessionStore};

use ava_core::entities::LoginData;

/// Persist a successful login: token and user id are written together.
///
/// If the user id cannot be written the token is removed again so the store
/// never holds half a session.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` for a blank token, or
/// `AuthError::SessionStore` if either value cannot be written.
pub fn persist_login(store: &dyn SessionStore, login: &LoginData) -> Result<(), AuthError> {
    let token = BearerToken::parse(&login.token)
        .ok_or_else(|| AuthError::InvalidToken("login returned an empty token".into()))?;

    store.set(SessionKey::Token, token.as_str())?;
    if let Err(error) = store.set(SessionKey::UserId, &login.id.to_string()) {
        if let Err(rollback) = store.remove(SessionKey::Token) {
            tracing::warn!(%rollback, "failed to remove token after user id write failed");
        }
        return Err(error);
    }

    tracing::debug!(user_id = login.id, "session persisted");
    Ok(())
}

/// Clear the stored token and user id.
///
/// # Errors
///
/// Returns `AuthError::SessionStore` if a stored value cannot be removed.
pub fn logout(store: &dyn SessionStore) -> Result<(), AuthError> {
    store.clear()
}

/// Resolve the current session payload, if the stored token still decodes.
#[must_use]
pub fn current_session(ctx: &CallContext) -> Option<AuthPayload> {
    ctx.bearer().and_then(|t| decode_payload(t.as_str()))
}
