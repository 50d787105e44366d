use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("session store error: {0}")]
    SessionStore(String),

    #[error("invalid token: {0}")]
    InvalidToken(String),
}
