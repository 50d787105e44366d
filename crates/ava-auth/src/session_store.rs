//! Persistent client-side session state.
//!
//! A session is two values: the bearer credential and the logged-in user's
//! id. They are written together on login and cleared together on logout.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::AuthError;

/// The values a session store knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    Token,
    UserId,
}

impl SessionKey {
    pub const ALL: [Self; 2] = [Self::Token, Self::UserId];

    /// Storage name, matching the cookie names used server side.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::UserId => "userId",
        }
    }

    const fn file_name(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::UserId => "user_id",
        }
    }
}

/// Key/value storage for the session.
///
/// `get` never fails: a missing or unreadable value is simply absent.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: SessionKey) -> Option<String>;

    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` if the value cannot be persisted.
    fn set(&self, key: SessionKey, value: &str) -> Result<(), AuthError>;

    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` if the value exists but cannot be removed.
    fn remove(&self, key: SessionKey) -> Result<(), AuthError>;

    /// Remove every session value.
    ///
    /// # Errors
    ///
    /// Returns the first removal error. Later keys are still attempted.
    fn clear(&self) -> Result<(), AuthError> {
        let mut first_error = None;
        for key in SessionKey::ALL {
            if let Err(error) = self.remove(key) {
                tracing::warn!(key = key.as_str(), %error, "failed to clear session value");
                first_error.get_or_insert(error);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-process store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<SessionKey, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a token.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(SessionKey::Token, token.to_string());
        store
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: SessionKey) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), AuthError> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: SessionKey) -> Result<(), AuthError> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&key);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// One file per key under a directory. Files are `0600` and the directory
/// `0700` on Unix.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under `~/.ava/session`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` if no home directory can be found.
    pub fn in_home() -> Result<Self, AuthError> {
        dirs::home_dir()
            .map(|h| Self::new(h.join(".ava").join("session")))
            .ok_or_else(|| {
                AuthError::SessionStore("home directory not found, cannot store session".into())
            })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: SessionKey) -> PathBuf {
        self.dir.join(key.file_name())
    }

    fn ensure_dir(&self) -> Result<(), AuthError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| AuthError::SessionStore(format!("mkdir {}: {e}", self.dir.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.dir, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", self.dir.display());
            }
        }
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: SessionKey) -> Option<String> {
        fs::read_to_string(self.path(key))
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), AuthError> {
        self.ensure_dir()?;
        let path = self.path(key);
        fs::write(&path, value)
            .map_err(|e| AuthError::SessionStore(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::SessionStore(format!("chmod {}: {e}", path.display())))?;
        }

        Ok(())
    }

    fn remove(&self, key: SessionKey) -> Result<(), AuthError> {
        let path = self.path(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                AuthError::SessionStore(format!("failed to delete {}: {e}", path.display()))
            })?;
        }
        Ok(())
    }
}
