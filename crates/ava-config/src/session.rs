//! Local session storage configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Directory holding the persisted credential and user id.
    /// Empty means `~/.ava/session`.
    #[serde(default)]
    pub dir: String,
}

impl SessionConfig {
    /// Resolve the session directory, falling back to the home directory.
    ///
    /// Returns `None` only when `dir` is unset and no home directory exists.
    #[must_use]
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        if !self.dir.trim().is_empty() {
            return Some(PathBuf::from(self.dir.trim()));
        }
        dirs::home_dir().map(|h| h.join(".ava").join("session"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let config = SessionConfig {
            dir: "/tmp/ava-session".into(),
        };
        assert_eq!(
            config.resolved_dir(),
            Some(PathBuf::from("/tmp/ava-session"))
        );
    }

    #[test]
    fn default_dir_is_under_home() {
        let config = SessionConfig::default();
        if let Some(dir) = config.resolved_dir() {
            assert!(dir.ends_with(".ava/session"));
        }
    }
}
