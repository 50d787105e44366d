//! Enumerations shared with the LMS backend.
//!
//! All enums serialize with the backend's upper-case spellings. Role names
//! from free-form strings go through `Role::parse`, which never fails hard:
//! callers get `None` and decide the fallback.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// User category governing default navigation and route access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Teacher,
    /// Learner. The backend spells it `USER`; some pages use `STUDENT`.
    #[serde(alias = "STUDENT")]
    User,
}

impl Role {
    /// Parse a role name, case-insensitively. Returns `None` for anything
    /// outside the known enumeration.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Some(Self::Admin),
            "TEACHER" => Some(Self::Teacher),
            "USER" | "STUDENT" => Some(Self::User),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Teacher => "TEACHER",
            Self::User => "USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TaskContentType
// ---------------------------------------------------------------------------

/// Kind of file or link attached to a task or a learner's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskContentType {
    Pdf,
    Video,
    Mp4,
    Jpg,
    Png,
    Mp3,
    Docx,
    Link,
    Text,
}

impl TaskContentType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Video => "VIDEO",
            Self::Mp4 => "MP4",
            Self::Jpg => "JPG",
            Self::Png => "PNG",
            Self::Mp3 => "MP3",
            Self::Docx => "DOCX",
            Self::Link => "LINK",
            Self::Text => "TEXT",
        }
    }
}

impl fmt::Display for TaskContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DifficultyLevel
// ---------------------------------------------------------------------------

/// Task difficulty, using the backend's Portuguese spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DifficultyLevel {
    Facil,
    Medio,
    Dificil,
}

impl DifficultyLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Facil => "FACIL",
            Self::Medio => "MEDIO",
            Self::Dificil => "DIFICIL",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UserStatus
// ---------------------------------------------------------------------------

/// Account activation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Ativo,
    Inativo,
}

impl UserStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ativo => "ATIVO",
            Self::Inativo => "INATIVO",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
