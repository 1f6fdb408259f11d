//! Domain value objects: Database, AuthMethod, AdminStyle, UiLanguage.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! They hold no inference logic; the implication rules live in
//! `configuration.rs`. This file's only job is to define the types, their
//! string representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Database ─────────────────────────────────────────────────────────────────

/// Database backend of the generated project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    /// Embedded file database.
    #[default]
    Sqlite,
    Postgresql,
    Mysql,
}

impl Database {
    pub const ALL: [Self; 3] = [Self::Sqlite, Self::Postgresql, Self::Mysql];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Postgresql => "postgresql",
            Self::Mysql => "mysql",
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Database {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "postgresql" => Ok(Self::Postgresql),
            "mysql" => Ok(Self::Mysql),
            other => Err(DomainError::InvalidOption {
                field: "database",
                value: other.into(),
                expected: "sqlite, postgresql, mysql",
            }),
        }
    }
}

// ── AuthMethod ───────────────────────────────────────────────────────────────

/// Authentication scheme used by the generated REST API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    #[default]
    Session,
    Token,
    Jwt,
}

impl AuthMethod {
    pub const ALL: [Self; 3] = [Self::Session, Self::Token, Self::Jwt];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Session => "session",
            Self::Token => "token",
            Self::Jwt => "jwt",
        }
    }

    /// Token and JWT both ship the `djoser` auth endpoints.
    pub const fn uses_djoser(self) -> bool {
        matches!(self, Self::Token | Self::Jwt)
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "session" => Ok(Self::Session),
            "token" => Ok(Self::Token),
            "jwt" => Ok(Self::Jwt),
            other => Err(DomainError::InvalidOption {
                field: "auth",
                value: other.into(),
                expected: "session, token, jwt",
            }),
        }
    }
}

// ── AdminStyle ───────────────────────────────────────────────────────────────

/// Skin of the Django admin interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminStyle {
    #[default]
    Default,
    /// Themed admin via `django-jazzmin`.
    Jazzmin,
}

impl AdminStyle {
    pub const ALL: [Self; 2] = [Self::Default, Self::Jazzmin];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Jazzmin => "jazzmin",
        }
    }

    pub const fn is_themed(self) -> bool {
        matches!(self, Self::Jazzmin)
    }
}

impl fmt::Display for AdminStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "jazzmin" => Ok(Self::Jazzmin),
            other => Err(DomainError::InvalidOption {
                field: "admin",
                value: other.into(),
                expected: "default, jazzmin",
            }),
        }
    }
}

// ── UiLanguage ───────────────────────────────────────────────────────────────

/// Language of human-readable text (messages, README).
///
/// Never affects code identifiers in the generated project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiLanguage {
    #[default]
    Zh,
    En,
}

impl UiLanguage {
    pub const ALL: [Self; 2] = [Self::Zh, Self::En];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    /// Pick a language from a locale string such as the `LANG` variable.
    ///
    /// Anything starting with `zh` selects Chinese; everything else,
    /// including an unset variable, selects English.
    pub fn detect(locale: Option<&str>) -> Self {
        match locale {
            Some(l) if l.starts_with("zh") => Self::Zh,
            _ => Self::En,
        }
    }
}

impl fmt::Display for UiLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UiLanguage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zh" => Ok(Self::Zh),
            "en" => Ok(Self::En),
            other => Err(DomainError::InvalidOption {
                field: "language",
                value: other.into(),
                expected: "zh, en",
            }),
        }
    }
}
