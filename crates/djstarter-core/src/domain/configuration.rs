//! The `Configuration` aggregate and its resolver.
//!
//! A `Configuration` is the normalized description of the project the user
//! wants to generate. The implication rules are applied once, in
//! [`resolve`]; once a `Configuration` exists it is never mutated.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;

use serde::Serialize;

use crate::domain::options::{AdminStyle, AuthMethod, Database, UiLanguage};

// ── Raw options ───────────────────────────────────────────────────────────────

/// User-supplied options, each already valid against its enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOptions {
    pub name: String,
    pub database: Database,
    pub api: bool,
    pub auth: AuthMethod,
    pub admin: AdminStyle,
    pub custom_user: bool,
    pub docker: bool,
    pub language: UiLanguage,
}

impl RawOptions {
    /// Options for `name` with every other field at its default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            database: Database::default(),
            api: false,
            auth: AuthMethod::default(),
            admin: AdminStyle::default(),
            custom_user: false,
            docker: false,
            language: UiLanguage::default(),
        }
    }

    pub fn with_database(mut self, database: Database) -> Self {
        self.database = database;
        self
    }

    pub fn with_api(mut self, api: bool) -> Self {
        self.api = api;
        self
    }

    pub fn with_auth(mut self, auth: AuthMethod) -> Self {
        self.auth = auth;
        self
    }

    pub fn with_admin(mut self, admin: AdminStyle) -> Self {
        self.admin = admin;
        self
    }

    pub fn with_custom_user(mut self, custom_user: bool) -> Self {
        self.custom_user = custom_user;
        self
    }

    pub fn with_docker(mut self, docker: bool) -> Self {
        self.docker = docker;
        self
    }

    pub fn with_language(mut self, language: UiLanguage) -> Self {
        self.language = language;
        self
    }
}

// ── Aggregate ─────────────────────────────────────────────────────────────────

/// A normalized generation configuration.
///
/// Guaranteed on construction:
/// - API enabled with session auth has been upgraded to token auth
/// - API enabled or themed admin implies a custom user model and containers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Configuration {
    name: String,
    database: Database,
    api_enabled: bool,
    auth_method: AuthMethod,
    admin_style: AdminStyle,
    custom_user_model: bool,
    containerized: bool,
    language: UiLanguage,
}

/// Normalize raw options into a [`Configuration`].
///
/// Pure and infallible: every individual value was already checked against
/// its enumeration by the caller.
pub fn resolve(options: RawOptions) -> Configuration {
    let RawOptions {
        name,
        database,
        api,
        mut auth,
        admin,
        mut custom_user,
        mut docker,
        language,
    } = options;

    if api && auth == AuthMethod::Session {
        auth = AuthMethod::Token;
    }
    if api || admin.is_themed() {
        custom_user = true;
        docker = true;
    }

    Configuration {
        name,
        database,
        api_enabled: api,
        auth_method: auth,
        admin_style: admin,
        custom_user_model: custom_user,
        containerized: docker,
        language,
    }
}

impl Configuration {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub const fn database(&self) -> Database {
        self.database
    }
    pub const fn api_enabled(&self) -> bool {
        self.api_enabled
    }
    pub const fn auth_method(&self) -> AuthMethod {
        self.auth_method
    }
    pub const fn admin_style(&self) -> AdminStyle {
        self.admin_style
    }
    pub const fn custom_user_model(&self) -> bool {
        self.custom_user_model
    }
    pub const fn containerized(&self) -> bool {
        self.containerized
    }
    pub const fn language(&self) -> UiLanguage {
        self.language
    }

    /// The raw options that resolve back to this configuration.
    pub fn to_options(&self) -> RawOptions {
        RawOptions {
            name: self.name.clone(),
            database: self.database,
            api: self.api_enabled,
            auth: self.auth_method,
            admin: self.admin_style,
            custom_user: self.custom_user_model,
            docker: self.containerized,
            language: self.language,
        }
    }
}

impl From<RawOptions> for Configuration {
    fn from(options: RawOptions) -> Self {
        resolve(options)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}", self.name, self.database)?;
        if self.api_enabled {
            write!(f, ", api/{}", self.auth_method)?;
        }
        if self.admin_style.is_themed() {
            write!(f, ", {}", self.admin_style)?;
        }
        if self.custom_user_model {
            f.write_str(", custom-user")?;
        }
        if self.containerized {
            f.write_str(", docker")?;
        }
        f.write_str(")")
    }
}
