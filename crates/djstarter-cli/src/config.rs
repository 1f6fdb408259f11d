//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables prefixed `DJSTARTER__`, e.g.
//!    `DJSTARTER__DEFAULTS__DATABASE=mysql`
//! 3. Config file (`--config`, else [`AppConfig::config_path`] if present)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use djstarter_core::domain::{AdminStyle, AuthMethod, Database, UiLanguage};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Behaviour of `new`.
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub database: Database,
    pub auth: AuthMethod,
    pub admin: AdminStyle,
    /// Unset means "detect from `LANG`".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<UiLanguage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Prompt before replacing an existing project directory.
    pub confirm_overwrite: bool,
}

impl AppConfig {
    /// Load configuration from file and environment on top of the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, Environment::with_prefix("DJSTARTER").separator("__"))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        debug!(path = %path.display(), required, "Loading configuration");

        Config::builder()
            .add_source(File::from(path).required(required))
            .add_source(env)
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize::<Self>()
            .context("Failed to deserialize configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.djstarter.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "djstarter", "djstarter")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".djstarter.toml"))
    }

    /// Look up a dotted key, rendered as a plain string.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "defaults.database" => self.defaults.database.to_string(),
            "defaults.auth" => self.defaults.auth.to_string(),
            "defaults.admin" => self.defaults.admin.to_string(),
            "defaults.language" => self
                .defaults
                .language
                .map_or_else(|| "auto".to_string(), |l| l.to_string()),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            "behavior.confirm_overwrite" => self.behavior.confirm_overwrite.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Every key [`Self::get`] understands.
    pub const KEYS: [&'static str; 7] = [
        "defaults.database",
        "defaults.auth",
        "defaults.admin",
        "defaults.language",
        "output.no_color",
        "output.format",
        "behavior.confirm_overwrite",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn no_env() -> Environment {
        Environment::with_prefix("DJSTARTER")
            .separator("__")
            .source(Some(HashMap::new()))
    }

    #[test]
    fn defaults_match_builtin_options() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.database, Database::Sqlite);
        assert_eq!(cfg.defaults.auth, AuthMethod::Session);
        assert!(cfg.defaults.language.is_none());
        assert!(!cfg.behavior.confirm_overwrite);
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&tmp.path().join("absent.toml"), false, no_env()).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_required_file_is_error() {
        let tmp = TempDir::new().unwrap();
        assert!(AppConfig::load_from(&tmp.path().join("absent.toml"), true, no_env()).is_err());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            "[defaults]\ndatabase = \"postgresql\"\nlanguage = \"en\"\n\n[behavior]\nconfirm_overwrite = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(&path, true, no_env()).unwrap();
        assert_eq!(cfg.defaults.database, Database::Postgresql);
        assert_eq!(cfg.defaults.language, Some(UiLanguage::En));
        assert_eq!(cfg.defaults.admin, AdminStyle::Default);
        assert!(cfg.behavior.confirm_overwrite);
    }

    #[test]
    fn environment_overrides_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[defaults]\ndatabase = \"postgresql\"\n").unwrap();

        let env = Environment::with_prefix("DJSTARTER")
            .separator("__")
            .source(Some(HashMap::from([(
                "DJSTARTER__DEFAULTS__DATABASE".to_string(),
                "mysql".to_string(),
            )])));

        let cfg = AppConfig::load_from(&path, true, env).unwrap();
        assert_eq!(cfg.defaults.database, Database::Mysql);
    }

    #[test]
    fn unknown_database_in_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[defaults]\ndatabase = \"oracle\"\n").unwrap();
        assert!(AppConfig::load_from(&path, true, no_env()).is_err());
    }

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        for key in AppConfig::KEYS {
            assert!(cfg.get(key).is_some(), "{key}");
        }
        assert_eq!(cfg.get("defaults.language").as_deref(), Some("auto"));
        assert!(cfg.get("does.not.exist").is_none());
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }

    #[test]
    fn toml_round_trips_through_loader() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        let mut cfg = AppConfig::default();
        cfg.defaults.auth = AuthMethod::Jwt;
        std::fs::write(&path, toml::to_string_pretty(&cfg).unwrap()).unwrap();

        assert_eq!(AppConfig::load_from(&path, true, no_env()).unwrap(), cfg);
    }
}
