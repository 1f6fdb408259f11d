//! `djstarter config` — inspect configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&value)?;
            output.json(&serde_json::json!({ "key": key, "value": value }))?;
        }

        ConfigCommands::List => {
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(serialised.trim_end())?;
            output.json(&config)?;
        }

        ConfigCommands::Path => {
            let path = AppConfig::config_path();
            output.print(&path.display().to_string())?;
            output.json(&serde_json::json!({ "path": path }))?;
        }
    }

    Ok(())
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    config.get(key).ok_or_else(|| CliError::ConfigError {
        message: format!(
            "Unknown config key: '{key}' (known keys: {})",
            AppConfig::KEYS.join(", ")
        ),
        source: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use djstarter_core::domain::Database;

    #[test]
    fn get_known_key() {
        let mut cfg = AppConfig::default();
        cfg.defaults.database = Database::Postgresql;
        assert_eq!(get_config_value(&cfg, "defaults.database").unwrap(), "postgresql");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let err = get_config_value(&AppConfig::default(), "defaults.lang").unwrap_err();
        assert!(matches!(&err, CliError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn get_no_color_default() {
        assert_eq!(
            get_config_value(&AppConfig::default(), "output.no_color").unwrap(),
            "false"
        );
    }
}
