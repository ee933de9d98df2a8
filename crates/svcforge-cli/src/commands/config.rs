//! `svcforge config`: inspect configuration values.

use serde_json::Value;

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
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
                return Ok(());
            }
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&config.config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `services.namespace`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let tree = serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    let value = key
        .split('.')
        .try_fold(&tree, |node, part| node.get(part))
        .ok_or_else(|| CliError::InvalidInput {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        })?;

    Ok(match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "services.namespace").unwrap(), "App");
        assert_eq!(get_config_value(&cfg, "project.source_dir").unwrap(), "app");
    }

    #[test]
    fn get_enum_key() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "services.suffix_policy").unwrap(),
            "contains"
        );
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn section_prints_as_json() {
        let cfg = AppConfig::default();
        let stubs = get_config_value(&cfg, "stubs").unwrap();
        assert!(stubs.contains("\"strict\":false"));
    }
}
