//! `svcforge init`: create a default configuration file.

use std::path::PathBuf;

use tracing::info;

use crate::{
    cli::InitArgs,
    config::{AppConfig, DEFAULT_CONFIG_TOML, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Create a default svcforge configuration file.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let config_path = target_path(args.global)?;

    // Bail early if the file already exists and --force was not given.
    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    // Ensure parent directory exists.
    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(&config_path, DEFAULT_CONFIG_TOML)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    info!(path = %config_path.display(), "Configuration written");
    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

fn target_path(global: bool) -> CliResult<PathBuf> {
    if !global {
        return Ok(PathBuf::from(LOCAL_CONFIG_FILE));
    }
    AppConfig::global_config_path().ok_or_else(|| CliError::ConfigError {
        message: "No per-user configuration directory on this platform".into(),
        source: None,
    })
}
