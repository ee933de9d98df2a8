//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`ScaffoldSettings`] derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables `SVCFORGE_<SECTION>__<KEY>`
//! 3. Config file: `--config`, else `./svcforge.toml`, else the per-user file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use svcforge_core::domain::{ScaffoldSettings, SuffixPolicy};

use crate::error::{CliError, CliResult};

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "svcforge.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "SVCFORGE";

/// Commented default configuration written by `svcforge init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# svcforge configuration

[project]
# Host application root.
root = "."
# Source root, relative to `root`.
source_dir = "app"
# Namespace token that maps onto `source_dir`.
root_namespace = "App"

[services]
# Base namespace for generated services.
namespace = "App"
# contains | ends-with
suffix_policy = "contains"
extension = "php"

[stubs]
# Directory of published stubs (see `svcforge stubs publish`).
# path = "stubs"
# Fail when a stub leaves placeholders unresolved.
strict = false

[output]
no_color = false
format = "human"
"#;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub project: ProjectConfig,
    pub services: ServicesConfig,
    pub stubs: StubsConfig,
    pub output: OutputConfig,

    /// File the values were read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub root: PathBuf,
    pub source_dir: PathBuf,
    pub root_namespace: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicesConfig {
    pub namespace: String,
    pub suffix_policy: SuffixPolicy,
    pub extension: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StubsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            project: ProjectConfig {
                root: PathBuf::from("."),
                source_dir: PathBuf::from("app"),
                root_namespace: ScaffoldSettings::DEFAULT_ROOT_NAMESPACE.into(),
            },
            services: ServicesConfig {
                namespace: ScaffoldSettings::DEFAULT_ROOT_NAMESPACE.into(),
                suffix_policy: SuffixPolicy::default(),
                extension: ScaffoldSettings::DEFAULT_EXTENSION.into(),
            },
            stubs: StubsConfig::default(),
            output: OutputConfig {
                no_color: false,
                format: "human".into(),
            },
            source: None,
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then the
    /// environment.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let file = match config_file {
            Some(path) => Some((path.clone(), true)),
            None => Self::discover_file().map(|p| (p, false)),
        };
        Self::load_from(file, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(file: Option<(PathBuf, bool)>, env: Environment) -> CliResult<Self> {
        let defaults = Config::try_from(&Self::default()).map_err(config_error)?;
        let mut builder = Config::builder().add_source(defaults);

        if let Some((path, required)) = &file {
            debug!(path = %path.display(), required, "Reading config file");
            builder = builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(*required),
            );
        }

        let mut config: Self = builder
            .add_source(
                env.prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(config_error)?;

        config.source = file.map(|(path, _)| path).filter(|p| p.is_file());
        Ok(config)
    }

    /// `./svcforge.toml` if present, else the per-user file if present.
    fn discover_file() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }
        Self::global_config_path().filter(|p| p.is_file())
    }

    /// Path to the per-user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "svcforge", "svcforge")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Path shown by `svcforge config path`: the file in use, or where
    /// `svcforge init --global` would write one.
    pub fn config_path(&self) -> PathBuf {
        self.source
            .clone()
            .or_else(Self::global_config_path)
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Translate configuration plus CLI overrides into core settings.
    pub fn to_settings(
        &self,
        root: Option<&Path>,
        namespace: Option<&str>,
    ) -> CliResult<ScaffoldSettings> {
        let source_root = root
            .unwrap_or(&self.project.root)
            .join(&self.project.source_dir);
        let namespace = namespace.unwrap_or(&self.services.namespace);

        let settings = ScaffoldSettings::new(namespace, source_root)
            .with_root_namespace(&self.project.root_namespace)
            .with_extension(self.services.extension.as_str())
            .with_suffix_policy(self.services.suffix_policy)
            .with_strict_placeholders(self.stubs.strict);
        settings.validate().map_err(|e| CliError::Core(e.into()))?;

        debug!(
            namespace = %settings.base_namespace,
            source_root = %settings.source_root().display(),
            policy = %settings.suffix_policy,
            "Settings resolved"
        );
        Ok(settings)
    }

    /// Configured stubs directory, relative paths taken from the project
    /// root.
    pub fn stubs_dir(&self, root: Option<&Path>) -> Option<PathBuf> {
        self.stubs.path.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                root.unwrap_or(&self.project.root).join(path)
            }
        })
    }
}

fn config_error(e: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}
