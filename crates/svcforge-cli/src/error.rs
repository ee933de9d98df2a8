//! CLI error type and its mapping to messages and exit codes.

use std::error::Error as _;
use std::fmt::Write as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use svcforge_core::error::{ErrorCategory as CoreCategory, ForgeError};

pub type CliResult<T> = Result<T, CliError>;

/// Everything a command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input rejected by the CLI itself, e.g. an unknown config key.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration could not be loaded or serialised.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error(transparent)]
    Core(#[from] ForgeError),

    /// Filesystem work done by the CLI (`init`), not by the core.
    #[error("{message}: {source}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: "I/O error".into(),
            source: err,
        }
    }
}

/// Coarse grouping that decides the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

impl CliError {
    /// Hints shown under `Suggestions:` in verbose mode.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {message}"),
                "Run 'svcforge config list' to see the available keys".into(),
            ],
            Self::ConfigError { .. } => vec![
                "Check ./svcforge.toml or the file passed with --config".into(),
                "Check SVCFORGE_* environment variables".into(),
                "Run 'svcforge init --force' to write a fresh default config".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec!["Check that the directory is writable".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
        }
    }

    /// Process exit code: 2 bad input, 3 missing stub, 4 configuration,
    /// 1 for write failures and everything else.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Terminal rendering. A single `Error:` line unless `verbose`.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    /// Same as [`Self::format_colored`] without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    fn render(&self, verbose: bool, color: bool) -> String {
        let mut out = if color {
            format!("{} {}\n", "Error:".red().bold(), self.to_string().red())
        } else {
            format!("Error: {self}\n")
        };
        if !verbose {
            return out;
        }

        let mut cause = self.source();
        while let Some(err) = cause {
            let line = format!("  Caused by: {err}");
            let _ = writeln!(out, "{}", if color { line.dimmed().to_string() } else { line });
            cause = err.source();
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let title = if color {
                "Suggestions:".yellow().bold().to_string()
            } else {
                "Suggestions:".to_owned()
            };
            let _ = writeln!(out, "\n{title}");
            for hint in suggestions {
                let _ = writeln!(out, "  {hint}");
            }
        }
        out
    }

    /// Record the failure for `-vv` and `--log-file`; the user-facing line
    /// is printed separately.
    pub fn log(&self) {
        tracing::debug!(
            category = ?self.category(),
            exit_code = self.exit_code(),
            cause = ?self.source().map(|s| s.to_string()),
            "Command failed: {self}"
        );
    }
}

/// Attach a context message to a foreign error at the call-site.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| CliError::IoError {
            message: f().into(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;
    use svcforge_core::application::ApplicationError;
    use svcforge_core::domain::DomainError;

    fn core(err: impl Into<ForgeError>) -> CliError {
        CliError::Core(err.into())
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn invalid_name_exits_two() {
        let err = core(DomainError::InvalidInput {
            input: String::new(),
            reason: "name cannot be empty".into(),
        });
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn invalid_namespace_exits_two() {
        let err = core(DomainError::InvalidNamespace {
            namespace: "App\\9x".into(),
            reason: "segment is not an identifier".into(),
        });
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_stub_exits_three() {
        let err = core(ApplicationError::StubNotFound {
            stub: "interface.stub".into(),
            location: "./stubs".into(),
        });
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn configuration_exits_four() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn write_failures_exit_one() {
        let write = core(ApplicationError::WriteFailed {
            path: PathBuf::from("app/Services/UserService.php"),
            reason: "Permission denied".into(),
        });
        let partial = core(ApplicationError::PartiallyWritten {
            written: PathBuf::from("app/Services/OrderService.php"),
            failed: PathBuf::from("app/Services/Interfaces/OrderServiceInterface.php"),
            reason: "Permission denied".into(),
        });
        assert_eq!(write.exit_code(), 1);
        assert_eq!(partial.exit_code(), 1);
    }

    #[test]
    fn io_error_exits_one() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_is_one_line_by_default() {
        let err = core(ApplicationError::WriteFailed {
            path: PathBuf::from("app/Services/UserService.php"),
            reason: "Permission denied".into(),
        });
        let s = err.format_plain(false);
        assert_eq!(s.lines().count(), 1);
        assert!(s.starts_with("Error: "));
        assert!(s.contains("Permission denied"));
    }

    #[test]
    fn format_plain_verbose_adds_suggestions() {
        let err = core(ApplicationError::StubNotFound {
            stub: "service.stub".into(),
            location: "./stubs".into(),
        });
        let s = err.format_plain(true);
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn verbose_shows_cause_chain() {
        let err = CliError::IoError {
            message: "Failed to write svcforge.toml".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.format_plain(true).contains("Caused by: denied"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }
}
