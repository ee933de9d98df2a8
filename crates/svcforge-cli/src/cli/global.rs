//! Flags accepted before or after any subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

/// Flags shared by every svcforge subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more. `-v` shows progress, `-vv` resolution details, `-vvv`
    /// everything. Failures also print their cause chain and suggestions.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "More logging and error detail (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Print nothing but errors and explicitly requested JSON.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors"
    )]
    pub quiet: bool,

    /// Plain output. Also set by a `NO_COLOR` environment variable.
    #[arg(long = "no-color", global = true, env = "NO_COLOR", help = "Disable colors")]
    pub no_color: bool,

    /// Read configuration from this file instead of `./svcforge.toml`.
    /// The file must exist.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Use this configuration file"
    )]
    pub config: Option<PathBuf>,

    /// How results are printed on stdout.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Result format on stdout"
    )]
    pub output_format: OutputFormat,

    /// Also write log events, as JSON lines, to this file.
    #[arg(
        long = "log-file",
        global = true,
        value_name = "PATH",
        help = "Also write JSON logs to PATH"
    )]
    pub log_file: Option<PathBuf>,
}

/// Result format on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Colored, with status symbols.
    Human,
    /// No colors or symbols.
    Plain,
    /// One JSON document per command.
    Json,
}
