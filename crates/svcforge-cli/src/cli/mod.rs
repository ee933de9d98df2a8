//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "svcforge",
    bin_name = "svcforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate service classes and interfaces from stubs",
    long_about = "svcforge creates a service class, and optionally its paired \
                  interface, from a short name, placing each file where the \
                  namespace says it belongs.",
    after_help = "EXAMPLES:\n\
        \x20 svcforge make-service user\n\
        \x20 svcforge make:service Order --interface\n\
        \x20 svcforge ms invoice --namespace 'App\\Domain\\Billing'\n\
        \x20 svcforge stubs publish",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a service class (and optionally its interface).
    #[command(
        name = "make-service",
        visible_aliases = ["make:service", "ms"],
        about = "Create a new service class",
        after_help = "EXAMPLES:\n\
            \x20 svcforge make-service user              # app/Services/UserService.php\n\
            \x20 svcforge make-service order -i          # plus Services/Interfaces/OrderServiceInterface.php\n\
            \x20 svcforge make-service report --dry-run  # show paths, write nothing"
    )]
    MakeService(MakeServiceArgs),

    /// Inspect or publish the stub templates.
    #[command(
        about = "Stub template management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 svcforge stubs list\n\
            \x20 svcforge stubs list --format json\n\
            \x20 svcforge stubs publish --dir stubs"
    )]
    Stubs(StubsCommands),

    /// Initialise an svcforge configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 svcforge init           # ./svcforge.toml\n\
            \x20 svcforge init --global  # per-user config\n\
            \x20 svcforge init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 svcforge completions bash > ~/.local/share/bash-completion/completions/svcforge\n\
            \x20 svcforge completions zsh  > ~/.zfunc/_svcforge\n\
            \x20 svcforge completions fish > ~/.config/fish/completions/svcforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the svcforge configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 svcforge config get services.namespace\n\
            \x20 svcforge config list\n\
            \x20 svcforge config path"
    )]
    Config(ConfigCommands),
}

// ── make-service ──────────────────────────────────────────────────────────────

/// Arguments for `svcforge make-service`.
#[derive(Debug, Args)]
pub struct MakeServiceArgs {
    /// Service name. `user`, `user-profile` and `UserService` are all
    /// accepted; the `Service` suffix is added when missing.
    #[arg(value_name = "NAME", help = "Service name")]
    pub name: String,

    /// Also generate the paired interface and implement it.
    #[arg(
        short = 'i',
        long = "interface",
        help = "Also create the service interface"
    )]
    pub interface: bool,

    /// Resolve and render but write nothing.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Host application root (overrides `project.root`).
    #[arg(long = "root", value_name = "DIR", help = "Application root directory")]
    pub root: Option<PathBuf>,

    /// Base namespace (overrides `services.namespace`).
    #[arg(
        long = "namespace",
        value_name = "NS",
        help = "Base namespace, e.g. App\\Domain\\Billing"
    )]
    pub namespace: Option<String>,
}

// ── stubs ─────────────────────────────────────────────────────────────────────

/// Subcommands for `svcforge stubs`.
#[derive(Debug, Subcommand)]
pub enum StubsCommands {
    /// List the stubs of the active store.
    #[command(visible_alias = "ls")]
    List {
        /// Output format.
        #[arg(
            long = "format",
            value_enum,
            default_value = "table",
            help = "Output format"
        )]
        format: ListFormat,
    },

    /// Copy the built-in stubs into a directory for customisation.
    Publish {
        /// Destination directory.
        #[arg(long = "dir", value_name = "DIR", default_value = "stubs")]
        dir: PathBuf,
    },
}

/// Output format for `stubs list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `svcforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the per-user config location instead of `./svcforge.toml`.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `svcforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `svcforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `services.namespace`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
