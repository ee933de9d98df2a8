//! Result printing for all commands.

use std::fmt::Display;
use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use svcforge_core::application::WriteOutcome;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Writes command results to stdout in the resolved format.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// `--output-format` wins over `output.format`; `auto` becomes `human`
    /// on a terminal and `plain` otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => match config.output.format.as_str() {
                "json" => OutputFormat::Json,
                "plain" => OutputFormat::Plain,
                _ => OutputFormat::Auto,
            },
            other => other,
        };

        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
        }
    }

    fn line(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(text)
    }

    /// Unstyled line; suppressed by `--quiet` like everything but JSON.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.line(msg)
    }

    /// `✓ msg` in green; bare `msg` without color.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.no_color {
            return self.line(msg);
        }
        self.line(&format!("{} {}", "\u{2713}".green().bold(), msg.green()))
    }

    /// `⚠ msg` in yellow; `Warning: msg` without color.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.no_color {
            return self.line(&format!("Warning: {msg}"));
        }
        self.line(&format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow()))
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.no_color {
            return self.line(msg);
        }
        self.line(&format!("{} {}", "\u{2139}".blue().bold(), msg.blue()))
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.no_color {
            return self.line(text);
        }
        self.line(&text.cyan().bold().to_string())
    }

    /// `Created: <path>`, or `Overwrote: <path>` followed by a warning.
    pub fn file_written(&self, path: &impl Display, outcome: WriteOutcome) -> io::Result<()> {
        self.success(&file_line(path, outcome))?;
        if outcome == WriteOutcome::Overwritten {
            self.warning(&format!("{path} already existed and was replaced"))?;
        }
        Ok(())
    }

    /// Pretty JSON on stdout, printed even with `--quiet`.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value)?;
        self.term.write_line(&text)
    }

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

fn file_line(path: &impl Display, outcome: WriteOutcome) -> String {
    match outcome {
        WriteOutcome::Created => format!("Created: {path}"),
        WriteOutcome::Overwritten => format!("Overwrote: {path}"),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
