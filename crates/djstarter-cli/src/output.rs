//! Output management and formatting.

use std::io::{self, IsTerminal};
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;

use djstarter_core::domain::{Messages, Summary};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // An explicit flag wins over the configured format.
        let requested = if args.output_format == OutputFormat::Auto {
            parse_format(&config.output.format)
        } else {
            args.output_format
        };

        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
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
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet and JSON mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty-printed JSON on stdout.  Only written in JSON mode.
    pub fn json<T: Serialize>(&self, value: &T) -> CliResult<()> {
        if self.resolved_format != OutputFormat::Json {
            return Ok(());
        }
        let rendered = serde_json::to_string_pretty(value).map_err(|e| CliError::IoError {
            message: format!("Failed to serialise output: {e}"),
            source: io::Error::other(e),
        })?;
        self.term.write_line(&rendered)?;
        Ok(())
    }

    // ── Generation summary ────────────────────────────────────────────────

    /// `🚀 <generating>: <name>`
    pub fn generating(&self, messages: &Messages, name: &str) -> io::Result<()> {
        self.print(&format!("\u{1f680} {}: {}", messages.generating, name))
    }

    /// The closing lines of a run: features, then how to start the server.
    pub fn completed(&self, messages: &Messages, summary: &Summary) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        let (features, next) = if self.no_color {
            (summary.feature_line(), summary.next_step.clone())
        } else {
            (
                summary.feature_line().green().bold().to_string(),
                summary.next_step.cyan().to_string(),
            )
        };
        self.term
            .write_line(&format!("\u{2705} {}: {}", messages.complete, features))?;
        self.term
            .write_line(&format!("\u{1f4a1} {}", messages.next_steps))?;
        self.term.write_line(&format!("   {next}"))
    }

    /// A spinner on stderr while files are written.  `None` unless the
    /// output is interactive.
    pub fn spinner(&self, msg: impl Into<String>) -> Option<ProgressBar> {
        if self.is_silent()
            || self.resolved_format != OutputFormat::Human
            || !io::stderr().is_terminal()
        {
            return None;
        }
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let bar = ProgressBar::new_spinner().with_style(style).with_message(msg.into());
        bar.enable_steady_tick(Duration::from_millis(80));
        Some(bar)
    }

    /// Ask a yes/no question.  Declining maps to [`CliError::Cancelled`]
    /// at the call-site.
    pub fn confirm(&self, prompt: &str) -> CliResult<bool> {
        confirm(prompt)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    fn is_silent(&self) -> bool {
        self.quiet || self.resolved_format == OutputFormat::Json
    }
}

fn parse_format(value: &str) -> OutputFormat {
    match value.to_ascii_lowercase().as_str() {
        "human" => OutputFormat::Human,
        "plain" => OutputFormat::Plain,
        "json" => OutputFormat::Json,
        _ => OutputFormat::Auto,
    }
}

#[cfg(feature = "interactive")]
fn confirm(prompt: &str) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CliError::IoError {
            message: format!("Prompt failed: {e}"),
            source: io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm(prompt: &str) -> CliResult<bool> {
    use std::io::Write;

    use crate::error::IntoCli;

    print!("{prompt} [y/N] ");
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read confirmation input")?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input == "y" || input == "yes")
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;

    fn make_manager(quiet: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color: false,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, OutputFormat::Plain);
        assert!(out.print("hello").is_ok());
        assert!(out.quiet);
    }

    #[test]
    fn plain_format_disables_color() {
        assert!(make_manager(false, OutputFormat::Plain).no_color);
        assert!(!make_manager(false, OutputFormat::Human).no_color);
    }

    #[test]
    fn configured_format_applies_when_flag_is_auto() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Auto,
        };
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        assert_eq!(OutputManager::new(&args, &config).format(), OutputFormat::Json);
    }

    #[test]
    fn no_spinner_outside_human_mode() {
        assert!(make_manager(false, OutputFormat::Plain).spinner("x").is_none());
        assert!(make_manager(false, OutputFormat::Json).spinner("x").is_none());
    }

    #[test]
    fn parse_format_falls_back_to_auto() {
        assert_eq!(parse_format("JSON"), OutputFormat::Json);
        assert_eq!(parse_format("fancy"), OutputFormat::Auto);
    }
}
