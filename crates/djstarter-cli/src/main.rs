//! # djstarter
//!
//! Generates ready-to-run Django projects with user authentication.
//!
//! `main` parses arguments, installs the tracing subscriber, loads
//! [`AppConfig`] and dispatches.  Every failure becomes a [`CliError`],
//! printed once to stderr and mapped to an exit status.
//!
//! ## Exit codes
//!
//! | Code | Meaning                   |
//! |------|---------------------------|
//! |  0   | Success                   |
//! |  1   | Filesystem / system error |
//! |  2   | User / input error        |
//! |  4   | Configuration error       |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version arrive here too, on stdout.
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    let verbose = cli.global.verbose > 0;
    match bootstrap_and_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err, verbose),
    }
}

/// Load configuration, then hand the parsed command to its handler.
#[instrument(skip_all)]
fn bootstrap_and_run(cli: Cli) -> CliResult<()> {
    let config = AppConfig::load(cli.global.config.as_ref()).map_err(|e| CliError::ConfigError {
        message: format!("{e:#}"),
        source: None,
    })?;
    debug!(?config, "Configuration loaded");

    let output = OutputManager::new(&cli.global, &config);
    let Cli { global, command } = cli;

    match command {
        Commands::New(args) => commands::new::execute(args, global, config, output),
        Commands::Init(args) => commands::init::execute(args, global, config, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(sub) => commands::config::execute(sub, config, output),
    }?;

    info!("Done");
    Ok(())
}

/// Log `err`, describe it on stderr and pick the exit status.
fn report(err: &CliError, verbose: bool) -> ExitCode {
    err.log();

    let rendered = if std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{rendered}");

    ExitCode::from(err.exit_code())
}
