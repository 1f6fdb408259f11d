//! Tracing subscriber setup for the `djstarter` binary.
//!
//! The library crates only emit events.  Everything goes to stderr so
//! stdout stays reserved for command output (and the JSON document in
//! `--output-format json`).
//!
//! | Flags     | Level |
//! |-----------|-------|
//! | `--quiet` | error |
//! | (none)    | warn  |
//! | `-v`      | info  |
//! | `-vv`     | debug |
//! | `-vvv`    | trace |
//!
//! A set `RUST_LOG` replaces the table entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::{GlobalArgs, OutputFormat};

/// Crate targets that receive the verbosity level.  Dependencies stay at
/// their own defaults so `-vvv` is not drowned in third-party noise.
const TARGETS: [&str; 3] = ["djstarter", "djstarter_core", "djstarter_adapters"];

/// Install the global subscriber.  Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level_for(args))));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match args.output_format {
        OutputFormat::Json => registry.with(fmt_layer.json()).try_init(),
        _ => {
            let ansi = !args.no_color && std::io::stderr().is_terminal();
            registry.with(fmt_layer.with_ansi(ansi)).try_init()
        }
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn filter_directives(level: LevelFilter) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
