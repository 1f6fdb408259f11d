//! Flags shared by every subcommand, flattened into [`super::Cli`].

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// `-v` info, `-vv` one debug line per generated file, `-vvv` every
    /// filesystem call.  Default shows warnings and errors only.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Increase log verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Only errors reach stderr and nothing is printed to stdout.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print nothing but errors"
    )]
    pub quiet: bool,

    /// Honours `NO_COLOR` (<https://no-color.org>).
    #[arg(long = "no-color", global = true, env = "NO_COLOR", help = "Disable ANSI colours")]
    pub no_color: bool,

    /// Must exist when given.  Without it the per-user config file is read
    /// if present; see `djstarter config path`.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        env = "DJSTARTER_CONFIG",
        help = "Read configuration from FILE"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Auto,
        help = "How results are printed on stdout"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of stdout.  `Auto` becomes `Human` on a terminal, else `Plain`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Auto,
    /// Coloured, with a spinner while files are written.
    Human,
    Plain,
    /// A single JSON document; human-readable lines are suppressed.
    Json,
}
