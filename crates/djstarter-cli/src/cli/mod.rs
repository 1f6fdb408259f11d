//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use djstarter_core::domain::{AdminStyle, AuthMethod, Database, UiLanguage};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "djstarter",
    bin_name = "djstarter",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f680} Quickly generate Django projects with user authentication",
    long_about = "djstarter writes a ready-to-run Django project with login, \
                  registration and profile pages, plus optional REST API, \
                  custom user model, themed admin and container files.",
    after_help = "EXAMPLES:\n\
        \x20 djstarter new demo\n\
        \x20 djstarter new shop --db mysql --docker\n\
        \x20 djstarter new full --db postgresql --api --auth jwt --admin jazzmin\n\
        \x20 djstarter completions bash > /usr/share/bash-completion/completions/djstarter",
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
    /// Generate a new Django project.
    #[command(
        visible_alias = "n",
        about = "Generate a new Django project",
        after_help = "Options implied by others:\n\
            \x20 --api             upgrades --auth session to token\n\
            \x20 --api, --admin jazzmin   also enable --user and --docker\n\n\
            An existing directory with the same name is replaced.\n\n\
            EXAMPLES:\n\
            \x20 djstarter new demo\n\
            \x20 djstarter new blog --user --lang en -o ~/src\n\
            \x20 djstarter new api_demo --api --auth jwt --dry-run"
    )]
    New(NewArgs),

    /// Initialise a djstarter configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 djstarter init\n\
            \x20 djstarter init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 djstarter completions bash > ~/.local/share/bash-completion/completions/djstarter\n\
            \x20 djstarter completions zsh  > ~/.zfunc/_djstarter\n\
            \x20 djstarter completions fish > ~/.config/fish/completions/djstarter.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the djstarter configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 djstarter config get defaults.database\n\
            \x20 djstarter config list\n\
            \x20 djstarter config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `djstarter new`.
///
/// Every option left unset falls back to the `[defaults]` section of the
/// configuration, then to the built-in default.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name.  Becomes both the directory and the Python package
    /// holding `settings.py`.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    #[arg(
        long = "db",
        value_name = "DATABASE",
        value_enum,
        help = "Database type"
    )]
    pub database: Option<DatabaseArg>,

    #[arg(long = "api", help = "Enable the Django REST framework API")]
    pub api: bool,

    #[arg(
        long = "auth",
        value_name = "METHOD",
        value_enum,
        help = "API authentication method"
    )]
    pub auth: Option<AuthArg>,

    #[arg(
        long = "admin",
        value_name = "STYLE",
        value_enum,
        help = "Admin interface"
    )]
    pub admin: Option<AdminArg>,

    #[arg(long = "user", help = "Custom user model")]
    pub user: bool,

    #[arg(long = "docker", help = "Include Docker configuration")]
    pub docker: bool,

    /// Language of the summary and README.  Defaults to the configured
    /// language, then to `LANG` (`zh*` selects Chinese, anything else English).
    #[arg(
        long = "lang",
        value_name = "LANG",
        value_enum,
        help = "Interface language"
    )]
    pub lang: Option<LangArg>,

    /// Parent directory for the project.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Ask before replacing an existing project directory.
    #[arg(long = "confirm", help = "Prompt before replacing an existing directory")]
    pub confirm: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `djstarter init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `djstarter completions`.
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

/// Subcommands for `djstarter config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.database`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DatabaseArg {
    Sqlite,
    /// Also accepted as `postgres`.
    #[value(alias = "postgres")]
    Postgresql,
    Mysql,
}

impl From<DatabaseArg> for Database {
    fn from(arg: DatabaseArg) -> Self {
        match arg {
            DatabaseArg::Sqlite => Self::Sqlite,
            DatabaseArg::Postgresql => Self::Postgresql,
            DatabaseArg::Mysql => Self::Mysql,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum AuthArg {
    Session,
    Token,
    Jwt,
}

impl From<AuthArg> for AuthMethod {
    fn from(arg: AuthArg) -> Self {
        match arg {
            AuthArg::Session => Self::Session,
            AuthArg::Token => Self::Token,
            AuthArg::Jwt => Self::Jwt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum AdminArg {
    Default,
    Jazzmin,
}

impl From<AdminArg> for AdminStyle {
    fn from(arg: AdminArg) -> Self {
        match arg {
            AdminArg::Default => Self::Default,
            AdminArg::Jazzmin => Self::Jazzmin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LangArg {
    Zh,
    En,
}

impl From<LangArg> for UiLanguage {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::Zh => Self::Zh,
            LangArg::En => Self::En,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
