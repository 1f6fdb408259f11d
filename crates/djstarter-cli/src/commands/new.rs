//! Implementation of the `djstarter new` command.
//!
//! Responsibility: turn CLI arguments and configured defaults into a
//! [`Configuration`], hand it to the emit service, and display results.
//! The implication rules live in the core crate, not here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use djstarter_adapters::LocalFilesystem;
use djstarter_core::{
    application::{EmitReport, EmitService},
    domain::{Configuration, FsEntry, Messages, RawOptions, Summary, UiLanguage, resolve},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `djstarter new` command.
///
/// 1. Validate the project name
/// 2. Merge flags over configured defaults and resolve implications
/// 3. Early-exit with the plan if `--dry-run`
/// 4. Confirm replacement of an existing directory when asked to
/// 5. Emit the project and print the summary
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    validate_project_name(&args.name)?;

    let cfg = resolve(build_options(&args, &config, std::env::var("LANG").ok().as_deref()));
    let output_root = args.output.clone().unwrap_or_else(|| PathBuf::from("."));
    let messages = Messages::for_language(cfg.language());

    debug!(
        configuration = %cfg,
        output_root = %output_root.display(),
        format = ?output.format(),
        "Configuration resolved"
    );

    if args.dry_run {
        return show_plan(&cfg, &output_root, &output);
    }

    let project_path = output_root.join(cfg.name());
    if project_path.exists() && (args.confirm || config.behavior.confirm_overwrite) {
        let prompt = format!("'{}' already exists and will be replaced. Continue?", project_path.display());
        if !output.confirm(&prompt)? {
            return Err(CliError::Cancelled);
        }
    }

    output.generating(&messages, cfg.name())?;

    let service = EmitService::new(Box::new(LocalFilesystem::new()));
    let spinner = output.spinner(format!("Writing {}", project_path.display()));
    let result = service
        .emit(&cfg, &output_root)
        .with_cli_context(|| format!("emitting '{}'", cfg.name()));
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    let report = result?;

    info!(
        project = %cfg.name(),
        files = report.files_written,
        replaced = report.replaced_existing,
        "Project generated"
    );

    if report.replaced_existing {
        output.warning(&format!("Replaced existing directory {}", report.root.display()))?;
    }
    output.completed(&messages, &report.summary)?;
    output.json(&JsonReport::new(&cfg, &report))?;

    Ok(())
}

// ── Validation ────────────────────────────────────────────────────────────────

/// The Django app every generated project contains.
const APP_PACKAGE: &str = "main";

/// The name is used both as a directory and as a Python package, so it must
/// be a plain identifier.
pub fn validate_project_name(name: &str) -> CliResult<()> {
    let invalid = |reason: &str| CliError::InvalidProjectName {
        name: name.into(),
        reason: reason.into(),
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.starts_with('.') {
        return Err(invalid("name cannot start with '.'"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }

    let mut chars = name.chars();
    let starts_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !starts_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid("must be a valid Python identifier"));
    }
    if name == APP_PACKAGE {
        return Err(invalid(
            "'main' is the generated app package and would share its directory with the project package",
        ));
    }
    Ok(())
}

// ── Option merging ────────────────────────────────────────────────────────────

/// Flags win over `[defaults]`; language falls back to `LANG` last.
fn build_options(args: &NewArgs, config: &AppConfig, locale: Option<&str>) -> RawOptions {
    let defaults = &config.defaults;
    let language = args
        .lang
        .map(UiLanguage::from)
        .or(defaults.language)
        .unwrap_or_else(|| UiLanguage::detect(locale));

    RawOptions::new(args.name.clone())
        .with_database(args.database.map_or(defaults.database, Into::into))
        .with_api(args.api)
        .with_auth(args.auth.map_or(defaults.auth, Into::into))
        .with_admin(args.admin.map_or(defaults.admin, Into::into))
        .with_custom_user(args.user)
        .with_docker(args.docker)
        .with_language(language)
}

// ── Output ────────────────────────────────────────────────────────────────────

fn show_plan(cfg: &Configuration, output_root: &Path, out: &OutputManager) -> CliResult<()> {
    let plan = EmitService::plan(cfg, output_root)?;
    let summary = Summary::from(cfg);

    out.header(&format!("Dry run: would create {}", plan.root().display()))?;
    out.print(&format!("  Features: {}", summary.feature_line()))?;
    for entry in plan.entries() {
        let line = match entry {
            FsEntry::Directory(d) => format!("  {}/", d.path.as_path().display()),
            FsEntry::File(f) if f.permissions.executable_flag() => {
                format!("  {} (executable)", f.path.as_path().display())
            }
            FsEntry::File(f) => format!("  {}", f.path.as_path().display()),
        };
        out.print(&line)?;
    }
    out.info("Nothing was written.")?;

    let files: Vec<String> = plan
        .files()
        .map(|f| f.path.as_path().display().to_string())
        .collect();
    out.json(&serde_json::json!({
        "dry_run": true,
        "root": plan.root(),
        "configuration": cfg,
        "features": summary.features,
        "files": files,
    }))
}

/// Machine-readable result of a run, printed with `--output-format json`.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    root: &'a Path,
    configuration: &'a Configuration,
    features: &'a [String],
    files_written: usize,
    directories_created: usize,
    replaced_existing: bool,
    next_step: &'a str,
}

impl<'a> JsonReport<'a> {
    fn new(cfg: &'a Configuration, report: &'a EmitReport) -> Self {
        Self {
            root: &report.root,
            configuration: cfg,
            features: &report.summary.features,
            files_written: report.files_written,
            directories_created: report.directories_created,
            replaced_existing: report.replaced_existing,
            next_step: &report.summary.next_step,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
