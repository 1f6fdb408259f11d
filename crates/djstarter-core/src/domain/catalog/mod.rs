//! The fixed catalog of files a generated project contains.
//!
//! Every artifact is produced by a pure function of the [`Configuration`].
//! [`CATALOG`] lists them in the order they are written; each entry carries
//! an inclusion predicate so conditional files (API, migrations, containers)
//! sit in the same table as the baseline ones.
//!
//! Adding a file:
//! 1. Write a `fn(&Configuration) -> Artifact` in the matching submodule
//! 2. Add a [`CatalogEntry`] at the right position in [`CATALOG`]

use std::path::Path;

use crate::domain::{
    configuration::Configuration,
    entities::{
        common::{Permissions, RelativePath},
        project_structure::ProjectStructure,
    },
    error::DomainError,
};

mod api;
mod app;
mod container;
mod pages;
mod project;

/// One rendered file, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: String,
    pub content: String,
    pub permissions: Permissions,
}

impl Artifact {
    pub(crate) fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            permissions: Permissions::read_write(),
        }
    }

    pub(crate) fn executable(mut self) -> Self {
        self.permissions = Permissions::executable();
        self
    }
}

/// A catalog row: when to include the file and how to render it.
pub struct CatalogEntry {
    pub include: fn(&Configuration) -> bool,
    pub render: fn(&Configuration) -> Artifact,
}

const fn always(_: &Configuration) -> bool {
    true
}

const fn entry(render: fn(&Configuration) -> Artifact) -> CatalogEntry {
    CatalogEntry {
        include: always,
        render,
    }
}

const fn when(
    include: fn(&Configuration) -> bool,
    render: fn(&Configuration) -> Artifact,
) -> CatalogEntry {
    CatalogEntry { include, render }
}

fn custom_user(cfg: &Configuration) -> bool {
    cfg.custom_user_model()
}

fn api_enabled(cfg: &Configuration) -> bool {
    cfg.api_enabled()
}

fn containerized(cfg: &Configuration) -> bool {
    cfg.containerized()
}

/// Every file in write order.
pub static CATALOG: &[CatalogEntry] = &[
    entry(project::manage),
    entry(project::requirements),
    entry(project::readme),
    entry(project::settings),
    entry(project::urls),
    entry(project::wsgi),
    entry(app::models),
    entry(app::admin),
    entry(app::views),
    entry(app::urls),
    entry(app::package_marker),
    entry(pages::base),
    entry(pages::home),
    entry(pages::login),
    entry(pages::register),
    entry(pages::profile),
    when(custom_user, app::migrations_marker),
    when(custom_user, app::initial_migration),
    when(api_enabled, api::urls),
    when(api_enabled, api::package_marker),
    when(api_enabled, api::serializers),
    when(api_enabled, api::views),
    when(containerized, container::dockerfile),
    when(containerized, container::compose),
    when(containerized, container::dockerignore),
];

/// Directories created before any file is written, in order.
pub fn directories(cfg: &Configuration) -> Vec<String> {
    let mut dirs = vec![
        cfg.name().to_string(),
        "main".into(),
        "templates/main".into(),
        "static/css".into(),
        "static/js".into(),
    ];
    if cfg.api_enabled() {
        dirs.push("main/api".into());
    }
    if cfg.custom_user_model() {
        dirs.push("main/migrations".into());
    }
    dirs
}

/// Render every included catalog entry, in order.
pub fn artifacts(cfg: &Configuration) -> Vec<Artifact> {
    CATALOG
        .iter()
        .filter(|e| (e.include)(cfg))
        .map(|e| (e.render)(cfg))
        .collect()
}

/// Build the complete, ordered plan for `cfg` rooted at `root`.
///
/// Fails with [`DomainError::AbsolutePathNotAllowed`] when the project name
/// turns a catalog path into one that leaves the project directory.
pub fn plan(cfg: &Configuration, root: impl AsRef<Path>) -> Result<ProjectStructure, DomainError> {
    let mut structure = ProjectStructure::new(root.as_ref());
    for dir in directories(cfg) {
        structure.add_directory(RelativePath::try_new(dir)?);
    }
    for artifact in artifacts(cfg) {
        let path = RelativePath::try_new(artifact.path)?;
        structure.add_file(path, artifact.content, artifact.permissions);
    }
    Ok(structure)
}

/// Flat `{{KEY}}` substitution over a template body.
pub(crate) fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{{{key}}}}}"), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        configuration::{RawOptions, resolve},
        options::{AdminStyle, AuthMethod, Database},
    };

    fn paths(cfg: &Configuration) -> Vec<String> {
        artifacts(cfg).into_iter().map(|a| a.path).collect()
    }

    #[test]
    fn fill_replaces_every_occurrence() {
        assert_eq!(
            fill("{{A}}-{{B}}-{{A}}", &[("A", "x"), ("B", "y")]),
            "x-y-x"
        );
        assert_eq!(fill("{% url 'home' %}", &[("A", "x")]), "{% url 'home' %}");
    }

    #[test]
    fn baseline_file_set() {
        let cfg = resolve(RawOptions::new("demo"));
        assert_eq!(
            paths(&cfg),
            vec![
                "manage.py",
                "requirements.txt",
                "README.md",
                "demo/settings.py",
                "demo/urls.py",
                "demo/wsgi.py",
                "main/models.py",
                "main/admin.py",
                "main/views.py",
                "main/urls.py",
                "main/__init__.py",
                "templates/main/base.html",
                "templates/main/home.html",
                "templates/main/login.html",
                "templates/main/register.html",
                "templates/main/profile.html",
            ]
        );
        assert_eq!(
            directories(&cfg),
            vec!["demo", "main", "templates/main", "static/css", "static/js"]
        );
    }

    #[test]
    fn full_configuration_includes_every_category() {
        let cfg = resolve(
            RawOptions::new("full")
                .with_database(Database::Postgresql)
                .with_api(true)
                .with_auth(AuthMethod::Jwt)
                .with_admin(AdminStyle::Jazzmin)
                .with_docker(true),
        );
        let paths = paths(&cfg);
        for expected in [
            "main/migrations/__init__.py",
            "main/migrations/0001_initial.py",
            "main/api/urls.py",
            "main/api/__init__.py",
            "main/api/serializers.py",
            "main/api/views.py",
            "Dockerfile",
            "docker-compose.yml",
            ".dockerignore",
        ] {
            assert!(paths.iter().any(|p| p == expected), "missing {expected}");
        }
        assert_eq!(paths.len(), 25);
    }

    #[test]
    fn plan_validates_for_every_combination() {
        for database in Database::ALL {
            for api in [false, true] {
                for admin in AdminStyle::ALL {
                    let cfg = resolve(
                        RawOptions::new("p")
                            .with_database(database)
                            .with_api(api)
                            .with_admin(admin),
                    );
                    assert!(plan(&cfg, "/out/p").unwrap().validate().is_ok(), "{cfg}");
                }
            }
        }
    }

    #[test]
    fn plan_is_deterministic() {
        let cfg = resolve(RawOptions::new("same").with_api(true));
        assert_eq!(plan(&cfg, "/out/same").unwrap(), plan(&cfg, "/out/same").unwrap());
    }

    #[test]
    fn empty_name_is_an_error_not_a_panic() {
        let cfg = resolve(RawOptions::new(""));
        assert!(matches!(
            plan(&cfg, "/out"),
            Err(DomainError::AbsolutePathNotAllowed { path }) if path == "/settings.py"
        ));
    }

    #[test]
    fn only_manage_py_is_executable() {
        let cfg = resolve(RawOptions::new("demo").with_docker(true));
        let executables: Vec<_> = artifacts(&cfg)
            .into_iter()
            .filter(|a| a.permissions.executable_flag())
            .map(|a| a.path)
            .collect();
        assert_eq!(executables, vec!["manage.py"]);
    }
}
