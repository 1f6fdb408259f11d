//! End-to-end tests for the emitter with real adapters.

use std::path::{Path, PathBuf};

use djstarter_adapters::{LocalFilesystem, MemoryFilesystem};
use djstarter_core::prelude::*;
use tempfile::TempDir;

fn emit_in_memory(options: RawOptions) -> (MemoryFilesystem, PathBuf) {
    let fs = MemoryFilesystem::new();
    let cfg = resolve(options);
    let report = EmitService::new(Box::new(fs.clone()))
        .emit(&cfg, "/out")
        .unwrap();
    (fs, report.root)
}

fn relative_files(fs: &MemoryFilesystem, root: &Path) -> Vec<String> {
    fs.files_under(root)
        .into_iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn demo_with_defaults_writes_baseline_only() {
    let (fs, root) = emit_in_memory(RawOptions::new("demo"));

    let files = relative_files(&fs, &root);
    assert_eq!(files.len(), 16);
    assert!(files.contains(&"demo/settings.py".to_string()));
    assert!(!files.iter().any(|f| f.starts_with("main/api")));
    assert!(!files.iter().any(|f| f.starts_with("main/migrations")));
    assert!(!files.iter().any(|f| f == "Dockerfile"));

    let settings = fs.read_file(&root.join("demo/settings.py")).unwrap();
    assert!(settings.contains("'ENGINE': 'django.db.backends.sqlite3'"));
    assert!(fs.is_dir(&root.join("static/css")));
    assert!(fs.is_dir(&root.join("static/js")));
    assert!(fs.is_executable(&root.join("manage.py")));
}

#[test]
fn full_project_has_every_conditional_category() {
    let (fs, root) = emit_in_memory(
        RawOptions::new("full")
            .with_database(Database::Postgresql)
            .with_api(true)
            .with_auth(AuthMethod::Jwt)
            .with_admin(AdminStyle::Jazzmin)
            .with_docker(true),
    );

    let files = relative_files(&fs, &root);
    for expected in [
        "main/migrations/0001_initial.py",
        "main/api/serializers.py",
        "main/api/views.py",
        "Dockerfile",
        "docker-compose.yml",
        ".dockerignore",
    ] {
        assert!(files.contains(&expected.to_string()), "{expected}");
    }

    let requirements = fs.read_file(&root.join("requirements.txt")).unwrap();
    assert!(requirements.contains("psycopg2-binary"));
    assert!(requirements.contains("djangorestframework"));
    assert!(requirements.contains("django-jazzmin"));

    let compose = fs.read_file(&root.join("docker-compose.yml")).unwrap();
    assert!(compose.contains("image: postgres:15"));
}

#[test]
fn custom_user_migrations_contain_exactly_two_files() {
    let (fs, root) = emit_in_memory(RawOptions::new("accounts").with_custom_user(true));

    let migrations = fs.files_under(&root.join("main/migrations"));
    let names: Vec<_> = migrations
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["0001_initial.py", "__init__.py"]);

    let migration = fs
        .read_file(&root.join("main/migrations/0001_initial.py"))
        .unwrap();
    for field in ["bio", "birth_date", "phone", "address", "role"] {
        assert!(migration.contains(field));
    }
}

#[test]
fn mysql_settings_and_compose_agree() {
    let (fs, root) = emit_in_memory(
        RawOptions::new("shop")
            .with_database(Database::Mysql)
            .with_docker(true),
    );

    let settings = fs.read_file(&root.join("shop/settings.py")).unwrap();
    assert!(settings.contains("django.db.backends.mysql"));
    let requirements = fs.read_file(&root.join("requirements.txt")).unwrap();
    assert!(requirements.contains("mysqlclient"));
    let compose = fs.read_file(&root.join("docker-compose.yml")).unwrap();
    assert!(compose.contains("image: mysql:8.0"));
    assert!(compose.ends_with("mysql_data:"));
}

#[test]
fn readme_follows_language() {
    let (fs, root) = emit_in_memory(RawOptions::new("demo").with_language(UiLanguage::En));
    let readme = fs.read_file(&root.join("README.md")).unwrap();
    assert!(readme.starts_with("# demo"));

    let (fs, root) = emit_in_memory(RawOptions::new("demo").with_language(UiLanguage::Zh));
    let zh = fs.read_file(&root.join("README.md")).unwrap();
    assert_ne!(readme, zh);
}

#[test]
fn rerun_on_disk_removes_stale_files() {
    let tmp = TempDir::new().unwrap();
    let service = EmitService::new(Box::new(LocalFilesystem::new()));

    let api = resolve(RawOptions::new("demo").with_api(true));
    let first = service.emit(&api, tmp.path()).unwrap();
    assert!(!first.replaced_existing);
    assert!(first.root.join("main/api/views.py").is_file());

    std::fs::write(first.root.join("notes.txt"), "scratch").unwrap();

    let plain = resolve(RawOptions::new("demo"));
    let second = service.emit(&plain, tmp.path()).unwrap();
    assert!(second.replaced_existing);
    assert!(!second.root.join("notes.txt").exists());
    assert!(!second.root.join("main/api").exists());
    assert!(!second.root.join("Dockerfile").exists());
    assert_eq!(second.files_written, 16);
}

#[cfg(unix)]
#[test]
fn manage_py_is_executable_on_disk() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    let report = EmitService::new(Box::new(LocalFilesystem::new()))
        .emit(&resolve(RawOptions::new("demo")), tmp.path())
        .unwrap();

    let mode = std::fs::metadata(report.root.join("manage.py"))
        .unwrap()
        .permissions()
        .mode();
    assert_ne!(mode & 0o100, 0);
    assert!(LocalFilesystem::new().exists(&report.root.join("templates/main/base.html")));
}
