//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use djstarter_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{CoreError, CoreResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
        trace!(path = %path.display(), "mkdir -p");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> CoreResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata =
                std::fs::metadata(path).map_err(|e| map_io_error(path, e, "get metadata"))?;
            let mut perms = metadata.permissions();
            let mode = perms.mode();
            perms.set_mode(if executable {
                mode | 0o111
            } else {
                mode & !0o111
            });
            std::fs::set_permissions(path, perms)
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }
        #[cfg(not(unix))]
        {
            // No executable bit outside unix.
            let _ = (path, executable);
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> CoreResult<()> {
        trace!(path = %path.display(), "rm -rf");
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> CoreError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_replaces_content() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("a/b/settings.py");

        fs.create_dir_all(file.parent().unwrap()).unwrap();
        fs.write_file(&file, "old").unwrap();
        fs.write_file(&file, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "new");
    }

    #[test]
    fn remove_dir_all_deletes_nested_tree() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let root = tmp.path().join("demo");
        fs.create_dir_all(&root.join("main/migrations")).unwrap();
        fs.write_file(&root.join("main/migrations/stale.py"), "").unwrap();

        fs.remove_dir_all(&root).unwrap();

        assert!(!fs.exists(&root));
        let remaining = walkdir::WalkDir::new(tmp.path()).into_iter().count();
        assert_eq!(remaining, 1);
    }

    #[test]
    fn write_into_missing_directory_reports_path() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("missing/manage.py");

        let err = LocalFilesystem::new().write_file(&target, "x").unwrap_err();
        match err {
            CoreError::Application(ApplicationError::FilesystemError { path, reason }) => {
                assert_eq!(path, target);
                assert!(reason.starts_with("Failed to write file"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn executable_bit_is_set() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let script = tmp.path().join("manage.py");
        fs.write_file(&script, "#!/usr/bin/env python\n").unwrap();
        fs.set_permissions(&script, true).unwrap();

        let mode = std::fs::metadata(&script).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
