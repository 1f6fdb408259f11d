//! Emit Service - materializes a project on disk.
//!
//! Workflow:
//! 1. Build the ordered plan from the file catalog
//! 2. Replace any existing directory at the target
//! 3. Create directories, then write files in catalog order
//!
//! There is no rollback. The first failing filesystem call aborts the run
//! and whatever was written so far stays on disk.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{
        Configuration, DomainValidator as validator, FsEntry, ProjectStructure, Summary, catalog,
    },
    error::CoreResult,
};

/// What a completed emit run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitReport {
    /// The project directory (`output_root / name`).
    pub root: PathBuf,
    pub files_written: usize,
    pub directories_created: usize,
    /// Whether a previous directory at `root` was removed first.
    pub replaced_existing: bool,
    pub summary: Summary,
}

/// Writes the catalog for a [`Configuration`] through a [`Filesystem`] port.
pub struct EmitService {
    filesystem: Box<dyn Filesystem>,
}

impl EmitService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// The plan `emit` would write, without touching the filesystem.
    pub fn plan(cfg: &Configuration, output_root: impl AsRef<Path>) -> CoreResult<ProjectStructure> {
        Ok(catalog::plan(cfg, output_root.as_ref().join(cfg.name()))?)
    }

    /// Generate the project for `cfg` under `output_root`.
    ///
    /// An existing `output_root/<name>` is deleted unconditionally first.
    #[instrument(
        skip_all,
        fields(
            project = %cfg.name(),
            output_root = %output_root.as_ref().display()
        )
    )]
    pub fn emit(&self, cfg: &Configuration, output_root: impl AsRef<Path>) -> CoreResult<EmitReport> {
        info!(configuration = %cfg, "Generating project");

        let structure = Self::plan(cfg, output_root)?;
        validator::validate_project_structure(&structure)?;

        let replaced_existing = self.reset(structure.root())?;
        let (directories_created, files_written) = self.write_all(&structure)?;

        info!(
            files = files_written,
            directories = directories_created,
            "Project generated"
        );

        Ok(EmitReport {
            root: structure.root().to_path_buf(),
            files_written,
            directories_created,
            replaced_existing,
            summary: Summary::from(cfg),
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Remove whatever is at `root` and recreate it empty.
    fn reset(&self, root: &Path) -> CoreResult<bool> {
        let existed = self.filesystem.exists(root);
        if existed {
            warn!(path = %root.display(), "Replacing existing directory");
            self.filesystem.remove_dir_all(root)?;
        }
        self.filesystem.create_dir_all(root)?;
        Ok(existed)
    }

    /// Write all entries in plan order. Returns (directories, files).
    fn write_all(&self, structure: &ProjectStructure) -> CoreResult<(usize, usize)> {
        let root = structure.root();
        let mut dirs = 0;
        let mut files = 0;

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    let path = root.join(&dir.path);
                    debug!(path = %path.display(), "create directory");
                    self.filesystem.create_dir_all(&path)?;
                    dirs += 1;
                }
                FsEntry::File(file) => {
                    let path = root.join(&file.path);
                    debug!(path = %path.display(), bytes = file.content.len(), "write file");

                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_file(&path, &file.content)?;

                    if file.permissions.executable_flag() {
                        self.filesystem.set_permissions(&path, true)?;
                    }
                    files += 1;
                }
            }
        }

        Ok((dirs, files))
    }
}
