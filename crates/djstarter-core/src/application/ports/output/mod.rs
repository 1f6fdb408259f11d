//! Driven (output) ports - implemented by infrastructure.

use crate::error::CoreResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `djstarter_adapters::LocalFilesystem` (production)
/// - `djstarter_adapters::MemoryFilesystem` (testing)
///
/// Paths passed in are already joined onto the output root.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CoreResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()>;

    /// Set or clear the executable bit.
    fn set_permissions(&self, path: &Path, executable: bool) -> CoreResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> CoreResult<()>;
}
