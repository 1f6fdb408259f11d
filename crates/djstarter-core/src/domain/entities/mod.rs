//! Plain data the emitter consumes: paths, permissions and the ordered plan.

pub mod common;
pub mod project_structure;

use super::DomainError;

pub use common::{Permissions, RelativePath};
pub use project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure};
