//! Core domain layer for djstarter.
//!
//! Pure logic only: option enumerations, the [`Configuration`] resolver,
//! the file catalog and the ordered [`ProjectStructure`] it produces.
//! Filesystem access goes through the `Filesystem` port in the
//! application layer.
//!
//! ## Rules
//!
//! - **No I/O**: nothing here touches the filesystem or environment
//! - **No logging**: `tracing` is an application/CLI concern
//! - **Immutable values**: a `Configuration` never changes after `resolve`

pub mod catalog;
pub mod configuration;
pub mod entities;
pub mod error;
pub mod options;
pub mod summary;

mod validation;

pub use catalog::{Artifact, CATALOG, CatalogEntry};
pub use configuration::{Configuration, RawOptions, resolve};
pub use entities::{
    DirectoryToCreate, FileToWrite, FsEntry, Permissions, ProjectStructure, RelativePath,
};
pub use error::{DomainError, ErrorCategory};
pub use options::{AdminStyle, AuthMethod, Database, UiLanguage};
pub use summary::{Messages, Summary};
pub use validation::DomainValidator;
