//! Application layer for djstarter.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`EmitService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All generation rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{EmitReport, EmitService};

pub use ports::Filesystem;

pub use error::ApplicationError;
