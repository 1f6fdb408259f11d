//! Infrastructure adapters for djstarter.
//!
//! This crate implements the `Filesystem` port defined in
//! `djstarter_core::application::ports`. All real I/O lives here.

pub mod filesystem;

pub use filesystem::{LocalFilesystem, MemoryFilesystem};
