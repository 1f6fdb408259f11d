//! djstarter Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the djstarter
//! Django project generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          djstarter-cli (CLI)            │
//! │   (parses options, prints summaries)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │             (EmitService)               │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │             (Filesystem)                │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   djstarter-adapters (Infrastructure)   │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (Configuration, catalog, structure)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use djstarter_core::prelude::*;
//!
//! let cfg = resolve(RawOptions::new("shop").with_api(true));
//! let service = EmitService::new(filesystem); // Box<dyn Filesystem>
//! let report = service.emit(&cfg, "./output")?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{EmitReport, EmitService, ports::Filesystem};
    pub use crate::domain::{
        AdminStyle, AuthMethod, Configuration, Database, Messages, ProjectStructure, RawOptions,
        Summary, UiLanguage, resolve,
    };
    pub use crate::error::{CoreError, CoreResult};
}
