//! Application services - orchestrate use cases.

pub mod emit_service;

pub use emit_service::{EmitReport, EmitService};
