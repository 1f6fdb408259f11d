use crate::domain::{
    entities::{ProjectStructure, common::RelativePath},
    error::DomainError,
};

/// Centralized domain validation.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }

    /// Reject absolute paths.
    pub fn validate_relative(path: &str) -> Result<(), DomainError> {
        RelativePath::try_new(path).map(|_| ())
    }
}
