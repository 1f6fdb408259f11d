// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid value '{value}' for {field}; expected one of: {expected}")]
    InvalidOption {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Project structure is empty")]
    EmptyStructure,

    #[error("Duplicate path in project structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidOption {
                field, expected, ..
            } => vec![
                format!("Valid values for {field}: {expected}"),
                "Use --help for usage information".into(),
            ],
            Self::EmptyStructure | Self::DuplicatePath { .. } => vec![
                "The generated file plan is inconsistent".into(),
                "Please report this issue".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("Generated paths must be relative, got: {path}"),
                "Please report this issue".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidOption { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
