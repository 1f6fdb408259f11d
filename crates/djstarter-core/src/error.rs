//! Unified error handling for djstarter core.
//!
//! Wraps domain and application errors behind one type with
//! user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone)]
pub enum CoreError {
    /// Errors from the domain layer (invalid options, inconsistent plans).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl CoreError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Filesystem,
    Internal,
}

/// Convenient result type alias.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn invalid_option_is_a_validation_error() {
        let err: CoreError = DomainError::InvalidOption {
            field: "database",
            value: "oracle".into(),
            expected: "sqlite, postgresql, mysql",
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions()[0].contains("sqlite, postgresql, mysql"));
    }

    #[test]
    fn filesystem_failure_keeps_path_in_message() {
        let err: CoreError = ApplicationError::FilesystemError {
            path: PathBuf::from("/tmp/demo/manage.py"),
            reason: "Permission denied".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Filesystem);
        assert!(err.to_string().contains("/tmp/demo/manage.py"));
    }
}
