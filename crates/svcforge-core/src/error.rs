//! Unified error handling for svcforge core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for svcforge core operations.
///
/// This enum wraps all possible errors that can occur when using
/// svcforge-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum ForgeError {
    /// Errors from the domain layer (naming rules, namespaces).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (stubs, rendering, writes).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl ForgeError {
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
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// The innermost human-readable reason, without layer prefixes.
    pub fn reason(&self) -> String {
        match self {
            Self::Application(ApplicationError::WriteFailed { reason, .. }) => reason.clone(),
            other => other.to_string(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type ForgeResult<T> = Result<T, ForgeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn domain_errors_are_validation() {
        let err: ForgeError = DomainError::InvalidInput {
            input: String::new(),
            reason: "name cannot be empty".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("name cannot be empty"));
    }

    #[test]
    fn missing_stub_is_not_found() {
        let err: ForgeError = ApplicationError::StubNotFound {
            stub: "service".into(),
            location: "./stubs".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().iter().any(|s| s.contains("publish")));
    }

    #[test]
    fn reason_unwraps_write_failures() {
        let err: ForgeError = ApplicationError::WriteFailed {
            path: PathBuf::from("app/Services/X.php"),
            reason: "Permission denied".into(),
        }
        .into();
        assert_eq!(err.reason(), "Permission denied");
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
