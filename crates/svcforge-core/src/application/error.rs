//! Application layer errors.
//!
//! These errors represent failures in orchestration, not naming rules.
//! Naming and namespace errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The active stub store has no stub of the requested kind.
    #[error("Stub '{stub}' not found in {location}")]
    StubNotFound { stub: String, location: String },

    /// A stub exists but could not be read.
    #[error("Failed to load stub '{stub}': {reason}")]
    StubUnreadable { stub: String, reason: String },

    /// Rendering left placeholders behind and strict mode is on.
    #[error("Stub '{stub}' has unresolved placeholders: {}", .tokens.join(", "))]
    UnresolvedPlaceholders { stub: String, tokens: Vec<String> },

    /// A file or directory could not be written.
    #[error("Failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    /// The class file was written but the interface file was not.
    #[error("Created {} but failed to write {}: {reason}", .written.display(), .failed.display())]
    PartiallyWritten {
        written: PathBuf,
        failed: PathBuf,
        reason: String,
    },

    /// Adapter state lock poisoned.
    #[error("Adapter state is unavailable")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StubNotFound { stub, location } => vec![
                format!("Add {stub} to {location}"),
                "Or run: svcforge stubs publish to copy the built-in stubs".into(),
                "Or unset `stubs.path` to use the built-in stubs".into(),
            ],
            Self::StubUnreadable { .. } => vec![
                "Check that the stub file is readable UTF-8 text".into(),
            ],
            Self::UnresolvedPlaceholders { tokens, .. } => vec![
                format!("Unknown placeholders: {}", tokens.join(", ")),
                "Known placeholders: $CLASS$, $CLASS_NAMESPACE$, $INTERFACE$, $INTERFACE_NAMESPACE$"
                    .into(),
                "Or set `stubs.strict = false` to keep them verbatim".into(),
            ],
            Self::WriteFailed { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::PartiallyWritten { written, .. } => vec![
                format!("{} was created and has been kept", written.display()),
                "Fix the problem and re-run; existing files are overwritten".into(),
            ],
            Self::LockPoisoned => vec!["This is likely a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StubNotFound { .. } => ErrorCategory::NotFound,
            Self::StubUnreadable { .. } => ErrorCategory::Internal,
            Self::UnresolvedPlaceholders { .. } => ErrorCategory::Internal,
            Self::WriteFailed { .. } | Self::PartiallyWritten { .. } => ErrorCategory::Internal,
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
