// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (errors are carried inside reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid service name '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("Invalid namespace '{namespace}': {reason}")]
    InvalidNamespace { namespace: String, reason: String },

    #[error("Unknown suffix policy: {0}")]
    UnknownSuffixPolicy(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Unknown stub: {0}")]
    UnknownStub(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { input, .. } if input.trim().is_empty() => vec![
                "Pass the service name as the first argument".into(),
                "Example: svcforge make-service user".into(),
            ],
            Self::InvalidInput { .. } => vec![
                "Service names must contain at least one letter".into(),
                "The first character must not be a digit".into(),
                "Examples: user, order_item, PaymentGateway".into(),
            ],
            Self::InvalidNamespace { .. } => vec![
                "Check `services.namespace` in svcforge.toml".into(),
                "Namespaces are identifiers joined by '\\', e.g. App\\Domain".into(),
            ],
            Self::UnknownSuffixPolicy(_) => {
                vec!["Supported suffix policies: contains, ends-with".into()]
            }
            Self::InvalidSettings(msg) => vec![
                format!("Details: {msg}"),
                "Check the [services] section of svcforge.toml".into(),
            ],
            Self::UnknownStub(_) => {
                vec!["Known stubs: service, service-interface, interface".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. }
            | Self::InvalidNamespace { .. }
            | Self::UnknownSuffixPolicy(_)
            | Self::InvalidSettings(_) => ErrorCategory::Validation,
            Self::UnknownStub(_) => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
