use crate::domain::{
    entities::{RenderedContent, ScaffoldSettings},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_settings(settings: &ScaffoldSettings) -> Result<(), DomainError> {
        settings.validate()
    }

    /// Placeholder tokens left in `content`, or `Ok` when none remain.
    pub fn validate_rendered(content: &RenderedContent) -> Result<(), Vec<String>> {
        if content.is_complete() {
            Ok(())
        } else {
            Err(content.unresolved.clone())
        }
    }
}
