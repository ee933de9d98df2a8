//! Core domain layer for svcforge.
//!
//! This module contains pure naming and rendering logic with no I/O.
//! Stub loading, rendering engines and file writes are reached through
//! ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror, serde, tracing
//! - **Immutable values**: resolved identities and paths are built once
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    common::{namespace_to_path, normalize_separators, to_studly_case},
    destination::{DestinationPath, DestinationPaths, PathResolver},
    identity::{
        INTERFACE_SUFFIX, INTERFACES_SEGMENT, NameResolver, ResolvedIdentity, SERVICE_SUFFIX,
        SERVICES_SEGMENT,
    },
    settings::ScaffoldSettings,
    stub::{
        FileRole, PLACEHOLDER_DELIMITER, RenderContext, RenderedContent, RenderedFile, Stub,
        StubSource, find_placeholders, placeholders,
    },
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Namespace, StubKind, SuffixPolicy};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn namespace_parses_any_separator() {
        let a = Namespace::parse("App\\Domain\\Billing");
        let b = Namespace::parse("App/Domain/Billing");
        let c = Namespace::parse("\\App\\\\Domain\\Billing\\");
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.to_string(), "App\\Domain\\Billing");
        assert_eq!(a.to_path_string(), "App/Domain/Billing");
    }

    #[test]
    fn namespace_child_accepts_nested_segments() {
        let ns = Namespace::parse("App").child("Services/Interfaces");
        assert_eq!(ns.to_string(), "App\\Services\\Interfaces");
    }

    #[test]
    fn namespace_strip_prefix() {
        let ns = Namespace::parse("App\\Domain");
        assert_eq!(
            ns.strip_prefix(&Namespace::parse("App")),
            Some(Namespace::parse("Domain"))
        );
        assert_eq!(ns.strip_prefix(&Namespace::parse("Domain")), None);
        assert_eq!(ns.strip_prefix(&Namespace::default()), Some(ns.clone()));
    }

    #[test]
    fn namespace_validation() {
        assert!(Namespace::parse("App\\Domain").validate().is_ok());
        assert!(Namespace::parse("").validate().is_err());
        assert!(Namespace::parse("App\\1st").validate().is_err());
        assert!(Namespace::parse("App\\my-domain").validate().is_err());
    }

    #[test]
    fn stub_kind_parses_correctly() {
        assert_eq!(StubKind::from_str("service").unwrap(), StubKind::Service);
        assert_eq!(
            StubKind::from_str("service-interface.stub").unwrap(),
            StubKind::ServiceInterface
        );
        assert_eq!(StubKind::from_str("INTERFACE").unwrap(), StubKind::Interface);
        assert!(matches!(
            StubKind::from_str("controller"),
            Err(DomainError::UnknownStub(_))
        ));
    }

    #[test]
    fn stub_kind_selection() {
        assert_eq!(StubKind::for_service(false), StubKind::Service);
        assert_eq!(StubKind::for_service(true), StubKind::ServiceInterface);
        for kind in StubKind::ALL {
            assert!(kind.file_name().ends_with(".stub"));
            assert!(kind.file_name().starts_with(kind.as_str()));
        }
    }

    #[test]
    fn suffix_policy_parses_correctly() {
        assert_eq!(SuffixPolicy::from_str("contains").unwrap(), SuffixPolicy::Contains);
        assert_eq!(SuffixPolicy::from_str("ends-with").unwrap(), SuffixPolicy::EndsWith);
        assert_eq!(SuffixPolicy::from_str("strict").unwrap(), SuffixPolicy::EndsWith);
        assert!(SuffixPolicy::from_str("prefix").is_err());
    }

    #[test]
    fn suffix_policy_is_case_insensitive() {
        assert!(SuffixPolicy::Contains.is_satisfied("MYSERVICEX", "Service"));
        assert!(!SuffixPolicy::EndsWith.is_satisfied("MYSERVICEX", "Service"));
        assert!(SuffixPolicy::EndsWith.is_satisfied("Userservice", "Service"));
    }

    // ========================================================================
    // Settings
    // ========================================================================

    #[test]
    fn settings_builder() {
        let s = ScaffoldSettings::new("App\\Domain", "app")
            .with_root_namespace("App")
            .with_extension(".php")
            .with_suffix_policy(SuffixPolicy::EndsWith)
            .with_strict_placeholders(true);

        assert_eq!(s.extension, "php");
        assert_eq!(s.base_namespace.to_string(), "App\\Domain");
        assert!(s.strict_placeholders);
        assert!(DomainValidator::validate_settings(&s).is_ok());
    }

    #[test]
    fn settings_reject_empty_extension() {
        let s = ScaffoldSettings::new("App", "app").with_extension("");
        assert!(matches!(
            s.validate(),
            Err(DomainError::InvalidSettings(_))
        ));
    }

    #[test]
    fn error_categories() {
        let e = DomainError::InvalidInput {
            input: "".into(),
            reason: "empty".into(),
        };
        assert_eq!(e.category(), ErrorCategory::Validation);
        assert!(!e.suggestions().is_empty());
        assert_eq!(
            DomainError::UnknownStub("x".into()).category(),
            ErrorCategory::NotFound
        );
    }
}
