//! Name resolution: one raw identifier in, every derived name out.

use serde::Serialize;
use tracing::debug;

use crate::domain::{
    entities::{
        common::{is_identifier, to_studly_case},
        settings::ScaffoldSettings,
    },
    error::DomainError,
    value_objects::Namespace,
};

/// Token every service class name carries.
pub const SERVICE_SUFFIX: &str = "Service";
/// Appended to the class name to form the interface name.
pub const INTERFACE_SUFFIX: &str = "Interface";
/// Sub-namespace services are generated under.
pub const SERVICES_SEGMENT: &str = "Services";
/// Sub-namespace of [`SERVICES_SEGMENT`] interfaces are generated under.
pub const INTERFACES_SEGMENT: &str = "Interfaces";

/// Every name derived from a single raw input.
///
/// Only [`NameResolver`] builds this, so the interface name can never drift
/// from the class name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedIdentity {
    class_name: String,
    interface_name: String,
    namespace: Namespace,
    interface_namespace: Namespace,
    location: Namespace,
    interface_location: Namespace,
}

impl ResolvedIdentity {
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn interface_name(&self) -> &str {
        &self.interface_name
    }

    /// Fully-qualified namespace of the class, e.g. `App\Services`.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Fully-qualified namespace of the interface, e.g.
    /// `App\Services\Interfaces`.
    pub fn interface_namespace(&self) -> &Namespace {
        &self.interface_namespace
    }

    /// Class namespace relative to the root namespace; drives the directory.
    pub fn location(&self) -> &Namespace {
        &self.location
    }

    pub fn interface_location(&self) -> &Namespace {
        &self.interface_location
    }

    /// `App\Services\Interfaces\UserServiceInterface`.
    pub fn qualified_interface(&self) -> String {
        format!(
            "{}{}{}",
            self.interface_namespace,
            Namespace::SEPARATOR,
            self.interface_name
        )
    }
}

/// Derives a [`ResolvedIdentity`] from raw user input.
pub struct NameResolver;

impl NameResolver {
    pub fn resolve(
        raw: &str,
        settings: &ScaffoldSettings,
    ) -> Result<ResolvedIdentity, DomainError> {
        settings.validate()?;

        let class_name = Self::class_name(raw, settings)?;
        let interface_name = format!("{class_name}{INTERFACE_SUFFIX}");

        let namespace = settings.base_namespace.child(SERVICES_SEGMENT);
        let interface_namespace = namespace.child(INTERFACES_SEGMENT);

        let location = Self::relative_location(&settings.base_namespace, &settings.root_namespace)
            .child(SERVICES_SEGMENT);
        let interface_location = location.child(INTERFACES_SEGMENT);

        debug!(
            raw,
            class = %class_name,
            namespace = %namespace,
            location = %location,
            "Resolved service identity"
        );

        Ok(ResolvedIdentity {
            class_name,
            interface_name,
            namespace,
            interface_namespace,
            location,
            interface_location,
        })
    }

    /// Studly-case the input and apply the suffix policy.
    pub fn class_name(raw: &str, settings: &ScaffoldSettings) -> Result<String, DomainError> {
        if raw.trim().is_empty() {
            return Err(DomainError::InvalidInput {
                input: raw.to_string(),
                reason: "name cannot be empty".into(),
            });
        }

        let mut name = to_studly_case(raw);
        if name.is_empty() {
            return Err(DomainError::InvalidInput {
                input: raw.to_string(),
                reason: "name has no letters or digits".into(),
            });
        }

        if !settings.suffix_policy.is_satisfied(&name, SERVICE_SUFFIX) {
            name.push_str(SERVICE_SUFFIX);
        }

        if !is_identifier(&name) {
            return Err(DomainError::InvalidInput {
                input: raw.to_string(),
                reason: format!("'{name}' is not a valid class name"),
            });
        }

        Ok(name)
    }

    /// Base namespace with the root namespace token removed.
    ///
    /// `App` → ``, `App\Domain` → `Domain`, `Modules\Billing` →
    /// `Modules\Billing`. Matching is per segment, so `Application` is not
    /// mistaken for `App`.
    pub fn relative_location(base: &Namespace, root: &Namespace) -> Namespace {
        if root.is_empty() {
            return base.clone();
        }
        base.strip_prefix(root).unwrap_or_else(|| base.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::SuffixPolicy;

    fn settings(base: &str) -> ScaffoldSettings {
        ScaffoldSettings::new(base, "/project/app")
    }

    #[test]
    fn appends_service_suffix() {
        let id = NameResolver::resolve("user", &settings("App")).unwrap();
        assert_eq!(id.class_name(), "UserService");
    }

    #[test]
    fn does_not_duplicate_suffix() {
        let id = NameResolver::resolve("UserService", &settings("App")).unwrap();
        assert_eq!(id.class_name(), "UserService");

        let id = NameResolver::resolve("user_service", &settings("App")).unwrap();
        assert_eq!(id.class_name(), "UserService");
    }

    #[test]
    fn contains_policy_accepts_service_anywhere() {
        let id = NameResolver::resolve("ServiceUser", &settings("App")).unwrap();
        assert_eq!(id.class_name(), "ServiceUser");

        let id = NameResolver::resolve("myServiceThing", &settings("App")).unwrap();
        assert_eq!(id.class_name(), "MyServiceThing");
    }

    #[test]
    fn ends_with_policy_is_strict() {
        let s = settings("App").with_suffix_policy(SuffixPolicy::EndsWith);
        let id = NameResolver::resolve("ServiceUser", &s).unwrap();
        assert_eq!(id.class_name(), "ServiceUserService");

        let id = NameResolver::resolve("order_service", &s).unwrap();
        assert_eq!(id.class_name(), "OrderService");
    }

    #[test]
    fn suffix_appears_exactly_once_for_plain_names() {
        for raw in ["user", "order item", "payment-gateway", "x", "Report2"] {
            let id = NameResolver::resolve(raw, &settings("App")).unwrap();
            assert!(id.class_name().ends_with("Service"), "{raw}");
            assert_eq!(id.class_name().matches("Service").count(), 1, "{raw}");
        }
    }

    #[test]
    fn interface_name_is_always_derived() {
        for raw in ["user", "UserService", "ServiceUser", "a_b_c"] {
            let id = NameResolver::resolve(raw, &settings("App")).unwrap();
            assert_eq!(id.interface_name(), format!("{}Interface", id.class_name()));
        }
    }

    #[test]
    fn namespaces_follow_base() {
        let id = NameResolver::resolve("order", &settings("App")).unwrap();
        assert_eq!(id.namespace().to_string(), "App\\Services");
        assert_eq!(id.interface_namespace().to_string(), "App\\Services\\Interfaces");
        assert_eq!(
            id.qualified_interface(),
            "App\\Services\\Interfaces\\OrderServiceInterface"
        );
    }

    #[test]
    fn location_strips_root_namespace() {
        let id = NameResolver::resolve("order", &settings("App\\Domain")).unwrap();
        assert_eq!(id.location().to_string(), "Domain\\Services");
        assert_eq!(id.interface_location().to_string(), "Domain\\Services\\Interfaces");
    }

    #[test]
    fn location_keeps_foreign_namespace() {
        let id = NameResolver::resolve("order", &settings("Modules\\Billing")).unwrap();
        assert_eq!(id.namespace().to_string(), "Modules\\Billing\\Services");
        assert_eq!(id.location().to_string(), "Modules\\Billing\\Services");
    }

    #[test]
    fn root_token_matches_whole_segments_only() {
        let id = NameResolver::resolve("order", &settings("Application")).unwrap();
        assert_eq!(id.location().to_string(), "Application\\Services");
    }

    #[test]
    fn empty_input_is_rejected() {
        for raw in ["", "   ", "--__"] {
            let err = NameResolver::resolve(raw, &settings("App")).unwrap_err();
            assert!(matches!(err, DomainError::InvalidInput { .. }), "{raw:?}");
        }
    }

    #[test]
    fn leading_digit_is_rejected() {
        let err = NameResolver::resolve("3d", &settings("App")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput { .. }));
    }

    #[test]
    fn empty_base_namespace_is_rejected() {
        let err = NameResolver::resolve("user", &settings("")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidNamespace { .. }));
    }
}
