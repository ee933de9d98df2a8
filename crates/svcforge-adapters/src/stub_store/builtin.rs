//! Stubs compiled into the binary.

use svcforge_core::{
    application::ports::StubStore,
    domain::{Stub, StubKind},
    error::ForgeResult,
};

const SERVICE: &str = include_str!("../../stubs/service.stub");
const SERVICE_INTERFACE: &str = include_str!("../../stubs/service-interface.stub");
const INTERFACE: &str = include_str!("../../stubs/interface.stub");

/// Raw text of the built-in stub for `kind`.
pub fn builtin_text(kind: StubKind) -> &'static str {
    match kind {
        StubKind::Service => SERVICE,
        StubKind::ServiceInterface => SERVICE_INTERFACE,
        StubKind::Interface => INTERFACE,
    }
}

/// Store serving the stubs shipped with svcforge. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStubStore;

impl BuiltinStubStore {
    pub fn new() -> Self {
        Self
    }
}

impl StubStore for BuiltinStubStore {
    fn get(&self, kind: StubKind) -> ForgeResult<Stub> {
        Ok(Stub::builtin(kind, builtin_text(kind)))
    }

    fn list(&self) -> ForgeResult<Vec<Stub>> {
        Ok(StubKind::ALL
            .iter()
            .map(|kind| Stub::builtin(*kind, builtin_text(*kind)))
            .collect())
    }

    fn location(&self) -> String {
        "builtin".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svcforge_core::domain::{find_placeholders, placeholders};

    #[test]
    fn every_kind_is_available() {
        let store = BuiltinStubStore::new();
        for kind in StubKind::ALL {
            let stub = store.get(kind).unwrap();
            assert_eq!(stub.kind, kind);
            assert_eq!(stub.origin, "builtin");
            assert!(stub.text().starts_with("<?php"));
        }
        assert_eq!(store.list().unwrap().len(), 3);
    }

    #[test]
    fn stubs_use_only_known_placeholders() {
        let known = [
            placeholders::CLASS_NAMESPACE,
            placeholders::CLASS,
            placeholders::INTERFACE,
            placeholders::INTERFACE_NAMESPACE,
        ];
        for kind in StubKind::ALL {
            for token in find_placeholders(builtin_text(kind)) {
                assert!(known.contains(&token.as_str()), "{kind}: {token}");
            }
        }
    }

    #[test]
    fn service_interface_stub_references_interface() {
        let tokens = find_placeholders(builtin_text(StubKind::ServiceInterface));
        assert!(tokens.contains(&"INTERFACE_NAMESPACE".to_string()));
        assert!(tokens.contains(&"INTERFACE".to_string()));
    }
}
