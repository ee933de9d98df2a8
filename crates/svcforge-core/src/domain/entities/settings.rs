use std::path::{Path, PathBuf};

use crate::domain::{
    error::DomainError,
    value_objects::{Namespace, SuffixPolicy},
};

/// Host-application facts the resolvers need.
///
/// Supplied explicitly by the caller on every invocation; the core never
/// looks them up from an ambient context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldSettings {
    /// Base namespace generated services live under (e.g. `App`).
    pub base_namespace: Namespace,
    /// Namespace token that maps onto `source_root` (e.g. `App`).
    pub root_namespace: Namespace,
    /// Directory the root namespace lives in (e.g. `./app`).
    pub source_root: PathBuf,
    /// Extension of generated files, without the dot.
    pub extension: String,
    pub suffix_policy: SuffixPolicy,
    /// Fail rendering when a stub still contains unknown placeholders.
    pub strict_placeholders: bool,
}

impl ScaffoldSettings {
    pub const DEFAULT_ROOT_NAMESPACE: &'static str = "App";
    pub const DEFAULT_EXTENSION: &'static str = "php";

    /// Settings for a conventional layout: root namespace `App`, `.php`
    /// files, default suffix policy.
    pub fn new(base_namespace: &str, source_root: impl Into<PathBuf>) -> Self {
        Self {
            base_namespace: Namespace::parse(base_namespace),
            root_namespace: Namespace::parse(Self::DEFAULT_ROOT_NAMESPACE),
            source_root: source_root.into(),
            extension: Self::DEFAULT_EXTENSION.to_string(),
            suffix_policy: SuffixPolicy::default(),
            strict_placeholders: false,
        }
    }

    pub fn with_root_namespace(mut self, root_namespace: &str) -> Self {
        self.root_namespace = Namespace::parse(root_namespace);
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn with_suffix_policy(mut self, policy: SuffixPolicy) -> Self {
        self.suffix_policy = policy;
        self
    }

    pub fn with_strict_placeholders(mut self, strict: bool) -> Self {
        self.strict_placeholders = strict;
        self
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        self.base_namespace.validate()?;
        if !self.root_namespace.is_empty() {
            self.root_namespace.validate()?;
        }
        if self.extension.is_empty() {
            return Err(DomainError::InvalidSettings(
                "file extension cannot be empty".into(),
            ));
        }
        Ok(())
    }
}
