//! Domain value objects: Namespace, StubKind, SuffixPolicy.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! Each one owns its string representation and its `FromStr` parser so that
//! the CLI and config layers never re-implement the spelling rules.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Namespace ────────────────────────────────────────────────────────────────

/// A backslash-separated namespace such as `App\Services\Interfaces`.
///
/// Stored as segments so that the separator style of the input never leaks
/// into generated code: `App/Domain`, `App\Domain` and `App\\Domain\` all
/// parse to the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Namespace {
    segments: Vec<String>,
}

impl Namespace {
    /// Namespace separator used in generated source.
    pub const SEPARATOR: char = '\\';

    /// Parse a namespace, accepting both `\` and `/` as separators.
    ///
    /// Empty segments are dropped. Segment validity is checked separately by
    /// [`Namespace::validate`] because relative remainders may legitimately
    /// be empty.
    pub fn parse(raw: &str) -> Self {
        Self {
            segments: raw
                .split(['\\', '/'])
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append one or more segments (`"Services/Interfaces"` appends two).
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(Self::parse(segment).segments);
        Self { segments }
    }

    /// Remove `prefix` from the front, if present.
    pub fn strip_prefix(&self, prefix: &Namespace) -> Option<Self> {
        self.segments
            .strip_prefix(prefix.segments.as_slice())
            .map(|rest| Self {
                segments: rest.to_vec(),
            })
    }

    /// Render with `/` separators for use in file-system paths.
    pub fn to_path_string(&self) -> String {
        self.segments.join("/")
    }

    /// Check that the namespace is non-empty and every segment is a valid
    /// identifier.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.is_empty() {
            return Err(DomainError::InvalidNamespace {
                namespace: String::new(),
                reason: "namespace cannot be empty".into(),
            });
        }

        if let Some(bad) = self
            .segments
            .iter()
            .find(|s| !crate::domain::entities::common::is_identifier(s))
        {
            return Err(DomainError::InvalidNamespace {
                namespace: self.to_string(),
                reason: format!("'{bad}' is not a valid identifier"),
            });
        }

        Ok(())
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("\\"))
    }
}

impl Serialize for Namespace {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ── StubKind ─────────────────────────────────────────────────────────────────

/// The three stub resources the tool knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StubKind {
    /// Plain service class.
    Service,
    /// Service class that implements its paired interface.
    ServiceInterface,
    /// Interface body for the second file in interface mode.
    Interface,
}

impl StubKind {
    pub const ALL: [StubKind; 3] = [Self::Service, Self::ServiceInterface, Self::Interface];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::ServiceInterface => "service-interface",
            Self::Interface => "interface",
        }
    }

    /// File name of the stub inside a stubs directory.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Service => "service.stub",
            Self::ServiceInterface => "service-interface.stub",
            Self::Interface => "interface.stub",
        }
    }

    /// Stub for the primary class file.
    pub const fn for_service(with_interface: bool) -> Self {
        if with_interface {
            Self::ServiceInterface
        } else {
            Self::Service
        }
    }
}

impl fmt::Display for StubKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StubKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        let s = s.strip_suffix(".stub").unwrap_or(&s);
        match s {
            "service" => Ok(Self::Service),
            "service-interface" | "service_interface" => Ok(Self::ServiceInterface),
            "interface" => Ok(Self::Interface),
            other => Err(DomainError::UnknownStub(other.to_string())),
        }
    }
}

// ── SuffixPolicy ─────────────────────────────────────────────────────────────

/// When the `Service` suffix is appended to a resolved class name.
///
/// Deserialised through [`FromStr`], so configuration accepts the same
/// spellings as the parser (`ends_with`, `strict`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum SuffixPolicy {
    /// Append unless `service` occurs anywhere in the name.
    ///
    /// `ServiceUser` and `myServiceThing` are left untouched. Kept as the
    /// default so regenerated files match previously generated ones.
    #[default]
    Contains,
    /// Append unless the name ends with `service`.
    EndsWith,
}

impl SuffixPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::EndsWith => "ends-with",
        }
    }

    /// Whether `name` already carries `token` under this policy.
    /// Comparison is case-insensitive.
    pub fn is_satisfied(&self, name: &str, token: &str) -> bool {
        let name = name.to_lowercase();
        let token = token.to_lowercase();
        match self {
            Self::Contains => name.contains(&token),
            Self::EndsWith => name.ends_with(&token),
        }
    }
}

impl fmt::Display for SuffixPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SuffixPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contains" => Ok(Self::Contains),
            "ends-with" | "ends_with" | "strict" => Ok(Self::EndsWith),
            other => Err(DomainError::UnknownSuffixPolicy(other.to_string())),
        }
    }
}

impl TryFrom<String> for SuffixPolicy {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
