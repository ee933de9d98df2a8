//! Stubs, placeholder contexts, and rendered output.
//!
//! ## Placeholder syntax
//!
//! A placeholder is an upper-case token wrapped in `$`:
//!
//! ```text
//! namespace $CLASS_NAMESPACE$;
//!
//! class $CLASS$ implements $INTERFACE$
//! ```
//!
//! The delimiters keep `$CLASS$` and `$CLASS_NAMESPACE$` from overlapping,
//! and plain PHP variables (`$this`, `$user`) never match because they are
//! not closed by a second `$`.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::domain::{
    entities::{destination::DestinationPath, identity::ResolvedIdentity},
    value_objects::StubKind,
};

/// Opening and closing delimiter of a placeholder.
pub const PLACEHOLDER_DELIMITER: char = '$';

/// Fixed placeholder keys.
pub mod placeholders {
    pub const CLASS_NAMESPACE: &str = "CLASS_NAMESPACE";
    pub const CLASS: &str = "CLASS";
    pub const INTERFACE: &str = "INTERFACE";
    pub const INTERFACE_NAMESPACE: &str = "INTERFACE_NAMESPACE";
}

/// Where stub text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubSource {
    /// Compiled into the binary.
    Static(&'static str),
    /// Loaded at runtime (published stubs directory).
    Owned(String),
}

impl StubSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s.as_str(),
        }
    }
}

/// A stub template ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stub {
    pub kind: StubKind,
    pub source: StubSource,
    /// Human-readable origin (`builtin`, or the file path).
    pub origin: String,
}

impl Stub {
    pub fn builtin(kind: StubKind, text: &'static str) -> Self {
        Self {
            kind,
            source: StubSource::Static(text),
            origin: "builtin".into(),
        }
    }

    pub fn loaded(kind: StubKind, text: String, origin: impl Into<String>) -> Self {
        Self {
            kind,
            source: StubSource::Owned(text),
            origin: origin.into(),
        }
    }

    pub fn text(&self) -> &str {
        self.source.as_str()
    }
}

/// Placeholder mapping for one stub.
///
/// The key set is fixed per stub kind; values come from a
/// [`ResolvedIdentity`]. A `BTreeMap` keeps iteration (and therefore any
/// diagnostics) deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for the primary class file.
    ///
    /// In interface mode the class stub additionally needs the interface's
    /// short name and its fully-qualified name for the `use` import.
    pub fn for_service(identity: &ResolvedIdentity, with_interface: bool) -> Self {
        let ctx = Self::new()
            .with_variable(placeholders::CLASS_NAMESPACE, identity.namespace().to_string())
            .with_variable(placeholders::CLASS, identity.class_name());

        if with_interface {
            ctx.with_variable(placeholders::INTERFACE, identity.interface_name())
                .with_variable(placeholders::INTERFACE_NAMESPACE, identity.qualified_interface())
        } else {
            ctx
        }
    }

    /// Context for the interface file. `CLASS_NAMESPACE` is the namespace of
    /// the file being generated, i.e. the interface namespace.
    pub fn for_interface(identity: &ResolvedIdentity) -> Self {
        Self::new()
            .with_variable(
                placeholders::CLASS_NAMESPACE,
                identity.interface_namespace().to_string(),
            )
            .with_variable(placeholders::INTERFACE, identity.interface_name())
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    /// Replace every `$KEY$` whose key is mapped. Everything else, including
    /// unknown placeholders, is copied verbatim.
    ///
    /// Single pass: substituted values are never rescanned, so a value that
    /// happens to contain `$X$` is emitted as-is.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find(PLACEHOLDER_DELIMITER) {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];

            match after.find(PLACEHOLDER_DELIMITER) {
                Some(end) => match self.variables.get(&after[..end]) {
                    Some(value) => {
                        out.push_str(value);
                        rest = &after[end + 1..];
                    }
                    None => {
                        // Not ours; the closing `$` may open the next token.
                        out.push(PLACEHOLDER_DELIMITER);
                        rest = after;
                    }
                },
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}

/// Find placeholder-shaped tokens (`$UPPER_CASE$`) in rendered text.
///
/// Returned once each, in order of first appearance.
pub fn find_placeholders(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(PLACEHOLDER_DELIMITER) {
        let after = &rest[start + 1..];
        let Some(end) = after.find(PLACEHOLDER_DELIMITER) else {
            break;
        };

        let candidate = &after[..end];
        if is_placeholder_key(candidate) {
            if !found.iter().any(|f| f == candidate) {
                found.push(candidate.to_string());
            }
            rest = &after[end + 1..];
        } else {
            rest = after;
        }
    }

    found
}

fn is_placeholder_key(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Output of rendering one stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedContent {
    pub text: String,
    /// Placeholder tokens still present after substitution.
    pub unresolved: Vec<String>,
}

impl RenderedContent {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Role of a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileRole {
    Class,
    Interface,
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Class => "class",
            Self::Interface => "interface",
        })
    }
}

/// A destination path paired with its rendered content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub role: FileRole,
    pub stub: StubKind,
    pub path: DestinationPath,
    pub content: RenderedContent,
}
