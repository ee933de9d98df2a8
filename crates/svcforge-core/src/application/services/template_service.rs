//! Template Service - stub loading and rendering.
//!
//! Pairs a [`StubStore`] with a [`TemplateRenderer`] so callers ask for a
//! stub *kind* and get rendered text back. Separated from
//! `ScaffoldService` for single responsibility.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{Filesystem, StubStore, TemplateRenderer},
        services::file_writer::{FileWriter, WriteOutcome},
    },
    domain::{RenderContext, RenderedContent, StubKind},
    error::ForgeResult,
};

/// Information about a stub for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StubInfo {
    pub kind: StubKind,
    pub file_name: &'static str,
    pub origin: String,
    pub placeholders: Vec<String>,
}

/// One stub copied by [`TemplateService::publish`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedStub {
    pub kind: StubKind,
    pub path: String,
    pub outcome: WriteOutcome,
}

/// Service for stub operations.
pub struct TemplateService {
    store: Box<dyn StubStore>,
    renderer: Box<dyn TemplateRenderer>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(store: Box<dyn StubStore>, renderer: Box<dyn TemplateRenderer>) -> Self {
        Self { store, renderer }
    }

    /// Load the stub for `kind` and substitute the context's placeholders.
    #[instrument(skip(self, context), fields(stub = %kind))]
    pub fn render(&self, kind: StubKind, context: &RenderContext) -> ForgeResult<RenderedContent> {
        let stub = self.store.get(kind)?;
        debug!(origin = %stub.origin, "Stub loaded");
        self.renderer.render(&stub, context)
    }

    /// List all stubs of the active store.
    pub fn list(&self) -> ForgeResult<Vec<StubInfo>> {
        Ok(self
            .store
            .list()?
            .into_iter()
            .map(|stub| StubInfo {
                kind: stub.kind,
                file_name: stub.kind.file_name(),
                placeholders: crate::domain::find_placeholders(stub.text()),
                origin: stub.origin,
            })
            .collect())
    }

    /// Where the active stubs come from.
    pub fn location(&self) -> String {
        self.store.location()
    }

    /// Copy every stub of the active store into `dir`, one
    /// `<kind>.stub` file each.
    #[instrument(skip(self, filesystem), fields(dir = %dir.display()))]
    pub fn publish(
        &self,
        filesystem: &dyn Filesystem,
        dir: &Path,
    ) -> ForgeResult<Vec<PublishedStub>> {
        let writer = FileWriter::new(filesystem);
        let mut published = Vec::new();

        for stub in self.store.list()? {
            let joined = dir.join(stub.kind.file_name()).to_string_lossy().replace('\\', "/");
            let path = crate::domain::normalize_separators(&joined);
            let outcome = writer.write(Path::new(&path), stub.text())?;
            info!(stub = %stub.kind, path = %path, outcome = %outcome, "Stub published");
            published.push(PublishedStub {
                kind: stub.kind,
                path,
                outcome,
            });
        }

        Ok(published)
    }
}
