//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the whole `make-service` workflow:
//! 1. Resolve names and destination paths
//! 2. Render the class stub
//! 3. Render the interface stub (interface mode)
//! 4. Write the class file
//! 5. Write the interface file (interface mode, after 4 succeeded)
//! 6. Report what was written
//!
//! Steps 1-3 never touch the file system and are exposed as [`plan`];
//! steps 4-6 are [`execute`]. Nothing is rolled back: when step 5 fails the
//! class file stays and the error says so.
//!
//! [`plan`]: ScaffoldService::plan
//! [`execute`]: ScaffoldService::execute

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, StubStore, TemplateRenderer},
        services::{
            file_writer::{FileWriter, WriteOutcome},
            template_service::TemplateService,
        },
    },
    domain::{
        DestinationPath, DestinationPaths, DomainValidator as validator, FileRole, NameResolver,
        PathResolver, RenderContext, RenderedFile, ResolvedIdentity, ScaffoldSettings, StubKind,
    },
    error::{ForgeError, ForgeResult},
};

/// What the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRequest {
    /// Raw name as typed by the user.
    pub name: String,
    /// Also generate the paired interface.
    pub with_interface: bool,
}

impl ServiceRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            with_interface: false,
        }
    }

    pub fn with_interface(mut self, with_interface: bool) -> Self {
        self.with_interface = with_interface;
        self
    }
}

/// Everything resolved and rendered, nothing written yet.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub identity: ResolvedIdentity,
    pub paths: DestinationPaths,
    /// Class file first, then the interface file in interface mode.
    pub files: Vec<RenderedFile>,
    pub warnings: Vec<String>,
}

/// One file written by [`ScaffoldService::execute`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub role: FileRole,
    pub path: DestinationPath,
    pub outcome: WriteOutcome,
}

/// Final result of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub class_name: String,
    pub namespace: String,
    pub interface_name: Option<String>,
    pub files: Vec<WrittenFile>,
    pub warnings: Vec<String>,
}

impl ScaffoldReport {
    pub fn overwritten(&self) -> impl Iterator<Item = &WrittenFile> {
        self.files
            .iter()
            .filter(|f| f.outcome == WriteOutcome::Overwritten)
    }
}

/// Main scaffolding service.
///
/// Orchestrates name resolution, rendering, and writing.
pub struct ScaffoldService {
    templates: TemplateService,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use svcforge_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     store,      // impl StubStore
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        store: Box<dyn StubStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            templates: TemplateService::new(store, renderer),
            filesystem,
        }
    }

    /// Resolve, render, write, report.
    #[instrument(
        skip_all,
        fields(name = %request.name, interface = request.with_interface)
    )]
    pub fn scaffold(
        &self,
        request: &ServiceRequest,
        settings: &ScaffoldSettings,
    ) -> ForgeResult<ScaffoldReport> {
        let plan = self.plan(request, settings)?;
        self.execute(&plan)
    }

    /// Steps 1-3: resolve names and paths and render every file.
    ///
    /// Fails before anything is written if any stub is missing or, in
    /// strict mode, leaves placeholders behind.
    #[instrument(skip_all, fields(name = %request.name))]
    pub fn plan(
        &self,
        request: &ServiceRequest,
        settings: &ScaffoldSettings,
    ) -> ForgeResult<ScaffoldPlan> {
        // 1. Resolve
        validator::validate_settings(settings)?;
        let identity = NameResolver::resolve(&request.name, settings)?;
        let paths = PathResolver::resolve(&identity, settings.source_root(), &settings.extension);
        info!(
            class = identity.class_name(),
            path = %paths.class_path,
            "Service identity resolved"
        );

        let mut files = Vec::with_capacity(2);
        let mut warnings = Vec::new();

        // 2. Render primary
        let kind = StubKind::for_service(request.with_interface);
        let context = RenderContext::for_service(&identity, request.with_interface);
        files.push(self.render_file(
            FileRole::Class,
            kind,
            &context,
            paths.class_path.clone(),
            settings,
            &mut warnings,
        )?);

        // 3. Render secondary
        if request.with_interface {
            let context = RenderContext::for_interface(&identity);
            files.push(self.render_file(
                FileRole::Interface,
                StubKind::Interface,
                &context,
                paths.interface_path.clone(),
                settings,
                &mut warnings,
            )?);
        }

        Ok(ScaffoldPlan {
            identity,
            paths,
            files,
            warnings,
        })
    }

    /// Steps 4-6: write the planned files in order and report.
    ///
    /// The first failure stops the run. If an earlier file was already
    /// written the error is [`ApplicationError::PartiallyWritten`].
    #[instrument(skip_all, fields(class = plan.identity.class_name()))]
    pub fn execute(&self, plan: &ScaffoldPlan) -> ForgeResult<ScaffoldReport> {
        let writer = FileWriter::new(self.filesystem.as_ref());
        let mut written: Vec<WrittenFile> = Vec::with_capacity(plan.files.len());

        for file in &plan.files {
            match writer.write(file.path.as_path(), &file.content.text) {
                Ok(outcome) => {
                    info!(role = %file.role, path = %file.path, outcome = %outcome, "File written");
                    written.push(WrittenFile {
                        role: file.role,
                        path: file.path.clone(),
                        outcome,
                    });
                }
                Err(err) => return Err(Self::write_error(&written, file, err)),
            }
        }

        info!(files = written.len(), "Scaffold completed successfully");

        let with_interface = plan.files.iter().any(|f| f.role == FileRole::Interface);
        Ok(ScaffoldReport {
            class_name: plan.identity.class_name().to_string(),
            namespace: plan.identity.namespace().to_string(),
            interface_name: with_interface.then(|| plan.identity.interface_name().to_string()),
            files: written,
            warnings: plan.warnings.clone(),
        })
    }

    /// List the stubs of the active store.
    pub fn templates(&self) -> &TemplateService {
        &self.templates
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn render_file(
        &self,
        role: FileRole,
        kind: StubKind,
        context: &RenderContext,
        path: DestinationPath,
        settings: &ScaffoldSettings,
        warnings: &mut Vec<String>,
    ) -> ForgeResult<RenderedFile> {
        let content = self.templates.render(kind, context)?;

        if let Err(tokens) = validator::validate_rendered(&content) {
            if settings.strict_placeholders {
                return Err(ApplicationError::UnresolvedPlaceholders {
                    stub: kind.to_string(),
                    tokens,
                }
                .into());
            }
            let listed = tokens
                .iter()
                .map(|t| format!("${t}$"))
                .collect::<Vec<_>>()
                .join(", ");
            info!(stub = %kind, tokens = %listed, "Unresolved placeholders left verbatim");
            warnings.push(format!("{kind} stub left unresolved placeholders: {listed}"));
        }

        Ok(RenderedFile {
            role,
            stub: kind,
            path,
            content,
        })
    }

    fn write_error(written: &[WrittenFile], failed: &RenderedFile, err: ForgeError) -> ForgeError {
        match written.first() {
            Some(first) => {
                debug!(
                    kept = %first.path,
                    failed = %failed.path,
                    "Write failed after a file was created; nothing rolled back"
                );
                ApplicationError::PartiallyWritten {
                    written: first.path.to_path_buf(),
                    failed: failed.path.to_path_buf(),
                    reason: err.reason(),
                }
                .into()
            }
            None => err,
        }
    }
}
