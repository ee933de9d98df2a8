//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `svcforge-adapters` crate provides implementations.

use crate::domain::{RenderContext, RenderedContent, Stub, StubKind};
use crate::error::ForgeResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `svcforge_adapters::filesystem::LocalFilesystem` (production)
/// - `svcforge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths handed to this port are already normalised to `/` separators.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Check if `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Replace the whole content of a file, creating it if absent.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;
}

/// Port for stub retrieval.
///
/// Implemented by:
/// - `svcforge_adapters::stub_store::BuiltinStubStore` (compiled-in stubs)
/// - `svcforge_adapters::stub_store::DirectoryStubStore` (published stubs)
#[cfg_attr(test, mockall::automock)]
pub trait StubStore: Send + Sync {
    /// Get the stub of the given kind.
    ///
    /// Fails with `ApplicationError::StubNotFound` when absent.
    fn get(&self, kind: StubKind) -> ForgeResult<Stub>;

    /// All stubs this store can provide.
    fn list(&self) -> ForgeResult<Vec<Stub>>;

    /// Where stubs come from, for messages (`builtin`, a directory path).
    fn location(&self) -> String;
}

/// Port for stub rendering.
///
/// Implemented by:
/// - `svcforge_adapters::renderer::SimpleRenderer` (`$TOKEN$` substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render a stub with the given placeholder mapping.
    fn render(&self, stub: &Stub, context: &RenderContext) -> ForgeResult<RenderedContent>;
}
