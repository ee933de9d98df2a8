//! Local filesystem adapter using std::fs.

use std::io::{self, Write};
use std::path::Path;

use svcforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ForgeError, ForgeResult},
};
use tempfile::Builder;
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
///
/// Files are written to a temporary sibling and renamed over the target, so
/// a destination is either its old content or its new content, never a
/// truncated mix. New files get the permissions `std::fs::write` would give
/// them; replaced files keep their own.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = temp_builder()
            .tempfile_in(dir)
            .map_err(|e| map_io_error(path, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e))?;

        if let Ok(existing) = std::fs::metadata(path) {
            tmp.as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| map_io_error(path, e))?;
        }
        tmp.as_file().sync_all().map_err(|e| map_io_error(path, e))?;
        tmp.persist(path).map_err(|e| map_io_error(path, e.error))?;

        trace!(path = %path.display(), bytes = content.len(), "File persisted");
        Ok(())
    }
}

/// Temp files default to 0600; ask for 0666 so the umask decides, as it
/// does for `std::fs::write`.
#[cfg(unix)]
fn temp_builder() -> Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    let mut builder = Builder::new();
    builder.permissions(std::fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn temp_builder() -> Builder<'static, 'static> {
    Builder::new()
}

fn map_io_error(path: &Path, e: io::Error) -> ForgeError {
    ApplicationError::WriteFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
