//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use svcforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ForgeResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a service and
/// inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn check_writable(&self, path: &Path) -> ForgeResult<()> {
        if self.read_only.iter().any(|ro| path.starts_with(ro)) {
            return Err(ApplicationError::WriteFailed {
                path: path.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into());
        }
        Ok(())
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write at or below `dir` fail with a permission error.
    pub fn mark_read_only(&self, dir: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(dir.into());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// List all files in path order.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.directories.contains(path))
    }

    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if !inner.directories.contains(&current) {
                inner.check_writable(&current)?;
                inner.directories.insert(current.clone());
            }
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        inner.check_writable(path)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::WriteFailed {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
