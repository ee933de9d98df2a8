//! Stubs loaded from a directory of `<kind>.stub` files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use svcforge_core::{
    application::{ApplicationError, ports::StubStore},
    domain::{Stub, StubKind},
    error::ForgeResult,
};
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

/// Store reading user-published stubs, typically created with
/// `svcforge stubs publish`.
///
/// The directory is read on every request; nothing is cached. A stub that is
/// missing from the directory is [`ApplicationError::StubNotFound`], there
/// is no fallback to the built-in copy.
#[derive(Debug, Clone)]
pub struct DirectoryStubStore {
    dir: PathBuf,
}

impl DirectoryStubStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn load(&self, kind: StubKind, path: &Path) -> ForgeResult<Stub> {
        let text = fs::read_to_string(path).map_err(|e| ApplicationError::StubUnreadable {
            stub: kind.to_string(),
            reason: format!("{}: {e}", path.display()),
        })?;
        Ok(Stub::loaded(kind, text, path.display().to_string()))
    }
}

impl StubStore for DirectoryStubStore {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn get(&self, kind: StubKind) -> ForgeResult<Stub> {
        let path = self.dir.join(kind.file_name());
        if !path.is_file() {
            return Err(ApplicationError::StubNotFound {
                stub: kind.file_name().to_string(),
                location: self.dir.display().to_string(),
            }
            .into());
        }

        debug!(path = %path.display(), "Loading stub");
        self.load(kind, &path)
    }

    /// Every recognised `*.stub` file directly inside the directory.
    ///
    /// Files with other names are skipped with a warning.
    fn list(&self) -> ForgeResult<Vec<Stub>> {
        if !self.dir.is_dir() {
            return Err(ApplicationError::StubNotFound {
                stub: "*".into(),
                location: self.dir.display().to_string(),
            }
            .into());
        }

        let mut stubs = Vec::new();
        for entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| ApplicationError::StubUnreadable {
                stub: "*".into(),
                reason: e.to_string(),
            })?;

            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some("stub")
            {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            match name.parse::<StubKind>() {
                Ok(kind) => stubs.push(self.load(kind, path)?),
                Err(_) => warn!(file = %path.display(), "Ignoring unrecognised stub file"),
            }
        }

        stubs.sort_by_key(|s| StubKind::ALL.iter().position(|k| *k == s.kind));
        Ok(stubs)
    }

    fn location(&self) -> String {
        self.dir.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svcforge_core::error::ForgeError;
    use tempfile::TempDir;

    fn stub_dir(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(temp.path().join(name), content).unwrap();
        }
        temp
    }

    #[test]
    fn loads_published_stub() {
        let temp = stub_dir(&[("service.stub", "custom $CLASS$")]);
        let store = DirectoryStubStore::new(temp.path());

        let stub = store.get(StubKind::Service).unwrap();
        assert_eq!(stub.text(), "custom $CLASS$");
        assert!(stub.origin.ends_with("service.stub"));
    }

    #[test]
    fn missing_stub_is_not_found() {
        let temp = stub_dir(&[("service.stub", "x")]);
        let store = DirectoryStubStore::new(temp.path());

        let err = store.get(StubKind::Interface).unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Application(ApplicationError::StubNotFound { .. })
        ));
    }

    #[test]
    fn list_skips_unknown_files_and_orders_by_kind() {
        let temp = stub_dir(&[
            ("interface.stub", "i"),
            ("service.stub", "s"),
            ("controller.stub", "c"),
            ("README.md", "r"),
        ]);
        let stubs = DirectoryStubStore::new(temp.path()).list().unwrap();

        let kinds: Vec<_> = stubs.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![StubKind::Service, StubKind::Interface]);
    }

    #[test]
    fn list_of_missing_dir_fails() {
        let store = DirectoryStubStore::new("/absolutely/does/not/exist");
        assert!(store.list().is_err());
    }
}
