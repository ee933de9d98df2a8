//! Destination path derivation.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::entities::{common::namespace_to_path, identity::ResolvedIdentity};

/// A forward-slash normalised destination path.
///
/// Normalisation happens once at construction, before any file-system call
/// sees the path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DestinationPath(String);

impl DestinationPath {
    pub fn new(root: &str, directory: &str, file_name: &str) -> Self {
        Self(namespace_to_path(&format!("{directory}/{file_name}"), root))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    pub fn parent(&self) -> Option<&Path> {
        self.as_path().parent()
    }

    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }
}

impl AsRef<Path> for DestinationPath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl fmt::Display for DestinationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Both destination paths for one invocation. The interface path is always
/// computed; it is only written in interface mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DestinationPaths {
    pub class_path: DestinationPath,
    pub interface_path: DestinationPath,
}

/// Maps a resolved identity onto the file system.
pub struct PathResolver;

impl PathResolver {
    /// `source_root/<location>/<ClassName>.<ext>` and the interface
    /// equivalent under `<location>/Interfaces`.
    pub fn resolve(
        identity: &ResolvedIdentity,
        source_root: &Path,
        extension: &str,
    ) -> DestinationPaths {
        let root = source_root.to_string_lossy();
        let extension = extension.trim_start_matches('.');

        DestinationPaths {
            class_path: DestinationPath::new(
                &root,
                &identity.location().to_path_string(),
                &format!("{}.{extension}", identity.class_name()),
            ),
            interface_path: DestinationPath::new(
                &root,
                &identity.interface_location().to_path_string(),
                &format!("{}.{extension}", identity.interface_name()),
            ),
        }
    }
}
